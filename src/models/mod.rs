// src/models/mod.rs

pub mod content;
pub mod course;
pub mod quiz;
pub mod result;
pub mod user;
