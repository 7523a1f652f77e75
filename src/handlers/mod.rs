// src/handlers/mod.rs

pub mod admin;
pub mod auth;
pub mod content;
pub mod course;
pub mod quiz;
