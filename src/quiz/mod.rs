// src/quiz/mod.rs

//! Quiz core: storage encoding, audience projections, grading and the
//! one-attempt rule.

pub mod attempt;
pub mod codec;
pub mod projection;
pub mod scoring;
