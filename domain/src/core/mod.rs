//! Core domain primitives shared across the experiment modules

pub mod duration;
pub mod error;
