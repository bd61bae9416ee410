//! Answer text and LLM context rendering

pub mod aggregate;
pub mod answer;

pub use aggregate::{aggregate, truncate_chars};
