//! Question routing and answering.

pub mod assistant;
pub mod rules;

pub use assistant::Assistant;
pub use rules::{Route, Router, Rule};
