//! Git repository introspection

pub mod introspector;

pub use introspector::{GitError, GitIntrospector};
