//! Short, unambiguous aliases for dot-separated identifiers.
//!
//! A [`ShortFormResolver`] is built once from a set of identifiers such as
//! `org.example.Widget` and lets a command line accept `widget` in place of
//! the full name whenever that last segment is unique.

pub mod error;
pub mod resolver;
pub mod segment;

pub use error::{Result, ShortFormError};
pub use resolver::ShortFormResolver;
