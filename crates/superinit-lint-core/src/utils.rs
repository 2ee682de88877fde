//! Utility functions for rule implementations.

pub mod suppression;

#[doc(inline)]
pub use suppression::{annotations_suppress, ignore_list_contains, node_ignores, SUPPRESS_ALL};
