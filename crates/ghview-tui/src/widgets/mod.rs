//! Reusable widgets.

pub mod search_box;
pub mod tree;
