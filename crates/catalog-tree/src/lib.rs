//! Ordered container for catalog records.
//!
//! [`SearchTree`] is a plain binary search tree: no balancing, no deletion of
//! single values. It owns its nodes exclusively and hands out borrowed,
//! in-order iterators.

mod iter;
mod node;
mod tree;

pub use iter::Iter;
pub use tree::SearchTree;
