//! Ordered maps backed by self-balancing binary search trees.
//!
//! Two variants solve the same contract with different balancing strategies:
//!
//! - [`AvlMap`](avl_tree/struct.AvlMap.html) keeps the heights of the two child subtrees of every
//!   node within one of each other using deterministic rotations.
//! - [`TreapMap`](treap/struct.TreapMap.html) assigns every node a random priority and keeps the
//!   tree a max-heap on those priorities, which balances it in expectation.
//!
//! Lookups of absent keys are reported as [`Error::KeyNotFound`](enum.Error.html).

mod entry;
mod error;
pub mod avl_tree;
pub mod treap;

pub use crate::error::{Error, Result};
