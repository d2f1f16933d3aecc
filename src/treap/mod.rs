//! Probabilistic binary search tree where each node also maintains the heap invariant on a
//! randomly generated priority.

mod map;
mod node;
mod tree;

pub use self::map::TreapMap;
