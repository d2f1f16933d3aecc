use crate::entry::Entry;
use crate::treap::tree;

/// A struct representing an internal node of a treap.
pub struct Node<K, V> {
    pub entry: Entry<K, V>,
    pub priority: u32,
    pub left: tree::Tree<K, V>,
    pub right: tree::Tree<K, V>,
}

impl<K, V> Node<K, V> {
    pub fn new(key: K, value: V, priority: u32) -> Self {
        Node {
            entry: Entry { key, value },
            priority,
            left: None,
            right: None,
        }
    }

    pub fn is_heap_property_violated(&self, child: &tree::Tree<K, V>) -> bool {
        match child {
            Some(ref child_node) => child_node.priority > self.priority,
            None => false,
        }
    }
}
