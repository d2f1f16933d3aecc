use crate::avl_tree::tree;
use crate::entry::Entry;
use std::cmp;

/// A struct representing an internal node of an avl tree.
pub struct Node<K, V> {
    pub entry: Entry<K, V>,
    pub height: usize,
    pub left: tree::Tree<K, V>,
    pub right: tree::Tree<K, V>,
}

impl<K, V> Node<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Node {
            entry: Entry { key, value },
            height: 1,
            left: None,
            right: None,
        }
    }

    pub fn update(&mut self) {
        let Node { ref mut height, ref left, ref right, .. } = self;
        *height = cmp::max(tree::height(left), tree::height(right)) + 1;
    }

    pub fn balance(&self) -> isize {
        (tree::height(&self.left) as isize) - (tree::height(&self.right) as isize)
    }
}
