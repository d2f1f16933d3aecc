use crate::entry::Entry;
use crate::treap::node::Node;
use log::trace;
use std::cmp::{self, Ordering};
use std::mem;

pub type Tree<K, V> = Option<Box<Node<K, V>>>;

enum RemovalCase {
    RemoveNode,
    RotateLeft,
    RotateRight,
}

fn rotate_left<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    trace!("treap rotate left at priority {}", node.priority);
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    child.left = Some(node);
    child
}

fn rotate_right<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    trace!("treap rotate right at priority {}", node.priority);
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    child.right = Some(node);
    child
}

pub fn insert<K, V>(tree: &mut Tree<K, V>, new_node: Node<K, V>) -> Option<V>
where
    K: Ord,
{
    let mut node = match tree.take() {
        Some(node) => node,
        None => {
            *tree = Some(Box::new(new_node));
            return None;
        },
    };

    // Only the child on the insertion path can outrank its parent, so one rotation per level
    // restores the heap invariant.
    let ret = match new_node.entry.key.cmp(&node.entry.key) {
        Ordering::Less => {
            let ret = insert(&mut node.left, new_node);
            if node.is_heap_property_violated(&node.left) {
                node = rotate_right(node);
            }
            ret
        },
        Ordering::Greater => {
            let ret = insert(&mut node.right, new_node);
            if node.is_heap_property_violated(&node.right) {
                node = rotate_left(node);
            }
            ret
        },
        Ordering::Equal => Some(mem::replace(&mut node.entry.value, new_node.entry.value)),
    };

    *tree = Some(node);
    ret
}

fn get_removal_case<K, V>(node: &Node<K, V>) -> RemovalCase {
    match (&node.left, &node.right) {
        (Some(left_node), Some(right_node)) => {
            if left_node.priority > right_node.priority {
                RemovalCase::RotateRight
            } else {
                RemovalCase::RotateLeft
            }
        },
        _ => RemovalCase::RemoveNode,
    }
}

pub fn remove<K, V>(tree: &mut Tree<K, V>, key: &K) -> Option<Entry<K, V>>
where
    K: Ord,
{
    let mut node = tree.take()?;

    let ret = match key.cmp(&node.entry.key) {
        Ordering::Less => remove(&mut node.left, key),
        Ordering::Greater => remove(&mut node.right, key),
        Ordering::Equal => match get_removal_case(&node) {
            RemovalCase::RotateRight => {
                node = rotate_right(node);
                remove(&mut node.right, key)
            },
            RemovalCase::RotateLeft => {
                node = rotate_left(node);
                remove(&mut node.left, key)
            },
            RemovalCase::RemoveNode => {
                trace!("unlinking treap node with priority {}", node.priority);
                let Node { entry, left, right, .. } = *node;
                *tree = left.or(right);
                return Some(entry);
            },
        },
    };

    *tree = Some(node);
    ret
}

pub fn get<'a, K, V>(tree: &'a Tree<K, V>, key: &K) -> Option<&'a Entry<K, V>>
where
    K: Ord,
{
    let mut curr = tree;
    while let Some(node) = curr {
        match key.cmp(&node.entry.key) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => curr = &node.right,
            Ordering::Equal => return Some(&node.entry),
        }
    }
    None
}

pub fn get_mut<'a, K, V>(tree: &'a mut Tree<K, V>, key: &K) -> Option<&'a mut Entry<K, V>>
where
    K: Ord,
{
    tree.as_mut().and_then(|node| {
        match key.cmp(&node.entry.key) {
            Ordering::Less => get_mut(&mut node.left, key),
            Ordering::Greater => get_mut(&mut node.right, key),
            Ordering::Equal => Some(&mut node.entry),
        }
    })
}

pub fn height<K, V>(tree: &Tree<K, V>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => cmp::max(height(&node.left), height(&node.right)) + 1,
    }
}

pub fn traverse<'a, K, V>(tree: &'a Tree<K, V>, entries: &mut Vec<(&'a K, &'a V)>) {
    if let Some(ref node) = tree {
        traverse(&node.left, entries);
        entries.push((&node.entry.key, &node.entry.value));
        traverse(&node.right, entries);
    }
}

// Returns the number of nodes in the tree.
pub fn check_consistency<K, V>(tree: &Tree<K, V>) -> usize
where
    K: Ord,
{
    match tree {
        None => 0,
        Some(ref node) => {
            if let Some(ref left_node) = node.left {
                assert!(left_node.entry < node.entry, "left child is not less than its parent");
            }
            if let Some(ref right_node) = node.right {
                assert!(right_node.entry > node.entry, "right child is not greater than its parent");
            }
            assert!(!node.is_heap_property_violated(&node.left), "left child outranks its parent");
            assert!(!node.is_heap_property_violated(&node.right), "right child outranks its parent");

            check_consistency(&node.left) + check_consistency(&node.right) + 1
        },
    }
}
