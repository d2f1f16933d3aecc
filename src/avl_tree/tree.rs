use crate::avl_tree::node::Node;
use crate::entry::Entry;
use log::trace;
use std::cmp::Ordering;
use std::mem;

pub type Tree<K, V> = Option<Box<Node<K, V>>>;

/// Outcome of inserting a key into a subtree.
pub enum Insertion<V> {
    /// The key was already present. Carries the value it held before the overwrite.
    Replaced(V),
    /// A new node was linked into the subtree. Carries how the new key compared against the key
    /// at the root of the subtree, or `Ordering::Equal` if the new node is that root.
    Linked(Ordering),
}

pub fn height<K, V>(tree: &Tree<K, V>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.height,
    }
}

fn rotate_left<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    trace!("avl rotate left at height {}", node.height);
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    trace!("avl rotate right at height {}", node.height);
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

// `below` is how the inserted key compared against the key of the child on the insertion path.
fn balance<K, V>(mut node: Box<Node<K, V>>, below: Ordering) -> Box<Node<K, V>> {
    node.update();

    let balance = node.balance();
    if balance > 1 {
        match below {
            Ordering::Less => rotate_right(node),
            Ordering::Greater => {
                node.left = node.left.take().map(rotate_left);
                rotate_right(node)
            },
            Ordering::Equal => unreachable!(),
        }
    } else if balance < -1 {
        match below {
            Ordering::Greater => rotate_left(node),
            Ordering::Less => {
                node.right = node.right.take().map(rotate_right);
                rotate_left(node)
            },
            Ordering::Equal => unreachable!(),
        }
    } else {
        node
    }
}

pub fn insert<K, V>(tree: &mut Tree<K, V>, key: K, value: V) -> Insertion<V>
where
    K: Ord,
{
    let mut node = match tree.take() {
        Some(node) => node,
        None => {
            *tree = Some(Box::new(Node::new(key, value)));
            return Insertion::Linked(Ordering::Equal);
        },
    };

    let ordering = key.cmp(&node.entry.key);
    let ret = match ordering {
        Ordering::Less => insert(&mut node.left, key, value),
        Ordering::Greater => insert(&mut node.right, key, value),
        Ordering::Equal => Insertion::Replaced(mem::replace(&mut node.entry.value, value)),
    };

    match ret {
        Insertion::Replaced(old_value) => {
            *tree = Some(node);
            Insertion::Replaced(old_value)
        },
        // A rotation restores the height the subtree had before the insertion, so ancestors of a
        // rotated node never need the comparison returned from here.
        Insertion::Linked(below) => {
            *tree = Some(balance(node, below));
            Insertion::Linked(ordering)
        },
    }
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

            let left_len = check_consistency(&node.left);
            let right_len = check_consistency(&node.right);

            let left_height = height(&node.left);
            let right_height = height(&node.right);
            assert_eq!(node.height, left_height.max(right_height) + 1, "stale height");
            assert!(
                left_height <= right_height + 1 && right_height <= left_height + 1,
                "balance factor out of range",
            );

            left_len + right_len + 1
        },
    }
}
