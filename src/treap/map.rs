use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::treap::node::Node;
use crate::treap::tree;
use log::debug;
use rand::{Rng, SeedableRng, XorShiftRng};
use std::fmt;

/// An ordered map implemented by a treap.
///
/// A treap is a tree that satisfies both the binary search tree property and a heap property. Each
/// node has a key, a value, and a priority. The key of any node is greater than all keys in its
/// left subtree and less than all keys occuring in its right subtree. The priority of a node is
/// greater than or equal to the priority of all nodes in its subtrees. By randomly generating
/// priorities, the expected height of the tree is proportional to the logarithm of the number of
/// keys.
///
/// Priorities are drawn from the generator `R` the map was constructed with. Maps built with
/// `with_seed` or `with_rng` have a reproducible shape.
///
/// # Examples
/// ```
/// use balanced_maps::treap::TreapMap;
/// use balanced_maps::Error;
///
/// let mut map = TreapMap::new();
/// map.put(0, 1);
/// map.put(3, 4);
///
/// assert_eq!(map.get(&0), Ok(&1));
/// assert_eq!(map.get(&1), Err(Error::KeyNotFound));
/// assert_eq!(map.len(), 2);
///
/// *map.get_mut(&0).unwrap() = 2;
/// assert_eq!(map.remove(&0), Some((0, 2)));
/// assert_eq!(map.remove(&1), None);
/// ```
pub struct TreapMap<K, V, R = XorShiftRng> {
    root: tree::Tree<K, V>,
    rng: R,
    len: usize,
}

impl<K, V> TreapMap<K, V>
where
    K: Ord,
{
    /// Constructs a new, empty `TreapMap<K, V>` whose priorities come from a randomly seeded
    /// generator.
    ///
    /// # Examples
    /// ```
    /// use balanced_maps::treap::TreapMap;
    ///
    /// let map: TreapMap<u32, u32> = TreapMap::new();
    /// ```
    pub fn new() -> Self {
        debug!("constructing treap with a randomly seeded generator");
        TreapMap::from_rng(rand::weak_rng())
    }

    /// Constructs a new, empty `TreapMap<K, V>` whose priorities come from an `XorShiftRng`
    /// seeded with `seed`. Two maps built from the same seed and fed the same operations have the
    /// same shape.
    ///
    /// # Panics
    /// Panics if every word of `seed` is zero.
    ///
    /// # Examples
    /// ```
    /// use balanced_maps::treap::TreapMap;
    ///
    /// let mut map = TreapMap::with_seed([1, 2, 3, 4]);
    /// map.put(1, 1);
    /// assert_eq!(map.get(&1), Ok(&1));
    /// ```
    pub fn with_seed(seed: [u32; 4]) -> Self {
        debug!("constructing treap with seed {:?}", seed);
        TreapMap::from_rng(XorShiftRng::from_seed(seed))
    }
}

impl<K, V, R> TreapMap<K, V, R>
where
    K: Ord,
    R: Rng,
{
    /// Constructs a new, empty `TreapMap<K, V, R>` that draws priorities from `rng`.
    ///
    /// # Examples
    /// ```
    /// use balanced_maps::treap::TreapMap;
    /// use rand::ChaChaRng;
    ///
    /// let mut map = TreapMap::with_rng(ChaChaRng::new_unseeded());
    /// map.put("a", 1);
    /// assert_eq!(map.get(&"a"), Ok(&1));
    /// ```
    pub fn with_rng(rng: R) -> Self {
        debug!("constructing treap with a caller-supplied generator");
        TreapMap::from_rng(rng)
    }

    fn from_rng(rng: R) -> Self {
        TreapMap {
            root: None,
            rng,
            len: 0,
        }
    }

    /// Inserts a key-value pair into the map. If the key already exists in the map, its value is
    /// overwritten in place and the old value is returned. Overwriting never restructures the
    /// tree.
    ///
    /// # Examples
    /// ```
    /// use balanced_maps::treap::TreapMap;
    ///
    /// let mut map = TreapMap::new();
    /// assert_eq!(map.put(1, 1), None);
    /// assert_eq!(map.get(&1), Ok(&1));
    /// assert_eq!(map.put(1, 2), Some(1));
    /// assert_eq!(map.get(&1), Ok(&2));
    /// ```
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let TreapMap { ref mut root, ref mut rng, ref mut len } = self;
        let new_node = Node::new(key, value, rng.next_u32());
        let ret = tree::insert(root, new_node);
        if ret.is_none() {
            *len += 1;
        }

        #[cfg(feature = "consistency_check")]
        self.check_consistency();

        ret
    }

    /// Removes a key-value pair from the map. If the key exists in the map, the associated
    /// key-value pair is returned. Otherwise the map is left unchanged and `None` is returned.
    ///
    /// # Examples
    /// ```
    /// use balanced_maps::treap::TreapMap;
    ///
    /// let mut map = TreapMap::new();
    /// map.put(1, 1);
    /// assert_eq!(map.remove(&1), Some((1, 1)));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<(K, V)> {
        let TreapMap { ref mut root, ref mut len, .. } = self;
        let ret = tree::remove(root, key).map(|entry| {
            *len -= 1;
            let Entry { key, value } = entry;
            (key, value)
        });

        #[cfg(feature = "consistency_check")]
        self.check_consistency();

        ret
    }

    /// Returns `true` if the map contains a particular key.
    ///
    /// # Examples
    /// ```
    /// use balanced_maps::treap::TreapMap;
    ///
    /// let mut map = TreapMap::new();
    /// map.put(1, 1);
    /// assert!(!map.contains_key(&0));
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_ok()
    }

    /// Returns an immutable reference to the value associated with a particular key. Returns
    /// `Error::KeyNotFound` if the key does not exist in the map.
    ///
    /// # Examples
    /// ```
    /// use balanced_maps::treap::TreapMap;
    /// use balanced_maps::Error;
    ///
    /// let mut map = TreapMap::new();
    /// map.put(1, 1);
    /// assert_eq!(map.get(&0), Err(Error::KeyNotFound));
    /// assert_eq!(map.get(&1), Ok(&1));
    /// ```
    pub fn get(&self, key: &K) -> Result<&V> {
        tree::get(&self.root, key)
            .map(|entry| &entry.value)
            .ok_or(Error::KeyNotFound)
    }

    /// Returns a mutable reference to the value associated with a particular key. Returns
    /// `Error::KeyNotFound` if the key does not exist in the map.
    pub fn get_mut(&mut self, key: &K) -> Result<&mut V> {
        tree::get_mut(&mut self.root, key)
            .map(|entry| &mut entry.value)
            .ok_or(Error::KeyNotFound)
    }

    /// Returns the number of elements in the map.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears the map, removing all values. The generator keeps its state.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Returns the height of the tree. An empty map has height zero. Unlike an avl tree, a treap
    /// does not cache heights, so this walks every node.
    pub fn height(&self) -> usize {
        tree::height(&self.root)
    }

    /// Returns every key-value pair of the map in ascending key order.
    ///
    /// # Examples
    /// ```
    /// use balanced_maps::treap::TreapMap;
    ///
    /// let mut map = TreapMap::new();
    /// map.put(3, 3);
    /// map.put(1, 1);
    /// assert_eq!(map.traverse(), vec![(&1, &1), (&3, &3)]);
    /// ```
    pub fn traverse(&self) -> Vec<(&K, &V)> {
        let mut entries = Vec::with_capacity(self.len);
        tree::traverse(&self.root, &mut entries);
        entries
    }

    /// Walks the whole tree and panics if it is malformed: keys out of order, a child with a
    /// higher priority than its parent, or a length that does not match the number of nodes.
    pub fn check_consistency(&self) {
        let num_nodes = tree::check_consistency(&self.root);
        assert_eq!(num_nodes, self.len, "stored length does not match number of nodes");

        let entries = self.traverse();
        assert!(
            entries.windows(2).all(|pair| pair[0].0 < pair[1].0),
            "in-order traversal is not strictly ascending",
        );
    }
}

impl<K, V> Default for TreapMap<K, V>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, R> fmt::Debug for TreapMap<K, V, R>
where
    K: Ord + fmt::Debug,
    V: fmt::Debug,
    R: Rng,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.traverse()).finish()
    }
}
