use crate::avl_tree::tree;
use crate::error::{Error, Result};
use std::fmt;

/// An ordered map implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of the two child subtrees of any node differ by at most one. After a new key is linked
/// into the tree, heights are recomputed on the way back up the insertion path and a single or
/// double rotation is applied at the first ancestor that became unbalanced.
///
/// # Examples
/// ```
/// use balanced_maps::avl_tree::AvlMap;
/// use balanced_maps::Error;
///
/// let mut map = AvlMap::new();
/// map.put(0, 1);
/// map.put(3, 4);
///
/// assert_eq!(map.get(&0), Ok(&1));
/// assert_eq!(map.get(&1), Err(Error::KeyNotFound));
/// assert_eq!(map.len(), 2);
///
/// *map.get_mut(&0).unwrap() = 2;
/// assert_eq!(map.traverse(), vec![(&0, &2), (&3, &4)]);
/// ```
pub struct AvlMap<K, V> {
    root: tree::Tree<K, V>,
    len: usize,
}

impl<K, V> AvlMap<K, V>
where
    K: Ord,
{
    /// Constructs a new, empty `AvlMap<K, V>`.
    ///
    /// # Examples
    /// ```
    /// use balanced_maps::avl_tree::AvlMap;
    ///
    /// let map: AvlMap<u32, u32> = AvlMap::new();
    /// ```
    pub fn new() -> Self {
        AvlMap {
            root: None,
            len: 0,
        }
    }

    /// Inserts a key-value pair into the map. If the key already exists in the map, its value is
    /// overwritten in place and the old value is returned. Overwriting never restructures the
    /// tree.
    ///
    /// # Examples
    /// ```
    /// use balanced_maps::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// assert_eq!(map.put(1, 1), None);
    /// assert_eq!(map.get(&1), Ok(&1));
    /// assert_eq!(map.put(1, 2), Some(1));
    /// assert_eq!(map.get(&1), Ok(&2));
    /// ```
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let AvlMap { ref mut root, ref mut len } = self;
        let ret = match tree::insert(root, key, value) {
            tree::Insertion::Replaced(old_value) => Some(old_value),
            tree::Insertion::Linked(_) => {
                *len += 1;
                None
            },
        };

        #[cfg(feature = "consistency_check")]
        self.check_consistency();

        ret
    }

    /// Returns `true` if the map contains a particular key.
    ///
    /// # Examples
    /// ```
    /// use balanced_maps::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
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
    /// use balanced_maps::avl_tree::AvlMap;
    /// use balanced_maps::Error;
    ///
    /// let mut map = AvlMap::new();
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
    ///
    /// # Examples
    /// ```
    /// use balanced_maps::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.put(1, 1);
    /// *map.get_mut(&1).unwrap() = 2;
    /// assert_eq!(map.get(&1), Ok(&2));
    /// ```
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

    /// Clears the map, removing all values.
    ///
    /// # Examples
    /// ```
    /// use balanced_maps::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.put(1, 1);
    /// map.put(2, 2);
    /// map.clear();
    /// assert_eq!(map.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Returns the height of the tree. An empty map has height zero.
    pub fn height(&self) -> usize {
        tree::height(&self.root)
    }

    /// Returns every key-value pair of the map in ascending key order.
    ///
    /// # Examples
    /// ```
    /// use balanced_maps::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.put(3, 3);
    /// map.put(1, 1);
    /// assert_eq!(map.traverse(), vec![(&1, &1), (&3, &3)]);
    /// ```
    pub fn traverse(&self) -> Vec<(&K, &V)> {
        let mut entries = Vec::with_capacity(self.len);
        tree::traverse(&self.root, &mut entries);
        entries
    }

    /// Walks the whole tree and panics if it is malformed: keys out of order, a stale cached
    /// height, a balance factor outside of `[-1, 1]`, or a length that does not match the number
    /// of nodes.
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

impl<K, V> Default for AvlMap<K, V>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for AvlMap<K, V>
where
    K: Ord + fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.traverse()).finish()
    }
}
