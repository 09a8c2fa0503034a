//! HashTable: a bucketed associative map with tree buckets.
//!
//! Keys hash into a bucket array; every occupied bucket holds an
//! [`RbTree`](crate::RbTree) of key/value entries ordered by the key
//! comparator, so lookups inside a colliding bucket stay O(log k). (OpenJDK's
//! HashMap chains entries and converts a bucket to a tree past a threshold;
//! this table keeps every bucket a tree.)
//!
//! The table starts at 16 buckets with a load factor of 0.75. When the entry
//! count reaches `capacity * load_factor`, the bucket array doubles and every
//! live entry rehashes into fresh buckets; the bucket index depends on the
//! capacity, so entries cannot simply be moved.
//!
//! Hashing and equality are injected: any [`BuildHasher`] supplies hashes,
//! and equality within a bucket is the key comparator's `Equal`. The two must
//! agree: keys that compare `Equal` must produce identical hashes.

use crate::compare::{Comparator, Natural};
use crate::error::{DatakitError, Result};
use crate::tree::RbTree;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher};
use std::mem;

/// Bucket count a table starts with.
pub const DEFAULT_INITIAL_CAPACITY: usize = 16;

/// Occupancy ratio that triggers doubling.
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// Sizing configuration for [`HashTable`].
#[derive(Debug, Clone)]
pub struct HashTableConfig {
    /// Initial bucket count. Must be nonzero.
    pub initial_capacity: usize,
    /// Occupancy ratio in `(0, 1)` that triggers doubling.
    pub load_factor: f64,
}

impl Default for HashTableConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }
}

impl HashTableConfig {
    fn validate(&self) -> Result<()> {
        if self.initial_capacity == 0 {
            return Err(DatakitError::configuration(
                "initial capacity must be nonzero",
            ));
        }
        if !self.load_factor.is_finite() || self.load_factor <= 0.0 || self.load_factor >= 1.0 {
            return Err(DatakitError::configuration(
                "load factor must be a finite value in (0, 1)",
            ));
        }
        Ok(())
    }
}

// A stored key/value pair. Buckets order entries by key alone.
struct Entry<K, V> {
    key: K,
    value: V,
}

// Lifts a key comparator to entries.
#[derive(Clone)]
struct EntryCmp<C>(C);

impl<K, V, C: Comparator<K>> Comparator<Entry<K, V>> for EntryCmp<C> {
    #[inline]
    fn compare(&self, a: &Entry<K, V>, b: &Entry<K, V>) -> Ordering {
        self.0.compare(&a.key, &b.key)
    }
}

type Bucket<K, V, C> = RbTree<Entry<K, V>, EntryCmp<C>>;

/// A hash map with red-black-tree buckets.
///
/// # Examples
///
/// ```rust
/// use datakit::HashTable;
///
/// let mut table = HashTable::new();
/// assert!(table.insert("a", 1));
/// assert!(table.insert("b", 2));
/// assert!(!table.insert("a", 9)); // key already present
///
/// assert_eq!(table.get(&"a"), Some(&1));
/// assert_eq!(table.remove(&"b"), Some(2));
/// assert!(!table.contains_key(&"b"));
/// ```
pub struct HashTable<K, V, C = Natural, S = ahash::RandomState>
where
    C: Comparator<K> + Clone,
    S: BuildHasher,
{
    buckets: Vec<Option<Bucket<K, V, C>>>,
    len: usize,
    load_factor: f64,
    cmp: C,
    hasher: S,
}

impl<K: Hash + Ord, V> HashTable<K, V, Natural, ahash::RandomState> {
    /// Create a table with the default configuration, natural key order, and
    /// a randomly seeded `ahash` hasher.
    pub fn new() -> Self {
        Self::with_config(HashTableConfig::default())
            .expect("default hash table configuration is valid")
    }

    /// Create a table with a custom [`HashTableConfig`].
    pub fn with_config(config: HashTableConfig) -> Result<Self> {
        Self::with_parts(config, Natural, ahash::RandomState::new())
    }
}

impl<K: Hash + Ord, V> Default for HashTable<K, V, Natural, ahash::RandomState> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C, S> HashTable<K, V, C, S>
where
    K: Hash,
    C: Comparator<K> + Clone,
    S: BuildHasher,
{
    /// Create a table from explicit configuration, key comparator, and hash
    /// state.
    ///
    /// The comparator and hasher must agree: keys comparing `Equal` must
    /// hash identically. The hasher must stay deterministic for the lifetime
    /// of the table.
    pub fn with_parts(config: HashTableConfig, cmp: C, hasher: S) -> Result<Self> {
        config.validate()?;
        let mut buckets = Vec::with_capacity(config.initial_capacity);
        buckets.resize_with(config.initial_capacity, || None);
        Ok(Self {
            buckets,
            len: 0,
            load_factor: config.load_factor,
            cmp,
            hasher,
        })
    }

    /// Number of stored entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the table holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current bucket count.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// The occupancy ratio that triggers doubling.
    #[inline]
    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    fn bucket_index(&self, key: &K) -> usize {
        let mut state = self.hasher.build_hasher();
        key.hash(&mut state);
        (state.finish() % self.buckets.len() as u64) as usize
    }

    // Entry count at which the next insert forces a resize.
    fn grow_threshold(&self) -> usize {
        (self.buckets.len() as f64 * self.load_factor) as usize
    }

    // Hang an entry in its bucket without any resize bookkeeping.
    fn insert_entry(&mut self, entry: Entry<K, V>) -> bool {
        let index = self.bucket_index(&entry.key);
        let cmp = self.cmp.clone();
        let bucket = &mut self.buckets[index];
        let tree = bucket.get_or_insert_with(|| RbTree::with_comparator(EntryCmp(cmp)));
        tree.insert(entry)
    }

    /// Insert a key/value pair. Returns `false`, dropping the pair, if the
    /// key is already present.
    ///
    /// A successful insert that reaches the load threshold doubles the
    /// bucket array (repeatedly, for small load factors) and rehashes every
    /// live entry, so `len < capacity * load_factor` holds on return.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        if !self.insert_entry(Entry { key, value }) {
            return false;
        }
        self.len += 1;
        while self.len >= self.grow_threshold() {
            self.grow();
        }
        true
    }

    // Double the bucket array and rehash everything. A plain move is not
    // enough: bucket indices are taken modulo the capacity.
    fn grow(&mut self) {
        let old_capacity = self.buckets.len();
        let new_capacity = old_capacity * 2;
        log::debug!(
            "hash table growing from {} to {} buckets ({} entries)",
            old_capacity,
            new_capacity,
            self.len
        );

        let old_buckets = mem::take(&mut self.buckets);
        self.buckets = Vec::with_capacity(new_capacity);
        self.buckets.resize_with(new_capacity, || None);

        for bucket in old_buckets.into_iter().flatten() {
            for entry in bucket.into_sorted_vec() {
                let fresh = self.insert_entry(entry);
                debug_assert!(fresh, "rehash repositions distinct keys");
            }
        }
    }

    /// Get the value stored under `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        let index = self.bucket_index(key);
        let tree = self.buckets[index].as_ref()?;
        let cmp = &self.cmp;
        tree.get_by(|entry| cmp.compare(key, &entry.key))
            .map(|entry| &entry.value)
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Remove `key`, returning its value, or `None` if it was not present.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let index = self.bucket_index(key);
        let cmp = self.cmp.clone();
        let tree = self.buckets[index].as_mut()?;
        let entry = tree.remove_by(|entry| cmp.compare(key, &entry.key))?;
        self.len -= 1;
        Some(entry.value)
    }
}

impl<K, V, C, S> fmt::Debug for HashTable<K, V, C, S>
where
    K: Hash + fmt::Debug,
    V: fmt::Debug,
    C: Comparator<K> + Clone,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for bucket in self.buckets.iter().flatten() {
            for entry in bucket.elements() {
                map.entry(&entry.key, &entry.value);
            }
        }
        map.finish()
    }
}
