//! Dynamically resizing chained hash map with bounded text keys and values.
//!
//! # Layout
//!
//! ```text
//! buckets: [Chain; bucket_count]
//!   [0] -> ("k3","v3") -> ("k1","v1") -> None
//!   [1] -> None
//!   [2] -> ("k2","v2") -> None
//!   ...
//! ```
//!
//! A key always lives in bucket `hash(key) mod bucket_count`. Chains are
//! head-inserted, so each lists its keys newest first.
//!
//! # Sizing Policy
//!
//! - **Grow**: after inserting a *new* key, if `len >= bucket_count`, rehash
//!   into `2 × bucket_count` buckets. Updating an existing key never resizes.
//! - **Shrink**: after removing a key, if `len < bucket_count / 4` (integer
//!   division), rehash into `bucket_count / 2` buckets, never going below the
//!   configured floor. A key missing from an empty chain is a full no-op;
//!   a key missing from an occupied chain still runs the shrink check.
//!
//! The gap between the two thresholds means a grow is never immediately
//! undone by a shrink, which keeps add/remove amortized O(1).
//!
//! # Rehash Order
//!
//! A rehash visits the old buckets in ascending index order and each chain
//! from head to tail, re-adding every entry through the normal insertion
//! path. Because insertion is at the head, this order decides the exact
//! chain layout afterwards; it is part of the map's contract so that a
//! given hash function and operation history always produce the same
//! layout. [`DynamicHashMap::iter`] yields entries in the same order.
//!
//! # Handle Replacement
//!
//! [`add`](DynamicHashMap::add), [`delete`](DynamicHashMap::delete) and
//! [`resize`](DynamicHashMap::resize) consume the map and return the handle
//! to use afterwards; the moved-from binding can no longer be touched. The
//! `&mut self` forms ([`insert`](DynamicHashMap::insert),
//! [`remove`](DynamicHashMap::remove), [`resize_to`](DynamicHashMap::resize_to))
//! run the same algorithm in place.

use super::chain::{BucketNode, Chain};
use super::config::MapConfig;
use super::iter::Iter;
use crate::core::text::bounded;
use crate::error::Result;
use crate::hash::{bucket_index, HashFn, HashFunction};
use std::fmt;

#[cfg(feature = "metrics")]
use crate::metrics::MapMetrics;

/// Which way a policy-driven resize went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResizeDirection {
    Grow,
    Shrink,
}

impl ResizeDirection {
    fn as_str(self) -> &'static str {
        match self {
            Self::Grow => "grow",
            Self::Shrink => "shrink",
        }
    }
}

/// Chained hash map from bounded text keys to bounded text values.
///
/// # Type Parameters
///
/// * `H` - Hash function type, [`HashFn`] by default
///
/// # Examples
///
/// ```
/// use chainbloom::DynamicHashMap;
///
/// let map = DynamicHashMap::new(4, |s: &str| s.bytes().map(u64::from).sum()).unwrap();
/// let map = map.add("a", "1").add("b", "2").add("c", "3").add("d", "4");
///
/// // The 4th distinct key filled all 4 buckets
/// assert_eq!(map.bucket_count(), 8);
/// assert_eq!(map.find("a"), Some("1"));
/// assert_eq!(map.find("d"), Some("4"));
/// assert_eq!(map.find("z"), None);
/// ```
pub struct DynamicHashMap<H = HashFn> {
    buckets: Box<[Chain]>,
    len: usize,
    hash_function: H,
    config: MapConfig,
    #[cfg(feature = "metrics")]
    metrics: MapMetrics,
}

fn fresh_buckets(count: usize) -> Box<[Chain]> {
    (0..count).map(|_| Chain::default()).collect()
}

impl<H: HashFunction> DynamicHashMap<H> {
    /// Create an empty map with `bucket_count` buckets.
    ///
    /// Keys and values are bounded to
    /// [`DEFAULT_MAX_STRING_LEN`](crate::core::text::DEFAULT_MAX_STRING_LEN)
    /// bytes and the map may shrink down to a single bucket.
    ///
    /// # Errors
    ///
    /// Returns [`ChainBloomError::InvalidBucketCount`] if `bucket_count` is 0.
    pub fn new(bucket_count: usize, hash_function: H) -> Result<Self> {
        Self::with_config(
            MapConfig {
                initial_buckets: bucket_count,
                ..MapConfig::default()
            },
            hash_function,
        )
    }

    /// Create an empty map from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns the error of [`MapConfig::validate`].
    pub fn with_config(config: MapConfig, hash_function: H) -> Result<Self> {
        config.validate()?;

        tracing::debug!(
            buckets = config.initial_buckets,
            max_string_len = config.max_string_len,
            min_buckets = config.min_buckets,
            "created hash map"
        );

        Ok(Self {
            buckets: fresh_buckets(config.initial_buckets),
            len: 0,
            hash_function,
            config,
            #[cfg(feature = "metrics")]
            metrics: MapMetrics::default(),
        })
    }

    /// Number of distinct keys stored.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` if no key is stored.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current number of buckets.
    #[must_use]
    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Ratio of stored keys to buckets. Always below 1 between operations.
    #[must_use]
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// The configuration this map was built with.
    #[must_use]
    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Maximum stored length of keys and values, in bytes.
    #[must_use]
    pub fn max_string_len(&self) -> usize {
        self.config.max_string_len
    }

    /// The map's hash function.
    #[must_use]
    pub fn hash_function(&self) -> &H {
        &self.hash_function
    }

    /// Bucket a (bounded) key belongs to under the current bucket count.
    #[inline]
    fn bucket_of(&self, key: &str) -> usize {
        bucket_index(&self.hash_function, key, self.buckets.len())
    }

    /// Add a key/value pair, consuming the map and returning the handle to
    /// use from now on.
    ///
    /// An existing key has its value overwritten in place; otherwise the
    /// pair is linked at the head of its chain and the map grows if it is
    /// at capacity. See [`insert`](Self::insert) for the in-place form.
    #[must_use = "the map is moved into the returned handle"]
    pub fn add(mut self, key: &str, value: &str) -> Self {
        self.insert(key, value);
        self
    }

    /// Remove a key, consuming the map and returning the handle to use from
    /// now on. Removing an absent key leaves every entry in place; the map
    /// may still shrink if the key's chain is occupied.
    #[must_use = "the map is moved into the returned handle"]
    pub fn delete(mut self, key: &str) -> Self {
        self.remove(key);
        self
    }

    /// Rehash into `new_bucket_count` buckets, consuming the map and
    /// returning the resized one.
    ///
    /// The count is raised to the configured floor if it is below it.
    /// Entries are re-added through the normal insertion path, so asking
    /// for fewer buckets than keys makes the map grow again during the
    /// rehash.
    #[must_use = "the map is moved into the returned handle"]
    pub fn resize(mut self, new_bucket_count: usize) -> Self {
        self.resize_to(new_bucket_count);
        self
    }

    /// Insert or update a pair in place.
    ///
    /// Both strings are truncated to [`max_string_len`](Self::max_string_len)
    /// bytes first.
    ///
    /// # Returns
    ///
    /// The previous value if the key was present, `None` for a new key.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainbloom::DynamicHashMap;
    ///
    /// let mut map = DynamicHashMap::new(8, |s: &str| s.len() as u64).unwrap();
    /// assert_eq!(map.insert("k", "old"), None);
    /// assert_eq!(map.insert("k", "new"), Some("old".to_string()));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: &str, value: &str) -> Option<String> {
        let key = bounded(key, self.config.max_string_len);
        let value = bounded(value, self.config.max_string_len);
        let idx = self.bucket_of(key);

        if let Some(node) = self.buckets[idx].find_mut(key) {
            #[cfg(feature = "metrics")]
            self.metrics.record_update();

            return Some(std::mem::replace(&mut node.value, value.to_owned()));
        }

        self.buckets[idx].push_front(BucketNode::boxed(key, value));
        self.len += 1;

        #[cfg(feature = "metrics")]
        self.metrics.record_insert();

        self.grow_if_full();
        None
    }

    /// Look up the value stored for `key`.
    ///
    /// The key is bounded the same way as on insertion, so an over-long key
    /// finds the entry it created.
    #[must_use]
    pub fn find(&self, key: &str) -> Option<&str> {
        let key = bounded(key, self.config.max_string_len);
        let found = self.buckets[self.bucket_of(key)]
            .find(key)
            .map(|node| node.value.as_str());

        #[cfg(feature = "metrics")]
        self.metrics.record_lookup(found.is_some());

        found
    }

    /// `true` if `key` is stored.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Remove `key` in place.
    ///
    /// # Returns
    ///
    /// The removed value, or `None` if the key was absent. An absent key
    /// whose bucket is empty leaves the map untouched; one whose bucket is
    /// occupied still runs the shrink check.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainbloom::DynamicHashMap;
    ///
    /// let mut map = DynamicHashMap::new(8, |s: &str| s.len() as u64).unwrap();
    /// map.insert("k", "v");
    /// assert_eq!(map.remove("k"), Some("v".to_string()));
    /// assert_eq!(map.remove("k"), None);
    /// ```
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let key = bounded(key, self.config.max_string_len);
        let idx = self.bucket_of(key);

        if self.buckets[idx].is_empty() {
            return None;
        }

        let removed = self.buckets[idx].remove(key);
        if removed.is_some() {
            self.len -= 1;

            #[cfg(feature = "metrics")]
            self.metrics.record_remove();
        }

        // Runs on a miss too, as long as the chain was occupied
        self.shrink_if_sparse();

        removed.map(|node| {
            let BucketNode { value, .. } = *node;
            value
        })
    }

    /// Rehash in place into `new_bucket_count` buckets (at least the
    /// configured floor).
    pub fn resize_to(&mut self, new_bucket_count: usize) {
        tracing::trace!(
            from = self.buckets.len(),
            to = new_bucket_count,
            len = self.len,
            "explicit resize"
        );
        self.rehash(new_bucket_count);
    }

    fn grow_if_full(&mut self) {
        let buckets = self.buckets.len();
        if self.len >= buckets {
            self.resize_with_policy(buckets.saturating_mul(2), ResizeDirection::Grow);
        }
    }

    fn shrink_if_sparse(&mut self) {
        let buckets = self.buckets.len();
        if self.len < buckets / 4 {
            let target = (buckets / 2).max(self.config.min_buckets);
            if target < buckets {
                self.resize_with_policy(target, ResizeDirection::Shrink);
            }
        }
    }

    fn resize_with_policy(&mut self, target: usize, direction: ResizeDirection) {
        tracing::debug!(
            direction = direction.as_str(),
            from = self.buckets.len(),
            to = target,
            len = self.len,
            "resizing bucket array"
        );

        #[cfg(feature = "metrics")]
        match direction {
            ResizeDirection::Grow => self.metrics.record_grow(),
            ResizeDirection::Shrink => self.metrics.record_shrink(),
        }

        self.rehash(target);
    }

    /// Move every entry into a fresh bucket array of `new_bucket_count`.
    ///
    /// Old buckets are visited in ascending index order, each chain head to
    /// tail, and every node goes back in through the insertion path
    /// (including its growth check). Nodes are relinked rather than
    /// reallocated; keys are unique, so the update branch of insertion can
    /// never apply here.
    fn rehash(&mut self, new_bucket_count: usize) {
        let new_bucket_count = new_bucket_count.max(self.config.min_buckets);
        let old = std::mem::replace(&mut self.buckets, fresh_buckets(new_bucket_count));
        let moved = self.len;
        self.len = 0;

        for mut chain in old.into_vec() {
            while let Some(node) = chain.pop_front() {
                self.relink(node);
            }
        }

        debug_assert_eq!(self.len, moved);

        #[cfg(feature = "metrics")]
        self.metrics.record_rehashed(moved);

        tracing::trace!(
            buckets = self.buckets.len(),
            moved,
            "rehash complete"
        );
    }

    /// Insertion path for a node known not to be in the map.
    fn relink(&mut self, node: Box<BucketNode>) {
        let idx = self.bucket_of(&node.key);
        self.buckets[idx].push_front(node);
        self.len += 1;
        self.grow_if_full();
    }

    /// Iterate over `(key, value)` pairs in rehash order: ascending bucket
    /// index, then head to tail within each bucket.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.buckets, self.len)
    }

    /// Keys in rehash order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(|(key, _)| key)
    }

    /// Values in rehash order.
    pub fn values(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(|(_, value)| value)
    }

    /// Number of entries in bucket `bucket`, or `None` past the last bucket.
    #[must_use]
    pub fn chain_len(&self, bucket: usize) -> Option<usize> {
        self.buckets.get(bucket).map(Chain::len)
    }

    /// Entry count of every bucket, in bucket order.
    ///
    /// Walks every chain: O(buckets + len).
    #[must_use]
    pub fn chain_lengths(&self) -> Vec<usize> {
        self.buckets.iter().map(Chain::len).collect()
    }

    /// Length of the longest chain; the worst-case lookup cost.
    ///
    /// Chains do not cache their length, so this walks every chain and
    /// costs O(buckets + len). Meant for introspection, not hot paths.
    #[must_use]
    pub fn longest_chain(&self) -> usize {
        self.buckets.iter().map(Chain::len).max().unwrap_or(0)
    }

    /// Number of buckets holding no entry.
    #[must_use]
    pub fn empty_buckets(&self) -> usize {
        self.buckets.iter().filter(|chain| chain.is_empty()).count()
    }

    /// Operation counters for this map.
    #[cfg(feature = "metrics")]
    #[must_use]
    pub fn metrics(&self) -> &MapMetrics {
        &self.metrics
    }
}

impl<H: HashFunction> Default for DynamicHashMap<H>
where
    H: Default,
{
    fn default() -> Self {
        Self {
            buckets: fresh_buckets(MapConfig::default().initial_buckets),
            len: 0,
            hash_function: H::default(),
            config: MapConfig::default(),
            #[cfg(feature = "metrics")]
            metrics: MapMetrics::default(),
        }
    }
}

impl<H: Clone> Clone for DynamicHashMap<H> {
    fn clone(&self) -> Self {
        Self {
            buckets: self.buckets.clone(),
            len: self.len,
            hash_function: self.hash_function.clone(),
            config: self.config,
            #[cfg(feature = "metrics")]
            metrics: self.metrics.clone(),
        }
    }
}

impl<H: HashFunction, K: AsRef<str>, V: AsRef<str>> Extend<(K, V)> for DynamicHashMap<H> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key.as_ref(), value.as_ref());
        }
    }
}

impl<'a, H: HashFunction> IntoIterator for &'a DynamicHashMap<H> {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<H: HashFunction> fmt::Debug for DynamicHashMap<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<H: HashFunction> PartialEq for DynamicHashMap<H> {
    /// Two maps are equal when they hold the same pairs, whatever their
    /// bucket layout.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && self
                .iter()
                .all(|(key, value)| other.find(key) == Some(value))
    }
}
