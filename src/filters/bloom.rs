//! Bloom filter over caller-supplied hash functions.
//!
//! The filter is a fixed array of `m` bits plus an ordered list of `k` hash
//! functions chosen by the caller. Nothing is derived or mixed internally:
//! function `h_i` addresses bit `h_i(key) mod m`, exactly.
//!
//! # Operations
//!
//! - **Add**: for each function in order, set bit `h_i(key) mod m`
//! - **Check**: for each function in order, test bit `h_i(key) mod m`; the
//!   first clear bit answers "definitely absent"
//!
//! Both run in O(k). Bits are never cleared, so once a key was added every
//! later check of it answers "possibly present": no false negatives.
//! False positives are expected and become more frequent as the array fills,
//! roughly following `(1 − e^(−kn/m))^k`.
//!
//! There is no removal and no enumeration of members.
//!
//! # Examples
//!
//! ```
//! use chainbloom::BloomFilter;
//! use chainbloom::hash::HashFn;
//!
//! let funcs: [HashFn; 2] = [
//!     |s| s.bytes().map(u64::from).sum(),
//!     |s| s.bytes().fold(7, |h, b| h.wrapping_mul(31).wrapping_add(u64::from(b))),
//! ];
//! let mut filter = BloomFilter::new(1024, &funcs).unwrap();
//!
//! filter.add("hello");
//! filter.add("world");
//!
//! assert!(filter.check("hello"));
//! assert!(filter.check("world"));
//! assert!(!filter.check("goodbye"));
//! ```

#![allow(clippy::module_name_repetitions)]

use crate::core::bitvec::BitArray;
use crate::core::params::expected_fp_rate;
use crate::error::Result;
use crate::hash::{bucket_index, HashFn, HashFunction};
use std::fmt;

#[cfg(feature = "metrics")]
use crate::metrics::FilterMetrics;

/// Probabilistic set membership filter.
///
/// # Type Parameters
///
/// * `H` - Hash function type, [`HashFn`] by default. Every function in the
///   list has the same type; use function pointers (or boxed closures) to mix
///   different functions.
///
/// # Memory Layout
///
/// ```text
/// BloomFilter {
///     bits: BitArray,          // ⌈m/8⌉ bytes, LSB-first
///     hash_functions: Vec<H>,  // owned copy of the caller's list
/// }
/// ```
///
/// # Thread Safety
///
/// Not synchronized. `add` takes `&mut self`; share behind a lock if needed.
#[derive(Clone)]
pub struct BloomFilter<H = HashFn> {
    bits: BitArray,
    hash_functions: Vec<H>,
    #[cfg(feature = "metrics")]
    metrics: FilterMetrics,
}

impl<H: HashFunction + Clone> BloomFilter<H> {
    /// Create a filter with `bit_count` zero bits and a copy of
    /// `hash_functions`.
    ///
    /// The filter owns its copy: the caller's slice may be dropped or reused
    /// right after this returns.
    ///
    /// An empty function list is accepted. Such a filter sets no bits and
    /// reports every key as possibly present.
    ///
    /// # Errors
    ///
    /// Returns [`ChainBloomError::InvalidFilterSize`](crate::ChainBloomError::InvalidFilterSize)
    /// if `bit_count` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainbloom::BloomFilter;
    /// use chainbloom::hash::HashFn;
    ///
    /// let by_len: HashFn = |s| s.len() as u64;
    /// let filter = BloomFilter::new(16, &[by_len]).unwrap();
    /// assert_eq!(filter.bit_count(), 16);
    /// assert_eq!(filter.hash_count(), 1);
    /// ```
    pub fn new(bit_count: usize, hash_functions: &[H]) -> Result<Self> {
        Self::with_hash_functions(bit_count, hash_functions.to_vec())
    }
}

impl<H: HashFunction> BloomFilter<H> {
    /// Create a filter taking ownership of an already-built function list.
    ///
    /// # Errors
    ///
    /// Returns [`ChainBloomError::InvalidFilterSize`](crate::ChainBloomError::InvalidFilterSize)
    /// if `bit_count` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainbloom::BloomFilter;
    ///
    /// let seeds = [3u64, 5, 11];
    /// let funcs: Vec<Box<dyn Fn(&str) -> u64>> = seeds
    ///     .iter()
    ///     .map(|&seed| {
    ///         Box::new(move |s: &str| {
    ///             s.bytes().fold(seed, |h, b| h.wrapping_mul(seed).wrapping_add(u64::from(b)))
    ///         }) as Box<dyn Fn(&str) -> u64>
    ///     })
    ///     .collect();
    ///
    /// let mut filter = BloomFilter::with_hash_functions(256, funcs).unwrap();
    /// filter.add("seeded");
    /// assert!(filter.check("seeded"));
    /// ```
    pub fn with_hash_functions(bit_count: usize, hash_functions: Vec<H>) -> Result<Self> {
        let bits = BitArray::new(bit_count)?;

        tracing::debug!(
            bit_count,
            hash_count = hash_functions.len(),
            bytes = bits.byte_len(),
            "created bloom filter"
        );

        Ok(Self {
            bits,
            hash_functions,
            #[cfg(feature = "metrics")]
            metrics: FilterMetrics::default(),
        })
    }

    /// Number of addressable bits (m).
    #[must_use]
    #[inline]
    pub fn bit_count(&self) -> usize {
        self.bits.len()
    }

    /// Number of hash functions (k).
    #[must_use]
    #[inline]
    pub fn hash_count(&self) -> usize {
        self.hash_functions.len()
    }

    /// The filter's own copy of its hash functions, in evaluation order.
    #[must_use]
    pub fn hash_functions(&self) -> &[H] {
        &self.hash_functions
    }

    /// Read-only view of the bit array.
    #[must_use]
    pub fn bits(&self) -> &BitArray {
        &self.bits
    }

    /// Bit positions `key` maps to, one per hash function, in function order.
    ///
    /// Positions may repeat when two functions agree on a key.
    ///
    /// ```
    /// use chainbloom::BloomFilter;
    /// use chainbloom::hash::HashFn;
    ///
    /// let funcs: [HashFn; 2] = [|s| s.len() as u64, |s| s.len() as u64 * 7];
    /// let filter = BloomFilter::new(16, &funcs).unwrap();
    /// assert_eq!(filter.indices("cat").collect::<Vec<_>>(), vec![3, 5]);
    /// ```
    pub fn indices<'a>(&'a self, key: &'a str) -> impl Iterator<Item = usize> + 'a {
        let m = self.bits.len();
        self.hash_functions
            .iter()
            .map(move |h| bucket_index(h, key, m))
    }

    /// Add a key: set bit `h_i(key) mod m` for every function.
    ///
    /// Adding the same key twice leaves the bit array unchanged the second
    /// time.
    pub fn add(&mut self, key: &str) {
        let m = self.bits.len();
        for h in &self.hash_functions {
            self.bits.set(bucket_index(h, key, m));
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_add();
    }

    /// Check whether a key may have been added.
    ///
    /// # Returns
    ///
    /// - `false`: the key was definitely never added
    /// - `true`: the key was possibly added (or this is a false positive)
    ///
    /// Evaluation stops at the first clear bit, so later functions are not
    /// called for keys that miss early.
    #[must_use]
    pub fn check(&self, key: &str) -> bool {
        let m = self.bits.len();
        let present = self
            .hash_functions
            .iter()
            .all(|h| self.bits.get(bucket_index(h, key, m)));

        #[cfg(feature = "metrics")]
        self.metrics.record_check(present);

        present
    }

    /// Add every key from an iterator.
    ///
    /// ```
    /// use chainbloom::BloomFilter;
    /// use chainbloom::hash::HashFn;
    ///
    /// let h: HashFn = |s| s.bytes().map(u64::from).sum();
    /// let mut filter = BloomFilter::new(512, &[h]).unwrap();
    /// filter.add_all(["apple", "banana", "cherry"]);
    /// assert_eq!(filter.check_all(&["apple", "cherry"]), vec![true, true]);
    /// ```
    pub fn add_all<I, S>(&mut self, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for key in keys {
            self.add(key.as_ref());
        }
    }

    /// Check a batch of keys, one answer per key.
    #[must_use]
    pub fn check_all<S: AsRef<str>>(&self, keys: &[S]) -> Vec<bool> {
        keys.iter().map(|k| self.check(k.as_ref())).collect()
    }

    /// `true` while no bit has been set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits.count_ones() == 0
    }

    /// Number of set bits.
    #[must_use]
    pub fn count_set_bits(&self) -> usize {
        self.bits.count_ones()
    }

    /// Fraction of bits set, in `[0.0, 1.0]`.
    #[must_use]
    pub fn fill_rate(&self) -> f64 {
        self.count_set_bits() as f64 / self.bit_count() as f64
    }

    /// Estimate the current false positive rate from the fill rate.
    ///
    /// A random absent key is reported present when all `k` of its bits are
    /// set, which happens with probability about `fill_rate^k`.
    #[must_use]
    pub fn estimate_fpr(&self) -> f64 {
        self.fill_rate().powi(self.hash_count() as i32)
    }

    /// Theoretical false positive rate after `items` distinct adds,
    /// `(1 − e^(−kn/m))^k`.
    #[must_use]
    pub fn expected_fpr(&self, items: usize) -> f64 {
        // bit_count is never 0 for a constructed filter
        expected_fp_rate(self.bit_count(), items, self.hash_count()).unwrap_or(1.0)
    }

    /// Approximate heap plus inline memory used, in bytes.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.bits.memory_usage()
            + self.hash_functions.capacity() * std::mem::size_of::<H>()
            + std::mem::size_of::<Self>()
    }

    /// Operation counters for this filter.
    #[cfg(feature = "metrics")]
    #[must_use]
    pub fn metrics(&self) -> &FilterMetrics {
        &self.metrics
    }
}

impl<H> fmt::Debug for BloomFilter<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BloomFilter")
            .field("bit_count", &self.bits.len())
            .field("hash_count", &self.hash_functions.len())
            .field("set_bits", &self.bits.count_ones())
            .finish()
    }
}
