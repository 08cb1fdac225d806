//! Byte-oriented bit array backing the bloom filter.
//!
//! # Memory Layout
//!
//! Bits are packed into bytes, least significant bit first:
//!
//! ```text
//! Byte 0: [bit 0][bit 1]...[bit 7]
//! Byte 1: [bit 8][bit 9]...[bit 15]
//! Byte 2: [bit 16]...
//! ```
//!
//! Bit `i` therefore lives in byte `i / 8` at offset `i % 8`. Set and test go
//! through the same `locate` helper, so the two can never disagree.
//!
//! The array holds `⌈num_bits / 8⌉` bytes. When `num_bits` is not a multiple of
//! 8 the high bits of the last byte are padding: never set, never tested.
//!
//! # Performance Characteristics
//!
//! - Space: `⌈n/8⌉` bytes for `n` bits
//! - `set` / `get`: O(1)
//! - `count_ones`: O(n/8), uses the CPU popcount instruction
//!
//! # Examples
//!
//! ```
//! use chainbloom::core::bitvec::BitArray;
//!
//! let mut bits = BitArray::new(100).unwrap();
//! bits.set(42);
//! assert!(bits.get(42));
//! assert!(!bits.get(43));
//! assert_eq!(bits.count_ones(), 1);
//! assert_eq!(bits.byte_len(), 13);
//! ```

use crate::error::{ChainBloomError, Result};

/// Map a bit index to its byte and in-byte mask.
#[inline]
const fn locate(index: usize) -> (usize, u8) {
    (index / 8, 1u8 << (index % 8))
}

/// Fixed-size array of bits stored in bytes.
///
/// Bits only ever go from 0 to 1: there is no way to clear a bit once set,
/// which is what a bloom filter without deletion needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitArray {
    /// Packed storage, `⌈len / 8⌉` bytes.
    bytes: Box<[u8]>,

    /// Number of addressable bits.
    len: usize,
}

impl BitArray {
    /// Create a bit array with `num_bits` addressable bits, all zero.
    ///
    /// # Errors
    ///
    /// Returns [`ChainBloomError::InvalidFilterSize`] if `num_bits` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainbloom::core::bitvec::BitArray;
    ///
    /// let bits = BitArray::new(1000).unwrap();
    /// assert_eq!(bits.len(), 1000);
    /// assert_eq!(bits.count_ones(), 0);
    /// assert!(BitArray::new(0).is_err());
    /// ```
    pub fn new(num_bits: usize) -> Result<Self> {
        if num_bits == 0 {
            return Err(ChainBloomError::invalid_filter_size(num_bits));
        }

        let byte_count = (num_bits + 7) / 8;

        Ok(Self {
            bytes: vec![0u8; byte_count].into_boxed_slice(),
            len: num_bits,
        })
    }

    /// Number of addressable bits.
    #[must_use]
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always `false` for a constructed array; provided for API completeness.
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of storage bytes, `⌈len / 8⌉`.
    #[must_use]
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    /// Set a bit to 1. Idempotent.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`, matching slice indexing.
    #[inline]
    pub fn set(&mut self, index: usize) {
        assert!(
            index < self.len,
            "bit index {} out of bounds (len={})",
            index,
            self.len
        );
        let (byte, mask) = locate(index);
        self.bytes[byte] |= mask;
    }

    /// Test a bit.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[must_use]
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        assert!(
            index < self.len,
            "bit index {} out of bounds (len={})",
            index,
            self.len
        );
        let (byte, mask) = locate(index);
        self.bytes[byte] & mask != 0
    }

    /// Test a bit, reporting an out-of-range index as an error.
    ///
    /// # Errors
    ///
    /// Returns [`ChainBloomError::IndexOutOfBounds`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainbloom::core::bitvec::BitArray;
    ///
    /// let bits = BitArray::new(10).unwrap();
    /// assert_eq!(bits.try_get(3), Ok(false));
    /// assert!(bits.try_get(10).is_err());
    /// ```
    pub fn try_get(&self, index: usize) -> Result<bool> {
        if index >= self.len {
            return Err(ChainBloomError::index_out_of_bounds(index, self.len));
        }
        Ok(self.get(index))
    }

    /// Count the bits set to 1.
    #[must_use]
    pub fn count_ones(&self) -> usize {
        // Padding bits are never set, so whole bytes can be counted.
        self.bytes.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Iterate over the indices of set bits in ascending order.
    ///
    /// ```
    /// use chainbloom::core::bitvec::BitArray;
    ///
    /// let mut bits = BitArray::new(20).unwrap();
    /// bits.set(17);
    /// bits.set(2);
    /// assert_eq!(bits.iter_ones().collect::<Vec<_>>(), vec![2, 17]);
    /// ```
    pub fn iter_ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.bytes
            .iter()
            .enumerate()
            .filter(|&(_, &byte)| byte != 0)
            .flat_map(|(i, &byte)| {
                (0..8)
                    .filter(move |bit| byte & (1u8 << bit) != 0)
                    .map(move |bit| i * 8 + bit)
            })
    }

    /// Raw storage bytes (LSB-first within each byte).
    #[must_use]
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Total memory usage in bytes, storage plus the struct itself.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.bytes.len() + std::mem::size_of::<Self>()
    }
}
