//! The caller-supplied hash function abstraction.
//!
//! Neither structure in this crate ships a hash algorithm. Both are built on
//! top of a [`HashFunction`]: anything that maps a text key to a `u64`.
//!
//! # Requirements
//!
//! - **Determinism**: the same key must hash to the same value for as long as
//!   a structure using the function is alive. The map relies on it to find
//!   entries again; the filter relies on it for "no false negatives".
//! - **Purity**: functions should not have observable side effects. The
//!   filter evaluates its functions in order, and `check` stops at the first
//!   clear bit, so the number of calls per operation is not fixed.
//!
//! Collision resistance is not required, only distribution quality matters
//! for performance.
//!
//! # Examples
//!
//! Any `Fn(&str) -> u64` is a hash function:
//!
//! ```
//! use chainbloom::hash::HashFunction;
//!
//! let by_len = |s: &str| s.len() as u64;
//! assert_eq!(by_len.hash("cat"), 3);
//!
//! fn first_byte(s: &str) -> u64 {
//!     s.bytes().next().map_or(0, u64::from)
//! }
//! assert_eq!(first_byte.hash("a"), 97);
//! ```

/// A deterministic mapping from a text key to an unsigned integer.
///
/// Implemented for every `Fn(&str) -> u64`, so plain functions, function
/// pointers, closures and boxed closures all qualify.
pub trait HashFunction {
    /// Hash `key` to a 64-bit value.
    fn hash(&self, key: &str) -> u64;
}

impl<F> HashFunction for F
where
    F: Fn(&str) -> u64,
{
    #[inline]
    fn hash(&self, key: &str) -> u64 {
        self(key)
    }
}

/// Plain function pointer hash, the default hash type of both structures.
///
/// Non-capturing closures coerce to it, which lets a filter hold several
/// different functions in one list:
///
/// ```
/// use chainbloom::hash::HashFn;
///
/// let funcs: [HashFn; 2] = [|s| s.len() as u64, |s| s.len() as u64 * 7];
/// assert_eq!((funcs[1])("cat"), 21);
/// ```
pub type HashFn = fn(&str) -> u64;

/// Reduce the hash of `key` into `0..modulus`.
///
/// This is the single addressing rule of the crate: bit indices in the
/// filter and bucket indices in the map are both `hash(key) mod n`.
///
/// # Panics
///
/// Panics if `modulus` is zero. Both structures reject a zero size at
/// construction, so they never reach this.
#[inline]
#[must_use]
pub fn bucket_index<H>(hash_function: &H, key: &str, modulus: usize) -> usize
where
    H: HashFunction + ?Sized,
{
    assert!(modulus > 0, "modulus must be > 0");
    (hash_function.hash(key) % modulus as u64) as usize
}
