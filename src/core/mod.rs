//! Building blocks shared by the structures in this crate.
//!
//! ```text
//! core/
//! ├── bitvec.rs    - Byte-oriented bit array (filter storage)
//! ├── params.rs    - Bloom filter sizing formulas
//! ├── text.rs      - Bounded-length text
//! └── mod.rs       - This file
//! ```

pub mod bitvec;
pub mod params;
pub mod text;

pub use bitvec::BitArray;
pub use params::{bits_per_element, expected_fp_rate, optimal_bit_count, optimal_hash_count};
pub use text::{bounded, DEFAULT_MAX_STRING_LEN};
