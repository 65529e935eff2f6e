//! Cyclic polynomial (buzhash) rolling hash over a fixed byte buffer.
//!
//! [`RollingHasher`] keeps the hash of one window of the buffer and slides it
//! forward in O(1) per byte. [`hash`] computes the same value for any slice in
//! one shot. Bulk rolling emits the hashes of many windows without moving the
//! hasher.
//!
//! ```
//! use buzroll::{hash, RollingHasher};
//!
//! let data = b"abcdefghijk";
//! let mut hasher = RollingHasher::new(data, 4).unwrap();
//! assert_eq!(hasher.roll(1).unwrap(), hash(b"bcde"));
//! assert_eq!(hasher.bulk_roll(2).unwrap().len(), 4);
//! ```
//!
//! The remaining modules back the `buzroll` binary.
pub mod bulk_roll;
pub mod digest;
pub mod error;
pub mod rolling_hash;
pub mod table;

pub mod compare;
pub mod fingerprint_format;
pub mod index;
pub mod scan;
pub mod stats;
pub mod util;

pub use bulk_roll::{BulkRoller, DefaultRoller, Portable, Raw};
pub use digest::{Hash64, DIGEST_SIZE};
pub use error::{Error, Result};
pub use rolling_hash::{hash, RollingHash, RollingHasher};
pub use table::TABLE;
