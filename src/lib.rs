//! MD5 digest engine.
//!
//! A single pure transformation from a byte slice to a 16-byte MD5 digest.
//! Every call owns its own padded buffer and accumulator state, so digests
//! can be computed from any number of threads without coordination.
//!
//! ```
//! let digest = md5_engine::md5::compute(b"abc").unwrap();
//! assert_eq!(&digest[..4], &[0x90u8, 0x01, 0x50, 0x98]);
//! ```

pub mod error;
pub mod md5;
pub mod utils;

pub use error::Md5Error;
pub use md5_engine_macros::*;
