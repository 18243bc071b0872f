use thiserror::Error;

/// Errors that can abort a digest computation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum Md5Error {
    /// The padded message buffer could not be obtained.
    ///
    /// `len` is the requested buffer size in bytes, or `usize::MAX` when the
    /// size itself is not representable.
    #[error("failed to allocate a padded message buffer of {len} bytes")]
    Allocation {
        /// Requested buffer size in bytes.
        len: usize,
    },
    /// The message bit length does not fit in the 32-bit length field.
    #[error("message of {len} bytes exceeds the 32-bit length field")]
    LengthOverflow {
        /// Message length in bytes.
        len: usize,
    },
}
