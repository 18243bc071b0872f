use super::consts::{BLOCK_LEN, MLEN_SIZE};
use crate::utils::{self, Alloc};
use crate::Md5Error;

/// How the message bit length is written into the trailing 8-byte field.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum LengthPolicy {
    /// Full 64-bit length, `8 * len mod 2^64`, as RFC 1321 defines it.
    #[default]
    Standard,
    /// Only the low 32 bits of `8 * len`; the high word stays zero.
    ///
    /// Matches the standard digest for messages shorter than 512 MiB and
    /// silently diverges beyond that.
    Truncate32,
    /// Like [`LengthPolicy::Truncate32`], but messages whose bit length does
    /// not fit in 32 bits are rejected with [`Md5Error::LengthOverflow`].
    Strict32,
}

/// Length in bytes of the padded message for an input of `len` bytes: the
/// smallest multiple of [`BLOCK_LEN`] that is at least `len + 9`.
#[inline]
pub fn padded_len(len: usize) -> Result<usize, Md5Error> {
    len.checked_add(MLEN_SIZE + 1)
        .and_then(|n| n.checked_next_multiple_of(BLOCK_LEN))
        .ok_or(Md5Error::Allocation { len: usize::MAX })
}

/// Encodes the bit length of a `len`-byte message according to `policy`.
pub fn length_field(len: usize, policy: LengthPolicy) -> Result<[u8; MLEN_SIZE], Md5Error> {
    let mlen_bits = (len as u64).wrapping_mul(8);
    match policy {
        LengthPolicy::Standard => Ok(mlen_bits.to_le_bytes()),
        LengthPolicy::Truncate32 => {
            #[cfg(feature = "tracing")]
            {
                if mlen_bits > u32::MAX as u64 {
                    tracing::debug!(len, "md5 length field truncated to 32 bits");
                }
            }
            Ok((mlen_bits as u32 as u64).to_le_bytes())
        }
        LengthPolicy::Strict32 => {
            let fits = (len as u64)
                .checked_mul(8)
                .is_some_and(|bits| bits <= u32::MAX as u64);
            if !fits {
                return Err(Md5Error::LengthOverflow { len });
            }
            Ok(mlen_bits.to_le_bytes())
        }
    }
}

/// A message framed for compression: input bytes, the `0x80` marker, zero
/// fill and the length field, in a block-aligned buffer owned by one digest
/// computation.
pub struct PaddedMessage {
    buf: Alloc<u8>,
    message_len: usize,
}

impl PaddedMessage {
    pub fn new(data: &[u8], policy: LengthPolicy) -> Result<Self, Md5Error> {
        let mlen = data.len();
        let mlen_octets = length_field(mlen, policy)?;
        let plen = padded_len(mlen)?;

        let mut buf = Alloc::zeroed(plen, BLOCK_LEN)?;
        buf[..mlen].copy_from_slice(data);
        buf[mlen] = 0x80;
        buf[plen - MLEN_SIZE..].copy_from_slice(&mlen_octets);

        Ok(Self {
            buf,
            message_len: mlen,
        })
    }

    /// Length of the original message in bytes.
    #[inline]
    pub fn message_len(&self) -> usize {
        self.message_len
    }

    /// Length of the padded buffer in bytes, always a multiple of [`BLOCK_LEN`].
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Iterates over the padded message one block at a time.
    #[inline]
    pub fn blocks(&self) -> impl Iterator<Item = &[u8; BLOCK_LEN]> + '_ {
        // SAFETY: the buffer length is a multiple of BLOCK_LEN, so every chunk is full.
        self.buf
            .chunks_exact(BLOCK_LEN)
            .map(|chunk| unsafe { utils::slice_to_array::<u8, BLOCK_LEN>(chunk) })
    }
}
