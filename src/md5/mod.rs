pub mod consts;
pub mod padding;
pub mod soft;

pub use consts::{BLOCK_LEN, DIGEST_LEN, INITIAL_STATE, K64, R64};
pub use padding::{length_field, padded_len, LengthPolicy, PaddedMessage};
pub use soft::Md5State;

use crate::Md5Error;

/// MD5 digest engine.
///
/// The engine carries no state of its own: every call frames the input into
/// a fresh [`PaddedMessage`] and folds it into a fresh [`Md5State`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Md5;

impl Md5 {
    pub const BLOCK_LEN: usize = BLOCK_LEN;
    pub const DIGEST_LEN: usize = DIGEST_LEN;

    #[inline(always)]
    pub fn oneshot<T: AsRef<[u8]>>(data: T) -> Result<[u8; Self::DIGEST_LEN], Md5Error> {
        Self::oneshot_with(data, LengthPolicy::Standard)
    }

    pub fn oneshot_with<T: AsRef<[u8]>>(
        data: T,
        policy: LengthPolicy,
    ) -> Result<[u8; Self::DIGEST_LEN], Md5Error> {
        let data = data.as_ref();
        let msg = PaddedMessage::new(data, policy)?;

        let mut state = Md5State::new();
        state.compress_all(&msg);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            len = data.len(),
            blocks = msg.len() / BLOCK_LEN,
            ?policy,
            "md5 digest computed"
        );

        Ok(state.to_bytes())
    }
}

/// Computes the MD5 digest of `data` with the standard 64-bit length field.
#[inline]
pub fn compute<T: AsRef<[u8]>>(data: T) -> Result<[u8; DIGEST_LEN], Md5Error> {
    Md5::oneshot(data)
}

/// Computes the MD5 digest of `data`, encoding its length per `policy`.
#[inline]
pub fn compute_with<T: AsRef<[u8]>>(data: T, policy: LengthPolicy) -> Result<[u8; DIGEST_LEN], Md5Error> {
    Md5::oneshot_with(data, policy)
}
