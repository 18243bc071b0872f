use super::consts::{BLOCK_LEN, DIGEST_LEN, INITIAL_STATE, K64, R64};
use super::padding::PaddedMessage;
use crate::utils::merge_bits;

/// The four 32-bit accumulators of one digest computation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Md5State {
    state: [u32; 4],
}

impl Default for Md5State {
    fn default() -> Self { Self::new() }
}

impl Md5State {
    #[inline(always)]
    pub const fn new() -> Self {
        Self {
            state: INITIAL_STATE,
        }
    }

    #[inline(always)]
    pub const fn words(&self) -> [u32; 4] {
        self.state
    }

    /// Compresses every block of `msg` into the state, in order.
    #[inline]
    pub fn compress_all(&mut self, msg: &PaddedMessage) {
        for block in msg.blocks() {
            self.compress(block);
        }
    }

    /// Runs the 64 rounds over one block and folds the result into the state.
    #[inline(never)]
    pub fn compress(&mut self, block: &[u8; BLOCK_LEN]) {
        let mut w = [0u32; 16];
        crate::const_loop!(i, 0, 16, {
            w[i] = u32::from_le_bytes([
                block[i * 4],
                block[i * 4 + 1],
                block[i * 4 + 2],
                block[i * 4 + 3],
            ]);
        });

        let k64 = crate::utils::black_box(&K64);

        let mut a = self.state[0];
        let mut b = self.state[1];
        let mut c = self.state[2];
        let mut d = self.state[3];

        crate::const_loop!(i, 0, 64, {
            let (f, g) = match i / 16 {
                0 => (merge_bits(d, c, b), i),
                1 => (merge_bits(c, b, d), (5 * i + 1) % 16),
                2 => (b ^ c ^ d, (3 * i + 5) % 16),
                _ => (c ^ (b | !d), (7 * i) % 16),
            };
            let mixed = a
                .wrapping_add(f)
                .wrapping_add(k64[i])
                .wrapping_add(w[g])
                .rotate_left(R64[i]);
            a = d;
            d = c;
            c = b;
            b = b.wrapping_add(mixed);
        });

        self.state[0] = self.state[0].wrapping_add(a);
        self.state[1] = self.state[1].wrapping_add(b);
        self.state[2] = self.state[2].wrapping_add(c);
        self.state[3] = self.state[3].wrapping_add(d);
    }

    #[inline]
    pub fn to_bytes(&self) -> [u8; DIGEST_LEN] {
        let mut output = [0u8; DIGEST_LEN];
        output[0..4].copy_from_slice(&self.state[0].to_le_bytes());
        output[4..8].copy_from_slice(&self.state[1].to_le_bytes());
        output[8..12].copy_from_slice(&self.state[2].to_le_bytes());
        output[12..16].copy_from_slice(&self.state[3].to_le_bytes());
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::md5::LengthPolicy;

    // Straight transcription of the round table, used as an oracle for the
    // unrolled compression.
    fn compress_reference(state: &mut [u32; 4], block: &[u8; BLOCK_LEN]) {
        let w: Vec<u32> = block
            .chunks_exact(4)
            .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        let [mut a, mut b, mut c, mut d] = *state;
        for i in 0..64 {
            let (f, g) = if i < 16 {
                ((b & c) | (!b & d), i)
            } else if i < 32 {
                ((d & b) | (!d & c), (5 * i + 1) % 16)
            } else if i < 48 {
                (b ^ c ^ d, (3 * i + 5) % 16)
            } else {
                (c ^ (b | !d), (7 * i) % 16)
            };
            let temp = d;
            d = c;
            c = b;
            b = b.wrapping_add(
                a.wrapping_add(f)
                    .wrapping_add(K64[i])
                    .wrapping_add(w[g])
                    .rotate_left(R64[i]),
            );
            a = temp;
        }
        state[0] = state[0].wrapping_add(a);
        state[1] = state[1].wrapping_add(b);
        state[2] = state[2].wrapping_add(c);
        state[3] = state[3].wrapping_add(d);
    }

    #[test]
    fn test_initial_state() {
        assert_eq!(
            Md5State::new().words(),
            [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476]
        );
        assert_eq!(
            Md5State::default().to_bytes(),
            [
                0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef,
                0xfe, 0xdc, 0xba, 0x98, 0x76, 0x54, 0x32, 0x10,
            ],
        );
    }

    #[test]
    fn test_compress_empty_message_block() {
        let msg = PaddedMessage::new(b"", LengthPolicy::Standard).unwrap();
        let mut state = Md5State::new();
        state.compress_all(&msg);
        assert_eq!(
            state.to_bytes(),
            [
                0xd4, 0x1d, 0x8c, 0xd9, 0x8f, 0x00, 0xb2, 0x04,
                0xe9, 0x80, 0x09, 0x98, 0xec, 0xf8, 0x42, 0x7e
            ],
        );
    }

    #[test]
    fn test_compress_matches_round_table() {
        for _ in 0..200 {
            let mut block = [0u8; BLOCK_LEN];
            block.iter_mut().for_each(|b| *b = rand::random());
            let seed: [u32; 4] = rand::random();

            let mut expected = seed;
            compress_reference(&mut expected, &block);

            let mut state = Md5State { state: seed };
            state.compress(&block);
            assert_eq!(state.words(), expected);
        }
    }

    #[test]
    fn test_compress_is_deterministic() {
        let block = [0x5au8; BLOCK_LEN];
        let mut first = Md5State::new();
        let mut second = Md5State::new();
        first.compress(&block);
        second.compress(&block);
        assert_eq!(first, second);
        assert_ne!(first, Md5State::new());
    }

    #[test]
    fn test_blocks_chain_through_state() {
        let blocks = [[0x11u8; BLOCK_LEN], [0x22u8; BLOCK_LEN]];

        let mut forward = Md5State::new();
        forward.compress(&blocks[0]);
        forward.compress(&blocks[1]);

        let mut reversed = Md5State::new();
        reversed.compress(&blocks[1]);
        reversed.compress(&blocks[0]);

        assert_ne!(forward, reversed);
    }
}
