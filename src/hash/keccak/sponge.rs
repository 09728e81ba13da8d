//! Byte-oriented sponge construction over Keccak-f[1600].
//!
//! A [`Sponge`] owns its 200-byte state together with its rate and the
//! current position inside the rate. It moves through two phases:
//!
//! 1. **absorbing**: input bytes are XORed into the first `rate` bytes,
//!    and the state is permuted every time the rate is filled
//! 2. **squeezing**: after [`Sponge::finalize`] has applied the padding,
//!    output bytes are read from the rate, permuting between blocks
//!
//! A sponge is built for a single hash or MAC computation and dropped
//! afterwards; nothing is shared between calls.

use super::{STATE_BYTES, permute};

/// Keccak sponge with a byte-granular rate.
#[derive(Clone)]
pub struct Sponge {
    state: [u8; STATE_BYTES],
    rate: usize,
    pos: usize,
    squeezing: bool,
}

impl Sponge {
    /// Creates an empty sponge with the given rate in bytes.
    ///
    /// # Panics
    /// Panics if `rate` is zero or not smaller than the state size.
    pub fn new(rate: usize) -> Self {
        assert!(rate > 0 && rate < STATE_BYTES, "invalid sponge rate");

        Self {
            state: [0u8; STATE_BYTES],
            rate,
            pos: 0,
            squeezing: false,
        }
    }

    /// Creates a sponge sized for an output of `security_bytes` bytes of
    /// security, i.e. with rate `200 − 2·security_bytes`.
    pub fn with_security(security_bytes: usize) -> Self {
        Self::new(STATE_BYTES - 2 * security_bytes)
    }

    /// Returns the rate in bytes.
    pub fn rate(&self) -> usize {
        self.rate
    }

    /// Absorbs `data` into the state.
    ///
    /// # Panics
    /// Panics if called after [`Sponge::finalize`].
    pub fn absorb(&mut self, mut data: &[u8]) {
        assert!(!self.squeezing, "cannot absorb after finalization");

        while !data.is_empty() {
            let take = (self.rate - self.pos).min(data.len());

            for (s, b) in self.state[self.pos..self.pos + take]
                .iter_mut()
                .zip(&data[..take])
            {
                *s ^= b;
            }

            self.pos += take;
            data = &data[take..];

            if self.pos == self.rate {
                permute(&mut self.state);
                self.pos = 0;
            }
        }
    }

    /// Pads the absorbed input and switches to the squeezing phase.
    ///
    /// `suffix` carries the domain-separation bits followed by the first
    /// padding bit (`0x1F` for SHAKE, `0x04` for cSHAKE). It is XORed at the
    /// current absorption position, the final padding bit `0x80` is XORed
    /// into the last byte of the rate, and the state is permuted.
    pub fn finalize(&mut self, suffix: u8) {
        assert!(!self.squeezing, "sponge already finalized");

        self.state[self.pos] ^= suffix;
        self.state[self.rate - 1] ^= 0x80;
        permute(&mut self.state);

        self.pos = 0;
        self.squeezing = true;
    }

    /// Squeezes `out.len()` bytes from the state.
    ///
    /// Successive calls continue the same output stream.
    ///
    /// # Panics
    /// Panics if called before [`Sponge::finalize`].
    pub fn squeeze(&mut self, out: &mut [u8]) {
        assert!(self.squeezing, "cannot squeeze before finalization");

        let mut offset = 0;

        while offset < out.len() {
            if self.pos == self.rate {
                permute(&mut self.state);
                self.pos = 0;
            }

            let take = (self.rate - self.pos).min(out.len() - offset);
            out[offset..offset + take].copy_from_slice(&self.state[self.pos..self.pos + take]);

            self.pos += take;
            offset += take;
        }
    }
}

impl Drop for Sponge {
    fn drop(&mut self) {
        zeroize::Zeroize::zeroize(&mut self.state);
    }
}
