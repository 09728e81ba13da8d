//! KMAC-based CSPRNG
//!
//! This module implements a cryptographically secure pseudorandom number
//! generator built on KMACXOF256, the same primitive the rest of the crate
//! uses, so no second cipher is needed for randomness.
//!
//! The generator:
//! - takes its initial 512-bit key from the operating system
//! - expands output as `KMACXOF256(key, counter, 8·(64 + n), "DRBG")`
//! - replaces its key with the first 64 bytes of every expansion, which
//!   are never handed out, so each request is followed by a rekey
//!
//! Compromise of the current key therefore reveals nothing about output
//! that was produced before it.

use tracing::trace;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Result};
use crate::mac::{kmacxof256, labels};

/// Size of the internal key, in bytes.
pub const SEED_BYTES: usize = 64;

/// Cryptographically secure pseudorandom number generator.
///
/// Internally the generator holds a 512-bit KMAC key and a request
/// counter. The key is wiped when the generator is dropped.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Csprng {
    /// Current KMAC key
    key: [u8; SEED_BYTES],

    /// Number of requests served so far
    counter: u64,
}

impl Csprng {
    /// Creates a new CSPRNG seeded from the operating system.
    ///
    /// This is equivalent to calling [`Csprng::from_os`].
    pub fn new() -> Result<Self> {
        Self::from_os()
    }

    /// Creates a new CSPRNG using entropy provided by the operating system.
    ///
    /// # Errors
    /// Returns [`Error::Entropy`] if the OS randomness source fails.
    pub fn from_os() -> Result<Self> {
        let mut seed = [0u8; SEED_BYTES];
        getrandom::getrandom(&mut seed).map_err(|_| Error::Entropy)?;

        trace!("csprng seeded from operating system");

        Ok(Self::from_seed(&mut seed))
    }

    /// Creates a new CSPRNG from a caller-provided seed.
    ///
    /// The same seed always yields the same output stream, which makes this
    /// constructor suitable for reproducible tests. For real use the seed
    /// must be uniformly random and unpredictable. The caller's seed buffer
    /// is wiped once consumed.
    pub fn from_seed(seed: &mut [u8; SEED_BYTES]) -> Self {
        let key = *seed;
        seed.zeroize();

        Self { key, counter: 0 }
    }

    /// Fills `out` with pseudorandom bytes, then rekeys.
    pub fn fill_bytes(&mut self, out: &mut [u8]) {
        let mut stream = kmacxof256(
            &self.key,
            &self.counter.to_be_bytes(),
            8 * (SEED_BYTES + out.len()),
            labels::DRBG,
        );

        self.key.copy_from_slice(&stream[..SEED_BYTES]);
        out.copy_from_slice(&stream[SEED_BYTES..]);
        stream.zeroize();

        self.counter = self.counter.wrapping_add(1);

        trace!(counter = self.counter, len = out.len(), "csprng rekeyed");
    }

    /// Returns 64 fresh pseudorandom bytes.
    pub fn next_block(&mut self) -> [u8; 64] {
        let mut block = [0u8; 64];
        self.fill_bytes(&mut block);
        block
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_request_rotates_key() {
        let mut rng = Csprng::from_seed(&mut [3u8; SEED_BYTES]);
        let before = rng.key;

        rng.next_block();

        assert_ne!(rng.key, before);
        assert_eq!(rng.counter, 1);
    }
}
