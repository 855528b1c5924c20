//! Seeded randomness for reproducible random classical codes.

use std::hash::Hasher;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use siphasher::sip::SipHasher13;

/// Seeded generator remembering which stream of a master seed it draws from.
///
/// Independent consumers (the two factors of a random product code, say)
/// each take their own numbered stream so adding draws to one never shifts
/// the other.
#[derive(Debug, Clone)]
pub struct RngHandle {
    stream: Option<(u64, u64)>,
    rng: StdRng,
}

impl RngHandle {
    /// Generator seeded directly with `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            stream: None,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generator for stream `stream` of `master_seed`.
    pub fn substream(master_seed: u64, stream: u64) -> Self {
        Self {
            stream: Some((master_seed, stream)),
            rng: StdRng::seed_from_u64(derive_substream_seed(master_seed, stream)),
        }
    }

    /// `(master_seed, stream)` when built with [`RngHandle::substream`].
    pub fn stream(&self) -> Option<(u64, u64)> {
        self.stream
    }
}

impl RngCore for RngHandle {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

/// SipHash-1-3 of `(master_seed, stream)` under zero keys.
pub fn derive_substream_seed(master_seed: u64, stream: u64) -> u64 {
    let mut hasher = SipHasher13::new_with_keys(0, 0);
    hasher.write_u64(master_seed);
    hasher.write_u64(stream);
    hasher.finish()
}
