//! UID minting.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Block identifier, unique within a level.
pub type Uid = u32;

/// Draws before a level gives up on finding a free UID.
pub const MAX_UID_ATTEMPTS: usize = 64;

/// Source of candidate UIDs. Candidates may collide; the level retries.
pub trait UidSource {
    /// Next candidate, never zero.
    fn next_uid(&mut self) -> Uid;
}

/// Uniform draws from `[1, 2^32)`.
#[derive(Debug)]
pub struct RandomUids(StdRng);

impl RandomUids {
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    /// Reproducible sequence.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomUids {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl UidSource for RandomUids {
    fn next_uid(&mut self) -> Uid {
        self.0.gen_range(1..=Uid::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = RandomUids::seeded(7);
        let mut b = RandomUids::seeded(7);
        for _ in 0..100 {
            let uid = a.next_uid();
            assert_ne!(uid, 0);
            assert_eq!(uid, b.next_uid());
        }
    }
}
