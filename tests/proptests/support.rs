//! Generators shared by the property tests

use quickcheck::{Arbitrary, Gen};
use sss_dist::domain::SplitConfig;

/// Non-empty secret of up to 200 bytes
#[derive(Clone, Debug)]
pub struct Secret(pub Vec<u8>);

impl Arbitrary for Secret {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::from(u8::arbitrary(g) % 200) + 1;
        Secret((0..len).map(|_| u8::arbitrary(g)).collect())
    }
}

/// Valid threshold, share count and chunk size
#[derive(Clone, Copy, Debug)]
pub struct Params {
    pub threshold: u8,
    pub num_shares: u8,
    pub chunk_size: u8,
}

impl Arbitrary for Params {
    fn arbitrary(g: &mut Gen) -> Self {
        // Keep share count reasonable for testing: 1..=12
        let num_shares = (u8::arbitrary(g) % 12) + 1;
        // 1..=num_shares
        let threshold = (u8::arbitrary(g) % num_shares) + 1;
        // 1..=40
        let chunk_size = (u8::arbitrary(g) % 40) + 1;

        Params {
            threshold,
            num_shares,
            chunk_size,
        }
    }
}

impl Params {
    pub fn config(self) -> SplitConfig {
        SplitConfig::from_args(
            i64::from(self.threshold),
            i64::from(self.num_shares),
            i64::from(self.chunk_size),
        )
        .unwrap()
    }
}

/// Deterministic shuffle of `0..len` driven by `seed`
pub fn shuffled(len: usize, seed: u64) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..len).collect();
    let mut seed = seed;
    for i in 0..indices.len() {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let range = u64::try_from(indices.len() - i).unwrap_or_else(|_| unreachable!());
        let offset = usize::try_from(seed % range).unwrap_or_else(|_| unreachable!());
        indices.swap(i, i + offset);
    }
    indices
}
