//! Seeded randomness without any shared generator.
//!
//! Every random decision the rules make is derived from `(seed, sequence)`, where the sequence is
//! usually the turn the decision belongs to. Two games with the same seed make the same decisions
//! no matter how many other games are running or in which order their turns are computed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// A pure source of bounded random numbers
pub trait SeededRandom {
    /// A number in `[0, bound)`. Always 0 when `bound` is 0
    fn next_in_range(&self, seed: u64, sequence: u64, bound: u32) -> u32;
}

/// The default [SeededRandom], backed by a PCG generator that is freshly seeded for each call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PcgRandom;

impl SeededRandom for PcgRandom {
    fn next_in_range(&self, seed: u64, sequence: u64, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }

        let mut rng = Pcg64Mcg::seed_from_u64(mix(seed, sequence));
        rng.gen_range(0..bound)
    }
}

/// Combine the seed and sequence into one well distributed value (splitmix64 finalizer)
fn mix(seed: u64, sequence: u64) -> u64 {
    let mut z = seed ^ sequence.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// A cursor for decisions that need more than one draw, like placing several food at once.
///
/// The stream only lives as long as the decision it belongs to. Each draw is still a pure function
/// of `(seed, sequence, draw index)`
#[derive(Debug)]
pub struct SeededStream<'a, R: SeededRandom> {
    random: &'a R,
    seed: u64,
    sequence: u64,
    draws: u64,
}

impl<'a, R: SeededRandom> SeededStream<'a, R> {
    pub fn new(random: &'a R, seed: u64, sequence: u64) -> Self {
        Self {
            random,
            seed,
            sequence,
            draws: 0,
        }
    }

    pub fn next_in_range(&mut self, bound: u32) -> u32 {
        let sub_sequence = mix(self.sequence, self.draws);
        self.draws += 1;

        self.random.next_in_range(self.seed, sub_sequence, bound)
    }
}
