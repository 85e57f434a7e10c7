//! Reproducible random scrambles.
//!
//! Model
//! - Draw `length` moves uniformly from the vocabulary, never turning the same
//!   face twice in a row (a repeated face would collapse into a single move).
//! - Determinism uses a replay token `(seed, index)` mixed into one `StdRng`,
//!   so a stream of scrambles can be regenerated entry by entry.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cube::Face;
use crate::moves::{Move, Turn};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw one scramble for `tok`.
pub fn draw_scramble(length: usize, tok: ReplayToken) -> Vec<Move> {
    const TURNS: [Turn; 3] = [Turn::Clockwise, Turn::CounterClockwise, Turn::Half];
    let mut rng = tok.to_std_rng();
    let mut out: Vec<Move> = Vec::with_capacity(length);
    while out.len() < length {
        let face = Face::ALL[rng.gen_range(0..6)];
        if out.last().is_some_and(|prev| prev.face == face) {
            continue;
        }
        let turn = TURNS[rng.gen_range(0..3)];
        out.push(Move::new(face, turn));
    }
    out
}

/// Stream of scrambles sharing a seed; entry `i` replays with index `i`.
#[derive(Clone, Debug)]
pub struct ScrambleGenerator {
    seed: u64,
    length: usize,
    next_index: u64,
}

impl ScrambleGenerator {
    pub fn new(seed: u64, length: usize) -> Self {
        Self {
            seed,
            length,
            next_index: 0,
        }
    }

    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Next scramble plus the token that regenerates it.
    pub fn generate_next(&mut self) -> (Vec<Move>, ReplayToken) {
        let tok = ReplayToken {
            seed: self.seed,
            index: self.next_index,
        };
        self.next_index += 1;
        (draw_scramble(self.length, tok), tok)
    }

    pub fn regenerate(&self, tok: ReplayToken) -> Vec<Move> {
        draw_scramble(self.length, tok)
    }
}
