//! RNG module - 7-bag random piece generation
//!
//! Implements the "7-bag" randomizer used in modern falling-block games.
//! Each bag contains one of each piece (I, O, T, Z, S, L, J), shuffled with Fisher-Yates.
//! Draws walk the bag until it is exhausted, then the same bag is reshuffled in place.
//!
//! The RNG is a seeded [`StdRng`], so a given seed always deals the same sequence.

use arrayvec::ArrayVec;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::PieceKind;

/// Number of pieces in one bag
pub const BAG_SIZE: usize = PieceKind::ALL.len();

/// Shuffle a slice using Fisher-Yates
///
/// For each index from the last down to 1, swap it with a uniformly chosen index in
/// `[0, i]`.
pub fn shuffle<T, R: Rng + ?Sized>(rng: &mut R, slice: &mut [T]) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct PieceQueue {
    /// Current bag of pieces
    bag: [PieceKind; BAG_SIZE],
    /// Index into current bag
    bag_index: usize,
    /// RNG for shuffling
    rng: StdRng,
}

impl PieceQueue {
    /// Create a new piece queue with the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Create a piece queue seeded from the operating system
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    fn with_rng(rng: StdRng) -> Self {
        let mut queue = Self {
            bag: PieceKind::ALL,
            bag_index: 0,
            rng,
        };
        queue.refill_bag();
        queue
    }

    /// Reshuffle the bag in place and rewind the cursor
    fn refill_bag(&mut self) {
        shuffle(&mut self.rng, &mut self.bag);
        self.bag_index = 0;
    }

    /// Discard the rest of the current bag and deal a fresh one
    pub fn reset(&mut self) {
        self.refill_bag();
    }

    /// Draw the next piece from the queue
    pub fn draw(&mut self) -> PieceKind {
        if self.bag_index >= BAG_SIZE {
            self.refill_bag();
        }

        let piece = self.bag[self.bag_index];
        self.bag_index += 1;
        piece
    }

    /// Peek at the next piece without removing it
    pub fn peek(&self) -> PieceKind {
        match self.bag.get(self.bag_index) {
            Some(&kind) => kind,
            None => self.preview_next_bag()[0],
        }
    }

    /// Peek at up to one bag's worth of upcoming pieces
    pub fn peek_queue(&self, count: usize) -> ArrayVec<PieceKind, BAG_SIZE> {
        let count = count.min(BAG_SIZE);
        let mut result: ArrayVec<PieceKind, BAG_SIZE> = self.bag[self.bag_index..]
            .iter()
            .copied()
            .take(count)
            .collect();

        if result.len() < count {
            let next_bag = self.preview_next_bag();
            let remaining = count - result.len();
            result.extend(next_bag.iter().copied().take(remaining));
        }

        result
    }

    /// The bag `draw` will deal once the current one runs out.
    ///
    /// Works on a clone of the RNG, so the preview matches the next reshuffle exactly.
    fn preview_next_bag(&self) -> [PieceKind; BAG_SIZE] {
        let mut preview_rng = self.rng.clone();
        let mut next_bag = self.bag;
        shuffle(&mut preview_rng, &mut next_bag);
        next_bag
    }

    /// Pieces left in the current bag
    pub fn remaining(&self) -> &[PieceKind] {
        &self.bag[self.bag_index..]
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new(1)
    }
}
