use super::{CubeState, QuarterTurn};
use crate::moves::MoveSequence;

use log::debug;
use rand::Rng;

impl CubeState {
    /// Apply `move_count` uniformly random quarter turns drawn from `rng`, returning the moves
    /// that were applied. A seeded generator gives a reproducible scramble.
    ///
    /// ```rust
    /// # fn main() {
    /// use nxn_cube::cube::CubeState;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let mut cube = CubeState::solved(3);
    /// let scramble = cube.scramble(20, &mut StdRng::seed_from_u64(1));
    ///
    /// cube.apply_moves(&scramble.inverse());
    /// assert!(cube.is_solved());
    /// # }
    /// ```
    pub fn scramble<R: Rng + ?Sized>(
        &mut self,
        move_count: usize,
        rng: &mut R,
    ) -> MoveSequence<QuarterTurn> {
        let mvs: MoveSequence<QuarterTurn> = (0..move_count).map(|_| rng.gen()).collect();
        self.apply_moves(&mvs);
        debug!(
            "scrambled size {} cube with {} moves: {}",
            self.size, move_count, mvs
        );
        mvs
    }

    /// A new cube of the given size, scrambled with `move_count` random quarter turns.
    pub fn scrambled<R: Rng + ?Sized>(size: usize, move_count: usize, rng: &mut R) -> CubeState {
        let mut cube = CubeState::solved(size);
        cube.scramble(move_count, rng);
        cube
    }
}
