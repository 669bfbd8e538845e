//! Quarter turns of a face: the face's own facelets rotate, and the four neighbour strips listed
//! in [`ADJACENCY`](super::ADJACENCY) shift one step around the face.

use super::{adjacent_strips, CubeState, Direction, Face, QuarterTurn};
use crate::error::CubeError;
use crate::moves::MoveSequence;

impl CubeState {
    /// Turn a face by a quarter turn in the given direction.
    pub fn rotate_face(&mut self, face: Face, direction: Direction) {
        self.rotate_own_face(face, direction);
        self.cycle_adjacent_strips(face, direction);
    }

    /// Turn a face named by its letter, e.g. `rotate("F", true)`. Unknown names fail with
    /// [`CubeError::InvalidFace`] and leave the cube untouched.
    pub fn rotate(&mut self, face: &str, clockwise: bool) -> Result<(), CubeError> {
        let face: Face = face.parse()?;
        self.rotate_face(face, Direction::from_clockwise(clockwise));
        Ok(())
    }

    /// Apply a single quarter turn.
    pub fn apply_move(&mut self, mv: QuarterTurn) {
        self.rotate_face(mv.face, mv.direction);
    }

    /// Apply a sequence of quarter turns in order.
    pub fn apply_moves(&mut self, mvs: &MoveSequence<QuarterTurn>) {
        for &mv in mvs {
            self.apply_move(mv);
        }
    }

    /// Parse and apply whitespace separated notation such as `"R U R' U'"`. The whole sequence is
    /// parsed before anything is applied, so on error the cube is unchanged.
    pub fn apply_notation(&mut self, notation: &str) -> Result<(), CubeError> {
        let mvs: MoveSequence<QuarterTurn> = notation.parse()?;
        self.apply_moves(&mvs);
        Ok(())
    }

    // Rotate the N×N matrix of the face in place, one concentric ring of 4-cycles at a time.
    fn rotate_own_face(&mut self, face: Face, direction: Direction) {
        let n = self.size;
        let base = face.index() * n * n;
        let at = |row: usize, col: usize| base + row * n + col;

        for i in 0..n / 2 {
            for j in i..n - 1 - i {
                // a -> b -> c -> d -> a when turning clockwise
                let a = at(i, j);
                let b = at(j, n - 1 - i);
                let c = at(n - 1 - i, n - 1 - j);
                let d = at(n - 1 - j, i);

                let f = &mut self.facelets;
                let saved = f[a];
                match direction {
                    Direction::Clockwise => {
                        f[a] = f[d];
                        f[d] = f[c];
                        f[c] = f[b];
                        f[b] = saved;
                    }
                    Direction::CounterClockwise => {
                        f[a] = f[b];
                        f[b] = f[c];
                        f[c] = f[d];
                        f[d] = saved;
                    }
                }
            }
        }
    }

    // The table lists the ring in counterclockwise travel order, so a counterclockwise turn pulls
    // each strip from the one after it; clockwise walks the ring backwards.
    fn cycle_adjacent_strips(&mut self, face: Face, direction: Direction) {
        let mut ring = *adjacent_strips(face);
        if direction.is_clockwise() {
            ring.reverse();
        }

        let n = self.size;
        let saved: Vec<u8> = ring[0].cells(n).map(|k| self.facelets[k]).collect();

        for pair in ring.windows(2) {
            for (dst, src) in pair[0].cells(n).zip(pair[1].cells(n)) {
                self.facelets[dst] = self.facelets[src];
            }
        }
        for (dst, value) in ring[3].cells(n).zip(saved) {
            self.facelets[dst] = value;
        }
    }
}
