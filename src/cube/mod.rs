//! A facelet-level model of an N×N×N cube, stored as six row-major N×N faces.
//!
//! The faces are unfolded into the net
//!
//! ```text
//!     U
//!   L F R B
//!     D
//! ```
//!
//! so that row 0 of every side face touches U, row 0 of U touches B and row 0 of D touches F.

mod adjacency;
mod moves;
mod rotate;
mod scramble;

pub use adjacency::{adjacent_strips, EdgeStrip, Orientation, StripIndex, ADJACENCY};
pub use moves::{Direction, QuarterTurn};

use crate::error::CubeError;

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

#[cfg(test)]
use proptest_derive::Arbitrary;

/// One of the six faces. The discriminant is both the storage slot of the face and the color id
/// of its facelets on a solved cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Face {
    /// Up
    U = 0,
    /// Down
    D = 1,
    /// Left
    L = 2,
    /// Right
    R = 3,
    /// Front
    F = 4,
    /// Back
    B = 5,
}

impl Face {
    /// Every face, in storage order.
    pub const ARRAY: [Face; 6] = [Face::U, Face::D, Face::L, Face::R, Face::F, Face::B];

    /// The storage slot of this face.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The color id of this face's facelets when the cube is solved.
    pub const fn color(self) -> u8 {
        self as u8
    }

    /// The face opposite to the given one.
    pub fn opposite(self) -> Face {
        match self {
            Face::U => Face::D,
            Face::D => Face::U,
            Face::L => Face::R,
            Face::R => Face::L,
            Face::F => Face::B,
            Face::B => Face::F,
        }
    }
}

impl TryFrom<u8> for Face {
    type Error = CubeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Face::ARRAY
            .get(value as usize)
            .copied()
            .ok_or_else(|| CubeError::InvalidFace(value.to_string()))
    }
}

impl TryFrom<char> for Face {
    type Error = CubeError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'U' => Ok(Face::U),
            'D' => Ok(Face::D),
            'L' => Ok(Face::L),
            'R' => Ok(Face::R),
            'F' => Ok(Face::F),
            'B' => Ok(Face::B),
            _ => Err(CubeError::InvalidFace(value.to_string())),
        }
    }
}

impl FromStr for Face {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.try_into(),
            _ => Err(CubeError::InvalidFace(s.to_owned())),
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// The facelets of an N×N×N cube: six contiguous row-major faces of N² color ids each, in the
/// order U, D, L, R, F, B. Every entry is a color id in `0..=5` and the length is always 6·N².
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CubeState {
    size: usize,
    facelets: Vec<u8>,
}

impl CubeState {
    /// A solved cube of the given size, where every facelet of a face has that face's color id.
    pub fn solved(size: usize) -> CubeState {
        let facelets = Face::ARRAY
            .iter()
            .flat_map(|f| std::iter::repeat(f.color()).take(size * size))
            .collect();
        CubeState { size, facelets }
    }

    /// Build a cube from a facelet vector in U, D, L, R, F, B order with each face row-major.
    ///
    /// ```rust
    /// # fn main() {
    /// use nxn_cube::cube::CubeState;
    /// use nxn_cube::error::CubeError;
    ///
    /// let solved = CubeState::solved(2);
    /// assert_eq!(CubeState::from_facelets(2, solved.facelets()), Ok(solved));
    /// assert!(matches!(
    ///     CubeState::from_facelets(3, &[0u8; 53]),
    ///     Err(CubeError::InvalidStateLength { .. })
    /// ));
    /// # }
    /// ```
    pub fn from_facelets<T>(size: usize, facelets: &[T]) -> Result<CubeState, CubeError>
    where
        T: Copy + Into<i64>,
    {
        let expected = 6 * size * size;
        if facelets.len() != expected {
            return Err(CubeError::InvalidStateLength {
                size,
                expected,
                actual: facelets.len(),
            });
        }

        let facelets = facelets
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                let value: i64 = value.into();
                u8::try_from(value)
                    .ok()
                    .filter(|&c| c <= Face::B.color())
                    .ok_or(CubeError::InvalidStateDomain { index, value })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CubeState { size, facelets })
    }

    /// The edge length N of the cube.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The full facelet vector.
    pub fn facelets(&self) -> &[u8] {
        &self.facelets
    }

    /// Consume the cube, returning its facelet vector.
    pub fn into_facelets(self) -> Vec<u8> {
        self.facelets
    }

    /// The N² facelets of one face, row-major.
    pub fn face(&self, face: Face) -> &[u8] {
        &self.facelets[self.face_range(face)]
    }

    /// The color id at the given row and column of a face.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not less than the cube size.
    pub fn facelet(&self, face: Face, row: usize, col: usize) -> u8 {
        assert!(row < self.size && col < self.size, "facelet out of bounds");
        self.face(face)[row * self.size + col]
    }

    /// Whether every face shows only its own color id.
    pub fn is_solved(&self) -> bool {
        Face::ARRAY
            .iter()
            .all(|&f| self.face(f).iter().all(|&c| c == f.color()))
    }

    /// How many facelets carry each color id. Turns only permute facelets, so on a valid cube
    /// every count is N².
    pub fn color_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for &c in &self.facelets {
            counts[c as usize] += 1;
        }
        counts
    }

    fn face_range(&self, face: Face) -> Range<usize> {
        let area = self.size * self.size;
        face.index() * area..(face.index() + 1) * area
    }

    fn write_row(&self, f: &mut fmt::Formatter<'_>, face: Face, row: usize) -> fmt::Result {
        let start = row * self.size;
        for c in &self.face(face)[start..start + self.size] {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// Prints the unfolded net, one digit per facelet.
impl fmt::Display for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indent = " ".repeat(self.size + 1);

        for row in 0..self.size {
            f.write_str(&indent)?;
            self.write_row(f, Face::U, row)?;
            writeln!(f)?;
        }
        for row in 0..self.size {
            for (i, &face) in [Face::L, Face::F, Face::R, Face::B].iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                self.write_row(f, face, row)?;
            }
            writeln!(f)?;
        }
        for row in 0..self.size {
            f.write_str(&indent)?;
            self.write_row(f, Face::D, row)?;
            writeln!(f)?;
        }
        Ok(())
    }
}
