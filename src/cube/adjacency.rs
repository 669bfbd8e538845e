//! The fixed adjacency between each face and the edge strips of its four neighbours.

use super::Face;

/// Whether a strip is a row or a column of its face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// A row of the face's matrix.
    Row,
    /// A column of the face's matrix.
    Column,
}

/// Which row or column of a face a strip is, at the outer boundary of the face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StripIndex {
    /// Row or column 0.
    First,
    /// Row or column N - 1.
    Last,
}

/// One neighbour edge of a face: the row or column of a neighbouring face that touches it.
///
/// The cells of a strip are walked in *ring order*, which is first to last along the row or
/// column unless `reversed` is set. Turning a face shifts ring-ordered values from one strip of
/// its ring to the next, so a strip's values get reversed exactly when it is copied between two
/// strips whose flags differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeStrip {
    /// The neighbouring face the strip lies on.
    pub face: Face,
    /// Which row or column of the neighbour.
    pub index: StripIndex,
    /// Whether the strip is a row or a column.
    pub orientation: Orientation,
    /// Whether ring order runs last to first.
    pub reversed: bool,
}

impl EdgeStrip {
    const fn new(face: Face, index: StripIndex, orientation: Orientation, reversed: bool) -> Self {
        EdgeStrip {
            face,
            index,
            orientation,
            reversed,
        }
    }

    /// Positions of the strip's cells in the facelet vector of a cube of the given size, in ring
    /// order.
    pub(super) fn cells(self, size: usize) -> impl Iterator<Item = usize> {
        let base = self.face.index() * size * size;
        let line = match self.index {
            StripIndex::First => 0,
            StripIndex::Last => size.saturating_sub(1),
        };

        (0..size).map(move |k| {
            let k = if self.reversed { size - 1 - k } else { k };
            base + match self.orientation {
                Orientation::Row => line * size + k,
                Orientation::Column => k * size + line,
            }
        })
    }
}

use Face::*;
use Orientation::{Column as Col, Row};
use StripIndex::{First, Last};

/// For every face, in storage order, its four neighbour strips listed in the direction facelets
/// travel under a counterclockwise turn of that face: a counterclockwise turn moves the contents
/// of each strip into the one before it.
pub const ADJACENCY: [[EdgeStrip; 4]; 6] = [
    // U
    [
        EdgeStrip::new(B, First, Row, false),
        EdgeStrip::new(R, First, Row, false),
        EdgeStrip::new(F, First, Row, false),
        EdgeStrip::new(L, First, Row, false),
    ],
    // D
    [
        EdgeStrip::new(F, Last, Row, false),
        EdgeStrip::new(R, Last, Row, false),
        EdgeStrip::new(B, Last, Row, false),
        EdgeStrip::new(L, Last, Row, false),
    ],
    // L
    [
        EdgeStrip::new(U, First, Col, false),
        EdgeStrip::new(F, First, Col, false),
        EdgeStrip::new(D, First, Col, false),
        EdgeStrip::new(B, Last, Col, true),
    ],
    // R
    [
        EdgeStrip::new(U, Last, Col, false),
        EdgeStrip::new(B, First, Col, true),
        EdgeStrip::new(D, Last, Col, false),
        EdgeStrip::new(F, Last, Col, false),
    ],
    // F
    [
        EdgeStrip::new(U, Last, Row, false),
        EdgeStrip::new(R, First, Col, false),
        EdgeStrip::new(D, First, Row, true),
        EdgeStrip::new(L, Last, Col, true),
    ],
    // B
    [
        EdgeStrip::new(U, First, Row, false),
        EdgeStrip::new(L, First, Col, true),
        EdgeStrip::new(D, Last, Row, true),
        EdgeStrip::new(R, Last, Col, false),
    ],
];

/// The four neighbour strips of a face, in counterclockwise travel order.
pub fn adjacent_strips(face: Face) -> &'static [EdgeStrip; 4] {
    &ADJACENCY[face.index()]
}
