use super::Face;
use crate::error::CubeError;
use crate::moves::Cancellation;

use rand::distributions::{Distribution, Standard};
use rand::Rng;

use std::fmt;
use std::str::FromStr;

#[cfg(test)]
use proptest_derive::Arbitrary;

/// The direction of a quarter turn, as seen when looking straight at the turned face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Direction {
    /// Clockwise, written without a suffix (`U`).
    Clockwise,
    /// Counterclockwise, written with an apostrophe (`U'`).
    CounterClockwise,
}

impl Direction {
    /// `Clockwise` if `clockwise` is true, else `CounterClockwise`.
    pub fn from_clockwise(clockwise: bool) -> Direction {
        if clockwise {
            Direction::Clockwise
        } else {
            Direction::CounterClockwise
        }
    }

    /// Whether this is the clockwise direction.
    pub fn is_clockwise(self) -> bool {
        self == Direction::Clockwise
    }

    /// The opposite direction.
    pub fn inverse(self) -> Direction {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// A quarter turn of one face. Half turns are not moves of their own, they are written as two
/// quarter turns.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[allow(missing_docs)]
pub struct QuarterTurn {
    pub face: Face,
    pub direction: Direction,
}

/// Create a quarter turn from a face letter and, optionally, a [`Direction`] variant. Without a
/// direction the turn is clockwise.
///
/// ```rust
/// # fn main() {
/// use nxn_cube::qt;
///
/// assert_eq!(qt!(F).to_string(), "F");
/// assert_eq!(qt!(F, CounterClockwise).to_string(), "F'");
/// # }
/// ```
#[macro_export]
macro_rules! qt {
    ($face:ident) => {
        $crate::qt!($face, Clockwise)
    };
    ($face:ident, $dir:ident) => {
        $crate::cube::QuarterTurn {
            face: $crate::cube::Face::$face,
            direction: $crate::cube::Direction::$dir,
        }
    };
}

impl QuarterTurn {
    /// Every quarter turn, ordered by action index: `U U' D D' L L' R R' F F' B B'`.
    pub const ALL: [QuarterTurn; 12] = [
        qt!(U),
        qt!(U, CounterClockwise),
        qt!(D),
        qt!(D, CounterClockwise),
        qt!(L),
        qt!(L, CounterClockwise),
        qt!(R),
        qt!(R, CounterClockwise),
        qt!(F),
        qt!(F, CounterClockwise),
        qt!(B),
        qt!(B, CounterClockwise),
    ];

    /// Construct a quarter turn.
    pub const fn new(face: Face, direction: Direction) -> QuarterTurn {
        QuarterTurn { face, direction }
    }

    /// The discrete action index of this move, `face * 2` plus one if counterclockwise.
    pub fn action(self) -> usize {
        self.face.index() * 2
            + match self.direction {
                Direction::Clockwise => 0,
                Direction::CounterClockwise => 1,
            }
    }

    /// Decode a discrete action index in `0..12`.
    pub fn from_action(action: usize) -> Result<QuarterTurn, CubeError> {
        Self::ALL
            .get(action)
            .copied()
            .ok_or(CubeError::InvalidAction(action))
    }
}

impl From<QuarterTurn> for usize {
    fn from(mv: QuarterTurn) -> usize {
        mv.action()
    }
}

impl TryFrom<usize> for QuarterTurn {
    type Error = CubeError;

    fn try_from(action: usize) -> Result<Self, Self::Error> {
        QuarterTurn::from_action(action)
    }
}

impl crate::moves::Move for QuarterTurn {
    fn inverse(self) -> Self {
        QuarterTurn {
            face: self.face,
            direction: self.direction.inverse(),
        }
    }

    // Turns of opposite faces move disjoint layers (for N = 1 both layers are the whole cube,
    // and rotations about one axis still commute).
    fn commutes_with(&self, b: &Self) -> bool {
        b.face == self.face || b.face == self.face.opposite()
    }

    fn cancel(self, b: Self) -> Cancellation<Self> {
        if self.face == b.face && self.direction != b.direction {
            Cancellation::Identity
        } else {
            Cancellation::Unchanged(self, b)
        }
    }
}

impl fmt::Display for QuarterTurn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Direction::Clockwise => write!(f, "{}", self.face),
            Direction::CounterClockwise => write!(f, "{}'", self.face),
        }
    }
}

// Same as Display so sequences read as notation in assertion failures.
impl fmt::Debug for QuarterTurn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for QuarterTurn {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let face: Face = chars
            .next()
            .ok_or_else(|| CubeError::InvalidMove(s.to_owned()))?
            .try_into()?;
        let direction = match chars.as_str() {
            "" => Direction::Clockwise,
            "'" => Direction::CounterClockwise,
            _ => return Err(CubeError::InvalidMove(s.to_owned())),
        };
        Ok(QuarterTurn { face, direction })
    }
}

/// A uniformly random face with an independent, uniformly random direction.
impl Distribution<QuarterTurn> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> QuarterTurn {
        let face = Face::ARRAY[rng.gen_range(0..Face::ARRAY.len())];
        let direction = Direction::from_clockwise(rng.gen());
        QuarterTurn { face, direction }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::{Move, MoveSequence};

    use proptest::collection::vec;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn notation() {
        let names: Vec<String> = QuarterTurn::ALL.iter().map(|m| m.to_string()).collect();
        assert_eq!(
            names,
            ["U", "U'", "D", "D'", "L", "L'", "R", "R'", "F", "F'", "B", "B'"]
        );
        for m in QuarterTurn::ALL {
            assert_eq!(m.to_string().parse::<QuarterTurn>(), Ok(m));
        }

        assert_eq!(
            "X".parse::<QuarterTurn>(),
            Err(CubeError::InvalidFace("X".into()))
        );
        assert_eq!(
            "X'".parse::<QuarterTurn>(),
            Err(CubeError::InvalidFace("X".into()))
        );
        assert_eq!(
            "U2".parse::<QuarterTurn>(),
            Err(CubeError::InvalidMove("U2".into()))
        );
        assert_eq!(
            "U''".parse::<QuarterTurn>(),
            Err(CubeError::InvalidMove("U''".into()))
        );
        assert_eq!(
            "".parse::<QuarterTurn>(),
            Err(CubeError::InvalidMove("".into()))
        );
    }

    #[test]
    fn action_encoding() {
        for (i, m) in QuarterTurn::ALL.into_iter().enumerate() {
            assert_eq!(m.action(), i);
            assert_eq!(usize::from(m), i);
            assert_eq!(QuarterTurn::try_from(i), Ok(m));
        }
        assert_eq!(qt!(R, CounterClockwise).action(), 7);
        assert_eq!(QuarterTurn::from_action(12), Err(CubeError::InvalidAction(12)));
    }

    #[test]
    fn sequence_parsing() {
        let seq: MoveSequence<QuarterTurn> = "R U  R' U'".parse().unwrap();
        assert_eq!(
            seq,
            MoveSequence(vec![
                qt!(R),
                qt!(U),
                qt!(R, CounterClockwise),
                qt!(U, CounterClockwise)
            ])
        );
        assert_eq!(seq.to_string(), "R U R' U'");
        assert_eq!(seq.inverse().to_string(), "U R U' R'");

        assert_eq!(
            "R U2 R'".parse::<MoveSequence<QuarterTurn>>(),
            Err(CubeError::InvalidMove("U2".into()))
        );
        assert!("".parse::<MoveSequence<QuarterTurn>>().unwrap().is_empty());
    }

    #[test]
    fn cancel_through_commuting_moves() {
        let seq: MoveSequence<QuarterTurn> = "F U D U' F'".parse().unwrap();
        assert_eq!(seq.cancel().to_string(), "F D F'");

        let seq: MoveSequence<QuarterTurn> = "R L R' L'".parse().unwrap();
        assert!(seq.cancel().is_empty());

        let seq: MoveSequence<QuarterTurn> = "R U R' U'".parse().unwrap();
        assert_eq!(seq.clone().cancel(), seq);
    }

    #[test]
    fn random_moves_cover_every_action() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [0usize; 12];
        for _ in 0..1200 {
            seen[rng.gen::<QuarterTurn>().action()] += 1;
        }
        assert!(seen.iter().all(|&n| n > 50), "{seen:?}");
    }

    proptest! {
        #[test]
        fn cancel_idempotent(mvs in vec(any::<QuarterTurn>(), 0..20).prop_map(MoveSequence)) {
            let cancelled = mvs.clone().cancel();
            prop_assert!(cancelled.len() <= mvs.len());
            prop_assert_eq!(cancelled.clone().cancel(), cancelled);
        }

        #[test]
        fn sequence_with_inverse_cancels(mvs in vec(any::<QuarterTurn>(), 0..20).prop_map(MoveSequence)) {
            let cancelled = mvs.cancel();
            prop_assert!(cancelled.clone().append(cancelled.inverse()).cancel().is_empty());
        }

        #[test]
        fn inverse_is_involution(m in any::<QuarterTurn>()) {
            prop_assert_eq!(m.inverse().inverse(), m);
            prop_assert_ne!(m.inverse(), m);
            prop_assert!(m.commutes_with(&m.inverse()));
        }
    }
}
