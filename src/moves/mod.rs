//! Module for puzzle move generics and related functionality

use std::fmt;
use std::str::FromStr;

/// Enum for representing the cancellation of two adjacent moves.
/// See [`cancel`](Move::cancel).
#[derive(Debug, Eq, PartialEq)]
pub enum Cancellation<M: Move> {
    /// The moves cancelled completely.
    ///
    /// e.g. `R R'` cancels completely
    Identity,
    /// The moves didn't cancel
    ///
    /// e.g. `R U` stays as `R U` when cancelling
    Unchanged(M, M),
}

/// A move, for use in writing expressions or algorithms. A term of this trait is a generator (or
/// the inverse of one) in some presentation of the puzzle group.
///
/// Two kinds of relation are assumed: some terms commute (e.g. R and L on any cube) and a term
/// followed by its inverse is the identity. Commutativity is encoded in `commutes_with` and
/// inversion in `cancel`. These are all that `MoveSequence::cancel` relies on, so any other
/// relation of the puzzle (e.g. `R R R = R'`) is left alone.
pub trait Move: Eq + Clone {
    /// Take the inverse of a move. These inverses must satisfy the invertibility conditions of
    /// a group, i.e. that `X X^{-1} = X^{-1} X = e` where `e` is the empty sequence.
    fn inverse(self) -> Self
    where
        Self: Sized;

    /// Returns whether the two moves commute, i.e. can be swapped when adjacent. It is required
    /// that this property is transitive.
    ///
    /// If A and B are moves, then `A.commutes_with(B)` iff
    /// `A B = B A`
    /// moreover, if `B.commutes_with(C)`, then it must be true that `A.commutes_with(C)`
    fn commutes_with(&self, b: &Self) -> bool;

    /// Return the cancellation of two moves.
    ///
    /// ```rust
    /// # fn main() {
    /// use nxn_cube::qt;
    /// use nxn_cube::moves::{Cancellation, Move};
    ///
    /// let u_prime = qt!(U, CounterClockwise);
    /// assert!(qt!(R).cancel(u_prime) == Cancellation::Unchanged(qt!(R), u_prime));
    /// assert!(qt!(R).cancel(qt!(R, CounterClockwise)) == Cancellation::Identity);
    /// # }
    /// ```
    fn cancel(self, b: Self) -> Cancellation<Self>
    where
        Self: Sized;
}

/// A sequence of moves (also known as an algorithm) for some specific type of move.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MoveSequence<M: Move>(pub Vec<M>);

impl<M: Move> MoveSequence<M> {
    /// Invert a sequence of moves.
    ///
    /// If `X` is a sequence of moves and `X^{-1}` is its inverse and `o` is composition, then
    /// `X o X^{-1} = X^{-1} o X = e` where `e` is the empty sequence.
    pub fn inverse(self) -> Self {
        Self(self.0.into_iter().rev().map(|m| m.inverse()).collect())
    }

    /// Cancel an alg completely, including rearrangement of commutative moves.
    pub fn cancel(mut self) -> Self {
        let mut cancellation: Vec<M> = Vec::new();

        for next_mv in self.0.drain(..) {
            // Walk back through the reduced prefix for as long as the new move commutes with what
            // it passes. The prefix is already fully reduced, so removing a single term from it
            // cannot expose a new cancellation.
            let mut cancelled = false;

            for i in (0..cancellation.len()).rev() {
                if cancellation[i].clone().cancel(next_mv.clone()) == Cancellation::Identity {
                    cancellation.remove(i);
                    cancelled = true;
                    break;
                }

                if !next_mv.commutes_with(&cancellation[i]) {
                    break;
                }
            }

            if !cancelled {
                cancellation.push(next_mv);
            }
        }

        Self(cancellation)
    }

    /// The number of moves in the sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence contains no moves.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Concatenate another sequence onto the end of this one.
    pub fn append(mut self, mut other: Self) -> Self {
        self.0.append(&mut other.0);
        self
    }

    /// Iterate over the moves in application order.
    pub fn iter(&self) -> std::slice::Iter<'_, M> {
        self.0.iter()
    }
}

impl<M: Move> FromIterator<M> for MoveSequence<M> {
    fn from_iter<I: IntoIterator<Item = M>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a, M: Move> IntoIterator for &'a MoveSequence<M> {
    type Item = &'a M;
    type IntoIter = std::slice::Iter<'a, M>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Parses whitespace separated moves. Nothing is returned unless every token parses.
impl<M: Move + FromStr> FromStr for MoveSequence<M> {
    type Err = M::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace().map(str::parse).collect()
    }
}

impl<M: Move + fmt::Display> fmt::Display for MoveSequence<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, m) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{m}")?;
        }
        Ok(())
    }
}
