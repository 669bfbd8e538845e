//! This module defines the error type used throughout the crate.

use thiserror::Error;

/// Errors raised while building a cube or applying moves to it. Every operation that returns one
/// of these validates before touching any state, so a failed call leaves the cube unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CubeError {
    /// A move referenced a face other than U, D, L, R, F or B.
    #[error("invalid face `{0}`, expected one of U, D, L, R, F, B")]
    InvalidFace(String),
    /// A facelet vector did not have exactly 6·N² entries.
    #[error("facelet vector has {actual} entries, expected {expected} for a cube of size {size}")]
    InvalidStateLength {
        /// The requested cube size N.
        size: usize,
        /// 6·N².
        expected: usize,
        /// The length that was supplied.
        actual: usize,
    },
    /// A facelet vector contained a value that is not a color id.
    #[error("facelet {index} has value {value}, expected a color id in 0..=5")]
    InvalidStateDomain {
        /// Position of the offending entry.
        index: usize,
        /// The offending value.
        value: i64,
    },
    /// Notation which names a face but is not a quarter turn, e.g. `U2` or an empty token.
    #[error("invalid move `{0}`, expected a quarter turn such as `U` or `U'`")]
    InvalidMove(String),
    /// A discrete action index outside of `0..12`.
    #[error("action index {0} is out of bounds, expected a value in 0..12")]
    InvalidAction(usize),
}
