//! A facelet-level simulator for N×N×N twisty cubes. This is mostly meant to be driven by an
//! environment wrapper (see [`env`]) or a stateless request handler.

#![deny(missing_docs)]

pub mod cube;
pub mod env;
pub mod error;
pub mod moves;
