#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Pocket cube core
//!
//! State model and move engine for a 2x2x2 twisty puzzle.
//!
//! ## Key components
//!
//! -   **State:** [`CubeState`] stores six faces of 2x2 color labels and
//!     answers the solved predicate. It is a plain value; every transform
//!     produces a new state.
//! -   **Moves:** [`Rotation`] is the closed set of six quarter-turns.
//!     Each is a fixed permutation of the 24 sticker positions, applied
//!     through [`Rotation::apply`]. Invalid action codes are rejected by
//!     [`Rotation::from_index`] instead of falling back to a default move.
//! -   **Scrambling:** [`Scrambler`] draws randomized starting states that
//!     keep exactly four stickers of each color, with three pinned
//!     positions. Its RNG is injectable so scrambles replay under a seed.
//!
//! The crate does no I/O and holds no global state; the episodic
//! environment built on top of it lives in the `rl` crate.

pub mod rotation;
pub mod scramble;
pub mod types;

use thiserror::Error;

pub use rotation::Rotation;
pub use scramble::{Scrambler, PINNED_POSITIONS};
pub use types::{CubeState, Face, STICKER_COUNT};

/// Errors produced by the cube core.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CubeError {
    /// An action code outside the closed set of six rotations.
    #[error("invalid action code {0}, expected a value in 0..6")]
    InvalidAction(usize),
}
