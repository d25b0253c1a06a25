#![deny(clippy::all, clippy::pedantic)]
//! Episodic environment layer over the pocket cube core.
//!
//! The [`Env`] trait defines the reset/step contract an external driver
//! consumes; [`PocketCubeEnv`] implements it for the 2x2x2 cube with a
//! scrambled start, a per-step penalty reward and a 100-move cap.

pub mod env;
pub mod episode;

pub use env::{Env, StepInfo};
pub use episode::{PocketCubeEnv, MAX_STEPS};
