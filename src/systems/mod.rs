//! The per-tick passes over the obstacle arena.
//!
//! All three systems run synchronously inside the same per-frame callback,
//! single-threaded, in a fixed order decided by [`crate::dodge::DodgeFlow`]:
//!
//! 1. `recycle` advances obstacle depths and recycles passed obstacles
//! 2. `score` rewards fresh passes behind the viewer
//! 3. `collision` tests the viewer against every bounding volume
//!
//! The arena has one logical writer per pass, so sequential access is all
//! the coordination required.

pub mod collision;
pub mod recycle;
pub mod score;
