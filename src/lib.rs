//! dodge-ngin
//!
//! A lightweight, engine-agnostic game core for an AR "dodge the obstacles"
//! run. The host 3D/XR engine keeps ownership of rendering, XR session
//! negotiation, GUI widgets and the render loop; this crate owns the logic
//! that runs inside the per-frame callback: moving obstacles toward the
//! viewer, recycling passed obstacles to the back of the runway, bounding-box
//! collision checks against the tracked viewer pose, and scoring.
//!
//! High-level modules
//! - `context`: shared runtime configuration (tick cadence, course tuning)
//! - `course`: obstacle catalog and randomized course generation
//! - `data_structures`: game data models (obstacles, arena, viewer pose)
//! - `dodge`: the obstacle-run flow composing the per-tick systems
//! - `flow`: high level flow control (frame/tick driver, flow trait)
//! - `state`: run state (speed, paused, score) and its control triggers
//! - `systems`: the per-tick passes (recycler, collision detector, scorer)
//!

pub mod context;
pub mod course;
pub mod data_structures;
pub mod dodge;
pub mod flow;
pub mod state;
pub mod systems;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;
