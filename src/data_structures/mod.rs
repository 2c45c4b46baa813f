//! Game data structures: obstacles, the obstacle arena, and the viewer pose.
//!
//! This module contains the core data types for run representation:
//!
//! - `obstacle` holds the positioned bounding volumes the viewer must avoid
//! - `arena` is an indexed arena of obstacles with stable name lookup
//! - `pose` is the per-frame tracked viewer position supplied by the XR host

pub mod arena;
pub mod obstacle;
pub mod pose;
