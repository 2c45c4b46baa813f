//! Central runtime context shared by all flows.
//!
//! The [`Context`] bundles the tuning knobs that every per-tick system reads:
//! tick cadence, the recycle threshold, obstacle spacing and the scoring
//! line. It is created once at session start and only mutated through
//! [`crate::flow::Out::Configure`] so all configuration changes flow through
//! one place.

/// Runtime configuration for an obstacle run.
///
/// Depth coordinates follow one convention: the viewer stands near
/// depth 0 and obstacles spawn at positive depth, moving toward negative
/// values as they approach and pass the viewer.
#[derive(Debug, Clone)]
pub struct Context {
    /// Cadence at which `on_tick` fires. 0 means every rendered frame.
    pub tick_duration_millis: u64,
    /// Depth behind the viewer at which a passed obstacle is sent back to
    /// the far end of the runway.
    pub recycle_threshold: f32,
    /// Depth gap kept between consecutive obstacles, both at course
    /// generation and when recycling. A single constant keeps the depth
    /// sequence contiguous with no gaps or overlaps.
    pub spacing: f32,
    /// How far behind the viewer's depth an obstacle must be before it
    /// counts as successfully passed.
    pub pass_margin: f32,
    /// Score awarded for each passed obstacle.
    pub pass_reward: u32,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            tick_duration_millis: 33,
            recycle_threshold: -15.0,
            spacing: 2.5,
            pass_margin: 0.5,
            pass_reward: 1,
        }
    }
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }
}
