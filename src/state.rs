//! Run state and its control triggers.
//!
//! The run state is an explicit struct passed by reference into every
//! per-tick function instead of living in ambient closure captures. GUI
//! buttons and controller bindings on the host side are treated as opaque
//! triggers: they produce a [`Control`] which the flow applies via
//! [`RunState::apply`].

/// Step applied by the `SpeedUp`/`SlowDown` triggers.
const SPEED_STEP: f32 = 0.01;

/// Mutable state of one obstacle run.
///
/// `speed` is measured in depth units per tick. `score` is monotonically
/// non-decreasing while the run is not paused. `paused` is a suspension
/// point, not a cancellation: all per-tick mutation stops until an explicit
/// resume.
#[derive(Debug, Clone)]
pub struct RunState {
    speed: f32,
    paused: bool,
    score: u32,
}

impl Default for RunState {
    fn default() -> Self {
        Self {
            speed: 0.05,
            paused: false,
            score: 0,
        }
    }
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Set the per-tick speed. Negative values are clamped to zero; the
    /// obstacles only ever move toward the viewer.
    pub fn set_speed(&mut self, speed: f32) {
        if speed < 0.0 {
            log::warn!("Ignoring negative speed {}, clamping to 0", speed);
        }
        self.speed = speed.max(0.0);
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Add `reward` to the score. No-op while paused so the score stays
    /// frozen together with the obstacles.
    pub fn award(&mut self, reward: u32) {
        if self.paused {
            return;
        }
        self.score += reward;
    }

    /// Apply an opaque host-side trigger (GUI button, controller binding).
    pub fn apply(&mut self, control: Control) {
        match control {
            Control::SpeedUp => self.set_speed(self.speed + SPEED_STEP),
            Control::SlowDown => self.set_speed(self.speed - SPEED_STEP),
            Control::SetSpeed(speed) => self.set_speed(speed),
            Control::Pause => self.pause(),
            Control::Resume => self.resume(),
        }
    }
}

/// Host-side control triggers for the run state.
///
/// The host wires its speed/pause widgets to these and forwards them through
/// [`crate::flow::App::custom_event`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Control {
    SpeedUp,
    SlowDown,
    SetSpeed(f32),
    Pause,
    Resume,
}
