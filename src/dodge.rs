//! The obstacle-run flow: composes the per-tick systems.
//!
//! `DodgeFlow` owns the obstacle arena and runs the three passes in a fixed
//! order every tick: recycler, then score accumulator, then collision
//! detector. The order is fixed so results stay deterministic: the detector
//! always sees post-move positions, which makes "viewer inside a box pauses
//! the run within the same tick" hold.

use anyhow::Result;

use crate::{
    context::Context,
    course,
    data_structures::{arena::ObstacleArena, pose::ViewerPose},
    flow::{ArFlow, Out, Placement},
    state::{Control, RunState},
    systems::{collision, recycle, score},
};

pub struct DodgeFlow {
    arena: ObstacleArena,
    last_collision: Option<String>,
    recycled: Vec<String>,
}

impl DodgeFlow {
    pub fn new(arena: ObstacleArena) -> Self {
        Self {
            arena,
            last_collision: None,
            recycled: Vec::new(),
        }
    }

    /// Build the flow with a randomly generated standard course.
    pub fn with_standard_course(ctx: &Context) -> Result<Self> {
        Ok(Self::new(course::generate_standard(ctx)?))
    }

    pub fn obstacles(&self) -> &ObstacleArena {
        &self.arena
    }

    pub fn obstacles_mut(&mut self) -> &mut ObstacleArena {
        &mut self.arena
    }

    /// The obstacle that caused the most recent pause, if any.
    pub fn last_collision(&self) -> Option<&str> {
        self.last_collision.as_deref()
    }

    /// Names of the obstacles recycled since the last call; hosts use this
    /// to re-place the corresponding meshes in one go.
    pub fn take_recycled(&mut self) -> Vec<String> {
        std::mem::take(&mut self.recycled)
    }

    /// Run one tick of game logic.
    ///
    /// While the run is paused every pass is a no-op; pausing suspends the
    /// run, it does not cancel it. Without a viewer pose only the recycler
    /// runs and the pose-dependent checks skip this frame (tracking dropouts
    /// are transient, never fatal).
    pub fn tick(&mut self, ctx: &Context, state: &mut RunState, pose: Option<&ViewerPose>) {
        if state.is_paused() {
            return;
        }

        let recycled = recycle::advance(&mut self.arena, ctx, state);
        self.recycled.extend(recycled);

        let pose = match pose {
            Some(pose) => pose,
            None => {
                log::debug!("No viewer pose this frame, skipping pass and collision checks");
                return;
            }
        };

        score::settle_passes(&mut self.arena, ctx, state, pose);

        if let Some(name) = collision::detect(&self.arena, pose) {
            state.pause();
            log::info!("Collision with {}, run paused at score {}", name, state.score());
            self.last_collision = Some(name.to_string());
        }
    }
}

impl ArFlow<RunState, Control> for DodgeFlow {
    fn on_init(&mut self, _: &mut Context, _: &mut RunState) -> Out<RunState> {
        Out::Empty
    }

    fn on_update(
        &mut self,
        _: &Context,
        _: &mut RunState,
        _: instant::Duration,
    ) -> Out<RunState> {
        // All run logic is tick-quantized; nothing to animate between ticks.
        Out::Empty
    }

    fn on_tick(
        &mut self,
        ctx: &Context,
        state: &mut RunState,
        pose: Option<&ViewerPose>,
    ) -> Out<RunState> {
        self.tick(ctx, state, pose);
        Out::Empty
    }

    fn on_custom_events(
        &mut self,
        _: &Context,
        state: &mut RunState,
        event: Control,
    ) -> Option<Control> {
        state.apply(event);
        None
    }

    fn on_render(&self) -> Vec<Placement<'_>> {
        self.arena
            .iter()
            .map(|obstacle| Placement {
                name: &obstacle.name,
                position: obstacle.position,
                dimensions: obstacle.dimensions,
                material: &obstacle.material,
            })
            .collect()
    }
}
