//! Score accumulator: rewards each obstacle pass exactly once.
//!
//! An obstacle counts as passed when its depth crosses behind the viewer's
//! depth minus a small margin. The per-obstacle `scored` flag makes the
//! reward one-shot even though the pass condition keeps holding on every
//! frame until the recycler sends the obstacle back and clears the flag.

use crate::context::Context;
use crate::data_structures::arena::ObstacleArena;
use crate::data_structures::pose::ViewerPose;
use crate::state::RunState;

/// Reward obstacles that freshly crossed behind the viewer this tick.
///
/// No-op while paused. Returns the number of newly rewarded passes.
pub fn settle_passes(
    arena: &mut ObstacleArena,
    ctx: &Context,
    state: &mut RunState,
    pose: &ViewerPose,
) -> u32 {
    if state.is_paused() {
        return 0;
    }

    let pass_line = pose.depth() - ctx.pass_margin;
    let mut passes = 0;
    for obstacle in arena.iter_mut() {
        if obstacle.scored || obstacle.position.z >= pass_line {
            continue;
        }
        obstacle.scored = true;
        passes += 1;
        log::debug!("Passed {} at depth {}", obstacle.name, obstacle.position.z);
    }
    for _ in 0..passes {
        state.award(ctx.pass_reward);
    }
    passes
}
