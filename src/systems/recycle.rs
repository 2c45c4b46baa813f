//! Obstacle recycler: endless-runway depth advance and repositioning.
//!
//! Each tick every obstacle moves toward the viewer by the current speed.
//! An obstacle whose depth drops below the recycle threshold is relocated
//! behind the current furthest obstacle at `max_depth + spacing`, which
//! preserves the contiguous decreasing depth sequence and the endless-runway
//! illusion.

use crate::context::Context;
use crate::data_structures::arena::ObstacleArena;
use crate::state::RunState;

/// Advance all obstacle depths by one tick and recycle passed obstacles.
///
/// No-op while the run is paused. Mutates obstacle depths (and the scoring
/// flag of recycled obstacles) in place; no other state is touched. Returns
/// the names of the obstacles recycled this tick so the host can re-place
/// their meshes.
///
/// The maximum depth is recomputed per relocation: when several obstacles
/// cross the threshold in the same tick, each lands one `spacing` behind the
/// previously recycled one. Ties at the maximum all yield the same reference
/// value, so equal-depth obstacles cannot cause unbounded displacement.
pub fn advance(arena: &mut ObstacleArena, ctx: &Context, state: &RunState) -> Vec<String> {
    if state.is_paused() {
        return Vec::new();
    }

    let speed = state.speed();
    arena.iter_mut().for_each(|obstacle| {
        obstacle.position.z -= speed;
    });

    let mut recycled = Vec::new();
    for idx in 0..arena.len() {
        let depth = match arena.get(idx) {
            Some(obstacle) => obstacle.position.z,
            None => continue,
        };
        if depth >= ctx.recycle_threshold {
            continue;
        }
        // max_depth is Some: the arena holds at least this obstacle
        let max_depth = arena.max_depth().unwrap_or(depth);
        if let Some(obstacle) = arena.get_mut(idx) {
            obstacle.position.z = max_depth + ctx.spacing;
            obstacle.scored = false;
            log::debug!(
                "Recycled {} from depth {} to {}",
                obstacle.name,
                depth,
                obstacle.position.z
            );
            recycled.push(obstacle.name.clone());
        }
    }
    recycled
}
