//! Collision detector: viewer position against obstacle bounding volumes.

use crate::data_structures::arena::ObstacleArena;
use crate::data_structures::pose::ViewerPose;

/// Test the viewer against every collision-enabled obstacle.
///
/// Returns the name of the first obstacle (in arena iteration order) whose
/// bounding volume contains the viewer position, boundary inclusive, and
/// stops testing the rest of the set for this frame. Pure read: pausing the
/// run on a hit is the caller's decision.
pub fn detect<'a>(arena: &'a ObstacleArena, pose: &ViewerPose) -> Option<&'a str> {
    arena
        .iter()
        .filter(|obstacle| obstacle.check_collisions)
        .find(|obstacle| obstacle.bounds().contains(pose.position))
        .map(|obstacle| obstacle.name.as_str())
}
