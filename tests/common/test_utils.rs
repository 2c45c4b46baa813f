use cgmath::{Point3, Vector3};
use dodge_ngin::context::Context;
use dodge_ngin::data_structures::arena::ObstacleArena;
use dodge_ngin::data_structures::obstacle::{Dimensions, Obstacle};
use dodge_ngin::data_structures::pose::ViewerPose;

/// Context matching the reference scenario: recycle at -15, spacing 3,
/// ticking every frame.
pub fn scenario_context() -> Context {
    Context {
        tick_duration_millis: 0,
        recycle_threshold: -15.0,
        spacing: 3.0,
        pass_margin: 0.5,
        pass_reward: 1,
    }
}

/// A 1x1x1 collision-enabled box at the given position.
pub fn unit_box(name: &str, x: f32, y: f32, z: f32) -> Obstacle {
    Obstacle::new(
        name,
        Vector3::new(x, y, z),
        Dimensions::new(1.0, 1.0, 1.0),
        "redMat",
    )
}

/// An arena of unit boxes named obst1, obst2, ... at the given depths,
/// centered laterally at chest height.
pub fn arena_with_depths(depths: &[f32]) -> ObstacleArena {
    let mut arena = ObstacleArena::with_capacity(depths.len());
    for (i, &z) in depths.iter().enumerate() {
        arena
            .insert(unit_box(&format!("obst{}", i + 1), 0.0, 1.5, z))
            .expect("unique test names");
    }
    arena
}

pub fn pose_at(x: f32, y: f32, z: f32) -> ViewerPose {
    ViewerPose::new(Point3::new(x, y, z))
}

/// A pose well outside every obstacle so ticks run without collisions.
pub fn clear_pose() -> ViewerPose {
    pose_at(50.0, 1.6, 0.0)
}

pub fn depths(arena: &ObstacleArena) -> Vec<f32> {
    arena.iter().map(|obstacle| obstacle.position.z).collect()
}
