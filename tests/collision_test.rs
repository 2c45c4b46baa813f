use dodge_ngin::data_structures::arena::ObstacleArena;
use dodge_ngin::dodge::DodgeFlow;
use dodge_ngin::state::RunState;
use dodge_ngin::systems::collision;

use crate::common::test_utils::{arena_with_depths, pose_at, scenario_context, unit_box};

mod common;

#[test]
fn viewer_inside_box_pauses_within_same_tick() {
    // Reference scenario: viewer at (0, 1.6, 0), box centered there with
    // half-extents (1, 1, 1).
    let ctx = scenario_context();
    let mut arena = ObstacleArena::new();
    let mut obstacle = unit_box("wall", 0.0, 1.6, 0.0);
    obstacle.dimensions = dodge_ngin::data_structures::obstacle::Dimensions::new(2.0, 2.0, 2.0);
    arena.insert(obstacle).unwrap();

    let mut flow = DodgeFlow::new(arena);
    let mut state = RunState::new();
    let pose = pose_at(0.0, 1.6, 0.0);

    flow.tick(&ctx, &mut state, Some(&pose));

    assert!(state.is_paused());
    assert_eq!(flow.last_collision(), Some("wall"));
}

#[test]
fn boundary_is_inclusive() {
    let arena = arena_with_depths(&[0.0]);
    // obst1 is a unit box at (0, 1.5, 0): faces at x = +-0.5.
    let on_face = pose_at(0.5, 1.5, 0.0);
    assert_eq!(collision::detect(&arena, &on_face), Some("obst1"));

    let just_outside = pose_at(0.5001, 1.5, 0.0);
    assert_eq!(collision::detect(&arena, &just_outside), None);
}

#[test]
fn first_hit_in_iteration_order_wins() {
    // Two overlapping boxes both containing the viewer.
    let mut arena = ObstacleArena::new();
    arena.insert(unit_box("front", 0.0, 1.5, 0.0)).unwrap();
    arena.insert(unit_box("back", 0.1, 1.5, 0.1)).unwrap();

    let pose = pose_at(0.2, 1.5, 0.2);
    assert_eq!(collision::detect(&arena, &pose), Some("front"));
}

#[test]
fn collision_disabled_obstacles_are_skipped() {
    let mut arena = ObstacleArena::new();
    let mut ghost = unit_box("ghost", 0.0, 1.5, 0.0);
    ghost.check_collisions = false;
    arena.insert(ghost).unwrap();

    let pose = pose_at(0.0, 1.5, 0.0);
    assert_eq!(collision::detect(&arena, &pose), None);
}

#[test]
fn missing_pose_skips_detection_but_keeps_moving() {
    let ctx = scenario_context();
    let mut flow = DodgeFlow::new(arena_with_depths(&[2.0]));
    let mut state = RunState::new();
    state.set_speed(0.05);

    flow.tick(&ctx, &mut state, None);

    assert!(!state.is_paused());
    assert_eq!(flow.last_collision(), None);
    let depth = flow.obstacles().by_name("obst1").unwrap().depth();
    assert!((depth - 1.95).abs() < 1e-6);
}

#[test]
fn paused_run_reports_no_new_collisions() {
    let ctx = scenario_context();
    let mut flow = DodgeFlow::new(arena_with_depths(&[0.0]));
    let mut state = RunState::new();
    state.pause();

    flow.tick(&ctx, &mut state, Some(&pose_at(0.0, 1.5, 0.0)));

    assert_eq!(flow.last_collision(), None);
    assert!(state.is_paused());
}
