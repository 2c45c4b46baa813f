use cgmath::Vector3;
use dodge_ngin::course::{self, ObstacleType};
use dodge_ngin::data_structures::obstacle::{Dimensions, Obstacle};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::common::test_utils::scenario_context;

mod common;

#[test]
fn standard_course_lays_out_a_contiguous_runway() {
    let ctx = scenario_context();
    let mut rng = StdRng::seed_from_u64(7);

    let arena = course::generate(course::standard_types(), &mut rng, &ctx).unwrap();
    assert_eq!(arena.len(), 3);

    let mut depths: Vec<f32> = arena.iter().map(|o| o.depth()).collect();
    depths.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(depths, vec![3.0, 3.0 + ctx.spacing, 3.0 + 2.0 * ctx.spacing]);

    for obstacle in arena.iter() {
        assert!(obstacle.check_collisions);
        assert_eq!(obstacle.material, "redMat");
        assert_eq!(obstacle.position.y, 1.5);
    }
}

#[test]
fn generated_obstacles_use_their_types_lateral_slots() {
    let ctx = scenario_context();
    let types = course::standard_types();
    let mut rng = StdRng::seed_from_u64(42);
    let arena = course::generate(types.clone(), &mut rng, &ctx).unwrap();

    for obstacle in arena.iter() {
        let ty = types
            .iter()
            .find(|ty| obstacle.name.starts_with(ty.name))
            .expect("name derives from a catalog type");
        assert!(
            ty.x_slots.contains(&obstacle.position.x),
            "{} spawned at lateral {} outside its slots {:?}",
            obstacle.name,
            obstacle.position.x,
            ty.x_slots
        );
        assert_eq!(obstacle.dimensions, ty.dimensions);
    }
}

#[test]
fn empty_catalog_fails_fast() {
    let ctx = scenario_context();
    let mut rng = StdRng::seed_from_u64(0);
    let err = course::generate(Vec::new(), &mut rng, &ctx).unwrap_err();
    assert!(err.to_string().contains("catalog is empty"));
}

#[test]
fn non_positive_dimensions_fail_fast() {
    let ctx = scenario_context();
    let mut rng = StdRng::seed_from_u64(0);
    let types = vec![ObstacleType {
        name: "flat",
        dimensions: Dimensions::new(3.0, 0.0, 1.0),
        x_slots: vec![0.0],
    }];
    let err = course::generate(types, &mut rng, &ctx).unwrap_err();
    assert!(err.to_string().contains("non-positive dimensions"));
}

#[test]
fn missing_lateral_slots_fail_fast() {
    let ctx = scenario_context();
    let mut rng = StdRng::seed_from_u64(0);
    let types = vec![ObstacleType {
        name: "nowhere",
        dimensions: Dimensions::new(1.0, 1.0, 1.0),
        x_slots: vec![],
    }];
    let err = course::generate(types, &mut rng, &ctx).unwrap_err();
    assert!(err.to_string().contains("no lateral slots"));
}

#[test]
fn duplicate_obstacle_names_are_rejected() {
    let mut arena = dodge_ngin::data_structures::arena::ObstacleArena::new();
    let make = || {
        Obstacle::new(
            "twin",
            Vector3::new(0.0, 1.5, 3.0),
            Dimensions::new(1.0, 1.0, 1.0),
            "redMat",
        )
    };
    arena.insert(make()).unwrap();
    let err = arena.insert(make()).unwrap_err();
    assert!(err.to_string().contains("duplicate obstacle name"));
}
