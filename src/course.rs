//! Obstacle catalog and randomized course generation.
//!
//! This module contains all logic for building the initial obstacle set at
//! scene setup. The standard catalog holds three box kinds: a low bar to
//! duck under and two side steps to lean around, each with a couple of
//! lateral slots so repeated runs don't feel identical. Malformed catalog
//! data is a configuration error and fails fast before the run starts.

use anyhow::{Context as _, bail};
use cgmath::Vector3;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::context::Context;
use crate::data_structures::arena::ObstacleArena;
use crate::data_structures::obstacle::{Dimensions, Obstacle};

/// Vertical center of every obstacle, roughly chest height for a standing
/// viewer.
const OBSTACLE_HEIGHT_CENTER: f32 = 1.5;

/// Depth of the first obstacle in front of the viewer.
const FIRST_OBSTACLE_DEPTH: f32 = 3.0;

/// Material tag assigned to generated obstacles. The host maps tags to its
/// own material instances.
const OBSTACLE_MATERIAL: &str = "redMat";

/// One entry of the obstacle catalog: box dimensions plus the lateral slots
/// an instance may spawn at.
#[derive(Clone, Debug)]
pub struct ObstacleType {
    pub name: &'static str,
    pub dimensions: Dimensions,
    pub x_slots: Vec<f32>,
}

/// The standard catalog: duck under, step left, step right.
pub fn standard_types() -> Vec<ObstacleType> {
    vec![
        ObstacleType {
            name: "duck",
            dimensions: Dimensions::new(3.0, 0.5, 1.0),
            x_slots: vec![0.2, 0.27],
        },
        ObstacleType {
            name: "stepLeft",
            dimensions: Dimensions::new(3.0, 3.0, 1.0),
            x_slots: vec![1.0, 1.45],
        },
        ObstacleType {
            name: "stepRight",
            dimensions: Dimensions::new(3.0, 3.0, 1.0),
            x_slots: vec![-1.0, -1.45],
        },
    ]
}

/// Generate a course from the standard catalog with a non-deterministic rng.
pub fn generate_standard(ctx: &Context) -> anyhow::Result<ObstacleArena> {
    generate(standard_types(), &mut rand::thread_rng(), ctx)
}

/// Build the initial obstacle arena from a catalog.
///
/// The catalog is shuffled, then one obstacle per type is laid out along the
/// depth axis starting at [`FIRST_OBSTACLE_DEPTH`] with `ctx.spacing` between
/// consecutive obstacles, each at a random lateral slot of its type. All
/// validation happens here: an invalid catalog never produces a partially
/// built scene.
pub fn generate<R: Rng>(
    mut types: Vec<ObstacleType>,
    rng: &mut R,
    ctx: &Context,
) -> anyhow::Result<ObstacleArena> {
    if types.is_empty() {
        bail!("obstacle catalog is empty, cannot build a course");
    }
    for ty in &types {
        validate_type(ty)?;
    }

    types.shuffle(rng);

    let mut arena = ObstacleArena::with_capacity(types.len());
    let mut depth = FIRST_OBSTACLE_DEPTH;
    for (index, ty) in types.iter().enumerate() {
        // x_slots is non-empty after validation
        let x = *ty
            .x_slots
            .choose(rng)
            .context("obstacle type has no lateral slots")?;
        let name = format!("{}{}", ty.name, index + 1);
        let obstacle = Obstacle::new(
            name,
            Vector3::new(x, OBSTACLE_HEIGHT_CENTER, depth),
            ty.dimensions,
            OBSTACLE_MATERIAL,
        );
        arena
            .insert(obstacle)
            .context("failed to place generated obstacle")?;
        depth += ctx.spacing;
    }

    log::info!(
        "Generated course with {} obstacles, depths {}..{}",
        arena.len(),
        FIRST_OBSTACLE_DEPTH,
        depth - ctx.spacing
    );
    Ok(arena)
}

fn validate_type(ty: &ObstacleType) -> anyhow::Result<()> {
    let Dimensions {
        width,
        height,
        depth,
    } = ty.dimensions;
    if width <= 0.0 || height <= 0.0 || depth <= 0.0 {
        bail!(
            "obstacle type {} has non-positive dimensions {}x{}x{}",
            ty.name,
            width,
            height,
            depth
        );
    }
    if ty.x_slots.is_empty() {
        bail!("obstacle type {} has no lateral slots", ty.name);
    }
    Ok(())
}
