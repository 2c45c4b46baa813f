//! Obstacle data and axis-aligned bounding volumes.
//!
//! An obstacle is a box the viewer must dodge. It is created once at scene
//! setup and then only its depth coordinate (and scoring flag) mutate during
//! a run; obstacles are recycled to the back of the runway instead of being
//! destroyed.

use cgmath::{Point3, Vector3};

/// Full extents of an obstacle box (host engines typically create boxes from
/// width/height/depth rather than half extents).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl Dimensions {
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    pub fn half_extents(&self) -> Vector3<f32> {
        Vector3::new(self.width / 2.0, self.height / 2.0, self.depth / 2.0)
    }
}

/// A positioned bounding volume the viewer must avoid.
///
/// `position` components are lateral (x), vertical (y) and depth (z). The
/// recycler mutates depth only. `scored` marks that the current pass has
/// already been rewarded; it is cleared when the obstacle recycles.
#[derive(Clone, Debug)]
pub struct Obstacle {
    pub name: String,
    pub position: Vector3<f32>,
    pub dimensions: Dimensions,
    pub material: String,
    pub check_collisions: bool,
    pub(crate) scored: bool,
}

impl Obstacle {
    pub fn new(
        name: impl Into<String>,
        position: Vector3<f32>,
        dimensions: Dimensions,
        material: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            position,
            dimensions,
            material: material.into(),
            check_collisions: true,
            scored: false,
        }
    }

    /// Depth coordinate of the obstacle (z axis).
    pub fn depth(&self) -> f32 {
        self.position.z
    }

    /// Whether the current pass has already been rewarded.
    pub fn scored(&self) -> bool {
        self.scored
    }

    /// The world-space bounding volume at the obstacle's current position.
    pub fn bounds(&self) -> Aabb {
        let half = self.dimensions.half_extents();
        Aabb {
            min: self.position - half,
            max: self.position + half,
        }
    }
}

/// Axis-aligned bounding box with an inclusive containment test.
#[derive(Clone, Copy, Debug)]
pub struct Aabb {
    pub min: Vector3<f32>,
    pub max: Vector3<f32>,
}

impl Aabb {
    /// Point-in-box test, inclusive of the boundary: a viewer standing
    /// exactly on a face counts as inside.
    pub fn contains(&self, point: Point3<f32>) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }
}
