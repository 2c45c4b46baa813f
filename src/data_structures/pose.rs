//! The tracked viewer pose supplied by the host XR layer.

use cgmath::{One, Point3, Quaternion};

/// Real-time tracked position and orientation of the viewer.
///
/// Read-only to the game logic; a fresh pose arrives from the host every
/// frame. Tracking can drop out for individual frames, in which case the
/// pose-dependent systems simply skip that frame.
#[derive(Clone, Copy, Debug)]
pub struct ViewerPose {
    pub position: Point3<f32>,
    pub orientation: Quaternion<f32>,
}

impl ViewerPose {
    pub fn new(position: Point3<f32>) -> Self {
        Self {
            position,
            // Identity: the detector only consumes the position, but hosts
            // that mirror a HUD want the full pose in one place.
            orientation: Quaternion::one(),
        }
    }

    /// Depth coordinate of the viewer (z axis).
    pub fn depth(&self) -> f32 {
        self.position.z
    }
}

impl From<Point3<f32>> for ViewerPose {
    fn from(position: Point3<f32>) -> Self {
        Self::new(position)
    }
}
