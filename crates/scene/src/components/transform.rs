use foundation::math::Vec3;

use crate::animation::Pose;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    /// Euler angles in radians, applied X then Y then Z.
    pub rotation: Vec3,
    pub scale: f64,
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: 1.0,
        }
    }

    pub fn translate(position: Vec3) -> Self {
        Self {
            position,
            ..Self::identity()
        }
    }

    /// Overwrites position, yaw and uniform scale; pitch and roll are kept.
    pub fn with_pose(self, pose: Pose) -> Self {
        Self {
            position: pose.position,
            rotation: Vec3::new(self.rotation.x, pose.rotation_y, self.rotation.z),
            scale: pose.scale,
        }
    }
}
