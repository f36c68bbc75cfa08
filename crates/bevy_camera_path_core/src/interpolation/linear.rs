use bevy::math::DVec3;

use crate::pose::CameraPose;

pub trait InterpolateLinear {
    fn interpolate_linear(&self, other: &Self, f: f64) -> Self;
}

impl InterpolateLinear for f32 {
    fn interpolate_linear(&self, other: &Self, f: f64) -> Self {
        self + (other - self) * f as f32
    }
}

impl InterpolateLinear for f64 {
    fn interpolate_linear(&self, other: &Self, f: f64) -> Self {
        self + (other - self) * f
    }
}

impl InterpolateLinear for DVec3 {
    fn interpolate_linear(&self, other: &Self, f: f64) -> Self {
        self.lerp(*other, f)
    }
}

/// Component-wise blend. The world is always taken from `self`.
///
/// Yaw and pitch are blended as plain numbers, so going from `170` to `-170` sweeps through
/// `0` instead of crossing the `±180` seam. Callers that want the short way around need to
/// unwrap the angles of consecutive waypoints themselves.
impl InterpolateLinear for CameraPose {
    fn interpolate_linear(&self, other: &Self, f: f64) -> Self {
        CameraPose {
            world: self.world.clone(),
            position: self.position.interpolate_linear(&other.position, f),
            yaw: self.yaw.interpolate_linear(&other.yaw, f),
            pitch: self.pitch.interpolate_linear(&other.pitch, f),
        }
    }
}
