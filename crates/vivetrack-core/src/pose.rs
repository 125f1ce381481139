//! Pose conversion and the fixed coordinate correction
//!
//! The runtime reports poses right-handed, Y-up, -Z-forward, in meters.
//! The consuming system works right-handed, Z-up, world-XY. The correction
//! re-expresses the device-to-world transform in the consuming convention
//! via a change of basis, and scales the translation into working units.

use nalgebra::{Matrix3, Matrix4, Vector3};

use crate::device::RawPose;

impl RawPose {
    /// Promote the runtime's 3x4 row-major matrix to a homogeneous 4x4
    pub fn to_matrix(&self) -> Matrix4<f64> {
        let m = &self.matrix;
        Matrix4::new(
            m[0][0], m[0][1], m[0][2], m[0][3],
            m[1][0], m[1][1], m[1][2], m[1][3],
            m[2][0], m[2][1], m[2][2], m[2][3],
            0.0, 0.0, 0.0, 1.0,
        )
    }
}

/// Fixed axis/scale correction from runtime coordinates to the consuming
/// system's convention
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseCorrection {
    /// Uniform scale applied to translation: runtime meters to working units
    pub meters_to_units: f64,
}

impl Default for PoseCorrection {
    fn default() -> Self {
        Self {
            meters_to_units: 1.0,
        }
    }
}

impl PoseCorrection {
    pub fn new(meters_to_units: f64) -> Self {
        Self { meters_to_units }
    }

    /// Basis change from the runtime frame (Y-up) to the world frame (Z-up):
    /// x -> x, y -> z, z -> -y
    fn axis_swap() -> Matrix3<f64> {
        Matrix3::new(
            1.0, 0.0, 0.0,
            0.0, 0.0, -1.0,
            0.0, 1.0, 0.0,
        )
    }

    /// Apply the correction to a homogeneous device-to-world transform
    ///
    /// Rotation is conjugated by the axis swap so proper rigid transforms
    /// stay proper (the identity pose corrects to the identity); the scale
    /// applies to translation only.
    pub fn apply(&self, transform: &Matrix4<f64>) -> Matrix4<f64> {
        let c = Self::axis_swap();
        let rotation: Matrix3<f64> = transform.fixed_view::<3, 3>(0, 0).into_owned();
        let translation: Vector3<f64> = transform.fixed_view::<3, 1>(0, 3).into_owned();

        let corrected_rotation = c * rotation * c.transpose();
        let corrected_translation = c * translation * self.meters_to_units;

        let mut corrected = Matrix4::identity();
        corrected
            .fixed_view_mut::<3, 3>(0, 0)
            .copy_from(&corrected_rotation);
        corrected
            .fixed_view_mut::<3, 1>(0, 3)
            .copy_from(&corrected_translation);
        corrected
    }

    /// Convert a raw pose and apply the correction in one step
    pub fn corrected_matrix(&self, pose: &RawPose) -> Matrix4<f64> {
        self.apply(&pose.to_matrix())
    }
}
