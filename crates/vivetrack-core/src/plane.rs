//! Plane placement implied by a corrected device transform

use nalgebra::{Matrix4, Vector3, Vector4};
use serde::{Deserialize, Serialize};

/// A plane placement: origin plus X/Y axes
///
/// The canonical reference is [`Plane::world_xy`]; a resolved device
/// placement is that reference pushed through the corrected transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    pub origin: [f64; 3],
    pub x_axis: [f64; 3],
    pub y_axis: [f64; 3],
}

impl Plane {
    /// The world-XY reference plane: origin at the world origin, unit X/Y
    pub fn world_xy() -> Self {
        Self {
            origin: [0.0, 0.0, 0.0],
            x_axis: [1.0, 0.0, 0.0],
            y_axis: [0.0, 1.0, 0.0],
        }
    }

    /// Plane normal (x cross y)
    pub fn normal(&self) -> [f64; 3] {
        let n = Vector3::from(self.x_axis).cross(&Vector3::from(self.y_axis));
        [n.x, n.y, n.z]
    }

    /// Apply a homogeneous transform: the origin moves as a point, the axes
    /// as directions (renormalized so scaling transforms still yield unit
    /// axes)
    pub fn transformed(&self, transform: &Matrix4<f64>) -> Plane {
        let origin = transform * Vector4::new(self.origin[0], self.origin[1], self.origin[2], 1.0);
        let x_axis = transform * Vector4::new(self.x_axis[0], self.x_axis[1], self.x_axis[2], 0.0);
        let y_axis = transform * Vector4::new(self.y_axis[0], self.y_axis[1], self.y_axis[2], 0.0);

        Plane {
            origin: [origin.x, origin.y, origin.z],
            x_axis: unit_or_zero(x_axis.xyz()),
            y_axis: unit_or_zero(y_axis.xyz()),
        }
    }
}

impl Default for Plane {
    fn default() -> Self {
        Self::world_xy()
    }
}

fn unit_or_zero(v: Vector3<f64>) -> [f64; 3] {
    let n = v.norm();
    if n > 0.0 {
        [v.x / n, v.y / n, v.z / n]
    } else {
        [0.0, 0.0, 0.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn close(a: [f64; 3], b: [f64; 3]) -> bool {
        (Vector3::from(a) - Vector3::from(b)).norm() < EPS
    }

    #[test]
    fn test_world_xy_normal_points_up() {
        assert!(close(Plane::world_xy().normal(), [0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_identity_transform_is_noop() {
        let plane = Plane::world_xy().transformed(&Matrix4::identity());
        assert_eq!(plane, Plane::world_xy());
    }

    #[test]
    fn test_translation_moves_origin_only() {
        let transform = Matrix4::new_translation(&Vector3::new(1.0, 2.0, 3.0));
        let plane = Plane::world_xy().transformed(&transform);
        assert!(close(plane.origin, [1.0, 2.0, 3.0]));
        assert!(close(plane.x_axis, [1.0, 0.0, 0.0]));
        assert!(close(plane.y_axis, [0.0, 1.0, 0.0]));
    }

    #[test]
    fn test_rotation_turns_axes() {
        // 90 degrees about Z: x -> y, y -> -x
        let transform =
            Matrix4::from_axis_angle(&Vector3::z_axis(), std::f64::consts::FRAC_PI_2);
        let plane = Plane::world_xy().transformed(&transform);
        assert!(close(plane.x_axis, [0.0, 1.0, 0.0]));
        assert!(close(plane.y_axis, [-1.0, 0.0, 0.0]));
        assert!(close(plane.normal(), [0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_scaling_keeps_axes_unit_length() {
        let transform = Matrix4::new_scaling(25.4);
        let plane = Plane::world_xy().transformed(&transform);
        assert!(close(plane.x_axis, [1.0, 0.0, 0.0]));
        assert!(close(plane.y_axis, [0.0, 1.0, 0.0]));
    }
}
