//! Minimal triangle-mesh type for the static reference geometry

use nalgebra::{Matrix4, Vector4};
use serde::{Deserialize, Serialize};

/// Static reference geometry emitted alongside a resolved placement
///
/// This is the decoded form of the embedded serialized assets; the core
/// never loads or renders models itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    /// Vertex positions
    pub vertices: Vec<[f64; 3]>,
    /// Triangle vertex indices
    pub triangles: Vec<[u32; 3]>,
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// A copy of the mesh with every vertex pushed through the transform
    pub fn transformed(&self, transform: &Matrix4<f64>) -> Mesh {
        let vertices = self
            .vertices
            .iter()
            .map(|v| {
                let p = transform * Vector4::new(v[0], v[1], v[2], 1.0);
                [p.x, p.y, p.z]
            })
            .collect();
        Mesh {
            vertices,
            triangles: self.triangles.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    fn triangle() -> Mesh {
        Mesh {
            vertices: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            triangles: vec![[0, 1, 2]],
        }
    }

    #[test]
    fn test_transformed_moves_vertices_keeps_topology() {
        let moved = triangle().transformed(&Matrix4::new_translation(&Vector3::new(0.0, 0.0, 2.0)));
        assert_eq!(moved.vertices[0], [0.0, 0.0, 2.0]);
        assert_eq!(moved.vertices[1], [1.0, 0.0, 2.0]);
        assert_eq!(moved.triangles, triangle().triangles);
    }

    #[test]
    fn test_identity_transform_is_noop() {
        assert_eq!(triangle().transformed(&Matrix4::identity()), triangle());
    }
}
