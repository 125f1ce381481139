//! Embedded static reference meshes
//!
//! The tracker puck and lighthouse base-station models ship inside the
//! binary as base64-encoded serialized meshes and are decoded once on
//! first use. Components only ever transform copies of them.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::sync::LazyLock;
use thiserror::Error;

use vivetrack_core::Mesh;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("failed to decode embedded asset: {0}")]
    Decode(#[from] base64::DecodeError),
    #[error("failed to parse embedded asset: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Low-poly tracker puck, meters, base at z = 0
const TRACKER_MESH_B64: &str = "eyJ2ZXJ0aWNlcyI6W1swLjA1LDAuMCwwLjBdLFswLjAzNTM2LDAuMDM1MzYsMC4wXSxbMC4wLDAuMDUsMC4wXSxbLTAuMDM1MzYsMC4wMzUzNiwwLjBdLFstMC4wNSwwLjAsMC4wXSxbLTAuMDM1MzYsLTAuMDM1MzYsMC4wXSxbLTAuMCwtMC4wNSwwLjBdLFswLjAzNTM2LC0wLjAzNTM2LDAuMF0sWzAuMDM1LDAuMCwwLjA0Ml0sWzAuMDI0NzUsMC4wMjQ3NSwwLjA0Ml0sWzAuMCwwLjAzNSwwLjA0Ml0sWy0wLjAyNDc1LDAuMDI0NzUsMC4wNDJdLFstMC4wMzUsMC4wLDAuMDQyXSxbLTAuMDI0NzUsLTAuMDI0NzUsMC4wNDJdLFstMC4wLC0wLjAzNSwwLjA0Ml0sWzAuMDI0NzUsLTAuMDI0NzUsMC4wNDJdLFswLjAsMC4wLDAuMF0sWzAuMCwwLjAsMC4wNDJdXSwidHJpYW5nbGVzIjpbWzAsMTYsMV0sWzgsOSwxN10sWzAsMSw5XSxbMCw5LDhdLFsxLDE2LDJdLFs5LDEwLDE3XSxbMSwyLDEwXSxbMSwxMCw5XSxbMiwxNiwzXSxbMTAsMTEsMTddLFsyLDMsMTFdLFsyLDExLDEwXSxbMywxNiw0XSxbMTEsMTIsMTddLFszLDQsMTJdLFszLDEyLDExXSxbNCwxNiw1XSxbMTIsMTMsMTddLFs0LDUsMTNdLFs0LDEzLDEyXSxbNSwxNiw2XSxbMTMsMTQsMTddLFs1LDYsMTRdLFs1LDE0LDEzXSxbNiwxNiw3XSxbMTQsMTUsMTddLFs2LDcsMTVdLFs2LDE1LDE0XSxbNywxNiwwXSxbMTUsOCwxN10sWzcsMCw4XSxbNyw4LDE1XV19";

/// Lighthouse base-station box, meters, base at z = 0
const LIGHTHOUSE_MESH_B64: &str = "eyJ2ZXJ0aWNlcyI6W1stMC4wNCwtMC4wMywwXSxbMC4wNCwtMC4wMywwXSxbMC4wNCwwLjAzLDBdLFstMC4wNCwwLjAzLDBdLFstMC4wNCwtMC4wMywwLjA5XSxbMC4wNCwtMC4wMywwLjA5XSxbMC4wNCwwLjAzLDAuMDldLFstMC4wNCwwLjAzLDAuMDldXSwidHJpYW5nbGVzIjpbWzAsMiwxXSxbMCwzLDJdLFs0LDUsNl0sWzQsNiw3XSxbMCwxLDVdLFswLDUsNF0sWzEsMiw2XSxbMSw2LDVdLFsyLDMsN10sWzIsNyw2XSxbMywwLDRdLFszLDQsN11dfQ==";

static TRACKER_MESH: LazyLock<Mesh> =
    LazyLock::new(|| decode_mesh(TRACKER_MESH_B64).expect("embedded tracker mesh is valid"));

static LIGHTHOUSE_MESH: LazyLock<Mesh> =
    LazyLock::new(|| decode_mesh(LIGHTHOUSE_MESH_B64).expect("embedded lighthouse mesh is valid"));

/// Decode a base64-encoded serialized mesh
pub fn decode_mesh(encoded: &str) -> Result<Mesh, AssetError> {
    let bytes = STANDARD.decode(encoded)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// The tracker puck reference mesh
pub fn tracker_mesh() -> &'static Mesh {
    &TRACKER_MESH
}

/// The lighthouse base-station reference mesh
pub fn lighthouse_mesh() -> &'static Mesh {
    &LIGHTHOUSE_MESH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_mesh_decodes() {
        let mesh = tracker_mesh();
        assert_eq!(mesh.vertex_count(), 18);
        assert_eq!(mesh.triangle_count(), 32);
        // Indices stay in range
        let max = mesh.triangles.iter().flatten().max().copied().unwrap();
        assert!((max as usize) < mesh.vertex_count());
    }

    #[test]
    fn test_lighthouse_mesh_decodes() {
        let mesh = lighthouse_mesh();
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.triangle_count(), 12);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_mesh("not base64!").is_err());
        // Valid base64, invalid mesh payload
        let b64 = STANDARD.encode(b"{\"vertices\":42}");
        assert!(decode_mesh(&b64).is_err());
    }
}
