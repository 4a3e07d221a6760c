/// Per-face illumination: normals and intensity under a fixed light
use nalgebra::Vector3;

use crate::geometry::{Mesh, Rgba};
use crate::state::LightingMode;

/// Light direction before normalization, fixed relative to the viewer
const LIGHT_DIR: (f32, f32, f32) = (0.5, 0.5, 1.0);

/// Compute the unit normal of a face from its first three vertices.
///
/// Degenerate input falls back to an up-facing normal rather than
/// failing: collinear or zero-area faces, faces with fewer than three
/// indices, and indices outside the mesh's vertex array.
pub fn face_normal(mesh: &Mesh, face: &[usize]) -> Vector3<f32> {
    let up = Vector3::new(0.0, 0.0, 1.0);
    if face.len() < 3 {
        return up;
    }
    let (Some(v0), Some(v1), Some(v2)) = (
        mesh.vertices.get(face[0]),
        mesh.vertices.get(face[1]),
        mesh.vertices.get(face[2]),
    ) else {
        return up;
    };

    let normal = (v1 - v0).cross(&(v2 - v0));
    if normal.norm() > 0.0 {
        normal.normalize()
    } else {
        up
    }
}

/// Scalar face intensity for a given normal and lighting mode
fn intensity(normal: &Vector3<f32>, mode: LightingMode) -> f32 {
    let light = Vector3::new(LIGHT_DIR.0, LIGHT_DIR.1, LIGHT_DIR.2).normalize();
    let diffuse = normal.dot(&light).max(0.0);

    let raw = match mode {
        LightingMode::Realistic => 0.3 + diffuse * 0.7 + diffuse.powi(3) * 0.5,
        LightingMode::Flat => 1.0,
        LightingMode::Dramatic => 0.2 + diffuse * 0.8,
    };
    raw.clamp(0.0, 1.0)
}

/// Shade every renderable face of a mesh against the fixed light.
///
/// Returns one color per face with at least three vertices; degenerate
/// faces are skipped entirely, so callers filtering the face list the
/// same way stay index-aligned with the output.
pub fn shade(mesh: &Mesh, base_color: Rgba, mode: LightingMode) -> Vec<Rgba> {
    if mesh.is_empty() {
        return Vec::new();
    }

    mesh.faces
        .iter()
        .filter(|face| face.len() >= 3)
        .map(|face| base_color.scale_rgb(intensity(&face_normal(mesh, face), mode)))
        .collect()
}
