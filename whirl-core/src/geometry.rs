/// Geometry primitives for 3D rendering
use nalgebra::Point3;

/// An RGBA color with floating-point channels in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Scale the RGB channels by an intensity, leaving alpha untouched
    pub fn scale_rgb(&self, intensity: f32) -> Self {
        Self {
            r: self.r * intensity,
            g: self.g * intensity,
            b: self.b * intensity,
            a: self.a,
        }
    }
}

/// An indexed polygon mesh: a vertex array plus faces referencing it.
///
/// Faces are ordered index lists with consistent winding; quads are the
/// primitive the generators emit. Meshes are rebuilt every frame, so
/// there is no persistent mesh identity.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub vertices: Vec<Point3<f32>>,
    pub faces: Vec<Vec<usize>>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    pub fn with_capacity(vertices: usize, faces: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            faces: Vec::with_capacity(faces),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn add_vertex(&mut self, x: f32, y: f32, z: f32) -> usize {
        self.vertices.push(Point3::new(x, y, z));
        self.vertices.len() - 1
    }

    /// Add a quad face over four existing vertex indices
    pub fn add_quad(&mut self, i0: usize, i1: usize, i2: usize, i3: usize) {
        debug_assert!(i0.max(i1).max(i2).max(i3) < self.vertices.len());
        self.faces.push(vec![i0, i1, i2, i3]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_quad_indices() {
        let mut mesh = Mesh::new();
        let a = mesh.add_vertex(0.0, 0.0, 0.0);
        let b = mesh.add_vertex(1.0, 0.0, 0.0);
        let c = mesh.add_vertex(1.0, 1.0, 0.0);
        let d = mesh.add_vertex(0.0, 1.0, 0.0);
        mesh.add_quad(a, b, c, d);

        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.faces.len(), 1);
        assert!(mesh.faces[0].iter().all(|&i| i < mesh.vertices.len()));
    }

    #[test]
    fn test_scale_rgb_preserves_alpha() {
        let color = Rgba::new(0.8, 0.4, 0.2, 0.9);
        let scaled = color.scale_rgb(0.5);
        assert_eq!(scaled.r, 0.4);
        assert_eq!(scaled.g, 0.2);
        assert!((scaled.b - 0.1).abs() < 1e-6);
        assert_eq!(scaled.a, 0.9);
    }

    #[test]
    fn test_empty_mesh() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.faces.len(), 0);
    }
}
