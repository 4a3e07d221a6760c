/// Procedural mesh generators for the fan parts.
///
/// Each generator is a pure function of the configuration (plus the
/// current rotation where relevant) and emits a fresh mesh. A zero
/// blade count or non-positive driving dimension yields an empty mesh
/// instead of an error; downstream stages treat empty meshes as no-ops.
use std::f32::consts::PI;

use crate::config::{Archetype, FanConfig};
use crate::geometry::Mesh;

/// Radial samples along a blade
const BLADE_SEGMENTS: usize = 20;
/// Peak sinusoidal twist along the blade span, in degrees
const BLADE_TWIST_DEG: f32 = 15.0;

/// Angular samples around the motor housing (closed ring, seam duplicated)
const MOTOR_SAMPLES: usize = 33;
/// Height levels of the motor housing between z = -0.2 and +0.2
const MOTOR_LEVELS: usize = 6;

/// Angular samples around the stand pole and cage (closed ring)
const RING_SAMPLES: usize = 16;
/// Height levels along the stand pole
const POLE_LEVELS: usize = 20;
const POLE_RADIUS: f32 = 0.05;
const BASE_RADIUS: f32 = 0.3;

/// Concentric rings per cage grid
const CAGE_RINGS: usize = 8;

/// Closed ring of `count` angles covering [0, 2π], seam duplicated
fn ring_angles(count: usize) -> impl Iterator<Item = f32> {
    let step = 2.0 * PI / (count - 1) as f32;
    (0..count).map(move |k| k as f32 * step)
}

/// Generate a single blade as a ruled surface at the given hub angle.
///
/// The cross-section twists sinusoidally along the span (zero at root
/// and tip) while the half-width tapers to a point at both ends. Two
/// rails, offset vertically and laterally in opposite directions, are
/// stitched into quads segment by segment.
pub fn blade(config: &FanConfig, blade_angle: f32) -> Mesh {
    if config.blade_length <= 0.0 || config.blade_width <= 0.0 {
        return Mesh::new();
    }

    let mut rails = Vec::with_capacity(BLADE_SEGMENTS + 1);
    for i in 0..=BLADE_SEGMENTS {
        let t = i as f32 / BLADE_SEGMENTS as f32;

        let r = config.motor_radius + t * config.blade_length;
        let twist = (t * PI).sin() * BLADE_TWIST_DEG.to_radians();
        let width = config.blade_width * (1.0 - t * 0.5) * (t * PI).sin();

        let (sin_a, cos_a) = (blade_angle + twist).sin_cos();

        let top = (
            r * cos_a - width * sin_a,
            r * sin_a + width * cos_a,
            (t * PI).sin() * 0.1,
        );
        let bottom = (
            r * cos_a + width * sin_a,
            r * sin_a - width * cos_a,
            -(t * PI).sin() * 0.05,
        );
        rails.push((top, bottom));
    }

    let mut mesh = Mesh::with_capacity(BLADE_SEGMENTS * 4, BLADE_SEGMENTS);
    for i in 0..BLADE_SEGMENTS {
        let (top_a, bottom_a) = rails[i];
        let (top_b, bottom_b) = rails[i + 1];

        let i0 = mesh.add_vertex(top_a.0, top_a.1, top_a.2);
        let i1 = mesh.add_vertex(top_b.0, top_b.1, top_b.2);
        let i2 = mesh.add_vertex(bottom_b.0, bottom_b.1, bottom_b.2);
        let i3 = mesh.add_vertex(bottom_a.0, bottom_a.1, bottom_a.2);
        mesh.add_quad(i0, i1, i2, i3);
    }
    mesh
}

/// Generate all blade instances, evenly spaced around the hub and
/// advanced by the current rotation angle.
pub fn blades(config: &FanConfig, rotation: f32) -> Vec<Mesh> {
    if config.blade_count == 0 {
        return Vec::new();
    }
    (0..config.blade_count)
        .map(|i| {
            let offset = i as f32 * 2.0 * PI / config.blade_count as f32;
            blade(config, rotation + offset)
        })
        .collect()
}

/// Generate the bulged cylindrical motor housing
pub fn motor_housing(config: &FanConfig) -> Mesh {
    if config.motor_radius <= 0.0 {
        return Mesh::new();
    }

    let mut mesh = Mesh::with_capacity(
        MOTOR_SAMPLES * MOTOR_LEVELS,
        (MOTOR_SAMPLES - 1) * (MOTOR_LEVELS - 1),
    );

    for level in 0..MOTOR_LEVELS {
        let z = -0.2 + level as f32 * 0.08;
        let bulge = 1.0 + 0.1 * (level as f32 * PI / (MOTOR_LEVELS - 1) as f32).sin();
        let r = config.motor_radius * bulge;

        for theta in ring_angles(MOTOR_SAMPLES) {
            mesh.add_vertex(r * theta.cos(), r * theta.sin(), z);
        }
    }

    for level in 0..MOTOR_LEVELS - 1 {
        for j in 0..MOTOR_SAMPLES - 1 {
            let idx = level * MOTOR_SAMPLES + j;
            mesh.add_quad(idx, idx + 1, idx + MOTOR_SAMPLES + 1, idx + MOTOR_SAMPLES);
        }
    }
    mesh
}

/// Generate the stand pole plus the cosmetic base disk rings.
///
/// The pole bulges toward mid-height; the tower archetype gets a taller
/// pole. The base disk pair is emitted as vertices only (ring outline,
/// no faces).
pub fn stand(config: &FanConfig, archetype: Archetype) -> Mesh {
    if !config.has_stand {
        return Mesh::new();
    }

    let pole_height = if archetype == Archetype::Tower { 2.5 } else { 1.5 };
    let mut mesh = Mesh::with_capacity(
        RING_SAMPLES * POLE_LEVELS + RING_SAMPLES * 2,
        (RING_SAMPLES - 1) * (POLE_LEVELS - 1),
    );

    for level in 0..POLE_LEVELS {
        let t = level as f32 / (POLE_LEVELS - 1) as f32;
        let z = -pole_height + t * (pole_height - 0.2);
        let half = pole_height / 2.0;
        let r = POLE_RADIUS * (1.0 + 0.2 * (1.0 - (z + half).abs() / half));

        for theta in ring_angles(RING_SAMPLES) {
            mesh.add_vertex(r * theta.cos(), r * theta.sin(), z);
        }
    }

    for theta in ring_angles(RING_SAMPLES) {
        let (x, y) = (BASE_RADIUS * theta.cos(), BASE_RADIUS * theta.sin());
        mesh.add_vertex(x, y, -pole_height);
        mesh.add_vertex(x * 0.9, y * 0.9, -pole_height + 0.05);
    }

    for level in 0..POLE_LEVELS - 1 {
        for j in 0..RING_SAMPLES - 1 {
            let idx = level * RING_SAMPLES + j;
            mesh.add_quad(idx, idx + 1, idx + RING_SAMPLES + 1, idx + RING_SAMPLES);
        }
    }
    mesh
}

/// Generate the protective wire cage lattice around the blades.
///
/// Two concentric ring grids sit just in front of and behind the blade
/// plane; quads join each front ring point to its rear counterpart,
/// giving the wireframe look when drawn edge-only.
pub fn safety_cage(config: &FanConfig) -> Mesh {
    if config.blade_length <= 0.0 {
        return Mesh::new();
    }

    let cage_radius = config.blade_length + 0.2;
    let mut mesh = Mesh::with_capacity(
        CAGE_RINGS * RING_SAMPLES * 2,
        (RING_SAMPLES - 1) * (CAGE_RINGS - 1),
    );

    for &z in &[0.05, -0.15] {
        for ring in 0..CAGE_RINGS {
            let r = cage_radius * (ring + 1) as f32 / CAGE_RINGS as f32;
            for theta in ring_angles(RING_SAMPLES) {
                mesh.add_vertex(r * theta.cos(), r * theta.sin(), z);
            }
        }
    }

    for i in 0..RING_SAMPLES - 1 {
        for ring in 0..CAGE_RINGS - 1 {
            let front = ring * RING_SAMPLES + i;
            let rear = (CAGE_RINGS + ring) * RING_SAMPLES + i;
            mesh.add_quad(front, front + 1, rear + 1, rear);
        }
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ceiling() -> FanConfig {
        FanConfig::for_archetype(Archetype::Ceiling)
    }

    #[test]
    fn test_blade_counts() {
        let mesh = blade(&ceiling(), 0.0);
        assert_eq!(mesh.vertices.len(), BLADE_SEGMENTS * 4);
        assert_eq!(mesh.faces.len(), BLADE_SEGMENTS);
        assert!(mesh.faces.iter().all(|f| f.len() == 4));
    }

    #[test]
    fn test_blade_root_at_motor_radius() {
        let config = ceiling();
        let mesh = blade(&config, 0.0);
        // At t = 0 the width and twist vanish, so the root sits on the
        // hub circle along the blade angle.
        let root = mesh.vertices[0];
        assert_relative_eq!(root.x, config.motor_radius, epsilon = 1e-6);
        assert_relative_eq!(root.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(root.z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_blade_instances_evenly_spaced() {
        let config = ceiling();
        let instances = blades(&config, 0.0);
        assert_eq!(instances.len(), 3);

        let spacing = 2.0 * PI / 3.0;
        for (i, instance) in instances.iter().enumerate() {
            let root = instance.vertices[0];
            let angle = root.y.atan2(root.x).rem_euclid(2.0 * PI);
            assert_relative_eq!(angle, i as f32 * spacing, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_blade_zero_dimensions_empty() {
        let mut config = ceiling();
        config.blade_length = 0.0;
        assert!(blade(&config, 0.0).is_empty());

        let mut config = ceiling();
        config.blade_width = 0.0;
        assert!(blade(&config, 1.0).is_empty());
    }

    #[test]
    fn test_zero_blade_count_empty() {
        let mut config = ceiling();
        config.blade_count = 0;
        assert!(blades(&config, 0.0).is_empty());
    }

    #[test]
    fn test_motor_housing_dimensions() {
        let mesh = motor_housing(&ceiling());
        assert_eq!(mesh.vertices.len(), MOTOR_SAMPLES * MOTOR_LEVELS);
        assert_eq!(mesh.faces.len(), (MOTOR_SAMPLES - 1) * (MOTOR_LEVELS - 1));
        for face in &mesh.faces {
            assert!(face.iter().all(|&i| i < mesh.vertices.len()));
        }
    }

    #[test]
    fn test_motor_housing_zero_radius_empty() {
        let mut config = ceiling();
        config.motor_radius = 0.0;
        assert!(motor_housing(&config).is_empty());
    }

    #[test]
    fn test_stand_absent_for_ceiling() {
        assert!(stand(&ceiling(), Archetype::Ceiling).is_empty());
    }

    #[test]
    fn test_stand_pole_heights() {
        let table = FanConfig::for_archetype(Archetype::Table);
        let tower = FanConfig::for_archetype(Archetype::Tower);

        let table_mesh = stand(&table, Archetype::Table);
        let tower_mesh = stand(&tower, Archetype::Tower);
        let lowest = |mesh: &Mesh| {
            mesh.vertices
                .iter()
                .map(|v| v.z)
                .fold(f32::INFINITY, f32::min)
        };
        assert_relative_eq!(lowest(&table_mesh), -1.5, epsilon = 1e-6);
        assert_relative_eq!(lowest(&tower_mesh), -2.5, epsilon = 1e-6);
    }

    #[test]
    fn test_stand_base_ring_unfaced() {
        let table = FanConfig::for_archetype(Archetype::Table);
        let mesh = stand(&table, Archetype::Table);

        // Pole grid plus two interleaved base rings
        assert_eq!(
            mesh.vertices.len(),
            RING_SAMPLES * POLE_LEVELS + RING_SAMPLES * 2
        );
        // No face may reference the base ring vertices
        let pole_vertices = RING_SAMPLES * POLE_LEVELS;
        assert_eq!(mesh.faces.len(), (RING_SAMPLES - 1) * (POLE_LEVELS - 1));
        for face in &mesh.faces {
            assert!(face.iter().all(|&i| i < pole_vertices));
        }
    }

    #[test]
    fn test_cage_dimensions_and_planes() {
        let config = FanConfig::for_archetype(Archetype::Table);
        let mesh = safety_cage(&config);
        assert_eq!(mesh.vertices.len(), CAGE_RINGS * RING_SAMPLES * 2);
        assert_eq!(mesh.faces.len(), (RING_SAMPLES - 1) * (CAGE_RINGS - 1));

        let front = mesh.vertices[..CAGE_RINGS * RING_SAMPLES]
            .iter()
            .all(|v| (v.z - 0.05).abs() < 1e-6);
        let rear = mesh.vertices[CAGE_RINGS * RING_SAMPLES..]
            .iter()
            .all(|v| (v.z + 0.15).abs() < 1e-6);
        assert!(front && rear);

        let max_radius = mesh
            .vertices
            .iter()
            .map(|v| (v.x * v.x + v.y * v.y).sqrt())
            .fold(0.0, f32::max);
        assert_relative_eq!(max_radius, config.blade_length + 0.2, epsilon = 1e-5);
    }

    #[test]
    fn test_cage_zero_length_empty() {
        let mut config = ceiling();
        config.blade_length = 0.0;
        assert!(safety_cage(&config).is_empty());
    }
}
