/// The fan entity: configuration, state, and the per-frame pipeline
use log::debug;
use nalgebra::Point3;

use crate::config::{Archetype, FanConfig};
use crate::generators;
use crate::geometry::{Mesh, Rgba};
use crate::shading;
use crate::state::{FanState, LightingMode, DEFAULT_TARGET_SPEED};
use crate::transform::Transform;

const BLADE_COLOR: Rgba = Rgba::new(0.2, 0.3, 0.5, 0.9);
const MOTOR_COLOR: Rgba = Rgba::new(0.3, 0.3, 0.3, 1.0);
const STAND_COLOR: Rgba = Rgba::new(0.4, 0.4, 0.4, 1.0);
const CAGE_FILL: Rgba = Rgba::new(0.5, 0.5, 0.5, 0.3);
const CAGE_EDGE: Rgba = Rgba::new(0.3, 0.3, 0.3, 0.8);

/// Which fan part a render batch belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FanPart {
    Blade,
    Motor,
    Stand,
    Cage,
}

/// One displayable mesh with its per-face colors.
///
/// `vertices` are already in world space; `faces` index into them and
/// every face has at least three vertices, aligned one-to-one with
/// `face_colors`. Batches carrying an `edge_color` want their faces
/// drawn as outlines rather than filled (the cage lattice).
#[derive(Debug, Clone)]
pub struct RenderBatch {
    pub part: FanPart,
    pub vertices: Vec<Point3<f32>>,
    pub faces: Vec<Vec<usize>>,
    pub face_colors: Vec<Rgba>,
    pub edge_color: Option<Rgba>,
}

/// Everything the host needs to display one frame
#[derive(Debug, Clone)]
pub struct RenderFrame {
    pub batches: Vec<RenderBatch>,
    /// Half-extent for the host's camera frustum / axis limits
    pub bounds: f32,
    /// Lowest z worth framing (stand bottoms reach below the hub)
    pub floor: f32,
}

/// A single simulated fan, driven by the host one frame at a time.
///
/// The host calls `update_physics(dt)` then `render()` each frame and
/// delivers input as intent calls between frames; the entity performs
/// no internal synchronization.
#[derive(Debug, Clone)]
pub struct Fan {
    archetype: Archetype,
    config: FanConfig,
    state: FanState,
}

impl Fan {
    pub fn new(archetype: Archetype) -> Self {
        Self {
            archetype,
            config: FanConfig::for_archetype(archetype),
            state: FanState::new(),
        }
    }

    /// Advance the physics state by one frame (see `FanState::step`)
    pub fn update_physics(&mut self, dt: f32) {
        self.state.step(dt);
    }

    /// Generate, transform, and shade every part of the fan.
    ///
    /// The head transform (oscillation yaw composed with tilt pitch)
    /// applies to the blades, motor, and cage; the stand stays
    /// axis-aligned. Shading runs after the transform so lighting stays
    /// fixed relative to the viewer.
    pub fn render(&self) -> RenderFrame {
        let head = Transform::head_matrix(
            self.state.oscillate,
            self.state.oscillate_angle,
            self.config.tilt_angle,
        );
        let mut batches = Vec::new();

        for mut mesh in generators::blades(&self.config, self.state.angle) {
            Transform::apply(&head, &mut mesh);
            if let Some(batch) = self.shaded_batch(FanPart::Blade, mesh, BLADE_COLOR) {
                batches.push(batch);
            }
        }

        let mut motor = generators::motor_housing(&self.config);
        Transform::apply(&head, &mut motor);
        if let Some(batch) = self.shaded_batch(FanPart::Motor, motor, MOTOR_COLOR) {
            batches.push(batch);
        }

        // The stand is bolted to the floor and ignores the head transform
        let stand = generators::stand(&self.config, self.archetype);
        if let Some(batch) = self.shaded_batch(FanPart::Stand, stand, STAND_COLOR) {
            batches.push(batch);
        }

        if FanConfig::has_cage(self.archetype) {
            let mut cage = generators::safety_cage(&self.config);
            Transform::apply(&head, &mut cage);
            if let Some(batch) = Self::wire_batch(FanPart::Cage, cage) {
                batches.push(batch);
            }
        }

        let bounds = (self.config.blade_length * 1.5)
            .max(if self.config.has_stand { 2.5 } else { 1.0 });
        let floor = if self.config.has_stand { -bounds } else { -1.0 };

        RenderFrame {
            batches,
            bounds,
            floor,
        }
    }

    /// Shade a mesh with the lighting pipeline, dropping faces with
    /// fewer than three vertices so faces and colors stay aligned
    fn shaded_batch(&self, part: FanPart, mut mesh: Mesh, color: Rgba) -> Option<RenderBatch> {
        if mesh.is_empty() {
            return None;
        }
        mesh.faces.retain(|face| face.len() >= 3);
        let face_colors = shading::shade(&mesh, color, self.state.lighting_mode);

        Some(RenderBatch {
            part,
            vertices: mesh.vertices,
            faces: mesh.faces,
            face_colors,
            edge_color: None,
        })
    }

    /// The cage bypasses the lighting path: fixed translucent fill with
    /// a distinct edge color
    fn wire_batch(part: FanPart, mut mesh: Mesh) -> Option<RenderBatch> {
        if mesh.is_empty() {
            return None;
        }
        mesh.faces.retain(|face| face.len() >= 3);
        let face_colors = vec![CAGE_FILL; mesh.faces.len()];

        Some(RenderBatch {
            part,
            vertices: mesh.vertices,
            faces: mesh.faces,
            face_colors,
            edge_color: Some(CAGE_EDGE),
        })
    }

    /// Replace the configuration from the fixed archetype table.
    ///
    /// Rotation angle, speed, and power state carry over.
    pub fn reconfigure(&mut self, archetype: Archetype) {
        debug!("switching archetype: {} -> {}", self.archetype, archetype);
        self.archetype = archetype;
        self.config = FanConfig::for_archetype(archetype);
    }

    /// Reconfigure from a textual name, falling back to ceiling for
    /// anything unrecognized
    pub fn reconfigure_by_name(&mut self, name: &str) {
        self.reconfigure(Archetype::from_name(name));
    }

    // Input intents, invoked by the host between frames.

    pub fn speed_up(&mut self) {
        self.state.set_target_speed(self.state.target_speed + 0.5);
    }

    pub fn speed_down(&mut self) {
        self.state.set_target_speed(self.state.target_speed - 0.5);
    }

    pub fn toggle_power(&mut self) {
        self.state.is_on = !self.state.is_on;
        if self.state.is_on {
            self.state.set_target_speed(DEFAULT_TARGET_SPEED);
        } else {
            self.state.set_target_speed(0.0);
        }
        debug!("power {}", if self.state.is_on { "on" } else { "off" });
    }

    pub fn toggle_oscillate(&mut self) {
        self.state.oscillate = !self.state.oscillate;
        debug!(
            "oscillation {}",
            if self.state.oscillate { "on" } else { "off" }
        );
    }

    pub fn cycle_lighting(&mut self) {
        self.state.lighting_mode = self.state.lighting_mode.next();
        debug!("lighting mode: {}", self.state.lighting_mode.label());
    }

    // Accessors for host overlays.

    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    pub fn config(&self) -> &FanConfig {
        &self.config
    }

    pub fn current_speed(&self) -> f32 {
        self.state.current_speed
    }

    pub fn target_speed(&self) -> f32 {
        self.state.target_speed
    }

    pub fn is_on(&self) -> bool {
        self.state.is_on
    }

    pub fn oscillating(&self) -> bool {
        self.state.oscillate
    }

    pub fn lighting_mode(&self) -> LightingMode {
        self.state.lighting_mode
    }

    pub fn rotation_angle(&self) -> f32 {
        self.state.angle
    }

    pub fn oscillate_angle(&self) -> f32 {
        self.state.oscillate_angle
    }
}
