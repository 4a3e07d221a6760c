/// Whirl Core Library - Procedural fan simulation
///
/// This library provides the core functionality for the fan simulator:
/// procedural mesh generation for the fan parts, the per-frame physics
/// step, per-face lighting, and the head transform that composes
/// oscillation with archetype tilt. Hosts own the render surface and
/// drive one update + render call per frame.

pub mod config;
pub mod fan;
pub mod generators;
pub mod geometry;
pub mod projection;
pub mod shading;
pub mod state;
pub mod transform;

// Re-export commonly used types
pub use config::{Archetype, FanConfig};
pub use fan::{Fan, FanPart, RenderBatch, RenderFrame};
pub use geometry::{Mesh, Rgba};
pub use projection::Camera;
pub use state::{FanState, LightingMode};
pub use transform::Transform;
