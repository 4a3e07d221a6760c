/// Rotational and oscillation state with the per-frame physics step
use std::f32::consts::PI;

/// Maximum target speed accepted from the host
pub const MAX_SPEED: f32 = 10.0;
/// Target speed restored when the fan is switched back on
pub const DEFAULT_TARGET_SPEED: f32 = 2.0;
/// Speed gained per physics call while ramping up
pub const ACCELERATION: f32 = 0.1;
/// Speed lost per physics call while ramping down or switched off
pub const DECELERATION: f32 = 0.05;
/// Full side-to-side oscillation sweep in degrees
pub const OSCILLATE_RANGE: f32 = 60.0;
/// Oscillation yaw advance per physics call, in degrees
pub const OSCILLATE_STEP: f32 = 0.5;

/// Per-face illumination model selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightingMode {
    Realistic,
    Flat,
    Dramatic,
}

impl LightingMode {
    /// Advance to the next mode in the fixed cycle
    pub fn next(self) -> Self {
        match self {
            LightingMode::Realistic => LightingMode::Flat,
            LightingMode::Flat => LightingMode::Dramatic,
            LightingMode::Dramatic => LightingMode::Realistic,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LightingMode::Realistic => "realistic",
            LightingMode::Flat => "flat",
            LightingMode::Dramatic => "dramatic",
        }
    }
}

/// Mutable fan state advanced once per display frame.
///
/// Speed ramping and oscillation advance by fixed per-call steps, so
/// their rate tracks call frequency rather than wall-clock time; only
/// the rotation angle itself is scaled by `dt`. This mirrors the
/// original simulator and keeps the step counts deterministic.
#[derive(Debug, Clone)]
pub struct FanState {
    /// Blade rotation in radians, always wrapped to [0, 2π)
    pub angle: f32,
    pub current_speed: f32,
    pub target_speed: f32,
    pub is_on: bool,
    pub oscillate: bool,
    /// Head yaw in degrees, bounded to ±OSCILLATE_RANGE/2
    pub oscillate_angle: f32,
    pub oscillate_direction: f32,
    pub lighting_mode: LightingMode,
}

impl FanState {
    pub fn new() -> Self {
        Self {
            angle: 0.0,
            current_speed: 0.0,
            target_speed: DEFAULT_TARGET_SPEED,
            is_on: true,
            oscillate: false,
            oscillate_angle: 0.0,
            oscillate_direction: 1.0,
            lighting_mode: LightingMode::Realistic,
        }
    }

    /// Advance speed, rotation, and oscillation by one frame.
    ///
    /// `dt` is the measured elapsed time in seconds and scales only the
    /// rotation angle advance.
    pub fn step(&mut self, dt: f32) {
        if self.is_on {
            if self.current_speed < self.target_speed {
                self.current_speed =
                    (self.current_speed + ACCELERATION).min(self.target_speed);
            } else if self.current_speed > self.target_speed {
                self.current_speed =
                    (self.current_speed - DECELERATION).max(self.target_speed);
            }
        } else {
            self.current_speed = (self.current_speed - DECELERATION).max(0.0);
        }

        self.angle = (self.angle + self.current_speed * dt * PI).rem_euclid(2.0 * PI);

        if self.oscillate {
            self.oscillate_angle += self.oscillate_direction * OSCILLATE_STEP;

            let limit = OSCILLATE_RANGE / 2.0;
            if self.oscillate_angle.abs() >= limit {
                self.oscillate_direction = -self.oscillate_direction;
                self.oscillate_angle = self.oscillate_angle.clamp(-limit, limit);
            }
        }
    }

    /// Clamp a requested target speed into the accepted range
    pub fn set_target_speed(&mut self, target: f32) {
        self.target_speed = target.clamp(0.0, MAX_SPEED);
    }
}

impl Default for FanState {
    fn default() -> Self {
        Self::new()
    }
}
