/// Fan archetypes and their fixed geometry configurations

/// The five supported fan categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Archetype {
    Ceiling,
    Table,
    Tower,
    Industrial,
    Desk,
}

impl Archetype {
    pub const ALL: [Archetype; 5] = [
        Archetype::Ceiling,
        Archetype::Table,
        Archetype::Tower,
        Archetype::Industrial,
        Archetype::Desk,
    ];

    /// Look up an archetype by its lowercase identifier.
    ///
    /// Unrecognized names fall back to `Ceiling` rather than failing.
    pub fn from_name(name: &str) -> Self {
        match name {
            "ceiling" => Archetype::Ceiling,
            "table" => Archetype::Table,
            "tower" => Archetype::Tower,
            "industrial" => Archetype::Industrial,
            "desk" => Archetype::Desk,
            _ => Archetype::Ceiling,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Archetype::Ceiling => "ceiling",
            Archetype::Table => "table",
            Archetype::Tower => "tower",
            Archetype::Industrial => "industrial",
            Archetype::Desk => "desk",
        }
    }

    /// Capitalized label for display overlays
    pub fn label(&self) -> &'static str {
        match self {
            Archetype::Ceiling => "Ceiling",
            Archetype::Table => "Table",
            Archetype::Tower => "Tower",
            Archetype::Industrial => "Industrial",
            Archetype::Desk => "Desk",
        }
    }
}

impl std::fmt::Display for Archetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable per-archetype geometry and physics parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FanConfig {
    pub blade_count: usize,
    pub blade_length: f32,
    pub blade_width: f32,
    pub motor_radius: f32,
    pub has_stand: bool,
    /// Head tilt in degrees, pitching the blade assembly toward the viewer
    pub tilt_angle: f32,
}

impl FanConfig {
    /// Fixed configuration table keyed by archetype
    pub fn for_archetype(archetype: Archetype) -> Self {
        match archetype {
            Archetype::Ceiling => Self {
                blade_count: 3,
                blade_length: 1.5,
                blade_width: 0.3,
                motor_radius: 0.2,
                has_stand: false,
                tilt_angle: 0.0,
            },
            Archetype::Table => Self {
                blade_count: 4,
                blade_length: 0.8,
                blade_width: 0.2,
                motor_radius: 0.15,
                has_stand: true,
                tilt_angle: 15.0,
            },
            Archetype::Tower => Self {
                blade_count: 20,
                blade_length: 0.3,
                blade_width: 0.1,
                motor_radius: 0.1,
                has_stand: true,
                tilt_angle: 0.0,
            },
            Archetype::Industrial => Self {
                blade_count: 5,
                blade_length: 2.0,
                blade_width: 0.4,
                motor_radius: 0.3,
                has_stand: true,
                tilt_angle: 0.0,
            },
            Archetype::Desk => Self {
                blade_count: 3,
                blade_length: 0.5,
                blade_width: 0.15,
                motor_radius: 0.1,
                has_stand: true,
                tilt_angle: 20.0,
            },
        }
    }

    /// Whether this archetype carries a protective safety cage
    pub fn has_cage(archetype: Archetype) -> bool {
        matches!(archetype, Archetype::Table | Archetype::Desk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_name_falls_back_to_ceiling() {
        assert_eq!(Archetype::from_name("centrifuge"), Archetype::Ceiling);
        assert_eq!(Archetype::from_name(""), Archetype::Ceiling);
        assert_eq!(
            FanConfig::for_archetype(Archetype::from_name("centrifuge")),
            FanConfig::for_archetype(Archetype::Ceiling)
        );
    }

    #[test]
    fn test_name_round_trip() {
        for archetype in Archetype::ALL {
            assert_eq!(Archetype::from_name(archetype.name()), archetype);
        }
    }

    #[test]
    fn test_config_table_sanity() {
        for archetype in Archetype::ALL {
            let config = FanConfig::for_archetype(archetype);
            assert!(config.blade_count >= 1);
            assert!(config.blade_length > 0.0);
            assert!(config.blade_width > 0.0);
            assert!(config.motor_radius > 0.0);
        }
        assert!(!FanConfig::for_archetype(Archetype::Ceiling).has_stand);
        assert_eq!(FanConfig::for_archetype(Archetype::Tower).blade_count, 20);
    }

    #[test]
    fn test_cage_only_on_table_and_desk() {
        assert!(FanConfig::has_cage(Archetype::Table));
        assert!(FanConfig::has_cage(Archetype::Desk));
        assert!(!FanConfig::has_cage(Archetype::Ceiling));
        assert!(!FanConfig::has_cage(Archetype::Tower));
        assert!(!FanConfig::has_cage(Archetype::Industrial));
    }
}
