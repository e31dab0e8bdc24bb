//! Static configuration tables for the scene.
//!
//! Everything here is a compile-time constant: the planet table, the
//! satellite/ship orbits, the per-planet fact records shown in the info
//! panel, and the keyboard camera presets.

use bevy::prelude::*;

/// One row of the planet table.
pub struct PlanetConfig {
    pub name: &'static str,
    pub rgb: (u8, u8, u8),
    pub radius: f32,
    pub distance: f32,
    pub speed: f32,
    pub has_rings: bool,
    pub atmosphere: Option<AtmosphereConfig>,
}

/// Translucent shell drawn slightly larger than the planet sphere.
pub struct AtmosphereConfig {
    pub rgb: (u8, u8, u8),
    pub scale: f32,
    pub opacity: f32,
}

pub const PLANETS: &[PlanetConfig] = &[
    PlanetConfig {
        name: "Mercury",
        rgb: (0xA5, 0xA5, 0xA5),
        radius: 15.0,
        distance: 200.0,
        speed: 0.02,
        has_rings: false,
        atmosphere: None,
    },
    PlanetConfig {
        name: "Venus",
        rgb: (0xE3, 0xBB, 0x76),
        radius: 25.0,
        distance: 300.0,
        speed: 0.015,
        has_rings: false,
        atmosphere: Some(AtmosphereConfig {
            rgb: (0xFF, 0xDD, 0xAA),
            scale: 1.2,
            opacity: 0.4,
        }),
    },
    PlanetConfig {
        name: "Earth",
        rgb: (0x22, 0xA6, 0xB3),
        radius: 26.0,
        distance: 400.0,
        speed: 0.01,
        has_rings: false,
        atmosphere: Some(AtmosphereConfig {
            rgb: (0x44, 0x88, 0xFF),
            scale: 1.1,
            opacity: 0.3,
        }),
    },
    PlanetConfig {
        name: "Mars",
        rgb: (0xDD, 0x4C, 0x39),
        radius: 18.0,
        distance: 500.0,
        speed: 0.008,
        has_rings: false,
        atmosphere: Some(AtmosphereConfig {
            rgb: (0xFF, 0x44, 0x00),
            scale: 1.1,
            opacity: 0.2,
        }),
    },
    PlanetConfig {
        name: "Jupiter",
        rgb: (0xD9, 0xA0, 0x66),
        radius: 60.0,
        distance: 700.0,
        speed: 0.005,
        has_rings: false,
        atmosphere: Some(AtmosphereConfig {
            rgb: (0xFF, 0xAA, 0x88),
            scale: 1.05,
            opacity: 0.2,
        }),
    },
    PlanetConfig {
        name: "Saturn",
        rgb: (0xEA, 0xD6, 0xB8),
        radius: 50.0,
        distance: 900.0,
        speed: 0.004,
        has_rings: true,
        atmosphere: Some(AtmosphereConfig {
            rgb: (0xEE, 0xBB, 0x88),
            scale: 1.05,
            opacity: 0.2,
        }),
    },
    PlanetConfig {
        name: "Uranus",
        rgb: (0xD1, 0xF7, 0xF8),
        radius: 35.0,
        distance: 1100.0,
        speed: 0.003,
        has_rings: false,
        atmosphere: Some(AtmosphereConfig {
            rgb: (0x88, 0xFF, 0xFF),
            scale: 1.1,
            opacity: 0.3,
        }),
    },
    PlanetConfig {
        name: "Neptune",
        rgb: (0x4B, 0x70, 0xDD),
        radius: 34.0,
        distance: 1300.0,
        speed: 0.002,
        has_rings: false,
        atmosphere: Some(AtmosphereConfig {
            rgb: (0x44, 0x44, 0xFF),
            scale: 1.1,
            opacity: 0.3,
        }),
    },
    PlanetConfig {
        name: "Pluto",
        rgb: (0xE3, 0xD2, 0xB4),
        radius: 8.0,
        distance: 1500.0,
        speed: 0.001,
        has_rings: false,
        atmosphere: None,
    },
];

/// Index of the planet the moon and station orbit.
pub const PARENT_PLANET_INDEX: usize = 2;

/// One row of the satellite table.
pub struct SatelliteConfig {
    pub distance: f32,
    pub speed: f32,
    pub size: f32,
}

pub const SATELLITES: &[SatelliteConfig] = &[
    SatelliteConfig {
        distance: 600.0,
        speed: 0.015,
        size: 3.0,
    },
    SatelliteConfig {
        distance: 850.0,
        speed: 0.01,
        size: 4.0,
    },
    SatelliteConfig {
        distance: 1200.0,
        speed: 0.008,
        size: 3.5,
    },
];

/// Ship hull style, purely cosmetic.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ShipStyle {
    Explorer,
    Shuttle,
}

pub struct ShipConfig {
    pub distance: f32,
    pub speed: f32,
    pub style: ShipStyle,
}

pub const SHIPS: &[ShipConfig] = &[
    ShipConfig {
        distance: 1000.0,
        speed: 0.012,
        style: ShipStyle::Explorer,
    },
    ShipConfig {
        distance: 750.0,
        speed: 0.018,
        style: ShipStyle::Shuttle,
    },
];

pub const ASTEROID_COUNT: usize = 500;
pub const ASTEROID_BELT_INNER: f32 = 550.0;
pub const ASTEROID_BELT_OUTER: f32 = 650.0;

pub const METEOR_COUNT: usize = 10;
pub const UFO_COUNT: usize = 3;
pub const NEBULA_COUNT: usize = 5;
pub const STAR_COUNT: usize = 1000;

/// Radius of the invisible sphere free-roaming bodies bounce off.
pub const ROAM_BOUNDARY_RADIUS: f32 = 2000.0;
/// Radius a body is clamped to after crossing the boundary.
pub const ROAM_CLAMP_RADIUS: f32 = 1900.0;

pub const MOON_ORBIT_RADIUS: f32 = 40.0;
pub const MOON_SPEED: f32 = 0.05;
pub const STATION_ORBIT_RADIUS: f32 = 18.0;
pub const STATION_SPEED: f32 = 0.08;

/// Where the wormhole sits; the matching camera preset focuses it.
pub const WORMHOLE_POSITION: Vec3 = Vec3::new(-1500.0, 200.0, -1500.0);

pub const COMET_SEMI_MAJOR_AXIS: f32 = 1400.0;
pub const COMET_ECCENTRICITY: f32 = 0.7;
pub const COMET_SPEED: f32 = 0.008;
pub const COMET_BOB_AMPLITUDE: f32 = 100.0;

/// Fact record shown in the info panel when a planet is focused.
pub struct BodyFacts {
    pub name: &'static str,
    pub body_type: &'static str,
    pub diameter: &'static str,
    pub distance: &'static str,
    pub description: &'static str,
}

pub const BODY_FACTS: &[BodyFacts] = &[
    BodyFacts {
        name: "Mercury",
        body_type: "Terrestrial",
        diameter: "4,880 km",
        distance: "58 million km",
        description: "The smallest planet in our solar system and closest to the Sun.",
    },
    BodyFacts {
        name: "Venus",
        body_type: "Terrestrial",
        diameter: "12,104 km",
        distance: "108 million km",
        description: "Spinning in the opposite direction to most planets, Venus is the hottest planet.",
    },
    BodyFacts {
        name: "Earth",
        body_type: "Terrestrial",
        diameter: "12,742 km",
        distance: "149.6 million km",
        description: "Our home planet is the only place we know of so far that's inhabited by living things.",
    },
    BodyFacts {
        name: "Mars",
        body_type: "Terrestrial",
        diameter: "6,779 km",
        distance: "228 million km",
        description: "Mars is a dusty, cold, desert world with a very thin atmosphere.",
    },
    BodyFacts {
        name: "Jupiter",
        body_type: "Gas Giant",
        diameter: "139,820 km",
        distance: "778 million km",
        description: "Jupiter is more than twice as massive as the other planets of our solar system combined.",
    },
    BodyFacts {
        name: "Saturn",
        body_type: "Gas Giant",
        diameter: "116,460 km",
        distance: "1.4 billion km",
        description: "Adorned with a dazzling, complex system of icy rings, Saturn is unique in our solar system.",
    },
    BodyFacts {
        name: "Uranus",
        body_type: "Ice Giant",
        diameter: "50,724 km",
        distance: "2.9 billion km",
        description: "Uranus rotates at a nearly 90-degree angle from the plane of its orbit.",
    },
    BodyFacts {
        name: "Neptune",
        body_type: "Ice Giant",
        diameter: "49,244 km",
        distance: "4.5 billion km",
        description: "Neptune is dark, cold and whipped by supersonic winds.",
    },
    BodyFacts {
        name: "Pluto",
        body_type: "Dwarf Planet",
        diameter: "2,377 km",
        distance: "5.9 billion km",
        description: "Pluto is a complex world of ice mountains and frozen plains.",
    },
];

/// Look up the fact record for a named body.
pub fn facts_for(name: &str) -> Option<&'static BodyFacts> {
    BODY_FACTS.iter().find(|f| f.name == name)
}

/// A stored camera pose for the keyboard presets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub focus: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub radius: f32,
}

/// Top-down overview, also the reset pose.
pub const OVERVIEW_POSE: CameraPose = CameraPose {
    focus: Vec3::ZERO,
    yaw: 0.0,
    pitch: 1.45,
    radius: 1200.0,
};

/// Poses bound to keys 1-6.
pub const CAMERA_PRESETS: &[CameraPose] = &[
    OVERVIEW_POSE,
    // Inner system, low oblique.
    CameraPose {
        focus: Vec3::ZERO,
        yaw: 0.6,
        pitch: 0.5,
        radius: 550.0,
    },
    // Asteroid belt edge-on.
    CameraPose {
        focus: Vec3::new(600.0, 0.0, 0.0),
        yaw: 1.2,
        pitch: 0.15,
        radius: 400.0,
    },
    // Outer giants.
    CameraPose {
        focus: Vec3::ZERO,
        yaw: -0.8,
        pitch: 0.7,
        radius: 1800.0,
    },
    // Comet aphelion region.
    CameraPose {
        focus: Vec3::new(-1000.0, 0.0, 0.0),
        yaw: 2.4,
        pitch: 0.4,
        radius: 900.0,
    },
    // Wormhole corner of the volume.
    CameraPose {
        focus: WORMHOLE_POSITION,
        yaw: -2.2,
        pitch: 0.3,
        radius: 500.0,
    },
];

pub const CAMERA_MIN_DISTANCE: f32 = 300.0;
pub const CAMERA_MAX_DISTANCE: f32 = 3000.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_planet_has_facts() {
        for planet in PLANETS {
            assert!(
                facts_for(planet.name).is_some(),
                "missing facts for {}",
                planet.name
            );
        }
    }

    #[test]
    fn facts_lookup_is_by_exact_name() {
        assert!(facts_for("Earth").is_some());
        assert!(facts_for("earth").is_none());
        assert!(facts_for("Vulcan").is_none());
    }

    #[test]
    fn parent_planet_is_earth() {
        assert_eq!(PLANETS[PARENT_PLANET_INDEX].name, "Earth");
    }

    #[test]
    fn planet_distances_increase_monotonically() {
        for pair in PLANETS.windows(2) {
            assert!(pair[0].distance < pair[1].distance);
        }
    }

    #[test]
    fn wormhole_preset_focuses_the_wormhole() {
        let preset = CAMERA_PRESETS.last().unwrap();
        assert_eq!(preset.focus, WORMHOLE_POSITION);
    }
}
