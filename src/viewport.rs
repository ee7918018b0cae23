//! The map surface a flyover drives.
//!
//! A viewport is any entity with a `MapViewport`. Flyovers refer to it by `Entity` and
//! never own it; when the entity is despawned the flyover treats the viewport as gone.

use bevy::prelude::*;

use crate::coordinate::Coordinate;

/// Geographic camera pose.
#[derive(Reflect, Debug, Clone, Copy, PartialEq)]
pub struct MapCamera {
    pub center:   Coordinate,
    /// Distance from the center coordinate, in metres.
    pub altitude: f64,
    /// Degrees away from looking straight down.
    pub pitch:    f64,
    /// Degrees clockwise from true north, in `[0, 360)`.
    pub heading:  f64,
}

impl Default for MapCamera {
    fn default() -> Self {
        Self {
            center:   Coordinate::default(),
            altitude: 1000.0,
            pitch:    0.0,
            heading:  0.0,
        }
    }
}

impl MapCamera {
    /// Pose at `progress` between `self` and `target`.
    ///
    /// The center jumps straight to the target; altitude, pitch and heading are
    /// interpolated. `target.heading` may be unwrapped (outside `[0, 360)`) so the
    /// rotation keeps its direction across north.
    pub fn interpolate(&self, target: &Self, progress: f64) -> Self {
        Self {
            center:   target.center,
            altitude: (target.altitude - self.altitude).mul_add(progress, self.altitude),
            pitch:    (target.pitch - self.pitch).mul_add(progress, self.pitch),
            heading:  normalize_heading((target.heading - self.heading).mul_add(progress, self.heading)),
        }
    }
}

/// Wraps a heading into `[0, 360)`.
pub fn normalize_heading(heading: f64) -> f64 {
    let wrapped = heading.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Render mode of a viewport.
#[derive(Reflect, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MapType {
    #[default]
    Standard,
    MutedStandard,
    Satellite,
    Hybrid,
    SatelliteFlyover,
    HybridFlyover,
}

impl MapType {
    /// The flyover-optimized equivalent of a requested mode.
    pub const fn flyover_variant(self) -> Self {
        match self {
            Self::Satellite => Self::SatelliteFlyover,
            Self::Hybrid => Self::HybridFlyover,
            other => other,
        }
    }

    /// The plain mode a flyover-optimized one stands in for.
    pub const fn generic(self) -> Self {
        match self {
            Self::SatelliteFlyover => Self::Satellite,
            Self::HybridFlyover => Self::Hybrid,
            other => other,
        }
    }

    /// Modes where stopping eases the heading to the in-flight step's midpoint.
    /// Other modes settle by re-applying the current heading.
    pub const fn supports_heading_blend(self) -> bool { matches!(self, Self::Standard | Self::MutedStandard) }
}

/// The external render surface: a camera pose and a render mode.
#[derive(Component, Reflect, Debug, Clone, Copy, Default, PartialEq)]
#[reflect(Component)]
pub struct MapViewport {
    pub camera:   MapCamera,
    pub map_type: MapType,
}

impl MapViewport {
    pub const fn new(camera: MapCamera, map_type: MapType) -> Self { Self { camera, map_type } }

    /// Moves the positional anchor without touching altitude, pitch or heading.
    pub const fn recenter(&mut self, center: Coordinate) { self.camera.center = center; }

    pub fn set_heading(&mut self, heading: f64) { self.camera.heading = normalize_heading(heading); }
}
