//! Plugin-wide settings.

use bevy::prelude::*;

use crate::coordinate::Coordinate;

/// WGS84 equatorial radius in metres.
const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Configuration for the flyover plugin.
#[derive(Resource, Reflect, Debug, Clone)]
#[reflect(Resource)]
pub struct FlyoverSettings {
    /// Geographic point placed at the world origin when posing orbit cameras.
    pub origin:               Coordinate,
    /// Metres per world unit.
    pub meters_per_unit:      f64,
    /// Forward `AppLifecycle` suspend/resume messages to subscribed flyovers.
    pub follow_app_lifecycle: bool,
}

impl Default for FlyoverSettings {
    fn default() -> Self {
        Self {
            origin:               Coordinate::default(),
            meters_per_unit:      1.0,
            follow_app_lifecycle: true,
        }
    }
}

impl FlyoverSettings {
    /// Local equirectangular projection of `coordinate` around `origin`.
    /// North is -Z and east is +X, in world units.
    pub fn project(&self, coordinate: Coordinate) -> Vec3 {
        let longitude_delta = (coordinate.longitude - self.origin.longitude + 180.0).rem_euclid(360.0) - 180.0;
        let latitude_delta = coordinate.latitude - self.origin.latitude;
        let east = longitude_delta.to_radians() * EARTH_RADIUS_M * self.origin.latitude.to_radians().cos();
        let north = latitude_delta.to_radians() * EARTH_RADIUS_M;
        let scale = self.meters_per_unit.max(f64::EPSILON);

        Vec3::new((east / scale) as f32, 0.0, (-north / scale) as f32)
    }

    /// Converts metres to world units.
    pub fn to_world_units(&self, meters: f64) -> f32 { (meters / self.meters_per_unit.max(f64::EPSILON)) as f32 }
}
