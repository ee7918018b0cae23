//! Geographic coordinates the flyover orbits around.

use bevy::prelude::*;

/// A latitude/longitude pair in degrees.
///
/// Equality is exact. Two coordinates that differ only in the last bit are
/// different flyover targets.
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinate {
    pub latitude:  f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Finite latitude in `[-90, 90]` and finite longitude in `[-180, 180]`.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self { Self::new(latitude, longitude) }
}
