use crate::configuration::Configuration;
use crate::coordinate::Coordinate;

/// The target of a flyover: where to orbit and how.
///
/// Immutable once built; a new `start` replaces it wholesale.
#[derive(Clone, Debug, PartialEq)]
pub struct Context {
    coordinate:    Coordinate,
    configuration: Configuration,
}

impl Context {
    pub const fn new(coordinate: Coordinate, configuration: Configuration) -> Self {
        Self {
            coordinate,
            configuration,
        }
    }

    pub const fn coordinate(&self) -> Coordinate { self.coordinate }

    pub const fn configuration(&self) -> &Configuration { &self.configuration }

    /// Exact latitude/longitude comparison.
    pub fn matches(&self, coordinate: Coordinate) -> bool {
        self.coordinate.latitude == coordinate.latitude
            && self.coordinate.longitude == coordinate.longitude
    }
}
