//! Reasons a flyover operation did not take effect.
//!
//! None of these are fatal. The `bool`-returning operations log them and carry on.

use bevy::prelude::*;
use thiserror::Error;

use crate::coordinate::Coordinate;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum FlyoverError {
    #[error("coordinate {0:?} is out of range or not finite")]
    InvalidCoordinate(Coordinate),
    #[error("viewport {0:?} no longer exists")]
    ViewportUnavailable(Entity),
    #[error("an animator transition is already running")]
    AlreadyRunning,
    #[error("flyover is already started")]
    AlreadyStarted,
    #[error("no previous flyover to resume")]
    NothingToResume,
    #[error("entity {0:?} has no Flyover")]
    NotAFlyover(Entity),
}
