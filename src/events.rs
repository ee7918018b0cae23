//! Events for driving flyovers and observing their lifecycle.

use bevy::prelude::*;

use crate::configuration::Configuration;
use crate::coordinate::Coordinate;
use crate::viewport::MapType;

// ============================================================================
// Requests (host -> flyover)
// ============================================================================

/// Starts or retargets the flyover on `entity`.
#[derive(EntityEvent, Clone, Debug)]
pub struct StartFlyover {
    pub entity:        Entity,
    pub coordinate:    Coordinate,
    pub configuration: Configuration,
}

impl StartFlyover {
    pub fn new(entity: Entity, coordinate: impl Into<Coordinate>, configuration: Configuration) -> Self {
        Self {
            entity,
            coordinate: coordinate.into(),
            configuration,
        }
    }
}

/// Stops the flyover on `entity`.
#[derive(EntityEvent, Reflect, Clone, Copy, Debug)]
#[reflect(Event, FromReflect)]
pub struct StopFlyover {
    pub entity: Entity,
}

/// Resumes the flyover on `entity` with its last target.
#[derive(EntityEvent, Reflect, Clone, Copy, Debug)]
#[reflect(Event, FromReflect)]
pub struct ResumeFlyover {
    pub entity: Entity,
}

/// Changes the render mode of the viewport driven by the flyover on `entity`.
/// Plain satellite and hybrid requests are substituted with their flyover variants.
#[derive(EntityEvent, Reflect, Clone, Copy, Debug)]
#[reflect(Event, FromReflect)]
pub struct SetMapType {
    pub entity:   Entity,
    pub map_type: MapType,
}

// ============================================================================
// Notifications (flyover -> host)
// ============================================================================

/// Fired when a flyover goes from stopped to started.
#[derive(EntityEvent, Reflect, Clone, Copy, Debug)]
#[reflect(Event, FromReflect)]
pub struct FlyoverStarted {
    #[event_target]
    pub flyover_entity: Entity,
    pub viewport:       Entity,
    pub coordinate:     Coordinate,
}

/// Fired when a started flyover stops, for any reason.
#[derive(EntityEvent, Reflect, Clone, Copy, Debug)]
#[reflect(Event, FromReflect)]
pub struct FlyoverStopped {
    #[event_target]
    pub flyover_entity:    Entity,
    pub viewport:          Entity,
    /// Elapsed fraction of the step that was interrupted, if one was in flight.
    pub fraction_complete: Option<f32>,
}

/// Fired each time a step reaches its end.
#[derive(EntityEvent, Reflect, Clone, Copy, Debug)]
#[reflect(Event, FromReflect)]
pub struct FlyoverStepComplete {
    #[event_target]
    pub flyover_entity: Entity,
    pub heading:        f64,
}

// ============================================================================
// Application lifecycle
// ============================================================================

/// The host application is about to leave the foreground.
/// Delivered to every flyover carrying `FlyoverLifecycle`.
#[derive(Event, Reflect, Clone, Copy, Debug, Default)]
pub struct ApplicationWillSuspend;

/// The host application is back in the foreground.
/// Delivered to every flyover carrying `FlyoverLifecycle`.
#[derive(Event, Reflect, Clone, Copy, Debug, Default)]
pub struct ApplicationDidResume;
