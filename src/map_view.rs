//! Host-facing flyover controls.
//!
//! `FlyoverMapViews` is the system parameter hosts use to start, stop and resume
//! flyovers by entity. It forwards to the `Flyover` engine, resolves the viewport the
//! engine points at, and emits `FlyoverStarted` / `FlyoverStopped` on transitions. It
//! keeps no animation state of its own.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::components::FlyoverLifecycle;
use crate::configuration::Configuration;
use crate::coordinate::Coordinate;
use crate::error::FlyoverError;
use crate::events::FlyoverStarted;
use crate::events::FlyoverStopped;
use crate::flyover::Flyover;
use crate::flyover::LifecycleEvent;
use crate::viewport::MapType;
use crate::viewport::MapViewport;

/// Spawns entities that are their own viewport and flyover.
pub struct FlyoverMapView;

impl FlyoverMapView {
    /// Spawns a viewport with a flyover attached and subscribed to app lifecycle
    /// events. Plain satellite and hybrid modes are swapped for their flyover
    /// variants.
    pub fn spawn(commands: &mut Commands, viewport: MapViewport) -> Entity {
        let viewport = MapViewport {
            map_type: viewport.map_type.flyover_variant(),
            ..viewport
        };
        let mut entity = commands.spawn((viewport, FlyoverLifecycle));
        let id = entity.id();
        entity.insert(Flyover::new(id));
        id
    }
}

#[derive(SystemParam)]
pub struct FlyoverMapViews<'w, 's> {
    commands:  Commands<'w, 's>,
    flyovers:  Query<'w, 's, &'static mut Flyover>,
    viewports: Query<'w, 's, &'static mut MapViewport>,
}

impl FlyoverMapViews<'_, '_> {
    pub fn is_flyover_started(&self, entity: Entity) -> bool {
        self.flyovers
            .get(entity)
            .is_ok_and(|flyover| flyover.is_started())
    }

    /// Starts or retargets the flyover on `entity`.
    pub fn start_flyover(
        &mut self,
        entity: Entity,
        coordinate: impl Into<Coordinate>,
        configuration: Configuration,
    ) -> bool {
        self.try_start_flyover(entity, coordinate.into(), configuration)
            .inspect_err(|error| warn!("StartFlyover: {error}"))
            .is_ok()
    }

    pub fn try_start_flyover(
        &mut self,
        entity: Entity,
        coordinate: Coordinate,
        configuration: Configuration,
    ) -> Result<(), FlyoverError> {
        self.drive(entity, |flyover, viewport| {
            flyover.try_start(coordinate, configuration, viewport)
        })?
    }

    /// Resumes the flyover on `entity` with its last target.
    pub fn resume_flyover(&mut self, entity: Entity) -> bool {
        self.drive(entity, |flyover, viewport| flyover.resume(viewport))
            .inspect_err(|error| warn!("ResumeFlyover: {error}"))
            .unwrap_or(false)
    }

    /// Stops the flyover on `entity`, returning the interrupted step's elapsed fraction.
    pub fn stop_flyover(&mut self, entity: Entity) -> Option<f32> {
        self.drive(entity, |flyover, viewport| flyover.stop(viewport))
            .inspect_err(|error| warn!("StopFlyover: {error}"))
            .ok()
            .flatten()
    }

    /// Delivers a host lifecycle event to the flyover on `entity`.
    pub fn handle_lifecycle(&mut self, entity: Entity, event: LifecycleEvent) -> bool {
        self.drive(entity, |flyover, viewport| flyover.handle_lifecycle(event, viewport))
            .unwrap_or(false)
    }

    /// Sets the render mode of the viewport `entity` drives, substituting flyover
    /// variants for plain satellite and hybrid requests.
    pub fn set_map_type(&mut self, entity: Entity, map_type: MapType) -> bool {
        let Some(mut viewport) = self.viewport_mut(entity) else {
            debug!("SetMapType: no viewport for {entity:?}");
            return false;
        };
        viewport.map_type = map_type.flyover_variant();
        true
    }

    /// The render mode actually applied to the viewport.
    pub fn map_type(&self, entity: Entity) -> Option<MapType> {
        let flyover = self.flyovers.get(entity).ok()?;
        self.viewports
            .get(flyover.viewport())
            .ok()
            .map(|viewport| viewport.map_type)
    }

    /// The render mode as the host asked for it, flyover variants mapped back.
    pub fn requested_map_type(&self, entity: Entity) -> Option<MapType> {
        self.map_type(entity).map(MapType::generic)
    }

    fn viewport_mut(&mut self, entity: Entity) -> Option<Mut<'_, MapViewport>> {
        let viewport = self.flyovers.get(entity).ok()?.viewport();
        self.viewports.get_mut(viewport).ok()
    }

    /// Runs `operation` against the flyover on `entity` and its viewport (if it still
    /// exists), then reports any started/stopped transition.
    fn drive<R>(
        &mut self,
        entity: Entity,
        operation: impl FnOnce(&mut Flyover, Option<&mut MapViewport>) -> R,
    ) -> Result<R, FlyoverError> {
        let Ok(mut flyover) = self.flyovers.get_mut(entity) else {
            return Err(FlyoverError::NotAFlyover(entity));
        };
        let viewport_entity = flyover.viewport();
        let mut viewport = self.viewports.get_mut(viewport_entity).ok();

        let was_started = flyover.is_started();
        let result = operation(&mut *flyover, viewport.as_deref_mut());

        match (was_started, flyover.is_started()) {
            (false, true) => {
                let coordinate = flyover
                    .context()
                    .map_or_else(Coordinate::default, |context| context.coordinate());
                self.commands.trigger(FlyoverStarted {
                    flyover_entity: entity,
                    viewport: viewport_entity,
                    coordinate,
                });
            },
            (true, false) => {
                self.commands.trigger(FlyoverStopped {
                    flyover_entity: entity,
                    viewport: viewport_entity,
                    fraction_complete: flyover.last_interruption(),
                });
            },
            _ => {},
        }

        Ok(result)
    }
}
