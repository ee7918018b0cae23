use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;

use crate::components::SmoothnessStash;
use crate::events::FlyoverStarted;
use crate::events::FlyoverStopped;
use crate::extension::PanOrbitCameraExt;

/// Observer that disables orbit smoothing on the viewport when a flyover starts
pub fn stash_smoothness_on_flyover_start(started: On<FlyoverStarted>, mut commands: Commands) {
    let Ok(mut viewport) = commands.get_entity(started.viewport) else {
        return;
    };
    viewport.queue(stash_smoothness);
}

/// Observer that restores smoothness when the flyover stops
pub fn restore_smoothness_on_flyover_stop(stopped: On<FlyoverStopped>, mut commands: Commands) {
    let Ok(mut viewport) = commands.get_entity(stopped.viewport) else {
        return;
    };
    viewport.queue(restore_smoothness);
}

// Both run as queued entity commands so a start and a stop reported in the same
// frame apply in the order they were reported.

fn stash_smoothness(mut entity: EntityWorldMut) {
    if entity.contains::<SmoothnessStash>() {
        return;
    }
    let stash = {
        let Some(mut camera) = entity.get_mut::<PanOrbitCamera>() else {
            return;
        };
        camera.stash_and_disable_smoothness()
    };
    entity.insert(stash);
}

fn restore_smoothness(mut entity: EntityWorldMut) {
    let Some(stash) = entity.take::<SmoothnessStash>() else {
        return;
    };
    if let Some(mut camera) = entity.get_mut::<PanOrbitCamera>() {
        camera.restore_smoothness(&stash);
    }
}
