//! Components used by the flyover plugin.

use bevy::prelude::*;

/// Subscribes the flyover on this entity to `ApplicationWillSuspend` and
/// `ApplicationDidResume`. Removing it (or despawning the entity) unsubscribes.
#[derive(Component, Reflect, Debug, Default, Clone, Copy)]
#[reflect(Component)]
pub struct FlyoverLifecycle;

/// Component that stores orbit-controller smoothness while a flyover drives it.
///
/// When a flyover starts on a viewport that also has a `PanOrbitCamera`, the
/// smoothness values are set to 0.0 so each pose lands exactly, and the originals
/// are stored here. They are restored when the flyover stops.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct SmoothnessStash {
    pub zoom:  f32,
    pub pan:   f32,
    pub orbit: f32,
}
