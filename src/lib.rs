// bevy_flyover
// Cinematic orbit ("flyover") animation around a geographic coordinate:
// - Step-based rotation loop with live reconfiguration
// - Start/stop/resume with heading blending on interruption
// - App lifecycle suspend/resume handling
// - PanOrbitCamera hand-off for rendering

use bevy::prelude::*;
use bevy::window::AppLifecycle;

mod animator;
mod components;
mod configuration;
mod context;
mod coordinate;
mod error;
mod events;
mod extension;
mod flyover;
mod landmark;
mod map_view;
mod observers;
mod parameter;
pub mod prelude;
mod settings;
mod smoothness;
mod viewport;

#[cfg(test)]
mod tests;

// Public API - Engine
pub use animator::Animator;
pub use animator::AnimatorTick;
pub use flyover::Advance;
pub use flyover::Flyover;
pub use flyover::FlyoverState;
pub use flyover::LifecycleEvent;
pub use flyover::blended_heading;

// Public API - Configuration types
pub use configuration::AnimationCurve;
pub use configuration::Configuration;
pub use configuration::Preset;
pub use context::Context;
pub use parameter::Parameter;
pub use parameter::ParameterValue;

// Public API - Geography
pub use coordinate::Coordinate;
pub use landmark::Landmark;

// Public API - Viewport
pub use map_view::FlyoverMapView;
pub use map_view::FlyoverMapViews;
pub use viewport::MapCamera;
pub use viewport::MapType;
pub use viewport::MapViewport;
pub use viewport::normalize_heading;

// Public API - Events
pub use events::ApplicationDidResume;
pub use events::ApplicationWillSuspend;
pub use events::FlyoverStarted;
pub use events::FlyoverStepComplete;
pub use events::FlyoverStopped;
pub use events::ResumeFlyover;
pub use events::SetMapType;
pub use events::StartFlyover;
pub use events::StopFlyover;

// Public API - Components, traits and resources
pub use components::FlyoverLifecycle;
pub use components::SmoothnessStash;
pub use error::FlyoverError;
pub use extension::PanOrbitCameraExt;
pub use settings::FlyoverSettings;

// Internal - used by plugin, not for external use
use extension::sync_pan_orbit_cameras;
use flyover::advance_flyovers;
use observers::forward_app_lifecycle;
use observers::on_application_did_resume;
use observers::on_application_will_suspend;
use observers::on_resume_flyover;
use observers::on_set_map_type;
use observers::on_start_flyover;
use observers::on_stop_flyover;
use smoothness::restore_smoothness_on_flyover_stop;
use smoothness::stash_smoothness_on_flyover_start;

/// Plugin that adds all flyover functionality
pub struct FlyoverPlugin;

impl Plugin for FlyoverPlugin {
    fn build(&self, app: &mut App) {
        app
            // Window lifecycle messages are only registered by `WindowPlugin`
            .add_message::<AppLifecycle>()
            // Register observers for host requests
            .add_observer(on_start_flyover)
            .add_observer(on_stop_flyover)
            .add_observer(on_resume_flyover)
            .add_observer(on_set_map_type)
            // Register observers for application lifecycle
            .add_observer(on_application_will_suspend)
            .add_observer(on_application_did_resume)
            // Register observers for flyover transitions
            .add_observer(stash_smoothness_on_flyover_start)
            .add_observer(restore_smoothness_on_flyover_stop)
            // Add systems
            .add_systems(
                Update,
                (forward_app_lifecycle, advance_flyovers, sync_pan_orbit_cameras).chain(),
            )
            // Initialize resources
            .init_resource::<FlyoverSettings>()
            .register_type::<MapViewport>()
            .register_type::<FlyoverLifecycle>()
            .register_type::<FlyoverSettings>();
    }
}
