//! Observers that wire events to flyover behavior.

use bevy::prelude::*;
use bevy::window::AppLifecycle;

use crate::components::FlyoverLifecycle;
use crate::events::ApplicationDidResume;
use crate::events::ApplicationWillSuspend;
use crate::events::ResumeFlyover;
use crate::events::SetMapType;
use crate::events::StartFlyover;
use crate::events::StopFlyover;
use crate::flyover::Flyover;
use crate::flyover::LifecycleEvent;
use crate::map_view::FlyoverMapViews;
use crate::settings::FlyoverSettings;

/// Observer for `StartFlyover` event - starts or retargets a flyover
pub fn on_start_flyover(start: On<StartFlyover>, mut views: FlyoverMapViews) {
    views.start_flyover(start.entity, start.coordinate, start.configuration.clone());
}

/// Observer for `StopFlyover` event
pub fn on_stop_flyover(stop: On<StopFlyover>, mut views: FlyoverMapViews) {
    views.stop_flyover(stop.entity);
}

/// Observer for `ResumeFlyover` event
pub fn on_resume_flyover(resume: On<ResumeFlyover>, mut views: FlyoverMapViews) {
    views.resume_flyover(resume.entity);
}

/// Observer for `SetMapType` event
pub fn on_set_map_type(set_map_type: On<SetMapType>, mut views: FlyoverMapViews) {
    views.set_map_type(set_map_type.entity, set_map_type.map_type);
}

/// Observer for `ApplicationWillSuspend` - stops subscribed flyovers, or forgets the
/// target of those already stopped.
pub fn on_application_will_suspend(
    _suspend: On<ApplicationWillSuspend>,
    subscribed: Query<Entity, (With<Flyover>, With<FlyoverLifecycle>)>,
    mut views: FlyoverMapViews,
) {
    let entities: Vec<Entity> = subscribed.iter().collect();
    debug!("ApplicationWillSuspend: {} subscribed flyover(s)", entities.len());

    for entity in entities {
        views.handle_lifecycle(entity, LifecycleEvent::Suspend);
    }
}

/// Observer for `ApplicationDidResume` - restarts subscribed flyovers that kept a target.
pub fn on_application_did_resume(
    _resume: On<ApplicationDidResume>,
    subscribed: Query<Entity, (With<Flyover>, With<FlyoverLifecycle>)>,
    mut views: FlyoverMapViews,
) {
    let entities: Vec<Entity> = subscribed.iter().collect();
    debug!("ApplicationDidResume: {} subscribed flyover(s)", entities.len());

    for entity in entities {
        views.handle_lifecycle(entity, LifecycleEvent::Resume);
    }
}

/// System that turns window-level `AppLifecycle` messages into flyover lifecycle events.
///
/// Only the edges are forwarded: `WillSuspend` suspends and `WillResume` resumes, so
/// each transition reaches the flyovers once.
pub fn forward_app_lifecycle(
    mut commands: Commands,
    settings: Res<FlyoverSettings>,
    mut lifecycle: MessageReader<AppLifecycle>,
) {
    for message in lifecycle.read() {
        if !settings.follow_app_lifecycle {
            continue;
        }
        match message {
            AppLifecycle::WillSuspend => commands.trigger(ApplicationWillSuspend),
            AppLifecycle::WillResume => commands.trigger(ApplicationDidResume),
            _ => {},
        }
    }
}
