//! Plugin-level tests against a headless app.

use std::time::Duration;

use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy::window::AppLifecycle;
use bevy_panorbit_camera::PanOrbitCamera;

use crate::prelude::*;
use crate::ApplicationDidResume;
use crate::ApplicationWillSuspend;
use crate::FlyoverLifecycle;
use crate::SmoothnessStash;

const FRAME: Duration = Duration::from_millis(200);

#[derive(Resource, Default)]
struct Transitions {
    started:        usize,
    stopped:        usize,
    steps_complete: usize,
}

fn app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, FlyoverPlugin))
        .insert_resource(TimeUpdateStrategy::ManualDuration(FRAME))
        .init_resource::<Transitions>()
        .add_observer(|_: On<FlyoverStarted>, mut transitions: ResMut<Transitions>| {
            transitions.started += 1;
        })
        .add_observer(|_: On<FlyoverStopped>, mut transitions: ResMut<Transitions>| {
            transitions.stopped += 1;
        })
        .add_observer(|_: On<FlyoverStepComplete>, mut transitions: ResMut<Transitions>| {
            transitions.steps_complete += 1;
        });
    app
}

/// Spawns an entity that is both viewport and flyover, subscribed to lifecycle events.
fn spawn_map_view(app: &mut App) -> Entity {
    let world = app.world_mut();
    let entity = world.spawn((MapViewport::default(), FlyoverLifecycle)).id();
    world.entity_mut(entity).insert(Flyover::new(entity));
    entity
}

/// Same as `spawn_map_view`, with a smoothed orbit camera rendering the viewport.
fn spawn_orbit_map_view(app: &mut App) -> Entity {
    let entity = spawn_map_view(app);
    app.world_mut().entity_mut(entity).insert(PanOrbitCamera {
        orbit_smoothness: 0.5,
        ..default()
    });
    entity
}

fn pan_orbit(app: &App, entity: Entity) -> &PanOrbitCamera {
    app.world().get::<PanOrbitCamera>(entity).unwrap()
}

fn flyover(app: &App, entity: Entity) -> &Flyover {
    app.world().get::<Flyover>(entity).unwrap()
}

fn viewport(app: &App, entity: Entity) -> MapViewport { *app.world().get::<MapViewport>(entity).unwrap() }

fn transitions(app: &App) -> &Transitions { app.world().resource::<Transitions>() }

#[test]
fn start_event_starts_and_recenters() {
    let mut app = app();
    let entity = spawn_map_view(&mut app);

    app.world_mut().trigger(StartFlyover::new(
        entity,
        Landmark::AppleHeadquarters,
        Configuration::DEFAULT,
    ));
    app.world_mut().flush();

    assert!(flyover(&app, entity).is_started());
    assert_eq!(viewport(&app, entity).camera.center, Landmark::AppleHeadquarters.coordinate());
    assert_eq!(transitions(&app).started, 1);
}

#[test]
fn frames_drive_the_step_loop() {
    let mut app = app();
    let entity = spawn_map_view(&mut app);
    app.world_mut().trigger(StartFlyover::new(
        entity,
        (37.3321, -122.0302),
        Configuration::DEFAULT,
    ));

    // 4 s step at 200 ms per frame, plus slack for the zero-length first frame
    for _ in 0..30 {
        app.update();
        if transitions(&app).steps_complete > 0 {
            break;
        }
    }

    let camera = viewport(&app, entity).camera;
    assert!((camera.heading - 20.0).abs() < 1e-3, "heading {}", camera.heading);
    assert!((camera.altitude - 600.0).abs() < 1e-3);
    assert_eq!(transitions(&app).steps_complete, 1);
    assert!(flyover(&app, entity).is_animating());
}

#[test]
fn stop_and_resume_events() {
    let mut app = app();
    let entity = spawn_map_view(&mut app);
    app.world_mut().trigger(StartFlyover::new(entity, Landmark::LondonEye, Configuration::FAR_AWAY));
    app.update();

    app.world_mut().trigger(StopFlyover { entity });
    app.world_mut().flush();
    assert!(!flyover(&app, entity).is_started());
    assert_eq!(transitions(&app).stopped, 1);

    // stopping again changes nothing
    app.world_mut().trigger(StopFlyover { entity });
    app.world_mut().flush();
    assert_eq!(transitions(&app).stopped, 1);

    app.world_mut().trigger(ResumeFlyover { entity });
    app.world_mut().flush();
    assert!(flyover(&app, entity).is_started());
    assert_eq!(transitions(&app).started, 2);
}

#[test]
fn suspend_and_resume_follow_app_lifecycle() {
    let mut app = app();
    let entity = spawn_map_view(&mut app);
    app.world_mut().trigger(StartFlyover::new(entity, Landmark::SydneyOperaHouse, Configuration::DEFAULT));
    app.update();

    app.world_mut().write_message(AppLifecycle::WillSuspend);
    app.update();
    assert!(!flyover(&app, entity).is_started());
    assert!(flyover(&app, entity).context().is_some());

    app.world_mut().write_message(AppLifecycle::WillResume);
    app.update();
    assert!(flyover(&app, entity).is_started());
}

#[test]
fn lifecycle_messages_ignored_unless_followed() {
    let mut app = app();
    app.insert_resource(FlyoverSettings {
        follow_app_lifecycle: false,
        ..default()
    });
    let entity = spawn_map_view(&mut app);
    app.world_mut().trigger(StartFlyover::new(entity, Landmark::HamburgTownHall, Configuration::DEFAULT));
    app.update();

    app.world_mut().write_message(AppLifecycle::WillSuspend);
    app.update();

    assert!(flyover(&app, entity).is_started());
    assert!(flyover(&app, entity).is_animating());
    assert_eq!(transitions(&app).stopped, 0);
}

#[test]
fn suspend_forgets_a_stopped_flyover() {
    let mut app = app();
    let entity = spawn_map_view(&mut app);
    app.world_mut().trigger(StartFlyover::new(entity, Landmark::RomeColosseum, Configuration::DEFAULT));
    app.world_mut().trigger(StopFlyover { entity });

    app.world_mut().trigger(ApplicationWillSuspend);
    app.world_mut().trigger(ApplicationDidResume);
    app.world_mut().flush();

    assert!(!flyover(&app, entity).is_started());
    assert!(flyover(&app, entity).context().is_none());
}

#[test]
fn unsubscribed_flyovers_ignore_lifecycle() {
    let mut app = app();
    let entity = spawn_map_view(&mut app);
    app.world_mut().entity_mut(entity).remove::<FlyoverLifecycle>();
    app.world_mut().trigger(StartFlyover::new(entity, Landmark::ParisEiffelTower, Configuration::DEFAULT));

    app.world_mut().trigger(ApplicationWillSuspend);
    app.world_mut().flush();

    assert!(flyover(&app, entity).is_started());
}

#[test]
fn despawned_viewport_fails_start() {
    let mut app = app();
    let viewport_entity = app.world_mut().spawn(MapViewport::default()).id();
    let flyover_entity = app.world_mut().spawn(Flyover::new(viewport_entity)).id();
    app.world_mut().despawn(viewport_entity);

    let started = app
        .world_mut()
        .run_system_once(move |mut views: FlyoverMapViews| {
            views.start_flyover(flyover_entity, Landmark::LondonBigBen, Configuration::DEFAULT)
        })
        .unwrap();

    assert!(!started);
    assert!(!flyover(&app, flyover_entity).is_started());
    assert!(flyover(&app, flyover_entity).context().is_none());
}

#[test]
fn viewport_lost_mid_flight_stops_the_flyover() {
    let mut app = app();
    let viewport_entity = app.world_mut().spawn(MapViewport::default()).id();
    let flyover_entity = app.world_mut().spawn(Flyover::new(viewport_entity)).id();
    app.world_mut().trigger(StartFlyover::new(
        flyover_entity,
        Landmark::Googleplex,
        Configuration::DEFAULT,
    ));
    app.update();
    assert!(flyover(&app, flyover_entity).is_started());

    app.world_mut().despawn(viewport_entity);
    app.update();

    assert!(!flyover(&app, flyover_entity).is_started());
    assert_eq!(transitions(&app).stopped, 1);
}

#[test]
fn adapter_translates_map_types() {
    let mut app = app();
    let entity = spawn_map_view(&mut app);

    let (applied, requested) = app
        .world_mut()
        .run_system_once(move |mut views: FlyoverMapViews| {
            views.set_map_type(entity, MapType::Hybrid);
            (views.map_type(entity), views.requested_map_type(entity))
        })
        .unwrap();

    assert_eq!(applied, Some(MapType::HybridFlyover));
    assert_eq!(requested, Some(MapType::Hybrid));

    app.world_mut().trigger(SetMapType {
        entity,
        map_type: MapType::Standard,
    });
    assert_eq!(viewport(&app, entity).map_type, MapType::Standard);
}

#[test]
fn adapter_reports_started_state() {
    let mut app = app();
    let entity = spawn_map_view(&mut app);
    let stranger = app.world_mut().spawn_empty().id();

    let (before, started, after, unknown) = app
        .world_mut()
        .run_system_once(move |mut views: FlyoverMapViews| {
            let before = views.is_flyover_started(entity);
            let started = views.start_flyover(entity, Landmark::MiamiBeach, Configuration::GIDDY);
            let after = views.is_flyover_started(entity);
            let unknown = views.start_flyover(stranger, Landmark::MiamiBeach, Configuration::GIDDY);
            (before, started, after, unknown)
        })
        .unwrap();

    assert!(!before);
    assert!(started);
    assert!(after);
    assert!(!unknown);
}

#[test]
fn orbit_camera_follows_the_viewport() {
    let mut app = app();
    let entity = spawn_orbit_map_view(&mut app);
    app.world_mut().trigger(StartFlyover::new(entity, Landmark::CologneCathedral, Configuration::DEFAULT));

    for _ in 0..5 {
        app.update();

        let camera = viewport(&app, entity).camera;
        let pan_orbit = pan_orbit(&app, entity);
        assert!((pan_orbit.target_yaw - (-camera.heading).to_radians() as f32).abs() < 1e-5);
        assert!((pan_orbit.target_radius - camera.altitude as f32).abs() < 1e-2);
        assert!((pan_orbit.target_pitch - (90.0 - camera.pitch).to_radians() as f32).abs() < 1e-5);
    }

    assert!(viewport(&app, entity).camera.altitude < 1000.0);
    assert_eq!(pan_orbit(&app, entity).orbit_smoothness, 0.0);
    assert!(app.world().get::<SmoothnessStash>(entity).is_some());
}

#[test]
fn stopping_restores_orbit_smoothness() {
    let mut app = app();
    let entity = spawn_orbit_map_view(&mut app);
    app.world_mut().trigger(StartFlyover::new(entity, Landmark::TreviFountain, Configuration::DEFAULT));
    app.update();
    assert_eq!(pan_orbit(&app, entity).orbit_smoothness, 0.0);

    app.world_mut().trigger(StopFlyover { entity });
    app.update();

    assert_eq!(pan_orbit(&app, entity).orbit_smoothness, 0.5);
    assert!(app.world().get::<SmoothnessStash>(entity).is_none());
}

#[test]
fn start_and_stop_in_one_system_leave_smoothness_intact() {
    let mut app = app();
    let entity = spawn_orbit_map_view(&mut app);

    app.world_mut()
        .run_system_once(move |mut views: FlyoverMapViews| {
            views.start_flyover(entity, Landmark::SagradaFamilia, Configuration::DEFAULT);
            views.stop_flyover(entity);
        })
        .unwrap();
    app.update();

    assert_eq!(transitions(&app).started, 1);
    assert_eq!(transitions(&app).stopped, 1);
    assert_eq!(pan_orbit(&app, entity).orbit_smoothness, 0.5);
    assert!(app.world().get::<SmoothnessStash>(entity).is_none());

    // a later flyover still stashes the host's values, not zeros
    app.world_mut().trigger(StartFlyover::new(entity, Landmark::SagradaFamilia, Configuration::DEFAULT));
    app.world_mut().trigger(StopFlyover { entity });
    app.world_mut().trigger(StartFlyover::new(entity, Landmark::SagradaFamilia, Configuration::DEFAULT));
    app.update();
    assert_eq!(pan_orbit(&app, entity).orbit_smoothness, 0.0);

    app.world_mut().trigger(StopFlyover { entity });
    app.update();
    assert_eq!(pan_orbit(&app, entity).orbit_smoothness, 0.5);
}
