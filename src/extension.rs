//! Hand-off from the geographic viewport pose to `PanOrbitCamera`.

use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;

use crate::components::SmoothnessStash;
use crate::settings::FlyoverSettings;
use crate::viewport::MapCamera;
use crate::viewport::MapViewport;

/// Extension trait for `PanOrbitCamera` providing flyover conveniences.
pub trait PanOrbitCameraExt {
    /// Stashes current smoothness values and disables smoothness.
    /// Returns a `SmoothnessStash` that can be inserted as a component.
    fn stash_and_disable_smoothness(&mut self) -> SmoothnessStash;

    /// Restores smoothness values previously stashed.
    fn restore_smoothness(&mut self, stash: &SmoothnessStash);

    /// Poses the orbit camera to match a geographic `MapCamera`.
    ///
    /// Heading becomes yaw (clockwise from north is negative yaw), pitch is measured
    /// from looking straight down, altitude becomes the orbit radius.
    fn apply_map_camera(&mut self, camera: &MapCamera, settings: &FlyoverSettings);
}

impl PanOrbitCameraExt for PanOrbitCamera {
    fn stash_and_disable_smoothness(&mut self) -> SmoothnessStash {
        let stash = SmoothnessStash {
            zoom:  self.zoom_smoothness,
            pan:   self.pan_smoothness,
            orbit: self.orbit_smoothness,
        };

        self.zoom_smoothness = 0.0;
        self.pan_smoothness = 0.0;
        self.orbit_smoothness = 0.0;

        stash
    }

    fn restore_smoothness(&mut self, stash: &SmoothnessStash) {
        self.zoom_smoothness = stash.zoom;
        self.pan_smoothness = stash.pan;
        self.orbit_smoothness = stash.orbit;
    }

    fn apply_map_camera(&mut self, camera: &MapCamera, settings: &FlyoverSettings) {
        self.target_focus = settings.project(camera.center);
        self.target_radius = settings.to_world_units(camera.altitude).max(f32::EPSILON);
        self.target_pitch = (90.0 - camera.pitch).to_radians() as f32;
        self.target_yaw = (-camera.heading).to_radians() as f32;
        self.force_update = true;
    }
}

/// System that mirrors changed viewport poses onto their orbit cameras.
pub fn sync_pan_orbit_cameras(
    settings: Res<FlyoverSettings>,
    mut camera_query: Query<(&MapViewport, &mut PanOrbitCamera), Changed<MapViewport>>,
) {
    for (viewport, mut pan_orbit) in &mut camera_query {
        pan_orbit.apply_map_camera(&viewport.camera, &settings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::Coordinate;

    #[test]
    fn map_camera_becomes_orbit_parameters() {
        let settings = FlyoverSettings::default();
        let mut pan_orbit = PanOrbitCamera::default();
        let camera = MapCamera {
            center:   Coordinate::default(),
            altitude: 600.0,
            pitch:    45.0,
            heading:  90.0,
        };

        pan_orbit.apply_map_camera(&camera, &settings);

        assert_eq!(pan_orbit.target_focus, Vec3::ZERO);
        assert!((pan_orbit.target_radius - 600.0).abs() < 1e-3);
        assert!((pan_orbit.target_pitch - std::f32::consts::FRAC_PI_4).abs() < 1e-6);
        assert!((pan_orbit.target_yaw + std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert!(pan_orbit.force_update);
    }

    #[test]
    fn smoothness_round_trips_through_stash() {
        let mut pan_orbit = PanOrbitCamera {
            zoom_smoothness: 0.3,
            pan_smoothness: 0.4,
            orbit_smoothness: 0.5,
            ..default()
        };

        let stash = pan_orbit.stash_and_disable_smoothness();
        assert_eq!(pan_orbit.orbit_smoothness, 0.0);

        pan_orbit.restore_smoothness(&stash);
        assert_eq!(pan_orbit.zoom_smoothness, 0.3);
        assert_eq!(pan_orbit.pan_smoothness, 0.4);
        assert_eq!(pan_orbit.orbit_smoothness, 0.5);
    }
}
