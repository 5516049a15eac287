//! Which country markers currently face the camera.

use std::collections::HashSet;

use bevy::prelude::*;

use crate::MainCamera;
use crate::globe::markers::CountryMarker;

/// A marker stays interactive slightly past the horizon.
pub const VISIBILITY_THRESHOLD: f32 = -0.2;

/// Codes of the countries whose markers face the camera this frame.
#[derive(Resource, Default)]
pub struct VisibleCountries(pub HashSet<String>);

/// True when a surface point faces the camera, with a tolerance that keeps
/// markers near the limb interactive.
pub fn is_camera_facing(marker_world: Vec3, camera_world: Vec3) -> bool {
    let marker = marker_world.normalize_or_zero();
    let camera = camera_world.normalize_or_zero();
    marker.dot(camera) > VISIBILITY_THRESHOLD
}

pub fn update_visible_countries(
    mut visible: ResMut<VisibleCountries>,
    camera: Query<&GlobalTransform, With<MainCamera>>,
    markers: Query<(&CountryMarker, &GlobalTransform)>,
) {
    let Ok(camera_transform) = camera.single() else {
        return;
    };
    let camera_pos = camera_transform.translation();
    visible.0.clear();
    for (marker, transform) in markers.iter() {
        if is_camera_facing(transform.translation(), camera_pos) {
            visible.0.insert(marker.cca3.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facing_point_is_visible() {
        assert!(is_camera_facing(Vec3::new(0.0, 0.0, 101.0), Vec3::new(0.0, 0.0, 300.0)));
    }

    #[test]
    fn far_side_point_is_hidden() {
        assert!(!is_camera_facing(Vec3::new(0.0, 0.0, -101.0), Vec3::new(0.0, 0.0, 300.0)));
    }

    #[test]
    fn limb_tolerance_keeps_side_points_visible() {
        // Perpendicular to the view axis: dot is 0, above the threshold
        assert!(is_camera_facing(Vec3::new(101.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 300.0)));
    }

    #[test]
    fn tolerance_cuts_off_past_the_limb() {
        // 30 degrees past the horizon falls below the threshold
        let angle = (210.0_f32).to_radians();
        let marker = Vec3::new(angle.sin(), 0.0, angle.cos()) * 101.0;
        assert!(!is_camera_facing(marker, Vec3::new(0.0, 0.0, 300.0)));
    }
}
