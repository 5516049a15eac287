//! Geographic coordinate mapping for the globe.
//!
//! The mapping uses the same convention as the equirectangular textures:
//! colatitude measured from the north pole, azimuth offset by 180 degrees,
//! and a negated x axis. Markers and border lines only line up with the
//! texture-mapped sphere while this exact sign/offset convention holds.

use bevy::math::Vec3;
use std::f32::consts::PI;

/// Radius of the globe surface in world units.
pub const GLOBE_RADIUS: f32 = 100.0;

/// Map latitude/longitude in degrees to a point on a sphere of `radius`.
pub fn lat_lon_to_point(lat_deg: f32, lon_deg: f32, radius: f32) -> Vec3 {
    let phi = (90.0 - lat_deg) * PI / 180.0;
    let theta = (lon_deg + 180.0) * PI / 180.0;

    let x = -radius * phi.sin() * theta.cos();
    let y = radius * phi.cos();
    let z = radius * phi.sin() * theta.sin();

    Vec3::new(x, y, z)
}

/// Inverse of [`lat_lon_to_point`]: recover latitude/longitude in degrees
/// from a point on (or near) the sphere, with longitude normalized to
/// [-180, 180]. Used to report where the globe surface was clicked.
pub fn point_to_lat_lon(point: Vec3) -> (f32, f32) {
    let n = point.normalize_or_zero();
    if n == Vec3::ZERO {
        return (0.0, 0.0);
    }

    let phi = n.y.clamp(-1.0, 1.0).acos();
    let theta = n.z.atan2(-n.x);

    let lat = 90.0 - phi * 180.0 / PI;
    let mut lon = theta * 180.0 / PI - 180.0;
    if lon < -180.0 {
        lon += 360.0;
    }
    (lat, lon)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    #[test]
    fn test_points_lie_on_the_requested_radius() {
        for lat in (-90..=90).step_by(30) {
            for lon in (-180..=180).step_by(60) {
                let point = lat_lon_to_point(lat as f32, lon as f32, GLOBE_RADIUS);
                assert!(
                    (point.length() - GLOBE_RADIUS).abs() < EPSILON,
                    "lat={lat} lon={lon} length={}",
                    point.length()
                );
            }
        }
    }

    #[test]
    fn test_north_pole_maps_to_positive_y() {
        let point = lat_lon_to_point(90.0, 0.0, 10.0);
        assert!(point.distance(Vec3::new(0.0, 10.0, 0.0)) < EPSILON);
    }

    #[test]
    fn test_antimeridian_wraparound_is_continuous() {
        let west = lat_lon_to_point(0.0, -180.0, GLOBE_RADIUS);
        let east = lat_lon_to_point(0.0, 180.0, GLOBE_RADIUS);
        assert!(west.distance(east) < EPSILON);
    }

    #[test]
    fn test_equator_prime_meridian() {
        // phi = 90°, theta = 180°: the point lands on the +x axis
        let point = lat_lon_to_point(0.0, 0.0, GLOBE_RADIUS);
        assert!(point.distance(Vec3::new(GLOBE_RADIUS, 0.0, 0.0)) < EPSILON);
    }

    #[test]
    fn test_inverse_round_trips_away_from_poles() {
        for lat in [-60.0_f32, -30.0, 0.0, 45.0, 75.0] {
            for lon in [-150.0_f32, -90.0, 0.0, 60.0, 179.0] {
                let point = lat_lon_to_point(lat, lon, GLOBE_RADIUS);
                let (lat_back, lon_back) = point_to_lat_lon(point);
                assert!((lat_back - lat).abs() < 1e-2, "lat {lat} -> {lat_back}");
                assert!((lon_back - lon).abs() < 1e-2, "lon {lon} -> {lon_back}");
            }
        }
    }

    #[test]
    fn test_inverse_of_zero_vector_is_origin_coordinates() {
        assert_eq!(point_to_lat_lon(Vec3::ZERO), (0.0, 0.0));
    }
}
