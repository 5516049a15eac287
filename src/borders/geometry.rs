//! Border line geometry built from a GeoJSON feature collection.

use crate::core::coordinates::lat_lon_to_point;
use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use geojson::{FeatureCollection, PolygonType, Value};

/// Flatten every polygon ring in the collection into line-segment
/// endpoints on a sphere of `radius`. Each consecutive point pair in a
/// ring contributes one segment (two entries); no extra wraparound pair
/// is added since GeoJSON rings already repeat their first point.
pub fn build_border_segments(collection: &FeatureCollection, radius: f32) -> Vec<Vec3> {
    let mut segments = Vec::new();

    for feature in &collection.features {
        let Some(geometry) = &feature.geometry else {
            continue;
        };
        match &geometry.value {
            Value::Polygon(polygon) => push_polygon(&mut segments, polygon, radius),
            Value::MultiPolygon(polygons) => {
                for polygon in polygons {
                    push_polygon(&mut segments, polygon, radius);
                }
            }
            // The boundary dataset only carries polygons
            _ => {}
        }
    }

    segments
}

fn push_polygon(segments: &mut Vec<Vec3>, polygon: &PolygonType, radius: f32) {
    for ring in polygon {
        for pair in ring.windows(2) {
            let (Some(a), Some(b)) = (
                sphere_position(&pair[0], radius),
                sphere_position(&pair[1], radius),
            ) else {
                continue;
            };
            segments.push(a);
            segments.push(b);
        }
    }
}

// GeoJSON positions are [longitude, latitude]
fn sphere_position(position: &[f64], radius: f32) -> Option<Vec3> {
    if position.len() < 2 {
        return None;
    }
    Some(lat_lon_to_point(position[1] as f32, position[0] as f32, radius))
}

/// Build a renderable line-list mesh from flattened segment endpoints.
pub fn border_line_mesh(segments: Vec<Vec3>) -> Mesh {
    let positions: Vec<[f32; 3]> = segments.iter().map(|v| [v.x, v.y, v.z]).collect();
    // Outward normals keep the mesh layout compatible with the standard
    // material pipeline even though the lines render unlit.
    let normals: Vec<[f32; 3]> = segments
        .iter()
        .map(|v| {
            let n = v.normalize_or_zero();
            [n.x, n.y, n.z]
        })
        .collect();

    let mut mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use geojson::GeoJson;

    fn collection(json: &str) -> FeatureCollection {
        let geojson: GeoJson = json.parse().unwrap();
        FeatureCollection::try_from(geojson).unwrap()
    }

    fn polygon_fixture() -> FeatureCollection {
        collection(
            r#"{
                "type": "FeatureCollection",
                "features": [{
                    "type": "Feature",
                    "properties": {},
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 0.0]]]
                    }
                }]
            }"#,
        )
    }

    #[test]
    fn test_ring_of_n_points_yields_two_n_minus_one_entries() {
        // 4 ring points -> 3 segments -> 6 endpoint entries
        let segments = build_border_segments(&polygon_fixture(), 100.5);
        assert_eq!(segments.len(), 6);
    }

    #[test]
    fn test_segment_endpoints_sit_on_the_lifted_radius() {
        let radius = 100.5;
        let segments = build_border_segments(&polygon_fixture(), radius);
        for point in segments {
            assert!((point.length() - radius).abs() < 1e-3);
        }
    }

    #[test]
    fn test_multipolygon_rings_all_contribute() {
        let fc = collection(
            r#"{
                "type": "FeatureCollection",
                "features": [{
                    "type": "Feature",
                    "properties": {},
                    "geometry": {
                        "type": "MultiPolygon",
                        "coordinates": [
                            [[[0.0, 0.0], [5.0, 0.0], [0.0, 0.0]]],
                            [[[20.0, 20.0], [25.0, 20.0], [25.0, 25.0], [20.0, 20.0]]]
                        ]
                    }
                }]
            }"#,
        );
        // (3-1) + (4-1) segments, two entries each
        assert_eq!(build_border_segments(&fc, 100.5).len(), 10);
    }

    #[test]
    fn test_non_polygon_features_contribute_nothing() {
        let fc = collection(
            r#"{
                "type": "FeatureCollection",
                "features": [{
                    "type": "Feature",
                    "properties": {},
                    "geometry": { "type": "Point", "coordinates": [1.0, 2.0] }
                }]
            }"#,
        );
        assert!(build_border_segments(&fc, 100.5).is_empty());
    }

    #[test]
    fn test_line_mesh_carries_one_position_per_endpoint() {
        let segments = build_border_segments(&polygon_fixture(), 100.5);
        let count = segments.len();
        let mesh = border_line_mesh(segments);
        assert_eq!(mesh.count_vertices(), count);
    }
}
