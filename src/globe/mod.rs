//! Globe rendering: textured surface, cloud layer, country markers,
//! rotation and the per-frame visibility pass.

use bevy::picking::prelude::*;
use bevy::prelude::*;

pub mod lighting;
pub mod markers;
pub mod starfield;
pub mod visibility;

pub use visibility::VisibleCountries;

use crate::core::coordinates::{GLOBE_RADIUS, point_to_lat_lon};
use crate::ui::state::ViewSettings;

/// Cloud shell radius, slightly above the surface for parallax.
pub const CLOUD_RADIUS: f32 = GLOBE_RADIUS + 2.0;
/// Markers float just above the surface.
pub const MARKER_RADIUS: f32 = GLOBE_RADIUS + 1.0;

/// Per-frame yaw applied to the whole globe group while rotation is on.
const ROTATION_STEP: f32 = 0.0005;
/// Smaller per-frame yaw for the cloud layer.
const CLOUD_ROTATION_STEP: f32 = 0.0001;

/// Root of the rotating group: surface, clouds, borders and markers all
/// rotate together under this entity.
#[derive(Component)]
pub struct EarthRoot;

/// Cloud shell entity; drifts independently of the rotation toggle.
#[derive(Component)]
pub struct CloudLayer;

/// Plugin for globe rendering and marker interaction.
pub struct GlobePlugin;

impl Plugin for GlobePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<VisibleCountries>()
            .add_systems(Startup, (spawn_globe, starfield::spawn_starfield))
            .add_systems(
                Update,
                (
                    markers::spawn_country_markers,
                    rotate_globe,
                    visibility::update_visible_countries.after(rotate_globe),
                    markers::update_marker_appearance
                        .after(visibility::update_visible_countries),
                    lighting::apply_sunlight_toggle,
                ),
            );
    }
}

fn spawn_globe(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
) {
    let surface = commands
        .spawn((
            Mesh3d(meshes.add(Sphere::new(GLOBE_RADIUS).mesh().uv(64, 64))),
            MeshMaterial3d(materials.add(surface_material(
                asset_server.load("albedo.jpg"),
                asset_server.load("ocean.png"),
                asset_server.load("bump.jpg"),
            ))),
            Name::new("Earth Surface"),
        ))
        .observe(log_surface_click)
        .id();

    let clouds = commands
        .spawn((
            Mesh3d(meshes.add(Sphere::new(CLOUD_RADIUS).mesh().uv(64, 64))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::WHITE.with_alpha(0.4),
                base_color_texture: Some(asset_server.load("clouds.png")),
                alpha_mode: AlphaMode::Blend,
                perceptual_roughness: 1.0,
                ..default()
            })),
            CloudLayer,
            Pickable::IGNORE,
            Name::new("Cloud Layer"),
        ))
        .id();

    commands
        .spawn((
            EarthRoot,
            Transform::default(),
            Visibility::default(),
            Name::new("Earth"),
        ))
        .add_children(&[surface, clouds]);
}

/// Surface material: albedo, the inverted ocean mask as the
/// metallic/roughness map, and the height map driving parallax relief.
fn surface_material(
    albedo: Handle<Image>,
    ocean_mask: Handle<Image>,
    height_map: Handle<Image>,
) -> StandardMaterial {
    StandardMaterial {
        base_color: Color::WHITE,
        base_color_texture: Some(albedo),
        metallic_roughness_texture: Some(ocean_mask),
        depth_map: Some(height_map),
        parallax_depth_scale: 0.02,
        perceptual_roughness: 1.0,
        metallic: 0.1,
        ..default()
    }
}

/// Report the geographic location of clicks on the globe surface.
fn log_surface_click(
    mut trigger: Trigger<Pointer<Click>>,
    root: Query<&GlobalTransform, With<EarthRoot>>,
) {
    let Some(position) = trigger.event().hit.position else {
        return;
    };
    // Undo the group rotation so the location matches the texture
    let local = match root.single() {
        Ok(transform) => transform.affine().inverse().transform_point3(position),
        Err(_) => position,
    };
    let (lat, lon) = point_to_lat_lon(local);
    info!("globe clicked at lat {lat:.2}, lon {lon:.2}");
    trigger.propagate(false);
}

/// Rotate the whole group while the toggle is on; the cloud layer keeps
/// drifting either way so the parallax never freezes completely.
fn rotate_globe(
    settings: Res<ViewSettings>,
    mut root: Query<&mut Transform, (With<EarthRoot>, Without<CloudLayer>)>,
    mut clouds: Query<&mut Transform, With<CloudLayer>>,
) {
    if settings.rotation_enabled {
        for mut transform in root.iter_mut() {
            transform.rotate_y(ROTATION_STEP);
        }
    }
    for mut transform in clouds.iter_mut() {
        transform.rotate_y(CLOUD_ROTATION_STEP);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_material_carries_all_three_maps() {
        let material = surface_material(Handle::default(), Handle::default(), Handle::default());
        assert!(material.base_color_texture.is_some());
        assert!(material.metallic_roughness_texture.is_some());
        assert!(material.depth_map.is_some());
        assert!(material.parallax_depth_scale > 0.0);
    }
}
