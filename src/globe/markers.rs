//! Country marker cones and their pointer interaction.

use bevy::picking::prelude::*;
use bevy::prelude::*;

use crate::core::coordinates::lat_lon_to_point;
use crate::country::types::{CountryLoadState, CountryStore};
use crate::globe::visibility::VisibleCountries;
use crate::globe::{EarthRoot, MARKER_RADIUS};
use crate::ui::state::SelectionState;

const MARKER_COLOR: Color = Color::srgb(1.0, 0.8, 0.0);
const HIGHLIGHT_COLOR: Color = Color::srgb(1.0, 0.6, 0.0);
const HIGHLIGHT_SCALE: f32 = 1.35;
/// Markers on the far side fade out rather than disappear.
const HIDDEN_ALPHA: f32 = 0.3;

/// One cone per country, tagged with its ISO 3166-1 alpha-3 code.
#[derive(Component)]
pub struct CountryMarker {
    pub cca3: String,
}

/// Tracks whether the marker set has been spawned for the current dataset.
#[derive(Component)]
pub struct MarkerSet;

/// Spawn one marker per country once the dataset arrives. Countries
/// without coordinates are skipped.
pub fn spawn_country_markers(
    mut commands: Commands,
    store: Res<CountryStore>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    root: Query<Entity, With<EarthRoot>>,
    existing: Query<Entity, With<MarkerSet>>,
) {
    if store.load_state != CountryLoadState::Ready || !existing.is_empty() {
        return;
    }
    let Ok(root_entity) = root.single() else {
        return;
    };

    let cone = meshes.add(Cone {
        radius: 1.2,
        height: 3.0,
    });

    let set = commands
        .spawn((
            MarkerSet,
            Transform::default(),
            Visibility::default(),
            Name::new("Country Markers"),
        ))
        .id();
    commands.entity(root_entity).add_child(set);

    let mut spawned = 0usize;
    for country in &store.countries {
        let Some((lat, lon)) = country.marker_lat_lon() else {
            continue;
        };
        let position = lat_lon_to_point(lat, lon, MARKER_RADIUS);
        // Point the cone tip at the surface
        let rotation = Quat::from_rotation_arc(Vec3::Y, -position.normalize());
        let marker = commands
            .spawn((
                CountryMarker {
                    cca3: country.cca3.clone(),
                },
                Mesh3d(cone.clone()),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: MARKER_COLOR,
                    emissive: LinearRgba::rgb(0.3, 0.2, 0.0),
                    ..default()
                })),
                Transform::from_translation(position).with_rotation(rotation),
                Pickable::default(),
                Name::new(format!("Marker {}", country.cca3)),
            ))
            .observe(on_marker_click)
            .observe(on_marker_over)
            .observe(on_marker_out)
            .id();
        commands.entity(set).add_child(marker);
        spawned += 1;
    }
    info!("spawned {spawned} country markers");
}

fn on_marker_click(
    mut trigger: Trigger<Pointer<Click>>,
    markers: Query<&CountryMarker>,
    visible: Res<VisibleCountries>,
    mut selection: ResMut<SelectionState>,
) {
    let Ok(marker) = markers.get(trigger.target()) else {
        return;
    };
    if !visible.0.contains(&marker.cca3) {
        return;
    }
    selection.selected = Some(marker.cca3.clone());
    selection.sidebar_open = true;
    trigger.propagate(false);
}

fn on_marker_over(
    mut trigger: Trigger<Pointer<Over>>,
    markers: Query<&CountryMarker>,
    visible: Res<VisibleCountries>,
    mut selection: ResMut<SelectionState>,
) {
    let Ok(marker) = markers.get(trigger.target()) else {
        return;
    };
    if !visible.0.contains(&marker.cca3) {
        return;
    }
    selection.hovered = Some(marker.cca3.clone());
    trigger.propagate(false);
}

fn on_marker_out(
    mut trigger: Trigger<Pointer<Out>>,
    markers: Query<&CountryMarker>,
    mut selection: ResMut<SelectionState>,
) {
    let Ok(marker) = markers.get(trigger.target()) else {
        return;
    };
    if selection.hovered.as_deref() == Some(marker.cca3.as_str()) {
        selection.hovered = None;
    }
    trigger.propagate(false);
}

/// Scale and tint markers to reflect hover, selection and visibility.
/// Far-side markers fade out and stop receiving pointer events.
pub fn update_marker_appearance(
    selection: Res<SelectionState>,
    visible: Res<VisibleCountries>,
    mut markers: Query<(
        &CountryMarker,
        &mut Transform,
        &mut Pickable,
        &MeshMaterial3d<StandardMaterial>,
    )>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (marker, mut transform, mut pickable, material) in markers.iter_mut() {
        let facing = visible.0.contains(&marker.cca3);
        let active = facing
            && (selection.hovered.as_deref() == Some(marker.cca3.as_str())
                || selection.selected.as_deref() == Some(marker.cca3.as_str()));

        transform.scale = if active {
            Vec3::splat(HIGHLIGHT_SCALE)
        } else {
            Vec3::ONE
        };
        *pickable = if facing {
            Pickable::default()
        } else {
            Pickable::IGNORE
        };

        if let Some(mat) = materials.get_mut(&material.0) {
            let color = if active { HIGHLIGHT_COLOR } else { MARKER_COLOR };
            mat.base_color = if facing {
                color
            } else {
                color.with_alpha(HIDDEN_ALPHA)
            };
            mat.alpha_mode = if facing {
                AlphaMode::Opaque
            } else {
                AlphaMode::Blend
            };
            mat.emissive = if active {
                LinearRgba::rgb(0.8, 0.5, 0.0)
            } else {
                LinearRgba::rgb(0.3, 0.2, 0.0)
            };
        }
    }
}
