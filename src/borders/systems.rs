//! Border fetch systems and line mesh swapping.

use crate::borders::fetcher::start_border_worker;
use crate::borders::geometry::{border_line_mesh, build_border_segments};
use crate::borders::types::{
    BorderFetchChannels, BorderFetchCommand, BorderFetchResult, BorderLines,
};
use crate::core::coordinates::GLOBE_RADIUS;
use crate::globe::EarthRoot;
use bevy::picking::prelude::*;
use bevy::prelude::*;

/// Lifted slightly off the surface so the lines never z-fight the globe.
pub const BORDER_RADIUS: f32 = GLOBE_RADIUS + 0.5;

const BORDER_COLOR: Color = Color::srgb(0.45, 0.75, 0.95);

/// Start the worker and request the boundary dataset once per session.
pub fn setup_border_worker(mut commands: Commands) {
    let channels = start_border_worker();
    if channels.cmd_tx.send(BorderFetchCommand::Fetch).is_err() {
        warn!("border worker rejected the initial fetch command");
    }
    commands.insert_resource(channels);
}

/// Drain worker results. A failure degrades silently: the globe stays
/// usable, borders simply do not render.
pub fn apply_border_results(
    mut lines: ResMut<BorderLines>,
    channels: Option<Res<BorderFetchChannels>>,
) {
    let Some(channels) = channels else { return };
    let Ok(guard) = channels.res_rx.lock() else {
        return;
    };

    while let Ok(msg) = guard.try_recv() {
        match msg {
            BorderFetchResult::Loaded(collection) => {
                lines.pending = Some(collection);
            }
            BorderFetchResult::Failed(error) => {
                warn!("border fetch failed, rendering without outlines: {error}");
            }
        }
    }
}

/// Turn a parsed collection into the line mesh and attach it under the
/// globe root. The previous geometry is released before the replacement
/// entity is attached, so a rebuild never shows both at once.
pub fn rebuild_border_lines(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut lines: ResMut<BorderLines>,
    root: Query<Entity, With<EarthRoot>>,
) {
    if lines.pending.is_none() {
        return;
    }
    let Ok(root) = root.single() else {
        return;
    };
    let Some(collection) = lines.pending.take() else {
        return;
    };

    let segments = build_border_segments(&collection, BORDER_RADIUS);
    info!("built {} border line segments", segments.len() / 2);

    if let Some(entity) = lines.entity.take() {
        commands.entity(entity).despawn();
    }
    if let Some(handle) = lines.mesh.take() {
        meshes.remove(&handle);
    }

    let mesh = meshes.add(border_line_mesh(segments));
    let entity = commands
        .spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: BORDER_COLOR,
                unlit: true,
                ..default()
            })),
            Transform::default(),
            Pickable::IGNORE,
            Name::new("Country Borders"),
        ))
        .id();
    commands.entity(root).add_child(entity);

    lines.entity = Some(entity);
    lines.mesh = Some(mesh);
}
