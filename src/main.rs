//! Interactive 3D world globe: country markers, borders and a detail
//! sidebar backed by the REST Countries API.

use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::picking::prelude::*;
use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy_egui::EguiPlugin;
use bevy_panorbit_camera::{PanOrbitCamera, PanOrbitCameraPlugin};

mod borders;
mod core;
mod country;
mod globe;
mod ui;

use crate::core::coordinates::GLOBE_RADIUS;
use crate::globe::lighting::{AMBIENT_SUNLIT, SunLight};

const CAMERA_START_RADIUS: f32 = 300.0;
const ZOOM_MIN: f32 = GLOBE_RADIUS * 1.5;
const ZOOM_MAX: f32 = 1000.0;

/// The single orbiting camera; visibility checks read its transform.
#[derive(Component)]
pub struct MainCamera;

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Atlas - Interactive World Globe".to_string(),
                    present_mode: PresentMode::AutoVsync,
                    ..default()
                }),
                ..default()
            }),
        )
        .add_plugins(EguiPlugin {
            enable_multipass_for_primary_context: true,
        })
        .add_plugins(PanOrbitCameraPlugin)
        .add_plugins(MeshPickingPlugin)
        .add_plugins(country::CountryPlugin)
        .add_plugins(borders::BordersPlugin)
        .add_plugins(globe::GlobePlugin)
        .add_plugins(ui::UiPlugin)
        .add_systems(Startup, setup_scene)
        .run();
}

fn setup_scene(mut commands: Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_SUNLIT,
        ..default()
    });

    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(500.0, 0.0, 0.0).looking_at(Vec3::ZERO, Vec3::Y),
        SunLight,
        Name::new("Sun"),
    ));

    commands.spawn((
        MainCamera,
        Camera3d::default(),
        Camera {
            clear_color: ClearColorConfig::Custom(Color::BLACK),
            ..default()
        },
        Tonemapping::TonyMcMapface,
        Transform::from_xyz(0.0, 0.0, CAMERA_START_RADIUS).looking_at(Vec3::ZERO, Vec3::Y),
        PanOrbitCamera {
            focus: Vec3::ZERO,
            radius: Some(CAMERA_START_RADIUS),
            yaw: Some(0.0),
            pitch: Some(0.0),
            zoom_lower_limit: ZOOM_MIN,
            zoom_upper_limit: Some(ZOOM_MAX),
            orbit_sensitivity: 0.5,
            zoom_sensitivity: 0.5,
            // Panning would drift the focus off the globe center
            pan_sensitivity: 0.0,
            ..default()
        },
        Name::new("Main Camera"),
    ));
}
