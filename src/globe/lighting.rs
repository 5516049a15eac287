//! Sunlight toggle for the main directional light.

use bevy::prelude::*;

use crate::ui::state::ViewSettings;

/// Ambient level while the directional light is on.
pub const AMBIENT_SUNLIT: f32 = 80.0;
/// Brighter ambient fill when sunlight is off so the globe stays readable.
pub const AMBIENT_FLAT: f32 = 500.0;

/// The main directional light toggled from the control panel.
#[derive(Component)]
pub struct SunLight;

pub fn apply_sunlight_toggle(
    settings: Res<ViewSettings>,
    mut ambient: ResMut<AmbientLight>,
    mut lights: Query<&mut Visibility, With<SunLight>>,
) {
    if !settings.is_changed() {
        return;
    }
    for mut visibility in lights.iter_mut() {
        *visibility = if settings.sunlight_enabled {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
    ambient.brightness = if settings.sunlight_enabled {
        AMBIENT_SUNLIT
    } else {
        AMBIENT_FLAT
    };
}
