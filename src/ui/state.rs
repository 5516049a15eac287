//! UI resources shared between the panels and the 3D systems.

use bevy::prelude::*;

/// Toggles driven by the control panel.
#[derive(Resource)]
pub struct ViewSettings {
    pub rotation_enabled: bool,
    pub sunlight_enabled: bool,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            rotation_enabled: true,
            sunlight_enabled: true,
        }
    }
}

/// Which country is hovered and which is selected, plus whether the
/// sidebar is open. The selected code outlives the open flag so the
/// sidebar can animate closed before it unmounts.
#[derive(Resource, Default)]
pub struct SelectionState {
    pub hovered: Option<String>,
    pub selected: Option<String>,
    pub sidebar_open: bool,
}
