//! egui UI layer: sidebar, control panel and load-state overlays.

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub mod format;
pub mod panels;
pub mod state;
pub mod systems;

pub use state::{SelectionState, ViewSettings};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewSettings>()
            .init_resource::<SelectionState>()
            .add_systems(EguiPrimaryContextPass, systems::ui_system);
    }
}
