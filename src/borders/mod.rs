//! Country border lines built from a GeoJSON boundary dataset.

use bevy::prelude::*;

pub mod fetcher;
pub mod geometry;
pub mod systems;
pub mod types;

pub use types::{BorderFetchChannels, BorderFetchCommand, BorderLines};

/// Plugin for border outline fetching and rendering.
pub struct BordersPlugin;

impl Plugin for BordersPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BorderLines>()
            .add_systems(Startup, systems::setup_border_worker)
            .add_systems(
                Update,
                (systems::apply_border_results, systems::rebuild_border_lines).chain(),
            );
    }
}
