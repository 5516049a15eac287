//! Country dataset: REST fetch, response merging and session storage.

use bevy::prelude::*;

pub mod fetcher;
pub mod systems;
pub mod types;

pub use types::{
    CountryFetchChannels, CountryFetchCommand, CountryLoadState, CountryRecord, CountryStore,
};

/// Plugin for country data management.
pub struct CountryPlugin;

impl Plugin for CountryPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CountryStore>()
            .add_systems(Startup, systems::setup_country_worker)
            .add_systems(Update, systems::apply_country_results);
    }
}
