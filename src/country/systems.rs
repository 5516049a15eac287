//! Country fetch systems (worker setup + result dispatch).

use crate::country::fetcher::start_country_worker;
use crate::country::types::{
    CountryFetchChannels, CountryFetchCommand, CountryFetchResult, CountryLoadState, CountryStore,
};
use bevy::prelude::*;

/// Start the worker and immediately request the dataset for this session.
pub fn setup_country_worker(mut commands: Commands) {
    let channels = start_country_worker();
    if channels.cmd_tx.send(CountryFetchCommand::FetchAll).is_err() {
        error!("country worker rejected the initial fetch command");
    }
    commands.insert_resource(channels);
}

/// Drain fetch results into the session store.
pub fn apply_country_results(
    mut store: ResMut<CountryStore>,
    channels: Option<Res<CountryFetchChannels>>,
) {
    let Some(channels) = channels else { return };
    let Ok(guard) = channels.res_rx.lock() else {
        return;
    };

    while let Ok(msg) = guard.try_recv() {
        match msg {
            CountryFetchResult::Loaded(countries) => {
                info!("loaded {} countries", countries.len());
                store.countries = countries;
                store.load_state = CountryLoadState::Ready;
            }
            CountryFetchResult::Failed(error) => {
                warn!("country fetch failed: {error}");
                store.countries.clear();
                store.load_state = CountryLoadState::Failed(error);
            }
        }
    }
}
