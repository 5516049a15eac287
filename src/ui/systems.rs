//! Root UI system driving the panels from application state.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::country::types::{
    CountryFetchChannels, CountryFetchCommand, CountryLoadState, CountryStore,
};
use crate::ui::panels;
use crate::ui::state::{SelectionState, ViewSettings};

pub fn ui_system(
    mut contexts: EguiContexts,
    mut store: ResMut<CountryStore>,
    mut settings: ResMut<ViewSettings>,
    mut selection: ResMut<SelectionState>,
    channels: Option<Res<CountryFetchChannels>>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    match store.load_state.clone() {
        CountryLoadState::Loading => {
            panels::render_loading_overlay(ctx);
        }
        CountryLoadState::Failed(message) => {
            if panels::render_error_overlay(ctx, &message) {
                if let Some(channels) = &channels {
                    match channels.cmd_tx.send(CountryFetchCommand::FetchAll) {
                        Ok(()) => store.load_state = CountryLoadState::Loading,
                        Err(err) => error!("Failed to request country refetch: {err}"),
                    }
                }
            }
        }
        CountryLoadState::Ready => {}
    }

    let (rotation_clicked, sunlight_clicked) = panels::render_control_panel(ctx, &settings);
    // Mutate only on a click so change detection stays quiet otherwise
    if rotation_clicked {
        settings.rotation_enabled = !settings.rotation_enabled;
    }
    if sunlight_clicked {
        settings.sunlight_enabled = !settings.sunlight_enabled;
    }

    if selection.selected.is_none() && store.load_state == CountryLoadState::Ready {
        panels::render_hint(ctx);
    }

    if let Some(cca3) = selection.selected.clone() {
        let country = store.countries.iter().find(|c| c.cca3 == cca3).cloned();
        if let Some(country) = country {
            let (openness, close_clicked) =
                panels::render_country_sidebar(ctx, &country, selection.sidebar_open);
            if close_clicked {
                selection.sidebar_open = false;
            }
            // Keep the record around until the exit slide completes
            if openness <= 0.0 && !selection.sidebar_open {
                selection.selected = None;
            }
        } else {
            selection.selected = None;
            selection.sidebar_open = false;
        }
    }
}
