//! egui panels: country sidebar, control panel and status overlays.

use bevy_egui::egui;

use crate::country::types::CountryRecord;
use crate::ui::format;
use crate::ui::state::ViewSettings;

const SIDEBAR_WIDTH: f32 = 360.0;
const SIDEBAR_ANIM_SECS: f32 = 0.3;

/// Slide the sidebar in or out and render the selected country's details.
/// Returns `(openness, close_clicked)`; the caller clears the selection
/// once openness reaches zero so the panel finishes its exit animation.
pub fn render_country_sidebar(
    ctx: &egui::Context,
    country: &CountryRecord,
    open: bool,
) -> (f32, bool) {
    let openness = ctx.animate_bool_with_time(
        egui::Id::new("country_sidebar"),
        open,
        SIDEBAR_ANIM_SECS,
    );
    if openness <= 0.0 {
        return (openness, false);
    }

    let mut close_clicked = false;
    egui::SidePanel::right("country_sidebar")
        .resizable(false)
        .exact_width(SIDEBAR_WIDTH * openness)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(flag) = &country.flag {
                    ui.label(egui::RichText::new(flag).size(28.0));
                }
                ui.heading(country.common_name());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("\u{2715}").clicked() {
                        close_clicked = true;
                    }
                });
            });
            if let Some(name) = &country.name {
                ui.label(egui::RichText::new(&name.official).italics());
            }
            ui.separator();

            ui.columns(2, |columns| {
                columns[0].label(egui::RichText::new("Population").strong());
                columns[0].label(format::population_text(country));
                columns[1].label(egui::RichText::new("Area").strong());
                columns[1].label(format::area_text(country));
            });
            ui.separator();

            egui::Grid::new("country_details")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.label(egui::RichText::new("Capital").strong());
                    ui.label(format::capital_text(country));
                    ui.end_row();

                    ui.label(egui::RichText::new("Region").strong());
                    ui.label(format::region_text(country));
                    ui.end_row();

                    ui.label(egui::RichText::new("Subregion").strong());
                    ui.label(format::subregion_text(country));
                    ui.end_row();

                    ui.label(egui::RichText::new("Currencies").strong());
                    ui.label(format::currencies_text(country));
                    ui.end_row();

                    ui.label(egui::RichText::new("Languages").strong());
                    ui.label(format::languages_text(country));
                    ui.end_row();

                    ui.label(egui::RichText::new("Borders").strong());
                    ui.label(format::borders_text(country));
                    ui.end_row();
                });

            if let Some(timezones) = &country.timezones {
                if !timezones.is_empty() {
                    ui.separator();
                    ui.label(egui::RichText::new("Timezones").strong());
                    ui.horizontal_wrapped(|ui| {
                        for timezone in timezones {
                            ui.label(
                                egui::RichText::new(timezone)
                                    .monospace()
                                    .background_color(egui::Color32::from_gray(40)),
                            );
                        }
                    });
                }
            }

            ui.separator();
            if let Some(url) = country.maps.as_ref().and_then(|m| m.google_maps.as_ref()) {
                ui.hyperlink_to("Open in Google Maps", url);
            }
            if let Some(url) = country.flags.as_ref().and_then(|f| f.svg.as_ref()) {
                ui.hyperlink_to("Flag image", url);
            }
        });

    (openness, close_clicked)
}

/// Rotation and sunlight toggles. Returns which buttons were clicked so
/// the caller only touches the settings resource on an actual change.
pub fn render_control_panel(ctx: &egui::Context, settings: &ViewSettings) -> (bool, bool) {
    let mut rotation_clicked = false;
    let mut sunlight_clicked = false;
    egui::Window::new("View")
        .anchor(egui::Align2::LEFT_BOTTOM, [12.0, -12.0])
        .resizable(false)
        .collapsible(false)
        .title_bar(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                let rotation_label = if settings.rotation_enabled {
                    "\u{23f8} Pause rotation"
                } else {
                    "\u{25b6} Resume rotation"
                };
                if ui.button(rotation_label).clicked() {
                    rotation_clicked = true;
                }
                let sunlight_label = if settings.sunlight_enabled {
                    "\u{263e} Sunlight off"
                } else {
                    "\u{2600} Sunlight on"
                };
                if ui.button(sunlight_label).clicked() {
                    sunlight_clicked = true;
                }
            });
        });
    (rotation_clicked, sunlight_clicked)
}

/// Transient hint shown until the first selection happens.
pub fn render_hint(ctx: &egui::Context) {
    egui::Area::new(egui::Id::new("globe_hint"))
        .anchor(egui::Align2::CENTER_BOTTOM, [0.0, -24.0])
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new("Click a marker to explore a country. Drag to orbit, scroll to zoom.")
                    .color(egui::Color32::from_gray(180)),
            );
        });
}

pub fn render_loading_overlay(ctx: &egui::Context) {
    egui::Area::new(egui::Id::new("loading_overlay"))
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading country data\u{2026}");
            });
        });
}

/// Fetch failure notice with a retry button. Returns true when clicked.
pub fn render_error_overlay(ctx: &egui::Context, message: &str) -> bool {
    let mut retry = false;
    egui::Window::new("Data unavailable")
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .resizable(false)
        .collapsible(false)
        .show(ctx, |ui| {
            ui.label(message);
            ui.add_space(8.0);
            if ui.button("Retry").clicked() {
                retry = true;
            }
        });
    retry
}
