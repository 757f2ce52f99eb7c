use eframe::egui::{self, Color32, RichText, ScrollArea, Slider, Ui};

use crate::config::DashboardConfig;
use crate::data::model::{PayloadRange, SiteFilter};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter controls
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState, config: &DashboardConfig) {
    ui.heading("Filters");
    ui.separator();

    match &state.dataset {
        None => {
            ui.label("No dataset loaded.");
            return;
        }
        Some(ds) if ds.is_empty() => {
            ui.label("The dataset contains no launches.");
            return;
        }
        Some(_) => {}
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            site_dropdown(ui, state);
            ui.separator();

            payload_controls(ui, state, config);
            ui.separator();

            ui.checkbox(&mut state.show_table, "Show launch records");
            ui.separator();

            booster_legend(ui, state);
        });
}

fn site_dropdown(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Launch site");

    let selected_text = state
        .site_options
        .iter()
        .find(|opt| opt.filter == state.site)
        .map(|opt| opt.label.clone())
        .unwrap_or_else(|| "Select a Launch Site".to_string());

    let mut picked: Option<SiteFilter> = None;
    egui::ComboBox::from_id_salt("site_dropdown")
        .selected_text(selected_text)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for opt in &state.site_options {
                if ui
                    .selectable_label(opt.filter == state.site, &opt.label)
                    .clicked()
                {
                    picked = Some(opt.filter.clone());
                }
            }
        });

    if let Some(filter) = picked {
        state.set_site(filter);
    }
}

fn payload_controls(ui: &mut Ui, state: &mut AppState, config: &DashboardConfig) {
    ui.strong("Payload range (kg)");

    let Some(bounds) = state.payload_bounds() else {
        ui.label("No payload data.");
        return;
    };

    let mut lo = state.payload.min_kg();
    let mut hi = state.payload.max_kg();
    let range = bounds.min_kg()..=bounds.max_kg();

    let lo_changed = ui
        .add(
            Slider::new(&mut lo, range.clone())
                .step_by(config.payload_step_kg)
                .text("min"),
        )
        .changed();
    let hi_changed = ui
        .add(
            Slider::new(&mut hi, range)
                .step_by(config.payload_step_kg)
                .text("max"),
        )
        .changed();

    // Handles may not cross: the one being dragged pushes the other.
    if lo > hi {
        if lo_changed {
            hi = lo;
        } else {
            lo = hi;
        }
    }
    if lo_changed || hi_changed {
        state.set_payload(PayloadRange::new(lo, hi));
    }

    if ui.small_button("Full range").clicked() {
        state.set_payload(bounds);
    }
}

fn booster_legend(ui: &mut Ui, state: &AppState) {
    let Some(cm) = &state.color_map else {
        return;
    };
    egui::CollapsingHeader::new(RichText::new("Booster versions").strong())
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            for (version, color) in cm.legend_entries() {
                ui.label(RichText::new(format!("● {version}")).color(color));
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState, config: &DashboardConfig) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} launches loaded, {} in scatter",
                ds.len(),
                state.scatter_rows.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });

    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(
            RichText::new(&config.title)
                .size(28.0)
                .color(Color32::from_rgb(0x50, 0x3D, 0x36)),
        );
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open launch records")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    let Some(path) = file else {
        return;
    };

    // A failed load keeps the current dataset on screen.
    match crate::data::loader::load_file(&path) {
        Ok(dataset) => {
            log::info!("replacing dataset with {}", path.display());
            state.set_dataset(dataset);
        }
        Err(e) => {
            let kind = if e.is_schema_error() {
                "Unexpected file layout"
            } else {
                "Error"
            };
            let e = anyhow::Error::new(e).context(format!("loading {}", path.display()));
            log::error!("Failed to load file: {e:#}");
            state.status_message = Some(format!("{kind}: {e:#}"));
        }
    }
}
