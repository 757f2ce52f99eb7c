use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::config::DashboardConfig;
use crate::state::AppState;

/// Tabular view of the launches currently plotted in the scatter chart.
pub fn record_table(ui: &mut Ui, state: &AppState, config: &DashboardConfig) {
    let rows = &state.scatter_rows;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto().at_least(140.0))
        .column(Column::auto().at_least(120.0))
        .column(Column::auto().at_least(60.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for title in ["Launch Site", "Payload Mass (kg)", "class", "Booster Version"] {
                header.col(|ui| {
                    ui.label(RichText::new(title).strong());
                });
            }
        })
        .body(|body| {
            body.rows(config.table_row_height, rows.len(), |mut row| {
                let rec = &rows[row.index()];
                row.col(|ui| {
                    ui.label(&rec.launch_site);
                });
                row.col(|ui| {
                    ui.label(format!("{:.1}", rec.payload_mass_kg));
                });
                row.col(|ui| {
                    ui.label(rec.outcome.class().to_string());
                });
                row.col(|ui| {
                    ui.label(&rec.booster_version);
                });
            });
        });
}
