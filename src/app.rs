use eframe::egui;

use crate::config::DashboardConfig;
use crate::data::model::LaunchDataset;
use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchDashboardApp {
    pub config: DashboardConfig,
    pub state: AppState,
}

impl LaunchDashboardApp {
    pub fn new(config: DashboardConfig, dataset: LaunchDataset) -> Self {
        Self {
            config,
            state: AppState::with_dataset(dataset),
        }
    }
}

impl eframe::App for LaunchDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar + title ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state, &self.config);
        });

        // ---- Left side panel: site dropdown + payload range ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state, &self.config);
            });

        // ---- Bottom panel: records behind the scatter chart ----
        if self.state.show_table {
            egui::TopBottomPanel::bottom("record_table")
                .resizable(true)
                .default_height(200.0)
                .show(ctx, |ui| {
                    table::record_table(ui, &self.state, &self.config);
                });
        }

        // ---- Central panel: pie above scatter ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let half = (ui.available_height() / 2.0 - 8.0).max(120.0);
            plot::outcome_pie(ui, &self.state, half);
            ui.separator();
            plot::payload_scatter(ui, &self.state);
        });
    }
}
