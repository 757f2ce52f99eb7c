use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Dashboard configuration
// ---------------------------------------------------------------------------

/// Dataset loaded at start-up, relative to the working directory.
pub const DEFAULT_DATASET: &str = "spacex_launch_dash.csv";

/// Fixed settings for the dashboard.  There are no CLI flags or environment
/// overrides; logging verbosity is the only knob (`RUST_LOG`).
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub dataset_path: PathBuf,
    pub title: String,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    /// Granularity of the payload range slider handles.
    pub payload_step_kg: f64,
    /// Row height in the record table.
    pub table_row_height: f32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET),
            title: "SpaceX Launch Records Dashboard".to_string(),
            window_size: [1200.0, 900.0],
            min_window_size: [700.0, 500.0],
            payload_step_kg: 1000.0,
            table_row_height: 18.0,
        }
    }
}
