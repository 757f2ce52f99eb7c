use crate::color::ColorMap;
use crate::data::aggregate::{aggregate_outcomes, outcome_title, OutcomeSlice};
use crate::data::filter::project_payload_outcome;
use crate::data::model::{LaunchDataset, LaunchRecord, PayloadRange, SiteFilter};
use crate::data::options::{build_site_options, SiteOption};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Inputs are `site` and `payload`; every other field is derived from them
/// and the dataset, and only recomputed when an input changes.
pub struct AppState {
    /// Loaded dataset (None until a file has been loaded).
    pub dataset: Option<LaunchDataset>,

    /// Dropdown entries, built once per dataset.
    pub site_options: Vec<SiteOption>,

    /// Current launch-site selection.
    pub site: SiteFilter,

    /// Current payload range; always within the dataset's observed bounds.
    pub payload: PayloadRange,

    /// Pie chart title and slices for the current site selection.
    pub pie_title: String,
    pub pie_slices: Vec<OutcomeSlice>,

    /// Launches shown in the scatter chart and record table (cached).
    pub scatter_rows: Vec<LaunchRecord>,

    /// Booster version → colour for the scatter chart.
    pub color_map: Option<ColorMap>,

    /// Whether the record table under the scatter chart is expanded.
    pub show_table: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            site_options: Vec::new(),
            site: SiteFilter::All,
            payload: PayloadRange::new(0.0, 0.0),
            pie_title: outcome_title(&SiteFilter::All),
            pie_slices: Vec::new(),
            scatter_rows: Vec::new(),
            color_map: None,
            show_table: false,
            status_message: None,
        }
    }
}

impl AppState {
    pub fn with_dataset(dataset: LaunchDataset) -> Self {
        let mut state = Self::default();
        state.set_dataset(dataset);
        state
    }

    /// Ingest a newly loaded dataset and reset the controls to their defaults:
    /// `All` sites and the full observed payload range.
    pub fn set_dataset(&mut self, dataset: LaunchDataset) {
        self.site_options = build_site_options(&dataset);
        self.site = SiteFilter::All;
        self.payload = dataset
            .payload_bounds()
            .unwrap_or_else(|| PayloadRange::new(0.0, 0.0));
        self.color_map = Some(ColorMap::new(dataset.booster_versions()));

        log::info!(
            "dataset ready: {} launches from {} sites",
            dataset.len(),
            dataset.sites().len()
        );

        self.dataset = Some(dataset);
        self.status_message = None;
        self.refresh_pie();
        self.refresh_scatter();
    }

    /// Change the site selection.  Both charts depend on it.
    pub fn set_site(&mut self, site: SiteFilter) {
        if site == self.site {
            return;
        }
        log::debug!("site filter -> {}", site.value());
        self.site = site;
        self.refresh_pie();
        self.refresh_scatter();
    }

    /// Change the payload range.  Only the scatter chart depends on it.
    pub fn set_payload(&mut self, payload: PayloadRange) {
        let payload = match self.payload_bounds() {
            Some(bounds) => payload.clamp_to(&bounds),
            None => payload,
        };
        if payload == self.payload {
            return;
        }
        log::debug!("payload range -> {payload}");
        self.payload = payload;
        self.refresh_scatter();
    }

    /// Observed payload bounds of the loaded dataset.
    pub fn payload_bounds(&self) -> Option<PayloadRange> {
        self.dataset.as_ref().and_then(|ds| ds.payload_bounds())
    }

    fn refresh_pie(&mut self) {
        self.pie_title = outcome_title(&self.site);
        self.pie_slices = match &self.dataset {
            Some(ds) => aggregate_outcomes(ds, &self.site),
            None => Vec::new(),
        };
        log::debug!("pie: {} slices", self.pie_slices.len());
    }

    fn refresh_scatter(&mut self) {
        self.scatter_rows = match &self.dataset {
            Some(ds) => project_payload_outcome(ds, &self.site, &self.payload)
                .into_iter()
                .cloned()
                .collect(),
            None => Vec::new(),
        };
        log::debug!("scatter: {} launches", self.scatter_rows.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::fixtures::small_dataset;
    use crate::data::model::Outcome;

    fn scatter_payloads(state: &AppState) -> Vec<f64> {
        state.scatter_rows.iter().map(|r| r.payload_mass_kg).collect()
    }

    #[test]
    fn new_dataset_resets_controls_to_defaults() {
        let state = AppState::with_dataset(small_dataset());
        assert_eq!(state.site, SiteFilter::All);
        assert_eq!(state.payload, PayloadRange::new(500.0, 5000.0));
        assert_eq!(state.site_options.len(), 3);
        assert_eq!(scatter_payloads(&state), vec![500.0, 5000.0, 3000.0]);
        assert_eq!(state.pie_title, "Successful Launches by Site");
        assert_eq!(state.pie_slices.len(), 2);
    }

    #[test]
    fn site_change_recomputes_both_views() {
        let mut state = AppState::with_dataset(small_dataset());
        state.set_site(SiteFilter::Site("CCAFS".into()));

        assert_eq!(state.pie_title, "Successful Launches for CCAFS");
        let labels: Vec<&str> = state.pie_slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["Success", "Fail"]);
        assert_eq!(scatter_payloads(&state), vec![500.0, 5000.0]);
    }

    #[test]
    fn payload_change_only_touches_scatter() {
        let mut state = AppState::with_dataset(small_dataset());
        let pie_before = state.pie_slices.clone();

        state.set_payload(PayloadRange::new(1000.0, 4000.0));
        assert_eq!(scatter_payloads(&state), vec![3000.0]);
        assert_eq!(state.pie_slices, pie_before);
    }

    #[test]
    fn payload_range_is_clamped_to_observed_bounds() {
        let mut state = AppState::with_dataset(small_dataset());
        state.set_payload(PayloadRange::new(0.0, 20_000.0));
        assert_eq!(state.payload, PayloadRange::new(500.0, 5000.0));
    }

    #[test]
    fn no_dataset_means_empty_views() {
        let mut state = AppState::default();
        state.set_site(SiteFilter::Site("KSC".into()));
        assert!(state.pie_slices.is_empty());
        assert!(state.scatter_rows.is_empty());
    }

    #[test]
    fn scatter_rows_are_the_projection_of_the_current_selection() {
        let ds = small_dataset();
        let mut state = AppState::with_dataset(ds.clone());
        state.set_site(SiteFilter::Site("CCAFS".into()));
        state.set_payload(PayloadRange::new(1000.0, 5000.0));

        let expected: Vec<LaunchRecord> =
            project_payload_outcome(&ds, &state.site, &state.payload)
                .into_iter()
                .cloned()
                .collect();
        assert_eq!(state.scatter_rows, expected);
        assert_eq!(scatter_payloads(&state), vec![5000.0]);
    }

    #[test]
    fn picking_a_site_named_all_selects_only_that_site() {
        let ds = LaunchDataset::from_records(vec![
            LaunchRecord::new("All", 100.0, Outcome::Success, "FT"),
            LaunchRecord::new("KSC", 200.0, Outcome::Failure, "FT"),
        ]);
        let mut state = AppState::with_dataset(ds);

        let site_entry = state.site_options[1].filter.clone();
        state.set_site(site_entry);

        assert_eq!(state.site, SiteFilter::Site("All".into()));
        assert_eq!(state.pie_title, "Successful Launches for All");
        assert_eq!(state.scatter_rows.len(), 1);
        assert_eq!(state.scatter_rows[0].launch_site, "All");
    }
}
