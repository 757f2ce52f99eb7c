use std::collections::{BTreeSet, HashSet};
use std::fmt;

// ---------------------------------------------------------------------------
// Column names as they appear in the source files
// ---------------------------------------------------------------------------

pub const COL_LAUNCH_SITE: &str = "Launch Site";
pub const COL_PAYLOAD_MASS: &str = "Payload Mass (kg)";
pub const COL_CLASS: &str = "class";
pub const COL_BOOSTER_VERSION: &str = "Booster Version";

/// Sentinel value selecting every launch site.
pub const ALL_SITES: &str = "All";

// ---------------------------------------------------------------------------
// Outcome – the binary `class` column
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Interpret a numeric class value. Only 0 and 1 are valid.
    pub fn from_class(class: f64) -> Option<Self> {
        if class == 0.0 {
            Some(Outcome::Failure)
        } else if class == 1.0 {
            Some(Outcome::Success)
        } else {
            None
        }
    }

    /// The `class` value as stored in the dataset.
    pub fn class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    /// Label used by the single-site pie chart.
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Failure => "Fail",
            Outcome::Success => "Success",
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the dataset
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub launch_site: String,
    /// Non-negative payload mass in kilograms.
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_version: String,
}

impl LaunchRecord {
    pub fn new(
        launch_site: impl Into<String>,
        payload_mass_kg: f64,
        outcome: Outcome,
        booster_version: impl Into<String>,
    ) -> Self {
        Self {
            launch_site: launch_site.into(),
            payload_mass_kg,
            outcome,
            booster_version: booster_version.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// PayloadRange – inclusive [min, max] in kg
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    min_kg: f64,
    max_kg: f64,
}

impl PayloadRange {
    /// Build a range from two endpoints in either order.
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { min_kg: a, max_kg: b }
        } else {
            Self { min_kg: b, max_kg: a }
        }
    }

    pub fn min_kg(&self) -> f64 {
        self.min_kg
    }

    pub fn max_kg(&self) -> f64 {
        self.max_kg
    }

    /// Inclusive on both ends.
    pub fn contains(&self, kg: f64) -> bool {
        kg >= self.min_kg && kg <= self.max_kg
    }

    /// Restrict this range to lie within `bounds`.
    pub fn clamp_to(&self, bounds: &PayloadRange) -> Self {
        let lo = self.min_kg.clamp(bounds.min_kg, bounds.max_kg);
        let hi = self.max_kg.clamp(bounds.min_kg, bounds.max_kg);
        Self::new(lo, hi)
    }
}

impl fmt::Display for PayloadRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} – {} kg", self.min_kg, self.max_kg)
    }
}

// ---------------------------------------------------------------------------
// SiteFilter – "All" or one launch site
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SiteFilter {
    #[default]
    All,
    Site(String),
}

impl SiteFilter {
    /// The dropdown value for this filter.
    pub fn value(&self) -> &str {
        match self {
            SiteFilter::All => ALL_SITES,
            SiteFilter::Site(site) => site,
        }
    }

    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteFilter::All => true,
            SiteFilter::Site(site) => record.launch_site == *site,
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The immutable record collection with indices computed once at load time.
#[derive(Debug, Clone, Default)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    /// Distinct launch sites in first-occurrence order.
    sites: Vec<String>,
    /// Sorted distinct booster versions (drives the scatter colour map).
    booster_versions: BTreeSet<String>,
    /// Observed payload min/max; `None` when empty.
    payload_bounds: Option<PayloadRange>,
}

impl LaunchDataset {
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut sites = Vec::new();
        let mut booster_versions = BTreeSet::new();
        let mut bounds: Option<(f64, f64)> = None;

        for rec in &records {
            if seen.insert(rec.launch_site.as_str()) {
                sites.push(rec.launch_site.clone());
            }
            booster_versions.insert(rec.booster_version.clone());

            let kg = rec.payload_mass_kg;
            bounds = Some(match bounds {
                None => (kg, kg),
                Some((lo, hi)) => (lo.min(kg), hi.max(kg)),
            });
        }

        LaunchDataset {
            records,
            sites,
            booster_versions,
            payload_bounds: bounds.map(|(lo, hi)| PayloadRange::new(lo, hi)),
        }
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    pub fn booster_versions(&self) -> &BTreeSet<String> {
        &self.booster_versions
    }

    pub fn payload_bounds(&self) -> Option<PayloadRange> {
        self.payload_bounds
    }

    /// Number of launch records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// The three-row dataset used throughout the worked examples.
    pub fn small_dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            LaunchRecord::new("CCAFS", 500.0, Outcome::Success, "F9 v1.0"),
            LaunchRecord::new("CCAFS", 5000.0, Outcome::Failure, "F9 v1.1"),
            LaunchRecord::new("KSC", 3000.0, Outcome::Success, "F9 v1.1"),
        ])
    }

    /// Arbitrary record lists drawn from a handful of sites and boosters.
    pub fn arb_records() -> impl proptest::strategy::Strategy<Value = Vec<LaunchRecord>> {
        use proptest::prelude::*;

        let site = prop::sample::select(vec![
            "CCAFS LC-40",
            "VAFB SLC-4E",
            "KSC LC-39A",
            "CCAFS SLC-40",
        ]);
        let booster = prop::sample::select(vec!["v1.0", "v1.1", "FT", "B4", "B5"]);
        prop::collection::vec((site, 0.0f64..10_000.0, any::<bool>(), booster), 0..60).prop_map(
            |rows| {
                rows.into_iter()
                    .map(|(site, kg, ok, booster)| {
                        let outcome = if ok { Outcome::Success } else { Outcome::Failure };
                        LaunchRecord::new(site, kg, outcome, booster)
                    })
                    .collect()
            },
        )
    }
}
