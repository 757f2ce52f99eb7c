use std::collections::HashMap;

use super::model::{LaunchDataset, SiteFilter};

// ---------------------------------------------------------------------------
// Success / failure aggregation (pie chart data)
// ---------------------------------------------------------------------------

/// One pie slice: a category label and how many launches fall into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeSlice {
    pub label: String,
    pub count: usize,
}

/// Count launches for the pie chart.
///
/// * `All`: successful launches only, grouped by launch site. Sites without a
///   single success are left out rather than reported with a zero count.
/// * A specific site: every launch from that site, grouped into `Success` /
///   `Fail`.
///
/// Slices appear in first-occurrence order. No matching rows gives an empty
/// result.
pub fn aggregate_outcomes(dataset: &LaunchDataset, filter: &SiteFilter) -> Vec<OutcomeSlice> {
    let records = dataset.records().iter();
    match filter {
        SiteFilter::All => count_in_order(
            records
                .filter(|r| r.outcome.is_success())
                .map(|r| r.launch_site.as_str()),
        ),
        SiteFilter::Site(_) => count_in_order(
            records
                .filter(|r| filter.matches(r))
                .map(|r| r.outcome.label()),
        ),
    }
}

/// Pie chart title for the current selection.
pub fn outcome_title(filter: &SiteFilter) -> String {
    match filter {
        SiteFilter::All => "Successful Launches by Site".to_string(),
        SiteFilter::Site(site) => format!("Successful Launches for {site}"),
    }
}

/// Sum of all slice counts.
pub fn total_count(slices: &[OutcomeSlice]) -> usize {
    slices.iter().map(|s| s.count).sum()
}

fn count_in_order<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<OutcomeSlice> {
    let mut position: HashMap<&str, usize> = HashMap::new();
    let mut slices: Vec<OutcomeSlice> = Vec::new();

    for label in labels {
        match position.get(label) {
            Some(&i) => slices[i].count += 1,
            None => {
                position.insert(label, slices.len());
                slices.push(OutcomeSlice {
                    label: label.to_string(),
                    count: 1,
                });
            }
        }
    }
    slices
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::data::model::fixtures::{arb_records, small_dataset};
    use crate::data::model::{LaunchRecord, Outcome};

    fn slice(label: &str, count: usize) -> OutcomeSlice {
        OutcomeSlice {
            label: label.to_string(),
            count,
        }
    }

    #[test]
    fn all_sites_counts_successes_per_site() {
        let slices = aggregate_outcomes(&small_dataset(), &SiteFilter::All);
        assert_eq!(slices, vec![slice("CCAFS", 1), slice("KSC", 1)]);
    }

    #[test]
    fn single_site_splits_success_and_fail() {
        let slices = aggregate_outcomes(&small_dataset(), &SiteFilter::Site("CCAFS".into()));
        assert_eq!(slices, vec![slice("Success", 1), slice("Fail", 1)]);
    }

    #[test]
    fn sites_without_successes_are_omitted() {
        let ds = LaunchDataset::from_records(vec![
            LaunchRecord::new("VAFB", 100.0, Outcome::Failure, "v1.1"),
            LaunchRecord::new("KSC", 200.0, Outcome::Success, "FT"),
            LaunchRecord::new("KSC", 300.0, Outcome::Success, "FT"),
        ]);
        let slices = aggregate_outcomes(&ds, &SiteFilter::All);
        assert_eq!(slices, vec![slice("KSC", 2)]);
    }

    #[test]
    fn unknown_site_and_empty_dataset_give_empty_result() {
        let unknown = aggregate_outcomes(&small_dataset(), &SiteFilter::Site("Boca Chica".into()));
        assert!(unknown.is_empty());

        let empty = LaunchDataset::default();
        assert!(aggregate_outcomes(&empty, &SiteFilter::All).is_empty());
        assert!(aggregate_outcomes(&empty, &SiteFilter::Site("KSC".into())).is_empty());
    }

    #[test]
    fn titles_follow_selection() {
        assert_eq!(outcome_title(&SiteFilter::All), "Successful Launches by Site");
        assert_eq!(
            outcome_title(&SiteFilter::Site("KSC".into())),
            "Successful Launches for KSC"
        );
    }

    proptest! {
        #[test]
        fn all_sites_total_equals_success_count(records in arb_records()) {
            let successes = records.iter().filter(|r| r.outcome.is_success()).count();
            let ds = LaunchDataset::from_records(records);
            prop_assert_eq!(total_count(&aggregate_outcomes(&ds, &SiteFilter::All)), successes);
        }

        #[test]
        fn single_site_total_equals_site_row_count(records in arb_records()) {
            let ds = LaunchDataset::from_records(records);
            for site in ds.sites() {
                let rows = ds.records().iter().filter(|r| &r.launch_site == site).count();
                let slices = aggregate_outcomes(&ds, &SiteFilter::Site(site.clone()));
                prop_assert_eq!(total_count(&slices), rows);
                prop_assert!(slices.len() <= 2);
            }
        }
    }
}
