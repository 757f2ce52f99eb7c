use super::model::{LaunchDataset, SiteFilter, ALL_SITES};

// ---------------------------------------------------------------------------
// Site dropdown options
// ---------------------------------------------------------------------------

/// One entry of the launch-site dropdown.
///
/// `filter` is what selecting the entry applies.  The dropdown keys on it
/// rather than on `value`, so a site that happens to be named `All` stays
/// distinct from the all-sites entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteOption {
    pub label: String,
    pub value: String,
    pub filter: SiteFilter,
}

impl SiteOption {
    fn all() -> Self {
        Self {
            label: "All Sites".to_string(),
            value: ALL_SITES.to_string(),
            filter: SiteFilter::All,
        }
    }

    fn site(name: &str) -> Self {
        Self {
            label: name.to_string(),
            value: name.to_string(),
            filter: SiteFilter::Site(name.to_string()),
        }
    }
}

/// Build the dropdown choices: `All Sites` first, then every distinct launch
/// site in the order it first appears in the dataset (not re-sorted).
pub fn build_site_options(dataset: &LaunchDataset) -> Vec<SiteOption> {
    std::iter::once(SiteOption::all())
        .chain(dataset.sites().iter().map(|site| SiteOption::site(site)))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;
    use crate::data::filter::project_payload_outcome;
    use crate::data::model::fixtures::{arb_records, small_dataset};
    use crate::data::model::{LaunchRecord, Outcome, PayloadRange};

    #[test]
    fn options_for_worked_example() {
        let opts = build_site_options(&small_dataset());
        assert_eq!(
            opts,
            vec![SiteOption::all(), SiteOption::site("CCAFS"), SiteOption::site("KSC")]
        );
    }

    #[test]
    fn empty_dataset_yields_only_all_entry() {
        let opts = build_site_options(&LaunchDataset::default());
        assert_eq!(opts, vec![SiteOption::all()]);
        assert_eq!(opts[0].label, "All Sites");
        assert_eq!(opts[0].value, "All");
    }

    #[test]
    fn site_named_all_stays_distinct_from_all_entry() {
        let ds = LaunchDataset::from_records(vec![
            LaunchRecord::new("All", 100.0, Outcome::Success, "FT"),
            LaunchRecord::new("KSC", 200.0, Outcome::Failure, "FT"),
        ]);
        let opts = build_site_options(&ds);

        assert_eq!(opts.len(), 3);
        assert_eq!(opts[0].filter, SiteFilter::All);
        assert_eq!(opts[1].value, "All");
        assert_eq!(opts[1].filter, SiteFilter::Site("All".into()));

        let rows = project_payload_outcome(&ds, &opts[1].filter, &PayloadRange::new(0.0, 500.0));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].launch_site, "All");
    }

    proptest! {
        #[test]
        fn one_option_per_distinct_site_plus_all(records in arb_records()) {
            let distinct: HashSet<&str> =
                records.iter().map(|r| r.launch_site.as_str()).collect();
            let n_distinct = distinct.len();

            let opts = build_site_options(&LaunchDataset::from_records(records));
            prop_assert_eq!(opts.len(), n_distinct + 1);
            prop_assert_eq!(&opts[0].value, ALL_SITES);
            prop_assert_eq!(&opts[0].label, "All Sites");
            prop_assert_eq!(&opts[0].filter, &SiteFilter::All);
        }
    }
}
