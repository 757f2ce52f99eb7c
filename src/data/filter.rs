use super::model::{LaunchDataset, LaunchRecord, PayloadRange, SiteFilter};

// ---------------------------------------------------------------------------
// Payload / outcome projection (scatter chart data)
// ---------------------------------------------------------------------------

/// Select the launches shown in the scatter chart: records passing both the
/// site filter and the payload range (inclusive at both ends), in dataset
/// order, borrowed from the dataset.
///
/// The range always applies, including under the `All` site filter.
pub fn project_payload_outcome<'a>(
    dataset: &'a LaunchDataset,
    site: &SiteFilter,
    payload: &PayloadRange,
) -> Vec<&'a LaunchRecord> {
    dataset
        .records()
        .iter()
        .filter(|rec| payload.contains(rec.payload_mass_kg) && site.matches(rec))
        .collect()
}
