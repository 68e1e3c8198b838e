// src/collect/commercial.rs

use std::collections::HashSet;

use crate::core::sanitize::title_case;
use crate::core::{OsmFeature, TagFilter};
use crate::model::{CommercialRow, COMMERCIAL_HEADERS};
use crate::rules::{categorize, estimate_traffic, facility_type, lead_priority, resolve_commercial_name};

use super::Collector;

pub struct CommercialCollector;

/// One commercial/institutional row. The traffic estimate reads the raw tag
/// value; the written Type is title-cased.
pub fn commercial_row(feature: &OsmFeature, lga: &str) -> CommercialRow {
    let raw_type = facility_type(feature);
    let kind = title_case(raw_type);
    let traffic = estimate_traffic(raw_type);
    let name = resolve_commercial_name(feature, raw_type);
    let priority = lead_priority(traffic.bucket, name.is_placeholder());

    CommercialRow {
        name: name.into_string(),
        kind,
        category: categorize(feature),
        lga: s!(lga),
        tentative_population: s!(traffic.label),
        priority,
        latitude: feature.lat,
        longitude: feature.lon,
    }
}

/// Same name at the same latitude is the same facility, whatever LGA query found it.
pub fn dedupe_by_name_and_latitude(rows: &mut Vec<CommercialRow>) -> usize {
    let before = rows.len();
    let mut seen: HashSet<(String, u64)> = HashSet::with_capacity(before);
    rows.retain(|r| seen.insert((r.name.clone(), r.latitude.to_bits())));
    before - rows.len()
}

impl Collector for CommercialCollector {
    type Row = CommercialRow;

    fn label(&self) -> &'static str { "commercial" }
    fn filter(&self) -> TagFilter { TagFilter::commercial() }
    fn headers(&self) -> &'static [&'static str] { &COMMERCIAL_HEADERS }

    fn rows_for(&self, area: &str, features: &[OsmFeature]) -> Vec<CommercialRow> {
        features.iter().map(|f| commercial_row(f, area)).collect()
    }

    fn finalize(&self, rows: &mut Vec<CommercialRow>) {
        let removed = dedupe_by_name_and_latitude(rows);
        if removed > 0 {
            logd!("Collect: commercial dropped {} repeated facilities", removed);
        }
    }
}
