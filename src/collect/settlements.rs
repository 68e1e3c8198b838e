// src/collect/settlements.rs

use crate::core::{OsmFeature, TagFilter};
use crate::model::{SettlementRow, SETTLEMENT_HEADERS};
use crate::rules::{
    estimate_population, parse_confirmed_population, resolve_settlement_name,
    settlement_priority, PopulationSignal,
};

use super::Collector;

const DEFAULT_PLACE: &str = "village";

pub struct SettlementCollector;

/// One settlement row from a `place=*` feature.
pub fn settlement_row(feature: &OsmFeature, lga: &str) -> SettlementRow {
    let name = resolve_settlement_name(feature, lga);
    let placeholder = name.is_placeholder();
    let place = feature.tag("place").unwrap_or(DEFAULT_PLACE);

    let signal = match parse_confirmed_population(feature.tag("population")) {
        Some(n) => PopulationSignal::Confirmed(n),
        None => PopulationSignal::Estimated(estimate_population(place)),
    };

    SettlementRow {
        name: name.into_string(),
        kind: s!(place),
        lga: s!(lga),
        population_info: signal.display(),
        priority: settlement_priority(signal, placeholder),
        latitude: feature.lat,
        longitude: feature.lon,
    }
}

impl Collector for SettlementCollector {
    type Row = SettlementRow;

    fn label(&self) -> &'static str { "settlements" }
    fn filter(&self) -> TagFilter { TagFilter::settlements() }
    fn headers(&self) -> &'static [&'static str] { &SETTLEMENT_HEADERS }

    fn rows_for(&self, area: &str, features: &[OsmFeature]) -> Vec<SettlementRow> {
        features.iter().map(|f| settlement_row(f, area)).collect()
    }
}
