// src/rules/naming.rs

use crate::core::osm::OsmFeature;
use crate::core::sanitize::{fmt_coord, normalize_ws, title_case};

/// Name-like tags, most trusted first.
pub const NAME_KEYS: [&str; 5] = ["name", "name:en", "alt_name", "int_name", "loc_name"];

const PLACEHOLDER_PREFIX: &str = "Unmapped Cluster";
const UNNAMED_PREFIX: &str = "Unnamed";
/// OpenStreetMap stores coordinates to 7 decimal places.
const COORD_SCALE: f64 = 1e7;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolvedName {
    Named(String),
    Placeholder(String),
}

impl ResolvedName {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, ResolvedName::Placeholder(_))
    }

    pub fn into_string(self) -> String {
        match self {
            ResolvedName::Named(s) | ResolvedName::Placeholder(s) => s,
        }
    }
}

/// First non-blank value among `NAME_KEYS`.
pub fn best_name(feature: &OsmFeature) -> Option<String> {
    NAME_KEYS.iter().find_map(|k| feature.tag(k)).map(normalize_ws)
}

fn map_precision(v: f64) -> String {
    fmt_coord((v * COORD_SCALE).round() / COORD_SCALE)
}

/// `Unmapped Cluster (<lga> - <lat>, <lon>)` with both coordinates cut to map
/// precision, so two unnamed places at different points never share a name.
pub fn unmapped_cluster_name(lga: &str, lat: f64, lon: f64) -> String {
    format!("{PLACEHOLDER_PREFIX} ({lga} - {}, {})", map_precision(lat), map_precision(lon))
}

/// `Unnamed <Type>` with the type title-cased.
pub fn unnamed_facility_name(kind: &str) -> String {
    format!("{UNNAMED_PREFIX} {}", title_case(kind))
}

pub fn resolve_settlement_name(feature: &OsmFeature, lga: &str) -> ResolvedName {
    match best_name(feature) {
        Some(n) => ResolvedName::Named(n),
        None => ResolvedName::Placeholder(unmapped_cluster_name(lga, feature.lat, feature.lon)),
    }
}

pub fn resolve_commercial_name(feature: &OsmFeature, kind: &str) -> ResolvedName {
    match best_name(feature) {
        Some(n) => ResolvedName::Named(n),
        None => ResolvedName::Placeholder(unnamed_facility_name(kind)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_order_is_respected() {
        let f = OsmFeature::new(7.1, 6.7)
            .with_tag("loc_name", "Local")
            .with_tag("name:en", "English");
        assert_eq!(best_name(&f).as_deref(), Some("English"));

        let f = f.with_tag("name", "Primary");
        assert_eq!(best_name(&f).as_deref(), Some("Primary"));
    }

    #[test]
    fn blank_primary_falls_through() {
        let f = OsmFeature::new(7.1, 6.7)
            .with_tag("name", "  ")
            .with_tag("int_name", "Intl");
        assert_eq!(
            resolve_settlement_name(&f, "Idah"),
            ResolvedName::Named(s!("Intl"))
        );
    }

    #[test]
    fn placeholder_format() {
        assert_eq!(unmapped_cluster_name("Idah", 7.0, 6.7), "Unmapped Cluster (Idah - 7.0, 6.7)");
        assert_eq!(
            unmapped_cluster_name("Idah", 7.123_456_789, 6.733_333_333),
            "Unmapped Cluster (Idah - 7.1234568, 6.7333333)"
        );
        assert_eq!(unnamed_facility_name("place_of_worship"), "Unnamed Place_Of_Worship");
    }

    #[test]
    fn placeholders_differ_when_coordinates_differ() {
        let points = [
            (7.1, 6.70),
            (7.1, 6.80),
            (7.123411, 6.7),
            (7.123499, 6.7),
            (7.1234567, 6.7),
            (7.1234568, 6.7),
            (-7.1, 6.7),
        ];
        let names: Vec<String> = points
            .iter()
            .map(|&(lat, lon)| {
                let name = resolve_settlement_name(&OsmFeature::new(lat, lon), "Idah");
                assert!(name.is_placeholder());
                name.into_string()
            })
            .collect();
        for (i, a) in names.iter().enumerate() {
            assert!(a.contains("Idah"), "{a}");
            for b in &names[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
