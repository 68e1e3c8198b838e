// src/rules/priority.rs

use super::estimate::{Bucket, Estimate};

/// Leads whose name had to be synthesized go to manual review (tier 2)
/// whatever the other signals say.
pub const PLACEHOLDER_PRIORITY: u8 = 2;
pub const CONFIRMED_THRESHOLD: u64 = 5000;
pub const LOWEST_PRIORITY: u8 = 3;

/// What we know about how many people a settlement holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopulationSignal {
    /// A positive `population` tag.
    Confirmed(u64),
    /// Only the keyword estimate.
    Estimated(Estimate),
}

impl PopulationSignal {
    /// Text for the estimate column.
    pub fn display(&self) -> String {
        match self {
            PopulationSignal::Confirmed(n) => format!("Confirmed: {n}"),
            PopulationSignal::Estimated(e) => s!(e.label),
        }
    }
}

/// High → 1, Medium → 2, Low/Unknown → 3.
pub fn priority_for_bucket(bucket: Bucket) -> u8 {
    match bucket {
        Bucket::High => 1,
        Bucket::Medium => 2,
        Bucket::Low | Bucket::Unknown => LOWEST_PRIORITY,
    }
}

/// > 5000 → 1, otherwise 2.
pub fn priority_for_confirmed(population: u64) -> u8 {
    if population > CONFIRMED_THRESHOLD { 1 } else { 2 }
}

/// Bucket mapping with the placeholder-name override. Shared by both
/// collectors and the merge.
pub fn lead_priority(bucket: Bucket, placeholder_name: bool) -> u8 {
    if placeholder_name { PLACEHOLDER_PRIORITY } else { priority_for_bucket(bucket) }
}

pub fn settlement_priority(signal: PopulationSignal, placeholder_name: bool) -> u8 {
    match signal {
        _ if placeholder_name => PLACEHOLDER_PRIORITY,
        PopulationSignal::Confirmed(n) => priority_for_confirmed(n),
        PopulationSignal::Estimated(e) => lead_priority(e.bucket, false),
    }
}

/// Lenient read of a `population` tag: thousands separators and a fractional
/// part are tolerated; zero, negative or non-numeric values mean "not confirmed".
pub fn parse_confirmed_population(raw: Option<&str>) -> Option<u64> {
    let cleaned: String = raw?
        .chars()
        .filter(|c| !matches!(c, ',' | '_' | ' '))
        .collect();
    let n = match cleaned.parse::<u64>() {
        Ok(n) => n,
        Err(_) => {
            let f = cleaned.parse::<f64>().ok()?;
            if !f.is_finite() || f < 1.0 { return None; }
            f.trunc() as u64
        }
    };
    (n > 0).then_some(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::estimate::estimate_population;

    #[test]
    fn confirmed_threshold() {
        assert_eq!(settlement_priority(PopulationSignal::Confirmed(5001), false), 1);
        assert_eq!(settlement_priority(PopulationSignal::Confirmed(5000), false), 2);
        assert_eq!(settlement_priority(PopulationSignal::Confirmed(1), false), 2);
    }

    #[test]
    fn estimate_mapping_and_placeholder_override() {
        let est = |k| PopulationSignal::Estimated(estimate_population(k));
        assert_eq!(settlement_priority(est("town"), false), 1);
        assert_eq!(settlement_priority(est("village"), false), 2);
        assert_eq!(settlement_priority(est("hamlet"), false), 3);
        assert_eq!(settlement_priority(est("suburb"), false), 3);
        assert_eq!(settlement_priority(est("city"), true), 2);
        assert_eq!(settlement_priority(PopulationSignal::Confirmed(90_000), true), 2);
    }

    #[test]
    fn lead_priority_overrides_every_bucket() {
        assert_eq!(lead_priority(Bucket::High, false), 1);
        assert_eq!(lead_priority(Bucket::Medium, false), 2);
        assert_eq!(lead_priority(Bucket::Low, false), 3);
        assert_eq!(lead_priority(Bucket::Unknown, false), 3);
        for b in [Bucket::High, Bucket::Medium, Bucket::Low, Bucket::Unknown] {
            assert_eq!(lead_priority(b, true), PLACEHOLDER_PRIORITY);
        }
    }

    #[test]
    fn population_tag_parsing() {
        assert_eq!(parse_confirmed_population(Some("12000")), Some(12_000));
        assert_eq!(parse_confirmed_population(Some("12,000")), Some(12_000));
        assert_eq!(parse_confirmed_population(Some("1500.7")), Some(1500));
        assert_eq!(parse_confirmed_population(Some("0")), None);
        assert_eq!(parse_confirmed_population(Some("about 300")), None);
        assert_eq!(parse_confirmed_population(None), None);
    }

    #[test]
    fn display_text() {
        assert_eq!(PopulationSignal::Confirmed(7000).display(), "Confirmed: 7000");
        assert_eq!(PopulationSignal::Estimated(estimate_population("hamlet")).display(), "Low (<1k)");
    }
}
