// src/rules/estimate.rs
//
// Keyword classifiers turning a free-text place/facility type into an
// estimate label and its ordinal bucket. Case-insensitive substring match,
// first rule wins, fallback estimate when nothing matches.

use std::fmt;

/// Ordinal footfall/population bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Bucket {
    High,
    Medium,
    Low,
    Unknown,
}

impl Bucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::High    => "High",
            Bucket::Medium  => "Medium",
            Bucket::Low     => "Low",
            Bucket::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of a keyword classifier: the text written to the data files and
/// the ordinal bucket priority is derived from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Estimate {
    pub label: &'static str,
    pub bucket: Bucket,
}

struct KeywordRule {
    keywords: &'static [&'static str],
    estimate: Estimate,
}

const fn est(label: &'static str, bucket: Bucket) -> Estimate {
    Estimate { label, bucket }
}

const SETTLEMENT_RULES: &[KeywordRule] = &[
    KeywordRule { keywords: &["city"],    estimate: est("High (100k+)", Bucket::High) },
    KeywordRule { keywords: &["town"],    estimate: est("High (20k-50k)", Bucket::High) },
    KeywordRule { keywords: &["village"], estimate: est("Medium (2k-10k)", Bucket::Medium) },
    KeywordRule { keywords: &["hamlet"],  estimate: est("Low (<1k)", Bucket::Low) },
];
const SETTLEMENT_DEFAULT: Estimate = est("Unknown", Bucket::Unknown);

const TRAFFIC_RULES: &[KeywordRule] = &[
    KeywordRule {
        keywords: &["university", "market", "mall", "hospital"],
        estimate: est("High (Thousands Daily)", Bucket::High),
    },
    KeywordRule {
        keywords: &["college", "worship", "church", "mosque", "supermarket", "factory"],
        estimate: est("Medium-High (Hundreds Daily/Weekly)", Bucket::Medium),
    },
    KeywordRule {
        keywords: &["hotel", "bank", "fuel", "school", "secondary"],
        estimate: est("Medium (Steady Flow)", Bucket::Medium),
    },
];
// Lowest bucket despite the "Medium" in its text.
const TRAFFIC_DEFAULT: Estimate = est("Low-Medium (Local Traffic)", Bucket::Low);

fn first_match(rules: &[KeywordRule], default: Estimate, kind: &str) -> Estimate {
    let t = kind.to_lowercase();
    rules
        .iter()
        .find(|r| r.keywords.iter().any(|k| t.contains(k)))
        .map(|r| r.estimate)
        .unwrap_or(default)
}

/// Population estimate for a settlement `place` value.
pub fn estimate_population(place_type: &str) -> Estimate {
    first_match(SETTLEMENT_RULES, SETTLEMENT_DEFAULT, place_type)
}

/// Daily traffic estimate for a commercial/institutional facility type.
pub fn estimate_traffic(facility_type: &str) -> Estimate {
    first_match(TRAFFIC_RULES, TRAFFIC_DEFAULT, facility_type)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Estimator {
    Settlement,
    Commercial,
}

impl Estimator {
    pub fn estimate(&self, kind: &str) -> Estimate {
        match self {
            Estimator::Settlement => estimate_population(kind),
            Estimator::Commercial => estimate_traffic(kind),
        }
    }

    pub fn label(&self, kind: &str) -> &'static str {
        self.estimate(kind).label
    }
}

/// Bucket for a type string under the given estimator. Total: every input
/// lands in exactly one of the four buckets, and unmatched input lands in
/// the estimator's bottom bucket.
pub fn estimate_bucket(estimator: Estimator, kind: &str) -> Bucket {
    estimator.estimate(kind).bucket
}
