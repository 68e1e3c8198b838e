// src/insight.rs
//! Dashboard-side derivations over the master list.
//!
//! The market score here is deliberately separate from the collectors'
//! priority tiers: it reads the estimate *label* that ended up in the file,
//! while the tiers were decided from the source type when the row was made.
//! Both are kept as they are.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::config::consts::STATE_LABEL;
use crate::config::profiles::LgaProfiles;
use crate::core::sanitize::fmt_coord;
use crate::model::{Category, MasterRow, MASTER_HEADERS};

/// 100 / 50 / 10 for labels mentioning high / medium / low, 5 otherwise.
pub fn market_score(estimate: &str) -> u32 {
    let p = estimate.to_lowercase();
    if p.contains("high") { 100 }
    else if p.contains("medium") { 50 }
    else if p.contains("low") { 10 }
    else { 5 }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartType {
    Settlement,
    Commercial,
}

impl ChartType {
    pub fn of(category: Category) -> Self {
        if category.is_settlement() { ChartType::Settlement } else { ChartType::Commercial }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::Settlement => "Village/Settlement",
            ChartType::Commercial => "Commercial/Inst.",
        }
    }
}

/// A master row joined with its LGA profile and scored.
#[derive(Clone, Debug, PartialEq)]
pub struct EnrichedLead {
    pub row: MasterRow,
    pub market_score: u32,
    pub full_address: String,
    pub lga_population: u64,
    pub viability_tier: String,
    pub lga_description: String,
    pub chart_type: ChartType,
}

pub fn enrich(row: MasterRow, profiles: &LgaProfiles) -> EnrichedLead {
    let profile = profiles.lookup(&row.lga);
    EnrichedLead {
        market_score: market_score(&row.tentative_population),
        full_address: format!("{}, {} LGA, {}", row.name, row.lga, STATE_LABEL),
        lga_population: profile.population,
        viability_tier: profile.tier.clone(),
        lga_description: profile.description.clone(),
        chart_type: ChartType::of(row.category),
        row,
    }
}

/* ---------------- Export shape ---------------- */

pub const DERIVED_HEADERS: [&str; 6] = [
    "Market_Score", "Full_Address", "LGA_Actual_Pop", "Viability_Tier", "LGA_Desc", "Chart_Type",
];

pub const GRID_HEADERS: [&str; 5] = ["Name", "LGA", "Viability_Tier", "Type", "Tentative_Population"];

/// Master columns followed by the derived ones.
pub fn report_headers() -> Vec<String> {
    MASTER_HEADERS
        .iter()
        .chain(DERIVED_HEADERS.iter())
        .map(|h| s!(*h))
        .collect()
}

impl EnrichedLead {
    pub fn report_record(&self) -> Vec<String> {
        let r = &self.row;
        vec![
            r.name.clone(),
            s!(r.category.as_str()),
            r.kind.clone(),
            r.lga.clone(),
            r.tentative_population.clone(),
            r.priority.to_string(),
            fmt_coord(r.latitude),
            fmt_coord(r.longitude),
            r.navigation_link.clone(),
            self.market_score.to_string(),
            self.full_address.clone(),
            self.lga_population.to_string(),
            self.viability_tier.clone(),
            self.lga_description.clone(),
            s!(self.chart_type.as_str()),
        ]
    }

    pub fn grid_record(&self) -> [&str; 5] {
        [
            &self.row.name,
            &self.row.lga,
            &self.viability_tier,
            &self.row.kind,
            &self.row.tentative_population,
        ]
    }
}

/* ---------------- Aggregates ---------------- */

/// Sum of the official populations of the distinct LGAs present.
pub fn total_addressable_market<'a>(leads: impl IntoIterator<Item = &'a EnrichedLead>) -> u64 {
    let mut seen = HashSet::new();
    leads
        .into_iter()
        .filter(|l| seen.insert(l.row.lga.as_str()))
        .map(|l| l.lga_population)
        .sum()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViabilityRow {
    pub lga: String,
    pub tier: String,
    pub description: String,
    pub population: u64,
    pub captured_targets: usize,
}

/// One row per LGA in view, largest population first (name breaks ties).
pub fn viability_matrix<'a>(leads: impl IntoIterator<Item = &'a EnrichedLead>) -> Vec<ViabilityRow> {
    let mut by_lga: BTreeMap<&str, ViabilityRow> = BTreeMap::new();
    for l in leads {
        by_lga
            .entry(l.row.lga.as_str())
            .or_insert_with(|| ViabilityRow {
                lga: l.row.lga.clone(),
                tier: l.viability_tier.clone(),
                description: l.lga_description.clone(),
                population: l.lga_population,
                captured_targets: 0,
            })
            .captured_targets += 1;
    }
    let mut rows: Vec<ViabilityRow> = by_lga.into_values().collect();
    rows.sort_by(|a, b| b.population.cmp(&a.population).then_with(|| a.lga.cmp(&b.lga)));
    rows
}

/// Most frequent value; ties go to the alphabetically first.
pub fn most_common<'a>(values: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for v in values {
        *counts.entry(v).or_default() += 1;
    }
    counts
        .into_iter()
        .max_by(|(va, ca), (vb, cb)| ca.cmp(cb).then_with(|| vb.cmp(va)))
        .map(|(v, _)| v)
}

pub const TOP_N: usize = 10;

pub struct DeepDive<'a> {
    pub lga: String,
    pub population: u64,
    pub tier: String,
    pub targets: usize,
    pub most_common_type: Option<&'a str>,
    pub top_settlements: Vec<&'a EnrichedLead>,
    pub top_commercial: Vec<&'a EnrichedLead>,
}

fn top_by_score<'a>(mut v: Vec<&'a EnrichedLead>) -> Vec<&'a EnrichedLead> {
    v.sort_by(|a, b| b.market_score.cmp(&a.market_score));
    v.truncate(TOP_N);
    v
}

/// Per-LGA breakdown of the leads in view. `None` when the LGA has no leads.
pub fn deep_dive<'a>(lga: &str, leads: &[&'a EnrichedLead], profiles: &LgaProfiles) -> Option<DeepDive<'a>> {
    let in_lga: Vec<&EnrichedLead> = leads.iter().copied().filter(|l| l.row.lga == lga).collect();
    if in_lga.is_empty() {
        return None;
    }
    let profile = profiles.lookup(lga);
    let (settlements, commercial): (Vec<_>, Vec<_>) =
        in_lga.iter().copied().partition(|l| l.row.category.is_settlement());

    Some(DeepDive {
        lga: s!(lga),
        population: profile.population,
        tier: profile.tier.clone(),
        targets: in_lga.len(),
        most_common_type: most_common(in_lga.iter().map(|l| l.row.kind.as_str())),
        top_settlements: top_by_score(settlements),
        top_commercial: top_by_score(commercial),
    })
}

/* ---------------- Map markers ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkerColor {
    Red,
    Green,
    Purple,
    Blue,
    DarkBlue,
    Gray,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarkerStyle {
    pub color: MarkerColor,
    pub icon: &'static str,
    pub legend: &'static str,
}

pub const LEGEND: [MarkerStyle; 6] = [
    MarkerStyle { color: MarkerColor::Red,      icon: "shopping-cart", legend: "Markets/Comm." },
    MarkerStyle { color: MarkerColor::Green,    icon: "book",          legend: "Education" },
    MarkerStyle { color: MarkerColor::Purple,   icon: "bell",          legend: "Religious" },
    MarkerStyle { color: MarkerColor::Blue,     icon: "home",          legend: "Settlements" },
    MarkerStyle { color: MarkerColor::DarkBlue, icon: "briefcase",     legend: "Financial" },
    MarkerStyle { color: MarkerColor::Gray,     icon: "info-sign",     legend: "Other" },
];

/// Marker for a lead: checked in legend order, first hit wins.
pub fn marker_style(kind: &str, category: Category) -> MarkerStyle {
    let ix = if kind.contains("Market") || kind.contains("Shop") {
        0
    } else if kind.contains("School") || kind.contains("College") {
        1
    } else if category.as_str().contains("Relig") {
        2
    } else if category.is_settlement() {
        3
    } else if kind.contains("Bank") || kind.contains("Finance") {
        4
    } else {
        5
    };
    LEGEND[ix]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_reads_label_text() {
        assert_eq!(market_score("High (Thousands Daily)"), 100);
        assert_eq!(market_score("Medium-High (Hundreds Daily/Weekly)"), 100);
        assert_eq!(market_score("Low-Medium (Local Traffic)"), 50);
        assert_eq!(market_score("Low (<1k)"), 10);
        assert_eq!(market_score("Confirmed: 7000"), 5);
        assert_eq!(market_score(""), 5);
    }

    #[test]
    fn mode_ties_go_alphabetical() {
        assert_eq!(most_common(["b", "a", "b", "a"]), Some("a"));
        assert_eq!(most_common(["x", "y", "y"]), Some("y"));
        assert_eq!(most_common(Vec::<&str>::new()), None);
    }

    #[test]
    fn markers_follow_precedence() {
        assert_eq!(marker_style("Marketplace", Category::Business).color, MarkerColor::Red);
        assert_eq!(marker_style("School", Category::Education).color, MarkerColor::Green);
        assert_eq!(marker_style("Place_Of_Worship", Category::Religious).color, MarkerColor::Purple);
        assert_eq!(marker_style("village", Category::Settlement).color, MarkerColor::Blue);
        assert_eq!(marker_style("Bank", Category::Business).color, MarkerColor::DarkBlue);
        assert_eq!(marker_style("Police", Category::Business).color, MarkerColor::Gray);
    }
}
