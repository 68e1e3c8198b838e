// src/merge.rs
//
// Settlements + commercial → master lead list.
//
// Both inputs are read by header name and projected onto the master columns.
// Settlements come first, so when the same (Name, LGA, Latitude) appears in
// both, the settlement row is the one that survives.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::config::options::MergeOptions;
use crate::core::sanitize::{fmt_coord, normalize_ws};
use crate::error::{Error, Result};
use crate::model::{Category, CommercialRow, MasterRow, SettlementRow, MASTER_HEADERS};
use crate::rules::naming::{unmapped_cluster_name, unnamed_facility_name};
use crate::rules::priority::{LOWEST_PRIORITY, PLACEHOLDER_PRIORITY};

/// Lead before link synthesis: the columns both inputs share.
#[derive(Clone, Debug, PartialEq)]
pub struct PartialLead {
    pub name: String,
    pub category: Option<Category>,
    pub kind: String,
    pub lga: String,
    pub estimate: String,
    pub priority: u8,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<SettlementRow> for PartialLead {
    fn from(r: SettlementRow) -> Self {
        Self {
            name: r.name,
            category: Some(Category::Settlement),
            kind: r.kind,
            lga: r.lga,
            estimate: r.population_info,
            priority: r.priority,
            latitude: r.latitude,
            longitude: r.longitude,
        }
    }
}

impl From<CommercialRow> for PartialLead {
    fn from(r: CommercialRow) -> Self {
        Self {
            name: r.name,
            category: Some(r.category),
            kind: r.kind,
            lga: r.lga,
            estimate: r.tentative_population,
            priority: r.priority,
            latitude: r.latitude,
            longitude: r.longitude,
        }
    }
}

/// Loose on-disk row: every column optional, extra columns ignored.
/// The settlement file calls the estimate column `Population_Info`.
#[derive(Debug, Default, Deserialize)]
struct InputRow {
    #[serde(rename = "Name", default)]
    name: Option<String>,
    #[serde(rename = "Category", default)]
    category: Option<String>,
    #[serde(rename = "Type", default)]
    kind: Option<String>,
    #[serde(rename = "LGA", default)]
    lga: Option<String>,
    #[serde(rename = "Tentative_Population", alias = "Population_Info", default)]
    estimate: Option<String>,
    #[serde(rename = "Priority_Tier", default)]
    priority: Option<String>,
    #[serde(rename = "Latitude", default)]
    latitude: Option<String>,
    #[serde(rename = "Longitude", default)]
    longitude: Option<String>,
}

fn parse_coord(v: Option<&str>) -> Option<f64> {
    v?.trim().parse::<f64>().ok().filter(|x| x.is_finite())
}

/// Missing or out-of-range tiers fall to the lowest tier.
fn parse_priority(v: Option<&str>) -> u8 {
    let Some(v) = v.map(str::trim) else { return LOWEST_PRIORITY };
    let n = v
        .parse::<u8>()
        .ok()
        .or_else(|| v.parse::<f64>().ok().filter(|f| f.fract() == 0.0 && (1.0..=3.0).contains(f)).map(|f| f as u8));
    match n {
        Some(p @ 1..=3) => p,
        _ => LOWEST_PRIORITY,
    }
}

impl InputRow {
    fn into_lead(self) -> Option<PartialLead> {
        let latitude = parse_coord(self.latitude.as_deref())?;
        let longitude = parse_coord(self.longitude.as_deref())?;
        Some(PartialLead {
            name: self.name.map(|n| normalize_ws(&n)).unwrap_or_default(),
            category: self.category.as_deref().and_then(Category::parse),
            kind: self.kind.unwrap_or_default(),
            lga: self.lga.unwrap_or_default(),
            estimate: self.estimate.unwrap_or_default(),
            priority: parse_priority(self.priority.as_deref()),
            latitude,
            longitude,
        })
    }
}

/// Read one collector output. `Ok(None)` when the file does not exist.
pub fn read_collection(path: &Path) -> Result<Option<Vec<PartialLead>>> {
    if !path.exists() {
        return Ok(None);
    }
    let out = crate::csv::read_rows::<InputRow>(path)?;
    let mut leads = Vec::with_capacity(out.rows.len());
    for (i, row) in out.rows.into_iter().enumerate() {
        match row.into_lead() {
            Some(l) => leads.push(l),
            None => logw!("Merge: {} row {} has no usable coordinates, skipped", path.display(), i + 2),
        }
    }
    Ok(Some(leads))
}

/* ---------------- Navigation link ---------------- */

/// Fixed-format search URL for a coordinate pair.
pub fn navigation_link(lat: f64, lon: f64) -> String {
    join!(crate::config::consts::MAPS_SEARCH_PREFIX, &fmt_coord(lat), ",", &fmt_coord(lon))
}

/// Inverse of `navigation_link`.
pub fn parse_navigation_link(link: &str) -> Option<(f64, f64)> {
    let q = link.strip_prefix(crate::config::consts::MAPS_SEARCH_PREFIX)?;
    let (lat, lon) = q.split_once(',')?;
    Some((lat.parse().ok()?, lon.parse().ok()?))
}

/* ---------------- Merge + dedupe ---------------- */

pub struct MergeOutput {
    pub rows: Vec<MasterRow>,
    pub duplicates_removed: usize,
}

fn into_master(lead: PartialLead, settlement: bool) -> MasterRow {
    let category = if settlement {
        Category::Settlement
    } else {
        lead.category.unwrap_or(Category::Business)
    };
    let synthesized = lead.name.is_empty();
    let name = if !synthesized {
        lead.name
    } else if settlement {
        unmapped_cluster_name(&lead.lga, lead.latitude, lead.longitude)
    } else if lead.kind.is_empty() {
        unnamed_facility_name(category.as_str())
    } else {
        unnamed_facility_name(&lead.kind)
    };
    let priority = if synthesized { PLACEHOLDER_PRIORITY } else { lead.priority };
    MasterRow {
        navigation_link: navigation_link(lead.latitude, lead.longitude),
        name,
        category,
        kind: lead.kind,
        lga: lead.lga,
        tentative_population: lead.estimate,
        priority,
        latitude: lead.latitude,
        longitude: lead.longitude,
    }
}

/// Keep the first row for every (Name, LGA, Latitude); later ones are dropped.
pub fn dedupe(rows: Vec<MasterRow>) -> (Vec<MasterRow>, usize) {
    let before = rows.len();
    let mut seen: HashSet<(String, String, u64)> = HashSet::with_capacity(before);
    let kept: Vec<MasterRow> = rows
        .into_iter()
        .filter(|r| seen.insert((r.name.clone(), r.lga.clone(), r.latitude.to_bits())))
        .collect();
    let removed = before - kept.len();
    (kept, removed)
}

/// Tag, concatenate (settlements first), project, link, dedupe.
pub fn merge(settlements: Vec<PartialLead>, commercial: Vec<PartialLead>) -> MergeOutput {
    let all: Vec<MasterRow> = settlements
        .into_iter()
        .map(|l| into_master(l, true))
        .chain(commercial.into_iter().map(|l| into_master(l, false)))
        .collect();
    let (rows, duplicates_removed) = dedupe(all);
    MergeOutput { rows, duplicates_removed }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergeSummary {
    pub settlements_loaded: usize,
    pub commercial_loaded: usize,
    pub duplicates_removed: usize,
    pub total: usize,
    pub output: PathBuf,
}

/// Whole merge stage. A missing input counts as empty; both missing is the
/// only failure, and then nothing is written.
pub fn merge_files(opts: &MergeOptions) -> Result<MergeSummary> {
    let settlements = read_collection(&opts.settlements)?;
    let commercial = read_collection(&opts.commercial)?;

    if settlements.is_none() && commercial.is_none() {
        return Err(Error::MissingInputs {
            settlements: opts.settlements.clone(),
            commercial: opts.commercial.clone(),
        });
    }
    if settlements.is_none() {
        logw!("Merge: {} not found, continuing with commercial only", opts.settlements.display());
    }
    if commercial.is_none() {
        logw!("Merge: {} not found, continuing with settlements only", opts.commercial.display());
    }

    let settlements = settlements.unwrap_or_default();
    let commercial = commercial.unwrap_or_default();
    let (n_set, n_com) = (settlements.len(), commercial.len());
    logf!("Merge: loaded {} settlements, {} commercial", n_set, n_com);

    let out = merge(settlements, commercial);
    logf!("Merge: removed {} duplicates", out.duplicates_removed);

    crate::csv::write_table_to_path(&opts.master, &MASTER_HEADERS, &out.rows)?;
    logf!("Merge: wrote {} leads → {}", out.rows.len(), opts.master.display());

    Ok(MergeSummary {
        settlements_loaded: n_set,
        commercial_loaded: n_com,
        duplicates_removed: out.duplicates_removed,
        total: out.rows.len(),
        output: opts.master.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_parsing_defaults_low() {
        assert_eq!(parse_priority(Some("1")), 1);
        assert_eq!(parse_priority(Some("2.0")), 2);
        assert_eq!(parse_priority(Some("7")), 3);
        assert_eq!(parse_priority(Some("")), 3);
        assert_eq!(parse_priority(None), 3);
    }

    #[test]
    fn link_format_is_exact() {
        assert_eq!(
            navigation_link(7.1, 6.75),
            "https://www.google.com/maps/search/?api=1&query=7.1,6.75"
        );
        assert_eq!(
            navigation_link(7.0, -6.0),
            "https://www.google.com/maps/search/?api=1&query=7.0,-6.0"
        );
    }

    #[test]
    fn commercial_without_category_is_business() {
        let lead = PartialLead {
            name: s!(),
            category: None,
            kind: s!(),
            lga: s!("Ofu"),
            estimate: s!(),
            priority: 3,
            latitude: 7.0,
            longitude: 6.0,
        };
        let out = merge(Vec::new(), vec![lead]);
        assert_eq!(out.rows[0].category, Category::Business);
        assert_eq!(out.rows[0].name, "Unnamed Business");
        assert_eq!(out.rows[0].priority, PLACEHOLDER_PRIORITY);
    }

    #[test]
    fn unnamed_settlements_apart_survive_dedupe() {
        let at = |lon| PartialLead {
            name: s!(),
            category: None,
            kind: s!("village"),
            lga: s!("Idah"),
            estimate: s!("Medium (2k-10k)"),
            priority: 1,
            latitude: 7.1,
            longitude: lon,
        };
        let out = merge(vec![at(6.70), at(6.80)], Vec::new());
        assert_eq!(out.duplicates_removed, 0);
        assert_eq!(out.rows.len(), 2);
        assert_ne!(out.rows[0].name, out.rows[1].name);
        assert!(out.rows.iter().all(|r| r.priority == PLACEHOLDER_PRIORITY));
    }
}
