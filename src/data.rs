// src/data.rs
//
// Light wrappers around canonical and view-layer lead data.
//
// - RawData: read-only holder for the enriched master list. Rebuilt only on
//            reload; nothing else mutates it.
// - SelectionView: derived (view) data produced from RawData by applying the
//                  sidebar filter, for on-screen display and export.

use std::collections::BTreeSet;

use crate::config::profiles::LgaProfiles;
use crate::insight::{enrich, EnrichedLead};
use crate::model::{Category, MasterRow};

/// Authoritative, enriched lead list.
#[derive(Clone, Debug, Default)]
pub struct RawData {
    leads: Vec<EnrichedLead>,
}

impl RawData {
    pub fn new(rows: &[MasterRow], profiles: &LgaProfiles) -> Self {
        Self { leads: rows.iter().cloned().map(|r| enrich(r, profiles)).collect() }
    }

    pub fn leads(&self) -> &[EnrichedLead] { &self.leads }
    pub fn len(&self) -> usize { self.leads.len() }
    pub fn is_empty(&self) -> bool { self.leads.is_empty() }

    /// Distinct LGAs present, sorted.
    pub fn available_lgas(&self) -> Vec<String> {
        self.leads
            .iter()
            .map(|l| l.row.lga.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(String::from)
            .collect()
    }

    /// Distinct categories present, sorted by label.
    pub fn available_categories(&self) -> Vec<Category> {
        let mut v: Vec<Category> = self
            .leads
            .iter()
            .map(|l| l.row.category)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        v.sort_by_key(|c| c.as_str());
        v
    }
}

/// Sidebar filter. An empty LGA list means "every LGA".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeadFilter {
    pub lgas: Vec<String>,
    pub categories: Vec<Category>,
    pub priority: (u8, u8),
}

impl Default for LeadFilter {
    fn default() -> Self {
        Self { lgas: Vec::new(), categories: Category::ALL.to_vec(), priority: (1, 3) }
    }
}

impl LeadFilter {
    /// Startup selection: every category present, all tiers, and the
    /// alphabetically first LGA.
    pub fn for_data(raw: &RawData) -> Self {
        Self {
            lgas: raw.available_lgas().into_iter().take(1).collect(),
            categories: raw.available_categories(),
            ..Self::default()
        }
    }

    pub fn matches(&self, lead: &EnrichedLead) -> bool {
        let (lo, hi) = self.priority;
        let r = &lead.row;
        self.categories.contains(&r.category)
            && (lo..=hi).contains(&r.priority)
            && (self.lgas.is_empty() || self.lgas.iter().any(|l| *l == r.lga))
    }

    pub fn toggle_lga(&mut self, lga: &str) {
        match self.lgas.iter().position(|l| l == lga) {
            Some(i) => { self.lgas.remove(i); }
            None => self.lgas.push(s!(lga)),
        }
    }

    pub fn toggle_category(&mut self, c: Category) {
        match self.categories.iter().position(|x| *x == c) {
            Some(i) => { self.categories.remove(i); }
            None => self.categories.push(c),
        }
    }

    /// Keep `lo <= hi` inside 1..=3.
    pub fn set_priority(&mut self, lo: u8, hi: u8) {
        let lo = lo.clamp(1, 3);
        let hi = hi.clamp(1, 3);
        self.priority = if lo <= hi { (lo, hi) } else { (hi, lo) };
    }
}

/// Zero-copy filtered view for display.
/// Holds list of row indexes into RawData.
#[derive(Clone, Debug)]
pub struct SelectionView<'a> {
    /// Positions of kept rows in the raw list
    pub row_ix: Vec<usize>,
    raw: &'a RawData,
}

impl<'a> SelectionView<'a> {
    pub fn from_raw(raw: &'a RawData, filter: &LeadFilter) -> Self {
        let row_ix = raw
            .leads
            .iter()
            .enumerate()
            .filter(|(_, l)| filter.matches(l))
            .map(|(i, _)| i)
            .collect();
        Self { row_ix, raw }
    }

    /// Build a view directly from precomputed indices (cached in the GUI).
    pub fn from_indices(raw: &'a RawData, row_ix: Vec<usize>) -> Self {
        Self { row_ix, raw }
    }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    /// Borrow a single lead by projected index (no cloning).
    pub fn lead(&self, i: usize) -> Option<&'a EnrichedLead> {
        self.row_ix.get(i).and_then(|&ix| self.raw.leads.get(ix))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a EnrichedLead> + '_ {
        self.row_ix.iter().filter_map(|&ix| self.raw.leads.get(ix))
    }

    pub fn leads(&self) -> Vec<&'a EnrichedLead> {
        self.iter().collect()
    }

    /// Materialize report rows (for clipboard/export boundaries).
    pub fn to_report_rows(&self) -> Vec<Vec<String>> {
        self.iter().map(EnrichedLead::report_record).collect()
    }
}
