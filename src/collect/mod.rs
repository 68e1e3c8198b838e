// src/collect/mod.rs
//! Collectors: one blocking query per LGA, rows shaped by the `rules`.
//!
//! Every LGA yields an [`AreaOutcome`]. A failed query is recorded with its
//! reason and the batch moves on to the next LGA; the failed LGA simply
//! contributes no rows.

use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use serde::Serialize;

use crate::core::{FeatureSource, OsmFeature, TagFilter};
use crate::error::Result;
use crate::progress::Progress;

pub mod commercial;
pub mod settlements;

pub use commercial::CommercialCollector;
pub use settlements::SettlementCollector;

/// What a collector needs to say about itself; the batch loop does the rest.
pub trait Collector {
    type Row: Serialize;

    fn label(&self) -> &'static str;
    fn filter(&self) -> TagFilter;
    fn headers(&self) -> &'static [&'static str];

    /// Shape one LGA's features into rows.
    fn rows_for(&self, area: &str, features: &[OsmFeature]) -> Vec<Self::Row>;

    /// Last pass over the whole batch before writing.
    fn finalize(&self, _rows: &mut Vec<Self::Row>) {}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AreaOutcome {
    pub area: String,
    /// Rows contributed, or why the query failed.
    pub result: std::result::Result<usize, String>,
}

pub struct BatchReport<R> {
    pub outcomes: Vec<AreaOutcome>,
    pub rows: Vec<R>,
}

impl<R> BatchReport<R> {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> impl Iterator<Item = &AreaOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_err())
    }
}

/// Query every area in order, pausing `pause` after each call.
pub fn run_batch<C: Collector>(
    collector: &C,
    source: &dyn FeatureSource,
    areas: &[&str],
    pause: Duration,
    mut progress: Option<&mut dyn Progress>,
) -> BatchReport<C::Row> {
    let filter = collector.filter();
    let mut outcomes = Vec::with_capacity(areas.len());
    let mut rows = Vec::new();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(areas.len());
    }
    logf!("Collect: {} begin, {} area(s)", collector.label(), areas.len());

    for &area in areas {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Scanning {area}…"));
        }

        let result = match source.fetch(area, &filter) {
            Ok(features) => {
                let mut area_rows = collector.rows_for(area, &features);
                let n = area_rows.len();
                rows.append(&mut area_rows);
                logf!("Collect: {} found {} in {}", collector.label(), n, area);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(area, n);
                }
                Ok(n)
            }
            Err(e) => {
                let reason = e.to_string();
                logw!("Collect: {} failed for {}: {}", collector.label(), area, reason);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(area, &reason);
                }
                Err(reason)
            }
        };
        outcomes.push(AreaOutcome { area: s!(area), result });

        if !pause.is_zero() {
            thread::sleep(pause);
        }
    }

    collector.finalize(&mut rows);

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    BatchReport { outcomes, rows }
}

/// Batch plus write. Nothing is written when the batch produced no rows.
pub fn run_stage<C: Collector>(
    collector: &C,
    source: &dyn FeatureSource,
    areas: &[&str],
    pause: Duration,
    out: &Path,
    progress: Option<&mut dyn Progress>,
) -> Result<(BatchReport<C::Row>, Option<PathBuf>)> {
    let report = run_batch(collector, source, areas, pause, progress);
    if report.rows.is_empty() {
        logw!("Collect: {} produced no rows, {} not written", collector.label(), out.display());
        return Ok((report, None));
    }
    crate::csv::write_table_to_path(out, collector.headers(), &report.rows)?;
    logf!("Collect: {} wrote {} rows → {}", collector.label(), report.rows.len(), out.display());
    Ok((report, Some(out.to_path_buf())))
}
