// tests/collect_batch.rs
//
// Collectors driven by an in-memory FeatureSource (no network).

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use kogi_pathfinder::collect::{run_batch, run_stage, CommercialCollector, SettlementCollector};
use kogi_pathfinder::core::{FeatureSource, OsmFeature, TagFilter};
use kogi_pathfinder::csv::read_rows;
use kogi_pathfinder::error::{Error, Result};
use kogi_pathfinder::model::{Category, CommercialRow, SettlementRow};
use kogi_pathfinder::progress::Progress;

#[derive(Default)]
struct FakeSource {
    by_area: HashMap<&'static str, Vec<OsmFeature>>,
    failing: Vec<&'static str>,
    calls: RefCell<Vec<String>>,
}

impl FakeSource {
    fn with(mut self, area: &'static str, features: Vec<OsmFeature>) -> Self {
        self.by_area.insert(area, features);
        self
    }

    fn failing(mut self, area: &'static str) -> Self {
        self.failing.push(area);
        self
    }
}

impl FeatureSource for FakeSource {
    fn fetch(&self, area: &str, _filter: &TagFilter) -> Result<Vec<OsmFeature>> {
        self.calls.borrow_mut().push(area.to_string());
        if self.failing.contains(&area) {
            return Err(Error::Query(format!("timeout in {area}")));
        }
        Ok(self.by_area.get(area).cloned().unwrap_or_default())
    }
}

#[derive(Default)]
struct Recorder {
    total: usize,
    done: Vec<(String, usize)>,
    failed: Vec<String>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn item_done(&mut self, area: &str, found: usize) { self.done.push((area.into(), found)); }
    fn item_failed(&mut self, area: &str, _reason: &str) { self.failed.push(area.into()); }
    fn finish(&mut self) { self.finished = true; }
}

fn village(name: &str, lat: f64) -> OsmFeature {
    OsmFeature::new(lat, 6.7).with_tag("place", "village").with_tag("name", name)
}

#[test]
fn failed_area_does_not_stop_the_batch() {
    let source = FakeSource::default()
        .with("Adavi", vec![village("Ogaminana", 7.6)])
        .failing("Ajaokuta")
        .with("Ankpa", vec![village("Ojoku", 7.4), village("Enjema", 7.41)]);
    let mut rec = Recorder::default();

    let report = run_batch(
        &SettlementCollector,
        &source,
        &["Adavi", "Ajaokuta", "Ankpa"],
        Duration::ZERO,
        Some(&mut rec),
    );

    assert_eq!(*source.calls.borrow(), vec!["Adavi", "Ajaokuta", "Ankpa"]);
    assert_eq!(report.rows.len(), 3);
    assert_eq!(report.succeeded(), 2);
    let failed: Vec<&str> = report.failed().map(|o| o.area.as_str()).collect();
    assert_eq!(failed, vec!["Ajaokuta"]);

    assert_eq!(rec.total, 3);
    assert_eq!(rec.done, vec![(String::from("Adavi"), 1), (String::from("Ankpa"), 2)]);
    assert_eq!(rec.failed, vec![String::from("Ajaokuta")]);
    assert!(rec.finished);
}

#[test]
fn settlement_rows_follow_the_rules() {
    let confirmed = OsmFeature::new(7.8, 6.74)
        .with_tag("place", "town")
        .with_tag("name", "Lokoja")
        .with_tag("population", "60,000");
    let small = OsmFeature::new(7.7, 6.7)
        .with_tag("place", "hamlet")
        .with_tag("alt_name", "Kpata")
        .with_tag("population", "800");
    let nameless = OsmFeature::new(7.75, 6.71).with_tag("place", "city");
    let source = FakeSource::default().with("Lokoja", vec![confirmed, small, nameless]);

    let report = run_batch(&SettlementCollector, &source, &["Lokoja"], Duration::ZERO, None);
    let rows: &[SettlementRow] = &report.rows;

    assert_eq!(rows[0].population_info, "Confirmed: 60000");
    assert_eq!(rows[0].priority, 1);

    assert_eq!(rows[1].name, "Kpata");
    assert_eq!(rows[1].population_info, "Confirmed: 800");
    assert_eq!(rows[1].priority, 2);

    // a high estimate, but the placeholder name caps it at 2
    assert!(rows[2].name.contains("Lokoja"));
    assert_eq!(rows[2].priority, 2);
}

#[test]
fn commercial_duplicates_across_areas_collapse() {
    let market = OsmFeature::new(7.3, 6.5)
        .with_tag("amenity", "marketplace")
        .with_tag("name", "Border Market");
    let church = OsmFeature::new(7.31, 6.52).with_tag("amenity", "place_of_worship");
    let source = FakeSource::default()
        .with("Ofu", vec![market.clone(), church])
        .with("Igalamela-Odolu", vec![market]);

    let report = run_batch(
        &CommercialCollector,
        &source,
        &["Ofu", "Igalamela-Odolu"],
        Duration::ZERO,
        None,
    );
    let rows: &[CommercialRow] = &report.rows;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].lga, "Ofu");
    assert_eq!(rows[0].kind, "Marketplace");
    assert_eq!(rows[0].priority, 1);
    assert_eq!(rows[1].name, "Unnamed Place_Of_Worship");
    assert_eq!(rows[1].category, Category::Religious);
}

#[test]
fn stage_writes_file_only_when_rows_exist() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("villages.csv");

    let empty = FakeSource::default().failing("Kogi");
    let (_, written) =
        run_stage(&SettlementCollector, &empty, &["Kogi"], Duration::ZERO, &out, None).unwrap();
    assert!(written.is_none());
    assert!(!out.exists());

    let source = FakeSource::default().with("Kogi", vec![village("Koton Karfe", 8.1)]);
    let (_, written) =
        run_stage(&SettlementCollector, &source, &["Kogi"], Duration::ZERO, &out, None).unwrap();
    assert_eq!(written.as_deref(), Some(out.as_path()));

    let back = read_rows::<SettlementRow>(&out).unwrap();
    assert_eq!(back.skipped, 0);
    assert_eq!(back.rows.len(), 1);
    assert_eq!(back.rows[0].name, "Koton Karfe");
    assert_eq!(back.rows[0].lga, "Kogi");
}
