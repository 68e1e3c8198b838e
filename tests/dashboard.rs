// tests/dashboard.rs
//
// Dashboard model without UI: enrichment, filtering, aggregates, export and
// the memoized master load.

use std::fs;
use std::sync::Arc;

use kogi_pathfinder::config::options::ExportOptions;
use kogi_pathfinder::config::profiles::LgaProfiles;
use kogi_pathfinder::csv::write_table_to_path;
use kogi_pathfinder::data::{LeadFilter, RawData, SelectionView};
use kogi_pathfinder::file::write_export_single;
use kogi_pathfinder::insight::{
    deep_dive, report_headers, total_addressable_market, viability_matrix, ChartType,
};
use kogi_pathfinder::merge::navigation_link;
use kogi_pathfinder::model::{Category, MasterRow, MASTER_HEADERS};
use kogi_pathfinder::store::MasterCache;

fn row(name: &str, category: Category, kind: &str, lga: &str, estimate: &str, priority: u8, lat: f64) -> MasterRow {
    MasterRow {
        name: name.into(),
        category,
        kind: kind.into(),
        lga: lga.into(),
        tentative_population: estimate.into(),
        priority,
        latitude: lat,
        longitude: 6.7,
        navigation_link: navigation_link(lat, 6.7),
    }
}

fn sample() -> Vec<MasterRow> {
    vec![
        row("Lokoja", Category::Settlement, "town", "Lokoja", "Confirmed: 60000", 1, 7.80),
        row("Felele", Category::Settlement, "village", "Lokoja", "Medium (2k-10k)", 2, 7.76),
        row("Old Market", Category::Business, "Marketplace", "Lokoja", "High (Thousands Daily)", 1, 7.79),
        row("St Mary", Category::Religious, "Place_Of_Worship", "Okene", "Medium-High (Hundreds Daily/Weekly)", 1, 7.55),
        row("Okene Central", Category::Education, "School", "Okene", "Medium (Steady Flow)", 2, 7.56),
        row("Atlantis Depot", Category::Business, "Fuel", "Atlantis", "Low (Specific Visitors)", 3, 7.00),
    ]
}

fn raw() -> RawData {
    RawData::new(&sample(), &LgaProfiles::embedded().unwrap())
}

#[test]
fn enrichment_joins_profiles() {
    let raw = raw();
    let lokoja = &raw.leads()[0];
    assert_eq!(lokoja.full_address, "Lokoja, Lokoja LGA, Kogi State");
    assert_eq!(lokoja.lga_population, 305_000);
    assert_eq!(lokoja.viability_tier, "Tier 1: Critical Mass");
    assert_eq!(lokoja.chart_type, ChartType::Settlement);
    assert_eq!(lokoja.market_score, 5);

    let market = &raw.leads()[2];
    assert_eq!(market.market_score, 100);
    assert_eq!(market.chart_type, ChartType::Commercial);

    let unknown = &raw.leads()[5];
    assert_eq!(unknown.lga_population, 0);
    assert_eq!(unknown.viability_tier, "Unknown");
    assert_eq!(unknown.lga_description, "");
}

#[test]
fn filter_by_lga_category_and_priority() {
    let raw = raw();

    let startup = LeadFilter::for_data(&raw);
    assert_eq!(startup.lgas, vec![String::from("Atlantis")]);
    assert_eq!(SelectionView::from_raw(&raw, &startup).len(), 1);

    let mut f = LeadFilter::default();
    assert_eq!(SelectionView::from_raw(&raw, &f).len(), 6);

    f.toggle_lga("Lokoja");
    assert_eq!(SelectionView::from_raw(&raw, &f).row_ix, vec![0, 1, 2]);

    f.set_priority(1, 1);
    assert_eq!(SelectionView::from_raw(&raw, &f).row_ix, vec![0, 2]);

    f.toggle_category(Category::Settlement);
    assert_eq!(SelectionView::from_raw(&raw, &f).row_ix, vec![2]);

    // reversed bounds are normalized
    f.set_priority(3, 2);
    assert_eq!(f.priority, (2, 3));
}

#[test]
fn aggregates_over_the_view() {
    let raw = raw();
    let profiles = LgaProfiles::embedded().unwrap();
    let view = SelectionView::from_raw(&raw, &LeadFilter::default());
    let leads = view.leads();

    assert_eq!(total_addressable_market(leads.iter().copied()), 305_000 + 420_000);

    let m = viability_matrix(leads.iter().copied());
    let order: Vec<(&str, usize)> = m.iter().map(|r| (r.lga.as_str(), r.captured_targets)).collect();
    assert_eq!(order, vec![("Okene", 2), ("Lokoja", 3), ("Atlantis", 1)]);

    let d = deep_dive("Lokoja", &leads, &profiles).unwrap();
    assert_eq!(d.population, 305_000);
    assert_eq!(d.targets, 3);
    assert_eq!(d.most_common_type, Some("Marketplace"));
    assert_eq!(d.top_settlements.len(), 2);
    assert_eq!(d.top_settlements[0].row.name, "Felele");
    assert_eq!(d.top_commercial[0].row.name, "Old Market");

    assert!(deep_dive("Ibaji", &leads, &profiles).is_none());
}

#[test]
fn export_writes_filtered_enriched_rows() {
    let dir = tempfile::tempdir().unwrap();
    let raw = raw();
    let mut f = LeadFilter::default();
    f.toggle_lga("Okene");
    let view = SelectionView::from_raw(&raw, &f);

    let export = ExportOptions::in_dir(dir.path());
    let path = write_export_single(&export, &report_headers(), &view.to_report_rows()).unwrap();
    assert!(path.ends_with("Kogi_Report.csv"));

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Name,Category,Type,LGA,Tentative_Population,Priority_Tier"));
    assert!(lines[0].ends_with("Market_Score,Full_Address,LGA_Actual_Pop,Viability_Tier,LGA_Desc,Chart_Type"));
    assert!(lines[1].starts_with("St Mary,Religious,Place_Of_Worship,Okene,"));
    assert!(lines[1].contains(",100,\"St Mary, Okene LGA, Kogi State\",420000,"));
}

#[test]
fn master_cache_reuses_unchanged_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("master.csv");
    let mut cache = MasterCache::new();

    assert!(cache.load(&path).unwrap().is_none());
    assert_eq!(cache.loads(), 0);

    let mut rows = sample();
    write_table_to_path(&path, &MASTER_HEADERS, &rows).unwrap();

    let a = cache.load(&path).unwrap().unwrap();
    let b = cache.load(&path).unwrap().unwrap();
    assert_eq!(cache.loads(), 1);
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(a.rows, rows);

    rows.push(row("Ose", Category::Settlement, "hamlet", "Olamaboro", "Low (<1k)", 3, 7.2));
    write_table_to_path(&path, &MASTER_HEADERS, &rows).unwrap();
    let c = cache.load(&path).unwrap().unwrap();
    assert_eq!(cache.loads(), 2);
    assert_eq!(c.rows.len(), 7);

    cache.invalidate();
    cache.load(&path).unwrap();
    assert_eq!(cache.loads(), 3);
}
