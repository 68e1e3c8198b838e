// src/cli.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{eyre, Result};

use crate::collect::{run_stage, CommercialCollector, SettlementCollector};
use crate::config::consts::{OVERPASS_URL, REQUEST_PAUSE_MS};
use crate::config::options::{AppOptions, AreaSelector, CollectOptions};
use crate::config::profiles::LgaProfiles;
use crate::core::OverpassClient;
use crate::data::RawData;
use crate::insight::{total_addressable_market, viability_matrix};
use crate::model::MasterRow;
use crate::progress::Progress;

#[derive(Parser)]
#[command(author, version, about = "Kogi State lead collection and merge", long_about = None)]
struct Cli {
    #[command(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct Common {
    /// Directory holding the stage files
    #[arg(long, global = true, value_name = "DIR", default_value = ".")]
    out_dir: PathBuf,

    /// Overpass interpreter URL
    #[arg(long, global = true, env = "OVERPASS_URL", default_value = OVERPASS_URL)]
    endpoint: String,

    /// Pause between LGA queries
    #[arg(long, global = true, value_name = "MS", default_value_t = REQUEST_PAUSE_MS)]
    pause_ms: u64,

    /// Only these LGAs (comma separated); default is all 21
    #[arg(long, global = true, value_delimiter = ',')]
    areas: Vec<String>,

    /// LGA reference table (TOML) to use instead of the built-in one
    #[arg(long, global = true, value_name = "FILE")]
    profiles: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Collect settlements for every LGA
    Settlements,
    /// Collect commercial and institutional points for every LGA
    Commercial,
    /// Merge both collections into the master lead list
    Merge,
    /// Settlements, commercial, then merge
    All,
    /// Print the viability matrix for the master list
    Summary,
}

impl Common {
    fn options(&self) -> AppOptions {
        let mut opts = AppOptions::in_dir(&self.out_dir);
        opts.collect = CollectOptions {
            endpoint: self.endpoint.clone(),
            areas: if self.areas.is_empty() {
                AreaSelector::All
            } else {
                AreaSelector::Names(self.areas.clone())
            },
            pause: Duration::from_millis(self.pause_ms),
        };
        opts
    }

    fn profiles(&self) -> Result<LgaProfiles> {
        Ok(match &self.profiles {
            Some(p) => LgaProfiles::from_file(p)?,
            None => LgaProfiles::embedded()?,
        })
    }
}

/// Prints one line per LGA to stderr.
struct ConsoleProgress {
    total: usize,
    done: usize,
}

impl ConsoleProgress {
    fn new() -> Self {
        Self { total: 0, done: 0 }
    }
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }

    fn item_done(&mut self, area: &str, found: usize) {
        self.done += 1;
        eprintln!("[{}/{}] {area}: {found}", self.done, self.total);
    }

    fn item_failed(&mut self, area: &str, reason: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {area}: failed ({reason})", self.done, self.total);
    }
}

pub fn run() -> Result<()> {
    color_eyre::install()?;
    crate::log::init();

    let cli = Cli::parse();
    let opts = cli.common.options();

    match cli.command {
        Command::Settlements => settlements(&opts)?,
        Command::Commercial => commercial(&opts)?,
        Command::Merge => merge(&opts)?,
        Command::All => {
            settlements(&opts)?;
            commercial(&opts)?;
            merge(&opts)?;
        }
        Command::Summary => summary(&opts.merge.master, &cli.common.profiles()?)?,
    }
    Ok(())
}

fn areas(opts: &AppOptions) -> Result<Vec<&'static str>> {
    let areas = opts.collect.areas.resolve();
    if areas.is_empty() {
        return Err(eyre!("no known LGA in --areas"));
    }
    Ok(areas)
}

fn settlements(opts: &AppOptions) -> Result<()> {
    let source = OverpassClient::new(&opts.collect.endpoint)?;
    let (report, written) = run_stage(
        &SettlementCollector,
        &source,
        &areas(opts)?,
        opts.collect.pause,
        &opts.merge.settlements,
        Some(&mut ConsoleProgress::new()),
    )?;
    print_stage("settlements", report.rows.len(), report.succeeded(), report.failed().count(), written);
    Ok(())
}

fn commercial(opts: &AppOptions) -> Result<()> {
    let source = OverpassClient::new(&opts.collect.endpoint)?;
    let (report, written) = run_stage(
        &CommercialCollector,
        &source,
        &areas(opts)?,
        opts.collect.pause,
        &opts.merge.commercial,
        Some(&mut ConsoleProgress::new()),
    )?;
    print_stage("commercial", report.rows.len(), report.succeeded(), report.failed().count(), written);
    Ok(())
}

fn print_stage(label: &str, rows: usize, ok: usize, failed: usize, written: Option<PathBuf>) {
    match written {
        Some(p) => println!("{label}: {rows} rows from {ok} LGA(s), {failed} failed → {}", p.display()),
        None => println!("{label}: nothing found ({failed} LGA(s) failed), no file written"),
    }
}

fn merge(opts: &AppOptions) -> Result<()> {
    let s = crate::merge::merge_files(&opts.merge)?;
    println!(
        "merge: {} settlements + {} commercial, {} duplicates removed → {} leads in {}",
        s.settlements_loaded,
        s.commercial_loaded,
        s.duplicates_removed,
        s.total,
        s.output.display()
    );
    Ok(())
}

fn summary(master: &Path, profiles: &LgaProfiles) -> Result<()> {
    if !master.exists() {
        return Err(eyre!("{} not found; run `merge` first", master.display()));
    }
    let rows = crate::csv::read_rows::<MasterRow>(master)?.rows;
    let raw = RawData::new(&rows, profiles);

    println!("{:<18} {:>10} {:>8}  {:<28} Description", "LGA", "Population", "Targets", "Tier");
    for r in viability_matrix(raw.leads()) {
        println!(
            "{:<18} {:>10} {:>8}  {:<28} {}",
            r.lga, r.population, r.captured_targets, r.tier, r.description
        );
    }
    println!("\n{} leads, total addressable market {}", raw.len(), total_addressable_market(raw.leads()));
    Ok(())
}
