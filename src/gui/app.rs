// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    config::{profiles::LgaProfiles, state::AppState},
    data::{LeadFilter, RawData, SelectionView},
    store::MasterCache,
};

use super::components;

pub fn run(
    options: eframe::NativeOptions,
    state: AppState,
    profiles: LgaProfiles,
) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Kogi Pathfinder",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state, profiles)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // read-only reference table, parsed once at startup
    pub profiles: LgaProfiles,

    // memoized master list; `raw` is None while there is no data
    pub cache: MasterCache,
    pub raw: Option<RawData>,
    filter_initialized: bool,

    // indices into `raw` kept by the current filter
    pub row_ix: Vec<usize>,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    pub status: String,
}

impl App {
    pub fn new(state: AppState, profiles: LgaProfiles) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into();
        let mut app = Self {
            state,
            profiles,
            cache: MasterCache::new(),
            raw: None,
            filter_initialized: false,
            row_ix: Vec::new(),
            out_path_text,
            out_path_dirty: false,
            status: s!("Idle"),
        };
        app.load();
        logf!("Init: profiles={}, leads={}", app.profiles.len(), app.raw.as_ref().map_or(0, RawData::len));
        app
    }

    /// (Re)load the master list through the cache and rebuild the view.
    pub fn load(&mut self) {
        let path = self.state.options.merge.master.clone();
        match self.cache.load(&path) {
            Ok(Some(data)) => {
                let raw = RawData::new(&data.rows, &self.profiles);
                if !self.filter_initialized {
                    self.state.gui.filter = LeadFilter::for_data(&raw);
                    self.filter_initialized = true;
                }
                self.status = if data.skipped > 0 {
                    format!("Loaded {} leads ({} unreadable rows skipped)", raw.len(), data.skipped)
                } else {
                    format!("Loaded {} leads", raw.len())
                };
                self.raw = Some(raw);
            }
            Ok(None) => {
                logw!("Load: {} not found", path.display());
                self.raw = None;
                self.status = format!("No data loaded: {} not found. Run the merge first.", path.display());
            }
            Err(e) => {
                loge!("Load: {}: {}", path.display(), e);
                self.raw = None;
                self.status = format!("No data loaded: {e}");
            }
        }
        self.rebuild_view();
    }

    /// Re-apply the sidebar filter.
    pub fn rebuild_view(&mut self) {
        self.row_ix = match &self.raw {
            Some(raw) => SelectionView::from_raw(raw, &self.state.gui.filter).row_ix,
            None => Vec::new(),
        };
        if let Some(sel) = self.state.gui.selected_lead {
            if !self.row_ix.contains(&sel) {
                self.state.gui.selected_lead = None;
            }
        }
        logd!("View: {} of {} leads", self.row_ix.len(), self.raw.as_ref().map_or(0, RawData::len));
    }

    /// The filtered view, or None when nothing is loaded.
    pub fn view(&self) -> Option<SelectionView<'_>> {
        self.raw
            .as_ref()
            .map(|raw| SelectionView::from_indices(raw, self.row_ix.clone()))
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("filters")
            .resizable(false)
            .min_width(220.0)
            .show(ctx, |ui| {
                components::sidebar::draw(ui, self);
            });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(format!("Status: {}", self.status));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Kogi Pathfinder: Strategic Command");

            if self.raw.is_none() {
                ui.colored_label(
                    egui::Color32::from_rgb(230, 160, 40),
                    format!(
                        "⚠ No data loaded. Expected {}",
                        self.state.options.merge.master.display()
                    ),
                );
                return;
            }

            components::tabs::draw(ui, self);
            ui.separator();

            use crate::config::state::Tab;
            match self.state.gui.tab {
                Tab::CommandMap => components::map_view::draw(ui, self),
                Tab::Intelligence => components::intelligence::draw(ui, self),
                Tab::TargetGrid => {
                    components::export_bar::draw(ui, self);
                    ui.separator();
                    components::data_table::draw(ui, self);
                }
            }
        });
    }
}
