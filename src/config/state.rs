// src/config/state.rs
use super::options::AppOptions;
use crate::data::LeadFilter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    CommandMap,
    Intelligence,
    TargetGrid,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::CommandMap, Tab::Intelligence, Tab::TargetGrid];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::CommandMap => "🗺 Command Map",
            Tab::Intelligence => "📊 Strategic Intelligence",
            Tab::TargetGrid => "📋 Target Grid",
        }
    }
}

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    pub tab: Tab,

    /// Sidebar filter; replaced with a data-derived default on first load
    pub filter: LeadFilter,

    /// Lead clicked on the map (index into the raw list)
    pub selected_lead: Option<usize>,

    /// LGA shown in the deep-dive section
    pub deep_dive_lga: Option<String>,
}

impl GuiState {
    /// Initial window size in logical points.
    pub fn inner_size(&self) -> [f32; 2] {
        [self.window_w as f32, self.window_h as f32]
    }
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1280,
            window_h: 800,
            tab: Tab::default(),
            filter: LeadFilter::default(),
            selected_lead: None,
            deep_dive_lga: None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
