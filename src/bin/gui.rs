// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::{IconData, ViewportBuilder};
use kogi_pathfinder::{
    config::{profiles::LgaProfiles, state::AppState},
    gui, log,
};

fn app_icon() -> Option<IconData> {
    let rgba = image::load_from_memory(include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/pathfinder.png"
    )))
    .ok()?
    .to_rgba8();
    let (w, h) = rgba.dimensions();
    Some(IconData { rgba: rgba.into_raw(), width: w, height: h })
}

fn main() {
    log::init();

    let profiles = match LgaProfiles::embedded() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("LGA reference table is invalid: {e}");
            std::process::exit(1);
        }
    };

    let state = AppState::default();
    let mut viewport = ViewportBuilder::default().with_inner_size(state.gui.inner_size());
    if let Some(icon) = app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions { viewport, ..Default::default() };

    if let Err(e) = gui::run(options, state, profiles) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
