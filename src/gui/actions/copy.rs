// src/gui/actions/copy.rs
use eframe::egui;

use crate::gui::app::App;

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let Some((headers, rows)) = super::current_report(app) else {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    };

    let include = app.state.options.export.include_headers;
    logf!("Copy: rows={}, headers={}", rows.len(), if include { headers.len() } else { 0 });

    let txt = crate::csv::rows_to_string(include.then_some(headers.as_slice()), &rows);
    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
