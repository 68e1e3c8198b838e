// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy,export,reload}.

mod copy;    // src/gui/actions/copy.rs
mod export;  // src/gui/actions/export.rs
mod reload;  // src/gui/actions/reload.rs

pub use copy::copy;
pub use export::export;
pub use reload::reload;

use crate::gui::app::App;
use crate::insight::report_headers;

/// Report headers and rows for the current view; None when nothing is in view.
pub(super) fn current_report(app: &App) -> Option<(Vec<String>, Vec<Vec<String>>)> {
    let view = app.view()?;
    if view.is_empty() {
        return None;
    }
    Some((report_headers(), view.to_report_rows()))
}
