// src/gui/actions/export.rs
use crate::{file, gui::app::App};

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        app.out_path_text = app.state.options.export.out_path().to_string_lossy().into_owned();
        logf!("Export: Out path set → {}", app.state.options.export.out_path().display());
        app.out_path_dirty = false;
    }

    let Some((headers, rows)) = super::current_report(app) else {
        logd!("Export: Clicked, but there's nothing to export");
        return app.status("Nothing to export");
    };

    logf!("Export: Begin rows={}, headers={}", rows.len(), headers.len());

    let status_msg = match file::write_export_single(&app.state.options.export, &headers, &rows) {
        Ok(path) => {
            logf!("Export: OK → {}", path.display());
            format!("Exported {} rows to {}", rows.len(), path.display())
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };
    app.status(status_msg);
}
