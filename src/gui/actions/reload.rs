// src/gui/actions/reload.rs
use crate::gui::app::App;

/// Drop the memoized master list and read it again.
pub fn reload(app: &mut App) {
    logf!("Reload: {}", app.state.options.merge.master.display());
    app.cache.invalidate();
    app.load();
}
