// src/gui/components/sidebar.rs
//
// Left panel: LGA, category and priority filters plus reload. Every change
// re-applies the filter directly on `app`.

use eframe::egui;

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("⚙ Filters");

    if ui.button("⟳ Reload data").clicked() {
        actions::reload(app);
    }
    ui.separator();

    let Some(raw) = &app.raw else {
        ui.label("Nothing loaded.");
        return;
    };
    let lgas = raw.available_lgas();
    let categories = raw.available_categories();
    let mut changed = false;

    // Priority range
    ui.label("Priority tier");
    let (mut lo, mut hi) = app.state.gui.filter.priority;
    ui.horizontal(|ui| {
        changed |= ui.add(egui::Slider::new(&mut lo, 1..=3).text("from")).changed();
    });
    ui.horizontal(|ui| {
        changed |= ui.add(egui::Slider::new(&mut hi, 1..=3).text("to")).changed();
    });
    if changed {
        app.state.gui.filter.set_priority(lo, hi);
    }
    ui.separator();

    // Categories
    ui.label("Target category");
    for c in categories {
        let mut on = app.state.gui.filter.categories.contains(&c);
        if ui.checkbox(&mut on, c.as_str()).changed() {
            app.state.gui.filter.toggle_category(c);
            changed = true;
        }
    }
    ui.separator();

    // LGAs
    ui.horizontal(|ui| {
        ui.label("LGA");
        if ui.small_button("All").clicked() {
            app.state.gui.filter.lgas.clear();
            changed = true;
        }
    });
    if app.state.gui.filter.lgas.is_empty() {
        ui.weak("(none ticked: all LGAs)");
    }

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    egui::ScrollArea::vertical()
        .id_salt("lga_filter_scroll")
        .show(ui, |ui| {
            for lga in &lgas {
                let mut on = app.state.gui.filter.lgas.contains(lga);
                if ui.checkbox(&mut on, lga.as_str()).changed() {
                    app.state.gui.filter.toggle_lga(lga);
                    changed = true;
                }
            }
        });

    if changed {
        app.rebuild_view();
        logf!(
            "UI: Filter → lgas={:?} categories={} priority={:?} ({} leads)",
            app.state.gui.filter.lgas,
            app.state.gui.filter.categories.len(),
            app.state.gui.filter.priority,
            app.row_ix.len()
        );
    }
}
