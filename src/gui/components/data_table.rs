// src/gui/components/data_table.rs
//
// Target grid: the filtered leads as a read-only table. Purely a view.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;
use crate::insight::GRID_HEADERS;

const WIDTHS: [f32; 5] = [220.0, 120.0, 200.0, 140.0, 240.0];

/// Leading "Tier 1" style prefixes get a colour; anything else stays plain.
fn tier_color(tier: &str) -> Option<egui::Color32> {
    if tier.starts_with("Tier 1") {
        Some(egui::Color32::from_rgb(0x64, 0xC8, 0x64))
    } else if tier.starts_with("Tier 2") {
        Some(egui::Color32::from_rgb(0xF0, 0xD2, 0x3C))
    } else if tier.starts_with("Tier 3") {
        Some(egui::Color32::from_rgb(0xDC, 0x61, 0x49))
    } else {
        None
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(view) = app.view() else { return };

    // Ensure scroll bars allocate space (not floating over content)
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.bar_inner_margin = 7.0;
        s.bar_outer_margin = 0.0;
        s.handle_min_length = 48.0;
        s.foreground_color = true;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .id_salt("target_grid");
    for w in WIDTHS {
        table = table.column(Column::initial(w).resizable(true).clip(true).at_least(40.0));
    }

    table
        .header(24.0, |mut header| {
            for h in GRID_HEADERS {
                header.col(|ui| {
                    ui.strong(h);
                });
            }
        })
        .body(|body| {
            body.rows(20.0, view.len(), |mut row| {
                let Some(lead) = view.lead(row.index()) else { return };
                for (ci, cell) in lead.grid_record().into_iter().enumerate() {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        let mut rt = RichText::new(cell);
                        if ci == 2 {
                            if let Some(c) = tier_color(cell) {
                                rt = rt.color(c);
                            }
                        }
                        ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                            ui.label(rt);
                        });
                    });
                }
            });
        });
}
