// src/gui/components/intelligence.rs
//
// Strategic intelligence tab: addressable market, the per-LGA viability
// matrix and a deep dive into one LGA.

use eframe::egui::{self, RichText};

use crate::gui::app::App;
use crate::insight::{deep_dive, total_addressable_market, viability_matrix, EnrichedLead};

fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(view) = app.view() else { return };
    let leads = view.leads();

    ui.horizontal(|ui| {
        ui.label(RichText::new("Total addressable market:").strong());
        ui.label(format!("{} people", thousands(total_addressable_market(leads.iter().copied()))));
        ui.add_space(16.0);
        ui.label(RichText::new("Targets in view:").strong());
        ui.label(leads.len().to_string());
    });
    ui.separator();

    let max_pop = app.profiles.max_population().max(1) as f32;
    let matrix = viability_matrix(leads.iter().copied());
    let mut pick: Option<String> = None;

    egui::ScrollArea::vertical().id_salt("intel_scroll").show(ui, |ui| {
        ui.heading("LGA viability matrix");
        egui::Grid::new("viability_matrix")
            .striped(true)
            .num_columns(5)
            .show(ui, |ui| {
                for h in ["LGA", "Population", "Tier", "Targets", "Description"] {
                    ui.strong(h);
                }
                ui.end_row();
                for r in &matrix {
                    if ui.link(&r.lga).clicked() {
                        pick = Some(r.lga.clone());
                    }
                    ui.add(
                        egui::ProgressBar::new(r.population as f32 / max_pop)
                            .desired_width(140.0)
                            .text(thousands(r.population)),
                    );
                    ui.label(&r.tier);
                    ui.label(r.captured_targets.to_string());
                    ui.label(&r.description);
                    ui.end_row();
                }
            });

        ui.separator();
        ui.heading("LGA deep dive");

        let current = app
            .state
            .gui
            .deep_dive_lga
            .clone()
            .filter(|l| matrix.iter().any(|r| r.lga == *l))
            .or_else(|| matrix.first().map(|r| r.lga.clone()));
        let mut chosen = current.clone().unwrap_or_default();
        egui::ComboBox::from_label("LGA")
            .selected_text(chosen.as_str())
            .show_ui(ui, |ui| {
                for r in &matrix {
                    ui.selectable_value(&mut chosen, r.lga.clone(), r.lga.as_str());
                }
            });
        if current.as_deref() != Some(chosen.as_str()) {
            pick = Some(chosen.clone());
        }

        match deep_dive(&chosen, &leads, &app.profiles) {
            Some(d) => {
                egui::Grid::new("deep_dive_metrics").num_columns(2).show(ui, |ui| {
                    ui.label("Official population");
                    ui.label(thousands(d.population));
                    ui.end_row();
                    ui.label("Viability tier");
                    ui.label(&d.tier);
                    ui.end_row();
                    ui.label("Captured targets");
                    ui.label(d.targets.to_string());
                    ui.end_row();
                    ui.label("Most common type");
                    ui.label(d.most_common_type.unwrap_or("-"));
                    ui.end_row();
                });
                ui.columns(2, |cols| {
                    top_list(&mut cols[0], "Top settlements", &d.top_settlements);
                    top_list(&mut cols[1], "Top commercial", &d.top_commercial);
                });
            }
            None => {
                ui.weak("No targets in view for this LGA.");
            }
        }
    });

    if let Some(lga) = pick {
        logd!("UI: Deep dive → {}", lga);
        app.state.gui.deep_dive_lga = Some(lga);
    }
}

fn top_list(ui: &mut egui::Ui, title: &str, leads: &[&EnrichedLead]) {
    ui.strong(title);
    if leads.is_empty() {
        ui.weak("none");
        return;
    }
    for l in leads {
        ui.label(format!("{} · {} · {}", l.row.name, l.row.kind, l.market_score));
    }
}
