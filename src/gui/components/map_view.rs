// src/gui/components/map_view.rs
//
// Command map: an equirectangular scatter of the filtered leads drawn with
// the painter, a legend, a hover label, and click-to-select. The selected
// lead's details and navigation link show underneath.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use crate::gui::app::App;
use crate::insight::{marker_style, EnrichedLead, MarkerColor, LEGEND};

const POINT_R: f32 = 4.0;
const PICK_R: f32 = 8.0;
const MARGIN: f32 = 16.0;

pub fn color_of(c: MarkerColor) -> Color32 {
    match c {
        MarkerColor::Red      => Color32::from_rgb(214, 62, 42),
        MarkerColor::Green    => Color32::from_rgb(114, 176, 38),
        MarkerColor::Purple   => Color32::from_rgb(164, 82, 198),
        MarkerColor::Blue     => Color32::from_rgb(56, 170, 221),
        MarkerColor::DarkBlue => Color32::from_rgb(0, 103, 163),
        MarkerColor::Gray     => Color32::from_rgb(140, 140, 140),
    }
}

/// Lat/lon bounds of the points, padded so a single point still gets an area.
fn bounds(mut points: impl Iterator<Item = (f64, f64)>) -> Option<(f64, f64, f64, f64)> {
    let (lat0, lon0) = points.next()?;
    let (mut s, mut n, mut w, mut e) = (lat0, lat0, lon0, lon0);
    for (lat, lon) in points {
        s = s.min(lat);
        n = n.max(lat);
        w = w.min(lon);
        e = e.max(lon);
    }
    let pad = 0.01;
    Some((s - pad, n + pad, w - pad, e + pad))
}

/// Fit the bounds into `rect` keeping the aspect ratio.
fn projector(rect: Rect, (s, n, w, e): (f64, f64, f64, f64)) -> impl Fn(f64, f64) -> Pos2 {
    let inner = rect.shrink(MARGIN);
    let sx = inner.width() as f64 / (e - w);
    let sy = inner.height() as f64 / (n - s);
    let k = sx.min(sy);
    let off_x = inner.left() as f64 + (inner.width() as f64 - (e - w) * k) / 2.0;
    let off_y = inner.top() as f64 + (inner.height() as f64 - (n - s) * k) / 2.0;
    move |lat, lon| Pos2::new((off_x + (lon - w) * k) as f32, (off_y + (n - lat) * k) as f32)
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(view) = app.view() else { return };

    ui.label(format!("Showing {} targets", view.len()));
    if view.is_empty() {
        ui.weak("No leads match the current filter.");
        return;
    }

    let leads: Vec<(usize, &EnrichedLead)> = view.row_ix.iter().copied().zip(view.iter()).collect();
    let Some(b) = bounds(leads.iter().map(|(_, l)| (l.row.latitude, l.row.longitude))) else { return };

    let height = (ui.available_height() - 140.0).max(240.0);
    let (resp, painter) = ui.allocate_painter(Vec2::new(ui.available_width(), height), Sense::click());
    let rect = resp.rect;
    painter.rect_filled(rect, 4.0, ui.visuals().extreme_bg_color);
    let project = projector(rect, b);

    let hover = resp.hover_pos();
    let mut nearest: Option<(usize, Pos2, f32)> = None;
    let selected = app.state.gui.selected_lead;

    for &(ix, lead) in &leads {
        let pos = project(lead.row.latitude, lead.row.longitude);
        let style = marker_style(&lead.row.kind, lead.row.category);
        painter.circle_filled(pos, POINT_R, color_of(style.color));

        if let Some(h) = hover {
            let d = h.distance(pos);
            if d <= PICK_R && nearest.is_none_or(|(_, _, best)| d < best) {
                nearest = Some((ix, pos, d));
            }
        }
        if selected == Some(ix) {
            painter.circle_stroke(pos, POINT_R + 3.0, Stroke::new(2.0, ui.visuals().strong_text_color()));
        }
    }

    if let Some((ix, pos, _)) = nearest {
        if let Some(&(_, lead)) = leads.iter().find(|(i, _)| *i == ix) {
            let text = format!("{} ({})", lead.row.name, lead.row.kind);
            painter.text(
                pos + Vec2::new(8.0, -8.0),
                Align2::LEFT_BOTTOM,
                text,
                FontId::proportional(13.0),
                ui.visuals().strong_text_color(),
            );
        }
    }
    let clicked = resp.clicked().then_some(nearest.map(|(ix, _, _)| ix)).flatten();

    if let Some(ix) = clicked {
        logd!("Map: selected lead #{}", ix);
        app.state.gui.selected_lead = Some(ix);
    }

    legend(ui);
    ui.separator();
    details(ui, app);
}

fn legend(ui: &mut egui::Ui) {
    ui.horizontal_wrapped(|ui| {
        for style in LEGEND {
            let (r, p) = ui.allocate_painter(Vec2::splat(12.0), Sense::hover());
            p.circle_filled(r.rect.center(), POINT_R, color_of(style.color));
            ui.label(style.legend);
            ui.add_space(8.0);
        }
    });
}

fn details(ui: &mut egui::Ui, app: &App) {
    let Some(lead) = app
        .state
        .gui
        .selected_lead
        .and_then(|ix| app.raw.as_ref()?.leads().get(ix))
    else {
        ui.weak("Click a point for details.");
        return;
    };
    let r = &lead.row;
    ui.strong(&r.name);
    egui::Grid::new("lead_details").num_columns(2).show(ui, |ui| {
        for (k, v) in [
            ("Category", s!(r.category.as_str())),
            ("Type", r.kind.clone()),
            ("LGA", r.lga.clone()),
            ("Est. population", r.tentative_population.clone()),
            ("Priority", r.priority.to_string()),
            ("Tier", lead.viability_tier.clone()),
            ("Address", lead.full_address.clone()),
        ] {
            ui.label(k);
            ui.label(v);
            ui.end_row();
        }
    });
    ui.hyperlink_to("📍 Navigate (Google Maps)", &r.navigation_link);
}
