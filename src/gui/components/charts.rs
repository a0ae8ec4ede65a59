// src/gui/components/charts.rs
//
// Hand-painted bar charts for the comparison metrics. One small chart per
// metric, one bar per selected product; a metric with no parseable value in
// any record is skipped entirely rather than drawn empty.

use eframe::egui::{self, Align2, Color32, CornerRadius, FontId, Rect, RichText, Sense, Vec2, pos2};

use crate::compare::ComparisonRecord;
use crate::config::options::Category;
use crate::specs::spec_for;

const BAR_W: f32 = 28.0;
const BAR_GAP: f32 = 8.0;
const CHART_H: f32 = 120.0;

/// One color per selection slot (selection is capped at three).
const PALETTE: [Color32; 3] = [
    Color32::from_rgb(0x3a, 0x7b, 0xd5),
    Color32::from_rgb(0xd5, 0x7b, 0x3a),
    Color32::from_rgb(0x4c, 0xaf, 0x6e),
];

pub fn bar_color(slot: usize) -> Color32 {
    PALETTE[slot % PALETTE.len()]
}

pub fn draw(ui: &mut egui::Ui, category: Category, records: &[ComparisonRecord]) {
    let spec = spec_for(category);

    let metrics: [(&str, Vec<Option<f64>>); 5] = [
        (spec.spf, records.iter().map(|r| r.spf).collect()),
        (spec.uva, records.iter().map(|r| r.uva).collect()),
        (spec.blue_light, records.iter().map(|r| r.blue_light).collect()),
        (spec.visible, records.iter().map(|r| r.visible).collect()),
        (spec.price_metric_title, records.iter().map(|r| r.price_metric).collect()),
    ];

    // Legend: color swatch per product.
    ui.horizontal_wrapped(|ui| {
        for (i, r) in records.iter().enumerate() {
            let (rect, _) = ui.allocate_exact_size(Vec2::splat(12.0), Sense::hover());
            ui.painter().rect_filled(rect, CornerRadius::same(2), bar_color(i));
            ui.label(&r.label);
            ui.add_space(8.0);
        }
    });

    ui.horizontal_wrapped(|ui| {
        for (title, values) in &metrics {
            if values.iter().all(Option::is_none) {
                continue;
            }
            chart(ui, title, values);
            ui.add_space(16.0);
        }
    });
}

fn chart(ui: &mut egui::Ui, title: &str, values: &[Option<f64>]) {
    ui.vertical(|ui| {
        ui.label(RichText::new(title).strong());

        let n = values.len().max(1) as f32;
        let size = Vec2::new(n * (BAR_W + BAR_GAP) + BAR_GAP, CHART_H);
        let (resp, painter) = ui.allocate_painter(size, Sense::hover());
        let rect = resp.rect;

        let max = values
            .iter()
            .flatten()
            .fold(f64::MIN, |a, &v| a.max(v))
            .max(f64::MIN_POSITIVE);

        let text_color = ui.visuals().text_color();
        let base = rect.bottom() - 2.0;
        let usable_h = rect.height() - 18.0;

        for (i, v) in values.iter().enumerate() {
            let Some(v) = v else { continue };
            let frac = ((v / max).clamp(0.0, 1.0)) as f32;
            // Keep a sliver visible for zero-valued bars
            let h = (frac * usable_h).max(1.0);

            let x0 = rect.left() + BAR_GAP + i as f32 * (BAR_W + BAR_GAP);
            let bar = Rect::from_min_max(pos2(x0, base - h), pos2(x0 + BAR_W, base));
            painter.rect_filled(bar, CornerRadius::same(2), bar_color(i));
            painter.text(
                pos2(x0 + BAR_W / 2.0, bar.top() - 2.0),
                Align2::CENTER_BOTTOM,
                fmt_value(*v),
                FontId::proportional(10.0),
                text_color,
            );
        }
    });
}

fn fmt_value(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        format!("{v:.2}")
    }
}
