use std::collections::BTreeMap;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, TAU};

use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{Legend, MarkerShape, Plot, PlotPoint, Points, Polygon, Text};

use crate::color::generate_palette;
use crate::data::aggregate::{total_count, OutcomeSlice};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Pie geometry
// ---------------------------------------------------------------------------

/// One slice of the pie in angular terms (radians, clockwise from 12 o'clock).
#[derive(Debug, Clone, PartialEq)]
pub struct Wedge {
    pub label: String,
    pub fraction: f64,
    pub start: f64,
    pub end: f64,
}

impl Wedge {
    fn mid(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

/// Lay the slices out around a full turn, in order.
pub fn pie_wedges(slices: &[OutcomeSlice]) -> Vec<Wedge> {
    let total = total_count(slices);
    if total == 0 {
        return Vec::new();
    }

    let mut start = 0.0;
    slices
        .iter()
        .map(|s| {
            let fraction = s.count as f64 / total as f64;
            let end = start + fraction * TAU;
            let wedge = Wedge {
                label: s.label.clone(),
                fraction,
                start,
                end,
            };
            start = end;
            wedge
        })
        .collect()
}

/// Point on the unit circle at a clockwise angle from 12 o'clock.
fn on_circle(angle: f64, radius: f64) -> [f64; 2] {
    let theta = FRAC_PI_2 - angle;
    [radius * theta.cos(), radius * theta.sin()]
}

/// Split a wedge into convex pieces (≤ 45° each) that the plot can fill.
fn wedge_polygons(wedge: &Wedge) -> Vec<Vec<[f64; 2]>> {
    let span = wedge.end - wedge.start;
    let pieces = (span / FRAC_PI_4).ceil().max(1.0) as usize;
    let step = span / pieces as f64;
    const ARC_STEPS: usize = 12;

    (0..pieces)
        .map(|p| {
            let a0 = wedge.start + p as f64 * step;
            let mut pts = Vec::with_capacity(ARC_STEPS + 2);
            pts.push([0.0, 0.0]);
            for k in 0..=ARC_STEPS {
                pts.push(on_circle(a0 + step * k as f64 / ARC_STEPS as f64, 1.0));
            }
            pts
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Success pie chart
// ---------------------------------------------------------------------------

/// Render the success/failure pie for the current site selection.
pub fn outcome_pie(ui: &mut Ui, state: &AppState, height: f32) {
    ui.strong(&state.pie_title);

    let wedges = pie_wedges(&state.pie_slices);
    if wedges.is_empty() {
        ui.allocate_ui(eframe::egui::vec2(ui.available_width(), height), |ui: &mut Ui| {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.label("No launches match the current selection.");
            });
        });
        return;
    }

    let colors = generate_palette(wedges.len());

    Plot::new("success_pie_chart")
        .height(height)
        .data_aspect(1.0)
        .legend(Legend::default())
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            for (wedge, &color) in wedges.iter().zip(colors.iter()) {
                for pts in wedge_polygons(wedge) {
                    plot_ui.polygon(
                        Polygon::new(pts)
                            .name(&wedge.label)
                            .fill_color(color)
                            .stroke(Stroke::new(1.0, color)),
                    );
                }
                let [x, y] = on_circle(wedge.mid(), 0.65);
                plot_ui.text(Text::new(
                    PlotPoint::new(x, y),
                    RichText::new(format!("{:.1}%", wedge.fraction * 100.0))
                        .color(Color32::WHITE)
                        .strong(),
                ));
            }
        });
}

// ---------------------------------------------------------------------------
// Payload vs. outcome scatter chart
// ---------------------------------------------------------------------------

/// Render payload mass against launch class, one series per booster version.
pub fn payload_scatter(ui: &mut Ui, state: &AppState) {
    if state.dataset.is_none() {
        return;
    }

    ui.strong("Correlation between Payload and Success");

    if state.scatter_rows.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No launches match the current selection.");
        });
        return;
    }

    let mut series: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for rec in &state.scatter_rows {
        series
            .entry(rec.booster_version.as_str())
            .or_default()
            .push([rec.payload_mass_kg, f64::from(rec.outcome.class())]);
    }

    Plot::new("success_payload_scatter_chart")
        .legend(Legend::default())
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("class")
        .include_x(state.payload.min_kg())
        .include_x(state.payload.max_kg())
        .include_y(-0.25)
        .include_y(1.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (version, pts) in series {
                let color = state
                    .color_map
                    .as_ref()
                    .map(|cm| cm.color_for(version))
                    .unwrap_or(Color32::LIGHT_BLUE);

                plot_ui.points(
                    Points::new(pts)
                        .name(version)
                        .color(color)
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(4.0),
                );
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slice(label: &str, count: usize) -> OutcomeSlice {
        OutcomeSlice {
            label: label.to_string(),
            count,
        }
    }

    #[test]
    fn wedges_cover_a_full_turn_in_order() {
        let wedges = pie_wedges(&[slice("Success", 3), slice("Fail", 1)]);
        assert_eq!(wedges.len(), 2);
        assert_eq!(wedges[0].label, "Success");
        assert!((wedges[0].fraction - 0.75).abs() < 1e-12);
        assert_eq!(wedges[0].start, 0.0);
        assert!((wedges[0].end - wedges[1].start).abs() < 1e-12);
        assert!((wedges[1].end - TAU).abs() < 1e-9);
    }

    #[test]
    fn no_slices_no_wedges() {
        assert!(pie_wedges(&[]).is_empty());
    }

    #[test]
    fn large_wedge_is_split_into_convex_pieces() {
        let wedges = pie_wedges(&[slice("KSC LC-39A", 1)]);
        let polys = wedge_polygons(&wedges[0]);
        assert_eq!(polys.len(), 8);
        for poly in &polys {
            assert_eq!(poly[0], [0.0, 0.0]);
            for p in &poly[1..] {
                let r = (p[0] * p[0] + p[1] * p[1]).sqrt();
                assert!((r - 1.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn first_wedge_starts_at_twelve_o_clock() {
        let [x, y] = on_circle(0.0, 1.0);
        assert!(x.abs() < 1e-12);
        assert!((y - 1.0).abs() < 1e-12);
    }
}
