use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use eframe::egui::{Color32, RichText, ScrollArea, Ui};
use egui_plot::{
    uniform_grid_spacer, Bar, BarChart, GridMark, Legend, Line, Plot, PlotPoints, Points,
};

use crate::data::aggregate::{GroupTotal, KpiSummary, MonthlyTotal};
use crate::data::model::YearMonth;
use crate::format;
use crate::state::AppState;

const CHART_HEIGHT: f32 = 300.0;
const GAIN: Color32 = Color32::from_rgb(76, 175, 80);
const LOSS: Color32 = Color32::from_rgb(229, 83, 75);

// ---------------------------------------------------------------------------
// Dashboard (central panel)
// ---------------------------------------------------------------------------

/// Render the KPI row and the four charts, or a warning when the filters
/// leave nothing to show.
pub fn dashboard(ui: &mut Ui, state: &AppState, title: &str) {
    ui.heading(format!("📊 {title}"));
    ui.add_space(4.0);

    let Some(summary) = &state.summary else {
        ui.add_space(12.0);
        ui.label(
            RichText::new("⚠ No data available for selected filters.")
                .color(Color32::YELLOW)
                .size(16.0),
        );
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.strong("📌 Key Business Metrics");
            kpi_row(ui, &summary.kpis);
            ui.separator();

            ui.columns(2, |cols| {
                cols[0].strong("Profit by Region");
                region_profit_chart(&mut cols[0], &summary.region_profit);
                cols[1].strong("Profit by Sub-Category");
                sub_category_profit_chart(&mut cols[1], &summary.sub_category_profit);
            });
            ui.add_space(8.0);

            ui.columns(2, |cols| {
                cols[0].strong("Monthly Sales Trend");
                monthly_sales_chart(&mut cols[0], &summary.monthly_sales);
                cols[1].strong("Discount vs Profit");
                discount_profit_scatter(&mut cols[1], state);
            });
        });
}

fn kpi_row(ui: &mut Ui, kpis: &KpiSummary) {
    let metrics = [
        ("💰 Total Revenue", format::currency(kpis.total_sales)),
        ("📈 Total Profit", format::currency(kpis.total_profit)),
        ("🛒 Total Orders", kpis.total_orders.to_string()),
        ("🎯 Avg Discount", format::percent(kpis.avg_discount_pct)),
    ];
    ui.columns(metrics.len(), |cols| {
        for (col, (label, value)) in cols.iter_mut().zip(metrics) {
            col.label(label);
            col.label(RichText::new(value).size(26.0).strong());
        }
    });
}

// ---------------------------------------------------------------------------
// Charts
// ---------------------------------------------------------------------------

fn region_profit_chart(ui: &mut Ui, totals: &[GroupTotal]) {
    Plot::new("region_profit")
        .height(CHART_HEIGHT)
        .x_axis_formatter(label_axis(keys(totals)))
        .x_grid_spacer(uniform_grid_spacer(|_| [1.0, 5.0, 10.0]))
        .y_axis_formatter(|mark: GridMark, _range: &RangeInclusive<f64>| {
            format::compact_currency(mark.value)
        })
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(profit_bars(totals)).name("Profit"));
        });
}

fn sub_category_profit_chart(ui: &mut Ui, totals: &[GroupTotal]) {
    Plot::new("sub_category_profit")
        .height(CHART_HEIGHT)
        .y_axis_formatter(label_axis(keys(totals)))
        .y_grid_spacer(uniform_grid_spacer(|_| [1.0, 5.0, 10.0]))
        .x_axis_formatter(|mark: GridMark, _range: &RangeInclusive<f64>| {
            format::compact_currency(mark.value)
        })
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(profit_bars(totals))
                    .name("Profit")
                    .horizontal(),
            );
        });
}

fn monthly_sales_chart(ui: &mut Ui, months: &[MonthlyTotal]) {
    let points: Vec<[f64; 2]> = months
        .iter()
        .map(|m| [m.month.ordinal() as f64, m.total])
        .collect();

    Plot::new("monthly_sales")
        .height(CHART_HEIGHT)
        .x_axis_formatter(|mark: GridMark, _range: &RangeInclusive<f64>| {
            if mark.value.fract().abs() > 1e-6 {
                return String::new();
            }
            YearMonth::from_ordinal(mark.value as i64).to_string()
        })
        .y_axis_formatter(|mark: GridMark, _range: &RangeInclusive<f64>| {
            format::compact_currency(mark.value)
        })
        .label_formatter(|_name, value| {
            format!(
                "{}\n{}",
                YearMonth::from_ordinal(value.x.round() as i64),
                format::currency(value.y)
            )
        })
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(PlotPoints::from(points.clone()))
                    .name("Sales")
                    .width(2.0),
            );
            plot_ui.points(Points::new(PlotPoints::from(points)).radius(3.0));
        });
}

/// One series per category; points are individual records, not aggregates.
fn discount_profit_scatter(ui: &mut Ui, state: &AppState) {
    let mut by_category: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for &idx in &state.visible_indices {
        let rec = &state.dataset.records[idx];
        by_category
            .entry(rec.category.as_str())
            .or_default()
            .push([rec.discount, rec.profit]);
    }

    Plot::new("discount_profit")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Discount")
        .y_axis_label("Profit")
        .show(ui, |plot_ui| {
            for (category, points) in by_category {
                plot_ui.points(
                    Points::new(PlotPoints::from(points))
                        .name(category)
                        .color(state.category_colors.color_for(category))
                        .radius(2.5),
                );
            }
        });
}

// -- helpers --

fn keys(totals: &[GroupTotal]) -> Vec<String> {
    totals.iter().map(|g| g.key.clone()).collect()
}

/// Bars at 0, 1, 2, … coloured by sign.
fn profit_bars(totals: &[GroupTotal]) -> Vec<Bar> {
    totals
        .iter()
        .enumerate()
        .map(|(i, g)| {
            Bar::new(i as f64, g.total)
                .name(&g.key)
                .width(0.6)
                .fill(if g.total < 0.0 { LOSS } else { GAIN })
        })
        .collect()
}

/// Axis formatter naming the bar at each integer position.
fn label_axis(labels: Vec<String>) -> impl Fn(GridMark, &RangeInclusive<f64>) -> String {
    move |mark: GridMark, _range: &RangeInclusive<f64>| {
        let pos = mark.value.round();
        if (mark.value - pos).abs() > 1e-6 || pos < 0.0 {
            return String::new();
        }
        labels.get(pos as usize).cloned().unwrap_or_default()
    }
}
