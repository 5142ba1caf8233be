//! Geometry for the monthly spending trend chart.
//!
//! The chart draws one polyline per category over the months returned by the
//! totals endpoint. Months missing a category plot at zero.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

use crate::net::types::MonthTotals;

pub const CHART_WIDTH: f64 = 640.0;
pub const CHART_HEIGHT: f64 = 280.0;
pub const CHART_PADDING: f64 = 36.0;

/// One category's amounts, aligned with the chart's month axis.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSeries {
    pub category: String,
    pub color: String,
    pub values: Vec<f64>,
}

/// Month labels plus one series per category.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartData {
    pub months: Vec<String>,
    pub series: Vec<ChartSeries>,
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        self.months.is_empty() || self.series.is_empty()
    }

    /// Largest value across every series, at least 1.0 so the y scale is
    /// never degenerate.
    pub fn max_value(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold(1.0_f64, f64::max)
    }
}

/// Build chart series from monthly totals.
///
/// Categories appear in first-seen order across all months.
pub fn build_series(totals: &[MonthTotals]) -> ChartData {
    let mut categories: Vec<String> = Vec::new();
    for month in totals {
        for category in month.categories().keys() {
            if !categories.contains(category) {
                categories.push(category.clone());
            }
        }
    }
    let series = categories
        .into_iter()
        .enumerate()
        .map(|(index, category)| {
            let values = totals
                .iter()
                .map(|month| month.categories().get(&category).copied().unwrap_or(0.0))
                .collect();
            ChartSeries { color: series_color(index), category, values }
        })
        .collect();
    ChartData { months: totals.iter().map(|m| month_tick(m.month())).collect(), series }
}

/// Evenly spaced hues, repeating every six series.
pub fn series_color(index: usize) -> String {
    format!("hsl({}, 100%, 50%)", (index * 60) % 360)
}

/// First three characters of a month name.
pub fn month_tick(month: &str) -> String {
    month.chars().take(3).collect()
}

/// X coordinate of the `index`-th of `count` points.
pub fn x_at(index: usize, count: usize) -> f64 {
    let inner = CHART_WIDTH - 2.0 * CHART_PADDING;
    if count <= 1 {
        return CHART_PADDING + inner / 2.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let step = inner / (count - 1) as f64;
    #[allow(clippy::cast_precision_loss)]
    let offset = step * index as f64;
    CHART_PADDING + offset
}

/// Y coordinate of `value` on a scale topping out at `max`.
pub fn y_at(value: f64, max: f64) -> f64 {
    let inner = CHART_HEIGHT - 2.0 * CHART_PADDING;
    let ratio = if max > 0.0 { (value / max).clamp(0.0, 1.0) } else { 0.0 };
    CHART_HEIGHT - CHART_PADDING - ratio * inner
}

/// SVG `points` attribute for one series.
pub fn polyline_points(values: &[f64], max: f64) -> String {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| format!("{:.1},{:.1}", x_at(index, values.len()), y_at(*value, max)))
        .collect::<Vec<_>>()
        .join(" ")
}
