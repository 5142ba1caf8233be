use std::collections::BTreeMap;

use super::*;

fn month(name: &str, entries: &[(&str, f64)]) -> MonthTotals {
    let categories: BTreeMap<String, f64> = entries.iter().map(|(k, v)| ((*k).to_owned(), *v)).collect();
    MonthTotals(name.to_owned(), categories)
}

#[test]
fn build_series_fills_missing_months_with_zero() {
    let totals = vec![
        month("January", &[("Travel", 100.0)]),
        month("February", &[("Travel", 50.0), ("Utilities", 80.0)]),
    ];
    let data = build_series(&totals);
    assert_eq!(data.months, vec!["Jan", "Feb"]);
    assert_eq!(data.series.len(), 2);
    assert_eq!(data.series[0].category, "Travel");
    assert_eq!(data.series[0].values, vec![100.0, 50.0]);
    assert_eq!(data.series[1].category, "Utilities");
    assert_eq!(data.series[1].values, vec![0.0, 80.0]);
    assert_eq!(data.max_value(), 100.0);
}

#[test]
fn empty_totals_give_empty_chart() {
    let data = build_series(&[]);
    assert!(data.is_empty());
    assert_eq!(data.max_value(), 1.0);
    assert!(build_series(&[month("March", &[])]).is_empty());
}

#[test]
fn series_colors_cycle_every_six() {
    assert_eq!(series_color(0), "hsl(0, 100%, 50%)");
    assert_eq!(series_color(1), "hsl(60, 100%, 50%)");
    assert_eq!(series_color(6), series_color(0));
}

#[test]
fn month_tick_truncates_to_three_chars() {
    assert_eq!(month_tick("September"), "Sep");
    assert_eq!(month_tick("Q1"), "Q1");
}

#[test]
fn polyline_spans_padded_width() {
    let points = polyline_points(&[0.0, 10.0], 10.0);
    let expected = format!(
        "{:.1},{:.1} {:.1},{:.1}",
        CHART_PADDING,
        CHART_HEIGHT - CHART_PADDING,
        CHART_WIDTH - CHART_PADDING,
        CHART_PADDING
    );
    assert_eq!(points, expected);
}

#[test]
fn single_point_is_centered() {
    assert_eq!(x_at(0, 1), CHART_WIDTH / 2.0);
    assert_eq!(polyline_points(&[], 1.0), "");
}
