use super::*;
use time::macros::date;

fn tx(description: &str, category: &str, amount: f64, transaction_date: &str) -> Transaction {
    Transaction {
        description: description.to_owned(),
        category: category.to_owned(),
        amount,
        transaction_date: transaction_date.to_owned(),
    }
}

fn sample() -> Vec<Transaction> {
    vec![
        tx("Flight to Lisbon", "Travel", 320.0, "2024-10-10"),
        tx("Groceries", "Food & Dining", 54.2, "2024-10-12"),
        tx("Power bill", "Utilities", 88.0, "2024-07-01"),
        tx("Hotel", "Travel", 210.0, "2024-03-15"),
        tx("Cinema", "Entertainment", 24.0, "2023-11-20"),
        tx("Train", "Travel", 31.0, "not a date"),
    ]
}

const TODAY: Date = date!(2024 - 10 - 15);

// =============================================================
// Category filter
// =============================================================

#[test]
fn travel_filter_returns_exactly_travel_rows() {
    let filter = AnalysisFilter { category: CategoryFilter::from_label("Travel"), ..AnalysisFilter::default() };
    let rows = filter.apply(&sample(), TODAY);
    let expected: Vec<Transaction> = sample().into_iter().filter(|t| t.category == "Travel").collect();
    assert_eq!(rows, expected);
}

#[test]
fn all_filter_returns_full_list() {
    let rows = AnalysisFilter::default().apply(&sample(), TODAY);
    assert_eq!(rows, sample());
}

#[test]
fn category_match_is_exact() {
    let filter = CategoryFilter::from_label("travel");
    assert!(!filter.matches("Travel"));
    assert!(CategoryFilter::from_label("").matches("anything"));
    assert_eq!(CategoryFilter::from_label("All"), CategoryFilter::All);
}

// =============================================================
// Time frames
// =============================================================

#[test]
fn time_frame_and_category_combine_with_and() {
    let filter = AnalysisFilter {
        category: CategoryFilter::Only("Travel".to_owned()),
        time_frame: TimeFrame::Last30Days,
    };
    let rows = filter.apply(&sample(), TODAY);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].description, "Flight to Lisbon");
}

#[test]
fn last_six_months_window() {
    let filter = AnalysisFilter { time_frame: TimeFrame::Last6Months, ..AnalysisFilter::default() };
    let names: Vec<String> = filter.apply(&sample(), TODAY).into_iter().map(|t| t.description).collect();
    assert_eq!(names, vec!["Flight to Lisbon", "Groceries", "Power bill"]);
}

#[test]
fn undated_rows_only_match_all_time() {
    let undated = tx("Mystery", "Travel", 1.0, "");
    assert!(AnalysisFilter::default().matches(&undated, TODAY));
    for frame in TimeFrame::ALL.into_iter().filter(|f| *f != TimeFrame::AllTime) {
        let filter = AnalysisFilter { time_frame: frame, ..AnalysisFilter::default() };
        assert!(!filter.matches(&undated, TODAY), "{frame:?}");
    }
}

#[test]
fn future_rows_fall_outside_bounded_windows() {
    assert!(!TimeFrame::Last30Days.contains(Some(date!(2024 - 10 - 16)), TODAY));
    assert!(TimeFrame::AllTime.contains(Some(date!(2030 - 1 - 1)), TODAY));
}

#[test]
fn window_starts() {
    assert_eq!(TimeFrame::AllTime.window_start(TODAY), None);
    assert_eq!(TimeFrame::Last30Days.window_start(TODAY), Some(date!(2024 - 9 - 15)));
    assert_eq!(TimeFrame::Last3Months.window_start(TODAY), Some(date!(2024 - 7 - 15)));
    assert_eq!(TimeFrame::YearToDate.window_start(TODAY), Some(date!(2024 - 1 - 1)));
    assert_eq!(TimeFrame::LastYear.window_start(TODAY), Some(date!(2023 - 10 - 15)));
}

#[test]
fn month_arithmetic_clamps_to_shorter_months() {
    assert_eq!(TimeFrame::Last3Months.window_start(date!(2024 - 5 - 31)), Some(date!(2024 - 2 - 29)));
    assert_eq!(TimeFrame::Last6Months.window_start(date!(2024 - 3 - 31)), Some(date!(2023 - 9 - 30)));
}

#[test]
fn time_frame_keys_round_trip() {
    for frame in TimeFrame::ALL {
        assert_eq!(TimeFrame::from_key(frame.key()), Some(frame));
    }
    assert_eq!(TimeFrame::from_key("forever"), None);
}

// =============================================================
// Draft vs applied
// =============================================================

#[test]
fn draft_changes_do_not_filter_until_applied() {
    let mut state = AnalysisState { transactions: sample(), ..AnalysisState::default() };
    state.draft.category = CategoryFilter::Only("Utilities".to_owned());
    assert_eq!(state.visible(TODAY).len(), sample().len());
    state.apply_draft();
    assert_eq!(state.visible(TODAY).len(), 1);
}

// =============================================================
// Helpers
// =============================================================

#[test]
fn category_options_start_with_all_and_defaults_then_extras() {
    let mut rows = sample();
    rows.push(tx("Gym", "Health", 40.0, "2024-10-01"));
    let options = category_options(&rows);
    assert_eq!(options[0], "All");
    assert_eq!(&options[1..5], &["Food & Dining", "Utilities", "Entertainment", "Travel"]);
    assert_eq!(options[5..], ["Health".to_owned()]);
}

#[test]
fn total_amount_sums_rows() {
    let total = total_amount(&sample());
    assert!((total - 727.2).abs() < 1e-9);
}

#[test]
fn parses_iso_and_http_dates() {
    assert_eq!(parse_transaction_date("2024-10-01"), Some(date!(2024 - 10 - 1)));
    assert_eq!(parse_transaction_date("2024-10-01T13:45:00Z"), Some(date!(2024 - 10 - 1)));
    assert_eq!(parse_transaction_date("Tue, 01 Oct 2024 00:00:00 GMT"), Some(date!(2024 - 10 - 1)));
    assert_eq!(parse_transaction_date("yesterday"), None);
    assert_eq!(parse_transaction_date(""), None);
}
