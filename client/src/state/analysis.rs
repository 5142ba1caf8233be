//! Spending-analysis filters over the transaction list.
//!
//! DESIGN
//! ======
//! The page edits a draft [`AnalysisFilter`] and copies it to `applied` on
//! an explicit click; the table always renders `applied`. Filtering needs a
//! reference date, passed in so the predicates stay pure.

#[cfg(test)]
#[path = "analysis_test.rs"]
mod analysis_test;

use time::format_description::well_known::Rfc2822;
use time::macros::format_description;
use time::{Date, Duration, Month, OffsetDateTime};

use crate::net::types::Transaction;

/// Label of the category option that matches everything.
pub const ALL_CATEGORIES: &str = "All";

/// Categories offered even before any data has loaded.
pub const DEFAULT_CATEGORIES: [&str; 4] = ["Food & Dining", "Utilities", "Entertainment", "Travel"];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn from_label(label: &str) -> Self {
        if label == ALL_CATEGORIES || label.is_empty() {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(label.to_owned())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(category) => category,
        }
    }

    /// Exact, case-sensitive category match.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

/// Rolling window ending today.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimeFrame {
    #[default]
    AllTime,
    Last30Days,
    Last3Months,
    Last6Months,
    YearToDate,
    LastYear,
}

impl TimeFrame {
    pub const ALL: [TimeFrame; 6] = [
        TimeFrame::AllTime,
        TimeFrame::Last30Days,
        TimeFrame::Last3Months,
        TimeFrame::Last6Months,
        TimeFrame::YearToDate,
        TimeFrame::LastYear,
    ];

    /// Stable key used as the `<option>` value.
    pub fn key(self) -> &'static str {
        match self {
            TimeFrame::AllTime => "all",
            TimeFrame::Last30Days => "30d",
            TimeFrame::Last3Months => "3m",
            TimeFrame::Last6Months => "6m",
            TimeFrame::YearToDate => "ytd",
            TimeFrame::LastYear => "1y",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        TimeFrame::ALL.into_iter().find(|frame| frame.key() == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeFrame::AllTime => "All time",
            TimeFrame::Last30Days => "Last 30 days",
            TimeFrame::Last3Months => "Last 3 months",
            TimeFrame::Last6Months => "Last 6 months",
            TimeFrame::YearToDate => "Year to date",
            TimeFrame::LastYear => "Last year",
        }
    }

    /// First day inside the window, or `None` for an unbounded window.
    pub fn window_start(self, today: Date) -> Option<Date> {
        match self {
            TimeFrame::AllTime => None,
            TimeFrame::Last30Days => Some(today.saturating_sub(Duration::days(30))),
            TimeFrame::Last3Months => Some(months_before(today, 3)),
            TimeFrame::Last6Months => Some(months_before(today, 6)),
            TimeFrame::YearToDate => {
                Some(Date::from_calendar_date(today.year(), Month::January, 1).unwrap_or(today))
            }
            TimeFrame::LastYear => Some(months_before(today, 12)),
        }
    }

    /// Whether a transaction dated `date` falls inside the window.
    ///
    /// Undated rows only match [`TimeFrame::AllTime`]; future-dated rows never
    /// match a bounded window.
    pub fn contains(self, date: Option<Date>, today: Date) -> bool {
        match (self.window_start(today), date) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(start), Some(date)) => start <= date && date <= today,
        }
    }
}

/// Category and time-frame selection; both must match.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnalysisFilter {
    pub category: CategoryFilter,
    pub time_frame: TimeFrame,
}

impl AnalysisFilter {
    pub fn matches(&self, tx: &Transaction, today: Date) -> bool {
        self.category.matches(&tx.category)
            && self.time_frame.contains(parse_transaction_date(&tx.transaction_date), today)
    }

    /// Rows matching both predicates, in their original order.
    pub fn apply(&self, transactions: &[Transaction], today: Date) -> Vec<Transaction> {
        transactions
            .iter()
            .filter(|tx| self.matches(tx, today))
            .cloned()
            .collect()
    }
}

/// State behind the analysis page.
#[derive(Clone, Debug, Default)]
pub struct AnalysisState {
    pub transactions: Vec<Transaction>,
    pub loading: bool,
    pub error: Option<String>,
    pub draft: AnalysisFilter,
    pub applied: AnalysisFilter,
}

impl AnalysisState {
    /// Promote the draft selection to the applied one.
    pub fn apply_draft(&mut self) {
        self.applied = self.draft.clone();
    }

    pub fn visible(&self, today: Date) -> Vec<Transaction> {
        self.applied.apply(&self.transactions, today)
    }
}

/// `All`, the default categories, then any other category seen in the data.
pub fn category_options(transactions: &[Transaction]) -> Vec<String> {
    let mut options: Vec<String> = std::iter::once(ALL_CATEGORIES)
        .chain(DEFAULT_CATEGORIES)
        .map(str::to_owned)
        .collect();
    for tx in transactions {
        if !tx.category.is_empty() && !options.iter().any(|o| o == &tx.category) {
            options.push(tx.category.clone());
        }
    }
    options
}

pub fn total_amount(transactions: &[Transaction]) -> f64 {
    transactions.iter().map(|tx| tx.amount).sum()
}

/// Parse a backend transaction date.
///
/// Accepts ISO dates (optionally followed by a time) and HTTP-style dates
/// such as `Tue, 01 Oct 2024 00:00:00 GMT`.
pub fn parse_transaction_date(raw: &str) -> Option<Date> {
    let raw = raw.trim();
    if let Some(prefix) = raw.get(..10) {
        if let Ok(date) = Date::parse(prefix, format_description!("[year]-[month]-[day]")) {
            return Some(date);
        }
    }
    let normalized = match raw.strip_suffix(" GMT").or_else(|| raw.strip_suffix(" UTC")) {
        Some(rest) => format!("{rest} +0000"),
        None => raw.to_owned(),
    };
    OffsetDateTime::parse(&normalized, &Rfc2822).map(OffsetDateTime::date).ok()
}

/// Today's calendar date in the viewer's local time zone.
pub fn today() -> Date {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        let month = u8::try_from(now.get_month() + 1)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .unwrap_or(Month::January);
        let year = i32::try_from(now.get_full_year()).unwrap_or(1970);
        let day = u8::try_from(now.get_date()).unwrap_or(1);
        Date::from_calendar_date(year, month, day).unwrap_or(Date::MIN)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        OffsetDateTime::now_utc().date()
    }
}

/// Same day `months` months earlier, clamped to the end of shorter months.
fn months_before(date: Date, months: u32) -> Date {
    let mut year = date.year();
    let mut month = date.month();
    for _ in 0..months {
        if month == Month::January {
            year -= 1;
        }
        month = month.previous();
    }
    let day = date.day().min(time::util::days_in_year_month(year, month));
    Date::from_calendar_date(year, month, day).unwrap_or(date)
}
