//! Type definitions and constants for month selection.

use std::fmt;

use chrono::{Datelike, Locale, NaiveDate};
use clap::ValueEnum;

use crate::bounds::Bounds;

/// How many clicks make a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum SelectionMode {
    /// One click selects one month and closes the picker.
    Single,
    /// Two clicks select a closed interval of months.
    Range,
}

/// A month of a specific year. `month` is the zero-based month index (0 = January).
///
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    /// Build from a year and a zero-based month index, rejecting indices past December.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (month < MONTHS_PER_YEAR).then_some(YearMonth { year, month })
    }

    /// Drop the day of month.
    pub fn from_date(date: NaiveDate) -> Self {
        YearMonth {
            year: date.year(),
            month: date.month0(),
        }
    }

    /// First day of this month, if the year is representable.
    pub fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month + 1)
    }
}

/// A closed interval of months with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRange {
    start: YearMonth,
    end: YearMonth,
}

impl MonthRange {
    /// Build a range from two endpoints in either order.
    pub fn new(a: YearMonth, b: YearMonth) -> Self {
        if b < a {
            MonthRange { start: b, end: a }
        } else {
            MonthRange { start: a, end: b }
        }
    }

    /// A range covering exactly one month.
    pub fn single(month: YearMonth) -> Self {
        MonthRange {
            start: month,
            end: month,
        }
    }

    pub fn start(&self) -> YearMonth {
        self.start
    }

    pub fn end(&self) -> YearMonth {
        self.end
    }

    pub fn is_single(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, month: YearMonth) -> bool {
        self.start <= month && month <= self.end
    }

    /// Role of `month` when this range is highlighted.
    ///
    /// A one-month range reports `Start` for its only cell.
    pub fn role_of(&self, month: YearMonth) -> RangeRole {
        if month == self.start {
            RangeRole::Start
        } else if month == self.end {
            RangeRole::End
        } else if self.contains(month) {
            RangeRole::In
        } else {
            RangeRole::None
        }
    }
}

/// Selection progress. Exactly one variant holds at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Empty,
    /// Range mode only: the first endpoint has been clicked.
    PendingStart(YearMonth),
    /// A finished selection. Single mode always has `start == end`.
    Completed(MonthRange),
}

/// Position of a cell inside a highlighted range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangeRole {
    #[default]
    None,
    Start,
    In,
    End,
}

/// Render descriptor for one month cell. Recomputed on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Zero-based month index.
    pub month: u32,
    pub year: i32,
    pub is_today: bool,
    pub is_selected: bool,
    pub range_role: RangeRole,
    pub disabled: bool,
}

/// Year navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    pub fn delta(self) -> i32 {
        match self {
            Direction::Prev => -1,
            Direction::Next => 1,
        }
    }
}

/// What the host should do with the picker after a cell click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Click landed on a disabled or invalid cell.
    Ignored,
    /// Range selection in progress; keep the picker open.
    KeepOpen,
    /// Selection completed; close the picker.
    Close,
}

/// Column display mode for the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnsMode {
    /// Fixed number of columns.
    Fixed(u32),
    /// Auto-detect from terminal width.
    Auto,
}

/// Picker configuration, validated once at construction.
#[derive(Clone, Debug)]
pub struct PickerContext {
    pub mode: SelectionMode,
    pub bounds: Bounds,
    /// Preselected months: at most one in single mode, at most two in range mode.
    pub default_dates: Vec<YearMonth>,
    /// Locale for month names and value formatting.
    pub locale: Locale,
    /// strftime pattern for the input value.
    pub date_format: String,
    /// strftime pattern for the alternate input value, if any.
    pub alt_format: Option<String>,
    /// Text placed between the two ends of a range value.
    pub range_separator: String,
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    pub columns: ColumnsMode,
    /// Render the picker after every event instead of only at the end.
    pub trace: bool,
}

pub const MONTHS_PER_YEAR: u32 = 12;
pub const DEFAULT_COLUMNS: u32 = 3;
pub const MAX_AUTO_COLUMNS: u32 = 4;
pub const DEFAULT_DATE_FORMAT: &str = "%B %Y";
pub const DEFAULT_RANGE_SEPARATOR: &str = " to ";

// Color is enabled by default for better user experience
pub const COLOR_ENABLED_BY_DEFAULT: bool = true;

// Plain-text cell markers
pub const MARK_SELECTED: char = '*';
pub const MARK_START: char = '[';
pub const MARK_END: char = ']';
pub const MARK_IN: char = '-';
pub const MARK_TODAY: char = '.';
pub const MARK_DISABLED: char = 'x';

// ANSI color codes
pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_REVERSE: &str = "\x1b[7m";
pub const COLOR_DIM: &str = "\x1b[2m";
pub const COLOR_RED: &str = "\x1b[91m";
pub const COLOR_TEAL: &str = "\x1b[96m";
pub const COLOR_SAND_YELLOW: &str = "\x1b[93m";
