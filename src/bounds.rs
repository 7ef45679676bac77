//! Min/max bounds at month granularity.

use chrono::{Datelike, NaiveDate};

use crate::error::ConfigError;
use crate::types::{Direction, MONTHS_PER_YEAR, YearMonth};

/// Optional lower and upper bound, both inclusive. The day of month is irrelevant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    min: Option<YearMonth>,
    max: Option<YearMonth>,
}

impl Bounds {
    /// No bounds besides the representable calendar.
    pub fn unbounded() -> Self {
        Bounds::default()
    }

    /// Build bounds, rejecting a minimum that lies after the maximum.
    pub fn new(min: Option<YearMonth>, max: Option<YearMonth>) -> Result<Self, ConfigError> {
        if let (Some(min), Some(max)) = (min, max)
            && min > max
        {
            return Err(ConfigError::InvertedBounds { min, max });
        }
        Ok(Bounds { min, max })
    }

    pub fn from_dates(min: Option<NaiveDate>, max: Option<NaiveDate>) -> Result<Self, ConfigError> {
        Bounds::new(min.map(YearMonth::from_date), max.map(YearMonth::from_date))
    }

    pub fn min(&self) -> Option<YearMonth> {
        self.min
    }

    pub fn max(&self) -> Option<YearMonth> {
        self.max
    }

    /// Whether a month is selectable.
    pub fn contains(&self, month: YearMonth) -> bool {
        self.contains_year(month.year)
            && self.min.is_none_or(|min| month >= min)
            && self.max.is_none_or(|max| month <= max)
    }

    /// Whether at least one month of `year` is selectable.
    pub fn contains_year(&self, year: i32) -> bool {
        // Years chrono cannot represent are never displayable.
        (NaiveDate::MIN.year() < year && year < NaiveDate::MAX.year())
            && self.min.is_none_or(|min| year >= min.year)
            && self.max.is_none_or(|max| year <= max.year)
    }

    /// Pull a month into the bounds.
    pub fn clamp(&self, month: YearMonth) -> YearMonth {
        let year = month
            .year
            .clamp(NaiveDate::MIN.year() + 1, NaiveDate::MAX.year() - 1);
        let mut month = YearMonth {
            year,
            month: month.month.min(MONTHS_PER_YEAR - 1),
        };
        if let Some(min) = self.min
            && month < min
        {
            month = min;
        }
        if let Some(max) = self.max
            && month > max
        {
            month = max;
        }
        month
    }

    /// True if moving one year in `direction` from `year` would leave every month out of bounds.
    pub fn is_disabled(&self, year: i32, direction: Direction) -> bool {
        year.checked_add(direction.delta())
            .is_none_or(|target| !self.contains_year(target))
    }
}

