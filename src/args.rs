//! Command-line argument parsing using clap.
//!
//! Events follow the options: `monthselect --mode range open click:2 hover:6`

use chrono::NaiveDate;
use clap::{Parser, ValueHint};
use std::io::IsTerminal;

use crate::bounds::Bounds;
use crate::error::ConfigError;
use crate::formatter::{get_system_locale, parse_locale, validate_format};
use crate::host::Event;
use crate::types::{
    COLOR_ENABLED_BY_DEFAULT, ColumnsMode, DEFAULT_COLUMNS, DEFAULT_DATE_FORMAT,
    DEFAULT_RANGE_SEPARATOR, MONTHS_PER_YEAR, PickerContext, SelectionMode, YearMonth,
};

#[derive(Parser, Debug)]
#[command(name = "monthselect")]
#[command(about = "Pick a month or a range of months", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Selection mode (single or range).
    #[arg(
        long,
        default_value = "single",
        help_heading = "Selection options",
        value_name = "mode"
    )]
    pub mode: SelectionMode,

    /// Earliest selectable month (YYYY-MM-DD or YYYY-MM).
    #[arg(long, help_heading = "Selection options", value_name = "date")]
    pub min_date: Option<String>,

    /// Latest selectable month (YYYY-MM-DD or YYYY-MM).
    #[arg(long, help_heading = "Selection options", value_name = "date")]
    pub max_date: Option<String>,

    /// Preselected month; give it twice in range mode for a range.
    #[arg(long, help_heading = "Selection options", value_name = "date")]
    pub default_date: Vec<String>,

    /// strftime pattern for the input value.
    #[arg(
        long,
        default_value = DEFAULT_DATE_FORMAT,
        help_heading = "Output options",
        value_name = "pattern"
    )]
    pub date_format: String,

    /// strftime pattern for an alternate input value.
    #[arg(long, help_heading = "Output options", value_name = "pattern")]
    pub alt_format: Option<String>,

    /// Text between the two ends of a range value.
    #[arg(
        long,
        default_value = DEFAULT_RANGE_SEPARATOR,
        help_heading = "Output options",
        value_name = "text"
    )]
    pub range_separator: String,

    /// Locale for month names (defaults to LC_ALL, LC_TIME or LANG).
    #[arg(long, help_heading = "Output options", value_name = "locale")]
    pub locale: Option<String>,

    /// Number of columns in the month grid (or "auto" for terminal width).
    #[arg(
        short = 'c',
        long = "columns",
        help_heading = "Output options",
        value_name = "width"
    )]
    pub columns: Option<String>,

    /// Disable colorized output.
    #[arg(long, help_heading = "Output options")]
    pub color: bool,

    /// Render the picker after every event.
    #[arg(long, help_heading = "Output options")]
    pub trace: bool,

    /// Read additional events from standard input, one per line.
    #[arg(long, help_heading = "Event options")]
    pub stdin: bool,

    /// Events to replay: open, close, prev, next, click:M, hover:M, outside, blur, focus.
    #[arg(value_name = "event", value_hint = ValueHint::Other)]
    pub events: Vec<String>,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Replay interaction events against a month picker and show the result.

Months in click:M and hover:M are 1-12 or month names, within the displayed year.

Examples:
  monthselect                                   Show the current year
  monthselect --default-date 2019-04-20         Preselect April 2019
  monthselect --mode range click:2 click:6      Select February to June
  monthselect --mode range click:2 hover:6      Preview a range
  monthselect --min-date 2025-03 prev prev      Navigation stops at the bound
  monthselect --locale de_DE --date-format %m.%y --default-date 2019-03-20";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }
}

impl PickerContext {
    pub fn new(args: &Args) -> Result<Self, ConfigError> {
        let color = !args.color && COLOR_ENABLED_BY_DEFAULT && std::io::stdout().is_terminal();

        let columns = match args.columns.as_deref() {
            Some("auto") => ColumnsMode::Auto,
            None => ColumnsMode::Fixed(DEFAULT_COLUMNS),
            Some(s) => {
                let n = s
                    .parse::<u32>()
                    .map_err(|_| ConfigError::InvalidColumns(s.to_string()))?;
                if !(1..=MONTHS_PER_YEAR).contains(&n) {
                    return Err(ConfigError::InvalidColumns(s.to_string()));
                }
                ColumnsMode::Fixed(n)
            }
        };

        let locale = match args.locale.as_deref() {
            Some(s) => parse_locale(s).ok_or_else(|| ConfigError::InvalidLocale(s.to_string()))?,
            None => get_system_locale(),
        };

        validate_format(&args.date_format)?;
        if let Some(alt) = &args.alt_format {
            validate_format(alt)?;
        }

        let min = args.min_date.as_deref().map(parse_date).transpose()?;
        let max = args.max_date.as_deref().map(parse_date).transpose()?;
        let bounds = Bounds::from_dates(min, max)?;

        let max_defaults = match args.mode {
            SelectionMode::Single => 1,
            SelectionMode::Range => 2,
        };
        if args.default_date.len() > max_defaults {
            return Err(ConfigError::TooManyDefaults {
                mode: args.mode,
                count: args.default_date.len(),
            });
        }

        let default_dates = args
            .default_date
            .iter()
            .map(|s| parse_date(s).map(YearMonth::from_date))
            .collect::<Result<Vec<_>, _>>()?;
        if let Some(outside) = default_dates.iter().find(|d| !bounds.contains(**d)) {
            return Err(ConfigError::DefaultOutOfBounds(*outside));
        }

        Ok(PickerContext {
            mode: args.mode,
            bounds,
            default_dates,
            locale,
            date_format: args.date_format.clone(),
            alt_format: args.alt_format.clone(),
            range_separator: args.range_separator.clone(),
            color,
            columns,
            trace: args.trace,
        })
    }
}

/// Parse a date as YYYY-MM-DD, or YYYY-MM meaning the first of the month.
pub fn parse_date(s: &str) -> Result<NaiveDate, ConfigError> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d"))
        .map_err(|_| ConfigError::InvalidDate(s.to_string()))
}

/// Parse the positional events.
pub fn parse_events(args: &Args) -> Result<Vec<Event>, ConfigError> {
    args.events.iter().map(|s| s.parse()).collect()
}
