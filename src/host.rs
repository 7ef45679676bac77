//! The picker host: owns one controller and turns interaction events into
//! controller operations, an open/closed flag and input values.

use std::fmt;
use std::str::FromStr;

use chrono::Locale;
use log::debug;

use crate::clock::Clock;
use crate::controller::RangeSelectionController;
use crate::error::ConfigError;
use crate::formatter::{format_selection, parse_month};
use crate::types::{
    ClickOutcome, Direction, MonthRange, PickerContext, SelectionMode, SelectionState, YearMonth,
};

/// A discrete interaction event. Cell events carry a zero-based month index
/// within the displayed year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Click on the input field.
    Open,
    Close,
    Prev,
    Next,
    Click(u32),
    Hover(u32),
    /// Click anywhere outside the picker.
    OutsideClick,
    /// Window lost focus.
    Blur,
    /// Window regained focus.
    Focus,
}

impl FromStr for Event {
    type Err = ConfigError;

    /// Parse `open`, `close`, `prev`, `next`, `outside`, `blur`, `focus`,
    /// `click:M` or `hover:M` where M is 1-12 or a month name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidEvent(s.to_string());
        let s_lower = s.trim().to_lowercase();
        if let Some((kind, month)) = s_lower.split_once(':') {
            let month = parse_month(month.trim()).ok_or_else(invalid)?;
            return match kind.trim() {
                "click" => Ok(Event::Click(month)),
                "hover" => Ok(Event::Hover(month)),
                _ => Err(invalid()),
            };
        }
        match s_lower.as_str() {
            "open" => Ok(Event::Open),
            "close" => Ok(Event::Close),
            "prev" => Ok(Event::Prev),
            "next" => Ok(Event::Next),
            "outside" => Ok(Event::OutsideClick),
            "blur" => Ok(Event::Blur),
            "focus" => Ok(Event::Focus),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Open => write!(f, "open"),
            Event::Close => write!(f, "close"),
            Event::Prev => write!(f, "prev"),
            Event::Next => write!(f, "next"),
            Event::Click(m) => write!(f, "click:{}", m + 1),
            Event::Hover(m) => write!(f, "hover:{}", m + 1),
            Event::OutsideClick => write!(f, "outside"),
            Event::Blur => write!(f, "blur"),
            Event::Focus => write!(f, "focus"),
        }
    }
}

pub struct Picker {
    controller: RangeSelectionController,
    open: bool,
    blurred: bool,
    locale: Locale,
    date_format: String,
    alt_format: Option<String>,
    range_separator: String,
}

impl Picker {
    /// Build a closed picker from a validated context.
    ///
    /// The display starts at the first default date, or at today.
    pub fn new(ctx: &PickerContext, clock: Box<dyn Clock>) -> Self {
        let window = ctx
            .default_dates
            .first()
            .copied()
            .unwrap_or_else(|| YearMonth::from_date(clock.today()));
        let controller = RangeSelectionController::new(
            ctx.mode,
            ctx.bounds,
            window,
            initial_selection(ctx.mode, &ctx.default_dates),
            clock,
        );
        Picker {
            controller,
            open: false,
            blurred: false,
            locale: ctx.locale,
            date_format: ctx.date_format.clone(),
            alt_format: ctx.alt_format.clone(),
            range_separator: ctx.range_separator.clone(),
        }
    }

    pub fn controller(&self) -> &RangeSelectionController {
        &self.controller
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn dispatch(&mut self, event: Event) {
        debug!("dispatch {event}");
        let year = self.controller.window().year;
        match event {
            Event::Open => self.open = true,
            Event::Close => self.open = false,
            Event::Prev => {
                self.controller.navigate(Direction::Prev);
            }
            Event::Next => {
                self.controller.navigate(Direction::Next);
            }
            Event::Click(month) => {
                if self.controller.on_cell_click(month, year) == ClickOutcome::Close {
                    self.open = false;
                }
            }
            Event::Hover(month) => self.controller.on_cell_hover(month, year),
            Event::OutsideClick => {
                self.controller.on_abandon();
                self.open = false;
            }
            Event::Blur => self.blurred = true,
            Event::Focus => {
                if self.blurred {
                    self.controller.on_abandon();
                }
                self.blurred = false;
            }
        }
    }

    /// Value of the input field.
    pub fn input_value(&self) -> String {
        format_selection(
            self.controller.selection(),
            &self.date_format,
            &self.range_separator,
            self.locale,
        )
    }

    /// Value of the alternate input, when an alternate format is configured.
    pub fn alt_input_value(&self) -> Option<String> {
        self.alt_format.as_deref().map(|pattern| {
            format_selection(
                self.controller.selection(),
                pattern,
                &self.range_separator,
                self.locale,
            )
        })
    }
}

/// Selection implied by the default dates: one month, or a range in range mode.
pub fn initial_selection(mode: SelectionMode, defaults: &[YearMonth]) -> SelectionState {
    match (mode, defaults) {
        (_, []) => SelectionState::Empty,
        (SelectionMode::Range, [start, end, ..]) => {
            SelectionState::Completed(MonthRange::new(*start, *end))
        }
        (_, [month, ..]) => SelectionState::Completed(MonthRange::single(*month)),
    }
}
