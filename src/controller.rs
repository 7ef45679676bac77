//! Range selection state machine behind the month grid.
//!
//! The controller owns the displayed year, the selection and the hovered cell.
//! Cell descriptors are a pure function of that state plus today's date, so a
//! render never depends on what a previous render produced.

use log::{debug, trace};

use crate::bounds::Bounds;
use crate::clock::Clock;
use crate::types::{
    Cell, ClickOutcome, Direction, MONTHS_PER_YEAR, MonthRange, RangeRole, SelectionMode,
    SelectionState, YearMonth,
};

pub struct RangeSelectionController {
    mode: SelectionMode,
    bounds: Bounds,
    window: YearMonth,
    selection: SelectionState,
    hovered: Option<YearMonth>,
    clock: Box<dyn Clock>,
}

impl RangeSelectionController {
    /// Create a controller. The initial window is clamped into `bounds`.
    pub fn new(
        mode: SelectionMode,
        bounds: Bounds,
        window: YearMonth,
        selection: SelectionState,
        clock: Box<dyn Clock>,
    ) -> Self {
        let window = bounds.clamp(window);
        debug!("controller: mode={mode:?} window={window} selection={selection:?}");
        RangeSelectionController {
            mode,
            bounds,
            window,
            selection,
            hovered: None,
            clock,
        }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The navigation cursor.
    pub fn window(&self) -> YearMonth {
        self.window
    }

    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    pub fn hovered(&self) -> Option<YearMonth> {
        self.hovered
    }

    /// Move the displayed year by one. Returns false if the move is blocked by the bounds.
    pub fn navigate(&mut self, direction: Direction) -> bool {
        if self.is_disabled(self.window.year, direction) {
            trace!("navigate {direction:?} from {} blocked", self.window.year);
            return false;
        }
        let target = YearMonth {
            year: self.window.year + direction.delta(),
            month: self.window.month,
        };
        self.window = self.bounds.clamp(target);
        debug!("navigate {direction:?}: window={}", self.window);
        true
    }

    /// Handle a click on a month cell.
    pub fn on_cell_click(&mut self, month: u32, year: i32) -> ClickOutcome {
        let Some(clicked) = YearMonth::new(year, month) else {
            trace!("click on invalid month index {month}");
            return ClickOutcome::Ignored;
        };
        if !self.bounds.contains(clicked) {
            trace!("click on disabled cell {clicked}");
            return ClickOutcome::Ignored;
        }

        self.hovered = None;
        let outcome = match (self.mode, self.selection) {
            (SelectionMode::Single, _) => {
                self.selection = SelectionState::Completed(MonthRange::single(clicked));
                ClickOutcome::Close
            }
            (SelectionMode::Range, SelectionState::PendingStart(start)) => {
                self.selection = SelectionState::Completed(MonthRange::new(start, clicked));
                ClickOutcome::Close
            }
            (SelectionMode::Range, SelectionState::Empty | SelectionState::Completed(_)) => {
                self.selection = SelectionState::PendingStart(clicked);
                ClickOutcome::KeepOpen
            }
        };
        debug!("click {clicked}: selection={:?} -> {outcome:?}", self.selection);
        outcome
    }

    /// Preview a tentative range while the first endpoint is pending.
    ///
    /// Never touches the selection itself.
    pub fn on_cell_hover(&mut self, month: u32, year: i32) {
        if self.mode != SelectionMode::Range
            || !matches!(self.selection, SelectionState::PendingStart(_))
        {
            return;
        }
        match YearMonth::new(year, month) {
            Some(hovered) if self.bounds.contains(hovered) => {
                trace!("hover {hovered}");
                self.hovered = Some(hovered);
            }
            _ => trace!("hover on disabled cell {year}/{month} ignored"),
        }
    }

    /// Cancel a pending range. Completed selections are kept.
    ///
    /// Returns true if a pending start was dropped.
    pub fn on_abandon(&mut self) -> bool {
        match self.selection {
            SelectionState::PendingStart(start) => {
                debug!("abandon pending range starting at {start}");
                self.selection = SelectionState::Empty;
                self.hovered = None;
                true
            }
            SelectionState::Empty | SelectionState::Completed(_) => false,
        }
    }

    /// True if navigating in `direction` from `year` would leave every month out of bounds.
    pub fn is_disabled(&self, year: i32, direction: Direction) -> bool {
        self.bounds.is_disabled(year, direction)
    }

    /// Whether the nav control for `direction` is disabled at the current window.
    pub fn nav_disabled(&self, direction: Direction) -> bool {
        self.is_disabled(self.window.year, direction)
    }

    /// Describe one cell using the current state and today's date.
    ///
    /// A month index past December yields a blank disabled cell, matching the
    /// click and hover handlers that reject it.
    pub fn cell_descriptor(&self, month: u32, year: i32) -> Cell {
        let Some(cell) = YearMonth::new(year, month) else {
            return Cell {
                month,
                year,
                is_today: false,
                is_selected: false,
                range_role: RangeRole::None,
                disabled: true,
            };
        };
        let today = YearMonth::from_date(self.clock.today());
        self.describe(cell, today)
    }

    /// Descriptors for the twelve months of the displayed year.
    pub fn cells(&self) -> [Cell; MONTHS_PER_YEAR as usize] {
        let today = YearMonth::from_date(self.clock.today());
        let year = self.window.year;
        std::array::from_fn(|i| self.describe(YearMonth { year, month: i as u32 }, today))
    }

    /// Range currently highlighted: the completed range, or the pending start
    /// stretched to the hovered cell.
    pub fn highlighted_range(&self) -> Option<MonthRange> {
        match self.selection {
            SelectionState::Empty => None,
            SelectionState::PendingStart(start) => {
                Some(MonthRange::new(start, self.hovered.unwrap_or(start)))
            }
            SelectionState::Completed(range) => Some(range),
        }
    }

    fn describe(&self, month: YearMonth, today: YearMonth) -> Cell {
        let is_selected = match self.selection {
            SelectionState::Completed(range) => range.start() == month || range.end() == month,
            SelectionState::Empty | SelectionState::PendingStart(_) => false,
        };
        let range_role = match self.mode {
            SelectionMode::Single => RangeRole::None,
            SelectionMode::Range => self
                .highlighted_range()
                .map_or(RangeRole::None, |range| range.role_of(month)),
        };
        Cell {
            month: month.month,
            year: month.year,
            is_today: month == today,
            is_selected,
            range_role,
            disabled: !self.bounds.contains(month),
        }
    }
}
