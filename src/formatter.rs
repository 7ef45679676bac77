//! Month grid rendering and value formatting with localization and color support.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{Locale, NaiveDate};
use unicode_width::UnicodeWidthStr;

use crate::controller::RangeSelectionController;
use crate::error::ConfigError;
use crate::host::Picker;
use crate::types::{
    COLOR_DIM, COLOR_RED, COLOR_RESET, COLOR_REVERSE, COLOR_SAND_YELLOW, COLOR_TEAL, Cell,
    ColumnsMode, DEFAULT_COLUMNS, Direction, MARK_DISABLED, MARK_END, MARK_IN, MARK_SELECTED,
    MARK_START, MARK_TODAY, MAX_AUTO_COLUMNS, MONTHS_PER_YEAR, PickerContext, RangeRole,
    SelectionState, YearMonth,
};

/// Get system locale from environment (LC_ALL > LC_TIME > LANG > en_US).
pub fn get_system_locale() -> Locale {
    std::env::var("LC_ALL")
        .or_else(|_| std::env::var("LC_TIME"))
        .or_else(|_| std::env::var("LANG"))
        .ok()
        .and_then(|s| parse_locale(&s))
        .unwrap_or(Locale::en_US)
}

/// Parse a locale name such as `de_DE`, `de_DE.UTF-8` or `sr_RS@latin`.
pub fn parse_locale(s: &str) -> Option<Locale> {
    let name = s.split('.').next()?.split('@').next()?;
    name.parse().ok()
}

/// Nominative month names for locales whose `%B` is genitive.
fn nominative_months(locale: Locale) -> Option<[&'static str; 12]> {
    match locale {
        Locale::ru_RU => Some([
            "Январь",
            "Февраль",
            "Март",
            "Апрель",
            "Май",
            "Июнь",
            "Июль",
            "Август",
            "Сентябрь",
            "Октябрь",
            "Ноябрь",
            "Декабрь",
        ]),
        Locale::uk_UA => Some([
            "Січень",
            "Лютий",
            "Березень",
            "Квітень",
            "Травень",
            "Червень",
            "Липень",
            "Серпень",
            "Вересень",
            "Жовтень",
            "Листопад",
            "Грудень",
        ]),
        Locale::be_BY => Some([
            "Студзень",
            "Люты",
            "Сакавік",
            "Красавік",
            "Май",
            "Чэрвень",
            "Ліпень",
            "Жнівень",
            "Верасень",
            "Кастрычнік",
            "Лістапад",
            "Снежань",
        ]),
        Locale::pl_PL => Some([
            "Styczeń",
            "Luty",
            "Marzec",
            "Kwiecień",
            "Maj",
            "Czerwiec",
            "Lipiec",
            "Sierpień",
            "Wrzesień",
            "Październik",
            "Listopad",
            "Grudzień",
        ]),
        Locale::cs_CZ => Some([
            "Leden",
            "Únor",
            "Březen",
            "Duben",
            "Květen",
            "Červen",
            "Červenec",
            "Srpen",
            "Září",
            "Říjen",
            "Listopad",
            "Prosinec",
        ]),
        Locale::lt_LT => Some([
            "Sausis",
            "Vasaris",
            "Kovas",
            "Balandis",
            "Gegužė",
            "Birželis",
            "Liepa",
            "Rugpjūtis",
            "Rugsėjis",
            "Spalis",
            "Lapkritis",
            "Gruodis",
        ]),
        Locale::hr_HR => Some([
            "Siječanj",
            "Veljača",
            "Ožujak",
            "Travanj",
            "Svibanj",
            "Lipanj",
            "Srpanj",
            "Kolovoz",
            "Rujan",
            "Listopad",
            "Studeni",
            "Prosinac",
        ]),
        Locale::el_GR => Some([
            "Ιανουάριος",
            "Φεβρουάριος",
            "Μάρτιος",
            "Απρίλιος",
            "Μάιος",
            "Ιούνιος",
            "Ιούλιος",
            "Αύγουστος",
            "Σεπτέμβριος",
            "Οκτώβριος",
            "Νοέμβριος",
            "Δεκέμβριος",
        ]),
        _ => None,
    }
}

/// Get month name in nominative case. `month` is the zero-based month index.
pub fn get_month_name(month: u32, locale: Locale) -> String {
    let idx = (month % 12) as usize;
    if let Some(names) = nominative_months(locale) {
        return names[idx].to_string();
    }
    match NaiveDate::from_ymd_opt(2000, idx as u32 + 1, 1) {
        Some(date) => date.format_localized("%B", locale).to_string(),
        None => String::new(),
    }
}

/// Parse month from string (numeric 1-12 or name in English/Russian).
///
/// Returns the zero-based month index.
pub fn parse_month(s: &str) -> Option<u32> {
    if let Ok(n) = s.parse::<u32>()
        && (1..=12).contains(&n)
    {
        return Some(n - 1);
    }

    let s_lower = s.to_lowercase();
    let month_names: [(&str, u32); 35] = [
        // English full names
        ("january", 1),
        ("february", 2),
        ("march", 3),
        ("april", 4),
        ("may", 5),
        ("june", 6),
        ("july", 7),
        ("august", 8),
        ("september", 9),
        ("october", 10),
        ("november", 11),
        ("december", 12),
        // Russian full names
        ("январь", 1),
        ("февраль", 2),
        ("март", 3),
        ("апрель", 4),
        ("май", 5),
        ("июнь", 6),
        ("июль", 7),
        ("август", 8),
        ("сентябрь", 9),
        ("октябрь", 10),
        ("ноябрь", 11),
        ("декабрь", 12),
        // English short forms
        ("jan", 1),
        ("feb", 2),
        ("mar", 3),
        ("apr", 4),
        ("jun", 6),
        ("jul", 7),
        ("aug", 8),
        ("sep", 9),
        ("oct", 10),
        ("nov", 11),
        ("dec", 12),
    ];
    month_names
        .iter()
        .find(|(name, _)| *name == s_lower)
        .map(|(_, num)| *num - 1)
}

/// Reject strftime patterns chrono cannot render for a plain date.
pub fn validate_format(pattern: &str) -> Result<(), ConfigError> {
    let invalid = StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
        || try_format(YearMonth { year: 2000, month: 0 }, pattern, Locale::en_US).is_none();
    if invalid {
        return Err(ConfigError::InvalidFormat(pattern.to_string()));
    }
    Ok(())
}

/// Format a month with a strftime pattern, using the first day of the month.
pub fn format_year_month(month: YearMonth, pattern: &str, locale: Locale) -> String {
    try_format(month, pattern, locale).unwrap_or_else(|| month.to_string())
}

// Time and offset specifiers fail on a date without a time.
fn try_format(month: YearMonth, pattern: &str, locale: Locale) -> Option<String> {
    let date = month.first_day()?;
    let pattern = substitute_month_name(pattern, &get_month_name(month.month, locale));
    let mut out = String::new();
    write!(out, "{}", date.format_localized(&pattern, locale)).ok()?;
    Some(out)
}

/// Replace `%B` with the grid's month label so the value and the grid agree.
///
/// Other specifiers, including `%%`, pass through untouched.
pub fn substitute_month_name(pattern: &str, name: &str) -> String {
    let escaped = name.replace('%', "%%");
    let mut out = String::with_capacity(pattern.len() + escaped.len());
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('B') => out.push_str(&escaped),
            Some(next) => {
                out.push('%');
                out.push(next);
            }
            None => out.push('%'),
        }
    }
    out
}

/// Text the host writes into its input field for a selection.
///
/// Nothing is shown until a selection is completed.
pub fn format_selection(
    selection: SelectionState,
    pattern: &str,
    separator: &str,
    locale: Locale,
) -> String {
    match selection {
        SelectionState::Empty | SelectionState::PendingStart(_) => String::new(),
        SelectionState::Completed(range) if range.is_single() => {
            format_year_month(range.start(), pattern, locale)
        }
        SelectionState::Completed(range) => format!(
            "{}{}{}",
            format_year_month(range.start(), pattern, locale),
            separator,
            format_year_month(range.end(), pattern, locale)
        ),
    }
}

/// Center text within a specified width, accounting for Unicode character widths.
pub fn center_text(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }
    let total_padding = width - text_width;
    let left_padding = total_padding.div_ceil(2);
    let right_padding = total_padding - left_padding;
    format!(
        "{}{}{}",
        " ".repeat(left_padding),
        text,
        " ".repeat(right_padding)
    )
}

/// Width of one cell: the widest month name plus two markers and a space each side.
pub fn cell_width(locale: Locale) -> usize {
    (0..MONTHS_PER_YEAR)
        .map(|m| get_month_name(m, locale).width())
        .max()
        .unwrap_or(0)
        + 4
}

/// Marker pair for plain output: range role or selection on the left, today or disabled on the right.
pub fn cell_markers(cell: &Cell) -> (char, char) {
    let left = match cell.range_role {
        RangeRole::Start => MARK_START,
        RangeRole::End => MARK_END,
        RangeRole::In => MARK_IN,
        RangeRole::None if cell.is_selected => MARK_SELECTED,
        RangeRole::None => ' ',
    };
    let right = if cell.disabled {
        MARK_DISABLED
    } else if cell.is_today {
        MARK_TODAY
    } else {
        ' '
    };
    (left, right)
}

/// Format one month cell padded to `width`.
///
/// Color priority: selected/endpoint > in range > today > disabled > regular
pub fn format_cell(cell: &Cell, locale: Locale, width: usize, color: bool) -> String {
    let name = get_month_name(cell.month, locale);
    if !color {
        let (left, right) = cell_markers(cell);
        return center_text(&format!("{}{}{}", left, name, right), width);
    }

    let text = center_text(&name, width);
    let code = if cell.is_selected || matches!(cell.range_role, RangeRole::Start | RangeRole::End)
    {
        Some(COLOR_REVERSE)
    } else if cell.range_role == RangeRole::In {
        Some(COLOR_TEAL)
    } else if cell.is_today {
        Some(COLOR_RED)
    } else if cell.disabled {
        Some(COLOR_DIM)
    } else {
        None
    };
    match code {
        Some(code) => format!("{}{}{}", code, text, COLOR_RESET),
        None => text,
    }
}

/// Format the navigation header: year centered between the prev/next controls.
///
/// A disabled control is rendered as a blank.
pub fn format_nav_header(
    year: i32,
    prev_disabled: bool,
    next_disabled: bool,
    width: usize,
    color: bool,
) -> String {
    let prev = if prev_disabled { ' ' } else { '<' };
    let next = if next_disabled { ' ' } else { '>' };
    let inner = center_text(&year.to_string(), width.saturating_sub(2));
    if color {
        format!("{}{}{}{}{}", prev, COLOR_SAND_YELLOW, inner, COLOR_RESET, next)
    } else {
        format!("{}{}{}", prev, inner, next)
    }
}

/// Resolve the number of cells per row.
pub fn months_per_row(columns: ColumnsMode, cell_width: usize) -> u32 {
    match columns {
        ColumnsMode::Fixed(n) => n.clamp(1, MONTHS_PER_YEAR),
        ColumnsMode::Auto => match get_terminal_width() {
            Some(term_width) if cell_width > 0 => {
                (term_width / cell_width as u32).clamp(1, MAX_AUTO_COLUMNS)
            }
            _ => DEFAULT_COLUMNS,
        },
    }
}

/// Format the displayed year as lines: the nav header followed by rows of cells.
pub fn format_month_grid(
    controller: &RangeSelectionController,
    locale: Locale,
    columns: u32,
    color: bool,
) -> Vec<String> {
    let width = cell_width(locale);
    let columns = columns.clamp(1, MONTHS_PER_YEAR) as usize;
    let cells = controller.cells();

    let mut lines = Vec::with_capacity(1 + cells.len().div_ceil(columns));
    lines.push(format_nav_header(
        controller.window().year,
        controller.nav_disabled(Direction::Prev),
        controller.nav_disabled(Direction::Next),
        width * columns,
        color,
    ));

    for row in cells.chunks(columns) {
        let line: String = row
            .iter()
            .map(|cell| format_cell(cell, locale, width, color))
            .collect();
        lines.push(line.trim_end().to_string());
    }

    lines
}

/// Print the grid followed by the input values and the open state.
pub fn print_picker(ctx: &PickerContext, picker: &Picker) {
    let controller = picker.controller();
    let columns = months_per_row(ctx.columns, cell_width(ctx.locale));
    for line in format_month_grid(controller, ctx.locale, columns, ctx.color) {
        println!("{}", line);
    }
    println!("value: {}", picker.input_value());
    if let Some(alt) = picker.alt_input_value() {
        println!("alt: {}", alt);
    }
    println!("picker: {}", if picker.is_open() { "open" } else { "closed" });
}

/// Get terminal width using terminal_size crate.
fn get_terminal_width() -> Option<u32> {
    terminal_size::terminal_size().map(|(w, _)| w.0 as u32)
}
