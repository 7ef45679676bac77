//! Month/year picker with single-month and range selection.
//!
//! Features:
//! - Year navigation honouring min/max bounds
//! - Single month or month range selection with hover preview
//! - Abandoning a half-finished range on outside click or blur/focus
//! - Localized month names and strftime value formatting

pub mod args;
pub mod bounds;
pub mod clock;
pub mod controller;
pub mod error;
pub mod formatter;
pub mod host;
pub mod types;
