//! Human-readable dates for the form's date picker and the summary.

use chrono::{Datelike, NaiveDate};

/// `August 5th, 2025`
pub fn long_date(date: NaiveDate) -> String {
    format!(
        "{} {}, {}",
        date.format("%B"),
        ordinal(date.day()),
        date.year()
    )
}

/// `Tuesday, August 5th, 2025`
pub fn full_date(date: NaiveDate) -> String {
    format!("{}, {}", date.format("%A"), long_date(date))
}

fn ordinal(day: u32) -> String {
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{day}{suffix}")
}
