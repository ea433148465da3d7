//! Date/time formatting used by the date and time element previews.
//!
//! The catalog never reads the clock directly; it is handed a
//! [`DateTimeSource`] at construction so previews can be pinned in tests.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use std::fmt::Write;

/// Formats "now" with a strftime-style pattern.
pub trait DateTimeSource: Send + Sync {
    /// Format the current instant. Must not fail for any `pattern`.
    fn format(&self, pattern: &str) -> String;
}

/// Local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl DateTimeSource for SystemClock {
    fn format(&self, pattern: &str) -> String {
        format_datetime(&Local::now(), pattern)
    }
}

/// Clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    at: NaiveDateTime,
}

impl FixedClock {
    pub fn new(at: NaiveDateTime) -> Self {
        Self { at }
    }

    /// Build from calendar fields; `None` when the fields are out of range.
    pub fn from_ymd_hms_milli(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        milli: u32,
    ) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)?
            .and_hms_milli_opt(hour, minute, second, milli)
            .map(Self::new)
    }
}

impl DateTimeSource for FixedClock {
    fn format(&self, pattern: &str) -> String {
        format_naive(&self.at, pattern)
    }
}

fn format_datetime<Tz: TimeZone>(at: &DateTime<Tz>, pattern: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let Some(items) = parse_pattern(pattern) else {
        return pattern.to_string();
    };
    let mut out = String::new();
    match write!(out, "{}", at.format_with_items(items.into_iter())) {
        Ok(()) => out,
        Err(_) => pattern.to_string(),
    }
}

fn format_naive(at: &NaiveDateTime, pattern: &str) -> String {
    let Some(items) = parse_pattern(pattern) else {
        return pattern.to_string();
    };
    let mut out = String::new();
    // Timezone specifiers have nothing to render on a naive instant.
    match write!(out, "{}", at.format_with_items(items.into_iter())) {
        Ok(()) => out,
        Err(_) => pattern.to_string(),
    }
}

/// Parse a strftime pattern; `None` when it contains an invalid specifier.
fn parse_pattern(pattern: &str) -> Option<Vec<Item<'_>>> {
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        None
    } else {
        Some(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed() -> FixedClock {
        FixedClock::from_ymd_hms_milli(2024, 2, 28, 14, 22, 3, 45).expect("valid instant")
    }

    #[test]
    fn fixed_clock_formats_common_patterns() {
        let clock = fixed();
        assert_eq!(clock.format("%Y-%m-%d"), "2024-02-28");
        assert_eq!(clock.format("%H:%M:%S"), "14:22:03");
        assert_eq!(clock.format("%a %b %d"), "Wed Feb 28");
        assert_eq!(clock.format("%I:%M %p"), "02:22 PM");
        assert_eq!(clock.format("%H:%M:%S%.3f"), "14:22:03.045");
    }

    #[test]
    fn invalid_pattern_is_returned_verbatim() {
        assert_eq!(fixed().format("%Q!"), "%Q!");
    }

    #[test]
    fn timezone_specifier_on_naive_instant_does_not_panic() {
        assert!(!fixed().format("%z").is_empty());
    }

    #[test]
    fn out_of_range_fields_are_rejected() {
        assert!(FixedClock::from_ymd_hms_milli(2024, 2, 30, 0, 0, 0, 0).is_none());
    }

    #[test]
    fn system_clock_produces_text() {
        assert_eq!(SystemClock.format("%Y").len(), 4);
    }
}
