//! Calendar dates for published puzzles
//!
//! A `PuzzleDate` is a plain calendar day with no time zone attached, so a puzzle
//! dated 2026-01-18 renders as January 18 wherever the site is built.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Error type for unparseable or impossible dates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    Format(String),
    OutOfRange(String),
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format(input) => write!(f, "Expected a date as YYYY-MM-DD, got '{input}'"),
            Self::OutOfRange(input) => write!(f, "No such calendar date: {input}"),
        }
    }
}

impl std::error::Error for DateError {}

/// A calendar date (proleptic Gregorian, years 1-9999)
///
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PuzzleDate {
    year: u16,
    month: u8,
    day: u8,
}

const fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

const fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

impl PuzzleDate {
    /// The Unix epoch, used when a feed has no entries
    pub const EPOCH: Self = Self {
        year: 1970,
        month: 1,
        day: 1,
    };

    /// Create a date, validating month and day
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` for year 0, months outside 1-12 or days past the
    /// end of the month.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        if !(1..=9999).contains(&year)
            || !(1..=12).contains(&month)
            || day == 0
            || day > days_in_month(year, month)
        {
            return Err(DateError::OutOfRange(format!(
                "{year:04}-{month:02}-{day:02}"
            )));
        }
        Ok(Self { year, month, day })
    }

    #[must_use]
    pub const fn year(self) -> u16 {
        self.year
    }

    #[must_use]
    pub const fn month(self) -> u8 {
        self.month
    }

    #[must_use]
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Day of week, 0 = Sunday
    #[must_use]
    pub fn weekday(self) -> usize {
        // Sakamoto's method
        const OFFSETS: [u32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
        let y = u32::from(self.year) - u32::from(self.month < 3);
        let index = (y + y / 4 - y / 100 + y / 400
            + OFFSETS[usize::from(self.month - 1)]
            + u32::from(self.day))
            % 7;
        index as usize
    }

    fn weekday_name(self) -> &'static str {
        WEEKDAYS[self.weekday()]
    }

    fn month_name(self) -> &'static str {
        MONTHS[usize::from(self.month - 1)]
    }

    /// Long display form, e.g. `Saturday, January 18, 2025`
    #[must_use]
    pub fn format_long(self) -> String {
        format!(
            "{}, {} {}, {}",
            self.weekday_name(),
            self.month_name(),
            self.day,
            self.year
        )
    }

    /// Archive grouping form, e.g. `January 2026`
    #[must_use]
    pub fn format_month_year(self) -> String {
        format!("{} {}", self.month_name(), self.year)
    }

    /// Short display form, e.g. `Sat, Jan 18`
    #[must_use]
    pub fn format_short(self) -> String {
        format!(
            "{}, {} {}",
            &self.weekday_name()[..3],
            &self.month_name()[..3],
            self.day
        )
    }

    /// RFC 822 timestamp at midnight UTC, as used by RSS `pubDate`
    #[must_use]
    pub fn to_rfc822(self) -> String {
        format!(
            "{}, {:02} {} {:04} 00:00:00 GMT",
            &self.weekday_name()[..3],
            self.day,
            &self.month_name()[..3],
            self.year
        )
    }
}

impl fmt::Display for PuzzleDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for PuzzleDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let format_error = || DateError::Format(trimmed.to_string());

        let mut parts = trimmed.splitn(3, '-');
        let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(format_error());
        };

        if year.len() != 4 || month.len() != 2 || day.len() != 2 {
            return Err(format_error());
        }

        let year: u16 = year.parse().map_err(|_| format_error())?;
        let month: u8 = month.parse().map_err(|_| format_error())?;
        let day: u8 = day.parse().map_err(|_| format_error())?;
        Self::new(year, month, day)
    }
}

impl TryFrom<String> for PuzzleDate {
    type Error = DateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PuzzleDate> for String {
    fn from(date: PuzzleDate) -> Self {
        date.to_string()
    }
}
