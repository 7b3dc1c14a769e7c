use crate::error::TimeFormatError;
use chrono::NaiveTime;
use lazy_static::lazy_static;
use regex::Regex;
use std::str::FromStr;

const SEPARATOR: &str = " to ";

lazy_static! {
    static ref TIME_OF_DAY: Regex =
        Regex::new(r"(?i)^(0?[1-9]|1[0-2]):([0-5][0-9]) ([AP]M)$").unwrap();
}

/// A window on a single day written as `H:MM AM/PM to H:MM AM/PM`.
///
/// `start` is inclusive and `end` is exclusive. Parsing does not require
/// `start < end`; see [`TimeRange::is_ordered`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeRange {
    pub fn parse(text: &str) -> Result<Self, TimeFormatError> {
        let (start, end) = text
            .trim()
            .split_once(SEPARATOR)
            .filter(|(start, end)| !start.is_empty() && !end.is_empty())
            .ok_or(TimeFormatError::MissingSeparator)?;

        Ok(Self {
            start: parse_time_of_day(start)?,
            end: parse_time_of_day(end)?,
        })
    }

    pub fn is_ordered(&self) -> bool {
        self.start < self.end
    }

    /// Half-open overlap test. Ranges that only touch do not overlap and
    /// inverted ranges are compared as given.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && self.end > other.start
    }
}

impl FromStr for TimeRange {
    type Err = TimeFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_time_of_day(text: &str) -> Result<NaiveTime, TimeFormatError> {
    let bad_component = || TimeFormatError::BadComponent(text.to_string());

    let captures = TIME_OF_DAY.captures(text).ok_or_else(bad_component)?;
    let hour: u32 = captures[1].parse().map_err(|_| bad_component())?;
    let minute: u32 = captures[2].parse().map_err(|_| bad_component())?;
    let afternoon = captures[3].eq_ignore_ascii_case("PM");

    let hour = match (hour, afternoon) {
        (12, false) => 0,
        (12, true) => 12,
        (hour, false) => hour,
        (hour, true) => hour + 12,
    };

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(bad_component)
}
