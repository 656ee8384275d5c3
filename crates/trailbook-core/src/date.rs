//! Trip date tokens such as "September 1st"

use crate::limits::MIN_TRIP_DATE_LEN;
use chrono::Month;
use serde::{Serialize, Serializer};
use std::fmt;

/// Which end of a trip a date belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DateField {
    #[serde(rename = "start_date")]
    Start,
    #[serde(rename = "end_date")]
    End,
}

impl DateField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start_date",
            Self::End => "end_date",
        }
    }
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated trip date token.
///
/// The format is a capitalized word, a single space, a day number from 1 to
/// 31 without a leading zero, and a two-letter lowercase suffix. The whole
/// token is at least 7 characters long. The word is not required to be a
/// real month name and the suffix is not checked against the day, so
/// `"Foo 2st"` is accepted while `"september 1st"` is not.
///
/// # Examples
///
/// ```
/// use trailbook_core::TripDate;
///
/// let date = TripDate::parse("September 1st").unwrap();
/// assert_eq!(date.month_name(), "September");
/// assert_eq!(date.day(), 1);
/// assert_eq!(date.suffix(), "st");
///
/// assert!(TripDate::parse("September 1").is_none());
/// assert!(TripDate::parse("2021-09-01").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TripDate {
    raw: String,
    month_len: usize,
    day: u8,
}

impl TripDate {
    /// Parse a date token, returning `None` if it does not match the format.
    pub fn parse(s: &str) -> Option<Self> {
        if s.chars().count() < MIN_TRIP_DATE_LEN {
            return None;
        }

        let (month, rest) = s.split_once(' ')?;

        // Month: one uppercase letter, then lowercase letters
        let mut letters = month.chars();
        let first = letters.next()?;
        if !first.is_ascii_uppercase() || !letters.all(|c| c.is_ascii_lowercase()) {
            return None;
        }

        // Day: 1-31, no leading zero
        let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        let (digits, suffix) = rest.split_at(digits_len);
        if digits.is_empty() || digits.len() > 2 || digits.starts_with('0') {
            return None;
        }
        let day: u8 = digits.parse().ok()?;
        if !(1..=31).contains(&day) {
            return None;
        }

        // Suffix: exactly two lowercase letters
        if suffix.len() != 2 || !suffix.bytes().all(|b| b.is_ascii_lowercase()) {
            return None;
        }

        Some(Self {
            raw: s.to_string(),
            month_len: month.len(),
            day,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The capitalized word before the day number.
    pub fn month_name(&self) -> &str {
        &self.raw[..self.month_len]
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    /// The two letters after the day number.
    pub fn suffix(&self) -> &str {
        &self.raw[self.raw.len() - 2..]
    }

    /// The calendar month, if the word is an English month name or its
    /// three-letter abbreviation.
    pub fn month(&self) -> Option<Month> {
        self.month_name().parse().ok()
    }
}

impl fmt::Display for TripDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for TripDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_valid_dates() {
        assert!(TripDate::parse("September 1st").is_some());
        assert!(TripDate::parse("July 23rd").is_some());
        assert!(TripDate::parse("June 5th").is_some());
        assert!(TripDate::parse("May 31st").is_some());
        assert!(TripDate::parse("March 10th").is_some());
    }

    #[test]
    fn test_reject_lowercase_month() {
        assert!(TripDate::parse("september 1st").is_none());
        assert!(TripDate::parse("SEptember 1st").is_none());
    }

    #[test]
    fn test_reject_missing_suffix() {
        assert!(TripDate::parse("September 1").is_none());
        assert!(TripDate::parse("September 1s").is_none());
        assert!(TripDate::parse("September 1stt").is_none());
        assert!(TripDate::parse("September 1ST").is_none());
    }

    #[test]
    fn test_reject_short_and_malformed() {
        assert!(TripDate::parse("Sep").is_none());
        assert!(TripDate::parse("Sept 1").is_none());
        assert!(TripDate::parse("September").is_none());
        assert!(TripDate::parse("2021-09-01").is_none());
        // Matches the pattern but is only 5 characters long
        assert!(TripDate::parse("J 1st").is_none());
        assert!(TripDate::parse("Ju 1st").is_none());
        assert!(TripDate::parse("Jun 1st").is_some());
    }

    #[test]
    fn test_reject_bad_day_numbers() {
        assert!(TripDate::parse("June 0th").is_none());
        assert!(TripDate::parse("June 01st").is_none());
        assert!(TripDate::parse("June 32nd").is_none());
        assert!(TripDate::parse("June 111th").is_none());
        assert!(TripDate::parse("June th").is_none());
    }

    #[test]
    fn test_reject_extra_characters() {
        assert!(TripDate::parse(" June 1st").is_none());
        assert!(TripDate::parse("June 1st ").is_none());
        assert!(TripDate::parse("June  1st").is_none());
        assert!(TripDate::parse("June\t1st").is_none());
        assert!(TripDate::parse("June 1st, 2021").is_none());
    }

    #[test]
    fn test_suffix_not_checked_against_day() {
        let date = TripDate::parse("Foo 2st").unwrap();
        assert_eq!(date.suffix(), "st");
        assert_eq!(date.month(), None);
    }

    #[test]
    fn test_components() {
        let date = TripDate::parse("July 23rd").unwrap();
        assert_eq!(date.month_name(), "July");
        assert_eq!(date.day(), 23);
        assert_eq!(date.suffix(), "rd");
        assert_eq!(date.month(), Some(Month::July));
        assert_eq!(date.to_string(), "July 23rd");
    }

    #[test]
    fn test_serializes_as_string() {
        let date = TripDate::parse("June 1st").unwrap();
        assert_eq!(serde_json::to_string(&date).unwrap(), "\"June 1st\"");
    }

    #[test]
    fn test_field_names() {
        assert_eq!(DateField::Start.to_string(), "start_date");
        assert_eq!(DateField::End.to_string(), "end_date");
    }

    proptest! {
        #[test]
        fn prop_well_formed_tokens_parse(
            month in "[A-Z][a-z]{2,8}",
            day in 1u8..=31,
            suffix in "[a-z]{2}",
        ) {
            let token = format!("{} {}{}", month, day, suffix);
            let date = TripDate::parse(&token).unwrap();
            prop_assert_eq!(date.day(), day);
            prop_assert_eq!(date.month_name(), month.as_str());
        }

        #[test]
        fn prop_numeric_dates_rejected(y in 1900u32..2100, m in 1u32..=12, d in 1u32..=28) {
            let token = format!("{}-{:02}-{:02}", y, m, d);
            prop_assert!(TripDate::parse(&token).is_none());
        }
    }
}
