//! Interval time values as the instrument understands them.
//!
//! Ensemble timing commands (CEI and friends) carry an interval in the form
//! `HH:MM:SS.hh` -- hours, minutes, seconds, hundredths of a second. The
//! firmware accepts over-range fields and carries the overflow upward, so
//! `00:00:90.00` and `00:01:30.00` are the same interval. [`TimeValue`]
//! reproduces that carry behavior on the host side.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An interval of hours, minutes, seconds, and hundredths of a second.
///
/// Fields are kept normalized (`minute < 60`, `second < 60`,
/// `hundredth < 100`); every setter carries overflow into the next field
/// up, immediately, against the value held at that moment. That makes the
/// result of building a value field-by-field depend on assignment order:
///
/// ```
/// use adcplib_core::TimeValue;
///
/// // Constructor order is hour, minute, second, hundredth -- carries
/// // accumulate upward as each field lands.
/// let forward = TimeValue::new(1, 340, 66, 144);
/// assert_eq!(forward.to_string(), "06:41:07.44");
///
/// // Assigning the same raw fields lowest-first, hour last, lets the
/// // final set_hour overwrite the carry that reached the hour field.
/// let mut reverse = TimeValue::default();
/// reverse.set_hundredth(144);
/// reverse.set_second(66);
/// reverse.set_minute(340);
/// reverse.set_hour(1);
/// assert_eq!(reverse.to_string(), "01:40:06.44");
/// ```
///
/// Equality is structural over the normalized fields, so any two
/// assignment paths that land on the same normalized value compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TimeValue {
    hour: u32,
    minute: u32,
    second: u32,
    hundredth: u32,
}

impl TimeValue {
    /// Build an interval, applying the field setters in declaration order
    /// (hour, minute, second, hundredth).
    ///
    /// Over-range fields carry upward as they are assigned, so
    /// `TimeValue::new(1, 340, 66, 144)` is `06:41:07.44`.
    pub fn new(hour: u32, minute: u32, second: u32, hundredth: u32) -> Self {
        let mut tv = TimeValue::default();
        tv.set_hour(hour);
        tv.set_minute(minute);
        tv.set_second(second);
        tv.set_hundredth(hundredth);
        tv
    }

    /// Hours component.
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// Minutes component (always `< 60`).
    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Seconds component (always `< 60`).
    pub fn second(&self) -> u32 {
        self.second
    }

    /// Hundredths-of-a-second component (always `< 100`).
    pub fn hundredth(&self) -> u32 {
        self.hundredth
    }

    /// Set the hours field. Hours have no larger neighbor; the value is
    /// stored as given.
    pub fn set_hour(&mut self, hour: u32) {
        self.hour = hour;
    }

    /// Set the minutes field, carrying each whole 60 into the hours held
    /// right now.
    pub fn set_minute(&mut self, minute: u32) {
        self.minute = minute;
        self.carry();
    }

    /// Set the seconds field, carrying each whole 60 into the minutes held
    /// right now (and onward).
    pub fn set_second(&mut self, second: u32) {
        self.second = second;
        self.carry();
    }

    /// Set the hundredths field, carrying each whole 100 into the seconds
    /// held right now (and onward).
    pub fn set_hundredth(&mut self, hundredth: u32) {
        self.hundredth = hundredth;
        self.carry();
    }

    /// Whole-second equivalent of the interval, rounding the hundredths
    /// (≥ .50 rounds up).
    pub fn to_seconds(&self) -> u32 {
        let round = if self.hundredth >= 50 { 1 } else { 0 };
        self.hour * 3600 + self.minute * 60 + self.second + round
    }

    // Carry overflow upward: hundredths into seconds, seconds into
    // minutes, minutes into hours.
    fn carry(&mut self) {
        if self.hundredth >= 100 {
            self.second += self.hundredth / 100;
            self.hundredth %= 100;
        }
        if self.second >= 60 {
            self.minute += self.second / 60;
            self.second %= 60;
        }
        if self.minute >= 60 {
            self.hour += self.minute / 60;
            self.minute %= 60;
        }
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:02}",
            self.hour, self.minute, self.second, self.hundredth
        )
    }
}

/// Error returned when a string cannot be parsed into a [`TimeValue`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTimeValueError(String);

impl fmt::Display for ParseTimeValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid time value: '{}'. Expected HH:MM:SS.hh", self.0)
    }
}

impl std::error::Error for ParseTimeValueError {}

impl FromStr for TimeValue {
    type Err = ParseTimeValueError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let err = || ParseTimeValueError(s.to_string());

        let mut clock = s.trim().splitn(3, ':');
        let hour = clock.next().ok_or_else(err)?;
        let minute = clock.next().ok_or_else(err)?;
        let rest = clock.next().ok_or_else(err)?;
        let (second, hundredth) = rest.split_once('.').ok_or_else(err)?;

        let hour: u32 = hour.parse().map_err(|_| err())?;
        let minute: u32 = minute.parse().map_err(|_| err())?;
        let second: u32 = second.parse().map_err(|_| err())?;
        let hundredth: u32 = hundredth.parse().map_err(|_| err())?;

        Ok(TimeValue::new(hour, minute, second, hundredth))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_zero() {
        let tv = TimeValue::default();
        assert_eq!(tv.hour(), 0);
        assert_eq!(tv.minute(), 0);
        assert_eq!(tv.second(), 0);
        assert_eq!(tv.hundredth(), 0);
    }

    #[test]
    fn new_stores_in_range_fields() {
        let tv = TimeValue::new(1, 2, 3, 4);
        assert_eq!(tv.hour(), 1);
        assert_eq!(tv.minute(), 2);
        assert_eq!(tv.second(), 3);
        assert_eq!(tv.hundredth(), 4);
    }

    #[test]
    fn hundredth_carries_into_second() {
        let mut tv = TimeValue::default();
        tv.set_hundredth(144);
        assert_eq!(tv.second(), 1);
        assert_eq!(tv.hundredth(), 44);
    }

    #[test]
    fn second_carries_into_minute() {
        let mut tv = TimeValue::default();
        tv.set_second(90);
        assert_eq!(tv.minute(), 1);
        assert_eq!(tv.second(), 30);
    }

    #[test]
    fn minute_carries_into_hour() {
        let mut tv = TimeValue::default();
        tv.set_minute(340);
        assert_eq!(tv.hour(), 5);
        assert_eq!(tv.minute(), 40);
    }

    #[test]
    fn carry_cascades_through_all_fields() {
        // 6000 hundredths = 60 seconds = 1 minute exactly.
        let mut tv = TimeValue::default();
        tv.set_hundredth(6000);
        assert_eq!(tv.hour(), 0);
        assert_eq!(tv.minute(), 1);
        assert_eq!(tv.second(), 0);
        assert_eq!(tv.hundredth(), 0);
    }

    #[test]
    fn constructor_applies_fields_in_declaration_order() {
        let tv = TimeValue::new(1, 340, 66, 144);
        assert_eq!(tv.hour(), 6);
        assert_eq!(tv.minute(), 41);
        assert_eq!(tv.second(), 7);
        assert_eq!(tv.hundredth(), 44);
    }

    #[test]
    fn reverse_assignment_order_differs() {
        // Same raw fields as constructor_applies_fields_in_declaration_order,
        // assigned lowest-first: the final set_hour overwrites the carries
        // that reached the hour field.
        let mut tv = TimeValue::default();
        tv.set_hundredth(144);
        tv.set_second(66);
        tv.set_minute(340);
        tv.set_hour(1);
        assert_eq!(tv.hour(), 1);
        assert_eq!(tv.minute(), 40);
        assert_eq!(tv.second(), 6);
        assert_eq!(tv.hundredth(), 44);
    }

    #[test]
    fn equality_is_structural_over_normalized_fields() {
        assert_eq!(TimeValue::new(1, 60, 3, 4), TimeValue::new(2, 0, 3, 4));
        assert_ne!(TimeValue::new(1, 0, 3, 4), TimeValue::new(2, 0, 3, 4));
    }

    #[test]
    fn to_seconds_rounds_hundredths() {
        assert_eq!(TimeValue::new(0, 0, 1, 49).to_seconds(), 1);
        assert_eq!(TimeValue::new(0, 0, 1, 50).to_seconds(), 2);
        assert_eq!(TimeValue::new(1, 1, 1, 0).to_seconds(), 3661);
    }

    #[test]
    fn display_zero_pads_every_field() {
        assert_eq!(TimeValue::new(0, 0, 1, 0).to_string(), "00:00:01.00");
        assert_eq!(TimeValue::new(6, 41, 7, 44).to_string(), "06:41:07.44");
    }

    #[test]
    fn from_str_round_trips_display() {
        let tv: TimeValue = "06:41:07.44".parse().unwrap();
        assert_eq!(tv, TimeValue::new(6, 41, 7, 44));
        assert_eq!(tv.to_string().parse::<TimeValue>().unwrap(), tv);
    }

    #[test]
    fn from_str_normalizes_over_range_fields() {
        let tv: TimeValue = "00:00:90.00".parse().unwrap();
        assert_eq!(tv, TimeValue::new(0, 1, 30, 0));
    }

    #[test]
    fn from_str_rejects_garbage() {
        assert!("".parse::<TimeValue>().is_err());
        assert!("1:2".parse::<TimeValue>().is_err());
        assert!("00:00:01".parse::<TimeValue>().is_err());
        assert!("aa:bb:cc.dd".parse::<TimeValue>().is_err());
    }

    #[test]
    fn serde_round_trip() {
        let tv = TimeValue::new(6, 41, 7, 44);
        let json = serde_json::to_string(&tv).unwrap();
        let back: TimeValue = serde_json::from_str(&json).unwrap();
        assert_eq!(tv, back);
    }
}
