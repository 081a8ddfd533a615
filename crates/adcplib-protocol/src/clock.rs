//! Instrument real-time clock (STIME).
//!
//! Queried bare, `STIME` replies with one timestamp line:
//!
//! ```text
//! STIME
//! 2014/07/09 12:30:45
//! ```
//!
//! Setting the clock uses the same field order with a comma between the
//! date and the time: `STIME 2014/07/09,12:30:45`.

use adcplib_core::{Error, Result};
use chrono::NaiveDateTime;

use crate::wire::response_lines;

/// Reply timestamp format.
const STIME_READ_FORMAT: &str = "%Y/%m/%d %H:%M:%S";
/// Set-command timestamp format.
const STIME_SET_FORMAT: &str = "%Y/%m/%d,%H:%M:%S";

/// Decode an STIME reply into the instrument's clock reading.
///
/// Scans the reply for the first line that parses as
/// `YYYY/MM/DD HH:MM:SS`; the echoed command line and blank lines are
/// skipped along the way.
///
/// # Errors
///
/// [`Error::MalformedResponse`] when no line of the reply carries a
/// parsable timestamp.
///
/// # Example
///
/// ```
/// use adcplib_protocol::clock::decode_stime;
/// use chrono::{Datelike, Timelike};
///
/// let clock = decode_stime("STIME\r\n2014/07/09 12:30:45\r\n")?;
/// assert_eq!(clock.year(), 2014);
/// assert_eq!(clock.second(), 45);
/// # Ok::<(), adcplib_core::Error>(())
/// ```
pub fn decode_stime(text: &str) -> Result<NaiveDateTime> {
    response_lines(text)
        .find_map(|line| NaiveDateTime::parse_from_str(line, STIME_READ_FORMAT).ok())
        .ok_or_else(|| Error::MalformedResponse(format!("no timestamp in STIME reply: '{text}'")))
}

/// Render the set-clock command for a timestamp.
///
/// # Example
///
/// ```
/// use adcplib_protocol::clock::encode_stime;
/// use chrono::NaiveDate;
///
/// let dt = NaiveDate::from_ymd_opt(2014, 7, 9)
///     .and_then(|d| d.and_hms_opt(12, 30, 45))
///     .unwrap();
/// assert_eq!(encode_stime(&dt), "STIME 2014/07/09,12:30:45");
/// ```
pub fn encode_stime(dt: &NaiveDateTime) -> String {
    format!("STIME {}", dt.format(STIME_SET_FORMAT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate, Timelike};

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .and_then(|date| date.and_hms_opt(h, mi, s))
            .unwrap()
    }

    #[test]
    fn decodes_a_bare_timestamp_line() {
        let clock = decode_stime("2014/07/09 12:30:45").unwrap();
        assert_eq!(clock, dt(2014, 7, 9, 12, 30, 45));
    }

    #[test]
    fn skips_the_command_echo() {
        let clock = decode_stime("STIME\r\n\r\n2024/01/31 23:59:59\r\n").unwrap();
        assert_eq!(clock.year(), 2024);
        assert_eq!(clock.month(), 1);
        assert_eq!(clock.day(), 31);
        assert_eq!(clock.hour(), 23);
    }

    #[test]
    fn single_digit_fields_are_zero_padded_by_the_firmware() {
        let clock = decode_stime("2014/07/09 01:02:03").unwrap();
        assert_eq!(clock, dt(2014, 7, 9, 1, 2, 3));
    }

    #[test]
    fn reply_without_timestamp_is_malformed() {
        assert!(matches!(
            decode_stime("STIME\r\n"),
            Err(Error::MalformedResponse(_))
        ));
        assert!(matches!(
            decode_stime("not a clock"),
            Err(Error::MalformedResponse(_))
        ));
        assert!(decode_stime("").is_err());
    }

    #[test]
    fn impossible_dates_are_rejected() {
        assert!(decode_stime("2014/13/40 12:00:00").is_err());
        assert!(decode_stime("2014/02/30 12:00:00").is_err());
    }

    #[test]
    fn encode_uses_the_comma_separated_set_form() {
        assert_eq!(
            encode_stime(&dt(2014, 7, 9, 12, 30, 45)),
            "STIME 2014/07/09,12:30:45"
        );
        assert_eq!(
            encode_stime(&dt(2024, 1, 2, 3, 4, 5)),
            "STIME 2024/01/02,03:04:05"
        );
    }
}
