//! Instrument serial numbers.
//!
//! The 32-character serial number printed in the BREAK banner doubles as
//! the hardware inventory: besides the base hardware code and the system
//! serial digits it carries fifteen subsystem slots, one configuration
//! code character per installed acoustic subsystem. [`SerialNumber`]
//! validates the string and exposes the decoded inventory.
//!
//! # Layout
//!
//! | Chars  | Field                                  |
//! |--------|----------------------------------------|
//! | 0-1    | base hardware code                     |
//! | 2-16   | subsystem slots (`'0'` = empty slot)   |
//! | 17-25  | spare                                  |
//! | 26-31  | system serial digits                   |
//!
//! # Example
//!
//! ```
//! use adcplib_core::SerialNumber;
//!
//! let sn = SerialNumber::parse("01230000000000000000000000000456").unwrap();
//! let inventory = sn.subsystems();
//! assert_eq!(inventory.len(), 2);
//! assert_eq!(inventory[0].code(), '2');
//! assert_eq!(inventory[1].code(), '3');
//! assert_eq!(sn.system_serial(), Some(456));
//! ```

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::subsystem::{Subsystem, EMPTY_SUBSYSTEM_CODE};

/// Total length of a serial number string.
pub const SERIAL_NUMBER_LEN: usize = 32;

/// Number of subsystem slots in the serial number.
pub const SUBSYSTEM_SLOT_COUNT: usize = 15;

const BASE_HARDWARE: Range<usize> = 0..2;
const SUBSYSTEM_SLOTS: Range<usize> = 2..17;
const SYSTEM_SERIAL: Range<usize> = 26..32;

/// A validated 32-character instrument serial number.
///
/// Immutable once parsed. Every way in validates: [`parse`],
/// [`FromStr`], and deserialization all reject strings that are not
/// exactly 32 ASCII alphanumeric characters, so the field accessors can
/// slice the fixed layout unconditionally.
///
/// The subsystem inventory is derived on demand: slots are scanned left
/// to right, empty slots (`'0'`) are skipped, and repeated codes
/// collapse into one [`Subsystem`] whose `index` is the ordinal of the
/// code's first appearance among the distinct codes.
///
/// [`parse`]: SerialNumber::parse
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct SerialNumber(String);

impl SerialNumber {
    /// Validate and wrap a serial number string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSerialNumber`] when the string is not
    /// exactly 32 ASCII alphanumeric characters.
    pub fn parse(s: &str) -> Result<SerialNumber> {
        if s.len() != SERIAL_NUMBER_LEN {
            return Err(Error::InvalidSerialNumber(format!(
                "expected {SERIAL_NUMBER_LEN} characters, got {}",
                s.len()
            )));
        }
        if let Some(c) = s.chars().find(|c| !c.is_ascii_alphanumeric()) {
            return Err(Error::InvalidSerialNumber(format!(
                "invalid character '{c}'"
            )));
        }
        Ok(SerialNumber(s.to_string()))
    }

    /// The full 32-character string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The two-character base hardware code.
    pub fn base_hardware(&self) -> &str {
        &self.0[BASE_HARDWARE]
    }

    /// The system serial digits as a number, or `None` when the serial
    /// field holds non-digit characters.
    pub fn system_serial(&self) -> Option<u32> {
        self.0[SYSTEM_SERIAL].parse().ok()
    }

    /// The ordered, deduplicated subsystem inventory.
    pub fn subsystems(&self) -> Vec<Subsystem> {
        let mut inventory: Vec<Subsystem> = Vec::new();
        for code in self.0[SUBSYSTEM_SLOTS].chars() {
            if code == EMPTY_SUBSYSTEM_CODE {
                continue;
            }
            if inventory.iter().any(|ss| ss.code() == code) {
                continue;
            }
            let index = inventory.len() as u32;
            inventory.push(Subsystem::new(code, index));
        }
        inventory
    }

    /// Look up a configuration code in the inventory.
    pub fn subsystem(&self, code: char) -> Option<Subsystem> {
        self.subsystems().into_iter().find(|ss| ss.code() == code)
    }
}

impl fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SerialNumber {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SerialNumber::parse(s)
    }
}

/// Validating conversion used by `Deserialize`.
impl TryFrom<String> for SerialNumber {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        SerialNumber::parse(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a serial with the given slot prefix (padded to 15 with empty
    /// slots), base hardware "01", and system serial 000001.
    fn serial_with_slots(slots: &str) -> SerialNumber {
        let s = format!("01{slots:0<15}000000000000001");
        SerialNumber::parse(&s).unwrap()
    }

    #[test]
    fn parse_valid() {
        let sn = SerialNumber::parse("01200000000000000000000000000001").unwrap();
        assert_eq!(sn.as_str(), "01200000000000000000000000000001");
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert!(SerialNumber::parse("").is_err());
        assert!(SerialNumber::parse("0120000").is_err());
        assert!(SerialNumber::parse("012000000000000000000000000000011").is_err());
    }

    #[test]
    fn parse_rejects_non_alphanumeric() {
        assert!(SerialNumber::parse("01-00000000000000000000000000001").is_err());
        assert!(SerialNumber::parse("01 00000000000000000000000000001").is_err());
    }

    #[test]
    fn parse_accepts_alphabetic_codes() {
        // Vertical and array subsystems have alphabetic configuration codes.
        let sn = SerialNumber::parse("01B00000000000000000000000000123").unwrap();
        assert_eq!(sn.subsystems()[0].code(), 'B');
    }

    #[test]
    fn from_str_matches_parse() {
        let sn: SerialNumber = "01200000000000000000000000000001".parse().unwrap();
        assert_eq!(sn, serial_with_slots("2"));
        assert!("nope".parse::<SerialNumber>().is_err());
    }

    #[test]
    fn display_is_the_full_string() {
        let sn = serial_with_slots("23");
        assert_eq!(sn.to_string(), "01230000000000000000000000000001");
    }

    #[test]
    fn base_hardware_field() {
        let sn = serial_with_slots("2");
        assert_eq!(sn.base_hardware(), "01");
    }

    #[test]
    fn system_serial_field() {
        let sn = SerialNumber::parse("01230000000000000000000000000456").unwrap();
        assert_eq!(sn.system_serial(), Some(456));
    }

    #[test]
    fn system_serial_non_digit_is_none() {
        let sn = SerialNumber::parse("0123000000000000000000000000A456").unwrap();
        assert_eq!(sn.system_serial(), None);
    }

    #[test]
    fn empty_serial_has_no_subsystems() {
        let sn = serial_with_slots("");
        assert!(sn.subsystems().is_empty());
    }

    #[test]
    fn inventory_indexes_follow_first_occurrence() {
        let sn = serial_with_slots("23");
        let inv = sn.subsystems();
        assert_eq!(inv.len(), 2);
        assert_eq!(inv[0], Subsystem::new('2', 0));
        assert_eq!(inv[1], Subsystem::new('3', 1));

        // Reversed slot order reverses the ordinals.
        let sn = serial_with_slots("32");
        let inv = sn.subsystems();
        assert_eq!(inv[0], Subsystem::new('3', 0));
        assert_eq!(inv[1], Subsystem::new('2', 1));
    }

    #[test]
    fn inventory_deduplicates_repeated_codes() {
        let sn = serial_with_slots("2233B");
        let inv = sn.subsystems();
        assert_eq!(inv.len(), 3);
        assert_eq!(inv[0], Subsystem::new('2', 0));
        assert_eq!(inv[1], Subsystem::new('3', 1));
        assert_eq!(inv[2], Subsystem::new('B', 2));
    }

    #[test]
    fn inventory_skips_interior_empty_slots() {
        let sn = serial_with_slots("20300");
        let inv = sn.subsystems();
        assert_eq!(inv.len(), 2);
        assert_eq!(inv[0], Subsystem::new('2', 0));
        assert_eq!(inv[1], Subsystem::new('3', 1));
    }

    #[test]
    fn subsystem_lookup() {
        let sn = serial_with_slots("23");
        assert_eq!(sn.subsystem('3'), Some(Subsystem::new('3', 1)));
        assert_eq!(sn.subsystem('4'), None);
        assert_eq!(sn.subsystem(EMPTY_SUBSYSTEM_CODE), None);
    }

    #[test]
    fn serial_digits_are_not_subsystem_slots() {
        // Codes in the serial-digit region must not leak into the inventory.
        let sn = SerialNumber::parse("01200000000000000000000000022222").unwrap();
        assert_eq!(sn.subsystems().len(), 1);
    }

    #[test]
    fn serde_round_trips_as_plain_string() {
        let sn = serial_with_slots("23");
        let json = serde_json::to_string(&sn).unwrap();
        assert_eq!(json, "\"01230000000000000000000000000001\"");
        let back: SerialNumber = serde_json::from_str(&json).unwrap();
        assert_eq!(sn, back);
    }

    #[test]
    fn deserialize_validates_like_parse() {
        // A short string must fail at the deserialization boundary, not
        // later when an accessor slices the fixed layout.
        assert!(serde_json::from_str::<SerialNumber>("\"AB\"").is_err());
        assert!(
            serde_json::from_str::<SerialNumber>("\"01-00000000000000000000000000001\"").is_err()
        );

        let err = serde_json::from_str::<SerialNumber>("\"AB\"").unwrap_err();
        assert!(err.to_string().contains("32 characters"));
    }
}
