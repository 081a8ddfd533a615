//! Firmware version tokens.
//!
//! The instrument reports firmware as a packed four-byte token: major,
//! minor, revision, and the subsystem configuration code of the build.
//! The token appears in binary ensemble headers and, without the code
//! byte, as the `FW:` line of the BREAK banner (`00.02.05`).
//!
//! Firmware 0.2.13 and earlier predates per-code builds and stored the
//! subsystem's *inventory index* (as an ASCII digit) in the code byte;
//! [`FirmwareVersion::subsystem`] resolves both generations against a
//! serial number.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::serial::SerialNumber;
use crate::subsystem::Subsystem;

/// Encoded length of a firmware token.
pub const FIRMWARE_LEN: usize = 4;

/// A four-byte firmware version token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FirmwareVersion {
    major: u8,
    minor: u8,
    revision: u8,
    subsystem_code: u8,
}

impl FirmwareVersion {
    /// Create a firmware token from its four fields.
    pub fn new(major: u8, minor: u8, revision: u8, subsystem_code: u8) -> Self {
        FirmwareVersion {
            major,
            minor,
            revision,
            subsystem_code,
        }
    }

    /// Major version.
    pub fn major(&self) -> u8 {
        self.major
    }

    /// Minor version.
    pub fn minor(&self) -> u8 {
        self.minor
    }

    /// Revision.
    pub fn revision(&self) -> u8 {
        self.revision
    }

    /// Raw subsystem code byte.
    pub fn subsystem_code(&self) -> u8 {
        self.subsystem_code
    }

    /// Pack the token into its wire layout.
    ///
    /// The byte order is fixed by the instrument: major, minor, revision,
    /// subsystem code.
    pub fn encode(&self) -> [u8; FIRMWARE_LEN] {
        [self.major, self.minor, self.revision, self.subsystem_code]
    }

    /// Unpack a token from its wire layout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedResponse`] when `data` is not exactly
    /// four bytes.
    pub fn decode(data: &[u8]) -> Result<FirmwareVersion> {
        if data.len() != FIRMWARE_LEN {
            return Err(Error::MalformedResponse(format!(
                "firmware token must be {FIRMWARE_LEN} bytes, got {}",
                data.len()
            )));
        }
        Ok(FirmwareVersion::new(data[0], data[1], data[2], data[3]))
    }

    /// Returns `true` for builds old enough (0.2.13 and earlier) to store
    /// an inventory index instead of a configuration code.
    fn stores_legacy_index(&self) -> bool {
        self.major == 0 && self.minor == 2 && self.revision <= 13
    }

    /// Resolve the subsystem this firmware was built for.
    ///
    /// The code byte is looked up in the serial number's inventory; a code
    /// with no backing slot resolves to a standalone
    /// `Subsystem { code, index: 0 }` so the caller still gets a usable
    /// identity. For legacy builds (0.2.13 and earlier) a digit code byte
    /// is first treated as an inventory index; out-of-range indexes fall
    /// back to the modern code lookup.
    pub fn subsystem(&self, serial: &SerialNumber) -> Subsystem {
        if self.stores_legacy_index() && self.subsystem_code.is_ascii_digit() {
            let index = (self.subsystem_code - b'0') as usize;
            if let Some(ss) = serial.subsystems().get(index) {
                return *ss;
            }
        }
        let code = self.subsystem_code as char;
        serial
            .subsystem(code)
            .unwrap_or_else(|| Subsystem::new(code, 0))
    }

    /// Reference table of the firmware token for every legal subsystem
    /// code (1 through 255). Code 0 is the empty-slot marker and has no
    /// firmware build.
    pub fn version_list() -> Vec<FirmwareVersion> {
        (1..=u8::MAX)
            .map(|code| FirmwareVersion::new(0, 0, 0, code))
            .collect()
    }
}

impl fmt::Display for FirmwareVersion {
    /// Prints the banner form `MM.mm.rr` (the code byte is not part of
    /// the printed version).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}.{:02}.{:02}",
            self.major, self.minor, self.revision
        )
    }
}

impl FromStr for FirmwareVersion {
    type Err = Error;

    /// Parse the banner form `MM.mm.rr`. The subsystem code byte is not
    /// printed in banners and is left at zero.
    fn from_str(s: &str) -> Result<Self> {
        let err = || Error::MalformedResponse(format!("invalid firmware version '{s}'"));

        let mut fields = s.trim().splitn(3, '.');
        let major = fields.next().ok_or_else(err)?;
        let minor = fields.next().ok_or_else(err)?;
        let revision = fields.next().ok_or_else(err)?;

        let major: u8 = major.parse().map_err(|_| err())?;
        let minor: u8 = minor.parse().map_err(|_| err())?;
        let revision: u8 = revision.parse().map_err(|_| err())?;

        Ok(FirmwareVersion::new(major, minor, revision, 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serial_23() -> SerialNumber {
        // Inventory: '2' at index 0, '3' at index 1.
        SerialNumber::parse("01230000000000000000000000000001").unwrap()
    }

    #[test]
    fn encode_layout_is_fixed() {
        let fw = FirmwareVersion::new(0, 2, 5, b'2');
        assert_eq!(fw.encode(), [0, 2, 5, b'2']);
    }

    #[test]
    fn decode_inverts_encode() {
        let fw = FirmwareVersion::decode(&[0, 2, 5, b'2']).unwrap();
        assert_eq!(fw.major(), 0);
        assert_eq!(fw.minor(), 2);
        assert_eq!(fw.revision(), 5);
        assert_eq!(fw.subsystem_code(), b'2');
    }

    #[test]
    fn decode_rejects_wrong_length() {
        assert!(FirmwareVersion::decode(&[]).is_err());
        assert!(FirmwareVersion::decode(&[0, 2, 5]).is_err());
        assert!(FirmwareVersion::decode(&[0, 2, 5, b'2', 0]).is_err());
    }

    #[test]
    fn round_trip_sweeps_every_byte_value_per_field() {
        for v in 0..=u8::MAX {
            for fw in [
                FirmwareVersion::new(v, 1, 2, 3),
                FirmwareVersion::new(0, v, 2, 3),
                FirmwareVersion::new(0, 1, v, 3),
                FirmwareVersion::new(0, 1, 2, v),
            ] {
                let back = FirmwareVersion::decode(&fw.encode()).unwrap();
                assert_eq!(fw, back);
            }
        }
    }

    #[test]
    fn display_zero_pads() {
        assert_eq!(FirmwareVersion::new(0, 2, 5, b'2').to_string(), "00.02.05");
        assert_eq!(FirmwareVersion::new(1, 12, 3, 0).to_string(), "01.12.03");
    }

    #[test]
    fn from_str_parses_banner_form() {
        let fw: FirmwareVersion = "00.02.05".parse().unwrap();
        assert_eq!(fw, FirmwareVersion::new(0, 2, 5, 0));
    }

    #[test]
    fn from_str_rejects_garbage() {
        assert!("".parse::<FirmwareVersion>().is_err());
        assert!("00.02".parse::<FirmwareVersion>().is_err());
        assert!("a.b.c".parse::<FirmwareVersion>().is_err());
        assert!("00.02.300".parse::<FirmwareVersion>().is_err());
    }

    #[test]
    fn subsystem_resolves_code_in_inventory() {
        let fw = FirmwareVersion::new(0, 3, 0, b'3');
        assert_eq!(fw.subsystem(&serial_23()), Subsystem::new('3', 1));
    }

    #[test]
    fn subsystem_without_backing_slot_is_standalone() {
        let fw = FirmwareVersion::new(0, 3, 0, b'B');
        assert_eq!(fw.subsystem(&serial_23()), Subsystem::new('B', 0));
    }

    #[test]
    fn legacy_firmware_resolves_code_byte_as_index() {
        // 0.2.13 and earlier: digit code byte is an inventory index.
        let fw = FirmwareVersion::new(0, 2, 13, b'1');
        assert_eq!(fw.subsystem(&serial_23()), Subsystem::new('3', 1));

        let fw = FirmwareVersion::new(0, 2, 5, b'0');
        assert_eq!(fw.subsystem(&serial_23()), Subsystem::new('2', 0));
    }

    #[test]
    fn post_legacy_firmware_takes_digit_as_code() {
        // 0.2.14 is past the legacy cutoff: '1' is a configuration code,
        // not an index, and this serial has no '1' subsystem.
        let fw = FirmwareVersion::new(0, 2, 14, b'1');
        assert_eq!(fw.subsystem(&serial_23()), Subsystem::new('1', 0));
    }

    #[test]
    fn legacy_index_out_of_range_falls_back_to_code_lookup() {
        let fw = FirmwareVersion::new(0, 2, 5, b'7');
        // Index 7 does not exist in a two-subsystem inventory; '7' is then
        // tried as a code, which this serial does not carry either.
        assert_eq!(fw.subsystem(&serial_23()), Subsystem::new('7', 0));
    }

    #[test]
    fn legacy_firmware_with_alpha_code_uses_code_lookup() {
        let serial = SerialNumber::parse("01B00000000000000000000000000001").unwrap();
        let fw = FirmwareVersion::new(0, 2, 5, b'B');
        assert_eq!(fw.subsystem(&serial), Subsystem::new('B', 0));
    }

    #[test]
    fn version_list_covers_every_legal_code() {
        let list = FirmwareVersion::version_list();
        assert_eq!(list.len(), 255);
        assert_eq!(list[0].subsystem_code(), 1);
        assert_eq!(list[254].subsystem_code(), 255);
        assert!(list.iter().all(|fw| fw.subsystem_code() != 0));
    }

    #[test]
    fn serde_round_trip() {
        let fw = FirmwareVersion::new(0, 2, 5, b'2');
        let json = serde_json::to_string(&fw).unwrap();
        let back: FirmwareVersion = serde_json::from_str(&json).unwrap();
        assert_eq!(fw, back);
    }
}
