//! BREAK banner decoding.
//!
//! Sending a BREAK (or the `BREAK` soft command) makes the instrument
//! identify itself with a short banner:
//!
//! ```text
//! Copyright (c) 2009-2014 Rowe Technologies Inc. All rights reserved.
//! DP1200 DP600
//! SN: 01230000000000000000000000000001
//! FW: 00.02.09 Apr 17 2014 05:40:11
//! ```
//!
//! The copyright line and any echo of the command are noise; the payload
//! is the hardware model line, the `SN:` serial number, and the `FW:`
//! version token (the trailing build date is informational and dropped).

use adcplib_core::{Error, FirmwareVersion, Result, SerialNumber};

use crate::wire::response_lines;

/// Identity reported by the instrument in its BREAK banner.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BreakInfo {
    /// Full 32-character serial number from the `SN:` line.
    pub serial_number: SerialNumber,
    /// Firmware version from the `FW:` line (code byte zero; banners
    /// print only `MM.mm.rr`).
    pub firmware: FirmwareVersion,
    /// Free-text hardware model line (e.g. `DP1200 DP600`). Empty when
    /// the banner carries no hardware line.
    pub hardware: String,
}

/// Decode a BREAK banner.
///
/// Tolerates the echoed command, the copyright line, blank lines, and a
/// trailing build date on the `FW:` line.
///
/// # Errors
///
/// [`Error::MalformedResponse`] when the `SN:` or `FW:` line is missing
/// or its token does not parse; [`Error::InvalidSerialNumber`] when the
/// `SN:` token is present but not a valid serial number.
///
/// # Example
///
/// ```
/// use adcplib_protocol::banner::decode_break;
///
/// let text = "Copyright (c) 2009-2014 Rowe Technologies Inc. All rights reserved.\r\n\
///             DP1200 DP600\r\n\
///             SN: 01230000000000000000000000000001\r\n\
///             FW: 00.02.09 Apr 17 2014 05:40:11\r\n";
/// let info = decode_break(text)?;
/// assert_eq!(info.hardware, "DP1200 DP600");
/// assert_eq!(info.firmware.to_string(), "00.02.09");
/// # Ok::<(), adcplib_core::Error>(())
/// ```
pub fn decode_break(text: &str) -> Result<BreakInfo> {
    let mut serial_number = None;
    let mut firmware = None;
    let mut hardware = None;

    for line in response_lines(text) {
        if line == "BREAK" || line.starts_with("Copyright") {
            continue;
        }
        if let Some(rest) = line.strip_prefix("SN:") {
            serial_number = Some(SerialNumber::parse(rest.trim())?);
        } else if let Some(rest) = line.strip_prefix("FW:") {
            let token = rest
                .split_whitespace()
                .next()
                .ok_or_else(|| Error::MalformedResponse("empty FW line in banner".into()))?;
            firmware = Some(token.parse::<FirmwareVersion>()?);
        } else if hardware.is_none() {
            hardware = Some(line.to_string());
        }
    }

    Ok(BreakInfo {
        serial_number: serial_number
            .ok_or_else(|| Error::MalformedResponse("banner has no SN line".into()))?,
        firmware: firmware
            .ok_or_else(|| Error::MalformedResponse("banner has no FW line".into()))?,
        hardware: hardware.unwrap_or_default(),
    })
}
