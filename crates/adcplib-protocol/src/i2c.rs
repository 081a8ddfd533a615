//! I2C bus inventory decoding (ENGI2CSHOW).
//!
//! `ENGI2CSHOW` dumps every device the firmware finds on the internal
//! I2C bus: the receiver register banks, the real-time clock registers,
//! and the board-stack EEPROM with one entry per circuit board:
//!
//! ```text
//! ENGI2CSHOW
//!
//! RVCR,      01, 01 07 00 00 04 0F 40 A0 7F 00 00 20 20 00
//! RVCR,      02, 01 07 00 00 04 0F 40 A0 7F 00 00 20 20 00
//!
//! RTC,       68, 20 13 08 09 01 08 14 00 00 00
//!
//! 24AA32AF,  50, 50016  REV:XD1  SER#017  50012  REV:XD1  SER#013
//!                50009  REV:XD1  SER#017  50007  REV:XD1  SER#024
//!                50018  REV:XD1  SER#008  50022  REV:XD1  SER#013
//! ```
//!
//! Register rows are `<bank>, <addr>, <hex bytes...>` with the address
//! and data in hex. Board entries are `<id>  REV:<rev>  SER#<serial>`
//! triples, one or more per line, matched against the known board IDs.
//! Unreadable rows print `--` and are skipped, as is anything else the
//! firmware interleaves.

use adcplib_core::{Error, Result};
use tracing::trace;

use crate::wire::response_lines;

// ---------------------------------------------------------------
// Board catalog
// ---------------------------------------------------------------

/// Circuit boards tracked in the board-stack EEPROM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum BoardId {
    /// I/O board (ID 50007).
    Io,
    /// Low-power regulator board (ID 50012).
    LowPowerRegulator,
    /// Transmitter board (ID 50009).
    Transmitter,
    /// Virtual ground board (ID 50018).
    VirtualGround,
    /// Backplane (ID 50016).
    Backplane,
    /// Receiver board (ID 50022).
    Receiver,
}

/// All known boards, in EEPROM dump order.
const ALL_BOARD_IDS: &[BoardId] = &[
    BoardId::Backplane,
    BoardId::LowPowerRegulator,
    BoardId::Transmitter,
    BoardId::Io,
    BoardId::VirtualGround,
    BoardId::Receiver,
];

impl BoardId {
    /// Returns the board for a numeric EEPROM ID, or `None` for IDs
    /// outside the catalog.
    pub fn from_id(id: u32) -> Option<BoardId> {
        ALL_BOARD_IDS.iter().copied().find(|b| b.id() == id)
    }

    /// The numeric ID stored in the EEPROM.
    pub fn id(&self) -> u32 {
        match self {
            BoardId::Io => 50_007,
            BoardId::LowPowerRegulator => 50_012,
            BoardId::Transmitter => 50_009,
            BoardId::VirtualGround => 50_018,
            BoardId::Backplane => 50_016,
            BoardId::Receiver => 50_022,
        }
    }

    /// Human-readable board name.
    pub fn label(&self) -> &'static str {
        match self {
            BoardId::Io => "I/O",
            BoardId::LowPowerRegulator => "Low power regulator",
            BoardId::Transmitter => "Transmitter",
            BoardId::VirtualGround => "Virtual ground",
            BoardId::Backplane => "Backplane",
            BoardId::Receiver => "Receiver",
        }
    }

    /// All known boards, in EEPROM dump order.
    pub fn all() -> &'static [BoardId] {
        ALL_BOARD_IDS
    }
}

impl std::fmt::Display for BoardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ---------------------------------------------------------------
// Decoded inventory
// ---------------------------------------------------------------

/// One I2C register bank row: chip address and the bytes read back.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct I2cRegister {
    /// Chip address on the bus.
    pub address: u8,
    /// Register contents in dump order.
    pub data: Vec<u8>,
}

/// One circuit board's EEPROM entry.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct I2cBoard {
    /// Which board this entry describes.
    pub id: BoardId,
    /// Hardware revision string (`XD1`).
    pub revision: String,
    /// Board serial number.
    pub serial: u32,
}

/// Everything the firmware reports on the I2C bus.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct I2cMemDevs {
    /// Real-time clock register rows (`RTC`).
    pub rtc_registers: Vec<I2cRegister>,
    /// Receiver register rows (`RVCR`), one per receiver channel.
    pub receiver_registers: Vec<I2cRegister>,
    /// Board-stack EEPROM entries, in dump order.
    pub boards: Vec<I2cBoard>,
}

impl I2cMemDevs {
    /// Look up a board entry by its catalog ID.
    pub fn board(&self, id: BoardId) -> Option<&I2cBoard> {
        self.boards.iter().find(|b| b.id == id)
    }
}

/// Decode an ENGI2CSHOW reply.
///
/// Row-tolerant: rows that fail to parse (including the firmware's `--`
/// placeholder for unreadable devices) are skipped, and board entries
/// with IDs outside the catalog are ignored. Only a reply with no
/// recognizable content at all is an error.
///
/// # Errors
///
/// [`Error::MalformedResponse`] when the reply carries neither register
/// rows nor board entries.
pub fn decode_engi2cshow(text: &str) -> Result<I2cMemDevs> {
    let mut devs = I2cMemDevs::default();

    for line in response_lines(text) {
        if let Some(rest) = line.strip_prefix("RTC,") {
            match parse_register(rest) {
                Some(reg) => devs.rtc_registers.push(reg),
                None => trace!(line, "skipping unparsable RTC row"),
            }
        } else if let Some(rest) = line.strip_prefix("RVCR,") {
            match parse_register(rest) {
                Some(reg) => devs.receiver_registers.push(reg),
                None => trace!(line, "skipping unparsable RVCR row"),
            }
        } else {
            parse_board_entries(line, &mut devs.boards);
        }
    }

    if devs.rtc_registers.is_empty() && devs.receiver_registers.is_empty() && devs.boards.is_empty()
    {
        return Err(Error::MalformedResponse(
            "no I2C devices in ENGI2CSHOW reply".into(),
        ));
    }
    Ok(devs)
}

/// Parse `<addr>, <hex bytes...>` (the part of a register row after the
/// bank prefix).
fn parse_register(rest: &str) -> Option<I2cRegister> {
    let (addr, data) = rest.split_once(',')?;
    let address = u8::from_str_radix(addr.trim(), 16).ok()?;
    let data = data
        .split_whitespace()
        .map(|b| u8::from_str_radix(b, 16))
        .collect::<std::result::Result<Vec<u8>, _>>()
        .ok()?;
    Some(I2cRegister { address, data })
}

/// Scan a line for `<id>  REV:<rev>  SER#<serial>` triples.
///
/// The EEPROM dump wraps entries across lines and sometimes prefixes
/// them with the chip name and address; scanning token triples instead
/// of whole lines handles every wrapping the firmware produces.
fn parse_board_entries(line: &str, boards: &mut Vec<I2cBoard>) {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let mut i = 0;
    while i < tokens.len() {
        let triple = (
            tokens[i].trim_end_matches(',').parse::<u32>().ok(),
            tokens.get(i + 1).and_then(|t| t.strip_prefix("REV:")),
            tokens.get(i + 2).and_then(|t| t.strip_prefix("SER#")),
        );
        if let (Some(id), Some(rev), Some(ser)) = triple {
            match (BoardId::from_id(id), ser.parse::<u32>()) {
                (Some(board_id), Ok(serial)) => {
                    boards.push(I2cBoard {
                        id: board_id,
                        revision: rev.to_string(),
                        serial,
                    });
                }
                _ => trace!(line, id, "skipping unknown board entry"),
            }
            i += 3;
        } else {
            i += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DUMP: &str = "ENGI2CSHOW\r\n\
        \r\n\
        RVCR,      01, 01 07 00 00 04 0F 40 A0 7F 00 00 20 20 00\r\n\
        RVCR,      02, 01 07 00 00 04 0F 40 A0 7F 00 00 20 20 01\r\n\
        \r\n\
        RTC,       68, 20 13 08 09 01 08 14 00 00 00\r\n\
        \r\n\
        24AA32AF,  50, 50016  REV:XD1  SER#017  50012  REV:XD1  SER#013\r\n\
        50009  REV:XD1  SER#017  50007  REV:XD1  SER#024\r\n\
        50018  REV:XD1  SER#008  50022  REV:XD1  SER#013\r\n";

    #[test]
    fn decodes_a_full_dump() {
        let devs = decode_engi2cshow(DUMP).unwrap();
        assert_eq!(devs.receiver_registers.len(), 2);
        assert_eq!(devs.rtc_registers.len(), 1);
        assert_eq!(devs.boards.len(), 6);
    }

    #[test]
    fn register_addresses_and_data_are_hex() {
        let devs = decode_engi2cshow(DUMP).unwrap();
        let rtc = &devs.rtc_registers[0];
        assert_eq!(rtc.address, 0x68);
        assert_eq!(rtc.data[0], 0x20);
        assert_eq!(rtc.data[1], 0x13);
        assert_eq!(rtc.data.len(), 10);

        let rvcr = &devs.receiver_registers[0];
        assert_eq!(rvcr.address, 0x01);
        assert_eq!(rvcr.data[6], 0x40);
        assert_eq!(rvcr.data[7], 0xA0);
    }

    #[test]
    fn receiver_channels_keep_dump_order() {
        let devs = decode_engi2cshow(DUMP).unwrap();
        assert_eq!(devs.receiver_registers[0].address, 0x01);
        assert_eq!(devs.receiver_registers[1].address, 0x02);
        assert_eq!(devs.receiver_registers[1].data[13], 0x01);
    }

    #[test]
    fn board_entries_parse_two_per_line() {
        let devs = decode_engi2cshow(DUMP).unwrap();
        let backplane = devs.board(BoardId::Backplane).unwrap();
        assert_eq!(backplane.revision, "XD1");
        assert_eq!(backplane.serial, 17);

        let receiver = devs.board(BoardId::Receiver).unwrap();
        assert_eq!(receiver.serial, 13);
        assert_eq!(devs.board(BoardId::Io).unwrap().serial, 24);
    }

    #[test]
    fn all_six_known_boards_are_found() {
        let devs = decode_engi2cshow(DUMP).unwrap();
        for &id in ALL_BOARD_IDS {
            assert!(devs.board(id).is_some(), "missing {id}");
        }
    }

    #[test]
    fn unreadable_placeholder_rows_are_skipped() {
        let text = "RTC,       68, 20 13\r\n--\r\nRVCR, --\r\n";
        let devs = decode_engi2cshow(text).unwrap();
        assert_eq!(devs.rtc_registers.len(), 1);
        assert!(devs.receiver_registers.is_empty());
    }

    #[test]
    fn unknown_board_ids_are_skipped() {
        let text = "99999  REV:XA  SER#001  50007  REV:XB  SER#002\r\n";
        let devs = decode_engi2cshow(text).unwrap();
        assert_eq!(devs.boards.len(), 1);
        assert_eq!(devs.boards[0].id, BoardId::Io);
        assert_eq!(devs.boards[0].revision, "XB");
    }

    #[test]
    fn malformed_register_rows_are_skipped() {
        let text = "RTC, zz, 01 02\r\nRTC, 68, 01 02\r\n";
        let devs = decode_engi2cshow(text).unwrap();
        assert_eq!(devs.rtc_registers.len(), 1);
        assert_eq!(devs.rtc_registers[0].address, 0x68);
    }

    #[test]
    fn empty_reply_is_malformed() {
        assert!(matches!(
            decode_engi2cshow("ENGI2CSHOW\r\n\r\n"),
            Err(Error::MalformedResponse(_))
        ));
        assert!(decode_engi2cshow("").is_err());
    }

    #[test]
    fn board_id_catalog() {
        assert_eq!(BoardId::from_id(50_007), Some(BoardId::Io));
        assert_eq!(BoardId::from_id(50_022), Some(BoardId::Receiver));
        assert_eq!(BoardId::from_id(1), None);
        assert_eq!(BoardId::all().len(), 6);
        for &id in BoardId::all() {
            assert_eq!(BoardId::from_id(id.id()), Some(id));
        }
        assert_eq!(BoardId::Backplane.to_string(), "Backplane");
    }

    #[test]
    fn serde_round_trip_preserves_the_inventory() {
        let devs = decode_engi2cshow(DUMP).unwrap();
        let json = serde_json::to_string(&devs).unwrap();
        let back: I2cMemDevs = serde_json::from_str(&json).unwrap();
        assert_eq!(devs, back);
    }
}
