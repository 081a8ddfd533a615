//! Serial protocol codec for adcplib.
//!
//! This crate implements the ASCII serial protocol the instrument speaks
//! at provisioning time: CR-terminated commands out, free-form text
//! replies back. It provides:
//!
//! - **Wire framing** ([`wire`]) -- encode commands with the CR
//!   terminator and tokenize reply text into content lines.
//! - **BREAK banner** ([`banner`]) -- decode the identity banner into
//!   serial number, firmware version, and hardware line.
//! - **Clock** ([`clock`]) -- decode `STIME` replies and render the
//!   set-clock command.
//! - **Attitude** ([`attitude`]) -- decode `ENGPNI` heading/pitch/roll.
//! - **I2C inventory** ([`i2c`]) -- decode `ENGI2CSHOW` register banks
//!   and the circuit-board EEPROM entries.
//! - **Recorder** ([`storage`]) -- decode `DSDIR` memory card listings.
//!
//! Every decoder is a pure text-to-struct function. Structural failures
//! (a missing required token) return [`adcplib_core::Error`]; unparsable
//! rows inside tables are skipped so one corrupt line never hides the
//! rest of a reply. Nothing here touches a transport: callers bring
//! their own serial port and hand the reply text in.
//!
//! # Example
//!
//! ```
//! use adcplib_protocol::wire::encode_command;
//! use adcplib_protocol::banner::decode_break;
//!
//! // Commands go out CR-terminated.
//! assert_eq!(encode_command("CWPON[0] 1"), b"CWPON[0] 1\r");
//!
//! // Replies come back as text.
//! let banner = "DP1200 DP600\r\n\
//!               SN: 01230000000000000000000000000001\r\n\
//!               FW: 00.02.09 Apr 17 2014 05:40:11\r\n";
//! let info = decode_break(banner)?;
//! assert_eq!(info.serial_number.system_serial(), Some(1));
//! # Ok::<(), adcplib_core::Error>(())
//! ```

pub mod attitude;
pub mod banner;
pub mod clock;
pub mod i2c;
pub mod storage;
pub mod wire;

// Re-export the decoded types for ergonomic `use adcplib_protocol::*`.
pub use attitude::Hpr;
pub use banner::BreakInfo;
pub use i2c::{BoardId, I2cBoard, I2cMemDevs, I2cRegister};
pub use storage::{DirectoryEntry, DirectoryListing};
