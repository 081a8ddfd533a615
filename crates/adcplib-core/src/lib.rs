//! adcplib-core: Core types and error definitions for adcplib.
//!
//! This crate defines the instrument-level vocabulary the rest of adcplib
//! is built on: serial numbers and the subsystem inventory they encode,
//! firmware version tokens, interval time values, and error handling.
//! The command model and the wire-protocol decoders depend on these types
//! without pulling in each other.
//!
//! # Key types
//!
//! - [`SerialNumber`] -- the 32-character serial/inventory string
//! - [`Subsystem`] / [`SubsystemType`] -- acoustic subsystem identities
//! - [`FirmwareVersion`] -- the packed four-byte firmware token
//! - [`TimeValue`] -- `HH:MM:SS.hh` intervals with firmware carry rules
//! - [`Error`] / [`Result`] -- error handling

pub mod error;
pub mod firmware;
pub mod serial;
pub mod subsystem;
pub mod time;

// Re-export key types at crate root for ergonomic `use adcplib_core::*`.
pub use error::{Error, Result};
pub use firmware::{FirmwareVersion, FIRMWARE_LEN};
pub use serial::{SerialNumber, SERIAL_NUMBER_LEN, SUBSYSTEM_SLOT_COUNT};
pub use subsystem::{Subsystem, SubsystemType, EMPTY_SUBSYSTEM_CODE};
pub use time::{ParseTimeValueError, TimeValue};
