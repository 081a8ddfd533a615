//! Validated deployment command model for adcplib.
//!
//! This crate models everything a deployment sends to the instrument at
//! provisioning time. It provides:
//!
//! - **Instrument-wide commands** ([`deployment`]) -- ensemble timing,
//!   environmental overrides, heading configuration, serial port rate,
//!   and the stored CEPO ping order.
//! - **Per-subsystem commands** ([`profile`]) -- water profile, bottom
//!   track, and water track blocks, rendered with the `[n]` CEPO index
//!   suffix that addresses one slot.
//! - **Whole-instrument configuration** ([`configuration`]) -- CEPO
//!   allocation against a serial number, slot identity and lookup, and
//!   the full deployment script.
//! - **Deployment options** ([`options`]) -- duration, batteries, depth,
//!   and operating mode for power and storage planning.
//!
//! # Validation model
//!
//! Every bounded setter is validate-or-default: an out-of-range value is
//! never stored and never an error; the field silently resets to its
//! documented default. Rendered command strings are therefore always
//! acceptable to the instrument, and callers detect rejection by reading
//! the field back. `NaN` never passes a range check.
//!
//! # Example
//!
//! ```
//! use adcplib_core::SerialNumber;
//! use adcplib_commands::AdcpConfiguration;
//!
//! let serial = SerialNumber::parse("01230000000000000000000000000001")?;
//! let mut config = AdcpConfiguration::new(serial.clone());
//! config.set_cepo("23", &serial);
//!
//! // The full provisioning script: instrument-wide commands with CEPO
//! // last, then one command block per slot.
//! let script = config.command_list();
//! assert!(script.contains(&"CEPO 23".to_string()));
//! assert!(script.contains(&"CWPON[0] 1".to_string()));
//! assert!(script.contains(&"CWPON[1] 1".to_string()));
//! # Ok::<(), adcplib_core::Error>(())
//! ```

pub mod configuration;
pub mod deployment;
pub mod options;
pub mod profile;

// Re-export the primary types for ergonomic `use adcplib_commands::*`.
pub use configuration::{AdcpConfiguration, SubsystemConfiguration};
pub use deployment::{AdcpCommands, AdcpMode, BaudRate, HeadingSource, OutputFormat};
pub use options::{BatteryType, DeploymentMode, DeploymentOptions};
pub use profile::{
    BottomTrackCommands, BtBandMode, SubsystemCommands, WaterProfileCommands, WaterTrackCommands,
    WpBandMode,
};
