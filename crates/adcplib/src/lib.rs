//! # adcplib -- Deployment Configuration for Acoustic Doppler Profilers
//!
//! `adcplib` models the command language of multi-frequency acoustic
//! Doppler current profilers (ADCPs): the serial-number and firmware
//! identity types, the validated deployment command sets, CEPO slot
//! allocation, and the text-protocol decoders for the instrument's
//! diagnostic replies. It is designed for deployment planning software
//! and provisioning tools that need exact, instrument-acceptable command
//! strings without owning a serial port.
//!
//! ## Quick Start
//!
//! Add `adcplib` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! adcplib = "0.1"
//! ```
//!
//! Build a dual-frequency deployment and render its provisioning script:
//!
//! ```
//! use adcplib::SerialNumber;
//! use adcplib::commands::AdcpConfiguration;
//!
//! fn main() -> adcplib::Result<()> {
//!     let serial = SerialNumber::parse("01230000000000000000000000000001")?;
//!     let mut config = AdcpConfiguration::new(serial.clone());
//!
//!     // One slot per CEPO character: 1200 kHz twice, 600 kHz twice.
//!     config.set_cepo("2233", &serial);
//!
//!     // Tune the third slot's water profile.
//!     let three = config.subsystems()[2].subsystem();
//!     if let Some(slot) = config.get_mut(&three, 2) {
//!         slot.commands_mut().water_profile_mut().set_bin_count(60);
//!     }
//!
//!     for command in config.command_list() {
//!         println!("{command}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! The library is organized as a workspace of focused crates:
//!
//! | Crate               | Purpose                                          |
//! |---------------------|--------------------------------------------------|
//! | `adcplib-core`      | Serial number, subsystem catalog, firmware token, time values, errors |
//! | `adcplib-commands`  | Validated command sets, CEPO allocation, deployment options |
//! | `adcplib-protocol`  | Wire framing and decoders for BREAK/STIME/ENGPNI/ENGI2CSHOW/DSDIR |
//! | **`adcplib`**       | This facade crate -- re-exports everything       |
//!
//! ## Feature Flags
//!
//! | Feature    | Enables                               | Default |
//! |------------|---------------------------------------|---------|
//! | `commands` | [`commands`] module (command model)   | yes     |
//! | `protocol` | [`protocol`] module (codec, decoders) | yes     |
//!
//! The core identity types are always available; a telemetry consumer
//! that only decodes replies can drop the command model, and a planning
//! tool that never talks to hardware can drop the codec.
//!
//! ## Validation Model
//!
//! Command setters never fail: an out-of-range value silently resets the
//! field to its documented default, mirroring the instrument firmware's
//! own behavior. Structural operations (CEPO allocation, slot removal,
//! reply decoding) report failure explicitly through [`Result`].

pub use adcplib_core::*;

/// Deployment command model.
///
/// Provides [`AdcpConfiguration`](commands::AdcpConfiguration) for
/// whole-instrument CEPO allocation, the instrument-wide
/// [`AdcpCommands`](commands::AdcpCommands) set, per-slot
/// [`SubsystemCommands`](commands::SubsystemCommands) blocks, and
/// [`DeploymentOptions`](commands::DeploymentOptions).
#[cfg(feature = "commands")]
pub mod commands {
    pub use adcplib_commands::*;
}

/// Serial protocol codec.
///
/// Provides CR-terminated command framing and the decoders for the
/// instrument's diagnostic replies: [`decode_break`](protocol::banner::decode_break),
/// [`decode_stime`](protocol::clock::decode_stime),
/// [`decode_engpni`](protocol::attitude::decode_engpni),
/// [`decode_engi2cshow`](protocol::i2c::decode_engi2cshow), and
/// [`decode_dsdir`](protocol::storage::decode_dsdir).
#[cfg(feature = "protocol")]
pub mod protocol {
    pub use adcplib_protocol::*;
}

/// Returns the catalog of subsystem configurations this library knows,
/// in code order.
///
/// This is the primary entry point for applications that enumerate
/// hardware options (e.g. a frequency picker). The catalog is fixed by
/// the product line, not by feature flags.
///
/// # Example
///
/// ```
/// for ty in adcplib::supported_subsystems() {
///     println!("{} -> {} Hz", ty.code(), ty.frequency_hz());
/// }
/// ```
pub fn supported_subsystems() -> Vec<SubsystemType> {
    SubsystemType::all().to_vec()
}
