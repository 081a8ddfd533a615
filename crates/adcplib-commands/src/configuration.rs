//! Whole-instrument configuration: CEPO allocation and slot management.
//!
//! The CEPO command defines the ping order as a string of subsystem code
//! characters; each character allocates one slot, and every slot carries
//! its own [`SubsystemCommands`] block. [`AdcpConfiguration`] keeps the
//! CEPO string and the slot vector consistent: position in the vector is
//! the CEPO index, always.
//!
//! Slot identity is the pair (subsystem, CEPO index). A dual-frequency
//! instrument pinging `"2233"` has four distinct slots even though only
//! two subsystem codes appear.
//!
//! # Example
//!
//! ```
//! use adcplib_core::SerialNumber;
//! use adcplib_commands::AdcpConfiguration;
//!
//! let serial = SerialNumber::parse("01230000000000000000000000000001")?;
//! let mut config = AdcpConfiguration::new(serial.clone());
//!
//! config.set_cepo("2233", &serial);
//! assert_eq!(config.subsystems().len(), 4);
//! assert_eq!(config.commands().cepo(), "2233");
//! # Ok::<(), adcplib_core::Error>(())
//! ```

use adcplib_core::{Error, Result, SerialNumber, Subsystem};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::deployment::AdcpCommands;
use crate::options::DeploymentOptions;
use crate::profile::SubsystemCommands;

// ---------------------------------------------------------------
// One CEPO slot
// ---------------------------------------------------------------

/// The configuration of a single CEPO slot: which subsystem pings there
/// and the command block it pings with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubsystemConfiguration {
    subsystem: Subsystem,
    cepo_index: u32,
    commands: SubsystemCommands,
}

impl SubsystemConfiguration {
    /// Create a slot configuration with default commands.
    pub fn new(subsystem: Subsystem, cepo_index: u32) -> Self {
        SubsystemConfiguration {
            subsystem,
            cepo_index,
            commands: SubsystemCommands::new(),
        }
    }

    /// The subsystem pinging in this slot.
    pub fn subsystem(&self) -> Subsystem {
        self.subsystem
    }

    /// The slot's position in the CEPO string.
    pub fn cepo_index(&self) -> u32 {
        self.cepo_index
    }

    /// The slot's command block.
    pub fn commands(&self) -> &SubsystemCommands {
        &self.commands
    }

    /// Mutable access to the slot's command block.
    pub fn commands_mut(&mut self) -> &mut SubsystemCommands {
        &mut self.commands
    }

    /// Render the slot's commands, addressed to this slot's CEPO index.
    pub fn command_list(&self) -> Vec<String> {
        self.commands.command_list(self.cepo_index)
    }
}

// ---------------------------------------------------------------
// Whole-instrument configuration
// ---------------------------------------------------------------

/// Everything needed to provision one instrument for a deployment:
/// instrument-wide commands, deployment options, and one command block
/// per CEPO slot.
///
/// A plain owned value. Callers that need to share one configuration
/// between observers hand out borrows or wrap it themselves; nothing
/// here synchronizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdcpConfiguration {
    serial: SerialNumber,
    commands: AdcpCommands,
    deployment: DeploymentOptions,
    subsystems: Vec<SubsystemConfiguration>,
}

impl AdcpConfiguration {
    /// Create a configuration for the instrument with the given serial
    /// number. No slots are allocated until [`set_cepo`] runs.
    ///
    /// [`set_cepo`]: AdcpConfiguration::set_cepo
    pub fn new(serial: SerialNumber) -> Self {
        AdcpConfiguration {
            serial,
            commands: AdcpCommands::new(),
            deployment: DeploymentOptions::new(),
            subsystems: Vec::new(),
        }
    }

    /// The serial number this configuration targets.
    pub fn serial(&self) -> &SerialNumber {
        &self.serial
    }

    /// The instrument-wide command set.
    pub fn commands(&self) -> &AdcpCommands {
        &self.commands
    }

    /// Mutable access to the instrument-wide command set.
    ///
    /// The stored CEPO string is managed by [`set_cepo`],
    /// [`add_configuration`] and [`remove_configuration`]; setting it
    /// directly here desynchronizes it from the slot vector.
    ///
    /// [`set_cepo`]: AdcpConfiguration::set_cepo
    /// [`add_configuration`]: AdcpConfiguration::add_configuration
    /// [`remove_configuration`]: AdcpConfiguration::remove_configuration
    pub fn commands_mut(&mut self) -> &mut AdcpCommands {
        &mut self.commands
    }

    /// The deployment planning options.
    pub fn deployment(&self) -> &DeploymentOptions {
        &self.deployment
    }

    /// Mutable access to the deployment planning options.
    pub fn deployment_mut(&mut self) -> &mut DeploymentOptions {
        &mut self.deployment
    }

    /// The slot configurations, in CEPO order.
    pub fn subsystems(&self) -> &[SubsystemConfiguration] {
        &self.subsystems
    }

    /// Whether `cepo` is acceptable for the given serial number:
    /// non-empty, and every character names a subsystem the serial
    /// number actually carries.
    pub fn validate_cepo(cepo: &str, serial: &SerialNumber) -> bool {
        !cepo.is_empty() && cepo.chars().all(|code| serial.subsystem(code).is_some())
    }

    /// Replace the ping order wholesale.
    ///
    /// All or nothing: when every character of `cepo` resolves against
    /// `serial`, one default slot is allocated per character and the
    /// string is stored verbatim in the command set. When any character
    /// fails to resolve (or `cepo` is empty) every existing slot is
    /// dropped, the stored CEPO resets to empty, and the returned slice
    /// is empty. Previous slot command blocks do not survive either way.
    pub fn set_cepo(&mut self, cepo: &str, serial: &SerialNumber) -> &[SubsystemConfiguration] {
        if !Self::validate_cepo(cepo, serial) {
            warn!(cepo, serial = %serial, "rejected CEPO, clearing slot configurations");
            self.subsystems.clear();
            self.commands.set_cepo("");
            return &self.subsystems;
        }
        self.subsystems = cepo
            .chars()
            .enumerate()
            .filter_map(|(i, code)| {
                serial
                    .subsystem(code)
                    .map(|subsystem| SubsystemConfiguration::new(subsystem, i as u32))
            })
            .collect();
        self.commands.set_cepo(cepo);
        &self.subsystems
    }

    /// Whether a slot with this exact identity exists.
    pub fn exists(&self, subsystem: &Subsystem, cepo_index: u32) -> bool {
        self.get(subsystem, cepo_index).is_some()
    }

    /// Look up a slot by identity.
    pub fn get(&self, subsystem: &Subsystem, cepo_index: u32) -> Option<&SubsystemConfiguration> {
        self.subsystems
            .get(cepo_index as usize)
            .filter(|slot| slot.subsystem == *subsystem)
    }

    /// Look up a slot by identity, mutably.
    pub fn get_mut(
        &mut self,
        subsystem: &Subsystem,
        cepo_index: u32,
    ) -> Option<&mut SubsystemConfiguration> {
        self.subsystems
            .get_mut(cepo_index as usize)
            .filter(|slot| slot.subsystem == *subsystem)
    }

    /// Append one slot for `subsystem` at the end of the ping order.
    ///
    /// The subsystem is resolved against the configuration's own serial
    /// number, so the stored slot always carries the serial number's
    /// inventory index for that code. Fails with
    /// [`Error::SubsystemNotFound`] when the serial number has no such
    /// subsystem.
    pub fn add_configuration(&mut self, subsystem: &Subsystem) -> Result<&SubsystemConfiguration> {
        let code = subsystem.code();
        let resolved = self
            .serial
            .subsystem(code)
            .ok_or(Error::SubsystemNotFound(code))?;
        let cepo_index = self.subsystems.len() as u32;
        debug!(%code, cepo_index, "appending slot configuration");
        self.subsystems
            .push(SubsystemConfiguration::new(resolved, cepo_index));

        let mut cepo = self.commands.cepo().to_string();
        cepo.push(code);
        self.commands.set_cepo(&cepo);

        let last = self.subsystems.len() - 1;
        Ok(&self.subsystems[last])
    }

    /// Remove the slot with this exact identity.
    ///
    /// Closes the gap in the CEPO string and re-indexes every following
    /// slot so position and CEPO index stay equal. Returns `false`
    /// without mutating anything when no slot matches.
    pub fn remove_configuration(&mut self, subsystem: &Subsystem, cepo_index: u32) -> bool {
        if !self.exists(subsystem, cepo_index) {
            return false;
        }
        debug!(code = %subsystem.code(), cepo_index, "removing slot configuration");
        self.subsystems.remove(cepo_index as usize);
        for (i, slot) in self.subsystems.iter_mut().enumerate() {
            slot.cepo_index = i as u32;
        }
        let cepo: String = self
            .subsystems
            .iter()
            .map(|slot| slot.subsystem.code())
            .collect();
        self.commands.set_cepo(&cepo);
        true
    }

    /// Render the full deployment script: instrument-wide commands (CEPO
    /// last) followed by every slot's command block in CEPO order.
    ///
    /// CEPO re-allocates slot state inside the instrument, so the
    /// per-slot commands must follow it; this ordering is what makes the
    /// script safe to send top to bottom.
    pub fn command_list(&self) -> Vec<String> {
        let mut list = self.commands.command_list();
        for slot in &self.subsystems {
            list.extend(slot.command_list());
        }
        list
    }
}
