//! Subsystem identification.
//!
//! A multi-frequency ADCP carries up to fifteen acoustic subsystems --
//! transducer/electronics pairs identified by a one-character code in the
//! instrument's serial number. [`Subsystem`] is the identity of one such
//! slot (code plus inventory ordinal); [`SubsystemType`] is the catalog of
//! known product configurations behind the codes, used for UI pickers and
//! frequency lookups.
//!
//! # Example
//!
//! ```
//! use adcplib_core::{Subsystem, SubsystemType};
//!
//! let ss = Subsystem::new('2', 0);
//! let ty = ss.subsystem_type().unwrap();
//! assert_eq!(ty, SubsystemType::Piston1200Khz);
//! assert_eq!(ty.frequency_hz(), 1_200_000);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// The serial-number character marking an unpopulated subsystem slot.
pub const EMPTY_SUBSYSTEM_CODE: char = '0';

/// Identity of one acoustic subsystem within an instrument.
///
/// `code` is the configuration character from the serial number; `index`
/// is the ordinal of that code's first appearance among the *distinct*
/// codes in the serial number (0-based). Two instruments with serials
/// `..22..` and `..2..` both expose code `'2'` at index 0; a dual-frequency
/// `..23..` unit exposes `'2'` at 0 and `'3'` at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Subsystem {
    code: char,
    index: u32,
}

impl Subsystem {
    /// Create a subsystem identity from a raw code and inventory ordinal.
    pub fn new(code: char, index: u32) -> Self {
        Subsystem { code, index }
    }

    /// The configuration code character.
    pub fn code(&self) -> char {
        self.code
    }

    /// The inventory ordinal of this code within its serial number.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Look up the product configuration behind this code, if it is one of
    /// the known catalog entries.
    ///
    /// Codes outside the catalog are still valid identities -- validation
    /// is against the serial number, not this table.
    pub fn subsystem_type(&self) -> Option<SubsystemType> {
        SubsystemType::from_code(self.code)
    }
}

impl fmt::Display for Subsystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

/// Known acoustic subsystem product configurations.
///
/// Each variant is one transducer configuration the manufacturer ships:
/// four-beam 20-degree pistons (straight and 45-degree offset heads),
/// single-beam vertical pistons, and four-beam phased arrays at 30- and
/// 15-degree beam angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubsystemType {
    /// 2 MHz 4-beam 20 degree piston (code `1`).
    Piston2Mhz,
    /// 1.2 MHz 4-beam 20 degree piston (code `2`).
    Piston1200Khz,
    /// 600 kHz 4-beam 20 degree piston (code `3`).
    Piston600Khz,
    /// 300 kHz 4-beam 20 degree piston (code `4`).
    Piston300Khz,
    /// 2 MHz 4-beam 20 degree piston, 45 degree offset head (code `5`).
    OffsetPiston2Mhz,
    /// 1.2 MHz 4-beam 20 degree piston, 45 degree offset head (code `6`).
    OffsetPiston1200Khz,
    /// 600 kHz 4-beam 20 degree piston, 45 degree offset head (code `7`).
    OffsetPiston600Khz,
    /// 300 kHz 4-beam 20 degree piston, 45 degree offset head (code `8`).
    OffsetPiston300Khz,
    /// 2 MHz vertical beam piston (code `9`).
    Vertical2Mhz,
    /// 1.2 MHz vertical beam piston (code `A`).
    Vertical1200Khz,
    /// 600 kHz vertical beam piston (code `B`).
    Vertical600Khz,
    /// 300 kHz vertical beam piston (code `C`).
    Vertical300Khz,
    /// 150 kHz vertical beam piston (code `D`).
    Vertical150Khz,
    /// 75 kHz vertical beam piston (code `E`).
    Vertical75Khz,
    /// 38 kHz vertical beam piston (code `F`).
    Vertical38Khz,
    /// 20 kHz vertical beam piston (code `G`).
    Vertical20Khz,
    /// 600 kHz 4-beam 30 degree array (code `I`).
    Array30Deg600Khz,
    /// 300 kHz 4-beam 30 degree array (code `J`).
    Array30Deg300Khz,
    /// 150 kHz 4-beam 30 degree array (code `K`).
    Array30Deg150Khz,
    /// 75 kHz 4-beam 30 degree array (code `L`).
    Array30Deg75Khz,
    /// 38 kHz 4-beam 30 degree array (code `M`).
    Array30Deg38Khz,
    /// 20 kHz 4-beam 30 degree array (code `N`).
    Array30Deg20Khz,
    /// 600 kHz 4-beam 15 degree array (code `O`).
    Array15Deg600Khz,
    /// 300 kHz 4-beam 15 degree array (code `P`).
    Array15Deg300Khz,
    /// 150 kHz 4-beam 15 degree array (code `Q`).
    Array15Deg150Khz,
    /// 75 kHz 4-beam 15 degree array (code `R`).
    Array15Deg75Khz,
}

/// All catalog entries in code order.
const ALL_SUBSYSTEM_TYPES: &[SubsystemType] = &[
    SubsystemType::Piston2Mhz,
    SubsystemType::Piston1200Khz,
    SubsystemType::Piston600Khz,
    SubsystemType::Piston300Khz,
    SubsystemType::OffsetPiston2Mhz,
    SubsystemType::OffsetPiston1200Khz,
    SubsystemType::OffsetPiston600Khz,
    SubsystemType::OffsetPiston300Khz,
    SubsystemType::Vertical2Mhz,
    SubsystemType::Vertical1200Khz,
    SubsystemType::Vertical600Khz,
    SubsystemType::Vertical300Khz,
    SubsystemType::Vertical150Khz,
    SubsystemType::Vertical75Khz,
    SubsystemType::Vertical38Khz,
    SubsystemType::Vertical20Khz,
    SubsystemType::Array30Deg600Khz,
    SubsystemType::Array30Deg300Khz,
    SubsystemType::Array30Deg150Khz,
    SubsystemType::Array30Deg75Khz,
    SubsystemType::Array30Deg38Khz,
    SubsystemType::Array30Deg20Khz,
    SubsystemType::Array15Deg600Khz,
    SubsystemType::Array15Deg300Khz,
    SubsystemType::Array15Deg150Khz,
    SubsystemType::Array15Deg75Khz,
];

impl SubsystemType {
    /// Returns the catalog entry for a configuration code, or `None` for
    /// codes outside the catalog (including the empty-slot marker `'0'`).
    pub fn from_code(code: char) -> Option<SubsystemType> {
        ALL_SUBSYSTEM_TYPES
            .iter()
            .copied()
            .find(|ty| ty.code() == code)
    }

    /// The configuration code character for this entry.
    pub fn code(&self) -> char {
        match self {
            SubsystemType::Piston2Mhz => '1',
            SubsystemType::Piston1200Khz => '2',
            SubsystemType::Piston600Khz => '3',
            SubsystemType::Piston300Khz => '4',
            SubsystemType::OffsetPiston2Mhz => '5',
            SubsystemType::OffsetPiston1200Khz => '6',
            SubsystemType::OffsetPiston600Khz => '7',
            SubsystemType::OffsetPiston300Khz => '8',
            SubsystemType::Vertical2Mhz => '9',
            SubsystemType::Vertical1200Khz => 'A',
            SubsystemType::Vertical600Khz => 'B',
            SubsystemType::Vertical300Khz => 'C',
            SubsystemType::Vertical150Khz => 'D',
            SubsystemType::Vertical75Khz => 'E',
            SubsystemType::Vertical38Khz => 'F',
            SubsystemType::Vertical20Khz => 'G',
            SubsystemType::Array30Deg600Khz => 'I',
            SubsystemType::Array30Deg300Khz => 'J',
            SubsystemType::Array30Deg150Khz => 'K',
            SubsystemType::Array30Deg75Khz => 'L',
            SubsystemType::Array30Deg38Khz => 'M',
            SubsystemType::Array30Deg20Khz => 'N',
            SubsystemType::Array15Deg600Khz => 'O',
            SubsystemType::Array15Deg300Khz => 'P',
            SubsystemType::Array15Deg150Khz => 'Q',
            SubsystemType::Array15Deg75Khz => 'R',
        }
    }

    /// Nominal operating frequency in hertz.
    pub fn frequency_hz(&self) -> u32 {
        match self {
            SubsystemType::Piston2Mhz
            | SubsystemType::OffsetPiston2Mhz
            | SubsystemType::Vertical2Mhz => 2_000_000,
            SubsystemType::Piston1200Khz
            | SubsystemType::OffsetPiston1200Khz
            | SubsystemType::Vertical1200Khz => 1_200_000,
            SubsystemType::Piston600Khz
            | SubsystemType::OffsetPiston600Khz
            | SubsystemType::Vertical600Khz
            | SubsystemType::Array30Deg600Khz
            | SubsystemType::Array15Deg600Khz => 600_000,
            SubsystemType::Piston300Khz
            | SubsystemType::OffsetPiston300Khz
            | SubsystemType::Vertical300Khz
            | SubsystemType::Array30Deg300Khz
            | SubsystemType::Array15Deg300Khz => 300_000,
            SubsystemType::Vertical150Khz
            | SubsystemType::Array30Deg150Khz
            | SubsystemType::Array15Deg150Khz => 150_000,
            SubsystemType::Vertical75Khz
            | SubsystemType::Array30Deg75Khz
            | SubsystemType::Array15Deg75Khz => 75_000,
            SubsystemType::Vertical38Khz | SubsystemType::Array30Deg38Khz => 38_000,
            SubsystemType::Vertical20Khz | SubsystemType::Array30Deg20Khz => 20_000,
        }
    }

    /// Returns `true` for the single-beam vertical piston configurations.
    ///
    /// Vertical subsystems are typically paired with a four-beam system for
    /// surface tracking and carry no bottom-track block of their own.
    pub fn is_vertical(&self) -> bool {
        matches!(
            self,
            SubsystemType::Vertical2Mhz
                | SubsystemType::Vertical1200Khz
                | SubsystemType::Vertical600Khz
                | SubsystemType::Vertical300Khz
                | SubsystemType::Vertical150Khz
                | SubsystemType::Vertical75Khz
                | SubsystemType::Vertical38Khz
                | SubsystemType::Vertical20Khz
        )
    }

    /// Human-readable configuration label (e.g. "1.2 MHz 4 beam 20 degree piston").
    pub fn label(&self) -> &'static str {
        match self {
            SubsystemType::Piston2Mhz => "2 MHz 4 beam 20 degree piston",
            SubsystemType::Piston1200Khz => "1.2 MHz 4 beam 20 degree piston",
            SubsystemType::Piston600Khz => "600 kHz 4 beam 20 degree piston",
            SubsystemType::Piston300Khz => "300 kHz 4 beam 20 degree piston",
            SubsystemType::OffsetPiston2Mhz => "2 MHz 4 beam 20 degree piston, 45 degree offset",
            SubsystemType::OffsetPiston1200Khz => {
                "1.2 MHz 4 beam 20 degree piston, 45 degree offset"
            }
            SubsystemType::OffsetPiston600Khz => {
                "600 kHz 4 beam 20 degree piston, 45 degree offset"
            }
            SubsystemType::OffsetPiston300Khz => {
                "300 kHz 4 beam 20 degree piston, 45 degree offset"
            }
            SubsystemType::Vertical2Mhz => "2 MHz vertical beam piston",
            SubsystemType::Vertical1200Khz => "1.2 MHz vertical beam piston",
            SubsystemType::Vertical600Khz => "600 kHz vertical beam piston",
            SubsystemType::Vertical300Khz => "300 kHz vertical beam piston",
            SubsystemType::Vertical150Khz => "150 kHz vertical beam piston",
            SubsystemType::Vertical75Khz => "75 kHz vertical beam piston",
            SubsystemType::Vertical38Khz => "38 kHz vertical beam piston",
            SubsystemType::Vertical20Khz => "20 kHz vertical beam piston",
            SubsystemType::Array30Deg600Khz => "600 kHz 4 beam 30 degree array",
            SubsystemType::Array30Deg300Khz => "300 kHz 4 beam 30 degree array",
            SubsystemType::Array30Deg150Khz => "150 kHz 4 beam 30 degree array",
            SubsystemType::Array30Deg75Khz => "75 kHz 4 beam 30 degree array",
            SubsystemType::Array30Deg38Khz => "38 kHz 4 beam 30 degree array",
            SubsystemType::Array30Deg20Khz => "20 kHz 4 beam 30 degree array",
            SubsystemType::Array15Deg600Khz => "600 kHz 4 beam 15 degree array",
            SubsystemType::Array15Deg300Khz => "300 kHz 4 beam 15 degree array",
            SubsystemType::Array15Deg150Khz => "150 kHz 4 beam 15 degree array",
            SubsystemType::Array15Deg75Khz => "75 kHz 4 beam 15 degree array",
        }
    }

    /// Returns a slice of all catalog entries in code order.
    pub fn all() -> &'static [SubsystemType] {
        ALL_SUBSYSTEM_TYPES
    }
}

impl fmt::Display for SubsystemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
