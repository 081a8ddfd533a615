//! Instrument-wide deployment commands.
//!
//! [`AdcpCommands`] holds one validated field per instrument-wide command:
//! profiling mode, ensemble timing, recording and output options, the
//! environmental overrides, heading configuration, and the serial port
//! baud rates. Every field renders its exact command string, and
//! [`AdcpCommands::command_list`] renders the whole block in deployment
//! order.
//!
//! All functions are pure -- they produce strings without performing any
//! I/O. The caller is responsible for framing the strings (see the wire
//! module of the protocol crate) and sending them over a transport.
//!
//! # Validation
//!
//! Setters never fail. A value outside the command's valid range resets
//! the field to its documented default instead; callers that need to
//! detect the rejection read the field back after writing. Structural
//! errors are reserved for configuration-level operations.
//!
//! # Command reference
//!
//! | Command  | Meaning                         | Valid            | Default        |
//! |----------|---------------------------------|------------------|----------------|
//! | CPROFILE / CDVL | profiling vs. DVL mode   | --               | CPROFILE       |
//! | CEI      | ensemble interval               | any `HH:MM:SS.hh`| `00:00:01.00`  |
//! | CETFP    | time of first ping              | any timestamp    | 2000/01/01     |
//! | CERECORD | record ensembles, single ping   | --               | `1,0`          |
//! | CEOUTPUT | output format                   | 0, 1, 100        | 1 (binary)     |
//! | CWS      | water salinity (ppt)            | 0 to 50          | 0              |
//! | CWT      | water temperature (deg C)       | -5 to 50         | 15             |
//! | CTD      | transducer depth (m)            | 0 to 1000        | 0              |
//! | CWSS     | speed of sound (m/s)            | 1400 to 1600     | 1490           |
//! | CHS      | heading source                  | 1, 2             | 1 (internal)   |
//! | CHO      | heading offset (deg)            | -180 to 180      | 0              |
//! | C232B    | RS-232 baud rate                | standard rates   | 115200         |
//! | C485B    | RS-485 baud rate                | standard rates   | 115200         |
//! | C422B    | RS-422 baud rate                | standard rates   | 115200         |
//! | CEPO     | subsystem ping order            | (see configuration) | empty       |

use std::fmt;
use std::ops::RangeInclusive;

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use adcplib_core::TimeValue;

// ---------------------------------------------------------------
// Valid ranges and defaults
// ---------------------------------------------------------------

/// Valid water salinity range (CWS) in parts per thousand.
const SALINITY_RANGE: RangeInclusive<f32> = 0.0..=50.0;
/// Default salinity: fresh water.
const DEFAULT_SALINITY: f32 = 0.0;

/// Valid water temperature range (CWT) in degrees Celsius.
const WATER_TEMPERATURE_RANGE: RangeInclusive<f32> = -5.0..=50.0;
/// Default water temperature in degrees Celsius.
const DEFAULT_WATER_TEMPERATURE: f32 = 15.0;

/// Valid transducer depth range (CTD) in meters.
const TRANSDUCER_DEPTH_RANGE: RangeInclusive<f32> = 0.0..=1000.0;
/// Default transducer depth in meters.
const DEFAULT_TRANSDUCER_DEPTH: f32 = 0.0;

/// Valid speed-of-sound range (CWSS) in meters per second.
const SPEED_OF_SOUND_RANGE: RangeInclusive<f32> = 1400.0..=1600.0;
/// Default speed of sound in meters per second.
const DEFAULT_SPEED_OF_SOUND: f32 = 1490.0;

/// Valid heading offset range (CHO) in degrees.
const HEADING_OFFSET_RANGE: RangeInclusive<f32> = -180.0..=180.0;
/// Default heading offset in degrees.
const DEFAULT_HEADING_OFFSET: f32 = 0.0;

/// Default ensemble interval (CEI): one ensemble per second.
fn default_ensemble_interval() -> TimeValue {
    TimeValue::new(0, 0, 1, 0)
}

/// Default time of first ping (CETFP): the instrument epoch.
fn default_time_of_first_ping() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2000, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

// ---------------------------------------------------------------
// Command vocabularies
// ---------------------------------------------------------------

/// Top-level operating mode of the instrument.
///
/// The mode command has no argument; the keyword itself selects the mode,
/// so the display string doubles as the command string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AdcpMode {
    /// Water profiling (`CPROFILE`).
    #[default]
    Profile,
    /// Doppler velocity log (`CDVL`).
    Dvl,
}

impl AdcpMode {
    /// The command keyword for this mode.
    pub fn command(&self) -> &'static str {
        match self {
            AdcpMode::Profile => "CPROFILE",
            AdcpMode::Dvl => "CDVL",
        }
    }
}

impl fmt::Display for AdcpMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command())
    }
}

/// Ensemble output format (CEOUTPUT).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// No ensemble output (`CEOUTPUT 0`).
    Disabled,
    /// Binary ensemble output (`CEOUTPUT 1`).
    #[default]
    Binary,
    /// ASCII DVL sentences (`CEOUTPUT 100`).
    AsciiDvl,
}

impl OutputFormat {
    /// The device ordinal this format renders as.
    pub fn code(&self) -> u8 {
        match self {
            OutputFormat::Disabled => 0,
            OutputFormat::Binary => 1,
            OutputFormat::AsciiDvl => 100,
        }
    }

    /// Returns the format for a device ordinal, or `None` for unknown codes.
    pub fn from_code(code: u8) -> Option<OutputFormat> {
        match code {
            0 => Some(OutputFormat::Disabled),
            1 => Some(OutputFormat::Binary),
            100 => Some(OutputFormat::AsciiDvl),
            _ => None,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutputFormat::Disabled => "Disabled",
            OutputFormat::Binary => "Binary",
            OutputFormat::AsciiDvl => "ASCII DVL",
        };
        write!(f, "{s}")
    }
}

/// Heading data source (CHS).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HeadingSource {
    /// Internal compass (`CHS 1`).
    #[default]
    Internal,
    /// External serial NMEA heading (`CHS 2`).
    Serial,
}

impl HeadingSource {
    /// The device ordinal this source renders as.
    pub fn code(&self) -> u8 {
        match self {
            HeadingSource::Internal => 1,
            HeadingSource::Serial => 2,
        }
    }

    /// Returns the source for a device ordinal, or `None` for unknown codes.
    pub fn from_code(code: u8) -> Option<HeadingSource> {
        match code {
            1 => Some(HeadingSource::Internal),
            2 => Some(HeadingSource::Serial),
            _ => None,
        }
    }
}

impl fmt::Display for HeadingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HeadingSource::Internal => "Internal",
            HeadingSource::Serial => "Serial",
        };
        write!(f, "{s}")
    }
}

/// Serial port baud rate (C232B / C485B / C422B).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BaudRate {
    /// 2400 baud.
    Baud2400,
    /// 4800 baud.
    Baud4800,
    /// 9600 baud.
    Baud9600,
    /// 19200 baud.
    Baud19200,
    /// 38400 baud.
    Baud38400,
    /// 57600 baud.
    Baud57600,
    /// 115200 baud (factory configuration).
    #[default]
    Baud115200,
    /// 230400 baud.
    Baud230400,
    /// 460800 baud.
    Baud460800,
    /// 921600 baud.
    Baud921600,
}

impl BaudRate {
    /// The rate in bits per second.
    pub fn bps(&self) -> u32 {
        match self {
            BaudRate::Baud2400 => 2_400,
            BaudRate::Baud4800 => 4_800,
            BaudRate::Baud9600 => 9_600,
            BaudRate::Baud19200 => 19_200,
            BaudRate::Baud38400 => 38_400,
            BaudRate::Baud57600 => 57_600,
            BaudRate::Baud115200 => 115_200,
            BaudRate::Baud230400 => 230_400,
            BaudRate::Baud460800 => 460_800,
            BaudRate::Baud921600 => 921_600,
        }
    }

    /// Returns the rate for a bits-per-second value, or `None` when the
    /// value is not one of the rates the instrument supports.
    pub fn from_bps(bps: u32) -> Option<BaudRate> {
        match bps {
            2_400 => Some(BaudRate::Baud2400),
            4_800 => Some(BaudRate::Baud4800),
            9_600 => Some(BaudRate::Baud9600),
            19_200 => Some(BaudRate::Baud19200),
            38_400 => Some(BaudRate::Baud38400),
            57_600 => Some(BaudRate::Baud57600),
            115_200 => Some(BaudRate::Baud115200),
            230_400 => Some(BaudRate::Baud230400),
            460_800 => Some(BaudRate::Baud460800),
            921_600 => Some(BaudRate::Baud921600),
            _ => None,
        }
    }
}

impl fmt::Display for BaudRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bps())
    }
}

// ---------------------------------------------------------------
// Instrument-wide command set
// ---------------------------------------------------------------

/// The instrument-wide command block of a deployment.
///
/// Fields are private; use the setters (which validate-or-default, never
/// fail) and the `cmd_*` renderers. The CEPO field is normally driven
/// through `AdcpConfiguration::set_cepo`, which validates the string
/// against the instrument's hardware inventory before storing it here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdcpCommands {
    mode: AdcpMode,
    ensemble_interval: TimeValue,
    time_of_first_ping: NaiveDateTime,
    record_ensembles: bool,
    record_single_ping: bool,
    output_format: OutputFormat,
    salinity_ppt: f32,
    water_temperature_c: f32,
    transducer_depth_m: f32,
    speed_of_sound_mps: f32,
    heading_source: HeadingSource,
    heading_offset_deg: f32,
    rs232_baud: BaudRate,
    rs485_baud: BaudRate,
    rs422_baud: BaudRate,
    cepo: String,
}

impl Default for AdcpCommands {
    fn default() -> Self {
        AdcpCommands {
            mode: AdcpMode::default(),
            ensemble_interval: default_ensemble_interval(),
            time_of_first_ping: default_time_of_first_ping(),
            record_ensembles: true,
            record_single_ping: false,
            output_format: OutputFormat::default(),
            salinity_ppt: DEFAULT_SALINITY,
            water_temperature_c: DEFAULT_WATER_TEMPERATURE,
            transducer_depth_m: DEFAULT_TRANSDUCER_DEPTH,
            speed_of_sound_mps: DEFAULT_SPEED_OF_SOUND,
            heading_source: HeadingSource::default(),
            heading_offset_deg: DEFAULT_HEADING_OFFSET,
            rs232_baud: BaudRate::default(),
            rs485_baud: BaudRate::default(),
            rs422_baud: BaudRate::default(),
            cepo: String::new(),
        }
    }
}

impl AdcpCommands {
    /// Create a command set with every field at its factory default.
    pub fn new() -> Self {
        AdcpCommands::default()
    }

    // ---------------------------------------------------------------
    // Mode
    // ---------------------------------------------------------------

    /// Operating mode (CPROFILE / CDVL).
    pub fn mode(&self) -> AdcpMode {
        self.mode
    }

    /// Set the operating mode.
    pub fn set_mode(&mut self, mode: AdcpMode) {
        self.mode = mode;
    }

    /// Render the mode command (`CPROFILE` or `CDVL`).
    pub fn cmd_mode(&self) -> String {
        self.mode.command().to_string()
    }

    // ---------------------------------------------------------------
    // Ensemble timing
    // ---------------------------------------------------------------

    /// Ensemble interval (CEI).
    pub fn ensemble_interval(&self) -> TimeValue {
        self.ensemble_interval
    }

    /// Set the ensemble interval. Any interval is valid; over-range
    /// fields have already been carried by [`TimeValue`].
    pub fn set_ensemble_interval(&mut self, interval: TimeValue) {
        self.ensemble_interval = interval;
    }

    /// Render the ensemble interval command (`CEI 00:00:01.00`).
    pub fn cmd_cei(&self) -> String {
        format!("CEI {}", self.ensemble_interval)
    }

    /// Time of first ping (CETFP).
    pub fn time_of_first_ping(&self) -> NaiveDateTime {
        self.time_of_first_ping
    }

    /// Set the time of first ping. Any timestamp is valid.
    pub fn set_time_of_first_ping(&mut self, when: NaiveDateTime) {
        self.time_of_first_ping = when;
    }

    /// Render the time-of-first-ping command
    /// (`CETFP 2000/01/01,00:00:00.00`), zero-padding every field.
    pub fn cmd_cetfp(&self) -> String {
        let hundredths = (self.time_of_first_ping.nanosecond() / 10_000_000).min(99);
        format!(
            "CETFP {}.{hundredths:02}",
            self.time_of_first_ping.format("%Y/%m/%d,%H:%M:%S")
        )
    }

    // ---------------------------------------------------------------
    // Recording and output
    // ---------------------------------------------------------------

    /// Whether ensembles are recorded to the internal card (CERECORD, first flag).
    pub fn record_ensembles(&self) -> bool {
        self.record_ensembles
    }

    /// Whether single-ping data is recorded (CERECORD, second flag).
    pub fn record_single_ping(&self) -> bool {
        self.record_single_ping
    }

    /// Set both recording flags.
    pub fn set_record(&mut self, ensembles: bool, single_ping: bool) {
        self.record_ensembles = ensembles;
        self.record_single_ping = single_ping;
    }

    /// Render the recording command (`CERECORD 1,0`).
    pub fn cmd_cerecord(&self) -> String {
        format!(
            "CERECORD {},{}",
            u8::from(self.record_ensembles),
            u8::from(self.record_single_ping)
        )
    }

    /// Ensemble output format (CEOUTPUT).
    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    /// Set the ensemble output format.
    pub fn set_output_format(&mut self, format: OutputFormat) {
        self.output_format = format;
    }

    /// Render the output format command (`CEOUTPUT 1`).
    pub fn cmd_ceoutput(&self) -> String {
        format!("CEOUTPUT {}", self.output_format.code())
    }

    // ---------------------------------------------------------------
    // Environment
    // ---------------------------------------------------------------

    /// Water salinity (CWS) in parts per thousand.
    pub fn salinity(&self) -> f32 {
        self.salinity_ppt
    }

    /// Set the water salinity in parts per thousand.
    ///
    /// Valid range 0 to 50 ppt; out-of-range values reset the field to
    /// the fresh-water default of 0.
    pub fn set_salinity(&mut self, ppt: f32) {
        self.salinity_ppt = if SALINITY_RANGE.contains(&ppt) {
            ppt
        } else {
            DEFAULT_SALINITY
        };
    }

    /// Render the salinity command (`CWS 0`).
    pub fn cmd_cws(&self) -> String {
        format!("CWS {}", self.salinity_ppt)
    }

    /// Water temperature (CWT) in degrees Celsius.
    pub fn water_temperature(&self) -> f32 {
        self.water_temperature_c
    }

    /// Set the water temperature in degrees Celsius.
    ///
    /// Valid range -5 to 50; out-of-range values reset the field to the
    /// default of 15.
    pub fn set_water_temperature(&mut self, celsius: f32) {
        self.water_temperature_c = if WATER_TEMPERATURE_RANGE.contains(&celsius) {
            celsius
        } else {
            DEFAULT_WATER_TEMPERATURE
        };
    }

    /// Render the water temperature command (`CWT 15`).
    pub fn cmd_cwt(&self) -> String {
        format!("CWT {}", self.water_temperature_c)
    }

    /// Transducer depth (CTD) in meters.
    pub fn transducer_depth(&self) -> f32 {
        self.transducer_depth_m
    }

    /// Set the transducer depth in meters.
    ///
    /// Valid range 0 to 1000; out-of-range values reset the field to 0.
    pub fn set_transducer_depth(&mut self, meters: f32) {
        self.transducer_depth_m = if TRANSDUCER_DEPTH_RANGE.contains(&meters) {
            meters
        } else {
            DEFAULT_TRANSDUCER_DEPTH
        };
    }

    /// Render the transducer depth command (`CTD 0`).
    pub fn cmd_ctd(&self) -> String {
        format!("CTD {}", self.transducer_depth_m)
    }

    /// Speed of sound (CWSS) in meters per second.
    pub fn speed_of_sound(&self) -> f32 {
        self.speed_of_sound_mps
    }

    /// Set the speed of sound in meters per second.
    ///
    /// Valid range 1400 to 1600; out-of-range values reset the field to
    /// the default of 1490.
    pub fn set_speed_of_sound(&mut self, mps: f32) {
        self.speed_of_sound_mps = if SPEED_OF_SOUND_RANGE.contains(&mps) {
            mps
        } else {
            DEFAULT_SPEED_OF_SOUND
        };
    }

    /// Render the speed-of-sound command (`CWSS 1490`).
    pub fn cmd_cwss(&self) -> String {
        format!("CWSS {}", self.speed_of_sound_mps)
    }

    // ---------------------------------------------------------------
    // Heading
    // ---------------------------------------------------------------

    /// Heading source (CHS).
    pub fn heading_source(&self) -> HeadingSource {
        self.heading_source
    }

    /// Set the heading source.
    pub fn set_heading_source(&mut self, source: HeadingSource) {
        self.heading_source = source;
    }

    /// Render the heading source command (`CHS 1`).
    pub fn cmd_chs(&self) -> String {
        format!("CHS {}", self.heading_source.code())
    }

    /// Heading offset (CHO) in degrees.
    pub fn heading_offset(&self) -> f32 {
        self.heading_offset_deg
    }

    /// Set the heading offset in degrees.
    ///
    /// Valid range -180 to 180; out-of-range values reset the field to 0.
    pub fn set_heading_offset(&mut self, degrees: f32) {
        self.heading_offset_deg = if HEADING_OFFSET_RANGE.contains(&degrees) {
            degrees
        } else {
            DEFAULT_HEADING_OFFSET
        };
    }

    /// Render the heading offset command (`CHO 0`).
    pub fn cmd_cho(&self) -> String {
        format!("CHO {}", self.heading_offset_deg)
    }

    // ---------------------------------------------------------------
    // Serial ports
    // ---------------------------------------------------------------

    /// RS-232 port baud rate (C232B).
    pub fn rs232_baud(&self) -> BaudRate {
        self.rs232_baud
    }

    /// Set the RS-232 port baud rate.
    pub fn set_rs232_baud(&mut self, baud: BaudRate) {
        self.rs232_baud = baud;
    }

    /// Render the RS-232 baud command (`C232B 115200`).
    pub fn cmd_c232b(&self) -> String {
        format!("C232B {}", self.rs232_baud)
    }

    /// RS-485 port baud rate (C485B).
    pub fn rs485_baud(&self) -> BaudRate {
        self.rs485_baud
    }

    /// Set the RS-485 port baud rate.
    pub fn set_rs485_baud(&mut self, baud: BaudRate) {
        self.rs485_baud = baud;
    }

    /// Render the RS-485 baud command (`C485B 115200`).
    pub fn cmd_c485b(&self) -> String {
        format!("C485B {}", self.rs485_baud)
    }

    /// RS-422 port baud rate (C422B).
    pub fn rs422_baud(&self) -> BaudRate {
        self.rs422_baud
    }

    /// Set the RS-422 port baud rate.
    pub fn set_rs422_baud(&mut self, baud: BaudRate) {
        self.rs422_baud = baud;
    }

    /// Render the RS-422 baud command (`C422B 115200`).
    pub fn cmd_c422b(&self) -> String {
        format!("C422B {}", self.rs422_baud)
    }

    // ---------------------------------------------------------------
    // Subsystem ping order
    // ---------------------------------------------------------------

    /// The stored subsystem ping order string (CEPO).
    pub fn cepo(&self) -> &str {
        &self.cepo
    }

    /// Store a subsystem ping order string verbatim.
    ///
    /// No hardware validation happens here; drive this through
    /// `AdcpConfiguration::set_cepo` to keep the string consistent with
    /// the allocated per-subsystem configurations.
    pub fn set_cepo(&mut self, cepo: &str) {
        self.cepo = cepo.to_string();
    }

    /// Render the ping order command (`CEPO 23`).
    pub fn cmd_cepo(&self) -> String {
        format!("CEPO {}", self.cepo)
    }

    // ---------------------------------------------------------------
    // Aggregation
    // ---------------------------------------------------------------

    /// Render every instrument-wide command in deployment order.
    ///
    /// CEPO is deliberately last: the instrument re-allocates per-slot
    /// state when it receives CEPO, so the per-subsystem command blocks
    /// must directly follow it.
    pub fn command_list(&self) -> Vec<String> {
        vec![
            self.cmd_mode(),
            self.cmd_cei(),
            self.cmd_cetfp(),
            self.cmd_cerecord(),
            self.cmd_ceoutput(),
            self.cmd_cws(),
            self.cmd_cwt(),
            self.cmd_ctd(),
            self.cmd_cwss(),
            self.cmd_chs(),
            self.cmd_cho(),
            self.cmd_c232b(),
            self.cmd_c485b(),
            self.cmd_c422b(),
            self.cmd_cepo(),
        ]
    }
}
