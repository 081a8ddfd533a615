//! Per-subsystem ping configuration commands.
//!
//! Each subsystem slot allocated by CEPO carries its own command block:
//! water profile, bottom track, and water track. The commands are the
//! same for every slot; the slot is addressed by suffixing the CEPO index
//! in square brackets (`CWPON[2] 1` configures the third slot in the ping
//! order).
//!
//! Setters follow the library-wide validate-or-default discipline: an
//! out-of-range value silently resets that field to its documented
//! default, and callers detect rejection by reading the field back.
//!
//! # Command reference
//!
//! | Command | Meaning                               | Valid           | Default      |
//! |---------|---------------------------------------|-----------------|--------------|
//! | CWPON   | water profile on/off                  | --              | on           |
//! | CWPBB   | WP bandwidth mode, lag (m)            | lag 0 to 1      | broadband, 0.042 |
//! | CWPBL   | WP blank distance (m)                 | 0 to 100        | 0.1          |
//! | CWPBS   | WP bin size (m)                       | 0.01 to 100     | 1            |
//! | CWPBN   | WP number of bins                     | 1 to 200        | 30           |
//! | CWPP    | WP pings per ensemble                 | 1 to 10000      | 1            |
//! | CWPST   | WP screening thresholds               | each 0 to 1     | 0.4, 1, 1    |
//! | CWPTBP  | WP time between pings (s)             | 0 to 86400      | 0.25         |
//! | CBTON   | bottom track on/off                   | --              | on           |
//! | CBTBB   | BT mode, p2p lag (m), LR depth (m)    | lag 0-1, depth 0-10000 | coded, 0.05, 30 |
//! | CBTBL   | BT blank distance (m)                 | 0 to 10         | 0.05         |
//! | CBTMX   | BT maximum search depth (m)           | 5 to 10000      | 75           |
//! | CBTT    | BT SNR/gain-switch thresholds         | snr 0-100, depth 0-10000 | 15, 25, 5, 2 |
//! | CBTTBP  | BT time between pings (s)             | 0 to 86400      | 0.05         |
//! | CWTON   | water track on/off                    | --              | off          |
//! | CWTBB   | WT broadband on/off                   | --              | on           |
//! | CWTBL   | WT blank distance (m)                 | 0 to 100        | 2            |
//! | CWTBS   | WT bin size (m)                       | 0.05 to 64      | 2            |
//! | CWTTBP  | WT time between pings (s)             | 0 to 86400      | 0.25         |

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------
// Valid ranges and defaults
// ---------------------------------------------------------------

/// Valid lag length range for broadband modes, in meters.
const LAG_RANGE: RangeInclusive<f32> = 0.0..=1.0;
/// Valid time-between-pings range, in seconds (up to one day).
const PING_INTERVAL_RANGE: RangeInclusive<f32> = 0.0..=86_400.0;
/// Valid screening threshold range (dimensionless fractions).
const THRESHOLD_RANGE: RangeInclusive<f32> = 0.0..=1.0;
/// Valid SNR threshold range in dB.
const SNR_RANGE: RangeInclusive<f32> = 0.0..=100.0;
/// Valid depth range for bottom-track depth parameters, in meters.
const BT_DEPTH_RANGE: RangeInclusive<f32> = 0.0..=10_000.0;

const WP_BLANK_RANGE: RangeInclusive<f32> = 0.0..=100.0;
const WP_BIN_SIZE_RANGE: RangeInclusive<f32> = 0.01..=100.0;
const WP_BIN_COUNT_RANGE: RangeInclusive<u16> = 1..=200;
const WP_PINGS_RANGE: RangeInclusive<u16> = 1..=10_000;
const BT_BLANK_RANGE: RangeInclusive<f32> = 0.0..=10.0;
const BT_MAX_DEPTH_RANGE: RangeInclusive<f32> = 5.0..=10_000.0;
const WT_BLANK_RANGE: RangeInclusive<f32> = 0.0..=100.0;
const WT_BIN_SIZE_RANGE: RangeInclusive<f32> = 0.05..=64.0;

const DEFAULT_WP_LAG: f32 = 0.042;
const DEFAULT_WP_BLANK: f32 = 0.1;
const DEFAULT_WP_BIN_SIZE: f32 = 1.0;
const DEFAULT_WP_BIN_COUNT: u16 = 30;
const DEFAULT_WP_PINGS: u16 = 1;
const DEFAULT_WP_CORRELATION_THRESHOLD: f32 = 0.4;
const DEFAULT_WP_Q_VELOCITY_THRESHOLD: f32 = 1.0;
const DEFAULT_WP_V_VELOCITY_THRESHOLD: f32 = 1.0;
const DEFAULT_WP_PING_INTERVAL: f32 = 0.25;

const DEFAULT_BT_LAG: f32 = 0.05;
const DEFAULT_BT_LONG_RANGE_DEPTH: f32 = 30.0;
const DEFAULT_BT_BLANK: f32 = 0.05;
const DEFAULT_BT_MAX_DEPTH: f32 = 75.0;
const DEFAULT_BT_SNR_SHALLOW: f32 = 15.0;
const DEFAULT_BT_GAIN_SWITCH_DEPTH: f32 = 25.0;
const DEFAULT_BT_SNR_DEEP: f32 = 5.0;
const DEFAULT_BT_LOW_GAIN_SWITCH_DEPTH: f32 = 2.0;
const DEFAULT_BT_PING_INTERVAL: f32 = 0.05;

const DEFAULT_WT_BLANK: f32 = 2.0;
const DEFAULT_WT_BIN_SIZE: f32 = 2.0;
const DEFAULT_WT_PING_INTERVAL: f32 = 0.25;

fn clamp_or_default(value: f32, range: RangeInclusive<f32>, default: f32) -> f32 {
    if range.contains(&value) {
        value
    } else {
        default
    }
}

// ---------------------------------------------------------------
// Bandwidth mode vocabularies
// ---------------------------------------------------------------

/// Water profile transmit bandwidth mode (first CWPBB argument).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WpBandMode {
    /// Narrowband, maximum range (`0`).
    Narrowband,
    /// Broadband, coded transmit (`1`).
    #[default]
    Broadband,
    /// Pulse-to-pulse, non-coded (`2`).
    PulseToPulseNonCoded,
    /// Pulse-to-pulse, broadband coded (`3`).
    PulseToPulseBroadband,
}

impl WpBandMode {
    /// The device ordinal this mode renders as.
    pub fn code(&self) -> u8 {
        match self {
            WpBandMode::Narrowband => 0,
            WpBandMode::Broadband => 1,
            WpBandMode::PulseToPulseNonCoded => 2,
            WpBandMode::PulseToPulseBroadband => 3,
        }
    }

    /// Returns the mode for a device ordinal, or `None` for unknown codes.
    pub fn from_code(code: u8) -> Option<WpBandMode> {
        match code {
            0 => Some(WpBandMode::Narrowband),
            1 => Some(WpBandMode::Broadband),
            2 => Some(WpBandMode::PulseToPulseNonCoded),
            3 => Some(WpBandMode::PulseToPulseBroadband),
            _ => None,
        }
    }
}

impl fmt::Display for WpBandMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WpBandMode::Narrowband => "Narrowband",
            WpBandMode::Broadband => "Broadband",
            WpBandMode::PulseToPulseNonCoded => "Pulse-to-pulse non-coded",
            WpBandMode::PulseToPulseBroadband => "Pulse-to-pulse broadband",
        };
        write!(f, "{s}")
    }
}

/// Bottom track transmit bandwidth mode (first CBTBB argument).
///
/// The ordinals are not contiguous; the firmware reserves the gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BtBandMode {
    /// Narrowband long range (`0`).
    NarrowbandLongRange,
    /// Broadband coded transmit (`1`).
    #[default]
    BroadbandCoded,
    /// Broadband non-coded transmit (`2`).
    BroadbandNonCoded,
    /// Broadband non-coded pulse-to-pulse (`4`).
    BroadbandPulseToPulse,
    /// Automatic narrowband/broadband switching (`7`).
    AutoSwitch,
}

impl BtBandMode {
    /// The device ordinal this mode renders as.
    pub fn code(&self) -> u8 {
        match self {
            BtBandMode::NarrowbandLongRange => 0,
            BtBandMode::BroadbandCoded => 1,
            BtBandMode::BroadbandNonCoded => 2,
            BtBandMode::BroadbandPulseToPulse => 4,
            BtBandMode::AutoSwitch => 7,
        }
    }

    /// Returns the mode for a device ordinal, or `None` for unknown codes.
    pub fn from_code(code: u8) -> Option<BtBandMode> {
        match code {
            0 => Some(BtBandMode::NarrowbandLongRange),
            1 => Some(BtBandMode::BroadbandCoded),
            2 => Some(BtBandMode::BroadbandNonCoded),
            4 => Some(BtBandMode::BroadbandPulseToPulse),
            7 => Some(BtBandMode::AutoSwitch),
            _ => None,
        }
    }
}

impl fmt::Display for BtBandMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BtBandMode::NarrowbandLongRange => "Narrowband long range",
            BtBandMode::BroadbandCoded => "Broadband coded",
            BtBandMode::BroadbandNonCoded => "Broadband non-coded",
            BtBandMode::BroadbandPulseToPulse => "Broadband pulse-to-pulse",
            BtBandMode::AutoSwitch => "Auto switch",
        };
        write!(f, "{s}")
    }
}

// ---------------------------------------------------------------
// Water profile block
// ---------------------------------------------------------------

/// Water profile commands for one subsystem slot (CWP*).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterProfileCommands {
    enabled: bool,
    mode: WpBandMode,
    lag_m: f32,
    blank_m: f32,
    bin_size_m: f32,
    bin_count: u16,
    pings: u16,
    correlation_threshold: f32,
    q_velocity_threshold: f32,
    v_velocity_threshold: f32,
    ping_interval_s: f32,
}

impl Default for WaterProfileCommands {
    fn default() -> Self {
        WaterProfileCommands {
            enabled: true,
            mode: WpBandMode::default(),
            lag_m: DEFAULT_WP_LAG,
            blank_m: DEFAULT_WP_BLANK,
            bin_size_m: DEFAULT_WP_BIN_SIZE,
            bin_count: DEFAULT_WP_BIN_COUNT,
            pings: DEFAULT_WP_PINGS,
            correlation_threshold: DEFAULT_WP_CORRELATION_THRESHOLD,
            q_velocity_threshold: DEFAULT_WP_Q_VELOCITY_THRESHOLD,
            v_velocity_threshold: DEFAULT_WP_V_VELOCITY_THRESHOLD,
            ping_interval_s: DEFAULT_WP_PING_INTERVAL,
        }
    }
}

impl WaterProfileCommands {
    /// Whether water profile pings are enabled (CWPON).
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable water profile pings.
    pub fn set_enabled(&mut self, on: bool) {
        self.enabled = on;
    }

    /// Render the on/off command (`CWPON[0] 1`).
    pub fn cmd_cwpon(&self, cepo_index: u32) -> String {
        format!("CWPON[{cepo_index}] {}", u8::from(self.enabled))
    }

    /// Transmit bandwidth mode (CWPBB, first argument).
    pub fn mode(&self) -> WpBandMode {
        self.mode
    }

    /// Set the transmit bandwidth mode.
    pub fn set_mode(&mut self, mode: WpBandMode) {
        self.mode = mode;
    }

    /// Lag length in meters (CWPBB, second argument).
    pub fn lag(&self) -> f32 {
        self.lag_m
    }

    /// Set the lag length in meters. Valid range 0 to 1; out-of-range
    /// values reset to 0.042.
    pub fn set_lag(&mut self, meters: f32) {
        self.lag_m = clamp_or_default(meters, LAG_RANGE, DEFAULT_WP_LAG);
    }

    /// Render the bandwidth command (`CWPBB[0] 1,0.042`).
    pub fn cmd_cwpbb(&self, cepo_index: u32) -> String {
        format!("CWPBB[{cepo_index}] {},{}", self.mode.code(), self.lag_m)
    }

    /// Blank distance below the transducer in meters (CWPBL).
    pub fn blank(&self) -> f32 {
        self.blank_m
    }

    /// Set the blank distance in meters. Valid range 0 to 100;
    /// out-of-range values reset to 0.1.
    pub fn set_blank(&mut self, meters: f32) {
        self.blank_m = clamp_or_default(meters, WP_BLANK_RANGE, DEFAULT_WP_BLANK);
    }

    /// Render the blank command (`CWPBL[0] 0.1`).
    pub fn cmd_cwpbl(&self, cepo_index: u32) -> String {
        format!("CWPBL[{cepo_index}] {}", self.blank_m)
    }

    /// Depth cell (bin) size in meters (CWPBS).
    pub fn bin_size(&self) -> f32 {
        self.bin_size_m
    }

    /// Set the bin size in meters. Valid range 0.01 to 100; out-of-range
    /// values reset to 1.
    pub fn set_bin_size(&mut self, meters: f32) {
        self.bin_size_m = clamp_or_default(meters, WP_BIN_SIZE_RANGE, DEFAULT_WP_BIN_SIZE);
    }

    /// Render the bin size command (`CWPBS[0] 1`).
    pub fn cmd_cwpbs(&self, cepo_index: u32) -> String {
        format!("CWPBS[{cepo_index}] {}", self.bin_size_m)
    }

    /// Number of depth cells per profile (CWPBN).
    pub fn bin_count(&self) -> u16 {
        self.bin_count
    }

    /// Set the number of depth cells. Valid range 1 to 200; out-of-range
    /// values reset to 30.
    pub fn set_bin_count(&mut self, bins: u16) {
        self.bin_count = if WP_BIN_COUNT_RANGE.contains(&bins) {
            bins
        } else {
            DEFAULT_WP_BIN_COUNT
        };
    }

    /// Render the bin count command (`CWPBN[0] 30`).
    pub fn cmd_cwpbn(&self, cepo_index: u32) -> String {
        format!("CWPBN[{cepo_index}] {}", self.bin_count)
    }

    /// Pings per ensemble (CWPP).
    pub fn pings(&self) -> u16 {
        self.pings
    }

    /// Set the pings per ensemble. Valid range 1 to 10000; out-of-range
    /// values reset to 1.
    pub fn set_pings(&mut self, pings: u16) {
        self.pings = if WP_PINGS_RANGE.contains(&pings) {
            pings
        } else {
            DEFAULT_WP_PINGS
        };
    }

    /// Render the ping count command (`CWPP[0] 1`).
    pub fn cmd_cwpp(&self, cepo_index: u32) -> String {
        format!("CWPP[{cepo_index}] {}", self.pings)
    }

    /// Correlation screening threshold (CWPST, first argument).
    pub fn correlation_threshold(&self) -> f32 {
        self.correlation_threshold
    }

    /// Error-velocity screening threshold (CWPST, second argument).
    pub fn q_velocity_threshold(&self) -> f32 {
        self.q_velocity_threshold
    }

    /// Vertical-velocity screening threshold (CWPST, third argument).
    pub fn v_velocity_threshold(&self) -> f32 {
        self.v_velocity_threshold
    }

    /// Set the three screening thresholds. Each is validated
    /// independently against 0 to 1 and resets to its own default
    /// (0.4, 1, 1) on violation.
    pub fn set_thresholds(&mut self, correlation: f32, q_velocity: f32, v_velocity: f32) {
        self.correlation_threshold = clamp_or_default(
            correlation,
            THRESHOLD_RANGE,
            DEFAULT_WP_CORRELATION_THRESHOLD,
        );
        self.q_velocity_threshold =
            clamp_or_default(q_velocity, THRESHOLD_RANGE, DEFAULT_WP_Q_VELOCITY_THRESHOLD);
        self.v_velocity_threshold =
            clamp_or_default(v_velocity, THRESHOLD_RANGE, DEFAULT_WP_V_VELOCITY_THRESHOLD);
    }

    /// Render the screening command (`CWPST[0] 0.4,1,1`).
    pub fn cmd_cwpst(&self, cepo_index: u32) -> String {
        format!(
            "CWPST[{cepo_index}] {},{},{}",
            self.correlation_threshold, self.q_velocity_threshold, self.v_velocity_threshold
        )
    }

    /// Time between water profile pings in seconds (CWPTBP).
    pub fn ping_interval(&self) -> f32 {
        self.ping_interval_s
    }

    /// Set the time between pings in seconds. Valid range 0 to 86400;
    /// out-of-range values reset to 0.25.
    pub fn set_ping_interval(&mut self, seconds: f32) {
        self.ping_interval_s =
            clamp_or_default(seconds, PING_INTERVAL_RANGE, DEFAULT_WP_PING_INTERVAL);
    }

    /// Render the ping interval command (`CWPTBP[0] 0.25`).
    pub fn cmd_cwptbp(&self, cepo_index: u32) -> String {
        format!("CWPTBP[{cepo_index}] {}", self.ping_interval_s)
    }
}

// ---------------------------------------------------------------
// Bottom track block
// ---------------------------------------------------------------

/// Bottom track commands for one subsystem slot (CBT*).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BottomTrackCommands {
    enabled: bool,
    mode: BtBandMode,
    pulse_to_pulse_lag_m: f32,
    long_range_depth_m: f32,
    blank_m: f32,
    max_depth_m: f32,
    snr_shallow: f32,
    gain_switch_depth_m: f32,
    snr_deep: f32,
    low_gain_switch_depth_m: f32,
    ping_interval_s: f32,
}

impl Default for BottomTrackCommands {
    fn default() -> Self {
        BottomTrackCommands {
            enabled: true,
            mode: BtBandMode::default(),
            pulse_to_pulse_lag_m: DEFAULT_BT_LAG,
            long_range_depth_m: DEFAULT_BT_LONG_RANGE_DEPTH,
            blank_m: DEFAULT_BT_BLANK,
            max_depth_m: DEFAULT_BT_MAX_DEPTH,
            snr_shallow: DEFAULT_BT_SNR_SHALLOW,
            gain_switch_depth_m: DEFAULT_BT_GAIN_SWITCH_DEPTH,
            snr_deep: DEFAULT_BT_SNR_DEEP,
            low_gain_switch_depth_m: DEFAULT_BT_LOW_GAIN_SWITCH_DEPTH,
            ping_interval_s: DEFAULT_BT_PING_INTERVAL,
        }
    }
}

impl BottomTrackCommands {
    /// Whether bottom track pings are enabled (CBTON).
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable bottom track pings.
    pub fn set_enabled(&mut self, on: bool) {
        self.enabled = on;
    }

    /// Render the on/off command (`CBTON[0] 1`).
    pub fn cmd_cbton(&self, cepo_index: u32) -> String {
        format!("CBTON[{cepo_index}] {}", u8::from(self.enabled))
    }

    /// Transmit bandwidth mode (CBTBB, first argument).
    pub fn mode(&self) -> BtBandMode {
        self.mode
    }

    /// Set the transmit bandwidth mode.
    pub fn set_mode(&mut self, mode: BtBandMode) {
        self.mode = mode;
    }

    /// Pulse-to-pulse lag in meters (CBTBB, second argument).
    pub fn pulse_to_pulse_lag(&self) -> f32 {
        self.pulse_to_pulse_lag_m
    }

    /// Set the pulse-to-pulse lag in meters. Valid range 0 to 1;
    /// out-of-range values reset to 0.05.
    pub fn set_pulse_to_pulse_lag(&mut self, meters: f32) {
        self.pulse_to_pulse_lag_m = clamp_or_default(meters, LAG_RANGE, DEFAULT_BT_LAG);
    }

    /// Long-range switch depth in meters (CBTBB, third argument).
    pub fn long_range_depth(&self) -> f32 {
        self.long_range_depth_m
    }

    /// Set the long-range switch depth in meters. Valid range 0 to 10000;
    /// out-of-range values reset to 30.
    pub fn set_long_range_depth(&mut self, meters: f32) {
        self.long_range_depth_m =
            clamp_or_default(meters, BT_DEPTH_RANGE, DEFAULT_BT_LONG_RANGE_DEPTH);
    }

    /// Render the bandwidth command (`CBTBB[0] 1,0.05,30`).
    pub fn cmd_cbtbb(&self, cepo_index: u32) -> String {
        format!(
            "CBTBB[{cepo_index}] {},{},{}",
            self.mode.code(),
            self.pulse_to_pulse_lag_m,
            self.long_range_depth_m
        )
    }

    /// Blank distance below the transducer in meters (CBTBL).
    pub fn blank(&self) -> f32 {
        self.blank_m
    }

    /// Set the blank distance in meters. Valid range 0 to 10;
    /// out-of-range values reset to 0.05.
    pub fn set_blank(&mut self, meters: f32) {
        self.blank_m = clamp_or_default(meters, BT_BLANK_RANGE, DEFAULT_BT_BLANK);
    }

    /// Render the blank command (`CBTBL[0] 0.05`).
    pub fn cmd_cbtbl(&self, cepo_index: u32) -> String {
        format!("CBTBL[{cepo_index}] {}", self.blank_m)
    }

    /// Maximum bottom search depth in meters (CBTMX).
    pub fn max_depth(&self) -> f32 {
        self.max_depth_m
    }

    /// Set the maximum search depth in meters. Valid range 5 to 10000;
    /// out-of-range values reset to 75.
    pub fn set_max_depth(&mut self, meters: f32) {
        self.max_depth_m = clamp_or_default(meters, BT_MAX_DEPTH_RANGE, DEFAULT_BT_MAX_DEPTH);
    }

    /// Render the maximum depth command (`CBTMX[0] 75`).
    pub fn cmd_cbtmx(&self, cepo_index: u32) -> String {
        format!("CBTMX[{cepo_index}] {}", self.max_depth_m)
    }

    /// Shallow-water SNR detection threshold in dB (CBTT, first argument).
    pub fn snr_shallow(&self) -> f32 {
        self.snr_shallow
    }

    /// Gain switch depth in meters (CBTT, second argument).
    pub fn gain_switch_depth(&self) -> f32 {
        self.gain_switch_depth_m
    }

    /// Deep-water SNR detection threshold in dB (CBTT, third argument).
    pub fn snr_deep(&self) -> f32 {
        self.snr_deep
    }

    /// Low-gain switch depth in meters (CBTT, fourth argument).
    pub fn low_gain_switch_depth(&self) -> f32 {
        self.low_gain_switch_depth_m
    }

    /// Set the four detection thresholds. SNR values are validated
    /// against 0 to 100 dB, depths against 0 to 10000 m; each field
    /// resets to its own default (15, 25, 5, 2) on violation.
    pub fn set_thresholds(
        &mut self,
        snr_shallow: f32,
        gain_switch_depth: f32,
        snr_deep: f32,
        low_gain_switch_depth: f32,
    ) {
        self.snr_shallow = clamp_or_default(snr_shallow, SNR_RANGE, DEFAULT_BT_SNR_SHALLOW);
        self.gain_switch_depth_m = clamp_or_default(
            gain_switch_depth,
            BT_DEPTH_RANGE,
            DEFAULT_BT_GAIN_SWITCH_DEPTH,
        );
        self.snr_deep = clamp_or_default(snr_deep, SNR_RANGE, DEFAULT_BT_SNR_DEEP);
        self.low_gain_switch_depth_m = clamp_or_default(
            low_gain_switch_depth,
            BT_DEPTH_RANGE,
            DEFAULT_BT_LOW_GAIN_SWITCH_DEPTH,
        );
    }

    /// Render the thresholds command (`CBTT[0] 15,25,5,2`).
    pub fn cmd_cbtt(&self, cepo_index: u32) -> String {
        format!(
            "CBTT[{cepo_index}] {},{},{},{}",
            self.snr_shallow, self.gain_switch_depth_m, self.snr_deep, self.low_gain_switch_depth_m
        )
    }

    /// Time between bottom track pings in seconds (CBTTBP).
    pub fn ping_interval(&self) -> f32 {
        self.ping_interval_s
    }

    /// Set the time between pings in seconds. Valid range 0 to 86400;
    /// out-of-range values reset to 0.05.
    pub fn set_ping_interval(&mut self, seconds: f32) {
        self.ping_interval_s =
            clamp_or_default(seconds, PING_INTERVAL_RANGE, DEFAULT_BT_PING_INTERVAL);
    }

    /// Render the ping interval command (`CBTTBP[0] 0.05`).
    pub fn cmd_cbttbp(&self, cepo_index: u32) -> String {
        format!("CBTTBP[{cepo_index}] {}", self.ping_interval_s)
    }
}

// ---------------------------------------------------------------
// Water track block
// ---------------------------------------------------------------

/// Water track commands for one subsystem slot (CWT*).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterTrackCommands {
    enabled: bool,
    broadband: bool,
    blank_m: f32,
    bin_size_m: f32,
    ping_interval_s: f32,
}

impl Default for WaterTrackCommands {
    fn default() -> Self {
        WaterTrackCommands {
            enabled: false,
            broadband: true,
            blank_m: DEFAULT_WT_BLANK,
            bin_size_m: DEFAULT_WT_BIN_SIZE,
            ping_interval_s: DEFAULT_WT_PING_INTERVAL,
        }
    }
}

impl WaterTrackCommands {
    /// Whether water track pings are enabled (CWTON).
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable water track pings.
    pub fn set_enabled(&mut self, on: bool) {
        self.enabled = on;
    }

    /// Render the on/off command (`CWTON[0] 0`).
    pub fn cmd_cwton(&self, cepo_index: u32) -> String {
        format!("CWTON[{cepo_index}] {}", u8::from(self.enabled))
    }

    /// Whether the broadband transmit is used (CWTBB).
    pub fn broadband(&self) -> bool {
        self.broadband
    }

    /// Enable or disable broadband transmit.
    pub fn set_broadband(&mut self, on: bool) {
        self.broadband = on;
    }

    /// Render the broadband command (`CWTBB[0] 1`).
    pub fn cmd_cwtbb(&self, cepo_index: u32) -> String {
        format!("CWTBB[{cepo_index}] {}", u8::from(self.broadband))
    }

    /// Blank distance to the tracking cell in meters (CWTBL).
    pub fn blank(&self) -> f32 {
        self.blank_m
    }

    /// Set the blank distance in meters. Valid range 0 to 100;
    /// out-of-range values reset to 2.
    pub fn set_blank(&mut self, meters: f32) {
        self.blank_m = clamp_or_default(meters, WT_BLANK_RANGE, DEFAULT_WT_BLANK);
    }

    /// Render the blank command (`CWTBL[0] 2`).
    pub fn cmd_cwtbl(&self, cepo_index: u32) -> String {
        format!("CWTBL[{cepo_index}] {}", self.blank_m)
    }

    /// Tracking cell size in meters (CWTBS).
    pub fn bin_size(&self) -> f32 {
        self.bin_size_m
    }

    /// Set the tracking cell size in meters. Valid range 0.05 to 64;
    /// out-of-range values reset to 2.
    pub fn set_bin_size(&mut self, meters: f32) {
        self.bin_size_m = clamp_or_default(meters, WT_BIN_SIZE_RANGE, DEFAULT_WT_BIN_SIZE);
    }

    /// Render the cell size command (`CWTBS[0] 2`).
    pub fn cmd_cwtbs(&self, cepo_index: u32) -> String {
        format!("CWTBS[{cepo_index}] {}", self.bin_size_m)
    }

    /// Time between water track pings in seconds (CWTTBP).
    pub fn ping_interval(&self) -> f32 {
        self.ping_interval_s
    }

    /// Set the time between pings in seconds. Valid range 0 to 86400;
    /// out-of-range values reset to 0.25.
    pub fn set_ping_interval(&mut self, seconds: f32) {
        self.ping_interval_s =
            clamp_or_default(seconds, PING_INTERVAL_RANGE, DEFAULT_WT_PING_INTERVAL);
    }

    /// Render the ping interval command (`CWTTBP[0] 0.25`).
    pub fn cmd_cwttbp(&self, cepo_index: u32) -> String {
        format!("CWTTBP[{cepo_index}] {}", self.ping_interval_s)
    }
}

// ---------------------------------------------------------------
// Combined per-slot command set
// ---------------------------------------------------------------

/// The full command block for one subsystem slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubsystemCommands {
    water_profile: WaterProfileCommands,
    bottom_track: BottomTrackCommands,
    water_track: WaterTrackCommands,
}

impl SubsystemCommands {
    /// Create a command block with every field at its factory default.
    pub fn new() -> Self {
        SubsystemCommands::default()
    }

    /// The water profile block.
    pub fn water_profile(&self) -> &WaterProfileCommands {
        &self.water_profile
    }

    /// Mutable access to the water profile block.
    pub fn water_profile_mut(&mut self) -> &mut WaterProfileCommands {
        &mut self.water_profile
    }

    /// The bottom track block.
    pub fn bottom_track(&self) -> &BottomTrackCommands {
        &self.bottom_track
    }

    /// Mutable access to the bottom track block.
    pub fn bottom_track_mut(&mut self) -> &mut BottomTrackCommands {
        &mut self.bottom_track
    }

    /// The water track block.
    pub fn water_track(&self) -> &WaterTrackCommands {
        &self.water_track
    }

    /// Mutable access to the water track block.
    pub fn water_track_mut(&mut self) -> &mut WaterTrackCommands {
        &mut self.water_track
    }

    /// Render every command in the block for the given slot, in block
    /// order: water profile, bottom track, water track.
    pub fn command_list(&self, cepo_index: u32) -> Vec<String> {
        vec![
            self.water_profile.cmd_cwpon(cepo_index),
            self.water_profile.cmd_cwpbb(cepo_index),
            self.water_profile.cmd_cwpbl(cepo_index),
            self.water_profile.cmd_cwpbs(cepo_index),
            self.water_profile.cmd_cwpbn(cepo_index),
            self.water_profile.cmd_cwpp(cepo_index),
            self.water_profile.cmd_cwpst(cepo_index),
            self.water_profile.cmd_cwptbp(cepo_index),
            self.bottom_track.cmd_cbton(cepo_index),
            self.bottom_track.cmd_cbtbb(cepo_index),
            self.bottom_track.cmd_cbtbl(cepo_index),
            self.bottom_track.cmd_cbtmx(cepo_index),
            self.bottom_track.cmd_cbtt(cepo_index),
            self.bottom_track.cmd_cbttbp(cepo_index),
            self.water_track.cmd_cwton(cepo_index),
            self.water_track.cmd_cwtbb(cepo_index),
            self.water_track.cmd_cwtbl(cepo_index),
            self.water_track.cmd_cwtbs(cepo_index),
            self.water_track.cmd_cwttbp(cepo_index),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---------------------------------------------------------------
    // Vocabularies
    // ---------------------------------------------------------------

    #[test]
    fn wp_band_mode_codes_round_trip() {
        for &mode in &[
            WpBandMode::Narrowband,
            WpBandMode::Broadband,
            WpBandMode::PulseToPulseNonCoded,
            WpBandMode::PulseToPulseBroadband,
        ] {
            assert_eq!(WpBandMode::from_code(mode.code()), Some(mode));
        }
        assert_eq!(WpBandMode::from_code(4), None);
    }

    #[test]
    fn bt_band_mode_codes_skip_reserved_ordinals() {
        assert_eq!(BtBandMode::BroadbandPulseToPulse.code(), 4);
        assert_eq!(BtBandMode::AutoSwitch.code(), 7);
        assert_eq!(BtBandMode::from_code(3), None);
        assert_eq!(BtBandMode::from_code(5), None);
        assert_eq!(BtBandMode::from_code(6), None);
        for &mode in &[
            BtBandMode::NarrowbandLongRange,
            BtBandMode::BroadbandCoded,
            BtBandMode::BroadbandNonCoded,
            BtBandMode::BroadbandPulseToPulse,
            BtBandMode::AutoSwitch,
        ] {
            assert_eq!(BtBandMode::from_code(mode.code()), Some(mode));
        }
    }

    // ---------------------------------------------------------------
    // Water profile
    // ---------------------------------------------------------------

    #[test]
    fn wp_default_command_strings() {
        let wp = WaterProfileCommands::default();
        assert_eq!(wp.cmd_cwpon(0), "CWPON[0] 1");
        assert_eq!(wp.cmd_cwpbb(0), "CWPBB[0] 1,0.042");
        assert_eq!(wp.cmd_cwpbl(0), "CWPBL[0] 0.1");
        assert_eq!(wp.cmd_cwpbs(0), "CWPBS[0] 1");
        assert_eq!(wp.cmd_cwpbn(0), "CWPBN[0] 30");
        assert_eq!(wp.cmd_cwpp(0), "CWPP[0] 1");
        assert_eq!(wp.cmd_cwpst(0), "CWPST[0] 0.4,1,1");
        assert_eq!(wp.cmd_cwptbp(0), "CWPTBP[0] 0.25");
    }

    #[test]
    fn wp_commands_carry_the_slot_index() {
        let wp = WaterProfileCommands::default();
        assert_eq!(wp.cmd_cwpon(2), "CWPON[2] 1");
        assert_eq!(wp.cmd_cwpbn(11), "CWPBN[11] 30");
    }

    #[test]
    fn wp_setters_validate_or_default() {
        let mut wp = WaterProfileCommands::default();

        wp.set_lag(0.5);
        assert_eq!(wp.lag(), 0.5);
        wp.set_lag(1.5);
        assert_eq!(wp.lag(), 0.042);

        wp.set_blank(5.0);
        assert_eq!(wp.blank(), 5.0);
        wp.set_blank(-1.0);
        assert_eq!(wp.blank(), 0.1);

        wp.set_bin_size(0.01);
        assert_eq!(wp.bin_size(), 0.01);
        wp.set_bin_size(0.0);
        assert_eq!(wp.bin_size(), 1.0);

        wp.set_bin_count(200);
        assert_eq!(wp.bin_count(), 200);
        wp.set_bin_count(0);
        assert_eq!(wp.bin_count(), 30);
        wp.set_bin_count(201);
        assert_eq!(wp.bin_count(), 30);

        wp.set_pings(10_000);
        assert_eq!(wp.pings(), 10_000);
        wp.set_pings(10_001);
        assert_eq!(wp.pings(), 1);

        wp.set_ping_interval(60.0);
        assert_eq!(wp.ping_interval(), 60.0);
        wp.set_ping_interval(86_401.0);
        assert_eq!(wp.ping_interval(), 0.25);
    }

    #[test]
    fn wp_thresholds_validate_each_field_independently() {
        let mut wp = WaterProfileCommands::default();
        wp.set_thresholds(0.9, 1.5, 0.25);
        assert_eq!(wp.correlation_threshold(), 0.9);
        assert_eq!(wp.q_velocity_threshold(), 1.0); // rejected, back to default
        assert_eq!(wp.v_velocity_threshold(), 0.25);
        assert_eq!(wp.cmd_cwpst(1), "CWPST[1] 0.9,1,0.25");
    }

    #[test]
    fn wp_disabled_renders_zero() {
        let mut wp = WaterProfileCommands::default();
        wp.set_enabled(false);
        assert_eq!(wp.cmd_cwpon(0), "CWPON[0] 0");
    }

    // ---------------------------------------------------------------
    // Bottom track
    // ---------------------------------------------------------------

    #[test]
    fn bt_default_command_strings() {
        let bt = BottomTrackCommands::default();
        assert_eq!(bt.cmd_cbton(0), "CBTON[0] 1");
        assert_eq!(bt.cmd_cbtbb(0), "CBTBB[0] 1,0.05,30");
        assert_eq!(bt.cmd_cbtbl(0), "CBTBL[0] 0.05");
        assert_eq!(bt.cmd_cbtmx(0), "CBTMX[0] 75");
        assert_eq!(bt.cmd_cbtt(0), "CBTT[0] 15,25,5,2");
        assert_eq!(bt.cmd_cbttbp(0), "CBTTBP[0] 0.05");
    }

    #[test]
    fn bt_mode_renders_device_ordinal() {
        let mut bt = BottomTrackCommands::default();
        bt.set_mode(BtBandMode::AutoSwitch);
        assert_eq!(bt.cmd_cbtbb(0), "CBTBB[0] 7,0.05,30");
        bt.set_mode(BtBandMode::NarrowbandLongRange);
        assert_eq!(bt.cmd_cbtbb(0), "CBTBB[0] 0,0.05,30");
    }

    #[test]
    fn bt_setters_validate_or_default() {
        let mut bt = BottomTrackCommands::default();

        bt.set_pulse_to_pulse_lag(0.25);
        assert_eq!(bt.pulse_to_pulse_lag(), 0.25);
        bt.set_pulse_to_pulse_lag(2.0);
        assert_eq!(bt.pulse_to_pulse_lag(), 0.05);

        bt.set_long_range_depth(120.0);
        assert_eq!(bt.long_range_depth(), 120.0);
        bt.set_long_range_depth(-1.0);
        assert_eq!(bt.long_range_depth(), 30.0);

        bt.set_blank(9.5);
        assert_eq!(bt.blank(), 9.5);
        bt.set_blank(10.5);
        assert_eq!(bt.blank(), 0.05);

        bt.set_max_depth(5.0);
        assert_eq!(bt.max_depth(), 5.0);
        bt.set_max_depth(4.9);
        assert_eq!(bt.max_depth(), 75.0);

        bt.set_ping_interval(1.0);
        assert_eq!(bt.ping_interval(), 1.0);
        bt.set_ping_interval(-0.1);
        assert_eq!(bt.ping_interval(), 0.05);
    }

    #[test]
    fn bt_thresholds_validate_each_field_independently() {
        let mut bt = BottomTrackCommands::default();
        bt.set_thresholds(20.0, 50.0, 101.0, 3.5);
        assert_eq!(bt.snr_shallow(), 20.0);
        assert_eq!(bt.gain_switch_depth(), 50.0);
        assert_eq!(bt.snr_deep(), 5.0); // rejected, back to default
        assert_eq!(bt.low_gain_switch_depth(), 3.5);
        assert_eq!(bt.cmd_cbtt(0), "CBTT[0] 20,50,5,3.5");
    }

    // ---------------------------------------------------------------
    // Water track
    // ---------------------------------------------------------------

    #[test]
    fn wt_default_command_strings() {
        let wt = WaterTrackCommands::default();
        assert_eq!(wt.cmd_cwton(0), "CWTON[0] 0");
        assert_eq!(wt.cmd_cwtbb(0), "CWTBB[0] 1");
        assert_eq!(wt.cmd_cwtbl(0), "CWTBL[0] 2");
        assert_eq!(wt.cmd_cwtbs(0), "CWTBS[0] 2");
        assert_eq!(wt.cmd_cwttbp(0), "CWTTBP[0] 0.25");
    }

    #[test]
    fn wt_setters_validate_or_default() {
        let mut wt = WaterTrackCommands::default();

        wt.set_enabled(true);
        assert!(wt.enabled());
        assert_eq!(wt.cmd_cwton(0), "CWTON[0] 1");

        wt.set_blank(50.0);
        assert_eq!(wt.blank(), 50.0);
        wt.set_blank(101.0);
        assert_eq!(wt.blank(), 2.0);

        wt.set_bin_size(64.0);
        assert_eq!(wt.bin_size(), 64.0);
        wt.set_bin_size(0.04);
        assert_eq!(wt.bin_size(), 2.0);

        wt.set_ping_interval(0.0);
        assert_eq!(wt.ping_interval(), 0.0);
        wt.set_ping_interval(f32::NAN);
        assert_eq!(wt.ping_interval(), 0.25);
    }

    // ---------------------------------------------------------------
    // Combined block
    // ---------------------------------------------------------------

    #[test]
    fn command_list_renders_all_blocks_in_order() {
        let cmds = SubsystemCommands::new();
        let list = cmds.command_list(3);
        assert_eq!(list.len(), 19);
        assert_eq!(list[0], "CWPON[3] 1");
        assert_eq!(list[8], "CBTON[3] 1");
        assert_eq!(list[14], "CWTON[3] 0");
        // Every command addresses the same slot.
        assert!(list.iter().all(|c| c.contains("[3] ")));
    }

    #[test]
    fn blocks_are_independent_per_instance() {
        let mut a = SubsystemCommands::new();
        let b = SubsystemCommands::new();
        a.water_profile_mut().set_bin_count(100);
        assert_eq!(a.water_profile().bin_count(), 100);
        assert_eq!(b.water_profile().bin_count(), 30);
    }

    #[test]
    fn serde_round_trip_preserves_every_field() {
        let mut cmds = SubsystemCommands::new();
        cmds.water_profile_mut().set_bin_count(60);
        cmds.water_profile_mut().set_mode(WpBandMode::Narrowband);
        cmds.bottom_track_mut().set_enabled(false);
        cmds.water_track_mut().set_enabled(true);

        let json = serde_json::to_string(&cmds).unwrap();
        let back: SubsystemCommands = serde_json::from_str(&json).unwrap();
        assert_eq!(cmds, back);
    }
}
