//! Deployment planning options.
//!
//! These values never render as instrument commands. They describe the
//! physical deployment (how long, how powered, how deep) and feed
//! power and storage planning in applications; they ride along with the
//! command set so a saved configuration captures the whole deployment.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Valid deployment duration range in days.
const DURATION_RANGE: RangeInclusive<u32> = 1..=366;
/// Valid battery count range.
const BATTERY_COUNT_RANGE: RangeInclusive<u32> = 0..=100;
/// Valid depth-to-bottom range in meters.
const DEPTH_TO_BOTTOM_RANGE: RangeInclusive<f32> = 0.0..=11_000.0;

const DEFAULT_DURATION_DAYS: u32 = 1;
const DEFAULT_BATTERY_COUNT: u32 = 1;
const DEFAULT_DEPTH_TO_BOTTOM: f32 = 100.0;

/// Battery chemistry installed in the instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BatteryType {
    /// Alkaline pack, 440 Wh.
    #[default]
    Alkaline,
    /// Lithium pack, 1100 Wh.
    Lithium,
}

impl BatteryType {
    /// Usable energy of one battery pack in watt-hours.
    pub fn watt_hours(&self) -> f32 {
        match self {
            BatteryType::Alkaline => 440.0,
            BatteryType::Lithium => 1100.0,
        }
    }
}

impl fmt::Display for BatteryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BatteryType::Alkaline => "Alkaline",
            BatteryType::Lithium => "Lithium",
        };
        write!(f, "{s}")
    }
}

/// How the instrument is operated during the deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DeploymentMode {
    /// Cabled to a host; data streams out in real time.
    #[default]
    DirectReading,
    /// Autonomous; data accumulates on the internal recorder.
    SelfContained,
    /// Mounted on a vehicle as a velocity log.
    Dvl,
    /// Wave statistics collection.
    Waves,
}

impl fmt::Display for DeploymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DeploymentMode::DirectReading => "Direct reading",
            DeploymentMode::SelfContained => "Self contained",
            DeploymentMode::Dvl => "DVL",
            DeploymentMode::Waves => "Waves",
        };
        write!(f, "{s}")
    }
}

/// Physical deployment parameters for a planned mission.
///
/// Setters validate-or-default like the command setters do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentOptions {
    duration_days: u32,
    battery_count: u32,
    battery_type: BatteryType,
    depth_to_bottom_m: f32,
    mode: DeploymentMode,
    internal_memory_card: bool,
}

impl Default for DeploymentOptions {
    fn default() -> Self {
        DeploymentOptions {
            duration_days: DEFAULT_DURATION_DAYS,
            battery_count: DEFAULT_BATTERY_COUNT,
            battery_type: BatteryType::default(),
            depth_to_bottom_m: DEFAULT_DEPTH_TO_BOTTOM,
            mode: DeploymentMode::default(),
            internal_memory_card: true,
        }
    }
}

impl DeploymentOptions {
    /// Create options with every field at its default.
    pub fn new() -> Self {
        DeploymentOptions::default()
    }

    /// Planned deployment duration in days.
    pub fn duration(&self) -> u32 {
        self.duration_days
    }

    /// Set the deployment duration in days. Valid range 1 to 366;
    /// out-of-range values reset to 1.
    pub fn set_duration(&mut self, days: u32) {
        self.duration_days = if DURATION_RANGE.contains(&days) {
            days
        } else {
            DEFAULT_DURATION_DAYS
        };
    }

    /// Number of battery packs installed.
    pub fn battery_count(&self) -> u32 {
        self.battery_count
    }

    /// Set the number of battery packs. Valid range 0 to 100 (zero means
    /// external power only); out-of-range values reset to 1.
    pub fn set_battery_count(&mut self, count: u32) {
        self.battery_count = if BATTERY_COUNT_RANGE.contains(&count) {
            count
        } else {
            DEFAULT_BATTERY_COUNT
        };
    }

    /// Battery chemistry installed.
    pub fn battery_type(&self) -> BatteryType {
        self.battery_type
    }

    /// Set the battery chemistry.
    pub fn set_battery_type(&mut self, battery: BatteryType) {
        self.battery_type = battery;
    }

    /// Total battery energy available in watt-hours.
    pub fn total_battery_energy(&self) -> f32 {
        self.battery_count as f32 * self.battery_type.watt_hours()
    }

    /// Water depth at the deployment site in meters.
    pub fn depth_to_bottom(&self) -> f32 {
        self.depth_to_bottom_m
    }

    /// Set the water depth in meters. Valid range 0 to 11000;
    /// out-of-range values reset to 100.
    pub fn set_depth_to_bottom(&mut self, meters: f32) {
        self.depth_to_bottom_m = if DEPTH_TO_BOTTOM_RANGE.contains(&meters) {
            meters
        } else {
            DEFAULT_DEPTH_TO_BOTTOM
        };
    }

    /// How the instrument is operated.
    pub fn mode(&self) -> DeploymentMode {
        self.mode
    }

    /// Set the operating mode.
    pub fn set_mode(&mut self, mode: DeploymentMode) {
        self.mode = mode;
    }

    /// Whether data is recorded to the internal memory card.
    pub fn internal_memory_card(&self) -> bool {
        self.internal_memory_card
    }

    /// Enable or disable internal recording.
    pub fn set_internal_memory_card(&mut self, on: bool) {
        self.internal_memory_card = on;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_a_one_day_cabled_deployment() {
        let opts = DeploymentOptions::new();
        assert_eq!(opts.duration(), 1);
        assert_eq!(opts.battery_count(), 1);
        assert_eq!(opts.battery_type(), BatteryType::Alkaline);
        assert_eq!(opts.depth_to_bottom(), 100.0);
        assert_eq!(opts.mode(), DeploymentMode::DirectReading);
        assert!(opts.internal_memory_card());
    }

    #[test]
    fn battery_energy_scales_with_count_and_chemistry() {
        let mut opts = DeploymentOptions::new();
        assert_eq!(opts.total_battery_energy(), 440.0);

        opts.set_battery_count(3);
        assert_eq!(opts.total_battery_energy(), 1320.0);

        opts.set_battery_type(BatteryType::Lithium);
        assert_eq!(opts.total_battery_energy(), 3300.0);

        opts.set_battery_count(0);
        assert_eq!(opts.total_battery_energy(), 0.0);
    }

    #[test]
    fn duration_validates_or_defaults() {
        let mut opts = DeploymentOptions::new();
        opts.set_duration(366);
        assert_eq!(opts.duration(), 366);
        opts.set_duration(0);
        assert_eq!(opts.duration(), 1);
        opts.set_duration(367);
        assert_eq!(opts.duration(), 1);
    }

    #[test]
    fn depth_validates_or_defaults() {
        let mut opts = DeploymentOptions::new();
        opts.set_depth_to_bottom(10_909.0);
        assert_eq!(opts.depth_to_bottom(), 10_909.0);
        opts.set_depth_to_bottom(-5.0);
        assert_eq!(opts.depth_to_bottom(), 100.0);
        opts.set_depth_to_bottom(f32::NAN);
        assert_eq!(opts.depth_to_bottom(), 100.0);
    }

    #[test]
    fn battery_count_validates_or_defaults() {
        let mut opts = DeploymentOptions::new();
        opts.set_battery_count(100);
        assert_eq!(opts.battery_count(), 100);
        opts.set_battery_count(101);
        assert_eq!(opts.battery_count(), 1);
    }

    #[test]
    fn mode_labels() {
        assert_eq!(DeploymentMode::DirectReading.to_string(), "Direct reading");
        assert_eq!(DeploymentMode::Dvl.to_string(), "DVL");
        assert_eq!(BatteryType::Lithium.to_string(), "Lithium");
    }

    #[test]
    fn serde_round_trip_preserves_every_field() {
        let mut opts = DeploymentOptions::new();
        opts.set_duration(30);
        opts.set_battery_type(BatteryType::Lithium);
        opts.set_mode(DeploymentMode::SelfContained);
        opts.set_internal_memory_card(false);

        let json = serde_json::to_string(&opts).unwrap();
        let back: DeploymentOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(opts, back);
    }
}
