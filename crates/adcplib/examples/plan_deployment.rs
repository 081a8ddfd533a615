//! Plan a dual-frequency deployment and print its provisioning script.
//!
//! Demonstrates the command model end to end: parse an instrument
//! serial number, allocate per-subsystem command slots with a CEPO ping
//! order, tune each frequency's water profile, and render the exact
//! command strings a provisioning tool would send over the wire.
//!
//! Everything runs in memory; no instrument or serial port is needed.
//!
//! # Usage
//!
//! ```sh
//! cargo run -p adcplib --example plan_deployment
//! ```

use adcplib::commands::{AdcpConfiguration, BatteryType, DeploymentMode, OutputFormat};
use adcplib::{SerialNumber, TimeValue};

/// Serial number as reported in the BREAK banner: a 1200 kHz ('2') and
/// a 600 kHz ('3') piston subsystem, system number 1.
const SERIAL: &str = "01230000000000000000000000000001";

/// Mooring plan.
const DURATION_DAYS: u32 = 30;
const SITE_DEPTH_M: f32 = 55.0; // bottom mounted, looking up
const SALINITY_PPT: f32 = 35.0; // open ocean

fn main() -> adcplib::Result<()> {
    let serial = SerialNumber::parse(SERIAL)?;

    println!("Instrument SN {serial}");
    println!("Hardware inventory:");
    for ss in serial.subsystems() {
        match ss.subsystem_type() {
            Some(ty) => println!("  '{}'  {}", ss.code(), ty.label()),
            None => println!("  '{}'  unknown subsystem code", ss.code()),
        }
    }

    let mut config = AdcpConfiguration::new(serial.clone());

    // Interleave the two frequencies: 1200, 600, 1200, 600.
    let slot_count = config.set_cepo("2323", &serial).len();
    println!(
        "\nCEPO \"{}\" allocated {slot_count} slots",
        config.commands().cepo()
    );

    // Instrument-wide settings: one ensemble per minute, salt water,
    // record to the internal card, no live output.
    let commands = config.commands_mut();
    commands.set_ensemble_interval(TimeValue::new(0, 1, 0, 0));
    commands.set_salinity(SALINITY_PPT);
    commands.set_transducer_depth(SITE_DEPTH_M);
    commands.set_record(true, false);
    commands.set_output_format(OutputFormat::Disabled);

    // Per-slot tuning. The 1200 kHz slots resolve fine structure near
    // the transducer; the 600 kHz slots cover the whole water column.
    let identities: Vec<_> = config
        .subsystems()
        .iter()
        .map(|slot| (slot.subsystem(), slot.cepo_index()))
        .collect();
    for (subsystem, index) in identities {
        if let Some(slot) = config.get_mut(&subsystem, index) {
            let profile = slot.commands_mut().water_profile_mut();
            if subsystem.code() == '2' {
                profile.set_bin_size(0.25);
                profile.set_bin_count(40);
            } else {
                profile.set_bin_size(1.0);
                profile.set_bin_count(60);
            }
        }
    }

    // Physical plan, used for power and storage budgeting.
    let deployment = config.deployment_mut();
    deployment.set_mode(DeploymentMode::SelfContained);
    deployment.set_duration(DURATION_DAYS);
    deployment.set_depth_to_bottom(SITE_DEPTH_M);
    deployment.set_battery_type(BatteryType::Lithium);
    deployment.set_battery_count(2);
    println!(
        "Plan: {} days {}, {:.0} Wh of battery",
        config.deployment().duration(),
        config.deployment().mode(),
        config.deployment().total_battery_energy()
    );

    // The script, in the order the instrument needs it: instrument-wide
    // commands with CEPO last, then each slot's indexed block.
    println!("\nProvisioning script:");
    for command in config.command_list() {
        println!("  {command}");
    }

    Ok(())
}
