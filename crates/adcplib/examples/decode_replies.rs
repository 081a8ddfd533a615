//! Decode captured instrument replies.
//!
//! Demonstrates the reply decoders on text captured from a terminal
//! session with the instrument: the BREAK identity banner, the STIME
//! clock readback, and a DSDIR listing of the internal recorder.
//! Replay tools and pre-deployment checkers consume saved captures
//! this way, with no serial link involved.
//!
//! # Usage
//!
//! ```sh
//! cargo run -p adcplib --example decode_replies
//! ```

use adcplib::protocol::banner::decode_break;
use adcplib::protocol::clock::decode_stime;
use adcplib::protocol::storage::decode_dsdir;

/// BREAK banner, exactly as the instrument prints it.
const BANNER: &str = "Copyright (c) 2009-2014 Rowe Technologies Inc. All rights reserved.\r\n\
                      DP1200 DP600\r\n\
                      SN: 01230000000000000000000000000001\r\n\
                      FW: 00.02.09 Apr 17 2014 05:40:11\r\n";

/// STIME clock readback.
const STIME: &str = "STIME\r\n2014/07/09 12:45:11\r\n";

/// DSDIR listing with two recorded files.
const DSDIR: &str = "DSDIR\r\n\
                     Total Space:                       3781.813  MB\r\n\
                     Used Space:                          10.004  MB\r\n\
                     \r\n\
                     A0000001.ENS     2014/07/01 10:44:34      1.004\r\n\
                     A0000002.ENS     2014/07/09 12:45:11      9.000\r\n\
                     \r\n\
                     DSDIR\r\n";

fn main() -> adcplib::Result<()> {
    // Identity: hardware model, serial number, firmware.
    let info = decode_break(BANNER)?;
    println!("Hardware:  {}", info.hardware);
    println!("Serial:    {}", info.serial_number);
    println!("Firmware:  {}", info.firmware);
    for ss in info.serial_number.subsystems() {
        if let Some(ty) = ss.subsystem_type() {
            println!("  slot {}: {}", ss.index(), ty.label());
        }
    }

    // Clock, as read back before a deployment starts.
    let clock = decode_stime(STIME)?;
    println!("\nClock:     {clock}");

    // Recorder contents.
    let dir = decode_dsdir(DSDIR)?;
    println!(
        "\nRecorder:  {:.3} MB used of {:.3} MB ({:.3} MB free)",
        dir.used_space_mb,
        dir.total_space_mb,
        dir.free_space_mb()
    );
    println!("{:<16} {:<19} {:>9}", "File", "Modified", "MB");
    println!("{:-<16} {:-<19} {:-<9}", "", "", "");
    for file in &dir.files {
        let modified = file.modified.format("%Y/%m/%d %H:%M:%S").to_string();
        println!("{:<16} {:<19} {:>9.3}", file.name, modified, file.size_mb);
    }

    Ok(())
}
