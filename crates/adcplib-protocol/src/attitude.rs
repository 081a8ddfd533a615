//! Compass and tilt readout (ENGPNI).
//!
//! `ENGPNI` replies with one line of heading/pitch/roll in degrees:
//!
//! ```text
//! ENGPNI
//! H=179.98, P=-0.72, R=-163.46
//! ```

use adcplib_core::{Error, Result};

use crate::wire::response_lines;

/// One heading/pitch/roll attitude sample, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Hpr {
    /// Compass heading.
    pub heading: f32,
    /// Pitch (positive bow up).
    pub pitch: f32,
    /// Roll (positive starboard down).
    pub roll: f32,
}

/// Decode an ENGPNI reply.
///
/// Scans for the `H=`, `P=`, and `R=` fields; the echoed command line
/// and blank lines are skipped. Field order within the line does not
/// matter, all three must be present.
///
/// # Errors
///
/// [`Error::MalformedResponse`] when any of the three fields is missing
/// or fails to parse.
///
/// # Example
///
/// ```
/// use adcplib_protocol::attitude::decode_engpni;
///
/// let hpr = decode_engpni("ENGPNI\r\nH=179.98, P=-0.72, R=-163.46\r\n")?;
/// assert_eq!(hpr.heading, 179.98);
/// assert_eq!(hpr.pitch, -0.72);
/// assert_eq!(hpr.roll, -163.46);
/// # Ok::<(), adcplib_core::Error>(())
/// ```
pub fn decode_engpni(text: &str) -> Result<Hpr> {
    let mut heading = None;
    let mut pitch = None;
    let mut roll = None;

    for line in response_lines(text) {
        for field in line.split(',') {
            if let Some((key, value)) = field.split_once('=') {
                let value = value.trim().parse::<f32>().ok();
                match key.trim() {
                    "H" => heading = value,
                    "P" => pitch = value,
                    "R" => roll = value,
                    _ => {}
                }
            }
        }
    }

    match (heading, pitch, roll) {
        (Some(heading), Some(pitch), Some(roll)) => Ok(Hpr {
            heading,
            pitch,
            roll,
        }),
        _ => Err(Error::MalformedResponse(format!(
            "no H/P/R fields in ENGPNI reply: '{text}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_level_instrument() {
        let hpr = decode_engpni("ENGPNI\r\nH=0.00, P=0.00, R=0.00\r\n").unwrap();
        assert_eq!(hpr.heading, 0.0);
        assert_eq!(hpr.pitch, 0.0);
        assert_eq!(hpr.roll, 0.0);
    }

    #[test]
    fn decodes_negative_tilts() {
        let hpr = decode_engpni("H=179.98, P=-0.72, R=-163.46").unwrap();
        assert_eq!(hpr.heading, 179.98);
        assert_eq!(hpr.pitch, -0.72);
        assert_eq!(hpr.roll, -163.46);
    }

    #[test]
    fn field_order_does_not_matter() {
        let hpr = decode_engpni("R=1.5, H=90.0, P=2.25").unwrap();
        assert_eq!(hpr.heading, 90.0);
        assert_eq!(hpr.pitch, 2.25);
        assert_eq!(hpr.roll, 1.5);
    }

    #[test]
    fn tolerates_uneven_spacing() {
        let hpr = decode_engpni("H= 12.5 ,P=0.1,  R = -0.1").unwrap();
        assert_eq!(hpr.heading, 12.5);
        assert_eq!(hpr.roll, -0.1);
    }

    #[test]
    fn missing_field_is_malformed() {
        assert!(matches!(
            decode_engpni("H=12.0, P=0.5"),
            Err(Error::MalformedResponse(_))
        ));
    }

    #[test]
    fn unparsable_value_is_malformed() {
        assert!(decode_engpni("H=north, P=0.0, R=0.0").is_err());
    }

    #[test]
    fn empty_reply_is_malformed() {
        assert!(decode_engpni("").is_err());
        assert!(decode_engpni("ENGPNI\r\n\r\n").is_err());
    }
}
