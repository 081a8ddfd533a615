//! Recorder directory listing (DSDIR).
//!
//! `DSDIR` lists the internal memory card: labeled total/used space
//! lines followed by one row per recorded file:
//!
//! ```text
//! DSDIR
//! Total Space:                       3781.813  MB
//! Used Space:                          10.004  MB
//!
//! A0000001.ENS     2014/07/01 10:44:34      1.004
//! A0000002.ENS     2014/07/09 12:45:11      9.000
//!
//! DSDIR
//! ```

use adcplib_core::{Error, Result};
use chrono::NaiveDateTime;
use tracing::trace;

use crate::wire::response_lines;

/// File row timestamp format.
const MODIFIED_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// One recorded file on the memory card.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DirectoryEntry {
    /// File name (`A0000001.ENS`).
    pub name: String,
    /// Last-modified timestamp.
    pub modified: NaiveDateTime,
    /// File size in megabytes.
    pub size_mb: f32,
}

/// Decoded memory card directory.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DirectoryListing {
    /// Card capacity in megabytes.
    pub total_space_mb: f32,
    /// Space consumed by recordings in megabytes.
    pub used_space_mb: f32,
    /// Recorded files in listing order.
    pub files: Vec<DirectoryEntry>,
}

impl DirectoryListing {
    /// Remaining capacity in megabytes.
    pub fn free_space_mb(&self) -> f32 {
        self.total_space_mb - self.used_space_mb
    }
}

/// Decode a DSDIR reply.
///
/// The labeled `Total Space:` and `Used Space:` lines are the required
/// envelope; file rows are parsed tolerantly, so the command echo,
/// blank lines, and header noise never abort the listing. An empty
/// recorder decodes to an empty file list.
///
/// # Errors
///
/// [`Error::MalformedResponse`] when either labeled space line is
/// missing or unparsable.
///
/// # Example
///
/// ```
/// use adcplib_protocol::storage::decode_dsdir;
///
/// let text = "DSDIR\r\n\
///             Total Space:  3781.813  MB\r\n\
///             Used Space:     10.004  MB\r\n\
///             A0000001.ENS  2014/07/01 10:44:34  1.004\r\n";
/// let dir = decode_dsdir(text)?;
/// assert_eq!(dir.files.len(), 1);
/// assert_eq!(dir.files[0].name, "A0000001.ENS");
/// # Ok::<(), adcplib_core::Error>(())
/// ```
pub fn decode_dsdir(text: &str) -> Result<DirectoryListing> {
    let mut total_space_mb = None;
    let mut used_space_mb = None;
    let mut files = Vec::new();

    for line in response_lines(text) {
        if let Some(rest) = line.strip_prefix("Total Space:") {
            total_space_mb = parse_megabytes(rest);
        } else if let Some(rest) = line.strip_prefix("Used Space:") {
            used_space_mb = parse_megabytes(rest);
        } else {
            match parse_file_row(line) {
                Some(entry) => files.push(entry),
                None => trace!(line, "skipping non-file row in DSDIR reply"),
            }
        }
    }

    match (total_space_mb, used_space_mb) {
        (Some(total_space_mb), Some(used_space_mb)) => Ok(DirectoryListing {
            total_space_mb,
            used_space_mb,
            files,
        }),
        _ => Err(Error::MalformedResponse(
            "DSDIR reply has no Total/Used Space lines".into(),
        )),
    }
}

/// Parse the numeric part of `  3781.813  MB`.
fn parse_megabytes(rest: &str) -> Option<f32> {
    rest.split_whitespace().next()?.parse().ok()
}

/// Parse one file row: `<name>  <date> <time>  <size>`.
fn parse_file_row(line: &str) -> Option<DirectoryEntry> {
    let mut tokens = line.split_whitespace();
    let name = tokens.next()?;
    let date = tokens.next()?;
    let time = tokens.next()?;
    let size = tokens.next()?;

    let modified = NaiveDateTime::parse_from_str(&format!("{date} {time}"), MODIFIED_FORMAT).ok()?;
    let size_mb = size.parse().ok()?;
    Some(DirectoryEntry {
        name: name.to_string(),
        modified,
        size_mb,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const LISTING: &str = "DSDIR\r\n\
        Total Space:                       3781.813  MB\r\n\
        Used Space:                          10.004  MB\r\n\
        \r\n\
        A0000001.ENS     2014/07/01 10:44:34      1.004\r\n\
        A0000002.ENS     2014/07/09 12:45:11      9.000\r\n\
        \r\n\
        DSDIR\r\n";

    #[test]
    fn decodes_a_full_listing() {
        let dir = decode_dsdir(LISTING).unwrap();
        assert_eq!(dir.total_space_mb, 3781.813);
        assert_eq!(dir.used_space_mb, 10.004);
        assert_eq!(dir.files.len(), 2);
    }

    #[test]
    fn file_rows_keep_listing_order() {
        let dir = decode_dsdir(LISTING).unwrap();
        assert_eq!(dir.files[0].name, "A0000001.ENS");
        assert_eq!(dir.files[1].name, "A0000002.ENS");
        assert_eq!(dir.files[1].size_mb, 9.0);
    }

    #[test]
    fn file_timestamps_parse() {
        let dir = decode_dsdir(LISTING).unwrap();
        let expected = NaiveDate::from_ymd_opt(2014, 7, 1)
            .and_then(|d| d.and_hms_opt(10, 44, 34))
            .unwrap();
        assert_eq!(dir.files[0].modified, expected);
    }

    #[test]
    fn command_echo_is_not_a_file() {
        let dir = decode_dsdir(LISTING).unwrap();
        assert!(dir.files.iter().all(|f| f.name != "DSDIR"));
    }

    #[test]
    fn empty_recorder_lists_no_files() {
        let text = "DSDIR\r\nTotal Space:  3781.813  MB\r\nUsed Space:  0.000  MB\r\n";
        let dir = decode_dsdir(text).unwrap();
        assert!(dir.files.is_empty());
        assert_eq!(dir.free_space_mb(), 3781.813);
    }

    #[test]
    fn free_space_is_total_minus_used() {
        let dir = decode_dsdir(LISTING).unwrap();
        assert!((dir.free_space_mb() - 3771.809).abs() < 1e-3);
    }

    #[test]
    fn garbled_file_rows_are_skipped() {
        let text = "Total Space:  100.0  MB\r\n\
                    Used Space:  1.0  MB\r\n\
                    A0000001.ENS  2014/07/01 10:44:34  1.004\r\n\
                    A0000002.ENS  not-a-date  9.000\r\n";
        let dir = decode_dsdir(text).unwrap();
        assert_eq!(dir.files.len(), 1);
    }

    #[test]
    fn missing_space_lines_are_malformed() {
        assert!(matches!(
            decode_dsdir("A0000001.ENS  2014/07/01 10:44:34  1.004\r\n"),
            Err(Error::MalformedResponse(_))
        ));
        assert!(decode_dsdir("DSDIR\r\nTotal Space: 100.0 MB\r\n").is_err());
        assert!(decode_dsdir("").is_err());
    }

    #[test]
    fn unparsable_space_value_is_malformed() {
        let text = "Total Space:  lots  MB\r\nUsed Space:  1.0  MB\r\n";
        assert!(decode_dsdir(text).is_err());
    }
}
