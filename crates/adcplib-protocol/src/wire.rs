//! Command framing for the instrument's ASCII serial protocol.
//!
//! Commands travel as ASCII text terminated with a carriage return. The
//! instrument replies with free-form text: an echo of the command,
//! result lines, and a blank line or two, with CR/LF line endings.
//!
//! # Command format
//!
//! ```text
//! <command><CR>
//! ```
//!
//! - `command`: ASCII command text, e.g. `CWPON[0] 1` or `ENGPNI`.
//! - Terminator: carriage return (0x0D).
//!
//! The decoders in this crate work on the reply text line by line;
//! [`response_lines`] is the shared tokenizer that strips line endings
//! and blank lines so each decoder sees only content rows.

use bytes::{BufMut, BytesMut};

/// Command terminator byte (carriage return).
pub const TERMINATOR: u8 = b'\r';

/// Encode a command into raw bytes ready for transmission.
///
/// Appends the CR terminator. The command text itself comes from the
/// renderers in `adcplib-commands` or is a bare query word (`STIME`,
/// `ENGPNI`, `DSDIR`).
///
/// # Example
///
/// ```
/// use adcplib_protocol::wire::encode_command;
///
/// assert_eq!(encode_command("CWPON[0] 1"), b"CWPON[0] 1\r");
/// assert_eq!(encode_command("ENGPNI"), b"ENGPNI\r");
/// ```
pub fn encode_command(command: &str) -> Vec<u8> {
    let mut buf = BytesMut::with_capacity(command.len() + 1);
    buf.put_slice(command.as_bytes());
    buf.put_u8(TERMINATOR);
    buf.to_vec()
}

/// Iterate over the content lines of a response.
///
/// Splits on `\n`, trims trailing `\r` and surrounding whitespace, and
/// skips lines that end up empty. Every decoder in this crate consumes
/// responses through this tokenizer so echo spacing and CR/LF vs LF
/// endings never matter.
///
/// # Example
///
/// ```
/// use adcplib_protocol::wire::response_lines;
///
/// let text = "STIME\r\n\r\n2024/06/01 12:30:45\r\n";
/// let lines: Vec<&str> = response_lines(text).collect();
/// assert_eq!(lines, ["STIME", "2024/06/01 12:30:45"]);
/// ```
pub fn response_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_appends_carriage_return() {
        assert_eq!(encode_command("CWPBB[1] 1,0.042"), b"CWPBB[1] 1,0.042\r");
        assert_eq!(encode_command("BREAK"), b"BREAK\r");
    }

    #[test]
    fn encode_empty_command_is_a_bare_terminator() {
        assert_eq!(encode_command(""), b"\r");
    }

    #[test]
    fn response_lines_strips_cr_and_blanks() {
        let text = "ENGPNI\r\n\r\nH=0.00, P=0.00, R=0.00\r\n\r\n";
        let lines: Vec<&str> = response_lines(text).collect();
        assert_eq!(lines, ["ENGPNI", "H=0.00, P=0.00, R=0.00"]);
    }

    #[test]
    fn response_lines_accepts_bare_lf() {
        let text = "line one\nline two\n";
        let lines: Vec<&str> = response_lines(text).collect();
        assert_eq!(lines, ["line one", "line two"]);
    }

    #[test]
    fn response_lines_trims_padding() {
        let text = "  padded  \r\n";
        let lines: Vec<&str> = response_lines(text).collect();
        assert_eq!(lines, ["padded"]);
    }

    #[test]
    fn response_lines_on_empty_input() {
        assert_eq!(response_lines("").count(), 0);
        assert_eq!(response_lines("\r\n\r\n").count(), 0);
    }
}
