//! Capture file lines
//!
//! One message per line, prefixed with its direction:
//!
//! ```text
//! # comment
//! IN  8=FIX.4.2|9=120|35=X|...
//! OUT 8=FIX.4.2|9=65|35=D|...
//! ```

use crate::error::ReplayError;
use fixlog_core::Direction;

/// A recorded message and the direction it travelled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureLine {
    pub direction: Direction,
    pub message: String,
}

/// Parse one capture line; blank lines and `#` comments yield `None`
///
/// `line_no` is 1-based and only used for error reporting.
pub fn parse_capture_line(line_no: usize, line: &str) -> Result<Option<CaptureLine>, ReplayError> {
    let line = line.trim_end_matches(['\r', '\n']).trim_start();
    if line.trim_end().is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (prefix, message) = line
        .split_once(char::is_whitespace)
        .ok_or_else(|| ReplayError::InvalidLine {
            line: line_no,
            reason: "expected '<IN|OUT> <message>'".to_string(),
        })?;

    let direction = if prefix.eq_ignore_ascii_case("in") {
        Direction::Inbound
    } else if prefix.eq_ignore_ascii_case("out") {
        Direction::Outbound
    } else {
        return Err(ReplayError::InvalidLine {
            line: line_no,
            reason: format!("unknown direction {:?}", prefix),
        });
    };

    Ok(Some(CaptureLine {
        direction,
        message: message.trim_start().to_string(),
    }))
}
