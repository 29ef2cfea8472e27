//! Coverage profile fragments
//!
//! A fragment conventionally starts with a `mode: <word>` line followed by one
//! record per statement block. Records are never parsed; only the leading mode
//! header matters when fragments are joined.

use once_cell::sync::Lazy;
use regex::bytes::Regex;

/// Leading mode header, e.g. `mode: set\n`. Lowercase ASCII only.
pub static MODE_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\Amode: ([a-z]+)\n").expect("Invalid MODE_HEADER regex"));

/// Return the mode named by a leading header, if `data` starts with one
pub fn leading_mode(data: &[u8]) -> Option<String> {
    MODE_HEADER
        .captures(data)
        .and_then(|caps| caps.get(1))
        .map(|m| String::from_utf8_lossy(m.as_bytes()).into_owned())
}

/// Remove the leading mode header line from `data`, if present
pub fn strip_mode_header(data: &[u8]) -> &[u8] {
    match MODE_HEADER.find(data) {
        Some(m) => &data[m.end()..],
        None => data,
    }
}

/// Append-only accumulator for one concatenation.
///
/// Once the accumulated bytes start with a mode header, every later fragment
/// loses its own leading header before being appended.
#[derive(Debug, Default)]
pub struct ProfileBuffer {
    data: Vec<u8>,
    mode: Option<String>,
}

impl ProfileBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment, returning the number of bytes actually added
    pub fn push(&mut self, fragment: &[u8]) -> usize {
        let fragment = if self.mode.is_some() {
            strip_mode_header(fragment)
        } else {
            fragment
        };
        self.data.extend_from_slice(fragment);

        // The prefix is fixed once a full header is present, so this only
        // needs re-checking until one shows up.
        if self.mode.is_none() {
            self.mode = leading_mode(&self.data);
        }

        fragment.len()
    }

    /// Mode named by the buffer's header, if it has one
    pub fn mode(&self) -> Option<&str> {
        self.mode.as_deref()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}
