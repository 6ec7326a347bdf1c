//! Match results
//!
//! The matched files are the only stored state; the flag and count are
//! derived from them so the three outputs always agree.

use std::io::{self, Write};

use serde::Serialize;
use serde::ser::Error as _;
use serde_json::ser::{Formatter, Serializer};

/// Files that survived filtering, in change-set order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MatchResult {
    files: Vec<String>,
}

impl MatchResult {
    /// Wrap an ordered list of matched files
    #[must_use]
    pub const fn new(files: Vec<String>) -> Self {
        Self { files }
    }

    /// Matched files in their original order
    #[must_use]
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Whether any file matched
    #[must_use]
    pub fn matches(&self) -> bool {
        !self.files.is_empty()
    }

    /// Number of matched files
    #[must_use]
    pub fn count(&self) -> usize {
        self.files.len()
    }

    /// The matched files as a JSON array
    ///
    /// Elements are separated by `", "` and non-ASCII characters are written
    /// as `\uXXXX` escapes, so the text is stable for string comparison in
    /// workflow expressions.
    pub fn files_json(&self) -> serde_json::Result<String> {
        let mut out = Vec::new();
        self.files.serialize(&mut Serializer::with_formatter(&mut out, AsciiListFormatter))?;
        String::from_utf8(out).map_err(serde_json::Error::custom)
    }
}

/// JSON formatter with `", "` array separators and ASCII-only strings
struct AsciiListFormatter;

impl Formatter for AsciiListFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let mut start = 0;
        for (i, c) in fragment.char_indices() {
            if c.is_ascii() {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[start..i])?;
            let mut units = [0_u16; 2];
            for unit in c.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = i + c.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }
}
