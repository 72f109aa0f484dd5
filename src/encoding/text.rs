use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, trace, warn};

use super::{Line, SEPARATOR};
use crate::error::{PropertiesError, Result};
use crate::store::Properties;

impl Properties {
    /// Read `key=value` lines from `reader` into the local entries
    ///
    /// Returns the number of bytes consumed, counting each line without its
    /// terminator. A repeated key keeps its last value. Parsing stops at the
    /// first line without a separator; entries from earlier lines stay put.
    pub fn parse_from<R: Read>(&self, reader: R) -> Result<u64> {
        let reader = BufReader::new(reader);
        let mut consumed = 0u64;

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            consumed += line.len() as u64;

            match Line::parse(&line) {
                Some(Line::Entry { key, value }) => {
                    trace!(line = index + 1, key, "parsed entry");
                    self.put(key, value);
                }
                Some(Line::Blank) | Some(Line::Comment(_)) => {}
                None => {
                    let content = line.trim().to_string();
                    warn!(line = index + 1, %content, "line has no separator");
                    return Err(PropertiesError::MalformedLine {
                        line: index + 1,
                        content,
                    });
                }
            }
        }

        Ok(consumed)
    }

    /// Load entries from the file at `path`
    pub fn load_from(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let consumed = self.parse_from(file)?;
        debug!(path = %path.display(), bytes = consumed, entries = self.len(), "loaded properties");
        Ok(())
    }

    /// Write the local entries to `writer`, one `key=value` line each
    ///
    /// Defaults are not written. Keys and values go out verbatim, so an
    /// embedded `=`, `#` or newline will not read back the same. Entries are
    /// emitted in key order. Returns the number of bytes written.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<u64> {
        let separator = SEPARATOR.to_string();
        let mut written = 0u64;

        for (key, value) in self.entries() {
            let chunks: [&[u8]; 4] = [key.as_bytes(), separator.as_bytes(), value.as_bytes(), b"\n"];
            for chunk in chunks {
                writer.write_all(chunk)?;
                written += chunk.len() as u64;
            }
        }

        Ok(written)
    }

    /// Create or truncate the file at `path` and write the local entries to it
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        let written = self.write_to(&mut writer)?;
        writer.flush()?;
        debug!(path = %path.display(), bytes = written, entries = self.len(), "saved properties");
        Ok(())
    }
}

/// Build a new store from the text in `reader`
pub fn read_from<R: Read>(reader: R) -> Result<Properties> {
    let properties = Properties::new();
    properties.parse_from(reader)?;
    Ok(properties)
}

/// Build a new store from the file at `path`
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Properties> {
    let properties = Properties::new();
    properties.load_from(path)?;
    Ok(properties)
}

impl FromStr for Properties {
    type Err = PropertiesError;

    fn from_str(s: &str) -> Result<Self> {
        read_from(s.as_bytes())
    }
}
