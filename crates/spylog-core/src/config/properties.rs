//! Flat `key=value` properties files
//!
//! Files follow `java.util.Properties` conventions: ISO-8859-1 unless the
//! content is valid UTF-8, backslash escapes in keys and values, and
//! backslash line continuation.

use super::error::ConfigError;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

/// Parsed properties file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: BTreeMap<String, String>,
}

impl Properties {
    /// Parse properties text.
    ///
    /// Comment lines start with `#` or `!`. Keys are separated from values by
    /// the first unescaped `=` or `:`. A trailing backslash continues the
    /// logical line on the next physical line. Escapes (`\\`, `\=`, `\:`,
    /// `\t`, `\n`, `\r`, `\f`, `\uXXXX`) are decoded in keys and values.
    /// Lines without a separator, with an empty key or with a broken `\u`
    /// escape are returned as [`ConfigError::MalformedEntry`] and skipped;
    /// the rest of the file still loads. Later duplicates win.
    pub fn parse(path: &Path, contents: &str) -> (Self, Vec<ConfigError>) {
        let mut entries = BTreeMap::new();
        let mut malformed = Vec::new();

        let mut logical = String::new();
        let mut start_line = 0;
        let mut pending = false;

        let mut finish = |logical: &str, line: usize| match split_entry(logical) {
            Some((key, value)) => {
                entries.insert(key, value);
            }
            None => malformed.push(ConfigError::MalformedEntry {
                path: path.to_path_buf(),
                line,
                content: logical.to_string(),
            }),
        };

        for (idx, raw) in contents.lines().enumerate() {
            let piece = raw.trim();

            if !pending {
                if piece.is_empty() || is_comment(piece) {
                    continue;
                }
                start_line = idx + 1;
            }

            if let Some(head) = continued(piece) {
                logical.push_str(head);
                pending = true;
                continue;
            }
            logical.push_str(piece);
            pending = false;

            finish(&logical, start_line);
            logical.clear();
        }

        // Continuation on the last line of the file
        if pending && !logical.is_empty() {
            finish(&logical, start_line);
        }

        (Self { entries }, malformed)
    }

    /// Read and parse a properties file.
    ///
    /// Content that is not valid UTF-8 is decoded as ISO-8859-1, so a
    /// Latin-1 file never loses its entries. Malformed entries are logged at
    /// warn level and skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SourceUnavailable`] if the file cannot be read.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let bytes = std::fs::read(path).map_err(|source| ConfigError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        let contents = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                debug!("{path:?} is not UTF-8; reading it as ISO-8859-1");
                e.into_bytes().iter().map(|&b| char::from(b)).collect()
            }
        };

        let (props, malformed) = Self::parse(path, &contents);
        for err in malformed {
            warn!("Skipping properties entry: {err}");
        }
        Ok(props)
    }

    /// Value for `key`, if present
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of entries
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

impl FromIterator<(String, String)> for Properties {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

fn is_comment(line: &str) -> bool {
    line.starts_with('#') || line.starts_with('!')
}

/// Strip a continuation backslash. An escaped backslash (`\\`) does not
/// continue the line.
fn continued(line: &str) -> Option<&str> {
    let trailing = line.chars().rev().take_while(|c| *c == '\\').count();
    if trailing % 2 == 1 {
        Some(&line[..line.len() - 1])
    } else {
        None
    }
}

/// Split at the first unescaped separator and decode both halves.
fn split_entry(line: &str) -> Option<(String, String)> {
    let mut escaped = false;
    let mut sep = None;
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '=' || c == ':' {
            sep = Some(i);
            break;
        }
    }
    let sep = sep?;

    let key = unescape(line[..sep].trim())?;
    if key.is_empty() {
        return None;
    }
    let value = unescape(line[sep + 1..].trim())?;
    Some((key, value))
}

/// Decode backslash escapes. `None` on a malformed `\uXXXX`.
fn unescape(raw: &str) -> Option<String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{0c}'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                if hex.len() != 4 {
                    return None;
                }
                let code = u32::from_str_radix(&hex, 16).ok()?;
                out.push(char::from_u32(code)?);
            }
            Some(other) => out.push(other),
            None => {}
        }
    }
    Some(out)
}
