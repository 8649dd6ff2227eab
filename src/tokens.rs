// src/tokens.rs

//! Token file I/O
//!
//! A token file is a UTF-8 text file with one token per line. Reading uses
//! universal newlines: `\r\n`, a lone `\r` and `\n` all end a line, and
//! each line keeps its terminator normalized to `\n`. Written output is
//! therefore LF-only. A last line without a newline is still a line and
//! stays unterminated.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// The lines of a token file, in file order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenFile {
    path: PathBuf,
    lines: Vec<String>,
}

impl TokenFile {
    /// Read every line of `path` into memory
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(|e| Error::from_open(path, e))?;

        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|source| Error::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let lines = split_lines(&content);

        debug!("Read {} lines from {}", lines.len(), path.display());
        Ok(Self {
            path: path.to_path_buf(),
            lines,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

/// Split `text` into lines with universal newlines
///
/// Every terminator (`\r\n`, `\r` or `\n`) comes back as `\n`.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                chars.next_if_eq(&'\n');
                current.push('\n');
                lines.push(std::mem::take(&mut current));
            }
            '\n' => {
                current.push('\n');
                lines.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Write `lines` to `path` back to back, creating or truncating the file
pub fn write_lines(path: impl AsRef<Path>, lines: &[String]) -> Result<()> {
    let path = path.as_ref();
    let write_err = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writer.write_all(line.as_bytes()).map_err(write_err)?;
    }
    writer.flush().map_err(write_err)?;

    debug!("Wrote {} lines to {}", lines.len(), path.display());
    Ok(())
}
