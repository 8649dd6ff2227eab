// src/line_converter.rs

//! Line-by-line token file conversion
//!
//! Reads the whole input, converts each line independently, then writes
//! every converted line to the output in the same order. The output file
//! is only opened once all lines have converted, so a missing input or a
//! failing backend leaves no output behind.

use crate::converter::Converter;
use crate::error::{Error, Result};
use crate::progress::{ProgressTracker, SilentProgress};
use crate::tokens::{self, TokenFile};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Summary of a finished file conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Lines read, which is also lines written
    pub lines: usize,
    /// Lines whose text differs after conversion
    pub changed: usize,
}

/// Applies a `Converter` to every line of a token file
pub struct LineConverter<C> {
    converter: C,
    progress: Box<dyn ProgressTracker>,
}

impl<C: Converter> LineConverter<C> {
    pub fn new(converter: C) -> Self {
        Self {
            converter,
            progress: Box::new(SilentProgress::new()),
        }
    }

    /// Report per-line progress through `progress`
    pub fn with_progress(mut self, progress: Box<dyn ProgressTracker>) -> Self {
        self.progress = progress;
        self
    }

    /// Convert each line, preserving count and order
    ///
    /// Stops at the first failing line; its 1-based number is attached to
    /// the error.
    pub fn convert_lines(&self, lines: &[String]) -> Result<Vec<String>> {
        self.progress.set_length(lines.len() as u64);

        let mut converted = Vec::with_capacity(lines.len());
        for (idx, line) in lines.iter().enumerate() {
            match self.converter.convert(line) {
                Ok(out) => converted.push(out),
                Err(source) => {
                    self.progress
                        .finish_with_error(&format!("line {} failed", idx + 1));
                    return Err(Error::Conversion {
                        line: idx + 1,
                        source,
                    });
                }
            }
            self.progress.increment(1);
        }

        self.progress
            .finish_with_message(&format!("{} lines converted", converted.len()));
        Ok(converted)
    }

    /// Convert the token file at `input` and write the result to `output`
    ///
    /// Log lines are written with the progress display suspended.
    pub fn convert_file(&self, input: &Path, output: &Path) -> Result<ConversionReport> {
        self.progress.suspend(&mut || {
            info!("Converting {} -> {}", input.display(), output.display());
        });
        self.progress.set_message(&input.display().to_string());

        let tokens = TokenFile::read(input)?;
        let converted = self.convert_lines(tokens.lines())?;
        let changed = tokens
            .lines()
            .iter()
            .zip(&converted)
            .filter(|(before, after)| before != after)
            .count();

        tokens::write_lines(output, &converted)?;

        self.progress.suspend(&mut || {
            if changed == 0 && !converted.is_empty() {
                warn!(
                    "No line of {} changed; check the conversion target",
                    input.display()
                );
            }
            info!(
                "Wrote {} lines to {} ({} changed)",
                converted.len(),
                output.display(),
                changed
            );
        });

        Ok(ConversionReport {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            lines: converted.len(),
            changed,
        })
    }
}
