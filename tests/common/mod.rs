// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use hanconv::ConversionError;
use std::collections::HashMap;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a scratch directory holding `tokens.txt` with `contents`.
///
/// Returns (TempDir, input_path, output_path) - keep the TempDir alive to
/// prevent cleanup. The output path does not exist yet.
pub fn setup_token_file(contents: &str) -> (TempDir, PathBuf, PathBuf) {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = temp_dir.path().join("tokens.txt");
    let output = temp_dir.path().join("out").join("tokens.txt");
    std::fs::write(&input, contents).unwrap();
    std::fs::create_dir_all(output.parent().unwrap()).unwrap();
    (temp_dir, input, output)
}

/// A fake conversion backend that maps whole lines through a fixed table
/// and leaves unknown lines untouched.
pub fn table_converter(
    pairs: &[(&str, &str)],
) -> impl Fn(&str) -> Result<String, ConversionError> + use<> {
    let table: HashMap<String, String> = pairs
        .iter()
        .map(|(from, to)| (from.to_string(), to.to_string()))
        .collect();
    move |line: &str| -> Result<String, ConversionError> {
        Ok(table.get(line).cloned().unwrap_or_else(|| line.to_string()))
    }
}

/// Count lines of LF-terminated text: terminators included, last
/// unterminated line counted.
pub fn count_lines(text: &str) -> usize {
    text.split_inclusive('\n').count()
}
