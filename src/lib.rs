// src/lib.rs

//! hanconv
//!
//! Converts token files between Chinese character script variants, one
//! line at a time. The default run reads `./NNLM-ZH/assets/tokens.txt`,
//! converts simplified characters to traditional, and writes
//! `./tokens.txt`.
//!
//! # Architecture
//!
//! - `converter`: the conversion capability (`Converter` trait, zhconv backend)
//! - `tokens`: token file reading and writing, line terminators preserved
//! - `line_converter`: the per-line map from input file to output file
//! - `config`: defaults plus an optional TOML file
//! - `progress`: progress reporting (bar, log, callback, silent)

pub mod config;
pub mod converter;
mod error;
pub mod line_converter;
pub mod progress;
pub mod tokens;

pub use config::{ConfigOverrides, ConvertConfig, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
pub use converter::{Converter, Target, ZhConverter};
pub use error::{ConversionError, Error, Result};
pub use line_converter::{ConversionReport, LineConverter};
pub use progress::{
    CallbackProgress, CliProgress, LogProgress, ProgressEvent, ProgressTracker, SilentProgress,
};
pub use tokens::{TokenFile, write_lines};
