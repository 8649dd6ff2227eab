// src/cli.rs
//! CLI definitions for hanconv
//!
//! This module contains all command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.
//!
//! Running `hanconv` without a subcommand converts a token file using the
//! top-level flags.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use hanconv::Target;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hanconv")]
#[command(author = "hanconv Contributors")]
#[command(version)]
#[command(about = "Convert token files between Chinese script variants", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub convert: ConvertArgs,
}

/// Flags for the default file conversion
#[derive(Args, Debug, Default)]
pub struct ConvertArgs {
    /// Token file to read [default: ./NNLM-ZH/assets/tokens.txt]
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// File to write converted tokens to [default: ./tokens.txt]
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Script variant to convert into, case-insensitive: zh-hant (also s2t,
    /// traditional), zh-hans (also t2s, simplified), zh-tw, zh-hk, zh-cn
    #[arg(short, long, value_name = "VARIANT")]
    pub target: Option<Target>,

    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Do not show progress
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert text given as arguments (or stdin) and print it
    Text {
        /// Text to convert; reads stdin when omitted
        text: Vec<String>,

        /// Script variant to convert into
        #[arg(short, long, default_value = "zh-hant")]
        target: Target,
    },

    /// List supported conversion targets
    Targets,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}
