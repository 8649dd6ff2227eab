// src/commands.rs
//! Command implementations for hanconv

use crate::cli::{Cli, ConvertArgs};
use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::Shell;
use hanconv::{
    CliProgress, ConfigOverrides, ConvertConfig, Converter, LineConverter, LogProgress,
    ProgressTracker, SilentProgress, Target, ZhConverter,
};
use std::io::{IsTerminal, Read};
use tracing::{debug, info};

/// Convert a token file (the default command)
pub fn cmd_convert(args: ConvertArgs) -> Result<()> {
    let overrides = ConfigOverrides {
        input: args.input,
        output: args.output,
        target: args.target,
    };
    let config = ConvertConfig::resolve(args.config.as_deref(), overrides)?;
    debug!("Resolved configuration: {:?}", config);

    let progress: Box<dyn ProgressTracker> = if args.quiet {
        Box::new(SilentProgress::new())
    } else if std::io::stderr().is_terminal() {
        Box::new(CliProgress::new("Converting"))
    } else {
        Box::new(LogProgress::new("convert"))
    };

    let converter = LineConverter::new(ZhConverter::new(config.target)).with_progress(progress);
    let report = converter
        .convert_file(&config.input, &config.output)
        .with_context(|| format!("Failed to convert {}", config.input.display()))?;

    info!(
        "Converted {} lines to {} ({} changed): {} -> {}",
        report.lines,
        config.target,
        report.changed,
        report.input.display(),
        report.output.display()
    );
    Ok(())
}

/// Convert text from the command line or stdin and print it
pub fn cmd_text(text: Vec<String>, target: Target) -> Result<()> {
    let converter = ZhConverter::new(target);

    if text.is_empty() {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read stdin")?;
        print!("{}", converter.convert(&input)?);
    } else {
        for item in &text {
            println!("{}", converter.convert(item)?);
        }
    }
    Ok(())
}

/// List conversion targets
pub fn cmd_targets() -> Result<()> {
    for target in Target::all() {
        let marker = if *target == Target::default() { " (default)" } else { "" };
        println!("  {:<8} {}{}", target.as_str(), target.description(), marker);
    }
    Ok(())
}

/// Print a shell completion script to stdout
pub fn cmd_completions(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
    Ok(())
}
