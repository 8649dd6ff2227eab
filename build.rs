// build.rs

use clap::{Arg, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Common argument: conversion target
fn target_arg() -> Arg {
    Arg::new("target")
        .short('t')
        .long("target")
        .value_name("VARIANT")
        .help(
            "Script variant to convert into, case-insensitive: \
             zh-hant (also s2t, traditional), zh-hans (also t2s, simplified), \
             zh-tw, zh-hk, zh-cn",
        )
}

fn build_cli() -> Command {
    Command::new("hanconv")
        .version(env!("CARGO_PKG_VERSION"))
        .author("hanconv Contributors")
        .about("Convert token files between Chinese script variants")
        .subcommand_required(false)
        .args_conflicts_with_subcommands(true)
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("PATH")
                .default_value("./NNLM-ZH/assets/tokens.txt")
                .help("Token file to read"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("PATH")
                .default_value("./tokens.txt")
                .help("File to write converted tokens to"),
        )
        .arg(target_arg().default_value("zh-hant"))
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(clap::ArgAction::SetTrue)
                .help("Do not show progress"),
        )
        .subcommand(
            Command::new("text")
                .about("Convert text given as arguments (or stdin) and print it")
                .arg(
                    Arg::new("text")
                        .num_args(0..)
                        .help("Text to convert; reads stdin when omitted"),
                )
                .arg(target_arg().default_value("zh-hant")),
        )
        .subcommand(Command::new("targets").about("List supported conversion targets"))
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .required(true)
                        .value_parser(["bash", "elvish", "fish", "powershell", "zsh"])
                        .help("Shell type"),
                ),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("hanconv.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
    }
}
