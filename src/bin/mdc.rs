//! Command-line interface for mdc
//! This binary parses a lecture directory and prints what the parser made of it.
//!
//! Usage:
//!   mdc inspect `<dir>` [--format `<format>`] [--config `<file>`] [-v]  - Print the document tree
//!   mdc toc `<dir>`                                                 - Print the table of contents

use clap::{Arg, ArgAction, ArgMatches, Command};
use mdc::mdc::config::{properties_path, Loader, MdcConfig};
use mdc::mdc::error::{MdcError, MdcResult};
use mdc::mdc::formats::FormatRegistry;
use mdc::mdc::parsing::{ParsedPresentation, Parser};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Slide sources are `NN_name.md`
static SOURCE_FILE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d\d_.*\.md$").unwrap());

fn main() {
    let matches = Command::new("mdc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting mdc lecture sources")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log parser progress")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("inspect")
                .about("Parse a lecture directory and print the document tree")
                .arg(directory_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (treeviz, json, yaml); defaults to the configured one"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("TOML file layered over the built-in defaults"),
                ),
        )
        .subcommand(
            Command::new("toc")
                .about("Print the table of contents of a lecture directory")
                .arg(directory_arg()),
        )
        .get_matches();

    init_logging(matches.get_flag("verbose"));

    let result = match matches.subcommand() {
        Some(("inspect", inspect_matches)) => handle_inspect_command(inspect_matches),
        Some(("toc", toc_matches)) => handle_toc_command(toc_matches),
        _ => unreachable!(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn directory_arg() -> Arg {
    Arg::new("dir")
        .help("Directory containing the NN_*.md sources")
        .required(true)
        .index(1)
}

/// `RUST_LOG` wins; otherwise warnings only, or debug with `-v`.
fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::new();
    if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    } else {
        builder.filter_level(log::LevelFilter::Warn);
    }
    builder.init();
}

/// Handle the inspect command
fn handle_inspect_command(matches: &ArgMatches) -> MdcResult<()> {
    let dir = directory(matches);
    let config = load_config(&dir, matches.get_one::<String>("config"))?;
    let parsed = parse_directory(&dir, &config)?;

    let format = matches
        .get_one::<String>("format")
        .cloned()
        .unwrap_or_else(|| config.inspect.format.clone());
    let registry = FormatRegistry::with_localization(config.localization());
    let output = registry.serialize(&parsed.presentation, &format)?;
    println!("{}", output);
    Ok(())
}

/// Handle the toc command
fn handle_toc_command(matches: &ArgMatches) -> MdcResult<()> {
    let dir = directory(matches);
    let config = load_config(&dir, None)?;
    let parsed = parse_directory(&dir, &config)?;

    println!("{}", config.localization().get("toc"));
    for entry in &parsed.toc.entries {
        println!("{}  (#{})", entry.name, entry.anchor);
        for sub in &entry.sub_entries {
            println!("  {}  (#{})", sub.name, sub.anchor);
        }
    }
    Ok(())
}

fn directory(matches: &ArgMatches) -> PathBuf {
    matches
        .get_one::<String>("dir")
        .map(PathBuf::from)
        .unwrap_or_default()
}

fn load_config(dir: &Path, config_file: Option<&String>) -> MdcResult<MdcConfig> {
    let mut loader = Loader::new();
    if let Some(path) = config_file {
        loader = loader.with_file(path);
    }
    if let Some(properties) = properties_path(dir) {
        log::debug!("reading {}", properties.display());
        loader = loader.with_properties_file(properties)?;
    }
    Ok(loader.build()?)
}

/// Parse all slide sources of `dir` in lexicographic order
fn parse_directory(dir: &Path, config: &MdcConfig) -> MdcResult<ParsedPresentation> {
    let files = source_files(dir)?;
    if files.is_empty() {
        log::warn!("no NN_*.md sources in {}", dir.display());
    }

    let mut parser = Parser::with_options(config.metadata(), config.parser_options(dir));
    parser.parse_files(&files)?;
    let parsed = parser.finish();

    for diagnostic in &parsed.diagnostics {
        eprintln!("{}", diagnostic);
    }
    Ok(parsed)
}

fn source_files(dir: &Path) -> MdcResult<Vec<PathBuf>> {
    let io_error = |source: std::io::Error| MdcError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        let matches = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| SOURCE_FILE.is_match(name));
        if matches && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
