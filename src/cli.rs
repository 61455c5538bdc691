// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use std::{env, path::PathBuf};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::infra::t;

pub mod commands;

/// Output format of the `resolve` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It accepts both `--lang <VALUE>` and `--lang=<VALUE>`.
fn pre_parse_language() -> Option<String> {
    find_language(env::args())
}

fn find_language(args: impl IntoIterator<Item = String>) -> Option<String> {
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--lang" {
            return args.next();
        }
        if let Some(value) = arg.strip_prefix("--lang=") {
            return Some(value.to_string());
        }
    }
    None
}

fn build_cli(locale: &str) -> Command {
    let config_arg = Arg::new("config")
        .short('c')
        .long("config")
        .help(t!("arg_config", locale = locale).to_string())
        .value_name("CONFIG")
        .default_value("Suites.toml")
        .value_parser(value_parser!(PathBuf))
        .action(ArgAction::Set);

    Command::new("categorized-suite")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help(t!("cli_verbose", locale = locale).to_string())
                .global(true)
                .action(ArgAction::Count),
        )
        .subcommand(
            Command::new("resolve")
                .about(t!("cmd_resolve_about", locale = locale).to_string())
                .arg(config_arg.clone())
                .arg(
                    Arg::new("suite")
                        .short('s')
                        .long("suite")
                        .help(t!("arg_suite", locale = locale).to_string())
                        .value_name("SUITE")
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .help(t!("arg_format", locale = locale).to_string())
                        .value_name("FORMAT")
                        .default_value("text")
                        .value_parser(value_parser!(OutputFormat))
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("index")
                .about(t!("cmd_index_about", locale = locale).to_string())
                .arg(config_arg),
        )
}

/// Installs the tracing subscriber on stderr.
/// Priority: RUST_LOG env var > verbose flag > default (warn)
fn init_tracing(verbose: u8) {
    let filter = if env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

pub fn run() -> Result<()> {
    // Pre-parse language and initialize i18n first.
    let lang_override = pre_parse_language();
    match &lang_override {
        Some(lang) => rust_i18n::set_locale(crate::supported_locale(lang)),
        None => crate::init(),
    }
    let language = rust_i18n::locale().to_string();

    let matches = build_cli(&language).get_matches();
    init_tracing(matches.get_count("verbose"));

    match matches.subcommand() {
        Some(("resolve", sub)) => {
            let lang_override = parsed_language(sub).or(lang_override);
            let suites: Vec<String> = sub
                .get_many::<String>("suite")
                .map(|names| names.cloned().collect())
                .unwrap_or_default();
            let format = sub
                .get_one::<OutputFormat>("format")
                .copied()
                .unwrap_or(OutputFormat::Text);
            commands::resolve::execute(config_path(sub), &suites, format, lang_override.as_deref())?;
        }
        Some(("index", sub)) => {
            let lang_override = parsed_language(sub).or(lang_override);
            commands::index::execute(config_path(sub), lang_override.as_deref())?;
        }
        _ => {
            // `subcommand_required` makes clap print help and exit before we get here.
        }
    }
    Ok(())
}

/// The `--lang` value as parsed by clap, which wins over the pre-parsed one.
fn parsed_language(matches: &ArgMatches) -> Option<String> {
    matches.get_one::<String>("lang").cloned()
}

fn config_path(matches: &ArgMatches) -> PathBuf {
    matches
        .get_one::<PathBuf>("config")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("Suites.toml"))
}
