//! # Resolve Command Module / 解析命令模块
//!
//! This module implements the `resolve` command, which computes the units of
//! each configured suite and prints them as text or JSON.
//!
//! 此模块实现 `resolve` 命令，计算每个已配置套件的单元，并以文本或 JSON 形式输出。

use anyhow::{Context, Result, bail};
use colored::*;
use std::path::PathBuf;

use super::setup_and_parse_config;
use crate::cli::OutputFormat;
use crate::core::{
    LazyIndex, MarkerRegistry, SuiteAssembler,
    models::SuiteDescriptor,
};
use crate::infra::t;
use crate::reporting::{console, json};

/// Executes the resolve command with the provided arguments.
///
/// # Arguments
/// * `config` - Path to the suite configuration file
/// * `suite_names` - Suites to resolve; empty means every configured suite
/// * `format` - Output format
/// * `lang_override` - Language given on the command line, if any
pub fn execute(
    config: PathBuf,
    suite_names: &[String],
    format: OutputFormat,
    lang_override: Option<&str>,
) -> Result<()> {
    let (matrix, sources, locale) = setup_and_parse_config(&config, lang_override)?;

    let descriptors = select_suites(&matrix.suites, suite_names, &locale)?;
    if descriptors.is_empty() {
        println!("{}", t!("no_suites", locale = &locale).yellow());
        return Ok(());
    }

    let index = LazyIndex::new(sources, MarkerRegistry::with_defaults());
    let assembler =
        SuiteAssembler::from_lazy(&index).context("Failed to build the symbol index")?;
    let resolved = assembler.resolve_all(&descriptors)?;

    match format {
        OutputFormat::Text => console::print_suites(&resolved, &locale),
        OutputFormat::Json => println!("{}", json::render_suites(&resolved)?),
    }
    Ok(())
}

/// Picks the requested suites in the order they were requested.
fn select_suites(
    suites: &[SuiteDescriptor],
    names: &[String],
    locale: &str,
) -> Result<Vec<SuiteDescriptor>> {
    if names.is_empty() {
        return Ok(suites.to_vec());
    }
    names
        .iter()
        .map(|name| match suites.iter().find(|s| &s.name == name) {
            Some(suite) => Ok(suite.clone()),
            None => bail!("{}", t!("unknown_suite", locale = locale, name = name)),
        })
        .collect()
}
