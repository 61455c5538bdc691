//! # Commands Module / 命令模块
//!
//! Implementations of the CLI subcommands.
//!
//! CLI 子命令的实现。

pub mod index;
pub mod resolve;

use crate::core::catalog::CatalogSource;
use crate::core::config::SuiteMatrix;
use crate::infra::t;
use anyhow::Result;
use colored::*;
use std::path::Path;

/// Loads the configuration, applies its language unless `--lang` was given, and
/// resolves the catalog sources it declares.
///
/// 加载配置，在未指定 `--lang` 时应用其语言设置，并解析其声明的目录源。
pub(crate) fn setup_and_parse_config(
    config_path: &Path,
    lang_override: Option<&str>,
) -> Result<(SuiteMatrix, Vec<CatalogSource>, String)> {
    let matrix = SuiteMatrix::load(config_path)?;
    let locale = crate::supported_locale(lang_override.unwrap_or(&matrix.language)).to_string();
    rust_i18n::set_locale(&locale);

    eprintln!(
        "{}",
        t!("loading_config", locale = &locale, path = config_path.display()).dimmed()
    );

    let sources = matrix.catalog_sources(config_path)?;
    eprintln!(
        "{}",
        t!("catalog_sources", locale = &locale, count = sources.len()).dimmed()
    );
    Ok((matrix, sources, locale))
}
