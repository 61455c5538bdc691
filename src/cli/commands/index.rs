//! # Index Command Module / 索引命令模块
//!
//! Builds the symbol index from the configured catalogs and prints its markers.
//!
//! 根据已配置的目录构建符号索引并打印其中的标记。

use anyhow::{Context, Result};
use std::path::PathBuf;

use super::setup_and_parse_config;
use crate::core::{MarkerRegistry, SymbolIndex};
use crate::reporting::console;

pub fn execute(config: PathBuf, lang_override: Option<&str>) -> Result<()> {
    let (_, sources, locale) = setup_and_parse_config(&config, lang_override)?;

    let index = SymbolIndex::build(&sources, &MarkerRegistry::with_defaults())
        .context("Failed to build the symbol index")?;
    console::print_index(&index, &locale);
    Ok(())
}
