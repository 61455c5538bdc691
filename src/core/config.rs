//! # Configuration Module / 配置模块
//!
//! Parses `Suites.toml`, the file that declares the catalog sources and every
//! suite descriptor.
//!
//! 解析 `Suites.toml`，该文件声明目录源以及所有套件描述符。

use crate::core::catalog::CatalogSource;
use crate::core::models::SuiteDescriptor;
use crate::infra::fs::{config_base_dir, resolve_config_path};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Represents the entire suite configuration, loaded from a TOML file.
/// It contains global settings, the catalog sources and all suite descriptors.
/// 代表从 TOML 文件加载的整个套件配置。
/// 它包含全局设置、目录源以及所有套件描述符。
#[derive(Debug, Deserialize, Serialize)]
pub struct SuiteMatrix {
    /// The language for output messages (e.g., "en", "zh-CN").
    /// Defaults to "en" if not specified.
    ///
    /// 输出消息的语言（例如 "en", "zh-CN"）。
    /// 如果未指定，则默认为 "en"。
    #[serde(default = "default_language")]
    pub language: String,

    /// Catalog files or directories, relative to the configuration file.
    /// 目录文件或文件夹，相对于配置文件。
    #[serde(default)]
    pub catalogs: Vec<String>,

    /// A vector containing all the suite descriptors.
    /// 一个包含所有套件描述符的向量。
    #[serde(default)]
    pub suites: Vec<SuiteDescriptor>,
}

fn default_language() -> String {
    "en".to_string()
}

impl SuiteMatrix {
    /// Parses configuration content and checks that suite names are unique and non-empty.
    pub fn parse(content: &str) -> Result<Self> {
        let matrix: SuiteMatrix = toml::from_str(content).context("Failed to parse suite configuration")?;
        matrix.validate()?;
        Ok(matrix)
    }

    /// Reads and parses the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config file: {}", path.display()))
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for suite in &self.suites {
            if suite.name.trim().is_empty() {
                bail!("Suite names must not be empty.");
            }
            if !seen.insert(suite.name.as_str()) {
                bail!("Duplicate suite name: {}", suite.name);
            }
        }
        Ok(())
    }

    /// Resolves the configured catalog paths against the configuration file's directory.
    pub fn catalog_sources(&self, config_path: &Path) -> Result<Vec<CatalogSource>> {
        let base_dir = config_base_dir(config_path);
        self.catalogs
            .iter()
            .map(|raw| resolve_config_path(raw, &base_dir).map(CatalogSource::from_path))
            .collect()
    }

    /// Looks up a suite by name.
    pub fn suite(&self, name: &str) -> Option<&SuiteDescriptor> {
        self.suites.iter().find(|suite| suite.name == name)
    }
}
