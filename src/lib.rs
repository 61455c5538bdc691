//! # Categorized Suite Library / Categorized Suite 库
//!
//! This library provides the core functionality for the categorized suite resolver,
//! a marker-driven engine that computes which test units belong to a suite.
//!
//! 此库为分类套件解析器提供核心功能，
//! 这是一个由标记驱动的引擎，用于计算哪些测试单元属于某个套件。
//!
//! ## Modules / 模块
//!
//! - `core` - Data models, the symbol index and the suite resolution pipeline
//! - `infra` - Infrastructure services like file system access and i18n
//! - `reporting` - Console and JSON output of resolved suites
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 数据模型、符号索引和套件解析管道
//! - `infra` - 基础设施服务，如文件系统访问和国际化
//! - `reporting` - 已解析套件的控制台和 JSON 输出
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use crate::core::models;
pub use crate::core::{MarkerRegistry, SuiteAssembler, SymbolIndex, SymbolLookup};

/// Initializes the application's internationalization (i18n) based on the system locale.
///
/// This function detects the user's system locale and sets the appropriate
/// language for the application's user interface. It attempts to match the full
/// locale (e.g., "zh-CN"), then just the language code (e.g., "en"), and
/// finally falls back to the default language ("en").
pub fn init() {
    let locale = sys_locale::get_locale().unwrap_or_else(|| "en".to_string());
    rust_i18n::set_locale(supported_locale(&locale));
}

/// Maps a requested locale onto one the application ships translations for.
pub fn supported_locale(locale: &str) -> &str {
    let available_locales = rust_i18n::available_locales!();

    // Try to match the full locale first (e.g., "zh-CN")
    // Then try to match the language part only (e.g., "en" from "en-US")
    // Finally, fall back to "en"
    if available_locales.contains(&locale) {
        locale
    } else {
        locale
            .split('-')
            .next()
            .filter(|lang_code| available_locales.contains(lang_code))
            .unwrap_or("en")
    }
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
