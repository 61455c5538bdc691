//! # Console Reporting Module / 控制台报告模块
//!
//! This module handles the display of resolved suites and index summaries in the
//! console. It provides colorful, formatted tables with internationalization support.
//!
//! 此模块处理已解析套件和索引摘要在控制台中的显示。
//! 它提供带有国际化支持的彩色格式化表格。

use crate::core::index::{SymbolIndex, SymbolLookup};
use crate::core::models::{Governance, ResolvedSuite};
use crate::infra::t;
use colored::*;
use std::fmt::Write;

/// Renders a formatted summary of resolved suites.
/// Each suite is listed with its governing marker and unit count, followed by
/// its units in ascending id order.
///
/// 渲染已解析套件的格式化摘要。
/// 每个套件会列出其决定性标记和单元数量，然后按 id 升序列出其单元。
///
/// # Arguments / 参数
/// * `suites` - The resolved suites to render
///              要渲染的已解析套件
/// * `locale` - The language locale to use for messages
///              用于消息的语言区域设置
///
/// # Output Format / 输出格式
/// ```text
/// --- Resolved Suites ---
///   - FullSuiteWithBaseTest                    | test (default)       | 3 units
///       demo.TestB1
///       demo.TestB2
///       demo.TestB3
/// ```
pub fn render_suites(suites: &[ResolvedSuite], locale: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", t!("report.suites_banner", locale = locale).bold());

    for suite in suites {
        let governance = match suite.governed_by {
            Governance::Custom => t!("report.governed_custom", locale = locale),
            Governance::Default => t!("report.governed_default", locale = locale),
        };
        let marker = pad(&format!("{} ({})", suite.marker, governance), 20);
        let marker = match suite.governed_by {
            Governance::Custom => marker.cyan(),
            Governance::Default => marker.dimmed(),
        };
        let count = t!("report.unit_count", locale = locale, count = suite.len());
        let count = if suite.is_empty() { count.yellow() } else { count.green() };

        let _ = writeln!(out, "  - {} | {} | {}", pad(&suite.name, 40).bold(), marker, count);

        if suite.is_empty() {
            let _ = writeln!(out, "      {}", t!("report.empty_suite", locale = locale).dimmed());
        }
        for id in suite.unit_ids() {
            let _ = writeln!(out, "      {id}");
        }
    }
    out
}

/// Prints the resolved suites to standard output.
pub fn print_suites(suites: &[ResolvedSuite], locale: &str) {
    print!("{}", render_suites(suites, locale));
}

/// Renders every indexed marker with the number of units carrying it.
/// 渲染每个已索引的标记以及携带它的单元数量。
pub fn render_index(index: &SymbolIndex, locale: &str) -> String {
    let mut out = String::new();
    let stats = index.stats();
    let _ = writeln!(out, "{}", t!("report.index_banner", locale = locale).bold());
    let _ = writeln!(
        out,
        "{}",
        t!(
            "report.index_totals",
            locale = locale,
            units = index.unit_count(),
            sources = stats.sources_read,
            skipped = stats.sources_failed
        )
    );

    for marker in index.markers() {
        let count = index.lookup(marker).len();
        let flag = if index.is_category_marker(marker) {
            format!("  [{}]", t!("report.category_flag", locale = locale)).cyan()
        } else {
            "".normal()
        };
        let _ = writeln!(out, "  - {} {:>6}{}", pad(marker.as_str(), 30), count, flag);
    }
    out
}

pub fn print_index(index: &SymbolIndex, locale: &str) {
    print!("{}", render_index(index, locale));
}

/// Left-aligns `text` in a column of `width` terminal cells.
/// Padding is applied before coloring so escape codes never count as width.
fn pad(text: &str, width: usize) -> String {
    let used: usize = text.chars().map(cell_width).sum();
    format!("{text}{}", " ".repeat(width.saturating_sub(used)))
}

/// Terminal cells taken by `c`: two for East Asian wide and fullwidth characters.
fn cell_width(c: char) -> usize {
    match c as u32 {
        0x1100..=0x115F
        | 0x2E80..=0x303E
        | 0x3041..=0x33FF
        | 0x3400..=0x4DBF
        | 0x4E00..=0x9FFF
        | 0xA000..=0xA4CF
        | 0xAC00..=0xD7A3
        | 0xF900..=0xFAFF
        | 0xFE30..=0xFE4F
        | 0xFF00..=0xFF60
        | 0xFFE0..=0xFFE6 => 2,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_characters_take_two_cells() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("类别", 6), "类别  ");
        assert_eq!(pad("（无）", 6), "（无）");
        assert_eq!(pad("overflowing", 4), "overflowing");
    }
}
