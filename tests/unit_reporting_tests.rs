//! # Reporting Module Unit Tests / Reporting 模块单元测试
//!
//! Tests the console and JSON renderings of resolved suites.
//!
//! 测试已解析套件的控制台和 JSON 渲染。

mod common;

use categorized_suite::reporting::{console, json};
use categorized_suite::models::{Governance, MarkerId, ResolvedSuite};
use categorized_suite::{MarkerRegistry, SymbolIndex};
use common::*;
use std::collections::BTreeMap;

fn suite(name: &str, units: &[&str]) -> ResolvedSuite {
    ResolvedSuite {
        name: name.to_string(),
        marker: MarkerId::new("C1"),
        governed_by: Governance::Custom,
        units: units
            .iter()
            .map(|id| {
                let unit = bare_unit(id, &["C1"]);
                (unit.id.clone(), unit)
            })
            .collect::<BTreeMap<_, _>>(),
    }
}

#[cfg(test)]
mod json_tests {
    use super::*;

    #[test]
    fn test_json_report_shape() {
        let rendered = json::render_suites(&[suite("Suite1", &["b", "a"])]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value[0]["suite"], "Suite1");
        assert_eq!(value[0]["marker"], "C1");
        assert_eq!(value[0]["governed_by"], "custom");
        assert_eq!(value[0]["units"], serde_json::json!(["a", "b"]));
    }

    #[test]
    fn test_json_report_of_no_suites_is_empty_array() {
        assert_eq!(json::render_suites(&[]).unwrap(), "[]");
    }
}

#[cfg(test)]
mod console_tests {
    use super::*;

    #[test]
    fn test_console_lists_suites_and_units() {
        let rendered = console::render_suites(&[suite("Suite1", &["demo.TestB"]), suite("Empty", &[])], "en");

        assert!(rendered.contains("Resolved Suites"));
        assert!(rendered.contains("Suite1"));
        assert!(rendered.contains("demo.TestB"));
        assert!(rendered.contains("(no units)"));
    }

    #[test]
    fn test_console_index_flags_category_markers() {
        let index = SymbolIndex::from_catalogs(
            vec![catalog(vec![category_marker("C1")], vec![unit("A", &["C1"], &[])])],
            &MarkerRegistry::with_defaults(),
        );

        let rendered = console::render_index(&index, "en");

        assert!(rendered.contains("Symbol Index"));
        assert!(rendered.contains("C1"));
        assert!(rendered.contains("category marker"));
        assert!(rendered.contains("test"));
    }
}
