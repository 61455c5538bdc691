//! # Config Module Unit Tests / Config 模块单元测试
//!
//! This module contains unit tests for the `config.rs` and `catalog.rs` modules,
//! testing `SuiteMatrix`, `SuiteDescriptor` and catalog deserialization.
//!
//! 此模块包含 `config.rs` 和 `catalog.rs` 模块的单元测试，
//! 测试 `SuiteMatrix`、`SuiteDescriptor` 以及目录的反序列化。

mod common;

use categorized_suite::core::catalog::{Catalog, CatalogSource};
use categorized_suite::core::config::SuiteMatrix;
use categorized_suite::models::{MarkerId, SuiteDescriptor};
use common::*;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

#[cfg(test)]
mod suite_matrix_tests {
    use super::*;

    #[test]
    fn test_suite_matrix_default_language() {
        let toml_str = r#"
            catalogs = ["catalogs"]

            [[suites]]
            name = "all"
        "#;

        let matrix = SuiteMatrix::parse(toml_str).unwrap();

        // Should default to "en" when language is not specified
        assert_eq!(matrix.language, "en");
        assert_eq!(matrix.suites.len(), 1);
        assert_eq!(matrix.suites[0], SuiteDescriptor::new("all"));
    }

    #[test]
    fn test_suite_matrix_full_descriptor() {
        let toml_str = r#"
            language = "zh-CN"
            catalogs = ["a.toml"]

            [[suites]]
            name = "Suite1WithoutNumbered"
            markers = ["C1"]
            tests_of_type = "BaseTest"
            skip = ["Numbered", "Slow"]
        "#;

        let matrix = SuiteMatrix::parse(toml_str).unwrap();
        let suite = matrix.suite("Suite1WithoutNumbered").unwrap();

        assert_eq!(matrix.language, "zh-CN");
        assert_eq!(suite.markers, vec![MarkerId::new("C1")]);
        assert_eq!(suite.tests_of_type.as_deref(), Some("BaseTest"));
        assert!(suite.skip.contains(&MarkerId::new("Numbered")));
        assert!(suite.skip.contains(&MarkerId::new("Slow")));
    }

    #[test]
    fn test_duplicate_suite_names_are_rejected() {
        let toml_str = r#"
            [[suites]]
            name = "dup"

            [[suites]]
            name = "dup"
        "#;

        let err = SuiteMatrix::parse(toml_str).unwrap_err();
        assert!(err.to_string().contains("Duplicate suite name: dup"));
    }

    #[test]
    fn test_empty_suite_name_is_rejected() {
        let err = SuiteMatrix::parse("[[suites]]\nname = \"  \"\n").unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let err = SuiteMatrix::parse("[[suites]\nname = \"x\"").unwrap_err();
        assert!(err.to_string().contains("Failed to parse suite configuration"));
    }

    #[test]
    fn test_missing_config_file_reports_path() {
        let err = SuiteMatrix::load(Path::new("definitely/not/here/Suites.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("Suites.toml"));
    }

    #[test]
    fn test_catalog_paths_are_relative_to_config() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("catalogs")).unwrap();
        let config = write_file(
            &dir,
            "Suites.toml",
            "catalogs = [\"catalogs\", \"extra.toml\"]\n",
        );

        let matrix = SuiteMatrix::load(&config).unwrap();
        let sources = matrix.catalog_sources(&config).unwrap();

        assert_eq!(
            sources,
            vec![
                CatalogSource::Directory(dir.path().join("catalogs")),
                CatalogSource::File(dir.path().join("extra.toml")),
            ]
        );
    }

    #[test]
    fn test_absolute_catalog_paths_are_kept() {
        let dir = tempdir().unwrap();
        let absolute = dir.path().join("abs.toml");
        let matrix = SuiteMatrix {
            language: "en".to_string(),
            catalogs: vec![absolute.display().to_string()],
            suites: vec![],
        };

        let sources = matrix.catalog_sources(&PathBuf::from("elsewhere/Suites.toml")).unwrap();
        assert_eq!(sources, vec![CatalogSource::File(absolute)]);
    }

    #[test]
    fn test_fixture_configuration_loads() {
        let matrix = SuiteMatrix::load(&fixture("Suites.toml")).unwrap();
        let names: Vec<_> = matrix.suites.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "FullSuite",
                "FullSuiteWithBaseTest",
                "FullSuiteWithBaseTestWithoutSpecial",
                "Suite1WithoutNumbered"
            ]
        );
    }
}

#[cfg(test)]
mod catalog_tests {
    use super::*;

    #[test]
    fn test_catalog_deserialization_full() {
        let content = r#"
            [[markers]]
            name = "C1"
            kinds = ["category"]

            [[types]]
            name = "BaseTest"
            extends = ["Object"]

            [[units]]
            id = "demo.TestA"
            markers = ["C1"]
            extends = ["BaseTest"]
            tests = ["adds"]
            runner = { name = "categorized", extends = ["suite"] }
        "#;

        let catalog = Catalog::parse(content, Path::new("inline.toml")).unwrap();

        assert_eq!(catalog.markers[0].kinds, vec![MarkerId::new("category")]);
        assert_eq!(catalog.types[0].extends, vec!["Object".to_string()]);
        let unit = &catalog.units[0];
        assert!(unit.declares(&MarkerId::new("C1")));
        assert!(unit.is_test_bearing());
        assert!(unit.runner.as_ref().unwrap().is_suite_runner());
    }

    #[test]
    fn test_catalog_sections_are_optional() {
        let catalog = Catalog::parse("", Path::new("empty.toml")).unwrap();
        assert_eq!(catalog, Catalog::default());
    }

    #[test]
    fn test_catalog_parse_error_names_the_file() {
        let err = Catalog::parse("[[units]]\nmarkers = []\n", Path::new("bad.toml")).unwrap_err();
        assert!(err.to_string().contains("bad.toml"));
    }
}
