// Shared test helpers for integration tests
#![allow(dead_code)]

use categorized_suite::core::catalog::{Catalog, MarkerRecord, TypeRecord, UnitRecord};
use categorized_suite::core::error::{DiscoveryError, Result};
use categorized_suite::core::index::SymbolLookup;
use categorized_suite::models::{CATEGORY_KIND, MarkerId, RunnerKind, Unit, UnitId};
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// Path of a file under `tests/fixtures`.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// A test-bearing unit record with the given markers and supertypes.
pub fn unit(id: &str, markers: &[&str], extends: &[&str]) -> UnitRecord {
    let mut record = UnitRecord::new(id);
    record.markers = markers.iter().map(|m| MarkerId::new(*m)).collect();
    record.extends = extends.iter().map(|t| t.to_string()).collect();
    record.tests = vec!["it_works".to_string()];
    record
}

/// A unit record that declares a suite runner.
pub fn suite_unit(id: &str, markers: &[&str]) -> UnitRecord {
    let mut record = unit(id, markers, &[]);
    record.tests.clear();
    record.runner = Some(RunnerKind {
        name: "categorized".to_string(),
        extends: vec!["suite".to_string()],
    });
    record
}

pub fn category_marker(name: &str) -> MarkerRecord {
    MarkerRecord {
        name: MarkerId::new(name),
        kinds: vec![MarkerId::new(CATEGORY_KIND)],
    }
}

pub fn plain_type(name: &str) -> TypeRecord {
    TypeRecord {
        name: name.to_string(),
        extends: vec![],
    }
}

pub fn catalog(markers: Vec<MarkerRecord>, units: Vec<UnitRecord>) -> Catalog {
    Catalog {
        markers,
        types: vec![],
        units,
    }
}

/// Writes a catalog file into `dir` and returns its path.
pub fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write test file");
    path
}

/// A lookup whose marker table references units it can no longer resolve.
pub struct StaleIndex {
    pub known: Vec<Arc<Unit>>,
    pub stale: Vec<UnitId>,
    pub marker: MarkerId,
}

impl SymbolLookup for StaleIndex {
    fn lookup(&self, marker: &MarkerId) -> BTreeSet<UnitId> {
        if marker != &self.marker {
            return BTreeSet::new();
        }
        self.known
            .iter()
            .map(|u| u.id.clone())
            .chain(self.stale.iter().cloned())
            .collect()
    }

    fn declaring(&self, _kind: &MarkerId) -> BTreeSet<MarkerId> {
        BTreeSet::new()
    }

    fn resolve_unit(&self, id: &UnitId) -> Result<Arc<Unit>> {
        self.known
            .iter()
            .find(|u| &u.id == id)
            .cloned()
            .ok_or_else(|| DiscoveryError::UnitUnavailable(id.clone()))
    }
}

/// A materialized unit, bypassing the index.
pub fn bare_unit(id: &str, markers: &[&str]) -> Arc<Unit> {
    Arc::new(Unit {
        id: UnitId::new(id),
        markers: markers.iter().map(|m| MarkerId::new(*m)).collect(),
        lineage: BTreeSet::new(),
        runner: None,
    })
}
