//! Error types for suite discovery.

use crate::core::models::{MarkerId, UnitId};
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using the discovery error type.
pub type Result<T> = std::result::Result<T, DiscoveryError>;

/// Errors surfaced by index construction and suite resolution.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// No catalog source could be read, so no suite could ever be populated.
    #[error("no catalog source could be read ({attempted} attempted, {failed} failed)")]
    NoReadableSources { attempted: usize, failed: usize },

    /// A suite declares more than one custom category marker.
    #[error("suite `{suite}` declares more than one category marker: {}", join(.markers))]
    AmbiguousCategory { suite: String, markers: Vec<MarkerId> },

    /// An identifier in the index no longer resolves to a unit.
    #[error("unit `{0}` is no longer available")]
    UnitUnavailable(UnitId),
}

/// Failure to load a single catalog file. Never fatal on its own.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

fn join(markers: &[MarkerId]) -> String {
    markers
        .iter()
        .map(MarkerId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
