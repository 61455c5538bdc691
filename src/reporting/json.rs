//! # JSON Reporting Module / JSON 报告模块
//!
//! Serializes resolved suites for consumption by an external suite runner.
//!
//! 序列化已解析的套件，供外部套件运行器使用。

use crate::core::models::{Governance, MarkerId, ResolvedSuite, UnitId};
use anyhow::{Context, Result};
use serde::Serialize;

/// The JSON shape of one resolved suite.
#[derive(Debug, Serialize)]
pub struct SuiteReport<'a> {
    pub suite: &'a str,
    pub marker: &'a MarkerId,
    pub governed_by: Governance,
    pub units: Vec<&'a UnitId>,
}

impl<'a> From<&'a ResolvedSuite> for SuiteReport<'a> {
    fn from(suite: &'a ResolvedSuite) -> Self {
        Self {
            suite: &suite.name,
            marker: &suite.marker,
            governed_by: suite.governed_by,
            units: suite.unit_ids().collect(),
        }
    }
}

/// Renders the suites as a pretty-printed JSON array.
pub fn render_suites(suites: &[ResolvedSuite]) -> Result<String> {
    let reports: Vec<SuiteReport<'_>> = suites.iter().map(SuiteReport::from).collect();
    serde_json::to_string_pretty(&reports).context("Failed to serialize suite report")
}
