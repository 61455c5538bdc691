//! # Marker Resolver Module / 标记解析模块
//!
//! Determines which marker governs candidate selection for a suite. A descriptor
//! may declare at most one custom category marker; without one, the suite falls
//! back to the default "is a test" marker.
//!
//! 确定哪个标记决定套件的候选选择。描述符最多只能声明一个自定义类别标记；
//! 如果没有，套件将回退到默认的“是测试”标记。

use crate::core::error::{DiscoveryError, Result};
use crate::core::index::SymbolLookup;
use crate::core::models::{Governance, MarkerId, SuiteDescriptor};
use std::collections::BTreeSet;

/// Returns the custom category marker declared on the descriptor, or `None`.
///
/// Fails with [`DiscoveryError::AmbiguousCategory`] when more than one distinct
/// declared marker is a category marker.
pub fn custom_marker<L>(descriptor: &SuiteDescriptor, index: &L) -> Result<Option<MarkerId>>
where
    L: SymbolLookup + ?Sized,
{
    let qualifying: BTreeSet<&MarkerId> = descriptor
        .markers
        .iter()
        .filter(|marker| index.is_category_marker(marker))
        .collect();

    let mut iter = qualifying.iter();
    match (iter.next(), iter.next()) {
        (None, _) => Ok(None),
        (Some(marker), None) => Ok(Some((*marker).clone())),
        (Some(_), Some(_)) => Err(DiscoveryError::AmbiguousCategory {
            suite: descriptor.name.clone(),
            markers: qualifying.into_iter().cloned().collect(),
        }),
    }
}

/// Resolves the governing marker, falling back to the default marker.
pub fn governing_marker<L>(descriptor: &SuiteDescriptor, index: &L) -> Result<(MarkerId, Governance)>
where
    L: SymbolLookup + ?Sized,
{
    Ok(match custom_marker(descriptor, index)? {
        Some(marker) => (marker, Governance::Custom),
        None => (MarkerId::default_marker(), Governance::Default),
    })
}
