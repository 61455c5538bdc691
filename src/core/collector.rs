//! # Candidate Collector Module / 候选收集模块
//!
//! Fetches the units carrying the governing marker and resolves them back to
//! concrete units. Identifiers that no longer resolve are logged and dropped,
//! never reported as a suite failure.
//!
//! 获取携带决定性标记的单元并将其解析为具体单元。
//! 无法再解析的标识符会被记录并丢弃，从不作为套件失败报告。

use crate::core::index::SymbolLookup;
use crate::core::models::{MarkerId, Unit};
use std::sync::Arc;
use tracing::error;

/// Collects the candidates for `marker`, in unit-id order.
/// An empty lookup yields an empty vector.
pub fn collect_candidates<L>(marker: &MarkerId, index: &L) -> Vec<Arc<Unit>>
where
    L: SymbolLookup + ?Sized,
{
    index
        .lookup(marker)
        .iter()
        .filter_map(|id| match index.resolve_unit(id) {
            Ok(unit) => Some(unit),
            Err(e) => {
                error!(unit = %id, marker = %marker, error = %e, "dropping unresolvable candidate");
                None
            }
        })
        .collect()
}
