//! # Suite Assembler Module / 套件组装模块
//!
//! Runs the resolution pipeline for a suite descriptor: the marker resolver picks
//! the governing marker, the candidate collector fetches its units, the restriction
//! filter narrows them, and the assembler materializes the deduplicated result.
//!
//! 为套件描述符运行解析管道：标记解析器选择决定性标记，候选收集器获取其单元，
//! 限制过滤器缩小范围，组装器生成去重后的结果。

use crate::core::catalog::CatalogSource;
use crate::core::collector::collect_candidates;
use crate::core::error::Result;
use crate::core::filter::exclusion;
use crate::core::index::{LazyIndex, SymbolIndex, SymbolLookup};
use crate::core::models::{ResolvedSuite, SuiteDescriptor};
use crate::core::registry::MarkerRegistry;
use crate::core::resolver::governing_marker;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Computes suites against a shared, read-only index.
/// 基于共享的只读索引计算套件。
#[derive(Debug)]
pub struct SuiteAssembler<L: SymbolLookup = SymbolIndex> {
    index: Arc<L>,
}

impl<L: SymbolLookup> Clone for SuiteAssembler<L> {
    fn clone(&self) -> Self {
        Self {
            index: Arc::clone(&self.index),
        }
    }
}

impl SuiteAssembler<SymbolIndex> {
    /// Builds the symbol index from `sources` and wraps it.
    ///
    /// Fails when no source can be read at all, since no suite could ever be populated.
    pub fn from_sources(sources: &[CatalogSource], registry: &MarkerRegistry) -> Result<Self> {
        let index = SymbolIndex::build(sources, registry)?;
        Ok(Self::new(Arc::new(index)))
    }

    /// Wraps the index held by `lazy`, building it on first use.
    /// Later assemblers created from the same `LazyIndex` share the cached index.
    ///
    /// 包装 `lazy` 持有的索引，首次使用时构建。
    /// 之后从同一个 `LazyIndex` 创建的组装器共享缓存的索引。
    pub fn from_lazy(lazy: &LazyIndex) -> Result<Self> {
        lazy.get().map(Self::new)
    }
}

impl<L: SymbolLookup> SuiteAssembler<L> {
    pub fn new(index: Arc<L>) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &L {
        &self.index
    }

    /// Resolves the units of one suite.
    ///
    /// The computation is a pure function of the descriptor and the index, so
    /// repeated calls return identical suites. The only failure is a descriptor
    /// declaring more than one category marker.
    ///
    /// 解析单个套件的单元。
    /// 该计算是描述符和索引的纯函数，因此重复调用会返回相同的套件。
    /// 唯一的失败情况是描述符声明了多个类别标记。
    pub fn resolve_suite(&self, descriptor: &SuiteDescriptor) -> Result<ResolvedSuite> {
        let (marker, governed_by) = governing_marker(descriptor, self.index.as_ref())?;

        let mut units = BTreeMap::new();
        for unit in collect_candidates(&marker, self.index.as_ref()) {
            match exclusion(&unit, descriptor) {
                Some(reason) => {
                    debug!(suite = %descriptor.name, unit = %unit.id, %reason, "candidate excluded");
                }
                None => {
                    units.entry(unit.id.clone()).or_insert(unit);
                }
            }
        }

        debug!(
            suite = %descriptor.name,
            marker = %marker,
            units = units.len(),
            "suite resolved"
        );

        Ok(ResolvedSuite {
            name: descriptor.name.clone(),
            marker,
            governed_by,
            units,
        })
    }

    /// Resolves several suites in order, stopping at the first failure.
    pub fn resolve_all(&self, descriptors: &[SuiteDescriptor]) -> Result<Vec<ResolvedSuite>> {
        descriptors.iter().map(|d| self.resolve_suite(d)).collect()
    }
}
