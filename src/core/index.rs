//! # Symbol Index Module / 符号索引模块
//!
//! The symbol index maps each marker to the units carrying it and each marker
//! kind to the markers declaring it. It is built once from the catalog sources and
//! is read-only afterwards, so it can be shared between concurrent resolutions
//! through an `Arc` without locking.
//!
//! 符号索引将每个标记映射到携带它的单元，并将每个标记种类映射到声明它的标记。
//! 它由目录源构建一次，之后只读，因此可以通过 `Arc` 在并发解析之间无锁共享。

use crate::core::catalog::{Catalog, CatalogSource, TypeRecord, UnitRecord};
use crate::core::error::{CatalogError, DiscoveryError, Result};
use crate::core::models::{CATEGORY_KIND, MarkerId, Unit, UnitId};
use crate::core::registry::MarkerRegistry;
use crate::infra::fs::catalog_files;
use once_cell::sync::OnceCell;
use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// The lookup contract the resolution pipeline consumes.
/// 解析管道所依赖的查找契约。
pub trait SymbolLookup: Send + Sync {
    /// Units carrying `marker`. Unknown markers yield an empty set.
    fn lookup(&self, marker: &MarkerId) -> BTreeSet<UnitId>;

    /// Markers declaring the meta-marker `kind` at the type level.
    fn declaring(&self, kind: &MarkerId) -> BTreeSet<MarkerId>;

    /// Resolves an identifier back to its unit.
    fn resolve_unit(&self, id: &UnitId) -> Result<Arc<Unit>>;

    /// Checks whether `marker` is declared as a custom category marker.
    fn is_category_marker(&self, marker: &MarkerId) -> bool {
        self.declaring(&MarkerId::new(CATEGORY_KIND)).contains(marker)
    }
}

/// Counters describing how an index was assembled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStats {
    /// Catalog files that were read and parsed.
    pub sources_read: usize,
    /// Catalog files (or directories) that could not be read and were skipped.
    pub sources_failed: usize,
    /// Unit declarations dropped because their id was already indexed.
    pub duplicate_units: usize,
}

/// The immutable marker → unit index.
#[derive(Debug, Default)]
pub struct SymbolIndex {
    units: HashMap<UnitId, Arc<Unit>>,
    by_marker: BTreeMap<MarkerId, BTreeSet<UnitId>>,
    by_kind: BTreeMap<MarkerId, BTreeSet<MarkerId>>,
    stats: IndexStats,
}

impl SymbolIndex {
    /// Builds the index from the given sources.
    ///
    /// A source that cannot be read or parsed is logged and skipped. The build only
    /// fails when no catalog file could be read at all.
    ///
    /// 从给定的源构建索引。
    /// 无法读取或解析的源会被记录并跳过。只有在完全无法读取任何目录文件时构建才会失败。
    pub fn build(sources: &[CatalogSource], registry: &MarkerRegistry) -> Result<Self> {
        let mut builder = IndexBuilder::default();
        let mut attempted = 0;
        let mut failed = 0;

        for source in sources {
            for (origin, loaded) in load_source(source) {
                attempted += 1;
                match loaded {
                    Ok(catalog) => {
                        debug!(source = %origin, units = catalog.units.len(), "catalog loaded");
                        builder.add(catalog, &origin);
                    }
                    Err(e) => {
                        failed += 1;
                        warn!(source = %origin, error = %e, "skipping unreadable catalog source");
                    }
                }
            }
        }

        if attempted == failed {
            return Err(DiscoveryError::NoReadableSources { attempted, failed });
        }

        let mut index = builder.finish(registry);
        index.stats.sources_read = attempted - failed;
        index.stats.sources_failed = failed;
        info!(
            units = index.units.len(),
            markers = index.by_marker.len(),
            sources = index.stats.sources_read,
            skipped = failed,
            "symbol index built"
        );
        Ok(index)
    }

    /// Builds an index from catalogs already held in memory.
    pub fn from_catalogs(catalogs: Vec<Catalog>, registry: &MarkerRegistry) -> Self {
        let mut builder = IndexBuilder::default();
        let count = catalogs.len();
        for (i, catalog) in catalogs.into_iter().enumerate() {
            builder.add(catalog, &format!("inline#{i}"));
        }
        let mut index = builder.finish(registry);
        index.stats.sources_read = count;
        index
    }

    pub fn stats(&self) -> IndexStats {
        self.stats
    }

    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    /// All markers carried by at least one unit, in ascending order.
    pub fn markers(&self) -> impl Iterator<Item = &MarkerId> {
        self.by_marker.keys()
    }

    /// Markers declared as custom category markers, in ascending order.
    pub fn category_markers(&self) -> BTreeSet<MarkerId> {
        self.declaring(&MarkerId::new(CATEGORY_KIND))
    }
}

impl SymbolLookup for SymbolIndex {
    fn lookup(&self, marker: &MarkerId) -> BTreeSet<UnitId> {
        self.by_marker.get(marker).cloned().unwrap_or_default()
    }

    fn declaring(&self, kind: &MarkerId) -> BTreeSet<MarkerId> {
        self.by_kind.get(kind).cloned().unwrap_or_default()
    }

    fn resolve_unit(&self, id: &UnitId) -> Result<Arc<Unit>> {
        self.units
            .get(id)
            .cloned()
            .ok_or_else(|| DiscoveryError::UnitUnavailable(id.clone()))
    }

    fn is_category_marker(&self, marker: &MarkerId) -> bool {
        self.by_kind
            .get(&MarkerId::new(CATEGORY_KIND))
            .is_some_and(|markers| markers.contains(marker))
    }
}

/// Expands a source into its catalog files and loads each of them.
/// A directory that cannot be listed yields a single failed entry.
fn load_source(source: &CatalogSource) -> Vec<(String, std::result::Result<Catalog, CatalogError>)> {
    match source {
        CatalogSource::File(path) => vec![(path.display().to_string(), Catalog::load(path))],
        CatalogSource::Directory(dir) => match catalog_files(dir) {
            Ok(files) => files
                .into_iter()
                .map(|path| (path.display().to_string(), Catalog::load(&path)))
                .collect(),
            Err(e) => vec![(
                dir.display().to_string(),
                Err(CatalogError::Io {
                    path: dir.clone(),
                    source: e,
                }),
            )],
        },
        CatalogSource::Inline { name, catalog } => vec![(name.clone(), Ok(catalog.clone()))],
    }
}

/// Accumulates catalog contents in source order, first declaration wins.
#[derive(Default)]
struct IndexBuilder {
    units: Vec<UnitRecord>,
    seen: BTreeSet<UnitId>,
    supertypes: HashMap<String, Vec<String>>,
    by_kind: BTreeMap<MarkerId, BTreeSet<MarkerId>>,
    duplicates: usize,
}

impl IndexBuilder {
    fn add(&mut self, catalog: Catalog, origin: &str) {
        for marker in catalog.markers {
            for kind in marker.kinds {
                self.by_kind.entry(kind).or_default().insert(marker.name.clone());
            }
        }

        for TypeRecord { name, extends } in catalog.types {
            self.merge_supertypes(name, extends);
        }

        for record in catalog.units {
            if !self.seen.insert(record.id.clone()) {
                self.duplicates += 1;
                warn!(unit = %record.id, source = origin, "duplicate unit declaration ignored");
                continue;
            }
            self.merge_supertypes(record.id.as_str().to_string(), record.extends.clone());
            self.units.push(record);
        }
    }

    /// A name declared by several type or unit records gets the union of their
    /// supertypes, so subtypes inherit every ancestor of each declaration.
    fn merge_supertypes(&mut self, name: String, extends: Vec<String>) {
        let parents = self.supertypes.entry(name).or_default();
        for parent in extends {
            if !parents.contains(&parent) {
                parents.push(parent);
            }
        }
    }

    fn finish(self, registry: &MarkerRegistry) -> SymbolIndex {
        let mut units = HashMap::with_capacity(self.units.len());
        let mut by_marker: BTreeMap<MarkerId, BTreeSet<UnitId>> = BTreeMap::new();

        for record in &self.units {
            let mut markers: BTreeSet<MarkerId> = record.markers.iter().cloned().collect();
            markers.extend(registry.derive(record).cloned());

            for marker in &markers {
                by_marker.entry(marker.clone()).or_default().insert(record.id.clone());
            }

            let parents = self
                .supertypes
                .get(record.id.as_str())
                .map_or(record.extends.as_slice(), Vec::as_slice);
            let unit = Unit {
                id: record.id.clone(),
                markers,
                lineage: lineage_of(parents, &self.supertypes),
                runner: record.runner.clone(),
            };
            units.insert(record.id.clone(), Arc::new(unit));
        }

        SymbolIndex {
            units,
            by_marker,
            by_kind: self.by_kind,
            stats: IndexStats {
                duplicate_units: self.duplicates,
                ..Default::default()
            },
        }
    }
}

/// Every type reachable from `direct` through the supertype table. Unknown names are
/// kept as leaves and cycles are cut by the visited set.
fn lineage_of(direct: &[String], supertypes: &HashMap<String, Vec<String>>) -> BTreeSet<String> {
    let mut lineage = BTreeSet::new();
    let mut queue: VecDeque<&String> = direct.iter().collect();

    while let Some(name) = queue.pop_front() {
        if !lineage.insert(name.clone()) {
            continue;
        }
        if let Some(parents) = supertypes.get(name) {
            queue.extend(parents.iter());
        }
    }
    lineage
}

/// Lazily built, cached index over a fixed set of sources.
///
/// The index is built on the first `get()` and shared afterwards. A failed build
/// is not cached, and `invalidate()` discards a built index so the next `get()`
/// scans the sources again.
///
/// 基于固定源集合的延迟构建并缓存的索引。
/// 索引在第一次调用 `get()` 时构建，之后共享。构建失败不会被缓存，
/// `invalidate()` 会丢弃已构建的索引，使下一次 `get()` 重新扫描源。
#[derive(Debug)]
pub struct LazyIndex {
    sources: Vec<CatalogSource>,
    registry: MarkerRegistry,
    cell: OnceCell<Arc<SymbolIndex>>,
}

impl LazyIndex {
    pub fn new(sources: Vec<CatalogSource>, registry: MarkerRegistry) -> Self {
        Self {
            sources,
            registry,
            cell: OnceCell::new(),
        }
    }

    pub fn get(&self) -> Result<Arc<SymbolIndex>> {
        self.cell
            .get_or_try_init(|| SymbolIndex::build(&self.sources, &self.registry).map(Arc::new))
            .cloned()
    }

    pub fn is_built(&self) -> bool {
        self.cell.get().is_some()
    }

    pub fn invalidate(&mut self) {
        if self.cell.take().is_some() {
            debug!("symbol index invalidated");
        }
    }
}
