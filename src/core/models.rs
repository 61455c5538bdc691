//! # Data Models Module / 数据模型模块
//!
//! This module defines the core data structures used throughout the suite resolver.
//! It includes identifiers for units and markers, the materialized `Unit`, the
//! declarative `SuiteDescriptor` and the `ResolvedSuite` handed back to callers.
//!
//! 此模块定义了整个套件解析器中使用的核心数据结构。
//! 它包括单元和标记的标识符、具体化的 `Unit`、声明式的 `SuiteDescriptor`
//! 以及返回给调用者的 `ResolvedSuite`。

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

/// The marker every test-bearing unit carries. Suites without a custom category
/// marker collect their candidates through it.
/// 每个承载测试的单元都携带的标记。没有自定义类别标记的套件通过它收集候选单元。
pub const DEFAULT_MARKER: &str = "test";

/// The meta-marker that designates a marker as a custom category discriminator.
/// 将某个标记指定为自定义类别判别器的元标记。
pub const CATEGORY_KIND: &str = "category";

/// The runner family of suite runners. Units whose runner belongs to it are never
/// collected into another suite.
/// 套件运行器的运行器家族。其运行器属于该家族的单元永远不会被收集到其他套件中。
pub const SUITE_FAMILY: &str = "suite";

/// Unique identifier of a test-bearing unit.
/// 承载测试的单元的唯一标识符。
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitId(String);

impl UnitId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UnitId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for UnitId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Opaque identifier of a marker attached to units, descriptors or other markers.
/// 附加到单元、描述符或其他标记上的不透明标记标识符。
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkerId(String);

impl MarkerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The generic "is a test" marker.
    pub fn default_marker() -> Self {
        Self::new(DEFAULT_MARKER)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MarkerId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for MarkerId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// The runner a unit declares for itself, together with the runner kinds it extends.
/// 单元为自身声明的运行器，以及它所扩展的运行器种类。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerKind {
    /// Name of the runner kind (e.g. "suite", "parameterized").
    /// 运行器种类的名称（例如 "suite"、"parameterized"）。
    pub name: String,
    /// Runner kinds this runner is assignable to.
    /// 此运行器可赋值到的运行器种类。
    #[serde(default)]
    pub extends: Vec<String>,
}

impl RunnerKind {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extends: vec![],
        }
    }

    /// Checks whether this runner is assignable to the given runner family.
    pub fn is_assignable_to(&self, family: &str) -> bool {
        self.name == family || self.extends.iter().any(|kind| kind == family)
    }

    /// Checks whether this runner belongs to the suite-runner family.
    pub fn is_suite_runner(&self) -> bool {
        self.is_assignable_to(SUITE_FAMILY)
    }
}

/// A test-bearing unit as materialized by the symbol index.
/// Units are discovered from catalogs, never created by the resolution process.
///
/// 由符号索引具体化的承载测试的单元。
/// 单元是从目录中发现的，从不由解析过程创建。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Unit {
    /// The unique identifier of the unit, which doubles as its type name.
    /// 单元的唯一标识符，同时也是其类型名称。
    pub id: UnitId,
    /// The effective marker set: declared markers plus registry-derived markers.
    /// 有效标记集合：声明的标记加上由注册表派生的标记。
    pub markers: BTreeSet<MarkerId>,
    /// Every supertype of the unit, resolved transitively.
    /// 单元的所有超类型（传递解析）。
    pub lineage: BTreeSet<String>,
    /// The runner the unit declares, if any.
    /// 单元声明的运行器（如果有）。
    pub runner: Option<RunnerKind>,
}

impl Unit {
    pub fn carries(&self, marker: &MarkerId) -> bool {
        self.markers.contains(marker)
    }

    /// Checks if the unit is the given type or one of its subtypes.
    /// 检查单元是否为给定类型或其子类型。
    pub fn is_assignable_to(&self, type_name: &str) -> bool {
        self.id.as_str() == type_name || self.lineage.contains(type_name)
    }

    pub fn is_suite_runner(&self) -> bool {
        self.runner.as_ref().is_some_and(RunnerKind::is_suite_runner)
    }
}

/// Configuration record for one suite, usually loaded from `Suites.toml`.
/// Descriptors are immutable inputs to the resolution pipeline.
///
/// 单个套件的配置记录，通常从 `Suites.toml` 加载。
/// 描述符是解析管道的不可变输入。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteDescriptor {
    /// The unique name of the suite, used for selection and reporting.
    /// 套件的唯一名称，用于选择和报告。
    pub name: String,
    /// Markers declared on the suite itself. At most one may be a custom category marker.
    /// 套件自身声明的标记。其中最多只能有一个自定义类别标记。
    #[serde(default)]
    pub markers: Vec<MarkerId>,
    /// Optional base type every selected unit must be assignable to.
    /// 可选的基类型，每个被选中的单元都必须可赋值给它。
    #[serde(default)]
    pub tests_of_type: Option<String>,
    /// Markers whose carriers are excluded from the suite.
    /// 携带这些标记的单元将被排除在套件之外。
    #[serde(default)]
    pub skip: BTreeSet<MarkerId>,
}

impl SuiteDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_marker(mut self, marker: impl Into<MarkerId>) -> Self {
        self.markers.push(marker.into());
        self
    }

    pub fn of_type(mut self, type_name: impl Into<String>) -> Self {
        self.tests_of_type = Some(type_name.into());
        self
    }

    pub fn skipping(mut self, marker: impl Into<MarkerId>) -> Self {
        self.skip.insert(marker.into());
        self
    }
}

/// Which marker governed candidate selection for a suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Governance {
    /// A custom category marker declared on the descriptor.
    Custom,
    /// The default "is a test" marker.
    Default,
}

/// The final, deduplicated unit set computed for one suite.
/// 为单个套件计算出的最终去重单元集合。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSuite {
    pub name: String,
    pub marker: MarkerId,
    pub governed_by: Governance,
    /// Keyed by unit id, so a unit reachable more than once is counted once.
    pub units: BTreeMap<UnitId, Arc<Unit>>,
}

impl ResolvedSuite {
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn contains(&self, id: &UnitId) -> bool {
        self.units.contains_key(id)
    }

    /// Unit ids in ascending order.
    pub fn unit_ids(&self) -> impl Iterator<Item = &UnitId> {
        self.units.keys()
    }
}
