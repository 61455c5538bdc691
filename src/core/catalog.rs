//! # Unit Catalog Module / 单元目录模块
//!
//! A catalog is a TOML file that explicitly declares the units, markers and
//! abstract types of a test universe. Catalogs replace live introspection: the
//! symbol index is built by a deterministic pass over them.
//!
//! 目录是一个 TOML 文件，显式声明测试世界中的单元、标记和抽象类型。
//! 目录取代了运行时内省：符号索引通过对它们的确定性遍历构建。
//!
//! ```toml
//! [[markers]]
//! name = "C1"
//! kinds = ["category"]
//!
//! [[types]]
//! name = "BaseTest"
//!
//! [[units]]
//! id = "demo.TestA"
//! markers = ["C1", "Numbered"]
//! extends = ["BaseTest"]
//! tests = ["adds_numbers"]
//! ```

use crate::core::error::CatalogError;
use crate::core::models::{MarkerId, RunnerKind, UnitId};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A marker definition. Markers listed in `kinds` are meta-markers of this marker.
/// 标记定义。`kinds` 中列出的标记是此标记的元标记。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerRecord {
    pub name: MarkerId,
    #[serde(default)]
    pub kinds: Vec<MarkerId>,
}

/// An abstract type that carries no tests itself but takes part in unit lineage.
/// 自身不包含测试、但参与单元继承关系的抽象类型。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRecord {
    pub name: String,
    #[serde(default)]
    pub extends: Vec<String>,
}

/// A unit exactly as declared in a catalog, before indexing.
/// 目录中声明的单元原始记录（索引之前）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitRecord {
    /// The unique id of the unit, also its type name.
    /// 单元的唯一 id，同时也是它的类型名称。
    pub id: UnitId,
    /// Markers declared directly on the unit.
    /// 直接在单元上声明的标记。
    #[serde(default)]
    pub markers: Vec<MarkerId>,
    /// Direct supertypes of the unit.
    /// 单元的直接超类型。
    #[serde(default)]
    pub extends: Vec<String>,
    /// Names of the tests the unit contains.
    /// 单元包含的测试名称。
    #[serde(default)]
    pub tests: Vec<String>,
    /// The runner the unit declares for itself.
    /// 单元为自身声明的运行器。
    #[serde(default)]
    pub runner: Option<RunnerKind>,
}

impl UnitRecord {
    pub fn new(id: impl Into<UnitId>) -> Self {
        Self {
            id: id.into(),
            markers: vec![],
            extends: vec![],
            tests: vec![],
            runner: None,
        }
    }

    /// A unit is test-bearing when it declares a test or a runner of its own.
    pub fn is_test_bearing(&self) -> bool {
        !self.tests.is_empty() || self.runner.is_some()
    }

    pub fn declares(&self, marker: &MarkerId) -> bool {
        self.markers.contains(marker)
    }
}

/// The contents of one catalog file.
/// 单个目录文件的内容。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub markers: Vec<MarkerRecord>,
    #[serde(default)]
    pub types: Vec<TypeRecord>,
    #[serde(default)]
    pub units: Vec<UnitRecord>,
}

impl Catalog {
    /// Reads and parses a single catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Parses catalog content; `origin` is only used for error reporting.
    pub fn parse(content: &str, origin: &Path) -> Result<Self, CatalogError> {
        toml::from_str(content).map_err(|source| CatalogError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }
}

/// One entry of the source universe: a catalog file, or a directory of catalogs.
/// 源集合中的一个条目：一个目录文件，或一个包含目录文件的文件夹。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// A single catalog file.
    File(PathBuf),
    /// Every `*.toml` file directly inside the directory.
    Directory(PathBuf),
    /// A catalog already held in memory, e.g. assembled by a build script or a test.
    Inline { name: String, catalog: Catalog },
}

impl CatalogSource {
    /// Classifies a path by what is on disk. Missing paths are treated as files so the
    /// read failure is reported when the index is built.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if path.is_dir() {
            Self::Directory(path)
        } else {
            Self::File(path)
        }
    }

    pub fn inline(name: impl Into<String>, catalog: Catalog) -> Self {
        Self::Inline {
            name: name.into(),
            catalog,
        }
    }
}
