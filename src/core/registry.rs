//! # Marker Registry Module / 标记注册表模块
//!
//! An explicit mapping from marker identifier to a predicate evaluated against a
//! declared unit record. The symbol index consults it while indexing, so derived
//! markers such as the default "is a test" marker never rely on introspection.
//!
//! 从标记标识符到谓词的显式映射，谓词针对声明的单元记录求值。
//! 符号索引在建立索引时会查询它，因此像默认的“是测试”标记这样的派生标记从不依赖内省。

use crate::core::catalog::UnitRecord;
use crate::core::models::MarkerId;
use std::fmt;

type Predicate = Box<dyn Fn(&UnitRecord) -> bool + Send + Sync>;

/// Ordered marker → predicate rules.
pub struct MarkerRegistry {
    rules: Vec<(MarkerId, Predicate)>,
}

impl MarkerRegistry {
    /// Creates a registry with no rules. Units then carry only their declared markers.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Creates a registry with the default marker matched by every test-bearing record.
    /// 创建一个注册表，其中默认标记匹配每个承载测试的记录。
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register(MarkerId::default_marker(), UnitRecord::is_test_bearing);
        registry
    }

    /// Registers a derived marker. Registering the same marker again adds another
    /// predicate; the marker is attached when any of them matches.
    pub fn register<F>(&mut self, marker: MarkerId, predicate: F) -> &mut Self
    where
        F: Fn(&UnitRecord) -> bool + Send + Sync + 'static,
    {
        self.rules.push((marker, Box::new(predicate)));
        self
    }

    /// Returns the registered markers matching the record, in registration order.
    pub fn derive<'a>(&'a self, record: &'a UnitRecord) -> impl Iterator<Item = &'a MarkerId> + 'a {
        self.rules
            .iter()
            .filter(move |(_, predicate)| predicate(record))
            .map(|(marker, _)| marker)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for MarkerRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Debug for MarkerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarkerRegistry")
            .field(
                "markers",
                &self.rules.iter().map(|(marker, _)| marker).collect::<Vec<_>>(),
            )
            .finish()
    }
}
