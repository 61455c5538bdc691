//! # Restriction Filter Module / 限制过滤模块
//!
//! Applies the exclusion rules of a suite descriptor to each candidate unit:
//! anti-recursion, the type constraint and the skip-category set. A unit is
//! kept only if it passes all three.
//!
//! 将套件描述符的排除规则应用于每个候选单元：
//! 防递归、类型约束和跳过类别集合。只有通过全部三项检查的单元才会被保留。

use crate::core::models::{MarkerId, SuiteDescriptor, Unit};
use std::fmt;

/// The reason a candidate was excluded from a suite.
/// 候选单元被排除在套件之外的原因。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exclusion {
    /// The unit is itself a suite runner and would be executed twice.
    /// 该单元本身是套件运行器，会被重复执行。
    SuiteRunner,
    /// The unit is not assignable to the required base type.
    /// 该单元不能赋值给所要求的基类型。
    NotAssignable(String),
    /// The unit carries a marker from the skip set.
    /// 该单元携带了跳过集合中的标记。
    Skipped(MarkerId),
}

impl fmt::Display for Exclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exclusion::SuiteRunner => write!(f, "unit is a suite runner"),
            Exclusion::NotAssignable(base) => write!(f, "unit is not assignable to {base}"),
            Exclusion::Skipped(marker) => write!(f, "unit carries skipped marker {marker}"),
        }
    }
}

/// Evaluates the restrictions in order and returns the first one that excludes
/// `unit`, or `None` when the unit belongs in the suite.
pub fn exclusion(unit: &Unit, descriptor: &SuiteDescriptor) -> Option<Exclusion> {
    if unit.is_suite_runner() {
        return Some(Exclusion::SuiteRunner);
    }

    if let Some(base) = &descriptor.tests_of_type {
        if !unit.is_assignable_to(base) {
            return Some(Exclusion::NotAssignable(base.clone()));
        }
    }

    descriptor
        .skip
        .iter()
        .find(|marker| unit.carries(marker))
        .map(|marker| Exclusion::Skipped(marker.clone()))
}

pub fn is_admitted(unit: &Unit, descriptor: &SuiteDescriptor) -> bool {
    exclusion(unit, descriptor).is_none()
}
