//! # Core Module / 核心模块
//!
//! This module contains the core functionality of the suite resolver,
//! including data models, the symbol index and the resolution pipeline.
//!
//! 此模块包含套件解析器的核心功能，
//! 包括数据模型、符号索引和解析管道。

pub mod assembler;
pub mod catalog;
pub mod collector;
pub mod config;
pub mod error;
pub mod filter;
pub mod index;
pub mod models;
pub mod registry;
pub mod resolver;

// Re-exports
pub use assembler::SuiteAssembler;
pub use config::SuiteMatrix;
pub use error::DiscoveryError;
pub use index::{LazyIndex, SymbolIndex, SymbolLookup};
pub use registry::MarkerRegistry;
