//! # Reporting Module / 报告模块
//!
//! This module handles the output of resolved suites in multiple formats.
//! It provides colorful console summaries with internationalization support
//! and a JSON rendering for external suite runners.
//!
//! 此模块处理已解析套件的多种格式输出。
//! 它提供支持国际化的彩色控制台摘要，以及供外部套件运行器使用的 JSON 渲染。

pub mod console;
pub mod json;

// Re-export common reporting functions
pub use console::{print_index, print_suites};
