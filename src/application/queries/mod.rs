//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：章节检测预览

mod import_queries;

pub mod handlers;

pub use import_queries::*;
