//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：导入文档、构建章节列表

mod import_commands;

pub mod handlers;

pub use import_commands::*;
