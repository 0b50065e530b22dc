//! Inkstone - 小说写作工具的文档导入服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Import Context: 章节标题识别、分章、导入会话
//!
//! 应用层 (application/):
//! - Ports: DocumentReader
//! - Commands: 构建章节列表、导入文档、载入会话
//! - Queries: 章节检测预览
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Adapters: 文件读取与 UTF-8 / GBK 解码

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
