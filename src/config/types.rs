//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

use crate::domain::{SplitMode, TextEncoding};

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 导入配置
    #[serde(default)]
    pub import: ImportConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5070
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 导入配置
#[derive(Debug, Clone, Deserialize)]
pub struct ImportConfig {
    /// 未指定编码时使用的编码
    #[serde(default)]
    pub default_encoding: TextEncoding,

    /// 未指定模式时使用的分章模式
    #[serde(default)]
    pub default_mode: SplitMode,

    /// 上传文件最大大小（字节），默认 20MB
    #[serde(default = "default_max_upload_size")]
    pub max_upload_size: u64,
}

fn default_max_upload_size() -> u64 {
    20 * 1024 * 1024 // 20 MB
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            default_encoding: TextEncoding::Utf8,
            default_mode: SplitMode::Regex,
            max_upload_size: default_max_upload_size(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
