//! Import Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("无效的标题规则 {name}: {reason}")]
    InvalidPattern { name: String, reason: String },

    #[error("未知的分章模式: {0}")]
    UnknownMode(String),

    #[error("不支持的文本编码: {0}")]
    UnknownEncoding(String),
}
