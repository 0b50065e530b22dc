//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::ReadError;
use crate::domain::ImportError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 文件不存在
    #[error("Not found: {0}")]
    NotFound(String),

    /// 文档读取/解码错误
    #[error("Read error: {0}")]
    ReadError(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}

impl From<ReadError> for ApplicationError {
    fn from(err: ReadError) -> Self {
        match err {
            ReadError::NotFound(path) => Self::NotFound(path),
            ReadError::Decode { .. } => Self::ValidationError(err.to_string()),
            ReadError::Io(_) => Self::ReadError(err.to_string()),
        }
    }
}

impl From<ImportError> for ApplicationError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::UnknownMode(_) | ImportError::UnknownEncoding(_) => {
                Self::ValidationError(err.to_string())
            }
            ImportError::InvalidPattern { .. } => Self::InternalError(err.to_string()),
        }
    }
}
