//! Document Reader Port - 文档读取抽象
//!
//! 负责 字节 -> 字符串 的解码，以及从文件系统读取原始文档。
//! 分章逻辑只接收已经解码好的字符串。

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

use crate::domain::TextEncoding;

/// 文档读取错误
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Text is not valid {encoding}")]
    Decode { encoding: TextEncoding },
}

/// Document Reader Port
#[async_trait]
pub trait DocumentReaderPort: Send + Sync {
    /// 按指定编码解码字节（去除 UTF-8 BOM）
    fn decode(&self, bytes: &[u8], encoding: TextEncoding) -> Result<String, ReadError>;

    /// 读取文件并解码
    async fn read(&self, path: &Path, encoding: TextEncoding) -> Result<String, ReadError>;
}
