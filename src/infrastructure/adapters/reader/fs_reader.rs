//! File System Document Reader
//!
//! 实现 DocumentReaderPort trait，支持 UTF-8 与 GBK

use async_trait::async_trait;
use encoding_rs::{GBK, UTF_8};
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

use crate::application::ports::{DocumentReaderPort, ReadError};
use crate::domain::TextEncoding;

/// 解码字节，遇到非法字节序列时报错而不是替换
pub fn decode_text(bytes: &[u8], encoding: TextEncoding) -> Result<String, ReadError> {
    let (text, had_errors) = match encoding {
        TextEncoding::Utf8 => UTF_8.decode_with_bom_removal(bytes),
        TextEncoding::Gbk => GBK.decode_without_bom_handling(bytes),
    };

    if had_errors {
        return Err(ReadError::Decode { encoding });
    }

    Ok(text.into_owned())
}

/// 文件系统文档读取器
#[derive(Debug, Default, Clone)]
pub struct FsDocumentReader;

impl FsDocumentReader {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DocumentReaderPort for FsDocumentReader {
    fn decode(&self, bytes: &[u8], encoding: TextEncoding) -> Result<String, ReadError> {
        decode_text(bytes, encoding)
    }

    async fn read(&self, path: &Path, encoding: TextEncoding) -> Result<String, ReadError> {
        let bytes = fs::read(path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => ReadError::NotFound(path.to_string_lossy().to_string()),
            _ => ReadError::Io(e.to_string()),
        })?;

        tracing::debug!(
            "Read document: path={}, size={} bytes, encoding={}",
            path.display(),
            bytes.len(),
            encoding
        );

        self.decode(&bytes, encoding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_decode_utf8_strips_bom() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice("第一章 开始".as_bytes());

        assert_eq!(decode_text(&bytes, TextEncoding::Utf8).unwrap(), "第一章 开始");
    }

    #[test]
    fn test_decode_gbk() {
        let (bytes, _, _) = GBK.encode("第一章 开始\n内容");
        assert_eq!(
            decode_text(&bytes, TextEncoding::Gbk).unwrap(),
            "第一章 开始\n内容"
        );
    }

    #[test]
    fn test_decode_rejects_malformed_bytes() {
        assert!(matches!(
            decode_text(&[0xff, 0xfe, 0xfd], TextEncoding::Utf8),
            Err(ReadError::Decode {
                encoding: TextEncoding::Utf8
            })
        ));
        assert!(matches!(
            decode_text(&[0xff], TextEncoding::Gbk),
            Err(ReadError::Decode {
                encoding: TextEncoding::Gbk
            })
        ));
    }

    #[test]
    fn test_gbk_bytes_are_not_utf8() {
        let (bytes, _, _) = GBK.encode("第一章");
        assert!(decode_text(&bytes, TextEncoding::Utf8).is_err());
    }

    #[tokio::test]
    async fn test_read_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("novel.txt");
        let (bytes, _, _) = GBK.encode("第一章\n正文");
        tokio::fs::write(&path, &bytes).await.unwrap();

        let reader = FsDocumentReader::new();
        let text = reader.read(&path, TextEncoding::Gbk).await.unwrap();
        assert_eq!(text, "第一章\n正文");
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let temp_dir = tempdir().unwrap();
        let reader = FsDocumentReader::new();

        let result = reader
            .read(&temp_dir.path().join("missing.txt"), TextEncoding::Utf8)
            .await;
        assert!(matches!(result, Err(ReadError::NotFound(_))));
    }
}
