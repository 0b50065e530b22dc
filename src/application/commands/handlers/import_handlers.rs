//! Import Command Handlers

use serde::Serialize;
use std::sync::Arc;

use crate::application::commands::{BuildChapterList, ImportDocument, LoadDocument};
use crate::application::error::ApplicationError;
use crate::application::ports::DocumentReaderPort;
use crate::domain::import::char_count;
use crate::domain::{
    build_chapter_list, BuildOptions, ChapterRecord, ImportSession, SplitMode, TextEncoding,
};

// ============================================================================
// BuildChapterList
// ============================================================================

/// BuildChapterList Handler - 纯计算，不会失败
#[derive(Debug, Default)]
pub struct BuildChapterListHandler;

impl BuildChapterListHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, command: BuildChapterList) -> Vec<ChapterRecord> {
        let options = BuildOptions {
            mode: command.mode,
            detected_chapters: command.detected_chapters,
        };
        let chapters = build_chapter_list(&command.text, &options);

        tracing::info!(
            mode = %command.mode,
            total_chars = char_count(&command.text),
            chapters = chapters.len(),
            "Chapter list built"
        );

        chapters
    }
}

// ============================================================================
// ImportDocument
// ============================================================================

/// 导入响应
#[derive(Debug, Clone, Serialize)]
pub struct ImportDocumentResponse {
    pub source_name: String,
    pub encoding: TextEncoding,
    pub mode: SplitMode,
    pub total_chars: usize,
    pub chapters: Vec<ChapterRecord>,
}

/// ImportDocument Handler - 解码上传内容并分章
pub struct ImportDocumentHandler {
    reader: Arc<dyn DocumentReaderPort>,
    max_upload_size: u64,
}

impl ImportDocumentHandler {
    pub fn new(reader: Arc<dyn DocumentReaderPort>, max_upload_size: u64) -> Self {
        Self {
            reader,
            max_upload_size,
        }
    }

    pub fn handle(&self, command: ImportDocument) -> Result<ImportDocumentResponse, ApplicationError> {
        if command.bytes.len() as u64 > self.max_upload_size {
            return Err(ApplicationError::validation(format!(
                "File too large: {} bytes (max {} bytes)",
                command.bytes.len(),
                self.max_upload_size
            )));
        }

        let text = self.reader.decode(&command.bytes, command.encoding)?;
        let total_chars = char_count(&text);
        let chapters = build_chapter_list(&text, &BuildOptions {
            mode: command.mode,
            detected_chapters: None,
        });

        tracing::info!(
            source = %command.source_name,
            encoding = %command.encoding,
            mode = %command.mode,
            total_chars = total_chars,
            chapters = chapters.len(),
            "Document imported"
        );

        Ok(ImportDocumentResponse {
            source_name: command.source_name,
            encoding: command.encoding,
            mode: command.mode,
            total_chars,
            chapters,
        })
    }
}

// ============================================================================
// LoadDocument
// ============================================================================

/// LoadDocument Handler - 按会话的编码读取文件并载入会话
pub struct LoadDocumentHandler {
    reader: Arc<dyn DocumentReaderPort>,
}

impl LoadDocumentHandler {
    pub fn new(reader: Arc<dyn DocumentReaderPort>) -> Self {
        Self { reader }
    }

    /// 读取失败时会话保持不变
    pub async fn handle(
        &self,
        session: &mut ImportSession,
        command: LoadDocument,
    ) -> Result<(), ApplicationError> {
        let text = self.reader.read(&command.path, session.encoding()).await?;

        let source_name = command
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .map(|s| s.to_string())
            .unwrap_or_else(|| command.path.display().to_string());

        session.load(source_name, text);

        tracing::info!(
            path = %command.path.display(),
            encoding = %session.encoding(),
            total_chars = session.total_chars(),
            "Document loaded into import session"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::ReadError;
    use crate::domain::import::SessionState;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};

    /// 内存中的文档读取器
    struct FakeReader {
        files: HashMap<PathBuf, Vec<u8>>,
    }

    impl FakeReader {
        fn with_file(path: &str, content: &str) -> Self {
            let mut files = HashMap::new();
            files.insert(PathBuf::from(path), content.as_bytes().to_vec());
            Self { files }
        }
    }

    #[async_trait]
    impl DocumentReaderPort for FakeReader {
        fn decode(&self, bytes: &[u8], encoding: TextEncoding) -> Result<String, ReadError> {
            String::from_utf8(bytes.to_vec()).map_err(|_| ReadError::Decode { encoding })
        }

        async fn read(&self, path: &Path, encoding: TextEncoding) -> Result<String, ReadError> {
            let bytes = self
                .files
                .get(path)
                .ok_or_else(|| ReadError::NotFound(path.display().to_string()))?;
            self.decode(bytes, encoding)
        }
    }

    const SAMPLE: &str = "第一章 开始\n内容A\n第二章 发展\n内容B";

    #[test]
    fn test_build_chapter_list_handler() {
        let handler = BuildChapterListHandler::new();
        let chapters = handler.handle(BuildChapterList {
            text: SAMPLE.to_string(),
            mode: SplitMode::Regex,
            detected_chapters: None,
        });

        assert_eq!(chapters.len(), 2);
        assert_eq!(chapters[1].title, "第二章 发展");
    }

    #[test]
    fn test_import_document_handler() {
        let handler = ImportDocumentHandler::new(Arc::new(FakeReader::with_file("x", "")), 1024);
        let response = handler
            .handle(ImportDocument {
                source_name: "novel.txt".to_string(),
                bytes: SAMPLE.as_bytes().to_vec(),
                encoding: TextEncoding::Utf8,
                mode: SplitMode::Single,
            })
            .unwrap();

        assert_eq!(response.total_chars, SAMPLE.chars().count());
        assert_eq!(response.chapters.len(), 1);
        assert_eq!(response.mode, SplitMode::Single);
    }

    #[test]
    fn test_import_document_rejects_oversized_input() {
        let handler = ImportDocumentHandler::new(Arc::new(FakeReader::with_file("x", "")), 4);
        let result = handler.handle(ImportDocument {
            source_name: "big.txt".to_string(),
            bytes: vec![b'a'; 5],
            encoding: TextEncoding::Utf8,
            mode: SplitMode::Regex,
        });

        assert!(matches!(result, Err(ApplicationError::ValidationError(_))));
    }

    #[test]
    fn test_import_document_decode_failure() {
        let handler = ImportDocumentHandler::new(Arc::new(FakeReader::with_file("x", "")), 1024);
        let result = handler.handle(ImportDocument {
            source_name: "bad.txt".to_string(),
            bytes: vec![0xff, 0xfe, 0xfd],
            encoding: TextEncoding::Utf8,
            mode: SplitMode::Regex,
        });

        assert!(matches!(result, Err(ApplicationError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_load_document_into_session() {
        let handler = LoadDocumentHandler::new(Arc::new(FakeReader::with_file(
            "/books/novel.txt",
            SAMPLE,
        )));
        let mut session = ImportSession::default();

        handler
            .handle(
                &mut session,
                LoadDocument {
                    path: PathBuf::from("/books/novel.txt"),
                },
            )
            .await
            .unwrap();

        assert_eq!(session.state(), SessionState::Loaded);
        assert_eq!(session.source_name(), Some("novel.txt"));
        assert_eq!(session.text(), SAMPLE);
        assert_eq!(session.preview().len(), 2);
    }

    #[tokio::test]
    async fn test_failed_load_leaves_session_untouched() {
        let handler = LoadDocumentHandler::new(Arc::new(FakeReader::with_file("/a.txt", SAMPLE)));
        let mut session = ImportSession::default();

        let result = handler
            .handle(
                &mut session,
                LoadDocument {
                    path: PathBuf::from("/missing.txt"),
                },
            )
            .await;

        assert!(matches!(result, Err(ApplicationError::NotFound(_))));
        assert_eq!(session.state(), SessionState::Empty);
        assert!(session.text().is_empty());
    }
}
