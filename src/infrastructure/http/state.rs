//! Application State
//!
//! HTTP 层共享的处理器和导入默认值

use std::sync::Arc;

use crate::application::{
    BuildChapterListHandler, DetectChaptersHandler, DocumentReaderPort, ImportDocumentHandler,
};
use crate::config::ImportConfig;

/// 应用状态
pub struct AppState {
    // ========== Settings ==========
    pub import: ImportConfig,

    // ========== Command Handlers ==========
    pub build_chapters_handler: BuildChapterListHandler,
    pub import_document_handler: ImportDocumentHandler,

    // ========== Query Handlers ==========
    pub detect_chapters_handler: DetectChaptersHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(reader: Arc<dyn DocumentReaderPort>, import: ImportConfig) -> Self {
        Self {
            import_document_handler: ImportDocumentHandler::new(
                reader,
                import.max_upload_size,
            ),
            build_chapters_handler: BuildChapterListHandler::new(),
            detect_chapters_handler: DetectChaptersHandler::new(),
            import,
        }
    }
}
