//! Import Commands

use std::path::PathBuf;

use crate::domain::{ChapterSummary, SplitMode, TextEncoding};

/// 由已解码文本构建章节列表
#[derive(Debug, Clone)]
pub struct BuildChapterList {
    pub text: String,
    pub mode: SplitMode,
    /// 调用方调整过的章节边界
    pub detected_chapters: Option<Vec<ChapterSummary>>,
}

/// 导入上传的原始文档（解码 + 分章）
#[derive(Debug, Clone)]
pub struct ImportDocument {
    pub source_name: String,
    pub bytes: Vec<u8>,
    pub encoding: TextEncoding,
    pub mode: SplitMode,
}

/// 从文件读取文档到导入会话
#[derive(Debug, Clone)]
pub struct LoadDocument {
    pub path: PathBuf,
}
