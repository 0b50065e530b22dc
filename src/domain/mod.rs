//! Domain Layer - 领域层
//!
//! 目前只有一个限界上下文:
//! - Import Context: 文档导入与分章

pub mod import;

pub use import::{
    build_chapter_list, detect_chapters, extract_body, BuildOptions, ChapterRecord,
    ChapterSummary, ImportError, ImportSession, SplitMode, TextEncoding,
};
