//! Import Context - 文档导入限界上下文
//!
//! 职责:
//! - 章节标题识别（声明式规则）
//! - 按标题切分章节并生成章节记录
//! - 导入会话状态

mod builder;
mod detector;
mod entities;
mod errors;
mod extractor;
mod heading;
mod session;
mod value_objects;

pub use builder::{build_chapter_list, build_chapter_list_at, BuildOptions, FULL_TEXT_TITLE};
pub use detector::detect_chapters;
pub use entities::{char_count, ChapterRecord, ChapterStatus, ChapterSummary};
pub use errors::ImportError;
pub use extractor::{extract_body, split_lines};
pub use heading::{find_heading, HeadingMatch, HeadingMatcher, HeadingRule, DEFAULT_HEADING_RULES};
pub use session::{ImportSession, SessionState};
pub use value_objects::{ChapterId, SplitMode, TextEncoding};
