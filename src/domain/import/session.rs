//! 导入会话
//!
//! 保存一次导入过程中的可变状态（已读取文本、编码、分章模式），
//! 与任何 UI 框架无关，可直接序列化。
//!
//! 状态机: Empty --load--> Loaded --reset--> Empty

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::builder::{build_chapter_list_at, BuildOptions, FULL_TEXT_TITLE};
use super::detector::detect_chapters;
use super::entities::char_count;
use super::{ChapterRecord, ChapterSummary, SplitMode, TextEncoding};

/// 会话状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    #[default]
    Empty,
    Loaded,
}

/// 导入会话
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportSession {
    state: SessionState,
    text: String,
    source_name: Option<String>,
    encoding: TextEncoding,
    mode: SplitMode,
}

impl ImportSession {
    pub fn new(encoding: TextEncoding, mode: SplitMode) -> Self {
        Self {
            encoding,
            mode,
            ..Self::default()
        }
    }

    pub fn set_encoding(&mut self, encoding: TextEncoding) {
        self.encoding = encoding;
    }

    pub fn set_mode(&mut self, mode: SplitMode) {
        self.mode = mode;
    }

    /// 载入已解码的文本
    pub fn load(&mut self, source_name: impl Into<String>, text: String) {
        self.source_name = Some(source_name.into());
        self.text = text;
        self.state = SessionState::Loaded;
    }

    /// 清空文本，保留编码与模式设置
    pub fn reset(&mut self) {
        self.text.clear();
        self.source_name = None;
        self.state = SessionState::Empty;
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_loaded(&self) -> bool {
        self.state == SessionState::Loaded
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }

    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    pub fn mode(&self) -> SplitMode {
        self.mode
    }

    /// 文本总字符数
    pub fn total_chars(&self) -> usize {
        char_count(&self.text)
    }

    /// 当前模式下的章节预览
    ///
    /// regex 模式返回检测结果（可能为空，构建时会回退为单章）；
    /// single 模式返回一个 "全文" 条目。
    pub fn preview(&self) -> Vec<ChapterSummary> {
        match self.mode {
            SplitMode::Regex => detect_chapters(&self.text),
            SplitMode::Single => vec![ChapterSummary {
                index: 0,
                title: FULL_TEXT_TITLE.to_string(),
                start_line: 0,
                word_count: char_count(self.text.trim()),
            }],
        }
    }

    /// 按当前模式构建章节记录
    pub fn build(&self) -> Vec<ChapterRecord> {
        self.build_at(Utc::now())
    }

    pub fn build_at(&self, now: DateTime<Utc>) -> Vec<ChapterRecord> {
        let options = BuildOptions {
            mode: self.mode,
            detected_chapters: None,
        };
        build_chapter_list_at(&self.text, &options, now)
    }
}
