//! 章节列表构建
//!
//! 把检测结果转换为可交给小说管理模块的章节记录。
//! 构建结果永不为空：检测失败时整篇作为一章。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::detector::detect_chapters;
use super::extractor::{extract_body, split_lines};
use super::{ChapterId, ChapterRecord, ChapterSummary, SplitMode};

/// 单章模式下的标题
pub const FULL_TEXT_TITLE: &str = "全文";

/// 构建选项
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildOptions {
    pub mode: SplitMode,
    /// 调用方提供的章节边界（为空时重新检测）
    #[serde(default)]
    pub detected_chapters: Option<Vec<ChapterSummary>>,
}

impl BuildOptions {
    pub fn regex() -> Self {
        Self {
            mode: SplitMode::Regex,
            detected_chapters: None,
        }
    }

    pub fn single() -> Self {
        Self {
            mode: SplitMode::Single,
            detected_chapters: None,
        }
    }

    pub fn with_detected(mut self, chapters: Vec<ChapterSummary>) -> Self {
        self.detected_chapters = Some(chapters);
        self
    }
}

/// 以当前时间构建章节列表
pub fn build_chapter_list(text: &str, options: &BuildOptions) -> Vec<ChapterRecord> {
    build_chapter_list_at(text, options, Utc::now())
}

/// 以指定时间构建章节列表
///
/// 同一次构建中所有记录共享 `now`，标识为 `now` 的毫秒值加记录位置。
pub fn build_chapter_list_at(
    text: &str,
    options: &BuildOptions,
    now: DateTime<Utc>,
) -> Vec<ChapterRecord> {
    let base = now.timestamp_millis();

    if options.mode == SplitMode::Single {
        return vec![full_text_record(text, base, now)];
    }

    let detected;
    let chapters: &[ChapterSummary] = match options.detected_chapters.as_deref() {
        Some(supplied) if !supplied.is_empty() => supplied,
        _ => {
            detected = detect_chapters(text);
            &detected
        }
    };

    if chapters.is_empty() {
        tracing::debug!("No chapter headings found, importing as a single chapter");
        return vec![full_text_record(text, base, now)];
    }

    let lines = split_lines(text);
    chapters
        .iter()
        .enumerate()
        .map(|(position, summary)| {
            ChapterRecord::draft(
                ChapterId::for_build(base, position),
                summary.title.clone(),
                extract_body(summary, &lines, chapters),
                now,
            )
        })
        .collect()
}

fn full_text_record(text: &str, base: i64, now: DateTime<Utc>) -> ChapterRecord {
    ChapterRecord::draft(ChapterId::for_build(base, 0), FULL_TEXT_TITLE, text.trim(), now)
}
