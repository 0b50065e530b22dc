//! Import Query Handlers

use serde::Serialize;

use crate::application::queries::DetectChapters;
use crate::domain::import::char_count;
use crate::domain::{detect_chapters, ChapterSummary};

/// 检测结果
#[derive(Debug, Clone, Serialize)]
pub struct DetectChaptersResponse {
    pub total_chars: usize,
    pub chapters: Vec<ChapterSummary>,
}

/// DetectChapters Handler
#[derive(Debug, Default)]
pub struct DetectChaptersHandler;

impl DetectChaptersHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: DetectChapters) -> DetectChaptersResponse {
        let chapters = detect_chapters(&query.text);

        tracing::debug!(chapters = chapters.len(), "Chapter preview computed");

        DetectChaptersResponse {
            total_chars: char_count(&query.text),
            chapters,
        }
    }
}
