//! 章节正文提取
//!
//! 根据章节起始行重新切分原文，不依赖检测阶段累计的正文，
//! 因此也适用于用户手动调整过边界的章节列表。

use super::ChapterSummary;

/// 将原文按行切分
pub fn split_lines(text: &str) -> Vec<&str> {
    text.lines().collect()
}

/// 提取章节正文
///
/// 范围为 `[summary.start_line, 下一章 start_line)`，最后一章延伸到文末。
/// 标题行本身是正文的第一行。越界或倒置的边界会被收敛到文档范围内。
pub fn extract_body(summary: &ChapterSummary, lines: &[&str], all: &[ChapterSummary]) -> String {
    let end = all
        .iter()
        .find(|c| c.index == summary.index + 1)
        .map(|next| next.start_line)
        .unwrap_or(lines.len());

    let start = summary.start_line.min(lines.len());
    let end = end.clamp(start, lines.len());

    lines[start..end].join("\n").trim().to_string()
}
