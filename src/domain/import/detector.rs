//! 章节检测器
//!
//! 逐行扫描，遇到标题行关闭当前章节并开启新章节。
//! 第一个标题之前的内容不属于任何章节，在 regex 模式下被丢弃；
//! 这是有意为之的策略，需要保留全文时调用方应改用 single 模式。

use super::entities::char_count;
use super::{ChapterSummary, HeadingMatcher};

/// 扫描过程中的章节草稿
#[derive(Debug)]
struct ChapterDraft {
    index: usize,
    title: String,
    start_line: usize,
    body: String,
}

impl ChapterDraft {
    fn open(index: usize, line: &str, start_line: usize) -> Self {
        Self {
            index,
            title: heading_title(line, index),
            start_line,
            body: String::new(),
        }
    }

    fn append(&mut self, line: &str) {
        self.body.push_str(line);
        self.body.push('\n');
    }

    fn close(self) -> ChapterSummary {
        ChapterSummary {
            index: self.index,
            title: self.title,
            start_line: self.start_line,
            word_count: char_count(&self.body),
        }
    }
}

/// 标题行去除空白后作为标题，为空时使用 "第N章"（N 从 1 开始）
fn heading_title(line: &str, index: usize) -> String {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        format!("第{}章", index + 1)
    } else {
        trimmed.to_string()
    }
}

impl HeadingMatcher {
    /// 使用当前规则集检测章节
    pub fn detect_chapters(&self, text: &str) -> Vec<ChapterSummary> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let mut chapters: Vec<ChapterSummary> = Vec::new();
        let mut current: Option<ChapterDraft> = None;

        for (line_no, line) in text.lines().enumerate() {
            if self.is_heading(line) {
                if let Some(draft) = current.take() {
                    chapters.push(draft.close());
                }
                current = Some(ChapterDraft::open(chapters.len(), line, line_no));
            } else if let Some(draft) = current.as_mut() {
                draft.append(line);
            }
        }

        if let Some(draft) = current {
            chapters.push(draft.close());
        }

        tracing::debug!(chapters = chapters.len(), "Chapter headings detected");

        chapters
    }
}

/// 使用内置规则检测章节
pub fn detect_chapters(text: &str) -> Vec<ChapterSummary> {
    HeadingMatcher::builtin().detect_chapters(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_blank_input() {
        assert!(detect_chapters("").is_empty());
        assert!(detect_chapters("  \n\t\n ").is_empty());
    }

    #[test]
    fn test_no_headings() {
        assert!(detect_chapters("只是一段普通的文字。\n没有任何章节标记。").is_empty());
    }

    #[test]
    fn test_two_chinese_chapters() {
        let text = "第一章 开始\n内容A\n内容B\n第二章 发展\n内容C";
        let chapters = detect_chapters(text);

        assert_eq!(chapters.len(), 2);
        assert_eq!(chapters[0].index, 0);
        assert_eq!(chapters[0].title, "第一章 开始");
        assert_eq!(chapters[0].start_line, 0);
        // "内容A\n内容B\n"
        assert_eq!(chapters[0].word_count, 8);

        assert_eq!(chapters[1].index, 1);
        assert_eq!(chapters[1].title, "第二章 发展");
        assert_eq!(chapters[1].start_line, 3);
        assert_eq!(chapters[1].word_count, 4);
    }

    #[test]
    fn test_latin_chapters() {
        let chapters = detect_chapters("Chapter 1\nHello\nchapter2\nWorld");

        assert_eq!(chapters.len(), 2);
        assert_eq!(chapters[0].title, "Chapter 1");
        assert_eq!(chapters[1].title, "chapter2");
        assert_eq!(chapters[1].start_line, 2);
    }

    #[test]
    fn test_single_heading_title_trimmed() {
        let chapters = detect_chapters("\n  第三章 风起  \n正文");

        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].start_line, 1);
        assert_eq!(chapters[0].title, "第三章 风起");
    }

    #[test]
    fn test_content_before_first_heading_is_dropped() {
        // 第一个标题之前的序言不计入任何章节
        let text = "序言\n作者的话\n第一章\n正文";
        let chapters = detect_chapters(text);

        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].start_line, 2);
        assert_eq!(chapters[0].word_count, 3);
    }

    #[test]
    fn test_heading_without_body() {
        let chapters = detect_chapters("第一章\n第二章\n第三章");

        assert_eq!(chapters.len(), 3);
        assert!(chapters.iter().all(|c| c.word_count == 0));
        let indexes: Vec<usize> = chapters.iter().map(|c| c.index).collect();
        assert_eq!(indexes, vec![0, 1, 2]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let chapters = detect_chapters("第1章 起\r\n甲\r\n第2章 承\r\n乙\r\n");

        assert_eq!(chapters.len(), 2);
        assert_eq!(chapters[0].title, "第1章 起");
        assert_eq!(chapters[1].start_line, 2);
    }

    #[test]
    fn test_heading_title_fallback() {
        assert_eq!(heading_title("   ", 0), "第1章");
        assert_eq!(heading_title("", 4), "第5章");
        assert_eq!(heading_title(" 第九章 ", 4), "第九章");
    }
}
