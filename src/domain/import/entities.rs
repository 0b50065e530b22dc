//! Import Context - Entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ChapterId;

/// 章节检测结果
///
/// 不变量:
/// - index 从 0 开始连续，按标题在原文中出现的顺序分配
/// - start_line 为标题所在行（0-based）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterSummary {
    /// 章节序号
    pub index: usize,
    /// 章节标题（已去除首尾空白）
    pub title: String,
    /// 标题所在行
    pub start_line: usize,
    /// 正文累计字符数（不含标题行）
    pub word_count: usize,
}

/// 章节状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChapterStatus {
    #[default]
    Draft,
    Published,
}

impl ChapterStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChapterStatus::Draft => "draft",
            ChapterStatus::Published => "published",
        }
    }
}

/// 章节记录 - 导入结果，交给小说管理模块保存和编辑
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterRecord {
    pub id: ChapterId,
    pub title: String,
    /// 简介，导入时留空，供后续手动编辑
    pub description: String,
    pub content: String,
    /// 字符数（中文没有空格分词，按字符计）
    pub word_count: usize,
    pub status: ChapterStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ChapterRecord {
    /// 创建草稿章节，字数总是由 content 重新计算
    pub fn draft(
        id: ChapterId,
        title: impl Into<String>,
        content: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        let content = content.into();
        Self {
            id,
            title: title.into(),
            description: String::new(),
            word_count: char_count(&content),
            content,
            status: ChapterStatus::Draft,
            created_at: now,
            updated_at: now,
        }
    }
}

/// 字符数（按 Unicode 标量计）
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}
