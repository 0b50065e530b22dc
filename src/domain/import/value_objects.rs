//! Import Context - Value Objects

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::ImportError;

/// 章节记录标识
///
/// 取值为构建时间戳（毫秒）加上记录在本次构建中的位置，
/// 只保证在同一次构建内唯一。跨构建的唯一性由存储层负责。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChapterId(i64);

impl ChapterId {
    /// 按构建基准值和位置生成标识
    pub fn for_build(base_millis: i64, position: usize) -> Self {
        Self(base_millis.saturating_add(position as i64))
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ChapterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 分章模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitMode {
    /// 按章节标题识别分章
    #[default]
    Regex,
    /// 全文作为一章
    Single,
}

impl SplitMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SplitMode::Regex => "regex",
            SplitMode::Single => "single",
        }
    }
}

impl FromStr for SplitMode {
    type Err = ImportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "regex" => Ok(SplitMode::Regex),
            "single" => Ok(SplitMode::Single),
            other => Err(ImportError::UnknownMode(other.to_string())),
        }
    }
}

impl std::fmt::Display for SplitMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 源文件编码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextEncoding {
    #[default]
    #[serde(rename = "utf-8")]
    Utf8,
    #[serde(rename = "gbk")]
    Gbk,
}

impl TextEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Gbk => "gbk",
        }
    }
}

impl FromStr for TextEncoding {
    type Err = ImportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(TextEncoding::Utf8),
            "gbk" | "gb2312" | "gb18030" => Ok(TextEncoding::Gbk),
            other => Err(ImportError::UnknownEncoding(other.to_string())),
        }
    }
}

impl std::fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
