//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::domain::{ChapterSummary, SplitMode};

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

// ============================================================================
// Import DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct DetectChaptersRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct BuildChaptersRequest {
    #[serde(default)]
    pub text: String,
    /// 未指定时使用配置中的默认模式
    #[serde(default)]
    pub mode: Option<SplitMode>,
    #[serde(default)]
    pub detected_chapters: Option<Vec<ChapterSummary>>,
}
