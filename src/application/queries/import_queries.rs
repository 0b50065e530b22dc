//! Import Queries

/// 检测章节（不生成记录）
#[derive(Debug, Clone)]
pub struct DetectChapters {
    pub text: String,
}
