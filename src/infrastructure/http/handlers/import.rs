//! Import HTTP Handlers

use axum::{
    extract::{Multipart, State},
    Json,
};
use std::path::PathBuf;
use std::sync::Arc;

use crate::application::{
    BuildChapterList, DetectChapters, DetectChaptersResponse, ImportDocument,
    ImportDocumentResponse,
};
use crate::domain::{ChapterRecord, SplitMode, TextEncoding};
use crate::infrastructure::http::dto::{ApiResponse, BuildChaptersRequest, DetectChaptersRequest};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 检测章节标题（预览）
pub async fn detect_chapters(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DetectChaptersRequest>,
) -> Json<ApiResponse<DetectChaptersResponse>> {
    let response = state
        .detect_chapters_handler
        .handle(DetectChapters { text: request.text });

    Json(ApiResponse::success(response))
}

/// 由文本构建章节记录
pub async fn build_chapters(
    State(state): State<Arc<AppState>>,
    Json(request): Json<BuildChaptersRequest>,
) -> Json<ApiResponse<Vec<ChapterRecord>>> {
    let command = BuildChapterList {
        text: request.text,
        mode: request.mode.unwrap_or(state.import.default_mode),
        detected_chapters: request.detected_chapters,
    };

    Json(ApiResponse::success(state.build_chapters_handler.handle(command)))
}

/// 上传 TXT 文档并分章
///
/// multipart 字段:
/// - `file`: 文档内容（必填）
/// - `encoding`: `utf-8` | `gbk`（可选）
/// - `mode`: `regex` | `single`（可选）
pub async fn upload_document(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<ImportDocumentResponse>>, ApiError> {
    let mut bytes: Option<Vec<u8>> = None;
    let mut filename: Option<String> = None;
    let mut encoding: Option<TextEncoding> = None;
    let mut mode: Option<SplitMode> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        ApiError::BadRequest(format!("Failed to read multipart field: {}", e))
    })? {
        let field_name = field.name().unwrap_or_default().to_string();

        match field_name.as_str() {
            "file" => {
                filename = field.file_name().map(|s| s.to_string());
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read file: {}", e)))?;
                bytes = Some(data.to_vec());
            }
            "encoding" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read encoding: {}", e)))?;
                encoding = Some(value.parse()?);
            }
            "mode" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read mode: {}", e)))?;
                mode = Some(value.parse()?);
            }
            _ => {}
        }
    }

    let bytes = bytes.ok_or_else(|| ApiError::BadRequest("File is required".to_string()))?;

    let source_name = filename
        .as_ref()
        .and_then(|f| {
            PathBuf::from(f)
                .file_name()
                .and_then(|s| s.to_str())
                .map(|s| s.to_string())
        })
        .unwrap_or_else(|| "Untitled.txt".to_string());

    let command = ImportDocument {
        source_name,
        bytes,
        encoding: encoding.unwrap_or(state.import.default_encoding),
        mode: mode.unwrap_or(state.import.default_mode),
    };

    let response = state.import_document_handler.handle(command)?;

    Ok(Json(ApiResponse::success(response)))
}
