//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping            GET   健康检查
//! - /api/import/detect   POST  检测章节标题（预览）
//! - /api/import/build    POST  由文本构建章节记录
//! - /api/import/upload   POST  上传 TXT 文档并分章（multipart）

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/import", import_routes())
}

/// Import 路由
fn import_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/detect", post(handlers::detect_chapters))
        .route("/build", post(handlers::build_chapters))
        .route("/upload", post(handlers::upload_document))
}
