use axum::{
    routing::{get, post},
    Router,
    extract::{DefaultBodyLimit, Multipart, State},
    http::HeaderMap,
    response::IntoResponse,
};
use tower_http::cors::{CorsLayer, Any};
use futures::future;
use tokio::task;

use crate::error::{Result, AppError};
use crate::api::models::{ScanResult, UploadedFile};
use crate::api::response;
use crate::scan::{parse_keywords, scan_bytes};
use crate::AppState;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(liveness_handler))
        .route("/upload", post(upload_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        // Uploads are buffered whole in memory with no declared size cap;
        // axum's 2 MB default would reject ordinary PDFs
        .layer(DefaultBodyLimit::disable())
        .with_state(app_state)
}

async fn liveness_handler() -> &'static str {
    "It's working"
}

async fn upload_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Result<impl IntoResponse> {
    // Auth check runs before any part of the body is read
    let presented_key = headers.get("x-api-key").and_then(|value| value.to_str().ok());
    if presented_key != Some(state.config.api_key.as_str()) {
        tracing::warn!("Rejected upload: missing or invalid API key");
        return Err(AppError::Unauthorized);
    }

    let (keywords, files) = read_upload(multipart).await?;
    tracing::info!("Scanning {} file(s) for {} keyword(s)", files.len(), keywords.len());

    let results = scan_files(files, keywords).await?;

    Ok(response::success(
        "Files uploaded and scanned successfully.",
        results,
    ))
}

/// Buffers the multipart body: the `keywords` field and every `files` part.
/// Fails fast on a missing keywords field or an empty file set, before any
/// scanning starts.
async fn read_upload(mut multipart: Multipart) -> Result<(Vec<String>, Vec<UploadedFile>)> {
    let mut keywords: Option<Vec<String>> = None;
    let mut files: Vec<UploadedFile> = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "keywords" => {
                keywords = Some(parse_keywords(&field.text().await?));
            }
            "files" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().unwrap_or_default().to_string();
                let bytes = field.bytes().await?.to_vec();
                files.push(UploadedFile {
                    filename,
                    content_type,
                    bytes,
                });
            }
            _ => {}
        }
    }

    let keywords = keywords
        .ok_or_else(|| AppError::ValidationError("No keywords were provided.".to_string()))?;

    if files.is_empty() {
        return Err(AppError::ValidationError("No files were uploaded.".to_string()));
    }

    Ok((keywords, files))
}

/// Scans every PDF file concurrently and joins the outcomes in input order.
/// Non-PDF parts are skipped silently; any extraction failure aborts the
/// whole batch.
async fn scan_files(files: Vec<UploadedFile>, keywords: Vec<String>) -> Result<Vec<ScanResult>> {
    let scans = files
        .into_iter()
        .map(|file| scan_one(file, keywords.clone()));

    let outcomes = future::try_join_all(scans).await?;
    Ok(outcomes.into_iter().flatten().collect())
}

async fn scan_one(file: UploadedFile, keywords: Vec<String>) -> Result<Option<ScanResult>> {
    if file.content_type != "application/pdf" {
        tracing::debug!("Skipping non-PDF file: {}", file.filename);
        return Ok(None);
    }

    let filename = file.filename;
    let bytes = file.bytes;
    // pdf parsing is CPU-bound, keep it off the async workers
    let matched = task::spawn_blocking(move || scan_bytes(&bytes, &keywords))
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))??;

    match matched {
        Some(keyword) => {
            tracing::info!("File: {}, Keyword: {}", filename, keyword);
            Ok(Some(ScanResult {
                filename,
                keyword_found: true,
            }))
        }
        None => Ok(None),
    }
}
