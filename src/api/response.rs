use serde::Serialize;
use axum::Json;
use axum::http::StatusCode;

#[derive(Serialize)]
pub struct SuccessResponse<T> {
    pub success: bool,
    pub message: String,
    pub results: T,
}

pub fn success<T: Serialize>(message: &str, results: T) -> (StatusCode, Json<SuccessResponse<T>>) {
    (
        StatusCode::OK,
        Json(SuccessResponse {
            success: true,
            message: message.to_string(),
            results,
        }),
    )
}
