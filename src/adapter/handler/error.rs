use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use super::ErrorResponse;
use crate::error::GatewayError;

/// GatewayError を HTTP レスポンスに変換する。
impl IntoResponse for GatewayError {
    fn into_response(self) -> axum::response::Response {
        match self {
            GatewayError::Publish(msg) => {
                let err = ErrorResponse::new(
                    "SYS_KAFKA_PUBLISH_FAILED",
                    &format!("メッセージの発行に失敗しました: {}", msg),
                );
                (StatusCode::INTERNAL_SERVER_ERROR, Json(err)).into_response()
            }
        }
    }
}
