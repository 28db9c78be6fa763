use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use super::AppState;
use crate::domain::entity::user::User;
use crate::usecase::publish_json_message::PublishJsonMessageInput;
use crate::usecase::publish_text_message::PublishTextMessageInput;

/// POST /api/v1/kafka/publish
pub async fn publish_json(
    State(state): State<AppState>,
    Json(user): Json<User>,
) -> impl IntoResponse {
    let input = PublishJsonMessageInput { user };
    match state.publish_json_uc.execute(&input).await {
        Ok(()) => (StatusCode::OK, "Json Message sent to kafka topic").into_response(),
        Err(e) => e.into_response(),
    }
}

/// GET /api/v1/kafka/publish?message=... のクエリパラメーター。
#[derive(Debug, Deserialize)]
pub struct PublishTextParams {
    pub message: String,
}

/// GET /api/v1/kafka/publish
pub async fn publish_text(
    State(state): State<AppState>,
    Query(params): Query<PublishTextParams>,
) -> impl IntoResponse {
    let input = PublishTextMessageInput {
        message: params.message,
    };
    match state.publish_text_uc.execute(&input).await {
        Ok(()) => (StatusCode::OK, "Message sent to the topic").into_response(),
        Err(e) => e.into_response(),
    }
}
