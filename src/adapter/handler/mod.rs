pub mod error;
pub mod health;
pub mod message_handler;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::infrastructure::kafka_producer::MessagePublisher;
use crate::usecase::{PublishJsonMessageUseCase, PublishTextMessageUseCase};

/// AppState はアプリケーション全体の共有状態を表す。
#[derive(Clone)]
pub struct AppState {
    pub publish_json_uc: Arc<PublishJsonMessageUseCase>,
    pub publish_text_uc: Arc<PublishTextMessageUseCase>,
}

impl AppState {
    pub fn new(publisher: Arc<dyn MessagePublisher>) -> Self {
        Self {
            publish_json_uc: Arc::new(PublishJsonMessageUseCase::new(publisher.clone())),
            publish_text_uc: Arc::new(PublishTextMessageUseCase::new(publisher)),
        }
    }
}

/// REST API ルーターを構築する。
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health / Readiness
        .route("/healthz", get(health::healthz))
        .route("/readyz", get(health::readyz))
        // Publish endpoints
        .route(
            "/api/v1/kafka/publish",
            post(message_handler::publish_json).get(message_handler::publish_text),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// ErrorResponse は統一エラーレスポンス。
#[derive(Debug, serde::Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, serde::Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    pub request_id: String,
    pub details: Vec<ErrorDetail>,
}

#[derive(Debug, serde::Serialize)]
pub struct ErrorDetail {
    pub field: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            error: ErrorBody {
                code: code.to_string(),
                message: message.to_string(),
                request_id: uuid::Uuid::new_v4().to_string(),
                details: vec![],
            },
        }
    }
}
