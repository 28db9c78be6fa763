use std::sync::Arc;

use crate::error::GatewayError;
use crate::infrastructure::kafka_producer::MessagePublisher;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct PublishTextMessageInput {
    pub message: String,
}

pub struct PublishTextMessageUseCase {
    publisher: Arc<dyn MessagePublisher>,
}

impl PublishTextMessageUseCase {
    pub fn new(publisher: Arc<dyn MessagePublisher>) -> Self {
        Self { publisher }
    }

    pub async fn execute(&self, input: &PublishTextMessageInput) -> Result<(), GatewayError> {
        self.publisher
            .publish_text(&input.message)
            .await
            .map_err(|e| GatewayError::Publish(e.to_string()))?;

        Ok(())
    }
}
