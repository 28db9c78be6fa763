use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::error::GatewayError;
use crate::infrastructure::kafka_producer::MessagePublisher;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct PublishJsonMessageInput {
    pub user: User,
}

pub struct PublishJsonMessageUseCase {
    publisher: Arc<dyn MessagePublisher>,
}

impl PublishJsonMessageUseCase {
    pub fn new(publisher: Arc<dyn MessagePublisher>) -> Self {
        Self { publisher }
    }

    pub async fn execute(&self, input: &PublishJsonMessageInput) -> Result<(), GatewayError> {
        self.publisher
            .publish_json(&input.user)
            .await
            .map_err(|e| GatewayError::Publish(e.to_string()))?;

        Ok(())
    }
}
