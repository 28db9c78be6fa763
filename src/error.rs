use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("failed to publish message to kafka: {0}")]
    Publish(String),
}
