use async_trait::async_trait;

use crate::domain::entity::user::User;

/// MessagePublisher はトピックへのメッセージ発行のためのトレイト。
/// publish は配送確認を待たず、ブローカークライアントへの引き渡し時点で戻る。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePublisher: Send + Sync {
    async fn publish_json(&self, user: &User) -> anyhow::Result<()>;
    async fn publish_text(&self, message: &str) -> anyhow::Result<()>;
    async fn close(&self) -> anyhow::Result<()>;
}

/// NoopMessagePublisher はメッセージを発行しない実装（フォールバック用）。
pub struct NoopMessagePublisher;

#[async_trait]
impl MessagePublisher for NoopMessagePublisher {
    async fn publish_json(&self, _user: &User) -> anyhow::Result<()> {
        tracing::debug!("noop: json message publish skipped");
        Ok(())
    }

    async fn publish_text(&self, _message: &str) -> anyhow::Result<()> {
        tracing::debug!("noop: text message publish skipped");
        Ok(())
    }

    async fn close(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

/// KafkaMessageProducer は rdkafka FutureProducer を使った Kafka プロデューサー。
pub struct KafkaMessageProducer {
    producer: rdkafka::producer::FutureProducer,
    topic: String,
}

impl KafkaMessageProducer {
    /// 新しい KafkaMessageProducer を作成する。
    pub fn new(config: &crate::infrastructure::config::KafkaConfig) -> anyhow::Result<Self> {
        use rdkafka::config::ClientConfig;

        let mut client_config = ClientConfig::new();
        client_config.set("bootstrap.servers", config.brokers.join(","));
        client_config.set("security.protocol", &config.security_protocol);
        client_config.set("acks", "all");
        client_config.set("message.timeout.ms", "5000");

        let producer: rdkafka::producer::FutureProducer = client_config.create()?;

        Ok(Self {
            producer,
            topic: config.topic.clone(),
        })
    }

    /// レコードをキーなしで enqueue し、配送結果の監視はバックグラウンドに任せる。
    fn enqueue(&self, payload: String) -> anyhow::Result<()> {
        use rdkafka::producer::FutureRecord;

        let record = FutureRecord::<(), _>::to(&self.topic).payload(&payload);

        let delivery = self
            .producer
            .send_result(record)
            .map_err(|(err, _)| anyhow::anyhow!("failed to enqueue message: {}", err))?;

        let topic = self.topic.clone();
        tokio::spawn(async move {
            match delivery.await {
                Ok(Ok(_)) => {}
                Ok(Err((err, _))) => {
                    tracing::error!(topic = %topic, error = %err, "message delivery failed");
                }
                Err(_) => {
                    tracing::warn!(topic = %topic, "message delivery result dropped");
                }
            }
        });

        Ok(())
    }
}

#[async_trait]
impl MessagePublisher for KafkaMessageProducer {
    async fn publish_json(&self, user: &User) -> anyhow::Result<()> {
        let payload = serde_json::to_string(user)?;
        tracing::info!(topic = %self.topic, "Message sent {}", payload);
        self.enqueue(payload)
    }

    async fn publish_text(&self, message: &str) -> anyhow::Result<()> {
        tracing::info!(topic = %self.topic, "Message sent {}", message);
        self.enqueue(message.to_string())
    }

    async fn close(&self) -> anyhow::Result<()> {
        use rdkafka::producer::Producer;
        self.producer.flush(std::time::Duration::from_secs(5))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct InMemoryProducer {
        messages: Mutex<Vec<Vec<u8>>>,
        should_fail: bool,
    }

    impl InMemoryProducer {
        fn new() -> Self {
            Self {
                messages: Mutex::new(Vec::new()),
                should_fail: false,
            }
        }

        fn with_error() -> Self {
            Self {
                messages: Mutex::new(Vec::new()),
                should_fail: true,
            }
        }
    }

    #[async_trait]
    impl MessagePublisher for InMemoryProducer {
        async fn publish_json(&self, user: &User) -> anyhow::Result<()> {
            if self.should_fail {
                return Err(anyhow::anyhow!("broker connection refused"));
            }
            let payload = serde_json::to_vec(user)?;
            self.messages.lock().unwrap().push(payload);
            Ok(())
        }

        async fn publish_text(&self, message: &str) -> anyhow::Result<()> {
            if self.should_fail {
                return Err(anyhow::anyhow!("broker connection refused"));
            }
            self.messages.lock().unwrap().push(message.as_bytes().to_vec());
            Ok(())
        }

        async fn close(&self) -> anyhow::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_publish_json_message() {
        let producer = InMemoryProducer::new();
        let user = User {
            id: None,
            name: "Alice".to_string(),
        };

        let result = producer.publish_json(&user).await;
        assert!(result.is_ok());

        let messages = producer.messages.lock().unwrap();
        assert_eq!(messages.len(), 1);

        let payload: serde_json::Value = serde_json::from_slice(&messages[0]).unwrap();
        assert_eq!(payload["name"], "Alice");
        assert!(payload.get("id").is_none());
    }

    #[tokio::test]
    async fn test_publish_text_message() {
        let producer = InMemoryProducer::new();

        let result = producer.publish_text("hello kafka").await;
        assert!(result.is_ok());

        let messages = producer.messages.lock().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0], b"hello kafka");
    }

    #[tokio::test]
    async fn test_publish_error() {
        let producer = InMemoryProducer::with_error();
        let user = User {
            id: Some(1),
            name: "Bob".to_string(),
        };

        let result = producer.publish_json(&user).await;
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("broker connection refused"));
    }

    #[tokio::test]
    async fn test_noop_publisher() {
        let publisher = NoopMessagePublisher;
        let user = User {
            id: None,
            name: "Alice".to_string(),
        };

        assert!(publisher.publish_json(&user).await.is_ok());
        assert!(publisher.publish_text("hello").await.is_ok());
        assert!(publisher.close().await.is_ok());
    }
}
