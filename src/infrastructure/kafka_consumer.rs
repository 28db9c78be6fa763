use crate::infrastructure::config::KafkaConfig;

/// MessageKafkaConsumer は設定されたトピックを購読し、受信メッセージをログに出力する。
pub struct MessageKafkaConsumer {
    consumer: rdkafka::consumer::StreamConsumer,
}

impl MessageKafkaConsumer {
    /// 新しい MessageKafkaConsumer を作成する。
    pub fn new(config: &KafkaConfig) -> anyhow::Result<Self> {
        use rdkafka::config::ClientConfig;
        use rdkafka::consumer::Consumer;

        let mut client_config = ClientConfig::new();
        client_config.set("bootstrap.servers", config.brokers.join(","));
        client_config.set("group.id", &config.consumer_group);
        client_config.set("security.protocol", &config.security_protocol);
        client_config.set("auto.offset.reset", "earliest");
        client_config.set("enable.auto.commit", "true");

        let consumer: rdkafka::consumer::StreamConsumer = client_config.create()?;
        consumer.subscribe(&[&config.topic])?;

        tracing::info!(
            topic = %config.topic,
            group = %config.consumer_group,
            "message kafka consumer subscribed"
        );

        Ok(Self { consumer })
    }

    /// バックグラウンドでメッセージ取り込みを開始する。
    pub async fn run(&self) -> anyhow::Result<()> {
        use rdkafka::Message;

        loop {
            match self.consumer.recv().await {
                Err(e) => {
                    tracing::error!(error = %e, "message kafka consumer error");
                }
                Ok(msg) => {
                    let payload = match msg.payload() {
                        Some(bytes) => bytes,
                        None => {
                            tracing::warn!("received kafka message with empty payload");
                            continue;
                        }
                    };

                    let text = String::from_utf8_lossy(payload);
                    tracing::info!(
                        topic = %msg.topic(),
                        partition = msg.partition(),
                        offset = msg.offset(),
                        "Message received -> {}",
                        text
                    );
                }
            }
        }
    }
}
