#![allow(dead_code, unused_imports)]

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

mod adapter;
mod domain;
mod error;
mod infrastructure;
mod usecase;

use adapter::handler::{self, AppState};
use infrastructure::config::Config;
use infrastructure::kafka_consumer::MessageKafkaConsumer;
use infrastructure::kafka_producer::{
    KafkaMessageProducer, MessagePublisher, NoopMessagePublisher,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Telemetry
    let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());
    infrastructure::telemetry::init_logger(&environment, &log_format);

    // Config
    let config_path =
        std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config/config.yaml".to_string());
    let cfg = Config::load(&config_path)?;

    info!(
        app_name = %cfg.app.name,
        version = %cfg.app.version,
        environment = %cfg.app.environment,
        "starting kafka gateway server"
    );

    // --- Message Publisher: Kafka or Noop fallback ---
    let publisher: Arc<dyn MessagePublisher> = if let Some(ref kafka_cfg) = cfg.kafka {
        info!(brokers = ?kafka_cfg.brokers, topic = %kafka_cfg.topic, "connecting to Kafka");
        let producer = KafkaMessageProducer::new(kafka_cfg)?;
        info!("Kafka producer initialized");
        Arc::new(producer)
    } else {
        info!("Kafka not configured, using Noop message publisher");
        Arc::new(NoopMessagePublisher)
    };

    // --- Kafka consumer (optional, background task) ---
    if let Some(ref kafka_cfg) = cfg.kafka {
        match MessageKafkaConsumer::new(kafka_cfg) {
            Ok(consumer) => {
                info!("kafka consumer initialized, starting background ingestion");
                tokio::spawn(async move {
                    if let Err(e) = consumer.run().await {
                        tracing::error!(error = %e, "kafka consumer stopped with error");
                    }
                });
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to create kafka consumer, message logging disabled");
            }
        }
    }

    // Router
    let state = AppState::new(publisher);
    let app = handler::router(state);

    // REST server
    let rest_addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!("REST server starting on {}", rest_addr);

    let listener = tokio::net::TcpListener::bind(rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
