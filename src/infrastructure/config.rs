use serde::Deserialize;

/// Application configuration for kafka-gateway server.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub kafka: Option<KafkaConfig>,
}

impl Config {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        Ok(cfg)
    }
}

/// AppConfig はサービス自身のメタ情報を表す。
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default = "default_environment")]
    pub environment: String,
}

fn default_version() -> String {
    "0.1.0".to_string()
}

fn default_environment() -> String {
    "dev".to_string()
}

/// ServerConfig は REST サーバーの待ち受け設定を表す。
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// KafkaConfig は Kafka ブローカー接続の設定を表す。
#[derive(Debug, Clone, Deserialize)]
pub struct KafkaConfig {
    pub brokers: Vec<String>,
    #[serde(default = "default_security_protocol")]
    pub security_protocol: String,
    /// Producer / Consumer 共通のメッセージトピック
    #[serde(default = "default_topic")]
    pub topic: String,
    #[serde(default = "default_consumer_group")]
    pub consumer_group: String,
}

fn default_security_protocol() -> String {
    "PLAINTEXT".to_string()
}

fn default_topic() -> String {
    "messages.v1".to_string()
}

fn default_consumer_group() -> String {
    "myGroup".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config_deserialization() {
        let yaml = r#"
app:
  name: "kafka-gateway"
  version: "0.1.0"
  environment: "dev"
server:
  host: "127.0.0.1"
  port: 8080
kafka:
  brokers:
    - "localhost:9092"
  topic: "messages.v1"
  consumer_group: "myGroup"
"#;
        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.app.name, "kafka-gateway");
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 8080);
        let kafka = cfg.kafka.unwrap();
        assert_eq!(kafka.brokers, vec!["localhost:9092".to_string()]);
        assert_eq!(kafka.topic, "messages.v1");
        assert_eq!(kafka.consumer_group, "myGroup");
        assert_eq!(kafka.security_protocol, "PLAINTEXT");
    }

    #[test]
    fn test_kafka_section_is_optional() {
        let yaml = r#"
app:
  name: "kafka-gateway"
"#;
        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(cfg.kafka.is_none());
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.app.environment, "dev");
    }

    #[test]
    fn test_kafka_config_defaults() {
        let yaml = r#"
brokers:
  - "broker-1:9092"
  - "broker-2:9092"
"#;
        let cfg: KafkaConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.brokers.len(), 2);
        assert_eq!(cfg.topic, "messages.v1");
        assert_eq!(cfg.consumer_group, "myGroup");
        assert_eq!(cfg.security_protocol, "PLAINTEXT");
    }
}
