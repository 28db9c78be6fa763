pub mod publish_json_message;
pub mod publish_text_message;

pub use publish_json_message::PublishJsonMessageUseCase;
pub use publish_text_message::PublishTextMessageUseCase;
