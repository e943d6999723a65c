pub mod api;
pub mod ollama;

pub use api::{ApiClient, ChatReply, ReplySource};
pub use ollama::OllamaClient;
