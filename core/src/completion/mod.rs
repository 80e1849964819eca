//! The outbound completion seam. Concrete clients live in `taskgate-plugins`.

pub mod models;
pub mod r#trait;

pub use models::{
    ChatChoice, ChatCompletionReply, ChatCompletionRequest, ChatMessage, ChatReplyMessage,
    LlmResponse,
};
pub use r#trait::CompletionClient;
