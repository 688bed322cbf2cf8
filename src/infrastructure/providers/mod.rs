//! 호스팅 chat-completion provider 모듈.

pub mod groq;
mod api_runner;

pub use api_runner::{build_api_client, first_choice_content};
pub use groq::GroqChatClient;
