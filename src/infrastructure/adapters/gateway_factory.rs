//! chat-completion 게이트웨이 팩토리 어댑터.

use anyhow::Result;
use reqwest::Client;

use crate::application::config::Config;
use crate::application::ports::{ChatCompletionGateway, GatewayFactory};
use crate::infrastructure::providers::{GroqChatClient, build_api_client};

/// 설정의 provider 섹션으로 Groq 클라이언트를 만든다.
/// HTTP 클라이언트(연결 풀)는 한 번만 만들고, 자격 증명은 빌드마다 다시 해석한다.
#[derive(Clone)]
pub struct GroqGatewayFactory {
    client: Client,
}

impl GroqGatewayFactory {
    pub fn new() -> Self {
        Self::with_client(build_api_client())
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for GroqGatewayFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl GatewayFactory for GroqGatewayFactory {
    fn build(&self, config: &Config) -> Result<Box<dyn ChatCompletionGateway>> {
        let client = GroqChatClient::from_config(self.client.clone(), &config.provider)?;
        Ok(Box::new(client))
    }
}
