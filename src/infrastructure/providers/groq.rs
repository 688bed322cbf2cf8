//! Groq(OpenAI 호환 chat-completions) provider 어댑터.

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use url::Url;

use crate::application::config::ProviderConfig;
use crate::application::ports::ChatCompletionGateway;
use crate::domain::prompt::ChatPrompt;
use crate::infrastructure::config::resolve_provider_api_key;

use super::api_runner::{first_choice_content, send_json};

pub struct GroqChatClient {
    client: Client,
    endpoint: Url,
    model: String,
    credential: String,
}

impl GroqChatClient {
    /// 자격 증명을 해석해 클라이언트를 만든다. 키가 없으면 여기서 실패한다.
    /// `client`는 호출자가 공유하는 HTTP 클라이언트다.
    pub fn from_config(client: Client, provider: &ProviderConfig) -> Result<Self> {
        let resolution = resolve_provider_api_key(provider);
        let Some(credential) = resolution.credential else {
            bail!(
                "API key not found ({}). Set {} or add it to {}",
                resolution.source.as_deref().unwrap_or("unset"),
                provider.api_key_env(),
                provider.secrets_path()
            );
        };

        Self::new(
            client,
            &provider.api_base(),
            provider.model(),
            credential,
        )
    }

    pub fn new(client: Client, api_base: &str, model: String, credential: String) -> Result<Self> {
        Ok(Self {
            client,
            endpoint: chat_completions_endpoint(api_base)?,
            model,
            credential,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn payload(&self, prompt: &ChatPrompt) -> Value {
        let mut payload = json!({
            "model": self.model,
            "messages": prompt.messages,
            "temperature": prompt.temperature,
        });
        if let Some(max_tokens) = prompt.max_tokens {
            payload["max_tokens"] = json!(max_tokens);
        }
        payload
    }
}

/// `{api_base}/chat/completions` 주소를 만든다.
fn chat_completions_endpoint(api_base: &str) -> Result<Url> {
    let base = format!("{}/", api_base.trim().trim_end_matches('/'));
    Url::parse(&base)
        .and_then(|base| base.join("chat/completions"))
        .with_context(|| format!("invalid api_base: {api_base}"))
}

#[async_trait]
impl ChatCompletionGateway for GroqChatClient {
    fn name(&self) -> &'static str {
        "Groq"
    }

    async fn complete(&self, prompt: &ChatPrompt) -> Result<String> {
        let request = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.credential)
            .json(&self.payload(prompt));

        let response = send_json(self.name(), "request chat completion", request).await?;
        match first_choice_content(&response) {
            Some(content) => Ok(content),
            None => bail!("{}: response has no choices[0].message.content", self.name()),
        }
    }
}
