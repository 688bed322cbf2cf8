//! 피드백 한 건을 외부 모델로 분류하는 유스케이스.

use tracing::{info, warn};

use crate::application::ports::ChatCompletionGateway;
use crate::domain::feedback::{ClassificationResult, FeedbackText, Variant};
use crate::domain::prompt::build_prompt;

/// 프롬프트 구성 → 호출 1회 → 표시용 결과 변환.
pub struct ClassifyFeedbackUseCase<'a> {
    pub gateway: &'a dyn ChatCompletionGateway,
}

impl<'a> ClassifyFeedbackUseCase<'a> {
    /// 호출 실패는 재시도 없이 `Error analyzing text: ...` 문자열로 바뀐다.
    pub async fn execute(&self, variant: Variant, text: &FeedbackText) -> ClassificationResult {
        let prompt = build_prompt(variant, text);
        info!(
            provider = self.gateway.name(),
            variant = variant.code(),
            words = text.word_count(),
            "requesting classification"
        );

        match self.gateway.complete(&prompt).await {
            Ok(content) => ClassificationResult::answer(content),
            Err(err) => {
                warn!(provider = self.gateway.name(), error = %format!("{err:#}"), "classification failed");
                ClassificationResult::from_error(&err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use anyhow::{Result, bail};
    use async_trait::async_trait;

    use super::*;
    use crate::domain::prompt::ChatPrompt;

    struct RecordingGateway {
        prompts: Mutex<Vec<ChatPrompt>>,
        fail: bool,
    }

    #[async_trait]
    impl ChatCompletionGateway for RecordingGateway {
        fn name(&self) -> &'static str {
            "recording"
        }

        async fn complete(&self, prompt: &ChatPrompt) -> Result<String> {
            self.prompts.lock().unwrap().push(prompt.clone());
            if self.fail {
                bail!("Groq: request chat completion failed (401 Unauthorized): invalid api key");
            }
            Ok("Categoría: Táctica".to_string())
        }
    }

    #[tokio::test]
    async fn returns_model_text_verbatim() {
        let gateway = RecordingGateway {
            prompts: Mutex::new(Vec::new()),
            fail: false,
        };
        let result = ClassifyFeedbackUseCase { gateway: &gateway }
            .execute(Variant::Classifier, &FeedbackText::new("Buen trabajo"))
            .await;

        assert_eq!(result, ClassificationResult::answer("Categoría: Táctica"));
        let prompts = gateway.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].user_content().unwrap().contains("Buen trabajo"));
    }

    #[tokio::test]
    async fn failure_becomes_inline_error_string() {
        let gateway = RecordingGateway {
            prompts: Mutex::new(Vec::new()),
            fail: true,
        };
        let result = ClassifyFeedbackUseCase { gateway: &gateway }
            .execute(Variant::Analyzer, &FeedbackText::new("Buen trabajo"))
            .await;

        assert!(result.failed);
        assert!(result.text.starts_with("Error analyzing text: "));
        assert!(result.text.contains("401 Unauthorized"));
        assert_eq!(gateway.prompts.lock().unwrap().len(), 1);
    }
}
