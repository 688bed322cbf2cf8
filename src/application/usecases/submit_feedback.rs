//! 사용자 동작(제출/초기화)을 세션 상태에 반영하고 새 뷰 모델을 만드는 유스케이스.

use tracing::{error, info, warn};

use crate::application::config::Config;
use crate::application::ports::GatewayFactory;
use crate::application::usecases::analyze_sentiment::SentimentAggregator;
use crate::application::usecases::classify_feedback::ClassifyFeedbackUseCase;
use crate::domain::feedback::{FeedbackText, Variant};
use crate::domain::session::{Notice, SessionAction, SessionState};
use crate::domain::view::{PageLabels, PageView};

/// 입력 수집 → (감정 분석) → 프롬프트 → 외부 호출 → 뷰 모델 순서를 한 번에 수행한다.
pub struct SubmitFeedbackUseCase<'a> {
    pub variant: Variant,
    pub config: &'a Config,
    pub gateway_factory: &'a dyn GatewayFactory,
    /// analyzer 변형에서만 존재한다.
    pub sentiment: Option<&'a SentimentAggregator>,
}

impl<'a> SubmitFeedbackUseCase<'a> {
    pub async fn execute(&self, state: &mut SessionState, action: SessionAction) -> PageView {
        match action {
            SessionAction::Reset => self.reset(state),
            SessionAction::Submit(text) => self.submit(state, text).await,
        }
        PageView::build(self.variant, state)
    }

    fn reset(&self, state: &mut SessionState) {
        if !self.variant.supports_reset() {
            warn!(variant = self.variant.code(), "reset is not available for this variant");
            return;
        }
        state.clear();
    }

    async fn submit(&self, state: &mut SessionState, text: FeedbackText) {
        let labels = PageLabels::for_variant(self.variant);

        if text.is_blank() {
            // classifier 화면은 직전 결과를 그대로 두고, analyzer 화면은 결과를 남기지 않는다.
            if !self.variant.supports_reset() {
                state.result = None;
                state.sentiment = None;
            }
            state.text = text;
            state.notice = Some(Notice::Warning(labels.empty_warning.to_string()));
            return;
        }

        state.begin_submission(text.clone());

        let gateway = match self.gateway_factory.build(self.config) {
            Ok(gateway) => gateway,
            Err(err) => {
                error!(error = %format!("{err:#}"), "classification client unavailable");
                state.notice = Some(Notice::Fatal(format!("{err:#}")));
                return;
            }
        };

        if self.variant.includes_sentiment()
            && let Some(aggregator) = self.sentiment
        {
            state.sentiment = Some(aggregator.analyze(text.as_str()));
        }

        let result = ClassifyFeedbackUseCase {
            gateway: gateway.as_ref(),
        }
        .execute(self.variant, &text)
        .await;

        info!(
            variant = self.variant.code(),
            failed = result.failed,
            "submission finished"
        );
        state.result = Some(result);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::Mutex;

    use anyhow::{Result, bail};
    use async_trait::async_trait;

    use super::*;
    use crate::application::ports::{
        ChatCompletionGateway, NlpEngine, SentenceSplitter, SentimentScorer,
    };
    use crate::domain::feedback::{ClassificationResult, PolarityScores};
    use crate::domain::prompt::ChatPrompt;

    #[derive(Default)]
    struct CallLog {
        prompts: Mutex<Vec<ChatPrompt>>,
    }

    struct FakeGateway {
        log: Arc<CallLog>,
        fail: bool,
    }

    #[async_trait]
    impl ChatCompletionGateway for FakeGateway {
        fn name(&self) -> &'static str {
            "fake"
        }

        async fn complete(&self, prompt: &ChatPrompt) -> Result<String> {
            self.log.prompts.lock().unwrap().push(prompt.clone());
            if self.fail {
                bail!("connection refused");
            }
            Ok("Tipo: Feedback táctico".to_string())
        }
    }

    enum Mode {
        Ok,
        ApiFailure,
        MissingCredential,
    }

    struct FakeFactory {
        log: Arc<CallLog>,
        mode: Mode,
    }

    impl FakeFactory {
        fn new(mode: Mode) -> Self {
            Self {
                log: Arc::new(CallLog::default()),
                mode,
            }
        }

        fn calls(&self) -> usize {
            self.log.prompts.lock().unwrap().len()
        }
    }

    impl GatewayFactory for FakeFactory {
        fn build(&self, _config: &Config) -> Result<Box<dyn ChatCompletionGateway>> {
            match self.mode {
                Mode::MissingCredential => bail!("API key not found (env:GROQ_API_KEY (missing))"),
                Mode::Ok | Mode::ApiFailure => Ok(Box::new(FakeGateway {
                    log: self.log.clone(),
                    fail: matches!(self.mode, Mode::ApiFailure),
                })),
            }
        }
    }

    struct FlatScorer;

    impl SentimentScorer for FlatScorer {
        fn polarity_scores(&self, _text: &str) -> PolarityScores {
            PolarityScores {
                neg: 0.0,
                neu: 1.0,
                pos: 0.0,
                compound: 0.0,
            }
        }
    }

    struct LineSplitter;

    impl SentenceSplitter for LineSplitter {
        fn split(&self, text: &str) -> Vec<String> {
            text.lines().map(str::to_string).collect()
        }
    }

    fn aggregator() -> SentimentAggregator {
        SentimentAggregator::new(
            NlpEngine {
                scorer: Box::new(FlatScorer),
                splitter: Box::new(LineSplitter),
            },
            8,
        )
    }

    #[tokio::test]
    async fn blank_input_warns_without_calling_out() {
        let config = Config::default();
        let agg = aggregator();
        for variant in [Variant::Classifier, Variant::Analyzer] {
            let factory = FakeFactory::new(Mode::Ok);
            let use_case = SubmitFeedbackUseCase {
                variant,
                config: &config,
                gateway_factory: &factory,
                sentiment: Some(&agg),
            };
            let mut state = SessionState::default();
            let view = use_case
                .execute(&mut state, SessionAction::Submit(FeedbackText::new("  \n ")))
                .await;

            assert_eq!(factory.calls(), 0);
            assert!(matches!(view.notice, Some(Notice::Warning(_))));
            assert!(view.classification.is_none());
        }
    }

    #[tokio::test]
    async fn submit_issues_exactly_one_call_with_verbatim_text() {
        let config = Config::default();
        let factory = FakeFactory::new(Mode::Ok);
        let use_case = SubmitFeedbackUseCase {
            variant: Variant::Classifier,
            config: &config,
            gateway_factory: &factory,
            sentiment: None,
        };
        let text = "Tu código está desordenado; yo lo habría hecho distinto.";
        let mut state = SessionState::default();
        let view = use_case
            .execute(&mut state, SessionAction::Submit(FeedbackText::new(text)))
            .await;

        assert_eq!(factory.calls(), 1);
        let prompts = factory.log.prompts.lock().unwrap();
        assert!(prompts[0].user_content().unwrap().contains(text));
        assert_eq!(
            view.classification,
            Some(ClassificationResult::answer("Tipo: Feedback táctico"))
        );
        assert_eq!(view.text, text);
        assert!(view.notice.is_none());
    }

    #[tokio::test]
    async fn analyzer_attaches_sentiment_report() {
        let config = Config::default();
        let factory = FakeFactory::new(Mode::Ok);
        let agg = aggregator();
        let use_case = SubmitFeedbackUseCase {
            variant: Variant::Analyzer,
            config: &config,
            gateway_factory: &factory,
            sentiment: Some(&agg),
        };
        let mut state = SessionState::default();
        let view = use_case
            .execute(
                &mut state,
                SessionAction::Submit(FeedbackText::new("uno\ndos")),
            )
            .await;

        let sentiment = view.sentiment.expect("sentiment view");
        assert_eq!(sentiment.sentences.len(), 2);
        assert_eq!(sentiment.gauge.value, 50.0);
        assert_eq!(factory.calls(), 1);
    }

    #[tokio::test]
    async fn api_failure_is_rendered_inline() {
        let config = Config::default();
        let factory = FakeFactory::new(Mode::ApiFailure);
        let use_case = SubmitFeedbackUseCase {
            variant: Variant::Classifier,
            config: &config,
            gateway_factory: &factory,
            sentiment: None,
        };
        let mut state = SessionState::default();
        let view = use_case
            .execute(&mut state, SessionAction::Submit(FeedbackText::new("hola")))
            .await;

        let result = view.classification.expect("inline error result");
        assert!(result.failed);
        assert_eq!(result.text, "Error analyzing text: connection refused");
        assert!(view.notice.is_none());
    }

    #[tokio::test]
    async fn missing_credential_stops_before_any_call() {
        let config = Config::default();
        let factory = FakeFactory::new(Mode::MissingCredential);
        let use_case = SubmitFeedbackUseCase {
            variant: Variant::Classifier,
            config: &config,
            gateway_factory: &factory,
            sentiment: None,
        };
        let mut state = SessionState::default();
        let view = use_case
            .execute(&mut state, SessionAction::Submit(FeedbackText::new("hola")))
            .await;

        assert_eq!(factory.calls(), 0);
        assert!(matches!(view.notice, Some(Notice::Fatal(ref msg)) if msg.contains("API key")));
        assert!(view.classification.is_none());
    }

    #[tokio::test]
    async fn reset_clears_text_and_result() {
        let config = Config::default();
        let factory = FakeFactory::new(Mode::Ok);
        let use_case = SubmitFeedbackUseCase {
            variant: Variant::Classifier,
            config: &config,
            gateway_factory: &factory,
            sentiment: None,
        };
        let mut state = SessionState::default();
        use_case
            .execute(&mut state, SessionAction::Submit(FeedbackText::new("hola")))
            .await;
        assert!(state.result.is_some());

        let view = use_case.execute(&mut state, SessionAction::Reset).await;
        assert_eq!(view.text, "");
        assert!(view.classification.is_none());
        assert_eq!(state, SessionState::default());
    }

    #[tokio::test]
    async fn blank_resubmit_keeps_previous_classifier_result() {
        let config = Config::default();
        let factory = FakeFactory::new(Mode::Ok);
        let use_case = SubmitFeedbackUseCase {
            variant: Variant::Classifier,
            config: &config,
            gateway_factory: &factory,
            sentiment: None,
        };
        let mut state = SessionState::default();
        use_case
            .execute(&mut state, SessionAction::Submit(FeedbackText::new("hola")))
            .await;
        let view = use_case
            .execute(&mut state, SessionAction::Submit(FeedbackText::new("")))
            .await;

        assert_eq!(factory.calls(), 1);
        assert!(view.classification.is_some());
        assert!(matches!(view.notice, Some(Notice::Warning(_))));
    }
}
