//! 변형별 시작 전 점검(자격 증명/언어 리소스)과 실행 준비 유스케이스.

use anyhow::{Context, Result};
use tracing::info;

use crate::application::config::Config;
use crate::application::ports::{ConfigRepository, GatewayFactory, NlpResourceLoader};
use crate::application::usecases::analyze_sentiment::SentimentAggregator;
use crate::domain::feedback::Variant;

/// 시작 점검을 통과한 실행 준비물.
pub struct PreparedVariant {
    pub variant: Variant,
    pub config: Config,
    pub sentiment: Option<SentimentAggregator>,
}

pub struct PrepareVariantUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
    pub gateway_factory: &'a dyn GatewayFactory,
    pub nlp_loader: &'a dyn NlpResourceLoader,
}

impl<'a> PrepareVariantUseCase<'a> {
    /// analyzer는 자격 증명과 로컬 리소스가 모두 있어야 시작할 수 있다.
    /// classifier는 자격 증명을 제출 시점에 해석하므로 여기서 검사하지 않는다.
    pub fn execute(&self, variant: Variant) -> Result<PreparedVariant> {
        let config = self.config_repo.load()?;

        let sentiment = match variant {
            Variant::Classifier => None,
            Variant::Analyzer => {
                self.gateway_factory
                    .build(&config)
                    .context("analyzer cannot start without an API key")?;
                let engine = self
                    .nlp_loader
                    .load(&config)
                    .context("analyzer cannot start without local language resources")?;
                Some(SentimentAggregator::new(
                    engine,
                    config.sentiment_cache_capacity(),
                ))
            }
        };

        info!(variant = variant.code(), "variant ready");
        Ok(PreparedVariant {
            variant,
            config,
            sentiment,
        })
    }
}
