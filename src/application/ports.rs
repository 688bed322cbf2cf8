//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use std::path::PathBuf;

use anyhow::Result;
use async_trait::async_trait;

use crate::application::config::Config;
use crate::domain::feedback::PolarityScores;
use crate::domain::prompt::ChatPrompt;
use crate::domain::view::PageView;

/// 설정 로딩/점검을 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    fn load(&self) -> Result<Config>;
    fn inspect_pretty_json(&self) -> Result<String>;
    /// 기본 설정 템플릿을 만들고 그 경로를 반환한다.
    fn write_template(&self) -> Result<PathBuf>;
}

/// 호스팅된 chat-completion API 호출 포트.
#[async_trait]
pub trait ChatCompletionGateway: Send + Sync {
    fn name(&self) -> &'static str;
    /// 첫 번째 응답 메시지 본문을 반환한다.
    async fn complete(&self, prompt: &ChatPrompt) -> Result<String>;
}

/// 자격 증명을 해석해 게이트웨이를 생성하는 팩토리 포트.
/// 자격 증명이 없으면 생성 단계에서 실패한다.
pub trait GatewayFactory: Send + Sync {
    fn build(&self, config: &Config) -> Result<Box<dyn ChatCompletionGateway>>;
}

/// 렉시콘 기반 극성 점수기 포트.
pub trait SentimentScorer: Send + Sync {
    fn polarity_scores(&self, text: &str) -> PolarityScores;
}

/// 언어 인지 문장 분리기 포트.
pub trait SentenceSplitter: Send + Sync {
    fn split(&self, text: &str) -> Vec<String>;
}

/// 로컬 리소스에서 읽어 들인 점수기 + 문장 분리기 묶음.
pub struct NlpEngine {
    pub scorer: Box<dyn SentimentScorer>,
    pub splitter: Box<dyn SentenceSplitter>,
}

/// 로컬 언어 리소스(렉시콘/약어 목록) 로딩 포트.
pub trait NlpResourceLoader: Send + Sync {
    fn load(&self, config: &Config) -> Result<NlpEngine>;
}

/// 뷰 모델 렌더링 포트(HTML/터미널).
pub trait PageRenderer: Send + Sync {
    fn render(&self, view: &PageView) -> String;
}

/// 콘솔/로그 출력 추상화 포트.
pub trait Reporter: Send + Sync {
    fn section(&self, name: &str);
    fn kv(&self, key: &str, value: &str);
    fn status(&self, scope: &str, message: &str);
    fn raw(&self, line: &str);
}
