//! `vader_sentiment` 크레이트에 내장된 전체 VADER 렉시콘 점수기.

use vader_sentiment::SentimentIntensityAnalyzer;

use super::lexicon::round_to;
use crate::application::ports::SentimentScorer;
use crate::domain::feedback::PolarityScores;

/// 업스트림 렉시콘(약 7,500개 항목)과 관용구/이모지 규칙을 그대로 쓴다.
/// 데이터 디렉터리에 렉시콘 파일이 없을 때의 기본 점수기.
pub struct EmbeddedVaderScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl EmbeddedVaderScorer {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for EmbeddedVaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for EmbeddedVaderScorer {
    fn polarity_scores(&self, text: &str) -> PolarityScores {
        let scores = self.analyzer.polarity_scores(text);
        let score = |key: &str| scores.get(key).copied().unwrap_or_default();
        PolarityScores {
            neg: round_to(score("neg"), 3),
            neu: round_to(score("neu"), 3),
            pos: round_to(score("pos"), 3),
            compound: round_to(score("compound"), 4),
        }
    }
}
