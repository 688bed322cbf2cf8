//! 피드백 도메인 엔티티/값 객체.

use serde::{Deserialize, Serialize};

/// 서로 독립적인 두 가지 화면/파이프라인 변형.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// 분류 + 감정 + 개선 제안(텍스트만)
    Classifier,
    /// 분류 + 근거 + 감정 분석 + 재작성 제안, 감정 게이지 포함
    Analyzer,
}

impl Variant {
    /// CLI/설정용 문자열을 변형으로 변환한다.
    pub fn from_name(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "classifier" | "a" => Some(Self::Classifier),
            "analyzer" | "b" => Some(Self::Analyzer),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Classifier => "classifier",
            Self::Analyzer => "analyzer",
        }
    }

    /// 문장 단위 감정 분석을 수행하는 변형인지 여부.
    pub fn includes_sentiment(self) -> bool {
        matches!(self, Self::Analyzer)
    }

    /// 초기화(reset) 버튼을 노출하는 변형인지 여부.
    pub fn supports_reset(self) -> bool {
        matches!(self, Self::Classifier)
    }
}

/// 사용자가 입력한 피드백 원문.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackText(String);

impl FeedbackText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 공백 제거 후 비어 있으면 제출 불가로 본다.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// 공백 기준 단어 수.
    pub fn word_count(&self) -> usize {
        self.0.split_whitespace().count()
    }
}

/// 외부 모델의 응답 텍스트. 구조를 해석하지 않고 표시 전용으로 다룬다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub text: String,
    /// 호출 실패로 만들어진 오류 문자열인지 여부
    pub failed: bool,
}

pub const CLASSIFICATION_ERROR_PREFIX: &str = "Error analyzing text: ";

impl ClassificationResult {
    pub fn answer(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            failed: false,
        }
    }

    /// 호출 실패를 사용자 표시용 문자열로 변환한다.
    pub fn from_error(err: &anyhow::Error) -> Self {
        Self {
            text: format!("{CLASSIFICATION_ERROR_PREFIX}{err:#}"),
            failed: true,
        }
    }
}

/// 렉시콘 점수기의 원시 출력.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PolarityScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

impl PolarityScores {
    /// 극성 = compound 점수.
    pub fn polarity(&self) -> f64 {
        self.compound
    }

    /// 주관성 = (pos + neg) / 2. 표준 정의가 아니지만 기존 결과와의 호환을 위해 유지한다.
    pub fn subjectivity(&self) -> f64 {
        (self.pos + self.neg) / 2.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceSentiment {
    pub text: String,
    pub polarity: f64,
    pub subjectivity: f64,
}

/// 전체 텍스트 점수와 문장별 점수를 함께 담는 감정 리포트.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentReport {
    pub overall_polarity: f64,
    pub overall_subjectivity: f64,
    /// 원문 순서를 유지한다.
    pub sentences: Vec<SentenceSentiment>,
}

impl SentimentReport {
    /// 전체 점수와 문장별 점수를 조립한다.
    /// 전체 점수는 문장 점수의 평균이 아니라 원문 전체를 다시 점수화한 값이다.
    pub fn assemble(overall: PolarityScores, sentences: Vec<(String, PolarityScores)>) -> Self {
        Self {
            overall_polarity: overall.polarity(),
            overall_subjectivity: overall.subjectivity(),
            sentences: sentences
                .into_iter()
                .map(|(text, scores)| SentenceSentiment {
                    text,
                    polarity: scores.polarity(),
                    subjectivity: scores.subjectivity(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_count_splits_on_any_whitespace() {
        let text = FeedbackText::new("  uno\tdos\n tres  ");
        assert_eq!(text.word_count(), 3);
        assert_eq!(FeedbackText::default().word_count(), 0);
    }

    #[test]
    fn whitespace_only_is_blank() {
        assert!(FeedbackText::new(" \n\t ").is_blank());
        assert!(!FeedbackText::new(" hola ").is_blank());
    }

    #[test]
    fn subjectivity_is_mean_of_pos_and_neg() {
        let scores = PolarityScores {
            neg: 0.2,
            neu: 0.4,
            pos: 0.4,
            compound: 0.31,
        };
        assert!((scores.subjectivity() - 0.3).abs() < 1e-12);
        assert_eq!(scores.polarity(), 0.31);
    }

    #[test]
    fn error_result_carries_marker() {
        let err = anyhow::anyhow!("401 Unauthorized");
        let result = ClassificationResult::from_error(&err);
        assert!(result.failed);
        assert_eq!(result.text, "Error analyzing text: 401 Unauthorized");
    }

    #[test]
    fn variant_names_round_trip() {
        for variant in [Variant::Classifier, Variant::Analyzer] {
            assert_eq!(Variant::from_name(variant.code()), Some(variant));
        }
        assert_eq!(Variant::from_name("B"), Some(Variant::Analyzer));
        assert_eq!(Variant::from_name("other"), None);
    }
}
