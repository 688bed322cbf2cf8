//! 표시 계층이 그대로 그리는 불변 뷰 모델.
//!
//! 사용자 동작 하나가 끝날 때마다 `SessionState`에서 새 `PageView`를 만든다.
//! 렌더러(HTML/터미널)는 이 값만 보고 결정적으로 출력한다.

use serde::Serialize;

use crate::domain::feedback::{ClassificationResult, SentimentReport, Variant};
use crate::domain::session::{Notice, SessionState};

pub const GAUGE_MIN: f64 = 0.0;
pub const GAUGE_MAX: f64 = 100.0;
pub const GAUGE_LOW_UPPER: f64 = 33.0;
pub const GAUGE_MID_UPPER: f64 = 66.0;

/// 변형별 고정 문구.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageLabels {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub input_label: &'static str,
    pub placeholder: &'static str,
    pub submit: &'static str,
    pub reset: Option<&'static str>,
    pub working: &'static str,
    pub empty_warning: &'static str,
    pub result_heading: &'static str,
}

impl PageLabels {
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Classifier => Self {
                title: "Clasificador de Feedback",
                subtitle: "Clasifica el feedback en categorías y sugiere mejoras.",
                input_label: "Escribe el feedback que quieres analizar aquí:",
                placeholder: "Ingresa tu feedback aquí (se sugiere entre 50 y 500 palabras para un mejor análisis)",
                submit: "📝 Analizar Feedback",
                reset: Some("↺ Nueva consulta"),
                working: "Analizando el feedback...",
                empty_warning: "Por favor, ingresa un texto de feedback.",
                result_heading: "Resultado del Análisis",
            },
            Variant::Analyzer => Self {
                title: "📝 Analizador de Feedback",
                subtitle: "Basado en la propuesta de Daniel Bilbao de Truora",
                input_label: "Ingresa el texto del feedback a analizar:",
                placeholder: "",
                submit: "Analizar Feedback",
                reset: None,
                working: "Analizando feedback...",
                empty_warning: "Por favor, ingresa un texto para analizar.",
                result_heading: "Análisis del Feedback",
            },
        }
    }
}

/// 게이지 색상 구간.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GaugeBand {
    Low,
    Mid,
    High,
}

impl GaugeBand {
    pub fn for_value(value: f64) -> Self {
        if value < GAUGE_LOW_UPPER {
            Self::Low
        } else if value < GAUGE_MID_UPPER {
            Self::Mid
        } else {
            Self::High
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Low => "lightcoral",
            Self::Mid => "khaki",
            Self::High => "lightgreen",
        }
    }

    /// 게이지 눈금 위 구간 범위.
    pub fn range(self) -> (f64, f64) {
        match self {
            Self::Low => (GAUGE_MIN, GAUGE_LOW_UPPER),
            Self::Mid => (GAUGE_LOW_UPPER, GAUGE_MID_UPPER),
            Self::High => (GAUGE_MID_UPPER, GAUGE_MAX),
        }
    }

    pub fn all() -> [Self; 3] {
        [Self::Low, Self::Mid, Self::High]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeView {
    pub title: &'static str,
    /// 0..=100 표시 눈금 값
    pub value: f64,
    pub band: GaugeBand,
}

impl GaugeView {
    /// [-1, 1] 극성을 [0, 100] 눈금으로 옮긴다.
    pub fn from_polarity(polarity: f64) -> Self {
        let value = ((polarity.clamp(-1.0, 1.0) + 1.0) * 50.0).clamp(GAUGE_MIN, GAUGE_MAX);
        Self {
            title: "Sentimiento General",
            value,
            band: GaugeBand::for_value(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentenceView {
    /// 1부터 시작하는 표시 번호
    pub index: usize,
    pub text: String,
    /// (polarity + 1) / 2, 0..=1
    pub progress: f64,
    pub polarity_label: String,
    pub subjectivity_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentView {
    pub gauge: GaugeView,
    pub overall_subjectivity_label: String,
    pub sentences: Vec<SentenceView>,
}

impl SentimentView {
    pub fn from_report(report: &SentimentReport) -> Self {
        Self {
            gauge: GaugeView::from_polarity(report.overall_polarity),
            overall_subjectivity_label: two_decimals(report.overall_subjectivity),
            sentences: report
                .sentences
                .iter()
                .enumerate()
                .map(|(idx, sentence)| SentenceView {
                    index: idx + 1,
                    text: sentence.text.clone(),
                    progress: ((sentence.polarity + 1.0) / 2.0).clamp(0.0, 1.0),
                    polarity_label: two_decimals(sentence.polarity),
                    subjectivity_label: two_decimals(sentence.subjectivity),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub variant: Variant,
    pub labels: PageLabels,
    pub text: String,
    pub word_count: usize,
    pub notice: Option<Notice>,
    pub classification: Option<ClassificationResult>,
    pub sentiment: Option<SentimentView>,
}

impl PageView {
    pub fn build(variant: Variant, state: &SessionState) -> Self {
        Self {
            variant,
            labels: PageLabels::for_variant(variant),
            text: state.text.as_str().to_string(),
            word_count: state.text.word_count(),
            notice: state.notice.clone(),
            classification: state.result.clone(),
            sentiment: state
                .sentiment
                .as_ref()
                .filter(|_| variant.includes_sentiment())
                .map(SentimentView::from_report),
        }
    }

    pub fn has_output(&self) -> bool {
        self.classification.is_some() || self.sentiment.is_some()
    }
}

/// 소수점 둘째 자리 문자열.
pub fn two_decimals(value: f64) -> String {
    let formatted = format!("{value:.2}");
    // -0.00 같은 음의 0 표기는 피한다.
    if formatted == "-0.00" {
        "0.00".to_string()
    } else {
        formatted
    }
}
