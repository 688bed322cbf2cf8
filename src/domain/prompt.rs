//! 분류 요청 프롬프트 정책(고정 템플릿 + 호출 파라미터).

use serde::Serialize;

use crate::domain::feedback::{FeedbackText, Variant};

pub const CLASSIFIER_TEMPERATURE: f64 = 0.7;
pub const ANALYZER_TEMPERATURE: f64 = 0.1;
pub const ANALYZER_MAX_TOKENS: u32 = 1000;

pub const ANALYZER_SYSTEM_PROMPT: &str =
    "Eres un experto en análisis de feedback y comunicación efectiva.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// chat-completion 한 번에 필요한 메시지 목록과 샘플링 파라미터.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatPrompt {
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub max_tokens: Option<u32>,
}

impl ChatPrompt {
    /// 마지막 user 메시지 본문.
    pub fn user_content(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == ChatRole::User)
            .map(|m| m.content.as_str())
    }
}

/// 변형별 고정 템플릿에 원문을 그대로 끼워 넣는다. 길이 제한이나 변형은 하지 않는다.
pub fn build_prompt(variant: Variant, text: &FeedbackText) -> ChatPrompt {
    match variant {
        Variant::Classifier => ChatPrompt {
            messages: vec![ChatMessage {
                role: ChatRole::User,
                content: classifier_template(text.as_str()),
            }],
            temperature: CLASSIFIER_TEMPERATURE,
            max_tokens: None,
        },
        Variant::Analyzer => ChatPrompt {
            messages: vec![
                ChatMessage {
                    role: ChatRole::System,
                    content: ANALYZER_SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: ChatRole::User,
                    content: analyzer_template(text.as_str()),
                },
            ],
            temperature: ANALYZER_TEMPERATURE,
            max_tokens: Some(ANALYZER_MAX_TOKENS),
        },
    }
}

fn classifier_template(text: &str) -> String {
    let mut out = String::new();
    out.push_str("Analiza el siguiente feedback y clasifícalo en una de estas categorías:\n");
    out.push_str("1. Desde el ego: Feedback que se centra en el emisor, a menudo para mostrar superioridad o control.\n");
    out.push_str("2. Táctica: Feedback que se enfoca en acciones específicas y cómo mejorarlas.\n");
    out.push_str("3. Desde la bondad: Feedback que se da con empatía y consideración, buscando el bienestar del receptor.\n\n");
    out.push_str("Además, identifica los sentimientos presentes en el texto y sugiere cómo podría mejorarse para que sea más claro y constructivo.\n\n");
    out.push_str(&format!("Texto a analizar: {text}\n\n"));
    out.push_str("Por favor, proporciona tu análisis en el siguiente formato:\n");
    out.push_str("Categoría:\n");
    out.push_str("Sentimientos:\n");
    out.push_str("Sugerencias de mejora:\n");
    out
}

fn analyzer_template(text: &str) -> String {
    let mut out = String::new();
    out.push_str("Analiza este feedback y responde:\n");
    out.push_str("1. Tipo (Feedback desde la bondad, Feedback táctico o Feedback del ego)\n");
    out.push_str("2. Justificación de la clasificación\n");
    out.push_str("3. Análisis emocional del mensaje\n");
    out.push_str("4. Si es feedback del ego o táctico, sugiere cómo transformarlo en feedback desde la bondad\n\n");
    out.push_str(&format!("Feedback: {text}\n"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "I really liked how you handled this, but next time add more tests.";

    #[test]
    fn classifier_prompt_is_single_user_message() {
        let prompt = build_prompt(Variant::Classifier, &FeedbackText::new(SAMPLE));
        assert_eq!(prompt.messages.len(), 1);
        assert_eq!(prompt.messages[0].role, ChatRole::User);
        assert_eq!(prompt.temperature, 0.7);
        assert_eq!(prompt.max_tokens, None);

        let content = prompt.user_content().unwrap_or_default();
        assert!(content.contains(SAMPLE));
        for label in ["Desde el ego", "Táctica", "Desde la bondad"] {
            assert!(content.contains(label), "missing label {label}");
        }
        assert!(content.ends_with("Sugerencias de mejora:\n"));
    }

    #[test]
    fn analyzer_prompt_has_system_message_and_token_cap() {
        let prompt = build_prompt(Variant::Analyzer, &FeedbackText::new(SAMPLE));
        assert_eq!(prompt.messages.len(), 2);
        assert_eq!(prompt.messages[0].role, ChatRole::System);
        assert_eq!(prompt.messages[0].content, ANALYZER_SYSTEM_PROMPT);
        assert_eq!(prompt.temperature, 0.1);
        assert_eq!(prompt.max_tokens, Some(1000));

        let content = prompt.user_content().unwrap_or_default();
        assert!(content.contains(&format!("Feedback: {SAMPLE}")));
        assert!(content.contains("Justificación"));
        assert!(content.contains("transformarlo en feedback desde la bondad"));
    }

    #[test]
    fn long_input_is_passed_through_unmodified() {
        let long = "palabra ".repeat(20_000);
        let prompt = build_prompt(Variant::Classifier, &FeedbackText::new(long.clone()));
        assert!(prompt.user_content().unwrap_or_default().contains(&long));
    }
}
