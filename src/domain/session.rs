//! 한 브라우저 세션(상호작용) 동안만 유지되는 상태.

use serde::{Deserialize, Serialize};

use crate::domain::feedback::{ClassificationResult, FeedbackText, SentimentReport};

/// 결과 대신 화면에 표시되는 안내 메시지.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "lowercase")]
pub enum Notice {
    /// 복구 가능한 경고(예: 빈 입력). 외부 호출 없음.
    Warning(String),
    /// 상호작용을 중단시키는 오류(예: 자격 증명 없음). 외부 호출 없음.
    Fatal(String),
}

/// 사용자 동작.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    Submit(FeedbackText),
    Reset,
}

/// 명시적으로 소유/전달되는 세션 상태. 영속화하지 않는다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub text: FeedbackText,
    pub result: Option<ClassificationResult>,
    pub sentiment: Option<SentimentReport>,
    pub notice: Option<Notice>,
}

impl SessionState {
    /// 입력/결과/안내를 모두 비운다.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// 새 제출 직전 이전 결과를 정리하고 입력을 기록한다.
    pub fn begin_submission(&mut self, text: FeedbackText) {
        self.text = text;
        self.result = None;
        self.sentiment = None;
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_resets_everything() {
        let mut state = SessionState {
            text: FeedbackText::new("algo"),
            result: Some(ClassificationResult::answer("Categoría: Táctica")),
            sentiment: None,
            notice: Some(Notice::Warning("x".into())),
        };
        state.clear();
        assert_eq!(state, SessionState::default());
    }

    #[test]
    fn state_serializes_notice_with_kind_tag() {
        let state = SessionState {
            notice: Some(Notice::Fatal("missing key".into())),
            ..SessionState::default()
        };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["notice"]["kind"], "fatal");
        assert_eq!(json["notice"]["message"], "missing key");
    }
}
