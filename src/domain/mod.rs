//! Domain layer
//! 피드백/프롬프트/세션/뷰 모델 규칙을 인프라 의존성 없이 표현한다.

pub mod feedback;
pub mod prompt;
pub mod session;
pub mod view;
