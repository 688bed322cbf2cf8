//! `feedbackpilot config` 진단 출력 유스케이스.

use anyhow::Result;

use crate::application::ports::ConfigRepository;

/// 병합된 설정, Groq 자격 증명 출처, 언어 리소스 위치(렉시콘 출처 포함)를
/// 한 JSON 문서로 돌려준다. API 키 값은 담지 않는다.
pub struct InspectConfigUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
}

impl InspectConfigUseCase<'_> {
    pub fn execute(&self) -> Result<String> {
        self.config_repo.inspect_pretty_json()
    }
}
