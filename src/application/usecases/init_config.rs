//! 기본 설정 템플릿을 생성하는 유스케이스.

use std::path::PathBuf;

use anyhow::Result;

use crate::application::ports::ConfigRepository;

/// 설정 템플릿(없을 때만)을 만들고 경로를 반환한다.
pub struct InitConfigUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
}

impl<'a> InitConfigUseCase<'a> {
    pub fn execute(&self) -> Result<PathBuf> {
        self.config_repo.write_template()
    }
}
