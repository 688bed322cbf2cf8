//! 로컬 언어 리소스 로더 어댑터.

use anyhow::Result;

use crate::application::config::Config;
use crate::application::ports::{NlpEngine, NlpResourceLoader};
use crate::infrastructure::config::resolve_data_dir;
use crate::infrastructure::nlp;

/// `data_dir` 아래 약어 목록(필수)과 사용자 렉시콘(선택)을 읽는 로더.
pub struct FileSystemNlpLoader;

impl NlpResourceLoader for FileSystemNlpLoader {
    fn load(&self, config: &Config) -> Result<NlpEngine> {
        nlp::load_engine(&resolve_data_dir(config))
    }
}
