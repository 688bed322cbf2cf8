//! 애플리케이션이 사용하는 설정 스키마(순수 데이터).
//!
//! 주의: 파일/환경변수 접근은 `infrastructure`에서만 수행한다.

use serde::{Deserialize, Serialize};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8501";
pub const DEFAULT_DATA_DIR: &str = "nlp_data";
pub const DEFAULT_SENTIMENT_CACHE_CAPACITY: usize = 128;
pub const DEFAULT_SESSION_CAPACITY: usize = 1024;

pub const DEFAULT_MODEL: &str = "mixtral-8x7b-32768";
pub const DEFAULT_API_BASE: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_API_KEY_ENV: &str = "GROQ_API_KEY";
pub const DEFAULT_SECRETS_PATH: &str = ".feedbackpilot/secrets.toml";

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// 전역 기본값
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// chat-completion provider 설정
    #[serde(default)]
    pub provider: ProviderConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct DefaultsConfig {
    /// 웹 서버 바인드 주소
    pub bind_addr: Option<String>,
    /// 렉시콘/문장 분리 리소스 디렉터리
    pub data_dir: Option<String>,
    /// 감정 분석 캐시 크기(0이면 캐시 비활성)
    pub sentiment_cache_capacity: Option<usize>,
    /// 동시에 유지할 브라우저 세션 수 상한
    pub session_capacity: Option<usize>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ProviderConfig {
    /// 모델 식별자(선택)
    pub model: Option<String>,
    /// OpenAI 호환 API 베이스 URL(선택)
    pub api_base: Option<String>,
    /// API 키(직접값, 권장하지 않음)
    pub api_key: Option<String>,
    /// API 키를 읽을 환경변수 이름
    pub api_key_env: Option<String>,
    /// API 키를 담은 secrets TOML 파일 경로
    pub secrets_path: Option<String>,
}

impl Config {
    pub fn bind_addr(&self) -> String {
        self.defaults
            .bind_addr
            .clone()
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
    }

    pub fn data_dir(&self) -> String {
        self.defaults
            .data_dir
            .clone()
            .unwrap_or_else(|| DEFAULT_DATA_DIR.to_string())
    }

    pub fn sentiment_cache_capacity(&self) -> usize {
        self.defaults
            .sentiment_cache_capacity
            .unwrap_or(DEFAULT_SENTIMENT_CACHE_CAPACITY)
    }

    pub fn session_capacity(&self) -> usize {
        self.defaults
            .session_capacity
            .unwrap_or(DEFAULT_SESSION_CAPACITY)
            .max(1)
    }

    /// 후순위(나중 파일) 값으로 덮어쓰는 병합 규칙.
    pub fn merge_from(&mut self, other: Config) {
        self.defaults.merge_from(other.defaults);
        self.provider.merge_from(other.provider);
    }
}

impl DefaultsConfig {
    pub(crate) fn merge_from(&mut self, other: DefaultsConfig) {
        if other.bind_addr.is_some() {
            self.bind_addr = other.bind_addr;
        }
        if other.data_dir.is_some() {
            self.data_dir = other.data_dir;
        }
        if other.sentiment_cache_capacity.is_some() {
            self.sentiment_cache_capacity = other.sentiment_cache_capacity;
        }
        if other.session_capacity.is_some() {
            self.session_capacity = other.session_capacity;
        }
    }
}

impl ProviderConfig {
    pub fn model(&self) -> String {
        self.model
            .clone()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string())
    }

    pub fn api_base(&self) -> String {
        self.api_base
            .clone()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
    }

    pub fn api_key_env(&self) -> String {
        self.api_key_env
            .clone()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_KEY_ENV.to_string())
    }

    pub fn secrets_path(&self) -> String {
        self.secrets_path
            .clone()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SECRETS_PATH.to_string())
    }

    pub(crate) fn merge_from(&mut self, other: ProviderConfig) {
        if other.model.is_some() {
            self.model = other.model;
        }
        if other.api_base.is_some() {
            self.api_base = other.api_base;
        }
        if other.api_key.is_some() {
            self.api_key = other.api_key;
        }
        if other.api_key_env.is_some() {
            self.api_key_env = other.api_key_env;
        }
        if other.secrets_path.is_some() {
            self.secrets_path = other.secrets_path;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "127.0.0.1:8501");
        assert_eq!(config.data_dir(), "nlp_data");
        assert_eq!(config.sentiment_cache_capacity(), 128);
        assert_eq!(config.provider.model(), "mixtral-8x7b-32768");
        assert_eq!(config.provider.api_key_env(), "GROQ_API_KEY");
    }

    #[test]
    fn later_values_override_earlier_ones() {
        let mut base: Config = serde_json::from_str(
            r#"{ "defaults": { "bind_addr": "0.0.0.0:9000", "data_dir": "/opt/nlp" },
                 "provider": { "model": "llama3-8b-8192" } }"#,
        )
        .unwrap();
        let overlay: Config = serde_json::from_str(
            r#"{ "defaults": { "data_dir": "./local" }, "provider": { "api_key_env": "MY_KEY" } }"#,
        )
        .unwrap();
        base.merge_from(overlay);

        assert_eq!(base.bind_addr(), "0.0.0.0:9000");
        assert_eq!(base.data_dir(), "./local");
        assert_eq!(base.provider.model(), "llama3-8b-8192");
        assert_eq!(base.provider.api_key_env(), "MY_KEY");
    }

    #[test]
    fn session_capacity_is_never_zero() {
        let mut config = Config::default();
        config.defaults.session_capacity = Some(0);
        assert_eq!(config.session_capacity(), 1);
    }
}
