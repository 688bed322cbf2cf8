//! 설정 값(api key/env/secrets/data dir)을 실제 런타임 값으로 해석하는 유틸리티.
//!
//! - 환경변수/파일 접근은 인프라 계층에서만 수행한다.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

use crate::application::config::{Config, ProviderConfig};

pub const DATA_DIR_ENV: &str = "FEEDBACKPILOT_DATA_DIR";

/// Provider(API key) 해석 결과.
#[derive(Debug, Clone)]
pub struct ProviderCredentialResolution {
    pub credential: Option<String>,
    pub source: Option<String>,
}

/// Provider API key를 해석한다. 순서: inline → 환경변수 → secrets 파일.
pub fn resolve_provider_api_key(cfg: &ProviderConfig) -> ProviderCredentialResolution {
    resolve_provider_api_key_with(cfg, |name| env::var(name).ok())
}

pub(crate) fn resolve_provider_api_key_with(
    cfg: &ProviderConfig,
    lookup_env: impl Fn(&str) -> Option<String>,
) -> ProviderCredentialResolution {
    if let Some(key) = cfg.api_key.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
        return ProviderCredentialResolution {
            credential: Some(key.to_string()),
            source: Some("inline".to_string()),
        };
    }

    let env_name = cfg.api_key_env();
    if let Some(v) = lookup_env(&env_name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
    {
        return ProviderCredentialResolution {
            credential: Some(v),
            source: Some(format!("env:{env_name}")),
        };
    }

    let secrets_path = cfg.secrets_path();
    match read_secret(Path::new(&secrets_path), &env_name) {
        Ok(Some(v)) => ProviderCredentialResolution {
            credential: Some(v),
            source: Some(format!("secrets:{secrets_path}")),
        },
        Ok(None) => ProviderCredentialResolution {
            credential: None,
            source: Some(format!("env:{env_name} (missing)")),
        },
        // 깨진 secrets 파일은 누락과 구분해 원인을 남긴다.
        Err(err) => {
            warn!(path = %secrets_path, error = %format!("{err:#}"), "secrets file is unreadable");
            ProviderCredentialResolution {
                credential: None,
                source: Some(format!("secrets:{secrets_path} (invalid: {err:#})")),
            }
        }
    }
}

/// secrets TOML 파일에서 `key = "..."` 값을 읽는다. 파일이 없으면 `None`.
pub fn read_secret(path: &Path, key: &str) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }

    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read secrets at {}", path.display()))?;
    let table: toml::Table = raw
        .parse()
        .with_context(|| format!("failed to parse TOML in {}", path.display()))?;

    Ok(table
        .get(key)
        .and_then(toml::Value::as_str)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string))
}

/// 언어 리소스 디렉터리. 환경변수가 설정 파일보다 우선한다.
pub fn resolve_data_dir(config: &Config) -> PathBuf {
    env::var(DATA_DIR_ENV)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(config.data_dir()))
}
