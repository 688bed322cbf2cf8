//! 설정 파일 탐색/병합 로더.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::json;

use crate::application::config::{
    Config, DEFAULT_API_BASE, DEFAULT_API_KEY_ENV, DEFAULT_BIND_ADDR, DEFAULT_DATA_DIR,
    DEFAULT_MODEL, DEFAULT_SECRETS_PATH, DEFAULT_SENTIMENT_CACHE_CAPACITY,
    DEFAULT_SESSION_CAPACITY,
};

pub const CONFIG_ENV: &str = "FEEDBACKPILOT_CONFIG";
const PROJECT_CONFIG_PATH: &str = ".feedbackpilot/config.json";

#[derive(Debug, Clone)]
pub(crate) struct LoadedConfig {
    pub config: Config,
    pub searched_paths: Vec<PathBuf>,
    pub loaded_paths: Vec<PathBuf>,
}

/// 우선순위 경로를 순회해 JSON 설정을 병합한다.
/// 파일이 하나도 없으면 기본값만으로 동작한다.
pub(crate) fn load_merged_config() -> Result<LoadedConfig> {
    load_from_paths(config_paths())
}

pub(crate) fn load_from_paths(paths: Vec<PathBuf>) -> Result<LoadedConfig> {
    // 낮은 우선순위에서 높은 우선순위 순서로 병합한다.
    let mut merged = Config::default();
    let mut loaded_paths = Vec::new();

    for path in &paths {
        if !path.exists() {
            continue;
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let parsed: Config = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse JSON in {}", path.display()))?;
        merged.merge_from(parsed);
        loaded_paths.push(path.to_path_buf());
    }

    Ok(LoadedConfig {
        config: merged,
        searched_paths: paths,
        loaded_paths,
    })
}

/// 시스템 + 사용자 + 프로젝트 + 명시 경로 순으로 병합 경로를 구성한다.
pub fn config_paths() -> Vec<PathBuf> {
    // 낮은 우선순위 -> 높은 우선순위 순서로 병합됨.
    let mut paths = vec![PathBuf::from("/etc/feedbackpilot/config.json")];

    if let Some(base) = dirs::config_dir() {
        paths.push(base.join("feedbackpilot").join("config.json"));
    }

    paths.push(PathBuf::from(PROJECT_CONFIG_PATH));

    if let Ok(path) = env::var(CONFIG_ENV) {
        paths.push(Path::new(&path).to_path_buf());
    }

    dedup_paths(paths)
}

/// 템플릿을 쓸 경로: 명시 경로가 있으면 그곳, 없으면 프로젝트 로컬 경로.
pub(crate) fn template_target_path() -> PathBuf {
    if let Ok(path) = env::var(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    PathBuf::from(PROJECT_CONFIG_PATH)
}

/// 설정 템플릿을 생성한다. 이미 있으면 건드리지 않는다.
pub(crate) fn write_template(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        return Ok(());
    }

    if let Some(parent) = config_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    let template = json!({
        "defaults": {
            "bind_addr": DEFAULT_BIND_ADDR,
            "data_dir": DEFAULT_DATA_DIR,
            "sentiment_cache_capacity": DEFAULT_SENTIMENT_CACHE_CAPACITY,
            "session_capacity": DEFAULT_SESSION_CAPACITY
        },
        "provider": {
            "model": DEFAULT_MODEL,
            "api_base": DEFAULT_API_BASE,
            "api_key_env": DEFAULT_API_KEY_ENV,
            "secrets_path": DEFAULT_SECRETS_PATH
        }
    });

    let rendered = serde_json::to_string_pretty(&template)?;
    fs::write(config_path, format!("{rendered}\n"))
        .with_context(|| format!("failed to create config template at {}", config_path.display()))
}

fn dedup_paths(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for p in paths {
        if !out.contains(&p) {
            out.push(p);
        }
    }
    out
}
