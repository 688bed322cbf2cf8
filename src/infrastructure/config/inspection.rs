//! 적용 설정 진단(inspection) 뷰 모델.

use serde::Serialize;

use super::loader::LoadedConfig;
use super::resolve::{resolve_data_dir, resolve_provider_api_key};
use crate::application::config::DefaultsConfig;
use crate::infrastructure::nlp::resources::ResourcePaths;

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub searched_paths: Vec<String>,
    pub loaded_paths: Vec<String>,
    pub defaults: DefaultsConfig,
    pub effective_defaults: EffectiveDefaults,
    pub provider: ProviderInspection,
    pub resources: ResourceInspection,
}

#[derive(Debug, Clone, Serialize)]
pub struct EffectiveDefaults {
    pub bind_addr: String,
    pub data_dir: String,
    pub sentiment_cache_capacity: usize,
    pub session_capacity: usize,
}

/// 키 값 자체는 절대 출력하지 않는다.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderInspection {
    pub model: String,
    pub api_base: String,
    pub api_key_source: Option<String>,
    pub api_key_resolved: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResourceInspection {
    pub lexicon_path: String,
    pub lexicon_present: bool,
    /// 파일 경로 또는 `embedded`.
    pub lexicon_source: String,
    pub abbreviations_path: String,
    pub abbreviations_present: bool,
}

impl ConfigInspection {
    pub(crate) fn from_loaded(loaded: LoadedConfig) -> Self {
        let config = &loaded.config;
        let credential = resolve_provider_api_key(&config.provider);
        let data_dir = resolve_data_dir(config);
        let paths = ResourcePaths::under(&data_dir);

        Self {
            searched_paths: loaded
                .searched_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            loaded_paths: loaded
                .loaded_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            defaults: config.defaults.clone(),
            effective_defaults: EffectiveDefaults {
                bind_addr: config.bind_addr(),
                data_dir: data_dir.display().to_string(),
                sentiment_cache_capacity: config.sentiment_cache_capacity(),
                session_capacity: config.session_capacity(),
            },
            provider: ProviderInspection {
                model: config.provider.model(),
                api_base: config.provider.api_base(),
                api_key_source: credential.source,
                api_key_resolved: credential.credential.is_some(),
            },
            resources: ResourceInspection {
                lexicon_path: paths.lexicon.display().to_string(),
                lexicon_present: paths.lexicon.is_file(),
                lexicon_source: paths.lexicon_source(),
                abbreviations_path: paths.abbreviations.display().to_string(),
                abbreviations_present: paths.abbreviations.is_file(),
            },
        }
    }
}
