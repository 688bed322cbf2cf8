//! 로컬 언어 리소스 경로와 엔진 조립.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use super::lexicon::{LexiconScorer, VaderLexicon};
use super::sentences::PunktSentenceSplitter;
use super::vader::EmbeddedVaderScorer;
use crate::application::ports::{NlpEngine, SentimentScorer};

const LEXICON_RELATIVE: &str = "sentiment/vader_lexicon.txt";
const ABBREVIATIONS_RELATIVE: &str = "tokenizers/abbreviations/english.txt";

/// 데이터 디렉터리 아래 리소스 파일 위치.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePaths {
    pub lexicon: PathBuf,
    pub abbreviations: PathBuf,
}

impl ResourcePaths {
    pub fn under(data_dir: &Path) -> Self {
        Self {
            lexicon: data_dir.join(LEXICON_RELATIVE),
            abbreviations: data_dir.join(ABBREVIATIONS_RELATIVE),
        }
    }

    /// 렉시콘 파일이 있으면 그 경로, 없으면 내장 렉시콘.
    pub fn lexicon_source(&self) -> String {
        if self.lexicon.is_file() {
            self.lexicon.display().to_string()
        } else {
            "embedded".to_string()
        }
    }
}

/// 약어 목록은 반드시 있어야 한다. 없거나 비어 있으면 실패한다.
/// 렉시콘 파일은 있을 때만 내장 렉시콘 대신 쓰며, 이때 항목이 없으면 실패한다.
pub fn load_engine(data_dir: &Path) -> Result<NlpEngine> {
    let paths = ResourcePaths::under(data_dir);
    let splitter = PunktSentenceSplitter::load(&paths.abbreviations)
        .context("sentence tokenizer resources are unavailable")?;

    let scorer: Box<dyn SentimentScorer> = if paths.lexicon.is_file() {
        let lexicon = VaderLexicon::load(&paths.lexicon)
            .context("sentiment resources are unavailable")?;
        info!(path = %paths.lexicon.display(), entries = lexicon.len(), "custom lexicon loaded");
        Box::new(LexiconScorer::new(lexicon))
    } else {
        Box::new(EmbeddedVaderScorer::new())
    };

    info!(
        data_dir = %data_dir.display(),
        lexicon = %paths.lexicon_source(),
        abbreviations = splitter.abbreviation_count(),
        "language resources loaded"
    );

    Ok(NlpEngine {
        scorer,
        splitter: Box::new(splitter),
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn write_resource(path: &Path, body: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, body).unwrap();
    }

    #[test]
    fn custom_lexicon_file_replaces_embedded_one() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ResourcePaths::under(dir.path());
        write_resource(&paths.lexicon, "great\t3.1\t0.5\t[3]\nterrible\t-2.5\t0.5\t[-2]\n");
        write_resource(&paths.abbreviations, "dr\n");

        let engine = load_engine(dir.path()).unwrap();
        assert_eq!(engine.splitter.split("Great work. Terrible tests.").len(), 2);
        let whole = engine.scorer.polarity_scores("Great work. Terrible tests.");
        assert!((whole.compound - 0.1531).abs() < 1e-4);
        // "loves" is absent from the custom file.
        assert_eq!(engine.scorer.polarity_scores("Everyone loves it").compound, 0.0);
        assert_eq!(paths.lexicon_source(), paths.lexicon.display().to_string());
    }

    #[test]
    fn missing_lexicon_file_uses_embedded_lexicon() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ResourcePaths::under(dir.path());
        write_resource(&paths.abbreviations, "dr\n");

        let engine = load_engine(dir.path()).unwrap();
        assert!(engine.scorer.polarity_scores("Everyone loves it").compound > 0.0);
        assert_eq!(paths.lexicon_source(), "embedded");
    }

    #[test]
    fn empty_custom_lexicon_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ResourcePaths::under(dir.path());
        write_resource(&paths.lexicon, "# nothing here\n");
        write_resource(&paths.abbreviations, "dr\n");

        let err = load_engine(dir.path()).err().unwrap();
        assert!(format!("{err:#}").contains("sentiment resources are unavailable"));
    }

    #[test]
    fn missing_or_empty_abbreviation_list_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_engine(dir.path()).err().unwrap();
        assert!(format!("{err:#}").contains("sentence tokenizer"));

        write_resource(&ResourcePaths::under(dir.path()).abbreviations, "");
        let err = load_engine(dir.path()).err().unwrap();
        assert!(format!("{err:#}").contains("sentence tokenizer"));
    }

    #[test]
    fn shipped_resources_score_ordinary_feedback() {
        let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("nlp_data");
        let engine = load_engine(&data_dir).unwrap();

        let cases = [
            ("Everyone loves your work and the team appreciates it.", 1.0),
            ("I hated how this was handled.", -1.0),
            ("Your code is horrendous and the design is lousy.", -1.0),
            ("She likes the new layout a lot.", 1.0),
        ];
        for (text, sign) in cases {
            let scores = engine.scorer.polarity_scores(text);
            assert!(scores.compound * sign > 0.0, "{text}: {scores:?}");
            assert!(scores.pos + scores.neg > 0.0, "{text}: {scores:?}");
        }

        let text = "Great work on the release. The tests were terrible.";
        let sentences = engine.splitter.split(text);
        assert_eq!(sentences.len(), 2);
        assert!(engine.scorer.polarity_scores(&sentences[0]).compound > 0.0);
        assert!(engine.scorer.polarity_scores(&sentences[1]).compound < 0.0);
    }
}
