//! 로컬 감정 점수/문장 분리 구현.

pub mod lexicon;
pub mod resources;
pub mod sentences;
pub mod vader;

pub use lexicon::{LexiconScorer, VaderLexicon};
pub use resources::{ResourcePaths, load_engine};
pub use sentences::PunktSentenceSplitter;
pub use vader::EmbeddedVaderScorer;
