//! 약어 목록 기반 문장 분리기.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::application::ports::SentenceSplitter;

const TERMINATORS: [char; 3] = ['.', '!', '?'];
const CLOSERS: [char; 7] = ['"', '\'', ')', ']', '\u{201d}', '\u{2019}', '\u{bb}'];
const OPENERS: [char; 6] = ['"', '\'', '(', '[', '\u{201c}', '\u{ab}'];

/// 종결부호(`.`/`!`/`?`) 뒤에 공백이 오면 문장을 끊는다.
/// `.`은 약어, 한 글자 이니셜, 소문자로 이어지는 경우 끊지 않는다.
#[derive(Debug, Clone, Default)]
pub struct PunktSentenceSplitter {
    abbreviations: HashSet<String>,
}

impl PunktSentenceSplitter {
    pub fn new<I, S>(abbreviations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            abbreviations: abbreviations
                .into_iter()
                .map(|a| normalize_abbreviation(a.as_ref()))
                .filter(|a| !a.is_empty())
                .collect(),
        }
    }

    /// 한 줄에 약어 하나. `#` 주석과 빈 줄은 무시한다.
    pub fn parse(raw: &str) -> Self {
        Self::new(
            raw.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).with_context(|| {
            format!("failed to read abbreviation list at {}", path.display())
        })?;
        let splitter = Self::parse(&raw);
        if splitter.abbreviations.is_empty() {
            bail!("abbreviation list at {} has no entries", path.display());
        }
        Ok(splitter)
    }

    pub fn abbreviation_count(&self) -> usize {
        self.abbreviations.len()
    }

    fn suppresses_break(&self, text: &str, sentence_start: usize, dot_at: usize, next: Option<char>) -> bool {
        if next.is_some_and(char::is_lowercase) {
            return true;
        }

        let word = text[sentence_start..dot_at]
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or_default()
            .trim_start_matches(|c: char| OPENERS.contains(&c))
            .to_lowercase();

        let mut chars = word.chars();
        let initial = matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic());
        initial || self.abbreviations.contains(&word)
    }
}

fn normalize_abbreviation(raw: &str) -> String {
    raw.trim().trim_end_matches('.').to_lowercase()
}

impl SentenceSplitter for PunktSentenceSplitter {
    fn split(&self, text: &str) -> Vec<String> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut sentences = Vec::new();
        let mut start = 0usize;
        let mut i = 0usize;

        while i < chars.len() {
            let (offset, c) = chars[i];
            if !TERMINATORS.contains(&c) {
                i += 1;
                continue;
            }

            let mut j = i;
            let mut only_periods = true;
            while j < chars.len() && TERMINATORS.contains(&chars[j].1) {
                only_periods &= chars[j].1 == '.';
                j += 1;
            }
            while j < chars.len() && CLOSERS.contains(&chars[j].1) {
                j += 1;
            }

            let end = chars.get(j).map_or(text.len(), |(o, _)| *o);
            let followed_by_space = chars.get(j).is_none_or(|(_, ch)| ch.is_whitespace());
            if !followed_by_space {
                i = j.max(i + 1);
                continue;
            }

            if only_periods {
                let next = chars[j..]
                    .iter()
                    .map(|(_, ch)| *ch)
                    .find(|ch| !ch.is_whitespace());
                if self.suppresses_break(text, start, offset, next) {
                    i = j;
                    continue;
                }
            }

            let sentence = text[start..end].trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            start = end;
            i = j;
        }

        let rest = text[start..].trim();
        if !rest.is_empty() {
            sentences.push(rest.to_string());
        }
        sentences
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn splitter() -> PunktSentenceSplitter {
        PunktSentenceSplitter::parse("# common\ndr\nmr.\ne.g\netc\n")
    }

    #[test]
    fn splits_on_terminal_punctuation() {
        assert_eq!(
            splitter().split("Great work. Terrible tests."),
            vec!["Great work.", "Terrible tests."]
        );
    }

    // A comma-joined clause stays in one sentence, as with Punkt.
    #[test]
    fn comma_joined_clauses_stay_one_sentence() {
        let text = "I really liked how you handled this, but next time add more tests.";
        assert_eq!(splitter().split(text), vec![text]);
    }

    #[test]
    fn abbreviations_and_initials_do_not_break() {
        assert_eq!(
            splitter().split("Dr. Smith reviewed it. Looks good!"),
            vec!["Dr. Smith reviewed it.", "Looks good!"]
        );
        assert_eq!(
            splitter().split("Version 2.5 is out. J. K. Rowling wrote it."),
            vec!["Version 2.5 is out.", "J. K. Rowling wrote it."]
        );
        assert_eq!(
            splitter().split("Use helpers, e.g. builders. Fine."),
            vec!["Use helpers, e.g. builders.", "Fine."]
        );
    }

    #[test]
    fn ellipsis_before_lowercase_continues_sentence() {
        assert_eq!(
            splitter().split("Wait... what? Really!"),
            vec!["Wait... what?", "Really!"]
        );
    }

    #[test]
    fn closing_quotes_stay_with_their_sentence() {
        assert_eq!(
            splitter().split("He said \"stop.\" Then he left."),
            vec!["He said \"stop.\"", "Then he left."]
        );
    }

    #[test]
    fn blank_input_yields_nothing_and_unterminated_text_is_kept() {
        assert!(splitter().split("   \n ").is_empty());
        assert_eq!(splitter().split("  no punctuation here "), vec!["no punctuation here"]);
    }

    #[test]
    fn handles_multibyte_text() {
        assert_eq!(
            splitter().split("¡Buen trabajo! ¿Más pruebas? Sí."),
            vec!["¡Buen trabajo!", "¿Más pruebas?", "Sí."]
        );
    }

    #[test]
    fn load_rejects_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("english.txt");
        fs::write(&path, "# only comments\n").unwrap();
        assert!(PunktSentenceSplitter::load(&path).is_err());
        assert!(PunktSentenceSplitter::load(&dir.path().join("missing.txt")).is_err());
    }
}
