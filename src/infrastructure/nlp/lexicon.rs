//! VADER 규칙 기반 렉시콘 감정 점수기.
//!
//! 렉시콘 값은 로컬 `vader_lexicon.txt`(TSV)에서 읽고, 점수 규칙
//! (강조어, 부정어, 대문자 강조, "but" 전환, 문장부호 강조, 정규화)은 여기서 적용한다.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::application::ports::SentimentScorer;
use crate::domain::feedback::PolarityScores;

const B_INCR: f64 = 0.293;
const B_DECR: f64 = -0.293;
const C_INCR: f64 = 0.733;
const N_SCALAR: f64 = -0.74;
const NORMALIZE_ALPHA: f64 = 15.0;
const EXCLAMATION_WEIGHT: f64 = 0.292;
const QUESTION_WEIGHT: f64 = 0.18;
const QUESTION_CAP: f64 = 0.96;

const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "ain't", "aren't",
    "can't", "couldn't", "daren't", "didn't", "doesn't", "dont", "hadnt", "hasnt", "havent",
    "isnt", "mightnt", "mustnt", "neither", "don't", "hadn't", "hasn't", "haven't", "isn't",
    "mightn't", "mustn't", "neednt", "needn't", "never", "none", "nope", "nor", "not", "nothing",
    "nowhere", "oughtnt", "shant", "shouldnt", "uhuh", "wasnt", "werent", "oughtn't", "shan't",
    "shouldn't", "uh-uh", "wasn't", "weren't", "without", "wont", "wouldnt", "won't", "wouldn't",
    "rarely", "seldom", "despite",
];

/// 강조어(+)/완화어(-) 스칼라.
fn booster_scalar(word: &str) -> Option<f64> {
    match word {
        "absolutely" | "amazingly" | "awfully" | "completely" | "considerably" | "decidedly"
        | "deeply" | "effing" | "enormously" | "entirely" | "especially" | "exceptionally"
        | "extremely" | "fabulously" | "flipping" | "flippin" | "fricking" | "frickin"
        | "frigging" | "friggin" | "fully" | "fucking" | "greatly" | "hella" | "highly"
        | "hugely" | "incredibly" | "intensely" | "majorly" | "more" | "most" | "particularly"
        | "purely" | "quite" | "really" | "remarkably" | "so" | "substantially" | "thoroughly"
        | "totally" | "tremendously" | "uber" | "unbelievably" | "unusually" | "utterly"
        | "very" => Some(B_INCR),
        "almost" | "barely" | "hardly" | "kinda" | "kindof" | "kind-of" | "less" | "little"
        | "marginally" | "occasionally" | "partly" | "scarcely" | "slightly" | "somewhat"
        | "sorta" | "sortof" | "sort-of" => Some(B_DECR),
        _ => None,
    }
}

fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word) || word.contains("n't")
}

/// 대소문자 구분 문자가 있고 소문자가 하나도 없으면 대문자 단어로 본다.
fn is_upper(word: &str) -> bool {
    word.chars().any(char::is_uppercase) && !word.chars().any(char::is_lowercase)
}

/// 토큰 단위 valence 사전.
#[derive(Debug, Clone, Default)]
pub struct VaderLexicon {
    valences: HashMap<String, f64>,
}

impl VaderLexicon {
    /// `token<TAB>mean<TAB>...` 형식을 읽는다. 빈 줄/`#` 주석은 무시한다.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut valences = HashMap::new();
        for (line_no, line) in raw.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }

            let mut fields = line.split('\t');
            let (Some(token), Some(mean)) = (fields.next(), fields.next()) else {
                bail!("lexicon line {} is missing the valence column", line_no + 1);
            };
            let valence: f64 = mean
                .trim()
                .parse()
                .with_context(|| format!("lexicon line {} has invalid valence", line_no + 1))?;
            valences.insert(token.trim().to_lowercase(), valence);
        }
        Ok(Self { valences })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read sentiment lexicon at {}", path.display()))?;
        let lexicon = Self::parse(&raw)
            .with_context(|| format!("failed to parse sentiment lexicon at {}", path.display()))?;
        if lexicon.is_empty() {
            bail!("sentiment lexicon at {} has no entries", path.display());
        }
        Ok(lexicon)
    }

    pub fn len(&self) -> usize {
        self.valences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }

    fn get(&self, word: &str) -> Option<f64> {
        self.valences.get(word).copied()
    }

    fn contains(&self, word: &str) -> bool {
        self.valences.contains_key(word)
    }
}

/// 공백 분리 후 양끝 문장부호를 벗긴다. 벗긴 결과가 한 글자 이하면 원형을 유지하고(이모티콘 등),
/// 원형도 한 글자면 버린다.
fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter(|raw| raw.chars().count() > 1)
        .map(|raw| {
            let stripped = raw.trim_matches(|c: char| c.is_ascii_punctuation());
            if stripped.chars().count() <= 1 {
                raw.to_string()
            } else {
                stripped.to_string()
            }
        })
        .collect()
}

struct SentiText {
    tokens: Vec<String>,
    lowered: Vec<String>,
    cap_differential: bool,
}

impl SentiText {
    fn new(text: &str) -> Self {
        let tokens = tokenize(text);
        let lowered = tokens.iter().map(|t| t.to_lowercase()).collect();
        let upper_count = tokens.iter().filter(|t| is_upper(t)).count();
        Self {
            cap_differential: upper_count > 0 && upper_count < tokens.len(),
            tokens,
            lowered,
        }
    }
}

pub struct LexiconScorer {
    lexicon: VaderLexicon,
}

impl LexiconScorer {
    pub fn new(lexicon: VaderLexicon) -> Self {
        Self { lexicon }
    }

    fn sentiment_valence(&self, st: &SentiText, i: usize) -> f64 {
        let Some(mut valence) = self.lexicon.get(&st.lowered[i]) else {
            return 0.0;
        };

        if st.cap_differential && is_upper(&st.tokens[i]) {
            valence += if valence > 0.0 { C_INCR } else { -C_INCR };
        }

        for start_i in 0..3 {
            if i <= start_i {
                break;
            }
            let prev = i - (start_i + 1);
            if self.lexicon.contains(&st.lowered[prev]) {
                continue;
            }

            let mut scalar = scalar_inc_dec(st, prev, valence);
            if start_i == 1 {
                scalar *= 0.95;
            } else if start_i == 2 {
                scalar *= 0.9;
            }
            valence += scalar;
            valence = never_check(valence, &st.lowered, start_i, i);
        }

        self.least_check(valence, &st.lowered, i)
    }

    fn least_check(&self, valence: f64, words: &[String], i: usize) -> f64 {
        if i > 1 && !self.lexicon.contains(&words[i - 1]) && words[i - 1] == "least" {
            if words[i - 2] != "at" && words[i - 2] != "very" {
                return valence * N_SCALAR;
            }
        } else if i > 0 && !self.lexicon.contains(&words[i - 1]) && words[i - 1] == "least" {
            return valence * N_SCALAR;
        }
        valence
    }
}

fn scalar_inc_dec(st: &SentiText, idx: usize, valence: f64) -> f64 {
    let Some(mut scalar) = booster_scalar(&st.lowered[idx]) else {
        return 0.0;
    };
    if valence < 0.0 {
        scalar = -scalar;
    }
    if st.cap_differential && is_upper(&st.tokens[idx]) {
        scalar += if valence > 0.0 { C_INCR } else { -C_INCR };
    }
    scalar
}

/// 앞선 부정어를 반영한다. "never so/this"는 반대로 강조한다.
fn never_check(valence: f64, words: &[String], start_i: usize, i: usize) -> f64 {
    let intensifier = |w: &String| w == "so" || w == "this";
    match start_i {
        0 => {
            if is_negation(&words[i - 1]) {
                return valence * N_SCALAR;
            }
        }
        1 => {
            if words[i - 2] == "never" && intensifier(&words[i - 1]) {
                return valence * 1.25;
            }
            if is_negation(&words[i - 2]) {
                return valence * N_SCALAR;
            }
        }
        _ => {
            if words[i - 3] == "never" && (intensifier(&words[i - 2]) || intensifier(&words[i - 1])) {
                return valence * 1.25;
            }
            if is_negation(&words[i - 3]) {
                return valence * N_SCALAR;
            }
        }
    }
    valence
}

/// "but" 앞 감정은 절반, 뒤 감정은 1.5배.
fn but_check(words: &[String], sentiments: &mut [f64]) {
    let Some(bi) = words.iter().position(|w| w == "but") else {
        return;
    };
    for (si, sentiment) in sentiments.iter_mut().enumerate() {
        if si < bi {
            *sentiment *= 0.5;
        } else if si > bi {
            *sentiment *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(4) as f64;
    let questions = text.matches('?').count();
    let question_amp = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_WEIGHT,
        _ => QUESTION_CAP,
    };
    exclamations * EXCLAMATION_WEIGHT + question_amp
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + NORMALIZE_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

pub(super) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

fn score_valence(sentiments: &[f64], text: &str) -> PolarityScores {
    if sentiments.is_empty() {
        return PolarityScores::default();
    }

    let emphasis = punctuation_emphasis(text);
    let mut sum: f64 = sentiments.iter().sum();
    if sum > 0.0 {
        sum += emphasis;
    } else if sum < 0.0 {
        sum -= emphasis;
    }
    let compound = normalize(sum);

    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neu_count = 0.0;
    for &s in sentiments {
        if s > 0.0 {
            pos_sum += s + 1.0;
        } else if s < 0.0 {
            neg_sum += s - 1.0;
        } else {
            neu_count += 1.0;
        }
    }

    if pos_sum > neg_sum.abs() {
        pos_sum += emphasis;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= emphasis;
    }

    let total = pos_sum + neg_sum.abs() + neu_count;
    PolarityScores {
        neg: round_to((neg_sum / total).abs(), 3),
        neu: round_to((neu_count / total).abs(), 3),
        pos: round_to((pos_sum / total).abs(), 3),
        compound: round_to(compound, 4),
    }
}

impl SentimentScorer for LexiconScorer {
    fn polarity_scores(&self, text: &str) -> PolarityScores {
        let st = SentiText::new(text);
        let mut sentiments = Vec::with_capacity(st.tokens.len());

        for i in 0..st.tokens.len() {
            let word = st.lowered[i].as_str();
            let kind_of = word == "kind" && st.lowered.get(i + 1).is_some_and(|next| next == "of");
            // 강조어 자체는 감정값을 갖지 않는다.
            if kind_of || booster_scalar(word).is_some() {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(self.sentiment_valence(&st, i));
        }

        but_check(&st.lowered, &mut sentiments);
        score_valence(&sentiments, text)
    }
}
