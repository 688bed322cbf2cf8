//! 문장 분리 + 렉시콘 점수를 묶어 감정 리포트를 만드는 유스케이스.

use std::num::NonZeroUsize;
use std::sync::Mutex;

use lru::LruCache;
use tracing::debug;

use crate::application::ports::{NlpEngine, SentenceSplitter, SentimentScorer};
use crate::domain::feedback::SentimentReport;

/// 입력 텍스트만의 순수 함수이므로 정확히 같은 텍스트는 LRU 캐시로 재사용한다.
pub struct SentimentAggregator {
    scorer: Box<dyn SentimentScorer>,
    splitter: Box<dyn SentenceSplitter>,
    cache: Option<Mutex<LruCache<String, SentimentReport>>>,
}

impl SentimentAggregator {
    /// `cache_capacity`가 0이면 캐시를 쓰지 않는다.
    pub fn new(engine: NlpEngine, cache_capacity: usize) -> Self {
        Self {
            scorer: engine.scorer,
            splitter: engine.splitter,
            cache: NonZeroUsize::new(cache_capacity).map(|cap| Mutex::new(LruCache::new(cap))),
        }
    }

    pub fn analyze(&self, text: &str) -> SentimentReport {
        if let Some(hit) = self.cached(text) {
            debug!(chars = text.len(), "sentiment cache hit");
            return hit;
        }

        let report = self.compute(text);
        if let Some(cache) = &self.cache
            && let Ok(mut cache) = cache.lock()
        {
            cache.put(text.to_string(), report.clone());
        }
        report
    }

    fn cached(&self, text: &str) -> Option<SentimentReport> {
        let cache = self.cache.as_ref()?;
        let mut cache = cache.lock().ok()?;
        cache.get(text).cloned()
    }

    fn compute(&self, text: &str) -> SentimentReport {
        let sentences = self.splitter.split(text);
        // 전체 점수는 문장 점수에서 유도하지 않고 원문 전체를 따로 점수화한다.
        let overall = self.scorer.polarity_scores(text);
        let scored = sentences
            .into_iter()
            .map(|sentence| {
                let scores = self.scorer.polarity_scores(&sentence);
                (sentence, scores)
            })
            .collect();

        SentimentReport::assemble(overall, scored)
    }
}
