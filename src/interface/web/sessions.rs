//! 브라우저별 세션 상태 저장소(쿠키 키 + 유한 LRU).

use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard};

use axum::http::{HeaderMap, header};
use lru::LruCache;
use tracing::debug;
use uuid::Uuid;

use crate::domain::session::SessionState;

pub const SESSION_COOKIE: &str = "fb_session";

/// 오래 쓰지 않은 세션부터 밀려난다. 영속화하지 않는다.
pub struct SessionStore {
    inner: Mutex<LruCache<Uuid, SessionState>>,
}

impl SessionStore {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// 세션 상태 사본을 꺼낸다. 쿠키가 없거나 모르는 id면 빈 상태로 시작한다.
    /// 핸들러가 await 하는 동안 잠금을 쥐지 않도록 사본을 돌려준다.
    pub fn checkout(&self, id: Option<Uuid>) -> (Uuid, SessionState) {
        let mut sessions = self.lock();
        if let Some(id) = id
            && let Some(state) = sessions.get(&id)
        {
            return (id, state.clone());
        }

        let id = id.unwrap_or_else(Uuid::new_v4);
        debug!(session = %id, "new session");
        (id, SessionState::default())
    }

    pub fn store(&self, id: Uuid, state: SessionState) {
        self.lock().put(id, state);
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<Uuid, SessionState>> {
        // 상태는 요청마다 통째로 교체되므로 poison 이후에도 그대로 쓴다.
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// `Cookie` 헤더에서 세션 id를 찾는다. 형식이 깨진 값은 무시한다.
pub fn session_id_from_headers(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|raw| raw.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

pub fn session_cookie(id: Uuid) -> String {
    format!("{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax")
}
