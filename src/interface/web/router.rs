//! 변형별 HTTP 라우터 구성.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use super::handlers::{health_handler, index_handler, reset_handler, submit_handler};
use super::state::WebState;

/// `/reset`은 초기화를 지원하는 변형에만 등록한다.
pub fn build_router(state: Arc<WebState>) -> Router {
    let mut router = Router::new()
        .route("/", get(index_handler))
        .route("/submit", post(submit_handler))
        .route("/health", get(health_handler));

    if state.variant().supports_reset() {
        router = router.route("/reset", post(reset_handler));
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}
