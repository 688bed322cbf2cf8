//! HTTP 핸들러.

use std::sync::Arc;

use anyhow::Context;
use axum::Form;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::domain::feedback::FeedbackText;
use crate::domain::session::SessionAction;
use crate::domain::view::PageView;

use super::error::AppResult;
use super::sessions::{session_cookie, session_id_from_headers};
use super::state::WebState;

#[derive(Debug, Deserialize)]
pub struct FeedbackForm {
    #[serde(default)]
    pub feedback: String,
}

pub async fn health_handler() -> &'static str {
    "ok"
}

/// 현재 세션 상태를 그대로 그린다.
pub async fn index_handler(
    State(state): State<Arc<WebState>>,
    headers: HeaderMap,
) -> AppResult<Response> {
    let (id, session) = state.sessions.checkout(session_id_from_headers(&headers));
    let view = PageView::build(state.variant(), &session);
    state.sessions.store(id, session);

    with_session_cookie(id, Html(state.renderer.render(&view)))
}

/// 제출 한 번 = 파이프라인 한 번. 응답은 외부 호출이 끝난 뒤에 나간다.
pub async fn submit_handler(
    State(state): State<Arc<WebState>>,
    headers: HeaderMap,
    Form(form): Form<FeedbackForm>,
) -> AppResult<Response> {
    let (id, mut session) = state.sessions.checkout(session_id_from_headers(&headers));
    info!(session = %id, chars = form.feedback.len(), "feedback submitted");

    let view = state
        .submit_usecase()
        .execute(&mut session, SessionAction::Submit(FeedbackText::new(form.feedback)))
        .await;
    state.sessions.store(id, session);

    with_session_cookie(id, Html(state.renderer.render(&view)))
}

/// 입력/결과를 비우고 첫 화면으로 돌아간다.
pub async fn reset_handler(
    State(state): State<Arc<WebState>>,
    headers: HeaderMap,
) -> AppResult<Response> {
    let (id, mut session) = state.sessions.checkout(session_id_from_headers(&headers));
    state
        .submit_usecase()
        .execute(&mut session, SessionAction::Reset)
        .await;
    state.sessions.store(id, session);

    with_session_cookie(id, Redirect::to("/"))
}

fn with_session_cookie(id: Uuid, body: impl IntoResponse) -> AppResult<Response> {
    let mut response = body.into_response();
    let cookie = HeaderValue::from_str(&session_cookie(id)).context("invalid session cookie")?;
    response.headers_mut().insert(header::SET_COOKIE, cookie);
    Ok(response)
}
