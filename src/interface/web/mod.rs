//! axum 기반 웹 화면.

pub mod error;
pub mod handlers;
pub mod router;
pub mod sessions;
pub mod state;

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;

pub use router::build_router;
pub use state::WebState;

/// 주소에 바인딩하고 종료될 때까지 서빙한다.
pub async fn serve(state: WebState, bind_addr: &str) -> Result<()> {
    let listener = TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    let local = listener.local_addr()?;
    info!(addr = %local, variant = state.variant().code(), "listening");
    eprintln!("{} listening on http://{local}", state.variant().code());

    axum::serve(listener, build_router(Arc::new(state)))
        .await
        .context("web server stopped unexpectedly")
}
