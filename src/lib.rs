//! feedbackpilot library root.
//! Clean Architecture + DDD 계층을 외부에 노출한다.

use anyhow::{Result, bail};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

use domain::feedback::{FeedbackText, Variant};
use domain::session::{Notice, SessionAction, SessionState};
use interface::composition::AppComposition;

/// 시작 점검 후 변형 하나를 웹으로 서빙한다. `bind`가 없으면 설정 값을 쓴다.
pub async fn serve_variant(variant: Variant, bind: Option<String>) -> Result<()> {
    let composition = AppComposition::default();
    let prepared = composition.prepare_variant_usecase().execute(variant)?;
    let bind_addr = bind.unwrap_or_else(|| prepared.config.bind_addr());
    interface::web::serve(composition.web_state(prepared), &bind_addr).await
}

/// 터미널에서 한 번 분석하고 렌더링된 텍스트를 반환한다.
pub async fn analyze_once(variant: Variant, text: String) -> Result<String> {
    let composition = AppComposition::default();
    let prepared = composition.prepare_variant_usecase().execute(variant)?;
    composition
        .reporter()
        .status(variant.code(), &format!("model {}", prepared.config.provider.model()));

    let mut state = SessionState::default();
    let view = composition
        .submit_usecase(&prepared)
        .execute(&mut state, SessionAction::Submit(FeedbackText::new(text)))
        .await;

    if let Some(Notice::Fatal(message)) = &view.notice {
        bail!("{message}");
    }
    Ok(composition.terminal_renderer().render(&view))
}

/// 설정 점검 JSON 출력용 함수.
pub fn inspect_config_pretty_json() -> Result<String> {
    let composition = AppComposition::default();
    composition.inspect_config_usecase().execute()
}

/// 설정 템플릿을 만들고 결과를 보고한다.
pub fn init_config() -> Result<()> {
    let composition = AppComposition::default();
    let path = composition.init_config_usecase().execute()?;
    composition
        .reporter()
        .status("config", &format!("template ready at {}", path.display()));
    Ok(())
}
