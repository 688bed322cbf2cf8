//! 웹 서버 공유 상태.

use crate::application::ports::{GatewayFactory, PageRenderer};
use crate::application::usecases::prepare_variant::PreparedVariant;
use crate::application::usecases::submit_feedback::SubmitFeedbackUseCase;
use crate::domain::feedback::Variant;

use super::sessions::SessionStore;

/// 한 변형을 서빙하는 데 필요한 모든 것. 라우터가 `Arc`로 공유한다.
pub struct WebState {
    pub prepared: PreparedVariant,
    pub gateway_factory: Box<dyn GatewayFactory>,
    pub renderer: Box<dyn PageRenderer>,
    pub sessions: SessionStore,
}

impl WebState {
    pub fn new(
        prepared: PreparedVariant,
        gateway_factory: Box<dyn GatewayFactory>,
        renderer: Box<dyn PageRenderer>,
    ) -> Self {
        let sessions = SessionStore::new(prepared.config.session_capacity());
        Self {
            prepared,
            gateway_factory,
            renderer,
            sessions,
        }
    }

    pub fn variant(&self) -> Variant {
        self.prepared.variant
    }

    pub fn submit_usecase(&self) -> SubmitFeedbackUseCase<'_> {
        SubmitFeedbackUseCase {
            variant: self.prepared.variant,
            config: &self.prepared.config,
            gateway_factory: self.gateway_factory.as_ref(),
            sentiment: self.prepared.sentiment.as_ref(),
        }
    }
}
