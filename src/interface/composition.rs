//! 애플리케이션 조립(composition root) 모듈.

use crate::application::ports::{PageRenderer, Reporter};
use crate::application::usecases::init_config::InitConfigUseCase;
use crate::application::usecases::inspect_config::InspectConfigUseCase;
use crate::application::usecases::prepare_variant::{PrepareVariantUseCase, PreparedVariant};
use crate::application::usecases::submit_feedback::SubmitFeedbackUseCase;
use crate::infrastructure::adapters::{
    ConsoleReporter, FileSystemNlpLoader, GroqGatewayFactory, HtmlPageRenderer,
    JsonConfigRepository, TerminalPageRenderer,
};
use crate::interface::web::WebState;

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    config_repo: JsonConfigRepository,
    gateway_factory: GroqGatewayFactory,
    nlp_loader: FileSystemNlpLoader,
    terminal_renderer: TerminalPageRenderer,
    reporter: ConsoleReporter,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self {
            config_repo: JsonConfigRepository,
            gateway_factory: GroqGatewayFactory::new(),
            nlp_loader: FileSystemNlpLoader,
            terminal_renderer: TerminalPageRenderer::default(),
            reporter: ConsoleReporter::new(),
        }
    }
}

impl AppComposition {
    /// 설정 점검 유스케이스를 생성한다.
    pub fn inspect_config_usecase(&self) -> InspectConfigUseCase<'_> {
        InspectConfigUseCase {
            config_repo: &self.config_repo,
        }
    }

    /// 설정 템플릿 생성 유스케이스를 생성한다.
    pub fn init_config_usecase(&self) -> InitConfigUseCase<'_> {
        InitConfigUseCase {
            config_repo: &self.config_repo,
        }
    }

    /// 변형 시작 점검 유스케이스를 생성한다.
    pub fn prepare_variant_usecase(&self) -> PrepareVariantUseCase<'_> {
        PrepareVariantUseCase {
            config_repo: &self.config_repo,
            gateway_factory: &self.gateway_factory,
            nlp_loader: &self.nlp_loader,
        }
    }

    /// 준비된 변형으로 제출 유스케이스를 생성한다.
    pub fn submit_usecase<'a>(&'a self, prepared: &'a PreparedVariant) -> SubmitFeedbackUseCase<'a> {
        SubmitFeedbackUseCase {
            variant: prepared.variant,
            config: &prepared.config,
            gateway_factory: &self.gateway_factory,
            sentiment: prepared.sentiment.as_ref(),
        }
    }

    /// 웹 서버 공유 상태를 만든다. 게이트웨이 팩토리는 같은 HTTP 클라이언트를 공유한다.
    pub fn web_state(&self, prepared: PreparedVariant) -> WebState {
        WebState::new(
            prepared,
            Box::new(self.gateway_factory.clone()),
            Box::new(HtmlPageRenderer),
        )
    }

    pub fn terminal_renderer(&self) -> &dyn PageRenderer {
        &self.terminal_renderer
    }

    pub fn reporter(&self) -> &dyn Reporter {
        &self.reporter
    }
}
