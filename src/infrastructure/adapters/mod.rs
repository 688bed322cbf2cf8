//! 애플리케이션 포트를 실제 인프라 구현체로 연결하는 어댑터 계층.

mod config_repository;
mod gateway_factory;
mod nlp_loader;
mod page_renderer;
mod reporter;

pub use config_repository::JsonConfigRepository;
pub use gateway_factory::GroqGatewayFactory;
pub use nlp_loader::FileSystemNlpLoader;
pub use page_renderer::{HtmlPageRenderer, TerminalPageRenderer};
pub use reporter::ConsoleReporter;
