//! `PageView` 렌더링 모듈(HTML 페이지 / 터미널 텍스트).

pub mod html;
pub mod terminal;

pub use html::render_page_html;
pub use terminal::render_page_terminal;
