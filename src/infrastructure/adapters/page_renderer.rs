//! 페이지 렌더링 포트 구현 어댑터.

use std::io::{self, IsTerminal};

use crate::application::ports::PageRenderer;
use crate::domain::view::PageView;
use crate::infrastructure::render;

/// HTML 페이지 렌더러.
pub struct HtmlPageRenderer;

impl PageRenderer for HtmlPageRenderer {
    fn render(&self, view: &PageView) -> String {
        render::render_page_html(view)
    }
}

/// 터미널 텍스트 렌더러. stdout이 TTY일 때만 색을 입힌다.
pub struct TerminalPageRenderer {
    color: bool,
}

impl Default for TerminalPageRenderer {
    fn default() -> Self {
        Self {
            color: io::stdout().is_terminal(),
        }
    }
}

impl PageRenderer for TerminalPageRenderer {
    fn render(&self, view: &PageView) -> String {
        render::render_page_terminal(view, self.color)
    }
}
