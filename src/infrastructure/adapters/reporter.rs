//! 콘솔 리포터 포트 구현 어댑터.

use std::io::{self, IsTerminal};

use crossterm::style::{Color, Stylize, style};

use crate::application::ports::Reporter;

/// 콘솔 전용 리포터 어댑터. 상태 줄은 stderr로 보내 stdout 출력과 섞이지 않게 한다.
pub struct ConsoleReporter {
    interactive: bool,
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self {
            interactive: io::stderr().is_terminal(),
        }
    }
}

impl Reporter for ConsoleReporter {
    fn section(&self, name: &str) {
        eprintln!();
        eprintln!("==================== {} ====================", name);
    }

    fn kv(&self, key: &str, value: &str) {
        eprintln!("{:<12}: {}", key, value);
    }

    fn status(&self, scope: &str, message: &str) {
        let scope = format!("[{:<12}]", scope);
        if self.interactive {
            eprintln!("{} {}", style(scope).with(Color::Cyan), message);
        } else {
            eprintln!("{} {}", scope, message);
        }
    }

    fn raw(&self, line: &str) {
        println!("{}", line);
    }
}
