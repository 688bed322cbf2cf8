//! 터미널(one-shot `analyze`) 출력 렌더링.

use crossterm::style::{Color, Stylize, style};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::domain::session::Notice;
use crate::domain::view::{GAUGE_MAX, GaugeBand, GaugeView, PageView};

const GAUGE_CELLS: usize = 40;
const SENTENCE_PREVIEW_WIDTH: usize = 60;

/// 뷰 모델을 사람이 읽을 텍스트로 만든다. `color`가 꺼져 있으면 ANSI 코드를 넣지 않는다.
pub fn render_page_terminal(view: &PageView, color: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!("== {} ==\n", view.labels.title));

    if let Some(notice) = &view.notice {
        let (tag, message, tint) = match notice {
            Notice::Warning(message) => ("warning", message, Color::Yellow),
            Notice::Fatal(message) => ("error", message, Color::Red),
        };
        out.push_str(&paint(&format!("[{tag}] {message}"), tint, color));
        out.push('\n');
    }

    if let Some(result) = &view.classification {
        out.push_str(&format!("\n## {}\n", view.labels.result_heading));
        let body = result.text.trim_end();
        if result.failed {
            out.push_str(&paint(body, Color::Red, color));
        } else {
            out.push_str(body);
        }
        out.push('\n');
    }

    if let Some(sentiment) = &view.sentiment {
        out.push_str("\n## Análisis de Sentimiento\n");
        out.push_str(&gauge_line(&sentiment.gauge, color));
        out.push('\n');
        out.push_str(&format!(
            "Subjetividad general: {}\n",
            sentiment.overall_subjectivity_label
        ));

        out.push_str("\n## Análisis por oración\n");
        for sentence in &sentiment.sentences {
            out.push_str(&format!(
                "Oración {:<3} polaridad {:>5}  subjetividad {:>4}  {}\n",
                sentence.index,
                sentence.polarity_label,
                sentence.subjectivity_label,
                truncate_to_width(&sentence.text, SENTENCE_PREVIEW_WIDTH)
            ));
        }
    }

    out
}

fn gauge_line(gauge: &GaugeView, color: bool) -> String {
    let filled = ((gauge.value / GAUGE_MAX) * GAUGE_CELLS as f64).round() as usize;
    let filled = filled.min(GAUGE_CELLS);
    let bar = format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(GAUGE_CELLS - filled)
    );
    format!(
        "{} [{}] {:.1}/100",
        gauge.title,
        paint(&bar, band_color(gauge.band), color),
        gauge.value
    )
}

fn band_color(band: GaugeBand) -> Color {
    match band {
        GaugeBand::Low => Color::Red,
        GaugeBand::Mid => Color::Yellow,
        GaugeBand::High => Color::Green,
    }
}

fn paint(text: &str, tint: Color, color: bool) -> String {
    if color {
        style(text).with(tint).to_string()
    } else {
        text.to_string()
    }
}

/// 표시 폭 기준으로 자르고 말줄임표를 붙인다.
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::feedback::{
        ClassificationResult, FeedbackText, SentenceSentiment, SentimentReport, Variant,
    };
    use crate::domain::session::SessionState;

    #[test]
    fn plain_output_has_no_escape_codes() {
        let state = SessionState {
            text: FeedbackText::new("hola"),
            result: Some(ClassificationResult::answer("Categoría: Táctica")),
            sentiment: Some(SentimentReport {
                overall_polarity: 0.0,
                overall_subjectivity: 0.25,
                sentences: vec![SentenceSentiment {
                    text: "hola".into(),
                    polarity: 0.0,
                    subjectivity: 0.0,
                }],
            }),
            notice: None,
        };
        let text = render_page_terminal(&PageView::build(Variant::Analyzer, &state), false);
        assert!(!text.contains('\x1b'));
        assert!(text.contains("Categoría: Táctica"));
        assert!(text.contains("50.0/100"));
        assert!(text.contains("Oración 1"));
    }

    #[test]
    fn gauge_fills_proportionally() {
        let line = gauge_line(&GaugeView::from_polarity(0.0), false);
        assert_eq!(line.matches('█').count(), GAUGE_CELLS / 2);
        assert_eq!(line.matches('░').count(), GAUGE_CELLS / 2);
    }

    #[test]
    fn truncation_respects_display_width() {
        assert_eq!(truncate_to_width("corto", 10), "corto");
        let wide = "測試測試測試";
        let cut = truncate_to_width(wide, 7);
        assert_eq!(cut, "測試測…");
        assert!(UnicodeWidthStr::width(cut.as_str()) <= 7);
    }

    #[test]
    fn warning_notice_is_labelled() {
        let state = SessionState {
            notice: Some(Notice::Warning("Por favor, ingresa un texto de feedback.".into())),
            ..SessionState::default()
        };
        let text = render_page_terminal(&PageView::build(Variant::Classifier, &state), false);
        assert!(text.contains("[warning] Por favor, ingresa un texto de feedback."));
    }
}
