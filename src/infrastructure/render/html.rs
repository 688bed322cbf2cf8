//! 서버 렌더링 HTML 페이지.
//!
//! 사용자 입력과 모델 응답은 항상 `html_escape`로 이스케이프한다.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::domain::session::Notice;
use crate::domain::view::{GAUGE_MAX, GaugeBand, GaugeView, PageView, SentimentView};

const GAUGE_WIDTH: f64 = 300.0;
const GAUGE_BAR_COLOR: &str = "darkblue";

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #fafafa; color: #0F2C4C; }
main { max-width: 960px; margin: 0 auto; padding: 24px; }
textarea { width: 100%; min-height: 150px; font: inherit; padding: 8px; box-sizing: border-box; }
.actions { display: flex; gap: 12px; margin-top: 8px; }
.caption { color: #666; font-size: 0.85em; }
.working { display: none; color: #666; }
form.submitting .working { display: block; }
.notice { padding: 12px; border-radius: 4px; margin: 12px 0; }
.notice.warning { background: #fff4d6; }
.notice.fatal { background: #fde2e2; }
.result { white-space: pre-wrap; }
.columns { display: flex; gap: 24px; flex-wrap: wrap; }
.columns > section { flex: 3 1 320px; }
.columns > aside { flex: 2 1 280px; }
.info { border-left: 4px solid #00E6C3; padding-left: 16px; margin: 16px 0; }
progress { width: 100%; }
footer { margin-top: 24px; padding: 24px; border-radius: 4px; text-align: center; color: white; font-size: 0.8em;
         background: linear-gradient(270deg, #0F2C4C 0%, #00E6C3 100%); }
"#;

const FEEDBACK_TYPES_INFO: &str = r#"<details class="info">
<summary>ℹ️ Información sobre tipos de feedback</summary>
<h3>Tipos de Feedback y Ejemplos en Empresas Tech</h3>
<p><em>Esta clasificación está basada en la propuesta de Daniel Bilbao, CEO de Truora.</em></p>
<h4>1. Feedback desde el Ego</h4>
<p><strong>Definición:</strong> Comentarios que reflejan más sobre quien los emite que sobre el trabajo evaluado, frecuentemente buscando demostrar autoridad o superioridad.</p>
<blockquote><em>"Como líder técnico con 15 años de experiencia, puedo decirte que tu código está completamente desordenado. Yo lo habría hecho de una manera totalmente diferente."</em></blockquote>
<h4>2. Feedback Táctico</h4>
<p><strong>Definición:</strong> Observaciones específicas y accionables enfocadas en comportamientos o resultados concretos, proporcionando dirección clara para mejoras.</p>
<blockquote><em>"En el último sprint, noté que la documentación de las APIs que desarrollaste carece de ejemplos de uso. Sugiero agregar casos de uso comunes y respuestas esperadas para facilitar la integración del equipo frontend."</em></blockquote>
<h4>3. Feedback desde la Bondad</h4>
<p><strong>Definición:</strong> Retroalimentación constructiva entregada con empatía y enfoque en el crecimiento, considerando el contexto y las circunstancias del receptor.</p>
<blockquote><em>"Aprecio el esfuerzo que has puesto en el desarrollo del nuevo feature. ¿Te gustaría que revisemos juntos algunas prácticas de clean code que podrían hacer tu código más mantenible?"</em></blockquote>
</details>"#;

/// 전체 페이지 HTML을 생성한다.
pub fn render_page_html(view: &PageView) -> String {
    let labels = &view.labels;
    let mut out = String::with_capacity(8 * 1024);

    out.push_str("<!DOCTYPE html>\n<html lang=\"es\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str(&format!("<title>{}</title>\n", encode_text(labels.title)));
    out.push_str(&format!("<style>{STYLE}</style>\n</head>\n<body>\n<main>\n"));
    out.push_str(&format!("<h1>{}</h1>\n", encode_text(labels.title)));
    out.push_str(&format!("<p>{}</p>\n", encode_text(labels.subtitle)));

    if view.variant.supports_reset() {
        out.push_str(FEEDBACK_TYPES_INFO);
        out.push('\n');
    }

    render_form(&mut out, view);

    if let Some(notice) = &view.notice {
        render_notice(&mut out, notice);
    }

    match (&view.classification, &view.sentiment) {
        (Some(result), Some(sentiment)) => {
            out.push_str("<div class=\"columns\">\n<section>\n");
            render_classification(&mut out, labels.result_heading, &result.text);
            out.push_str("</section>\n<aside>\n");
            render_sentiment(&mut out, sentiment);
            out.push_str("</aside>\n</div>\n");
        }
        (Some(result), None) => render_classification(&mut out, labels.result_heading, &result.text),
        (None, Some(sentiment)) => render_sentiment(&mut out, sentiment),
        (None, None) => {}
    }

    if view.variant.supports_reset() {
        out.push_str("<footer>🛸 Desarrollado con Rust, axum y Groq API</footer>\n");
    }
    out.push_str("</main>\n</body>\n</html>\n");
    out
}

fn render_form(out: &mut String, view: &PageView) {
    let labels = &view.labels;
    out.push_str(
        "<form method=\"post\" action=\"/submit\" onsubmit=\"this.classList.add('submitting')\">\n",
    );
    out.push_str(&format!(
        "<label for=\"feedback\">{}</label>\n",
        encode_text(labels.input_label)
    ));
    out.push_str(&format!(
        "<textarea id=\"feedback\" name=\"feedback\" placeholder=\"{}\">{}</textarea>\n",
        encode_double_quoted_attribute(labels.placeholder),
        encode_text(&view.text)
    ));
    out.push_str(&format!(
        "<p class=\"caption\">Número de palabras: {}</p>\n",
        view.word_count
    ));

    out.push_str("<div class=\"actions\">\n");
    out.push_str(&format!(
        "<button type=\"submit\">{}</button>\n",
        encode_text(labels.submit)
    ));
    if let Some(reset) = labels.reset {
        out.push_str(&format!(
            "<button type=\"submit\" formaction=\"/reset\" class=\"secondary\">{}</button>\n",
            encode_text(reset)
        ));
    }
    out.push_str("</div>\n");
    out.push_str(&format!(
        "<p class=\"working\" role=\"status\">{}</p>\n</form>\n",
        encode_text(labels.working)
    ));
}

fn render_notice(out: &mut String, notice: &Notice) {
    let (class, message) = match notice {
        Notice::Warning(message) => ("warning", message),
        Notice::Fatal(message) => ("fatal", message),
    };
    out.push_str(&format!(
        "<div class=\"notice {class}\" role=\"alert\">{}</div>\n",
        encode_text(message)
    ));
}

fn render_classification(out: &mut String, heading: &str, text: &str) {
    out.push_str(&format!("<h2>{}</h2>\n", encode_text(heading)));
    out.push_str(&format!("<div class=\"result\">{}</div>\n", encode_text(text)));
}

fn render_sentiment(out: &mut String, sentiment: &SentimentView) {
    out.push_str("<h2>Análisis de Sentimiento</h2>\n");
    out.push_str(&render_gauge_svg(&sentiment.gauge));
    out.push_str(&format!(
        "<p class=\"caption\">Subjetividad general: {}</p>\n",
        sentiment.overall_subjectivity_label
    ));

    out.push_str("<h3>Análisis por oración</h3>\n");
    for sentence in &sentiment.sentences {
        out.push_str(&format!(
            "<details class=\"sentence\">\n<summary>Oración {}</summary>\n",
            sentence.index
        ));
        out.push_str(&format!("<p>{}</p>\n", encode_text(&sentence.text)));
        out.push_str(&format!(
            "<progress max=\"1\" value=\"{:.4}\"></progress>\n",
            sentence.progress
        ));
        out.push_str(&format!("<p>Polaridad: {}</p>\n", sentence.polarity_label));
        out.push_str(&format!(
            "<p>Subjetividad: {}</p>\n</details>\n",
            sentence.subjectivity_label
        ));
    }
}

/// 세 색상 구간 위에 값 막대를 올린 가로 게이지.
pub fn render_gauge_svg(gauge: &GaugeView) -> String {
    let scale = GAUGE_WIDTH / GAUGE_MAX;
    let mut svg = format!(
        "<svg class=\"gauge\" data-band=\"{band}\" width=\"{w}\" height=\"70\" viewBox=\"0 0 {w} 70\" role=\"img\" aria-label=\"{title}: {value:.1}\">\n",
        band = band_name(gauge.band),
        w = GAUGE_WIDTH,
        title = encode_double_quoted_attribute(gauge.title),
        value = gauge.value,
    );
    svg.push_str(&format!(
        "<text x=\"0\" y=\"14\" font-size=\"14\">{}</text>\n",
        encode_text(gauge.title)
    ));
    for band in GaugeBand::all() {
        let (from, to) = band.range();
        svg.push_str(&format!(
            "<rect x=\"{:.1}\" y=\"22\" width=\"{:.1}\" height=\"28\" fill=\"{}\"/>\n",
            from * scale,
            (to - from) * scale,
            band.color()
        ));
    }
    svg.push_str(&format!(
        "<rect class=\"value\" x=\"0\" y=\"31\" width=\"{:.1}\" height=\"10\" fill=\"{GAUGE_BAR_COLOR}\"/>\n",
        gauge.value * scale
    ));
    svg.push_str(&format!(
        "<text x=\"0\" y=\"66\" font-size=\"12\">{:.1}</text>\n</svg>\n",
        gauge.value
    ));
    svg
}

fn band_name(band: GaugeBand) -> &'static str {
    match band {
        GaugeBand::Low => "low",
        GaugeBand::Mid => "mid",
        GaugeBand::High => "high",
    }
}
