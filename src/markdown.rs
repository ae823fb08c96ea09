//! Markdown Rendering
//!
//! Renders site copy with pulldown-cmark plus one extension: accent
//! markers `%o%text%o%` / `%g%text%g%` that wrap text in the brand
//! orange or green. Raw HTML in the source is escaped, never passed on.

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser};

/// Accent codes and the CSS colour each one maps to
const ACCENTS: &[(&str, &str)] = &[
    ("o", "var(--jc-orange)"),
    ("g", "var(--jc-green)"),
];

/// Render markdown to an HTML string
pub fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES);
    let mut events = Vec::new();

    for event in parser {
        match event {
            Event::Text(text) if contains_accent(&text) => events.extend(accent_events(&text)),
            Event::Html(raw) | Event::InlineHtml(raw) => {
                events.push(Event::Text(raw));
            }
            other => events.push(other),
        }
    }

    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

fn contains_accent(text: &str) -> bool {
    ACCENTS.iter().any(|(code, _)| text.contains(&format!("%{}%", code)))
}

/// Split text on accent markers; an unclosed marker is kept literally
fn accent_events(text: &str) -> Vec<Event<'static>> {
    let mut events = Vec::new();
    let mut remaining = text;

    loop {
        let earliest = ACCENTS
            .iter()
            .filter_map(|(code, color)| {
                let pattern = format!("%{}%", code);
                remaining.find(&pattern).map(|pos| (pos, pattern, *color))
            })
            .min_by_key(|(pos, _, _)| *pos);

        let Some((pos, pattern, color)) = earliest else {
            if !remaining.is_empty() {
                events.push(Event::Text(CowStr::from(remaining.to_string())));
            }
            break;
        };

        if pos > 0 {
            events.push(Event::Text(CowStr::from(remaining[..pos].to_string())));
        }
        let after = &remaining[pos + pattern.len()..];

        match after.find(&pattern) {
            Some(end) => {
                events.push(Event::Html(CowStr::from(format!("<span style=\"color: {}\">", color))));
                if end > 0 {
                    events.push(Event::Text(CowStr::from(after[..end].to_string())));
                }
                events.push(Event::Html(CowStr::from("</span>")));
                remaining = &after[end + pattern.len()..];
            }
            None => {
                events.push(Event::Text(CowStr::from(pattern)));
                remaining = after;
            }
        }
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_and_paragraphs() {
        let html = parse_markdown("### 1. Título\n\nTexto do parágrafo.");
        assert_eq!(html, "<h3>1. Título</h3>\n<p>Texto do parágrafo.</p>\n");
    }

    #[test]
    fn test_accent_markers() {
        let html = parse_markdown("Suporte %o%24/7%o% garantido");
        assert_eq!(
            html,
            "<p>Suporte <span style=\"color: var(--jc-orange)\">24/7</span> garantido</p>\n"
        );
    }

    #[test]
    fn test_unclosed_marker_is_literal() {
        let html = parse_markdown("apenas %g%metade");
        assert_eq!(html, "<p>apenas %g%metade</p>\n");
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = parse_markdown("oi <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
