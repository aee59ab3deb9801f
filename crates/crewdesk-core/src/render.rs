//! HTML fragments for the chat transcript and the research pane.
//!
//! Research text always goes through [`escape_html`]. Chat bubbles are inserted
//! as markup unless the caller asks for escaping.

use crate::{ChatMessage, DeskConfig, ResearchResult};

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn chat_bubble_html(message: &ChatMessage, escape: bool) -> String {
    let content = match escape {
        true => escape_html(&message.text),
        false => message.text.clone(),
    };
    format!(r#"<div class="message-content">{}</div>"#, content)
}

pub fn running_html(topic: &str, model: &str) -> String {
    format!(
        r#"<div class="research-status">Researching "{}" with {}... this can take a few minutes.</div>"#,
        escape_html(topic),
        escape_html(model)
    )
}

pub fn error_block_html(message: &str) -> String {
    format!(
        r#"<div class="research-error" style="color: red;"><strong>Error:</strong> {}</div>"#,
        escape_html(message)
    )
}

fn note_html(message: &str) -> String {
    format!(
        r#"<div class="research-note" style="color: orange;"><strong>Note:</strong> {}</div>"#,
        escape_html(message)
    )
}

fn stdout_html(stdout: Option<&str>) -> String {
    let body = match stdout {
        Some(text) => format!("<pre>{}</pre>", escape_html(text)),
        None => r#"<p class="research-empty">Output is empty.</p>"#.to_string(),
    };
    format!(r#"<div class="research-stdout"><h4>Output</h4>{}</div>"#, body)
}

fn report_html(result: &ResearchResult, config: &DeskConfig) -> Option<String> {
    let content = result.report_content()?;
    let header = match result.report_filename() {
        Some(filename) => {
            let href = config.report_url(result.report_backend(), filename);
            format!(
                r#"<h4>Report <a class="report-download" href="{}" download="{}">Download {}</a></h4>"#,
                escape_html(&href),
                escape_html(filename),
                escape_html(filename)
            )
        }
        None => "<h4>Report (download unavailable)</h4>".to_string(),
    };
    Some(format!(
        r#"<div class="research-report">{}<pre>{}</pre></div>"#,
        header,
        escape_html(content)
    ))
}

/// Render a research result.
///
/// A lone error becomes a single red block. Otherwise the stdout section comes
/// first, then the report (if any), then the error as an orange note.
pub fn research_result_html(result: &ResearchResult, config: &DeskConfig) -> String {
    if result.is_fatal() {
        return error_block_html(result.error().unwrap_or_default());
    }

    let mut html = stdout_html(result.stdout());
    if let Some(report) = report_html(result, config) {
        html.push_str(&report);
    }
    if let Some(error) = result.error() {
        html.push_str(&note_html(error));
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn test_escape_all_special_chars() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_full_result_with_download_link() {
        let result = ResearchResult {
            stdout_result: Some("ok".into()),
            report_filename: Some("r.md".into()),
            report_content: Some("# hi".into()),
            model: Some("ollama:llama3".into()),
            ..Default::default()
        };
        let html = research_result_html(&result, &DeskConfig::default());

        assert!(html.contains(r#"<div class="research-stdout"><h4>Output</h4><pre>ok</pre></div>"#));
        assert!(html.contains("<pre># hi</pre>"));
        assert!(html.contains(r#"href="/api/research/report/ollama/r.md""#));
        assert!(html.contains(r#"download="r.md""#));
        assert_eq!(count(&html, "research-error"), 0);
        assert_eq!(count(&html, "research-note"), 0);
    }

    #[test]
    fn test_lone_error_is_single_red_block() {
        let result = ResearchResult {
            error: Some("boom".into()),
            ..Default::default()
        };
        let html = research_result_html(&result, &DeskConfig::default());

        assert_eq!(
            html,
            r#"<div class="research-error" style="color: red;"><strong>Error:</strong> boom</div>"#
        );
        assert_eq!(count(&html, "research-stdout"), 0);
        assert_eq!(count(&html, "research-report"), 0);
    }

    #[test]
    fn test_error_alongside_output_is_note() {
        let result = ResearchResult {
            stdout_result: Some("partial".into()),
            error: Some("timeout on step 3".into()),
            ..Default::default()
        };
        let html = research_result_html(&result, &DeskConfig::default());

        assert!(html.starts_with(r#"<div class="research-stdout">"#));
        assert!(html.ends_with(
            r#"<div class="research-note" style="color: orange;"><strong>Note:</strong> timeout on step 3</div>"#
        ));
        assert_eq!(count(&html, "research-error"), 0);
    }

    #[test]
    fn test_report_without_filename_has_no_link() {
        let result = ResearchResult {
            report_content: Some("summary".into()),
            ..Default::default()
        };
        let html = research_result_html(&result, &DeskConfig::default());

        assert!(html.contains("Output is empty."));
        assert!(html.contains("download unavailable"));
        assert!(html.contains("<pre>summary</pre>"));
        assert!(!html.contains("<a "));
    }

    #[test]
    fn test_filename_without_content_renders_no_report() {
        let result = ResearchResult {
            stdout_result: Some("ok".into()),
            report_filename: Some("r.md".into()),
            ..Default::default()
        };
        assert!(!research_result_html(&result, &DeskConfig::default()).contains("research-report"));
    }

    #[test]
    fn test_link_falls_back_to_unknown_backend() {
        let result = ResearchResult {
            report_filename: Some("notes v2.md".into()),
            report_content: Some("x".into()),
            ..Default::default()
        };
        let html = research_result_html(&result, &DeskConfig::default());
        assert!(html.contains(r#"href="/api/research/report/unknown/notes%20v2.md""#));
        assert!(html.contains(r#"download="notes v2.md""#));
    }

    #[test]
    fn test_research_text_is_escaped() {
        let result = ResearchResult {
            stdout_result: Some("<script>alert(1)</script>".into()),
            report_content: Some("<img src=x onerror=alert(1)>".into()),
            ..Default::default()
        };
        let html = research_result_html(&result, &DeskConfig::default());

        assert!(!html.contains("<script>"));
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn test_chat_bubble_keeps_markup_unless_escaped() {
        let message = ChatMessage::user("<script>x</script>");
        assert_eq!(
            chat_bubble_html(&message, false),
            r#"<div class="message-content"><script>x</script></div>"#
        );
        assert!(chat_bubble_html(&message, true).contains("&lt;script&gt;"));
    }

    #[test]
    fn test_running_placeholder_escapes_topic() {
        let html = running_html("<b>rust</b>", "llama3");
        assert!(html.contains("&lt;b&gt;rust&lt;/b&gt;"));
        assert!(html.contains("research-status"));
    }
}
