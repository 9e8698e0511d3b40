use super::*;
use crate::highlight::HighlightError;

fn html_of(node: &RenderedMessage) -> &str {
    match &node.body {
        MessageBody::Html(html) => html,
        MessageBody::Text(_) => panic!("expected html body"),
    }
}

/// Fails only for one language tag, delegating everything else.
struct FailsFor(&'static str);

impl Highlighter for FailsFor {
    fn html(&self, code: &str, tag: Option<&str>) -> Result<String, HighlightError> {
        if tag == Some(self.0) {
            return Err(HighlightError::MissingTheme("test"));
        }
        SyntectHighlighter.html(code, tag)
    }
}

// =============================================================
// User messages
// =============================================================

#[test]
fn user_message_is_literal_text() {
    let node = render(ChatMessage::user("<b>hi</b>"));
    assert_eq!(node.body, MessageBody::Text("<b>hi</b>".to_owned()));
    assert_eq!(node.inner_html(), "&lt;b&gt;hi&lt;/b&gt;");
    assert_eq!(node.class_name(), "message user");
    assert!(node.copy.is_none());
}

#[test]
fn user_message_with_yaml_gets_no_copy_control() {
    let node = render(ChatMessage::user("name: widget"));
    assert!(node.copy.is_none());
}

// =============================================================
// Bot messages
// =============================================================

#[test]
fn raw_yaml_is_rewrapped_and_copyable() {
    let node = render(ChatMessage::bot("name: widget\nqty: 3"));
    let html = html_of(&node);

    assert_eq!(node.class_name(), "message bot");
    assert_eq!(html.matches("<pre>").count(), 1, "{html}");
    assert!(html.contains("<code class=\"hljs language-yaml\">"), "{html}");
    assert!(html.contains("hl-yaml"), "{html}");
    let copy = node.copy.expect("copy control attached");
    assert_eq!(copy.payload(), "name: widget\nqty: 3");
}

#[test]
fn fenced_yaml_is_not_rewrapped() {
    let node = render(ChatMessage::bot("```yaml\nkey: 1\n```"));
    let html = html_of(&node);

    assert_eq!(html.matches("<pre>").count(), 1);
    assert!(html.contains("language-yaml"));
    assert_eq!(node.copy.expect("copy control").payload(), "key: 1");
}

#[test]
fn prose_around_fenced_yaml_is_kept() {
    let node = render(ChatMessage::bot("Here is the rule:\n\n```yml\n- ruleID: r1\n```\n\nDone."));
    let html = html_of(&node);

    assert!(html.contains("<p>Here is the rule:</p>"), "{html}");
    assert!(html.contains("language-yml"));
    assert!(html.contains("<p>Done.</p>"));
    assert_eq!(node.copy.expect("copy control").payload(), "- ruleID: r1");
}

#[test]
fn plain_prose_has_no_copy_control() {
    let node = render(ChatMessage::bot("Hello, how can I help you?"));
    assert_eq!(html_of(&node), "<p>Hello, how can I help you?</p>\n");
    assert!(node.copy.is_none());
}

#[test]
fn other_code_block_copies_whole_message() {
    let text = "Before:\n\n```java\nimport javax.persistence.Entity;\n```";
    let node = render(ChatMessage::bot(text));
    let html = html_of(&node);

    assert!(html.contains("<code class=\"hljs language-java\">"), "{html}");
    assert!(!html.contains("hl-yaml"));
    assert_eq!(node.copy.expect("copy control").payload(), text);
}

#[test]
fn raw_html_from_bot_is_dropped() {
    let node = render(ChatMessage::bot("<script>alert(1)</script>\n\nhello"));
    let html = html_of(&node);
    assert!(!html.contains("<script>"), "{html}");
    assert!(html.contains("hello"));
}

#[test]
fn failed_block_degrades_without_breaking_others() {
    let text = "```boom\na < b\n```\n\n```yaml\nk: v\n```";
    let node = render_with(ChatMessage::bot(text), &FailsFor("boom"));
    let html = html_of(&node);

    assert!(html.contains("<code class=\"hljs language-boom\">a &lt; b\n</code>"), "{html}");
    assert!(html.contains("hl-yaml"), "{html}");
    assert_eq!(node.copy.expect("copy control").payload(), "k: v");
}

// =============================================================
// Helpers
// =============================================================

#[test]
fn normalize_wraps_only_bare_payloads() {
    assert_eq!(normalize_bot_text("a: 1", Some("a: 1")), "```yaml\na: 1\n```");
    assert_eq!(normalize_bot_text("```yml\na: 1\n```", Some("a: 1")), "```yml\na: 1\n```");
    assert_eq!(normalize_bot_text("hello", None), "hello");
}

#[test]
fn render_markdown_counts_fenced_and_indented_blocks() {
    let out = render_markdown("text\n\n    indented\n\n```\nfenced\n```\n", &SyntectHighlighter);
    assert_eq!(out.code_blocks, 2);
    assert!(out.html.contains("<pre><code class=\"hljs\">"), "{}", out.html);
}

#[test]
fn render_markdown_supports_tables() {
    let out = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |\n", &SyntectHighlighter);
    assert!(out.html.contains("<table>"));
    assert_eq!(out.code_blocks, 0);
}

#[test]
fn source_keeps_normalized_markdown() {
    assert_eq!(render(ChatMessage::bot("a: 1")).source, "```yaml\na: 1\n```");
    assert_eq!(render(ChatMessage::bot("plain")).source, "plain");
    assert_eq!(render(ChatMessage::user("a: 1")).source, "a: 1");
}
