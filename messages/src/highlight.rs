//! Syntax highlighting for rendered code blocks.
//!
//! HTML output uses class-based spans (`hl-*`) so the widget stylesheet owns
//! the colors; terminal output uses 24-bit ANSI escapes from a bundled theme.
//! Both fall back to the plain-text grammar for unknown language tags.

#[cfg(test)]
#[path = "highlight_test.rs"]
mod highlight_test;

use std::sync::OnceLock;

use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::{LinesWithEndings, as_24_bit_terminal_escaped};

use crate::detect::YAML_TAGS;

const CLASS_STYLE: ClassStyle = ClassStyle::SpacedPrefixed { prefix: "hl-" };
const TERMINAL_THEME: &str = "base16-ocean.dark";

/// Error returned when a block cannot be highlighted.
#[derive(Debug, thiserror::Error)]
pub enum HighlightError {
    /// The grammar engine rejected the input.
    #[error("syntax highlighting failed: {0}")]
    Syntect(#[from] syntect::Error),
    /// The terminal theme is missing from the bundled theme set.
    #[error("theme not available: {0}")]
    MissingTheme(&'static str),
}

/// Produces highlighted markup for a single code block.
pub trait Highlighter {
    /// Highlight `code` as HTML span markup (without the `<pre><code>` wrapper).
    fn html(&self, code: &str, tag: Option<&str>) -> Result<String, HighlightError>;
}

/// Highlighter backed by syntect's bundled grammars.
#[derive(Clone, Copy, Debug, Default)]
pub struct SyntectHighlighter;

impl Highlighter for SyntectHighlighter {
    fn html(&self, code: &str, tag: Option<&str>) -> Result<String, HighlightError> {
        let syntaxes = syntax_set();
        let mut generator = ClassedHTMLGenerator::new_with_class_style(syntax_for(tag), syntaxes, CLASS_STYLE);
        for line in LinesWithEndings::from(code) {
            generator.parse_html_for_line_which_includes_newline(line)?;
        }
        Ok(generator.finalize())
    }
}

fn syntax_set() -> &'static SyntaxSet {
    static SYNTAXES: OnceLock<SyntaxSet> = OnceLock::new();
    SYNTAXES.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn theme() -> Result<&'static Theme, HighlightError> {
    static THEMES: OnceLock<ThemeSet> = OnceLock::new();
    THEMES
        .get_or_init(ThemeSet::load_defaults)
        .themes
        .get(TERMINAL_THEME)
        .ok_or(HighlightError::MissingTheme(TERMINAL_THEME))
}

/// True for the tags highlighted with the YAML grammar.
#[must_use]
pub fn is_yaml_tag(tag: &str) -> bool {
    YAML_TAGS.iter().any(|yaml| tag.eq_ignore_ascii_case(yaml))
}

/// Grammar for a fence tag: YAML for `yaml`/`yml`, any other known grammar
/// by name or extension, plain text otherwise.
fn syntax_for(tag: Option<&str>) -> &'static SyntaxReference {
    let syntaxes = syntax_set();
    let tag = tag.map(str::trim).filter(|t| !t.is_empty());
    let found = match tag {
        Some(t) if is_yaml_tag(t) => syntaxes.find_syntax_by_extension("yaml"),
        Some(t) => syntaxes.find_syntax_by_token(t),
        None => None,
    };
    found.unwrap_or_else(|| syntaxes.find_syntax_plain_text())
}

/// First word of a fence info string (`yaml title=x` -> `yaml`).
#[must_use]
pub fn fence_tag(info: &str) -> Option<&str> {
    info.split_whitespace().next()
}

/// Render a complete `<pre><code>` block, highlighting through `highlighter`.
///
/// A highlighting failure degrades to the escaped raw text of this block only.
pub fn code_block_html(highlighter: &dyn Highlighter, code: &str, tag: Option<&str>) -> String {
    let class = match tag {
        Some(t) => format!("hljs language-{}", escape_html(t)),
        None => "hljs".to_owned(),
    };
    let inner = highlighter.html(code, tag).unwrap_or_else(|e| {
        log::warn!("highlighting failed for {tag:?} block, showing raw text: {e}");
        escape_html(code)
    });
    format!("<pre><code class=\"{class}\">{inner}</code></pre>\n")
}

/// Highlight `code` for an ANSI terminal.
pub fn highlight_terminal(code: &str, tag: Option<&str>) -> Result<String, HighlightError> {
    let syntaxes = syntax_set();
    let mut lines = HighlightLines::new(syntax_for(tag), theme()?);
    let mut out = String::with_capacity(code.len());
    for line in LinesWithEndings::from(code) {
        let ranges = lines.highlight_line(line, syntaxes)?;
        out.push_str(&as_24_bit_terminal_escaped(&ranges, false));
    }
    out.push_str("\x1b[0m");
    Ok(out)
}

/// Escape text for inclusion in HTML element content or attribute values.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
