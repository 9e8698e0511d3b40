//! Message rendering: literal text for the user, markdown for the bot.
//!
//! SYSTEM CONTEXT
//! ==============
//! Bot messages are checked for a YAML payload, rewrapped into a `yaml` fence
//! when the payload arrived bare, rendered to HTML with every code block
//! highlighted, and given a copy control when there is anything worth copying.
//!
//! ERROR HANDLING
//! ==============
//! Highlighting failures are contained to the block that failed; it renders
//! as escaped raw text and the rest of the message is unaffected.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::borrow::Cow;

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd, html};

use crate::copy::CopyControl;
use crate::detect::{self, FENCE};
use crate::highlight::{self, Highlighter, SyntectHighlighter};
use crate::message::{ChatMessage, Sender};

/// Content of a rendered node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MessageBody {
    /// Shown as literal text; never interpreted as markup.
    Text(String),
    /// Trusted HTML produced by the markdown renderer.
    Html(String),
}

/// The rendered form of one [`ChatMessage`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedMessage {
    pub sender: Sender,
    /// Text the body was rendered from; for bot messages this is the
    /// normalized markdown (bare YAML already fenced).
    pub source: String,
    pub body: MessageBody,
    pub copy: Option<CopyControl>,
}

impl RenderedMessage {
    /// CSS classes for the message container (`message user` / `message bot`).
    #[must_use]
    pub fn class_name(&self) -> String {
        format!("message {}", self.sender.role_class())
    }

    /// Body as HTML; literal text is escaped.
    #[must_use]
    pub fn inner_html(&self) -> Cow<'_, str> {
        match &self.body {
            MessageBody::Text(text) => Cow::Owned(highlight::escape_html(text)),
            MessageBody::Html(html) => Cow::Borrowed(html),
        }
    }
}

/// Markdown rendering result.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MarkdownHtml {
    pub html: String,
    pub code_blocks: usize,
}

/// Render a message with the bundled syntect highlighter.
#[must_use]
pub fn render(message: ChatMessage) -> RenderedMessage {
    render_with(message, &SyntectHighlighter)
}

/// Render a message with a caller-supplied highlighter.
pub fn render_with(message: ChatMessage, highlighter: &dyn Highlighter) -> RenderedMessage {
    let ChatMessage { text, sender } = message;
    match sender {
        Sender::User => RenderedMessage {
            sender,
            source: text.clone(),
            body: MessageBody::Text(text),
            copy: None,
        },
        Sender::Bot => {
            let payload = detect::detect(&text);
            let working = normalize_bot_text(&text, payload.as_deref());
            let rendered = render_markdown(&working, highlighter);

            let copy = if payload.is_some() || rendered.code_blocks > 0 {
                Some(CopyControl::new(payload.unwrap_or_else(|| text.clone())))
            } else {
                None
            };

            RenderedMessage {
                sender,
                source: working.into_owned(),
                body: MessageBody::Html(rendered.html),
                copy,
            }
        }
    }
}

/// Wrap a bare payload in a `yaml` fence; leave already-fenced text alone.
#[must_use]
pub fn normalize_bot_text<'a>(text: &'a str, payload: Option<&str>) -> Cow<'a, str> {
    match payload {
        Some(payload) if !detect::has_yaml_fence(text) => Cow::Owned(format!("{FENCE}yaml\n{payload}\n{FENCE}")),
        _ => Cow::Borrowed(text),
    }
}

/// Render markdown to HTML, routing every code block through `highlighter`.
///
/// Raw HTML in the source is dropped; bot output is not trusted markup.
pub fn render_markdown(markdown: &str, highlighter: &dyn Highlighter) -> MarkdownHtml {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut events = Vec::new();
    let mut code: Option<(Option<String>, String)> = None;
    let mut code_blocks = 0;

    for event in Parser::new_ext(markdown, options) {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                let tag = match &kind {
                    CodeBlockKind::Fenced(info) => highlight::fence_tag(info).map(str::to_owned),
                    CodeBlockKind::Indented => None,
                };
                code = Some((tag, String::new()));
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some((tag, body)) = code.take() {
                    code_blocks += 1;
                    let block = highlight::code_block_html(highlighter, &body, tag.as_deref());
                    events.push(Event::Html(block.into()));
                }
            }
            Event::Text(text) if code.is_some() => {
                if let Some((_, body)) = code.as_mut() {
                    body.push_str(&text);
                }
            }
            Event::Html(_) | Event::InlineHtml(_) => {}
            other => events.push(other),
        }
    }

    let mut html = String::new();
    html::push_html(&mut html, events.into_iter());
    MarkdownHtml { html, code_blocks }
}
