//! YAML payload detection for inbound bot messages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bot answers with migration rules written as YAML, sometimes fenced,
//! sometimes bare. The renderer asks this module whether a message carries
//! such a payload so it can offer a copy button and YAML highlighting.
//!
//! TRADE-OFFS
//! ==========
//! Detection is syntactic only. False positives (prose with a `word:` line)
//! and false negatives are accepted; nothing here parses YAML.

#[cfg(test)]
#[path = "detect_test.rs"]
mod detect_test;

use std::sync::OnceLock;

use regex::Regex;

/// Fence delimiter for markdown code blocks.
pub const FENCE: &str = "```";

/// Language tags accepted as YAML fences.
pub const YAML_TAGS: [&str; 2] = ["yaml", "yml"];

const EXCERPT_CHARS: usize = 100;

fn fenced_yaml_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)```(?:yaml|yml)\n(.*?)\n```").expect("fenced yaml regex"))
}

/// A named, line-anchored pattern used by the heuristic classifier.
#[derive(Clone, Debug)]
pub struct LinePattern {
    name: &'static str,
    regex: Regex,
}

impl LinePattern {
    /// Compile `pattern` in multi-line mode so `^`/`$` anchor at each line.
    pub fn new(name: &'static str, pattern: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!("(?m){pattern}"))?;
        Ok(Self { name, regex })
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// True when at least one line of `text` matches.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Ordered list of line patterns; the first hit classifies the text.
#[derive(Clone, Debug, Default)]
pub struct Classifier {
    patterns: Vec<LinePattern>,
}

impl Classifier {
    #[must_use]
    pub fn new(patterns: Vec<LinePattern>) -> Self {
        Self { patterns }
    }

    /// The built-in YAML classifier.
    pub fn yaml() -> &'static Self {
        static YAML: OnceLock<Classifier> = OnceLock::new();
        YAML.get_or_init(|| {
            let table = [
                ("rule-item", r"^- ruleID:"),
                ("bare-key", r"^[a-zA-Z_][a-zA-Z0-9_]*:"),
                ("open-key", r"^\s*[a-zA-Z_][a-zA-Z0-9_]*:\s*$"),
                ("list-item", r"^\s*- "),
                ("key-value", r"^\s*[a-zA-Z_][a-zA-Z0-9_]*:\s*[^\n]+$"),
            ];
            let patterns = table
                .into_iter()
                .map(|(name, pattern)| LinePattern::new(name, pattern).expect("builtin yaml pattern"))
                .collect();
            Classifier::new(patterns)
        })
    }

    /// Append a pattern after the existing ones.
    #[must_use]
    pub fn with_pattern(mut self, pattern: LinePattern) -> Self {
        self.patterns.push(pattern);
        self
    }

    #[must_use]
    pub fn patterns(&self) -> &[LinePattern] {
        &self.patterns
    }

    /// Name of the first pattern matching the trimmed text.
    ///
    /// Returns `None` when the text already contains a fence (code of an
    /// unknown kind, not raw YAML) or when no pattern matches.
    #[must_use]
    pub fn classify(&self, text: &str) -> Option<&'static str> {
        let trimmed = text.trim();
        if trimmed.contains(FENCE) {
            return None;
        }
        self.patterns
            .iter()
            .find(|pattern| pattern.matches(trimmed))
            .map(LinePattern::name)
    }
}

/// Extract the YAML payload from `text` using the built-in classifier.
///
/// A fenced `yaml`/`yml` block wins and its body comes back trimmed. Without
/// one, the whole text is returned verbatim when it looks like raw YAML.
#[must_use]
pub fn detect(text: &str) -> Option<String> {
    detect_with(Classifier::yaml(), text)
}

/// [`detect`] with a caller-supplied classifier for the raw-text path.
#[must_use]
pub fn detect_with(classifier: &Classifier, text: &str) -> Option<String> {
    if let Some(body) = extract_fenced(text) {
        return Some(body);
    }

    let matched = classifier.classify(text);
    log::debug!(
        "yaml detection: matched={:?} excerpt={:?}",
        matched,
        excerpt(text.trim())
    );
    matched.map(|_| text.to_owned())
}

/// Trimmed body of the first fenced `yaml`/`yml` block, if any.
#[must_use]
pub fn extract_fenced(text: &str) -> Option<String> {
    fenced_yaml_regex()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|body| body.as_str().trim().to_owned())
}

/// True when `text` already opens a fence tagged with a YAML language.
#[must_use]
pub fn has_yaml_fence(text: &str) -> bool {
    YAML_TAGS.iter().any(|tag| text.contains(&format!("{FENCE}{tag}")))
}

fn excerpt(text: &str) -> String {
    text.chars().take(EXCERPT_CHARS).collect()
}
