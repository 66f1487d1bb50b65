//! Symbol configuration
//!
//! Maps each Markdown style to the literal text emitted for it.

use serde::Deserialize;

use crate::{ConvertError, Result};

/// Option names accepted by [`Symbols::set`] and by deserialization
pub const OPTION_NAMES: &[&str] = &[
    "underline",
    "bold",
    "paragraph",
    "br",
    "italic",
    "strike",
    "indent",
    "unorderedListItem",
    "code",
    "pre",
    "blockquote",
    "heading",
];

/// Literal Markdown text for each style
///
/// Bold, italic, underline and strike-through markers are used on both
/// sides of the wrapped text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Symbols {
    /// `<u>` marker
    pub underline: String,

    /// `<b>` marker
    pub bold: String,

    /// Emitted when a `<p>` or `<div>` closes
    pub paragraph: String,

    /// Emitted for `<br>`
    #[serde(rename = "br")]
    pub line_break: String,

    /// `<i>` / `<em>` marker
    pub italic: String,

    /// `<s>` / `<strike>` marker
    pub strike: String,

    /// Repeated once per nesting level below the outermost list
    pub indent: String,

    /// Unordered list item marker
    #[serde(rename = "unorderedListItem")]
    pub bullet: String,

    /// Inline `<code>` marker
    pub code: String,

    /// Fence around `<pre>` blocks
    #[serde(rename = "pre")]
    pub fence: String,

    /// Prefix for `<blockquote>`
    pub blockquote: String,

    /// Repeated once per heading level
    pub heading: String,
}

impl Default for Symbols {
    fn default() -> Self {
        Self {
            underline: String::new(),
            bold: "__".to_string(),
            paragraph: "\n".to_string(),
            line_break: " ".to_string(),
            italic: "*".to_string(),
            strike: "~~".to_string(),
            indent: "  ".to_string(),
            bullet: "-".to_string(),
            code: "`".to_string(),
            fence: "```".to_string(),
            blockquote: ">".to_string(),
            heading: "#".to_string(),
        }
    }
}

impl Symbols {
    /// Set one symbol by option name
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Result<&mut Self> {
        let slot = match name {
            "underline" => &mut self.underline,
            "bold" => &mut self.bold,
            "paragraph" => &mut self.paragraph,
            "br" => &mut self.line_break,
            "italic" => &mut self.italic,
            "strike" => &mut self.strike,
            "indent" => &mut self.indent,
            "unorderedListItem" => &mut self.bullet,
            "code" => &mut self.code,
            "pre" => &mut self.fence,
            "blockquote" => &mut self.blockquote,
            "heading" => &mut self.heading,
            _ => return Err(ConvertError::UnknownOption(name.to_string())),
        };
        *slot = value.into();
        Ok(self)
    }

    /// Build symbols from `(name, value)` pairs, starting from the defaults
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut symbols = Self::default();
        for (name, value) in pairs {
            symbols.set(name.as_ref(), value)?;
        }
        Ok(symbols)
    }
}
