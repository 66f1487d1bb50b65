//! # tagmark
//!
//! Convert HTML strings to Markdown.
//!
//! tagmark walks the markup once: a tokenizer splits it into tag and text
//! tokens, and a small state machine emits Markdown for each token while
//! tracking open tags, list nesting and the pending link target. Character
//! references are decoded at the end, after which surrounding whitespace is
//! trimmed.
//!
//! ## Design
//!
//! This is not an HTML parser. There is no DOM and no repair of malformed
//! markup, and text is never escaped. Well-formed, properly nested input
//! converts predictably. Anything else degrades to odd-looking Markdown,
//! never a panic.
//!
//! ## Example
//!
//! ```rust
//! use tagmark::{Converter, Symbols};
//!
//! let converter = Converter::new();
//! let markdown = converter.convert("<ul><li>One</li><li>Two</li></ul>").unwrap();
//! assert_eq!(markdown, "- One\n- Two");
//!
//! let converter = Converter::with_symbols(Symbols {
//!     bold: "**".to_string(),
//!     ..Default::default()
//! });
//! assert_eq!(converter.convert("<b>Hello</b>").unwrap(), "**Hello**");
//! ```

mod engine;
mod entities;
mod service;
mod symbols;

pub use entities::{EntityDecoder, HtmlEntities};
pub use service::Converter;
pub use symbols::{Symbols, OPTION_NAMES};
pub use tagmark_core::{tokenize, Tag, TagCategory, TagKind, Token};

/// Error type for tagmark operations
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Entity decoding error: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
