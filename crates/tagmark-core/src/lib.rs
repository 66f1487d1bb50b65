//! tagmark-core - markup tokenizer and tag classifier
//!
//! This crate provides the two stateless building blocks of the tagmark
//! converter: a lossless tokenizer that splits markup into tag and text
//! tokens, and a classifier that answers structural questions about a
//! single tag token.
//!
//! # Architecture
//!
//! ```text
//! HTML String ──tokenize──▶ [Token::Tag | Token::Text] ──Tag::new──▶ kind / name / category
//! ```
//!
//! # Example
//!
//! ```rust
//! use tagmark_core::{tokenize, Tag, TagCategory, TagKind, Token};
//!
//! for token in tokenize(r#"<a href="https://example.com">Example</a>"#) {
//!     if let Token::Tag(raw) = token {
//!         let tag = Tag::new(raw);
//!         assert_eq!(tag.category(), TagCategory::Link);
//!         if tag.kind() == TagKind::Opening {
//!             assert_eq!(tag.href().as_deref(), Some("https://example.com"));
//!         }
//!     }
//! }
//! ```

mod tag;
mod token;

pub use tag::{Attributes, Tag, TagCategory, TagKind};
pub use token::{tokenize, Token, Tokenizer};
