//! Tag classification
//!
//! Stateless queries over a single tag token. Nothing is cached: every
//! query re-reads the raw token.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

/// Element with no attributes terminated by `/>`, e.g. `<br/>` or `<br />`
static SELF_CLOSING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^<[a-z][a-z0-9]*\s*/>$").unwrap());

/// A `<` followed by a name whose closing `>` is not preceded by `/`
static OPENING: Lazy<Regex> = Lazy::new(|| Regex::new(r"<\w+(?:[^<]*[^</])?>").unwrap());

/// Attribute name to unquoted value, in source order
pub type Attributes = IndexMap<String, String>;

/// Structural kind of a tag token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// `<p>`, `<a href="...">`
    Opening,
    /// `</p>`
    Closing,
    /// `<br/>`
    SelfClosing,
    /// `<!DOCTYPE html>`, `<?xml ...?>`
    Declaration,
    /// Anything else shaped like a tag, e.g. `<img src="x"/>`
    Unknown,
}

/// Semantic category of a tag, derived from its name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagCategory {
    OrderedList,
    UnorderedList,
    ListItem,
    Link,
    /// `h1`-`h6` with the level taken from the second character
    Heading(u8),
    LineBreak,
    /// `p` and `div`
    Paragraph,
    Bold,
    /// `i` and `em`
    Italic,
    Underline,
    /// `s` and `strike`
    Strike,
    Pre,
    Code,
    Blockquote,
    Other,
}

impl TagCategory {
    /// Classify a lowercase tag name. Matching is case-sensitive.
    pub fn from_name(name: &str) -> Self {
        match name {
            "ol" => TagCategory::OrderedList,
            "ul" => TagCategory::UnorderedList,
            "li" => TagCategory::ListItem,
            "a" => TagCategory::Link,
            "br" => TagCategory::LineBreak,
            "p" | "div" => TagCategory::Paragraph,
            "b" => TagCategory::Bold,
            "i" | "em" => TagCategory::Italic,
            "u" => TagCategory::Underline,
            "s" | "strike" => TagCategory::Strike,
            "pre" => TagCategory::Pre,
            "code" => TagCategory::Code,
            "blockquote" => TagCategory::Blockquote,
            _ => heading_level(name)
                .map(TagCategory::Heading)
                .unwrap_or(TagCategory::Other),
        }
    }

    /// `ol` or `ul`
    pub fn is_list_container(&self) -> bool {
        matches!(self, TagCategory::OrderedList | TagCategory::UnorderedList)
    }

    /// `ol`, `ul` or `li`
    pub fn is_list(&self) -> bool {
        self.is_list_container() || *self == TagCategory::ListItem
    }
}

fn heading_level(name: &str) -> Option<u8> {
    match name.as_bytes() {
        [b'h', level @ b'1'..=b'6'] => Some(level - b'0'),
        _ => None,
    }
}

/// A borrowed view over one raw tag token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag<'a> {
    raw: &'a str,
}

impl<'a> Tag<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self { raw }
    }

    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// Determine whether this is an opening, closing or self-closing tag
    pub fn kind(&self) -> TagKind {
        if self.raw.starts_with("</") {
            TagKind::Closing
        } else if self.raw.starts_with("<!") || self.raw.starts_with("<?") {
            TagKind::Declaration
        } else if SELF_CLOSING.is_match(self.raw) {
            TagKind::SelfClosing
        } else if OPENING.is_match(self.raw) {
            TagKind::Opening
        } else {
            TagKind::Unknown
        }
    }

    /// The tag name: everything after `<` (or `</`) up to the first
    /// whitespace, `/` or `>`
    pub fn name(&self) -> &'a str {
        let (start, end) = self.name_span();
        &self.raw[start..end]
    }

    fn name_span(&self) -> (usize, usize) {
        let mut start = usize::from(self.raw.starts_with('<'));
        if self.raw[start..].starts_with('/') {
            start += 1;
        }
        let end = self.raw[start..]
            .find(|c: char| c.is_whitespace() || c == '/' || c == '>')
            .map_or(self.raw.len(), |i| start + i);
        (start, end)
    }

    pub fn category(&self) -> TagCategory {
        TagCategory::from_name(self.name())
    }

    /// Parse `name=value` pairs
    ///
    /// Values may be double-quoted, single-quoted or bare. Attributes
    /// without a value, or with an empty one, are skipped.
    pub fn attributes(&self) -> Attributes {
        let mut attributes = Attributes::new();
        let bytes = self.raw.as_bytes();
        let (_, mut pos) = self.name_span();

        let skip_while = |mut pos: usize, pred: fn(u8) -> bool| {
            while pos < bytes.len() && pred(bytes[pos]) {
                pos += 1;
            }
            pos
        };

        loop {
            pos = skip_while(pos, |b| b.is_ascii_whitespace() || b == b'/');
            if pos >= bytes.len() || bytes[pos] == b'>' {
                break;
            }

            let name_start = pos;
            pos = skip_while(pos, |b| {
                !(b.is_ascii_whitespace() || matches!(b, b'=' | b'>' | b'/'))
            });
            let attr_name = &self.raw[name_start..pos];

            pos = skip_while(pos, |b| b.is_ascii_whitespace());
            if pos >= bytes.len() || bytes[pos] != b'=' {
                // Valueless attribute
                continue;
            }
            pos = skip_while(pos + 1, |b| b.is_ascii_whitespace());

            let value = match bytes.get(pos) {
                Some(&quote @ (b'"' | b'\'')) => {
                    let value_start = pos + 1;
                    let value_end = self.raw[value_start..]
                        .find(quote as char)
                        .map_or(bytes.len(), |i| value_start + i);
                    pos = (value_end + 1).min(bytes.len());
                    &self.raw[value_start..value_end]
                }
                _ => {
                    let value_start = pos;
                    pos = skip_while(pos, |b| !(b.is_ascii_whitespace() || b == b'>'));
                    &self.raw[value_start..pos]
                }
            };

            if !attr_name.is_empty() && !value.is_empty() {
                attributes.insert(attr_name.to_string(), value.to_string());
            }
        }

        attributes
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.attributes().shift_remove(name)
    }

    /// Link target of an `<a>` tag
    pub fn href(&self) -> Option<String> {
        self.attribute("href")
    }

    pub fn heading_level(&self) -> Option<u8> {
        heading_level(self.name())
    }

    pub fn same_name(&self, other: &Tag<'_>) -> bool {
        self.name() == other.name()
    }
}
