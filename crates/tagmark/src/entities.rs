//! HTML character reference decoding

use std::borrow::Cow;

use crate::Result;

/// Decodes character references such as `&amp;` or `&#62;`
///
/// Called exactly once per conversion, on the assembled Markdown.
pub trait EntityDecoder: Send + Sync {
    fn decode<'a>(&self, text: &'a str) -> Result<Cow<'a, str>>;
}

/// Decoder for named and numeric HTML references, backed by `html-escape`
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlEntities;

impl EntityDecoder for HtmlEntities {
    fn decode<'a>(&self, text: &'a str) -> Result<Cow<'a, str>> {
        Ok(html_escape::decode_html_entities(text))
    }
}
