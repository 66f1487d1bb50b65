//! Token-by-token Markdown emitter
//!
//! A [`ConversionState`] lives for exactly one conversion. It tracks the
//! open tags, the list nesting frames, the buffered text segments and the
//! target of the link currently being written.

use std::borrow::Cow;

use smallvec::SmallVec;
use tagmark_core::{Tag, TagCategory, TagKind, Token};

use crate::symbols::Symbols;

/// Item counter of one open list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Counter {
    Bullet,
    Number(u32),
}

#[derive(Debug, Clone, Copy)]
struct ListFrame {
    /// 1-based nesting depth
    level: usize,
    counter: Counter,
}

/// Per-call conversion state
pub(crate) struct ConversionState<'a, 's> {
    symbols: &'s Symbols,
    // Documents rarely nest deeper than this
    open_tags: SmallVec<[Tag<'a>; 8]>,
    lists: SmallVec<[ListFrame; 4]>,
    /// The last segment is the one being written
    segments: Vec<String>,
    pending_link: Option<String>,
    tokens: usize,
}

impl<'a, 's> ConversionState<'a, 's> {
    pub(crate) fn new(symbols: &'s Symbols) -> Self {
        Self {
            symbols,
            open_tags: SmallVec::new(),
            lists: SmallVec::new(),
            segments: vec![String::new()],
            pending_link: None,
            tokens: 0,
        }
    }

    pub(crate) fn feed(&mut self, token: Token<'a>) {
        self.tokens += 1;

        let raw = match token {
            Token::Text(text) => {
                self.append(text);
                return;
            }
            Token::Tag(raw) => raw,
        };

        let tag = Tag::new(raw);
        match tag.kind() {
            TagKind::Opening => self.open(tag),
            TagKind::Closing => self.close(tag),
            TagKind::SelfClosing => {
                if tag.category() == TagCategory::LineBreak {
                    let symbols = self.symbols;
                    self.append(&symbols.line_break);
                }
            }
            TagKind::Declaration | TagKind::Unknown => {
                tracing::trace!(tag = raw, "Ignoring tag");
            }
        }
    }

    pub(crate) fn token_count(&self) -> usize {
        self.tokens
    }

    pub(crate) fn segment_count(&self) -> usize {
        self.segments.iter().filter(|s| !s.is_empty()).count()
    }

    /// Concatenate the non-empty segments
    pub(crate) fn finish(self) -> String {
        self.segments.into_iter().filter(|s| !s.is_empty()).collect()
    }

    fn open(&mut self, tag: Tag<'a>) {
        let category = tag.category();
        if category != TagCategory::LineBreak {
            self.open_tags.push(tag);
        }

        match category {
            TagCategory::OrderedList | TagCategory::UnorderedList => {
                // A nested list starts on its own line
                self.ensure_line_start();
                let level = self.lists.last().map_or(0, |frame| frame.level) + 1;
                let counter = if category == TagCategory::OrderedList {
                    Counter::Number(1)
                } else {
                    Counter::Bullet
                };
                self.lists.push(ListFrame { level, counter });
            }
            TagCategory::Link => {
                self.pending_link = tag.href();
                self.append("[");
            }
            TagCategory::ListItem => {
                if let Some(marker) = self.list_item_marker() {
                    self.append(&marker);
                }
            }
            _ => {
                let text = self.open_text(category);
                self.append(&text);
            }
        }
    }

    fn close(&mut self, tag: Tag<'a>) {
        let category = tag.category();
        if category != TagCategory::LineBreak && self.open_tags.pop().is_none() {
            tracing::debug!(tag = tag.name(), "Closing tag without an open tag");
        }

        let text = self.close_text(category);

        if category.is_list_container() {
            if let Some(level) = self.lists.last().map(|frame| frame.level) {
                while self.lists.last().is_some_and(|frame| frame.level == level) {
                    self.lists.pop();
                }
            }
        }

        if category == TagCategory::Link {
            let target = self.pending_link.take().unwrap_or_default();
            self.append(&format!("]({target})"));
        } else if category == TagCategory::ListItem {
            self.ensure_line_start();
        }

        self.append(&text);

        // Block boundary: start a new segment
        let at_boundary = self
            .open_tags
            .last()
            .map_or(true, |top| top.category().is_list());
        if at_boundary && !self.active().is_empty() {
            self.segments.push(String::new());
        }
    }

    /// Marker for the next item of the innermost list, advancing its counter
    fn list_item_marker(&mut self) -> Option<String> {
        let symbols = self.symbols;
        let frame = self.lists.last_mut()?;
        let indent = symbols.indent.repeat(frame.level - 1);

        let marker = match frame.counter {
            Counter::Bullet => format!("{indent}{} ", symbols.bullet),
            Counter::Number(n) => {
                frame.counter = Counter::Number(n + 1);
                format!("{indent}{n}. ")
            }
        };
        Some(marker)
    }

    /// Marker shared by the opening and closing side of an emphasis tag
    fn emphasis(&self, category: TagCategory) -> Option<&'s str> {
        let symbols = self.symbols;
        match category {
            TagCategory::Bold => Some(symbols.bold.as_str()),
            TagCategory::Italic => Some(symbols.italic.as_str()),
            TagCategory::Underline => Some(symbols.underline.as_str()),
            TagCategory::Strike => Some(symbols.strike.as_str()),
            _ => None,
        }
    }

    fn open_text(&self, category: TagCategory) -> Cow<'s, str> {
        if let Some(marker) = self.emphasis(category) {
            return Cow::Borrowed(marker);
        }

        let symbols = self.symbols;
        match category {
            TagCategory::LineBreak => Cow::Borrowed(symbols.line_break.as_str()),
            TagCategory::Code if !self.in_pre() => Cow::Borrowed(symbols.code.as_str()),
            TagCategory::Pre => Cow::Owned(format!("{}\n", symbols.fence)),
            // The underscore keeps the quote from picking up paragraph spacing
            TagCategory::Blockquote => Cow::Owned(format!("{}_", symbols.blockquote)),
            TagCategory::Heading(level) => {
                Cow::Owned(format!("{} ", symbols.heading.repeat(usize::from(level))))
            }
            _ => Cow::Borrowed(""),
        }
    }

    fn close_text(&self, category: TagCategory) -> Cow<'s, str> {
        if let Some(marker) = self.emphasis(category) {
            return Cow::Borrowed(marker);
        }

        let symbols = self.symbols;
        match category {
            TagCategory::Paragraph => Cow::Borrowed(symbols.paragraph.as_str()),
            TagCategory::Code if !self.in_pre() => Cow::Borrowed(symbols.code.as_str()),
            TagCategory::Pre => Cow::Owned(format!("\n{}\n", symbols.fence)),
            TagCategory::Blockquote => Cow::Borrowed("_"),
            TagCategory::Heading(_) => Cow::Borrowed("\n"),
            _ => Cow::Borrowed(""),
        }
    }

    fn in_pre(&self) -> bool {
        self.open_tags
            .iter()
            .any(|tag| tag.category() == TagCategory::Pre)
    }

    fn active(&mut self) -> &mut String {
        if self.segments.is_empty() {
            self.segments.push(String::new());
        }
        let last = self.segments.len() - 1;
        &mut self.segments[last]
    }

    fn append(&mut self, text: &str) {
        if !text.is_empty() {
            self.active().push_str(text);
        }
    }

    /// Append a newline unless the output is empty or already ends a line
    fn ensure_line_start(&mut self) {
        let last = self.segments.iter().rev().find_map(|s| s.chars().last());
        if last.is_some_and(|c| c != '\n') {
            self.append("\n");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tagmark_core::tokenize;

    fn run(html: &str) -> (String, usize) {
        let symbols = Symbols::default();
        let mut state = ConversionState::new(&symbols);
        for token in tokenize(html) {
            state.feed(token);
        }
        let segments = state.segment_count();
        (state.finish(), segments)
    }

    #[test]
    fn test_segment_per_top_level_block() {
        let (markdown, segments) = run("<h2>Title</h2><p>Body</p>");
        assert_eq!(markdown, "## Title\nBody\n");
        assert_eq!(segments, 2);
    }

    #[test]
    fn test_inline_text_stays_in_segment() {
        let (markdown, segments) = run("<p>a <b>b</b> c</p>");
        assert_eq!(markdown, "a __b__ c\n");
        assert_eq!(segments, 1);
    }

    #[test]
    fn test_segment_per_list_item() {
        let (markdown, segments) = run("<ol><li>a</li><li>b</li></ol>");
        assert_eq!(markdown, "1. a\n2. b\n");
        assert_eq!(segments, 2);
    }

    #[test]
    fn test_list_frames_collapse_on_close() {
        let symbols = Symbols::default();
        let mut state = ConversionState::new(&symbols);
        for token in tokenize("<ol><li>a<ul><li>b</li>") {
            state.feed(token);
        }
        assert_eq!(state.lists.len(), 2);
        assert_eq!(state.lists[1].level, 2);

        for token in tokenize("</ul>") {
            state.feed(token);
        }
        assert_eq!(state.lists.len(), 1);
        assert_eq!(state.lists[0].counter, Counter::Number(2));
    }

    #[test]
    fn test_pending_link_consumed() {
        let symbols = Symbols::default();
        let mut state = ConversionState::new(&symbols);
        state.feed(Token::Tag(r#"<a href="http://x.test">"#));
        assert_eq!(state.pending_link.as_deref(), Some("http://x.test"));
        state.feed(Token::Text("x"));
        state.feed(Token::Tag("</a>"));
        assert_eq!(state.pending_link, None);
    }

    #[test]
    fn test_break_tag_is_not_pushed() {
        let symbols = Symbols::default();
        let mut state = ConversionState::new(&symbols);
        state.feed(Token::Tag("<p>"));
        state.feed(Token::Tag("<br>"));
        assert_eq!(state.open_tags.len(), 1);
        state.feed(Token::Tag("</br>"));
        assert_eq!(state.open_tags.len(), 1);
    }

    #[test]
    fn test_unmatched_closing_tags_are_tolerated() {
        let (markdown, _) = run("</ul></li></p>text");
        assert_eq!(markdown, "\ntext");
    }

    #[test]
    fn test_list_item_outside_list() {
        let (markdown, _) = run("<li>orphan</li>");
        assert_eq!(markdown, "orphan\n");
    }

    #[test]
    fn test_token_count() {
        let symbols = Symbols::default();
        let mut state = ConversionState::new(&symbols);
        for token in tokenize("<b>x</b> y") {
            state.feed(token);
        }
        assert_eq!(state.token_count(), 4);
    }
}
