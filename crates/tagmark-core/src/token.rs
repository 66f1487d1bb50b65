//! Markup tokenization
//!
//! Splits an HTML string into tag and text tokens in a single left-to-right
//! scan. Tokens borrow from the input and carry no position metadata.
//!
//! The scan is not quote-aware: a `>` inside a quoted attribute value ends
//! the tag early.

/// A raw piece of markup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Everything from a `<` up to and including the next `>`
    Tag(&'a str),
    /// Character data between tags
    Text(&'a str),
}

impl<'a> Token<'a> {
    /// The raw source text of this token
    pub fn as_str(&self) -> &'a str {
        match self {
            Token::Tag(raw) | Token::Text(raw) => raw,
        }
    }

    pub fn is_tag(&self) -> bool {
        matches!(self, Token::Tag(_))
    }
}

/// Iterator over the tokens of a markup string
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let rest = &self.input[self.pos..];
        if rest.is_empty() {
            return None;
        }

        if !rest.starts_with('<') {
            // Text run up to the next tag start
            let end = rest.find('<').unwrap_or(rest.len());
            self.pos += end;
            return Some(Token::Text(&rest[..end]));
        }

        // `<` and `>` are ASCII, so byte offsets are char boundaries
        for (i, b) in rest.bytes().enumerate().skip(1) {
            match b {
                b'>' => {
                    self.pos += i + 1;
                    return Some(Token::Tag(&rest[..=i]));
                }
                b'<' => {
                    // A new tag starts before this one closed
                    self.pos += i;
                    return Some(Token::Text(&rest[..i]));
                }
                _ => {}
            }
        }

        // Unterminated tag at end of input
        self.pos = self.input.len();
        Some(Token::Text(rest))
    }
}

/// Tokenize a markup string
///
/// Concatenating the returned tokens reproduces `html` exactly.
///
/// # Example
///
/// ```rust
/// use tagmark_core::{tokenize, Token};
///
/// let tokens = tokenize("<b>Hi</b>");
/// assert_eq!(
///     tokens,
///     vec![Token::Tag("<b>"), Token::Text("Hi"), Token::Tag("</b>")]
/// );
/// ```
pub fn tokenize(html: &str) -> Vec<Token<'_>> {
    Tokenizer::new(html).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn concat(tokens: &[Token]) -> String {
        tokens.iter().map(|t| t.as_str()).collect()
    }

    #[test]
    fn test_tags_and_text() {
        let tokens = tokenize("<p>Hello <b>World</b></p>");
        assert_eq!(
            tokens,
            vec![
                Token::Tag("<p>"),
                Token::Text("Hello "),
                Token::Tag("<b>"),
                Token::Text("World"),
                Token::Tag("</b>"),
                Token::Tag("</p>"),
            ]
        );
    }

    #[test]
    fn test_trailing_text_is_flushed() {
        let tokens = tokenize("<br>tail");
        assert_eq!(tokens, vec![Token::Tag("<br>"), Token::Text("tail")]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_gt_in_text_is_text() {
        let tokens = tokenize("a > b");
        assert_eq!(tokens, vec![Token::Text("a > b")]);
    }

    #[test]
    fn test_quoted_gt_ends_tag_early() {
        let tokens = tokenize(r#"<a title="x>y">z</a>"#);
        assert_eq!(tokens[0], Token::Tag(r#"<a title="x>"#));
        assert_eq!(tokens[1], Token::Text(r#"y">z"#));
    }

    #[test]
    fn test_unterminated_tag_becomes_text() {
        let tokens = tokenize("a <b");
        assert_eq!(tokens, vec![Token::Text("a "), Token::Text("<b")]);
    }

    #[test]
    fn test_nested_lt_splits_partial_tag() {
        let tokens = tokenize("<a<b>");
        assert_eq!(tokens, vec![Token::Text("<a"), Token::Tag("<b>")]);
    }

    #[test]
    fn test_doctype_is_a_tag() {
        let tokens = tokenize("<!DOCTYPE html><p>x</p>");
        assert_eq!(tokens[0], Token::Tag("<!DOCTYPE html>"));
        assert!(tokens[0].is_tag());
    }

    #[rstest]
    #[case("")]
    #[case("plain text")]
    #[case("<ul><li>One</li><li>Two</li></ul>")]
    #[case("<<<>>>")]
    #[case("x < y > z")]
    #[case("<a href='q'>é &amp; ü</a> trailing <")]
    #[case("<pre><code>if a<b { c>d }</code></pre>")]
    fn test_lossless(#[case] input: &str) {
        assert_eq!(concat(&tokenize(input)), input);
    }
}
