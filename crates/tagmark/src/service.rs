//! Converter - the main entry point for HTML to Markdown conversion.

use tagmark_core::Tokenizer;

use crate::engine::ConversionState;
use crate::entities::{EntityDecoder, HtmlEntities};
use crate::symbols::Symbols;
use crate::Result;

/// Converts HTML strings to Markdown
///
/// All per-call state is created inside [`Converter::convert`], so one
/// converter can serve any number of calls, including concurrent ones.
#[derive(Debug, Clone)]
pub struct Converter<D = HtmlEntities> {
    symbols: Symbols,
    decoder: D,
}

impl Converter {
    /// Create a converter with the default symbols
    pub fn new() -> Self {
        Self::with_symbols(Symbols::default())
    }

    /// Create a converter with custom symbols
    pub fn with_symbols(symbols: Symbols) -> Self {
        Self::with_decoder(symbols, HtmlEntities)
    }
}

impl<D: EntityDecoder> Converter<D> {
    /// Create a converter with custom symbols and entity decoder
    pub fn with_decoder(symbols: Symbols, decoder: D) -> Self {
        Self { symbols, decoder }
    }

    /// Convert HTML to Markdown
    ///
    /// # Example
    ///
    /// ```rust
    /// use tagmark::Converter;
    ///
    /// let converter = Converter::new();
    /// let markdown = converter.convert("<h2>Title</h2><p>Body</p>").unwrap();
    /// assert_eq!(markdown, "## Title\nBody");
    /// ```
    pub fn convert(&self, html: &str) -> Result<String> {
        let mut state = ConversionState::new(&self.symbols);
        for token in Tokenizer::new(html) {
            state.feed(token);
        }

        let tokens = state.token_count();
        let segments = state.segment_count();
        let markdown = state.finish();
        let decoded = self.decoder.decode(&markdown)?;
        let result = decoded.trim().to_string();

        tracing::debug!(
            input_len = html.len(),
            output_len = result.len(),
            tokens,
            segments,
            "Converted HTML to Markdown"
        );

        Ok(result)
    }

    /// Get the symbols
    pub fn symbols(&self) -> &Symbols {
        &self.symbols
    }

    pub fn decoder(&self) -> &D {
        &self.decoder
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}
