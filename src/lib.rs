pub mod category;
pub mod error;
pub mod extraction;
pub mod input;
pub mod output;
pub mod patterns;
pub mod sanitizer;

pub use category::Category;
pub use error::{ExtractorError, Result};
pub use extraction::Extraction;
pub use patterns::{PatternMatcher, RegexMatcher};
pub use sanitizer::Sanitizer;

use lazy_static::lazy_static;
use tracing::debug;

lazy_static! {
    static ref DEFAULT_EXTRACTOR: Extractor =
        Extractor::new().expect("built-in extraction patterns compile");
}

/// Strips script blocks from a text, then runs every category pattern over
/// what is left.
///
/// Patterns are compiled once in [`Extractor::new`] and only read afterwards.
#[derive(Debug, Clone)]
pub struct Extractor {
    sanitizer: Sanitizer,
    matchers: Vec<RegexMatcher>,
}

impl Extractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            sanitizer: Sanitizer::new()?,
            matchers: patterns::compile_all()?,
        })
    }

    /// Compiled matchers, one per category, in category order.
    pub fn matchers(&self) -> &[RegexMatcher] {
        &self.matchers
    }

    pub fn sanitizer(&self) -> &Sanitizer {
        &self.sanitizer
    }

    /// Extracts every category from `text`. Never fails; categories without
    /// matches are present and empty.
    pub fn extract(&self, text: &str) -> Extraction {
        let safe_text = self.sanitizer.sanitize(text);

        let mut extraction = Extraction::new();
        for matcher in &self.matchers {
            extraction.set(matcher.category(), matcher.find_all(&safe_text));
        }

        debug!(
            input_len = text.len(),
            sanitized_len = safe_text.len(),
            matches = extraction.total(),
            "extraction complete"
        );
        extraction
    }
}

/// Extracts with a shared, lazily built [`Extractor`].
pub fn extract(text: &str) -> Extraction {
    DEFAULT_EXTRACTOR.extract(text)
}
