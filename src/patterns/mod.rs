pub mod credit_card;
pub mod currency;
pub mod email;
pub mod hashtag;
pub mod html_tag;
pub mod phone;
pub mod time;
pub mod url;

use regex::Regex;

use crate::category::Category;
use crate::error::{ExtractorError, Result};

/// Pattern source for every category, in category order.
pub const PATTERNS: [(Category, &str); Category::COUNT] = [
    (Category::Emails, email::EMAIL_PATTERN),
    (Category::Urls, url::URL_PATTERN),
    (Category::Phones, phone::PHONE_PATTERN),
    (Category::CreditCards, credit_card::CREDIT_CARD_PATTERN),
    (Category::Times, time::TIME_PATTERN),
    (Category::HtmlTags, html_tag::HTML_TAG_PATTERN),
    (Category::Hashtags, hashtag::HASHTAG_PATTERN),
    (Category::CurrencyAmounts, currency::CURRENCY_PATTERN),
];

pub trait PatternMatcher {
    fn category(&self) -> Category;

    /// Leftmost non-overlapping matches, whole match only, in scan order.
    fn find_all(&self, text: &str) -> Vec<String>;
}

/// A compiled category pattern.
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    category: Category,
    regex: Regex,
}

impl RegexMatcher {
    pub fn new(category: Category, pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|source| ExtractorError::InvalidPattern { category, source })?;
        Ok(Self { category, regex })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl PatternMatcher for RegexMatcher {
    fn category(&self) -> Category {
        self.category
    }

    fn find_all(&self, text: &str) -> Vec<String> {
        self.regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

/// Compiles the full pattern table.
pub fn compile_all() -> Result<Vec<RegexMatcher>> {
    PATTERNS
        .iter()
        .map(|&(category, pattern)| RegexMatcher::new(category, pattern))
        .collect()
}

/// Compiles one category's pattern. Shared by the per-pattern unit tests.
#[cfg(test)]
pub(crate) fn matcher_for(category: Category) -> RegexMatcher {
    let (_, pattern) = PATTERNS[category.index()];
    RegexMatcher::new(category, pattern).unwrap()
}
