use std::fmt;

/// The closed set of things the extractor looks for.
///
/// Variant order is the order categories are matched in and the order their
/// keys appear in serialized output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Emails,
    Urls,
    Phones,
    CreditCards,
    Times,
    HtmlTags,
    Hashtags,
    CurrencyAmounts,
}

impl Category {
    pub const COUNT: usize = 8;

    pub const ALL: [Category; Category::COUNT] = [
        Category::Emails,
        Category::Urls,
        Category::Phones,
        Category::CreditCards,
        Category::Times,
        Category::HtmlTags,
        Category::Hashtags,
        Category::CurrencyAmounts,
    ];

    /// Key used for this category in the result mapping.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Emails => "emails",
            Category::Urls => "urls",
            Category::Phones => "phones",
            Category::CreditCards => "credit_cards",
            Category::Times => "times",
            Category::HtmlTags => "html_tags",
            Category::Hashtags => "hashtags",
            Category::CurrencyAmounts => "currency_amounts",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_index_order() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i, "Out of order: {}", category);
        }
    }

    #[test]
    fn test_keys_are_unique() {
        let mut keys: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), Category::COUNT);
    }
}
