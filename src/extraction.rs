use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::category::Category;

/// Matches found in one piece of text, grouped by category.
///
/// Every category is always present. Values keep scan order and duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    values: [Vec<String>; Category::COUNT],
}

impl Extraction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: Category) -> &[String] {
        &self.values[category.index()]
    }

    pub(crate) fn set(&mut self, category: Category, matches: Vec<String>) {
        self.values[category.index()] = matches;
    }

    pub fn emails(&self) -> &[String] {
        self.get(Category::Emails)
    }

    pub fn urls(&self) -> &[String] {
        self.get(Category::Urls)
    }

    pub fn phones(&self) -> &[String] {
        self.get(Category::Phones)
    }

    pub fn credit_cards(&self) -> &[String] {
        self.get(Category::CreditCards)
    }

    pub fn times(&self) -> &[String] {
        self.get(Category::Times)
    }

    pub fn html_tags(&self) -> &[String] {
        self.get(Category::HtmlTags)
    }

    pub fn hashtags(&self) -> &[String] {
        self.get(Category::Hashtags)
    }

    pub fn currency_amounts(&self) -> &[String] {
        self.get(Category::CurrencyAmounts)
    }

    /// All categories with their matches, in category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> + '_ {
        Category::ALL
            .iter()
            .map(move |&category| (category, self.get(category)))
    }

    /// Total number of matches across every category.
    pub fn total(&self) -> usize {
        self.values.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl Serialize for Extraction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Category::COUNT))?;
        for (category, matches) in self.iter() {
            map.serialize_entry(category.as_str(), matches)?;
        }
        map.end()
    }
}
