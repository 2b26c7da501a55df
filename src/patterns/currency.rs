/// Dollar amounts: `$`, one to three digits, comma-separated thousands groups
/// and an optional two-digit decimal part.
pub const CURRENCY_PATTERN: &str = r"\$\d{1,3}(?:,\d{3})*(?:\.\d{2})?";

#[cfg(test)]
mod tests {
    use crate::category::Category;
    use crate::patterns::{matcher_for, PatternMatcher};

    fn extract_currency_amounts(text: &str) -> Vec<String> {
        matcher_for(Category::CurrencyAmounts).find_all(text)
    }

    #[test]
    fn test_valid_amounts() {
        let valid_amounts = vec!["$5", "$0.99", "$19.99", "$1,234.56", "$1,000,000"];

        for amount in valid_amounts {
            assert_eq!(
                extract_currency_amounts(amount),
                vec![amount],
                "Amount should match: {}",
                amount
            );
        }
    }

    #[test]
    fn test_invalid_amounts() {
        let invalid_amounts = vec!["19.99", "$", "$.99", "USD 5", "€5"];

        for amount in invalid_amounts {
            assert!(
                extract_currency_amounts(amount).is_empty(),
                "Amount should not match: {}",
                amount
            );
        }
    }

    #[test]
    fn test_malformed_amounts_match_their_valid_prefix() {
        assert_eq!(extract_currency_amounts("$1.5"), vec!["$1"]);
        assert_eq!(extract_currency_amounts("$1,23"), vec!["$1"]);
    }

    #[test]
    fn test_amounts_in_text() {
        assert_eq!(
            extract_currency_amounts("$1,234.56 and $0.99"),
            vec!["$1,234.56", "$0.99"]
        );
    }
}
