/// `local@domain.tld`, bounded by word boundaries. The TLD needs at least two
/// letters; deliverability is not checked.
pub const EMAIL_PATTERN: &str = r"\b[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}\b";

#[cfg(test)]
mod tests {
    use crate::category::Category;
    use crate::patterns::{matcher_for, PatternMatcher};

    fn extract_emails(text: &str) -> Vec<String> {
        matcher_for(Category::Emails).find_all(text)
    }

    #[test]
    fn test_valid_emails() {
        let valid_emails = vec![
            "user@example.com",
            "john.doe@example.com",
            "jane_doe123@company.co.uk",
            "user+tag@example.com",
            "user%list@example.org",
            "user-name@example-domain.com",
        ];

        for email in valid_emails {
            assert_eq!(extract_emails(email), vec![email], "Email should match: {}", email);
        }
    }

    #[test]
    fn test_invalid_emails() {
        let invalid_emails = vec![
            "user@",
            "@example.com",
            "user@example",
            "user@example.c",
            "user@exam_ple.com",
            "not an email",
        ];

        for email in invalid_emails {
            assert!(extract_emails(email).is_empty(), "Email should not match: {}", email);
        }
    }

    #[test]
    fn test_emails_in_text() {
        let text = "Contact John at john.doe@example.com or Jane at jane_doe123@company.co.uk.";
        assert_eq!(
            extract_emails(text),
            vec!["john.doe@example.com", "jane_doe123@company.co.uk"]
        );
    }

    #[test]
    fn test_trailing_dot_is_not_part_of_email() {
        assert_eq!(extract_emails("mail a.b@test.com."), vec!["a.b@test.com"]);
    }
}
