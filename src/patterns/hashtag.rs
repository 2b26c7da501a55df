pub const HASHTAG_PATTERN: &str = r"#\w+";
