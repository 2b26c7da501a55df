/// `http`/`https` only. The path runs greedily to the next whitespace, so
/// trailing punctuation is kept.
pub const URL_PATTERN: &str = r"https?://(?:www\.)?[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}(?:/[^\s]*)?";
