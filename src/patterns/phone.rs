/// Optional `+` and up to three country digits, an area code with or without
/// parentheses, then 3 and 4 digits. Separators are space, dash or dot.
///
/// There is no word boundary on either side: leading whitespace is part of the
/// match, and long digit runs yield a phone number from their first ten digits.
pub const PHONE_PATTERN: &str = r"\+?\d{0,3}?\s*(?:\(\d{3}\)|\d{3})[-.\s]?\d{3}[-.\s]?\d{4}";
