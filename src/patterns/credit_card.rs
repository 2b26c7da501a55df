/// Sixteen digits in four groups of four, each group optionally followed by a
/// dash or whitespace.
pub const CREDIT_CARD_PATTERN: &str = r"\b(?:\d{4}[-\s]?){3}\d{4}\b";
