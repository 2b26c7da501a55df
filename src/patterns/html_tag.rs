/// One opening, closing or self-closing tag with optional bare or quoted
/// attributes. Nesting is not tracked.
pub const HTML_TAG_PATTERN: &str =
    r#"</?[a-zA-Z][a-zA-Z0-9]*(?:\s+[a-zA-Z-]+(?:=["'][^"']*["'])?)*\s*/?>"#;
