use std::io::Write;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::Result;
use crate::extraction::Extraction;

const INDENT: &[u8] = b"    ";

/// Renders an extraction as JSON indented by four spaces.
pub fn render(extraction: &Extraction) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    extraction.serialize(&mut serializer)?;
    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn print_extraction<W: Write>(extraction: &Extraction, out: &mut W) -> Result<()> {
    writeln!(out, "\n--- Extracted Data ---")?;
    writeln!(out, "{}", render(extraction)?)?;
    Ok(())
}
