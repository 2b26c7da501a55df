use regex::Regex;
use tracing::debug;

use crate::error::{ExtractorError, Result};

/// Script blocks, lowercase only. Each opening tag pairs with the nearest
/// closing tag; an opening tag without one is left alone.
pub const SCRIPT_BLOCK_PATTERN: &str = r"(?s)<script.*?>.*?</script>";

/// Removes `<script>...</script>` blocks before extraction runs.
///
/// This is a single naive rule, not an HTML sanitizer: uppercase tags and
/// unterminated blocks pass through.
#[derive(Debug, Clone)]
pub struct Sanitizer {
    script_block: Regex,
}

impl Sanitizer {
    pub fn new() -> Result<Self> {
        let script_block =
            Regex::new(SCRIPT_BLOCK_PATTERN).map_err(ExtractorError::InvalidSanitizer)?;
        Ok(Self { script_block })
    }

    pub fn sanitize(&self, text: &str) -> String {
        let removed = self.count_blocks(text);
        if removed > 0 {
            debug!(removed, "stripped script blocks");
        }
        self.script_block.replace_all(text, "").into_owned()
    }

    /// Number of script blocks `sanitize` would remove.
    pub fn count_blocks(&self, text: &str) -> usize {
        self.script_block.find_iter(text).count()
    }
}
