//! Where the text to extract from comes from: a built-in sample, a file, or a
//! line typed at the prompt.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use tracing::{info, warn};

pub const SAMPLE_TEXT: &str = r#"
Hello! Contact John at john.doe@example.com or Jane at jane_doe123@company.co.uk.
Our websites: https://example.com and https://sub.example.co.uk/page?id=1
Call us: (123) 456-7890, 123-456-7890, +1 987 654 3210
Credit cards: 1234-5678-9012-3456, 1234567890123456, 1234 5678 9012 3456
Times: 14:30, 2:30 PM, 02:30 am
HTML example: <div class="content">Hello</div> <p>Paragraph</p>
Hashtags: #coding #Python3 #RegexFun
Currency: $19.99, $1,234.56, $0.99
Malicious text: <script>alert('hack')</script>

"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputChoice {
    Sample,
    File,
    Paste,
}

impl InputChoice {
    /// Parses a menu answer. Anything other than `1`, `2` or `3` is `None`.
    pub fn from_answer(answer: &str) -> Option<Self> {
        match answer.trim() {
            "1" => Some(InputChoice::Sample),
            "2" => Some(InputChoice::File),
            "3" => Some(InputChoice::Paste),
            _ => None,
        }
    }
}

/// Reads a whole file. A file that cannot be read is reported on `out` and
/// treated as empty; only failures writing to `out` are returned.
pub fn read_text_file<W: Write>(path: &Path, out: &mut W) -> io::Result<String> {
    match fs::read_to_string(path) {
        Ok(text) => {
            info!(path = %path.display(), bytes = text.len(), "read input file");
            Ok(text)
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "could not read input file");
            writeln!(out, "File {} not found. Using empty string.", path.display())?;
            Ok(String::new())
        }
    }
}

/// Writes `prompt` and reads one line, without its line ending. End of input
/// reads as an empty line.
pub fn prompt_line<R: BufRead, W: Write>(
    prompt: &str,
    reader: &mut R,
    out: &mut W,
) -> io::Result<String> {
    write!(out, "{}", prompt)?;
    out.flush()?;

    let mut line = String::new();
    reader.read_line(&mut line)?;
    let len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(len);
    Ok(line)
}

/// Shows the input menu and returns the text the user picked.
pub fn acquire_text<R: BufRead, W: Write>(reader: &mut R, out: &mut W) -> io::Result<String> {
    writeln!(out, "Select input method:")?;
    writeln!(out, "1 - Direct string (sample)")?;
    writeln!(out, "2 - Read from file")?;
    writeln!(out, "3 - Paste input (CLI)")?;

    let answer = prompt_line("Enter 1, 2, or 3: ", reader, out)?;

    match InputChoice::from_answer(&answer) {
        Some(InputChoice::Sample) => Ok(SAMPLE_TEXT.to_string()),
        Some(InputChoice::File) => {
            let filename = prompt_line("Enter file path: ", reader, out)?;
            read_text_file(Path::new(&filename), out)
        }
        Some(InputChoice::Paste) => prompt_line("Paste your text here: ", reader, out),
        None => {
            warn!(answer = %answer, "invalid menu choice");
            writeln!(out, "Invalid choice. Using sample string.")?;
            Ok(SAMPLE_TEXT.to_string())
        }
    }
}
