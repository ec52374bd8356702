//! Body normalization before scanning

use regex::Regex;
use std::sync::LazyLock;

/// A quote header some clients wrap over several lines
static WRAPPED_QUOTE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?sm)^(On\s.+wrote:)$").expect("Invalid WRAPPED_QUOTE_HEADER pattern")
});

/// Lines of underscores used by some clients to separate the quoted message
static UNDERSCORE_DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^_{7}").expect("Invalid UNDERSCORE_DELIMITER pattern"));

/// Normalize a body so it is easier to scan.
///
/// Converts CRLF to LF, joins an "On ... wrote:" header that was wrapped over
/// several lines back into one line, and puts a blank line above every
/// underscore delimiter line so it starts its own fragment.
#[must_use]
pub fn normalize_text(text: &str) -> String {
    let mut text = text.replace("\r\n", "\n");

    let wrapped = WRAPPED_QUOTE_HEADER
        .captures(&text)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string());

    // A blank line inside the span means it is not a header
    if let Some(header) = wrapped
        && header.contains('\n')
        && !header.contains("\n\n")
    {
        text = text.replace(&header, &header.replace('\n', " "));
    }

    separate_underscore_delimiters(&text)
}

fn separate_underscore_delimiters(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_blank = true;

    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
            if !previous_blank && UNDERSCORE_DELIMITER.is_match(line) {
                out.push('\n');
            }
        }
        out.push_str(line);
        previous_blank = line.is_empty();
    }

    out
}
