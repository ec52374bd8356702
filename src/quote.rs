//! Quote header detection on reversed text

use crate::config::ParserConfig;
use crate::error::Result;
use crate::pattern::Pattern;
use regex::Regex;
use std::sync::LazyLock;

/// Reversed form of `On\s.+wrote:$`
static ON_WROTE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Pattern::concat([
        Pattern::literal("On"),
        Pattern::class(r"\s"),
        Pattern::one_or_more(Pattern::any()),
        Pattern::literal("wrote:"),
        Pattern::End,
    ])
    .compile_reversed()
    .expect("Invalid ON_WROTE_HEADER pattern")
});

/// Whether a reversed line is an "On <date>, <author> wrote:" header
pub fn is_quote_header(line: &str) -> bool {
    ON_WROTE_HEADER.is_match(line)
}

/// Detects header blocks like Outlook's
///
/// ```text
/// From: ...
/// Sent: ...
/// To: ...
/// Subject: ...
/// ```
#[derive(Debug, Clone)]
pub struct MultilineHeader {
    regex: Regex,
}

impl MultilineHeader {
    /// Most lines one header block can span
    pub const MAX_LINES: usize = 5;

    pub fn new(config: &ParserConfig) -> Result<Self> {
        let date = &config.date_labels;
        let from = &config.from_labels;
        let to = &config.to_labels;
        let subject = &config.subject_labels;
        let reply_to = &config.reply_to_labels;

        let orderings = [
            vec![date, from, to, subject],
            vec![from, date, to, subject],
            vec![from, to, date, subject],
            vec![from, reply_to, date, to, subject],
        ];

        let pattern = Pattern::group(Pattern::alternation(
            orderings.iter().map(Vec::as_slice).map(header_block),
        ));

        Ok(Self {
            regex: pattern.compile_reversed()?,
        })
    }

    /// Test reversed fragment text, lines joined by `\n`
    #[must_use]
    pub fn is_match(&self, reversed_text: &str) -> bool {
        self.regex.is_match(reversed_text)
    }
}

/// `(A|B):.*\n(C|D):.*\n...` for the given label sets
fn header_block(fields: &[&Vec<String>]) -> Pattern {
    let mut items = Vec::with_capacity(fields.len() * 4);
    for (i, labels) in fields.iter().enumerate() {
        if i > 0 {
            items.push(Pattern::literal("\n"));
        }
        items.push(Pattern::one_of(labels.iter()));
        items.push(Pattern::literal(":"));
        items.push(Pattern::zero_or_more(Pattern::any()));
    }
    Pattern::concat(items)
}
