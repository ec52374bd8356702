//! Signature start detection on reversed lines

use crate::error::Result;
use crate::pattern::Pattern;
use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

/// Delimiters (`--`, `__`, `-Name`) and mobile client boilerplate
/// (`Sent from my iPhone`), mirrored for reversed lines. Case-sensitive.
static SIGNATURE_START: LazyLock<Regex> = LazyLock::new(|| {
    let delimiter = Pattern::group(Pattern::alternation([
        Pattern::literal("--"),
        Pattern::literal("__"),
        Pattern::concat([Pattern::Start, Pattern::literal("-"), Pattern::class(r"\w")]),
    ]));

    let sent_from = Pattern::group(Pattern::concat([
        Pattern::Start,
        Pattern::literal("Sent from my "),
        Pattern::repeat(
            Pattern::group(Pattern::concat([
                Pattern::zero_or_more(Pattern::class(r"\s")),
                Pattern::one_or_more(Pattern::class(r"\w")),
            ])),
            1,
            Some(3),
        ),
        Pattern::End,
    ]));

    Pattern::alternation([delimiter, sent_from])
        .reversed()
        .compile(false)
        .expect("Invalid SIGNATURE_START pattern")
});

/// Decides whether a reversed line opens a signature block
#[derive(Debug, Clone, Default)]
pub struct SignatureClassifier {
    sender: Option<SenderNameMatcher>,
}

/// Matches lines dominated by the sender's own name
#[derive(Debug, Clone)]
struct SenderNameMatcher {
    regex: Regex,
    name_chars: usize,
    ratio: f64,
}

impl SignatureClassifier {
    /// Classifier that also recognizes `sender_name` (e.g. "Jim Smith",
    /// with optional middle names or initials) as a signature start.
    /// An empty name disables the name check.
    #[must_use]
    pub fn new(sender_name: &str, ratio: f64) -> Self {
        if sender_name.trim().is_empty() {
            return Self::default();
        }

        match SenderNameMatcher::new(sender_name, ratio) {
            Ok(matcher) => Self {
                sender: Some(matcher),
            },
            Err(err) => {
                warn!("Disabling sender name signature check: {err}");
                Self::default()
            }
        }
    }

    #[must_use]
    pub fn is_signature_start(&self, line: &str) -> bool {
        SIGNATURE_START.is_match(line)
            || self
                .sender
                .as_ref()
                .is_some_and(|sender| sender.matches(line))
    }
}

impl SenderNameMatcher {
    fn new(name: &str, ratio: f64) -> Result<Self> {
        let mut items = Vec::new();
        for (i, part) in name.split_whitespace().enumerate() {
            if i > 0 {
                // middle names and initials
                items.push(Pattern::zero_or_more(Pattern::class(r"[\w.\s]")));
            }
            items.push(Pattern::literal(part));
        }

        Ok(Self {
            regex: Pattern::concat(items).compile_reversed()?,
            name_chars: name.chars().count(),
            ratio,
        })
    }

    #[allow(clippy::cast_precision_loss)]
    fn matches(&self, line: &str) -> bool {
        let line_chars = line.chars().count();
        line_chars > 0
            && self.regex.is_match(line)
            && self.name_chars as f64 / line_chars as f64 > self.ratio
    }
}
