//! Fragment scanner and reply parser entry points

use crate::config::ParserConfig;
use crate::error::Result;
use crate::normalize::normalize_text;
use crate::quote::{MultilineHeader, is_quote_header};
use crate::signature::SignatureClassifier;
use crate::types::{Email, Fragment, SenderIdentity};
use std::sync::LazyLock;
use tracing::{debug, trace};

static DEFAULT_PARSER: LazyLock<ReplyParser> = LazyLock::new(|| {
    ReplyParser::new(ParserConfig::default()).expect("Default parser configuration is valid")
});

/// Split an email body into fragments using the default configuration
///
/// `from_header` is the raw From header value; the sender's name helps spot
/// signatures that only consist of a name.
#[must_use]
pub fn read(body: &str, from_header: Option<&str>) -> Email {
    DEFAULT_PARSER.read(body, from_header)
}

/// Like [`read`], for bodies that may not be valid UTF-8
///
/// Invalid sequences are replaced with U+FFFD, so fragment content is lossy
/// for such bodies.
#[must_use]
pub fn read_bytes(body: &[u8], from_header: Option<&str>) -> Email {
    DEFAULT_PARSER.read(&String::from_utf8_lossy(body), from_header)
}

/// Visible text of an email body: the reply without quotes or signatures
#[must_use]
pub fn parse_reply(body: &str, from_header: Option<&str>) -> String {
    read(body, from_header).visible_text()
}

/// Compiled patterns for one [`ParserConfig`]
///
/// Immutable once built and safe to share between threads.
#[derive(Debug, Clone)]
pub struct ReplyParser {
    multiline_header: MultilineHeader,
    signature_name_ratio: f64,
}

impl Default for ReplyParser {
    fn default() -> Self {
        DEFAULT_PARSER.clone()
    }
}

impl ReplyParser {
    pub fn new(config: ParserConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            multiline_header: MultilineHeader::new(&config)?,
            signature_name_ratio: config.signature_name_ratio,
        })
    }

    /// Split an email body into fragments
    ///
    /// The body is reversed and scanned from its last line to its first, so
    /// quote headers can be attached to the quoted block below them and
    /// trailing quotes and signatures can be hidden in a single pass.
    #[must_use]
    pub fn read(&self, body: &str, from_header: Option<&str>) -> Email {
        let sender = SenderIdentity::parse(from_header);
        let signatures =
            SignatureClassifier::new(&sender.normalized_name, self.signature_name_ratio);

        let reversed: String = normalize_text(body).chars().rev().collect();

        let mut scanner = Scanner::new(&signatures, &self.multiline_header);
        let mut lines = reversed.split('\n').peekable();
        while let Some(line) = lines.next() {
            // The empty remainder after a final newline is not a line
            if lines.peek().is_none() && line.is_empty() {
                break;
            }
            scanner.scan_line(line);
        }

        let email = Email::new(scanner.finish());
        debug!(
            "Parsed reply body: {} fragments, {} hidden",
            email.fragments().len(),
            email.fragments().iter().filter(|f| f.is_hidden()).count()
        );
        email
    }

    #[must_use]
    pub fn parse_reply(&self, body: &str, from_header: Option<&str>) -> String {
        self.read(body, from_header).visible_text()
    }
}

/// Fragment under construction; lines are reversed and stored bottom-up
#[derive(Debug)]
struct FragmentBuilder {
    lines: Vec<String>,
    quoted: bool,
    signature: bool,
    /// Lines already tested for a multi-line quote header
    header_checked: usize,
}

impl FragmentBuilder {
    fn new(quoted: bool, first_line: String) -> Self {
        Self {
            lines: vec![first_line],
            quoted,
            signature: false,
            header_checked: 0,
        }
    }

    fn last_line(&self) -> &str {
        self.lines.last().map_or("", String::as_str)
    }

    /// Lines not yet tested for a header, plus enough earlier lines to
    /// complete a header that ends in them
    fn unchecked_text(&mut self) -> String {
        let start = self
            .header_checked
            .saturating_sub(MultilineHeader::MAX_LINES - 1);
        self.header_checked = self.lines.len();
        self.lines[start..].join("\n")
    }
}

/// Bottom-up state machine turning reversed lines into fragments
struct Scanner<'a> {
    signatures: &'a SignatureClassifier,
    multiline_header: &'a MultilineHeader,
    open: Option<FragmentBuilder>,
    finished: Vec<Fragment>,
    found_visible: bool,
}

impl<'a> Scanner<'a> {
    const fn new(signatures: &'a SignatureClassifier, multiline_header: &'a MultilineHeader) -> Self {
        Self {
            signatures,
            multiline_header,
            open: None,
            finished: Vec::new(),
            found_visible: false,
        }
    }

    /// Feed one reversed line
    fn scan_line(&mut self, line: &str) {
        // Trailing whitespace of a signature line is kept
        let line = if self.signatures.is_signature_start(line) {
            line
        } else {
            line.trim_start()
        };

        let is_quoted = line.ends_with('>');

        if line.is_empty()
            && let Some(fragment) = self.open.as_mut()
        {
            if self.signatures.is_signature_start(fragment.last_line()) {
                fragment.signature = true;
                self.finish_fragment();
            } else if self.multiline_header.is_match(&fragment.unchecked_text()) {
                fragment.quoted = true;
                self.finish_fragment();
            }
        }

        // A quote header belongs to the quoted block it introduces
        let continues = self.open.as_ref().is_some_and(|fragment| {
            fragment.quoted == is_quoted
                || (fragment.quoted && (line.is_empty() || is_quote_header(line)))
        });

        if continues && let Some(fragment) = self.open.as_mut() {
            fragment.lines.push(line.to_string());
        } else {
            self.finish_fragment();
            self.open = Some(FragmentBuilder::new(is_quoted, line.to_string()));
        }
    }

    /// Close the open fragment and decide whether it is hidden
    fn finish_fragment(&mut self) {
        let Some(builder) = self.open.take() else {
            return;
        };

        let content: String = builder.lines.join("\n").chars().rev().collect();

        let mut hidden = false;
        if !self.found_visible {
            if builder.quoted || builder.signature || content.trim().is_empty() {
                hidden = true;
            } else {
                self.found_visible = true;
            }
        }

        trace!(
            quoted = builder.quoted,
            signature = builder.signature,
            hidden,
            "Finished fragment of {} lines",
            builder.lines.len()
        );

        self.finished
            .push(Fragment::new(content, builder.quoted, builder.signature, hidden));
    }

    /// Close any open fragment and return fragments top-to-bottom
    fn finish(mut self) -> Vec<Fragment> {
        self.finish_fragment();
        self.finished.reverse();
        self.finished
    }
}
