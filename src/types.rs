//! Core types for parsed reply bodies

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// A parsed email body split into fragments
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    fragments: Vec<Fragment>,
}

impl Email {
    pub(crate) const fn new(fragments: Vec<Fragment>) -> Self {
        Self { fragments }
    }

    /// Fragments in top-to-bottom order
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Text of all fragments that are not hidden, joined by newlines
    #[must_use]
    pub fn visible_text(&self) -> String {
        self.fragments
            .iter()
            .filter(|f| !f.hidden)
            .map(Fragment::content)
            .collect::<Vec<_>>()
            .join("\n")
            .trim_end()
            .to_string()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

/// A run of lines sharing the same quoted state
///
/// Quoted and signature fragments at the bottom of a body are hidden; once
/// original content is found further up, nothing above it is hidden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    content: String,
    quoted: bool,
    signature: bool,
    hidden: bool,
}

impl Fragment {
    pub(crate) const fn new(content: String, quoted: bool, signature: bool, hidden: bool) -> Self {
        Self {
            content,
            quoted,
            signature,
            hidden,
        }
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Reproduced from an earlier message (`>` lines and their header)
    #[must_use]
    pub const fn is_quoted(&self) -> bool {
        self.quoted
    }

    #[must_use]
    pub const fn is_signature(&self) -> bool {
        self.signature
    }

    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.content)
    }
}

/// Sender details taken from a From header
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderIdentity {
    /// Display name as written (e.g. "Smith, Jim")
    pub raw_name: String,

    /// Display name in "First Last" order
    pub normalized_name: String,

    /// Bare address, or the whole header when it has no angle brackets
    pub email: String,
}

impl SenderIdentity {
    /// Parse a From header value
    ///
    /// Accepts `"Display Name" <email>`, `'Display Name' <email>`,
    /// `Display Name <email>` or a bare address. A missing header gives an
    /// empty identity.
    #[must_use]
    pub fn parse(header: Option<&str>) -> Self {
        let Some(header) = header else {
            return Self::default();
        };

        let header = decode_header(header).unwrap_or_else(|err| {
            warn!("Using undecoded sender header: {err}");
            header.to_string()
        });
        let header = header.trim();

        let raw_name = header
            .find('<')
            .map(|start| strip_quotes(&header[..start]))
            .unwrap_or_default();

        let email = match (header.find('<'), header.rfind('>')) {
            (Some(start), Some(end)) if end > start => header[start + 1..end].to_string(),
            _ => header.to_string(),
        };

        Self {
            normalized_name: normalize_name(&raw_name),
            raw_name,
            email,
        }
    }
}

/// Decode RFC 2047 encoded words (`=?UTF-8?Q?...?=`)
fn decode_header(header: &str) -> Result<String> {
    if !header.contains("=?") {
        return Ok(header.to_string());
    }

    let raw = format!("From: {header}");
    let (parsed, _) = mailparse::parse_header(raw.as_bytes())?;
    Ok(parsed.get_value())
}

/// Trim and drop one layer of matching single or double quotes
fn strip_quotes(s: &str) -> String {
    let trimmed = s.trim();
    for quote in ['"', '\''] {
        if let Some(inner) = trimmed
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner.trim().to_string();
        }
    }
    trimmed.to_string()
}

/// Turn "Last, First" into "First Last"
///
/// When the part before the first comma already contains a space it is
/// returned unchanged ("Smith Jr, Jim" gives "Smith Jr"). Anything after a
/// second comma is dropped.
fn normalize_name(name: &str) -> String {
    let mut parts = name.split(',');
    let (Some(last), Some(first)) = (parts.next(), parts.next()) else {
        return name.to_string();
    };

    if last.contains(' ') {
        return last.to_string();
    }

    let (first, last) = (first.trim(), last.trim());
    if first.is_empty() {
        last.to_string()
    } else if last.is_empty() {
        first.to_string()
    } else {
        format!("{first} {last}")
    }
}
