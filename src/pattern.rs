//! Declarative patterns that can be mirrored for reversed text
//!
//! The scanner walks a body from its last character to its first, so every
//! line it sees is the character-reverse of a real line. Patterns are written
//! the natural way (`On .+ wrote:$`) as a [`Pattern`] tree and mirrored with
//! [`Pattern::reversed`] before compiling:
//!
//! - literal text is reversed and concatenations run back to front;
//! - `^` and `$` trade places;
//! - quantifiers stay attached to their (mirrored) operand;
//! - groups keep their shape with their contents mirrored.
//!
//! If a forward pattern matches `s`, its mirror matches `s` reversed.

use crate::error::Result;
use regex::{Regex, RegexBuilder};
use std::fmt;

/// A regular expression in tree form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// Literal text, escaped when rendered
    Literal(String),

    /// A single-character matcher in raw regex syntax (`.`, `\w`, `[\w.\s]`)
    Class(String),

    /// Start of text (`^`)
    Start,

    /// End of text (`$`)
    End,

    /// Items matched one after another
    Concat(Vec<Pattern>),

    /// Any one of the alternatives, earlier ones preferred
    Alternation(Vec<Pattern>),

    /// Capturing group
    Group(Box<Pattern>),

    /// Repetition of an operand
    Repeat {
        node: Box<Pattern>,
        min: u32,
        max: Option<u32>,
    },
}

impl Pattern {
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    pub fn class(class: impl Into<String>) -> Self {
        Self::Class(class.into())
    }

    /// Any character except a newline
    #[must_use]
    pub fn any() -> Self {
        Self::Class(".".into())
    }

    pub fn concat(items: impl IntoIterator<Item = Self>) -> Self {
        Self::Concat(items.into_iter().collect())
    }

    pub fn alternation(items: impl IntoIterator<Item = Self>) -> Self {
        Self::Alternation(items.into_iter().collect())
    }

    #[must_use]
    pub fn group(node: Self) -> Self {
        Self::Group(Box::new(node))
    }

    /// Group of literal alternatives, e.g. `(From|De)`
    pub fn one_of<S: AsRef<str>>(words: impl IntoIterator<Item = S>) -> Self {
        Self::group(Self::alternation(
            words.into_iter().map(|w| Self::literal(w.as_ref())),
        ))
    }

    #[must_use]
    pub fn repeat(node: Self, min: u32, max: Option<u32>) -> Self {
        Self::Repeat {
            node: Box::new(node),
            min,
            max,
        }
    }

    #[must_use]
    pub fn zero_or_more(node: Self) -> Self {
        Self::repeat(node, 0, None)
    }

    #[must_use]
    pub fn one_or_more(node: Self) -> Self {
        Self::repeat(node, 1, None)
    }

    /// Mirror this pattern so it matches character-reversed text
    #[must_use]
    pub fn reversed(&self) -> Self {
        match self {
            Self::Literal(text) => Self::Literal(text.chars().rev().collect()),
            Self::Class(class) => Self::Class(class.clone()),
            Self::Start => Self::End,
            Self::End => Self::Start,
            Self::Concat(items) => Self::Concat(items.iter().rev().map(Self::reversed).collect()),
            Self::Alternation(items) => Self::Alternation(items.iter().map(Self::reversed).collect()),
            Self::Group(node) => Self::Group(Box::new(node.reversed())),
            Self::Repeat { node, min, max } => Self::Repeat {
                node: Box::new(node.reversed()),
                min: *min,
                max: *max,
            },
        }
    }

    /// Render as `regex` crate syntax
    #[must_use]
    pub fn to_regex_string(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }

    pub fn compile(&self, case_insensitive: bool) -> Result<Regex> {
        Ok(RegexBuilder::new(&self.to_regex_string())
            .case_insensitive(case_insensitive)
            .build()?)
    }

    /// Mirror and compile, ignoring case
    pub fn compile_reversed(&self) -> Result<Regex> {
        self.reversed().compile(true)
    }

    fn write_to(&self, out: &mut String) {
        match self {
            Self::Literal(text) => out.push_str(&regex::escape(text)),
            Self::Class(class) => out.push_str(class),
            Self::Start => out.push('^'),
            Self::End => out.push('$'),
            Self::Concat(items) => {
                for item in items {
                    item.write_wrapped(out, matches!(item, Self::Alternation(_)));
                }
            }
            Self::Alternation(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push('|');
                    }
                    item.write_to(out);
                }
            }
            Self::Group(node) => {
                out.push('(');
                node.write_to(out);
                out.push(')');
            }
            Self::Repeat { node, min, max } => {
                node.write_wrapped(out, !node.is_atom());
                match (min, max) {
                    (0, None) => out.push('*'),
                    (1, None) => out.push('+'),
                    (0, Some(1)) => out.push('?'),
                    (min, None) => out.push_str(&format!("{{{min},}}")),
                    (min, Some(max)) if min == max => out.push_str(&format!("{{{min}}}")),
                    (min, Some(max)) => out.push_str(&format!("{{{min},{max}}}")),
                }
            }
        }
    }

    fn write_wrapped(&self, out: &mut String, wrap: bool) {
        if wrap {
            out.push_str("(?:");
            self.write_to(out);
            out.push(')');
        } else {
            self.write_to(out);
        }
    }

    fn is_atom(&self) -> bool {
        match self {
            Self::Class(_) | Self::Group(_) => true,
            Self::Literal(text) => text.chars().count() == 1,
            _ => false,
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_regex_string())
    }
}
