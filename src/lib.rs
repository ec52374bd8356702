// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Email Reply Parser
//!
//! Splits a plain-text email body into fragments so that only the text the
//! sender actually wrote needs to be shown. Each fragment is classified as
//! quoted (`>` lines and their "On ... wrote:" header), signature, and/or
//! hidden.
//!
//! # Features
//!
//! - Quoted blocks, including wrapped and multi-line (Outlook style) headers
//! - Signature delimiters, mobile client boilerplate and sender-name sign-offs
//! - Hiding of trailing quotes and signatures, for top and bottom posters
//! - Linear-time matching, safe on untrusted input
//!
//! # Example
//!
//! ```rust
//! use email_reply_parser::read;
//!
//! let body = "Sounds good!\n\nOn Jan 1, 2020, Alice wrote:\n> Lunch?\n";
//! let email = read(body, Some("Bob <bob@example.com>"));
//!
//! assert_eq!(email.fragments().len(), 3);
//! assert!(email.fragments()[1].is_quoted());
//! assert_eq!(email.visible_text(), "Sounds good!");
//! ```

mod config;
mod error;
mod normalize;
mod parser;
mod pattern;
mod quote;
mod signature;
mod types;

pub use config::ParserConfig;
pub use error::{ReplyParseError, Result};
pub use normalize::normalize_text;
pub use parser::{ReplyParser, parse_reply, read, read_bytes};
pub use pattern::Pattern;
pub use signature::SignatureClassifier;
pub use types::*;
