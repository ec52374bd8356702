//! Parser configuration

use crate::error::{ReplyParseError, Result};
use serde::{Deserialize, Serialize};

/// Labels and thresholds used when classifying fragments
///
/// The label lists feed the multi-line quote header detection, e.g.
///
/// ```text
/// From: Alice
/// Sent: Monday
/// To: Bob
/// Subject: Lunch
/// ```
///
/// Add localized labels here to recognize headers written by clients in
/// other languages. Labels are matched literally and without regard to case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    pub from_labels: Vec<String>,
    pub to_labels: Vec<String>,
    pub date_labels: Vec<String>,
    pub subject_labels: Vec<String>,
    pub reply_to_labels: Vec<String>,

    /// Minimum share of a line the sender's name must cover for the line
    /// to count as the start of a signature
    pub signature_name_ratio: f64,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            from_labels: vec!["From".into(), "De".into()],
            to_labels: vec!["To".into(), "Para".into()],
            date_labels: vec!["Date".into(), "Sent".into(), "Enviada em".into()],
            subject_labels: vec!["Subject".into(), "Assunto".into()],
            reply_to_labels: vec!["Reply-To".into()],
            signature_name_ratio: 0.25,
        }
    }
}

impl ParserConfig {
    /// Read a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let label_sets = [
            ("from_labels", &self.from_labels),
            ("to_labels", &self.to_labels),
            ("date_labels", &self.date_labels),
            ("subject_labels", &self.subject_labels),
            ("reply_to_labels", &self.reply_to_labels),
        ];

        for (field, labels) in label_sets {
            if labels.is_empty() || labels.iter().any(|l| l.trim().is_empty()) {
                return Err(ReplyParseError::Config(format!(
                    "{field} must contain at least one non-empty label"
                )));
            }
        }

        if !(0.0..=1.0).contains(&self.signature_name_ratio) {
            return Err(ReplyParseError::Config(format!(
                "signature_name_ratio must be between 0 and 1, got {}",
                self.signature_name_ratio
            )));
        }

        Ok(())
    }
}
