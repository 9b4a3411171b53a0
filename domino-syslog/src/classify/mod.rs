//! Rule-based severity classification.
//!
//! A [`Classifier`] holds an ordered list of [`Rule`]s. Each rule is an
//! unanchored, case-sensitive regular expression paired with a
//! [`Severity`]; the first rule whose pattern occurs anywhere in the message
//! decides the severity. A message no rule matches is informational.
//!
//! The table is small and fixed, so a linear scan is all it needs.

mod rules;

use crate::error::{Error, Result};
use crate::severity::Severity;
use regex::Regex;

pub use rules::DOMINO_RULES;

/// A pattern and the severity it assigns.
#[derive(Debug, Clone)]
pub struct Rule {
    re: Regex,
    severity: Severity,
}

impl Rule {
    pub fn new(pattern: &str, severity: Severity) -> Result<Self> {
        let re = Regex::new(pattern).map_err(|source| Error::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { re, severity })
    }

    pub fn pattern(&self) -> &str {
        self.re.as_str()
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn is_match(&self, message: &str) -> bool {
        self.re.is_match(message)
    }
}

/// Ordered first-match-wins rule table.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    rules: Vec<Rule>,
}

impl Classifier {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Compile a table of `(pattern, severity)` pairs, keeping their order.
    pub fn from_table(table: &[(&str, Severity)]) -> Result<Self> {
        let rules = table
            .iter()
            .map(|&(pattern, severity)| Rule::new(pattern, severity))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(rules))
    }

    /// The built-in rules for Domino console messages.
    pub fn domino() -> Result<Self> {
        Self::from_table(DOMINO_RULES)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Severity of the first matching rule, or `Informational`.
    pub fn classify(&self, message: &str) -> Severity {
        self.rules
            .iter()
            .find(|rule| rule.is_match(message))
            .map_or(Severity::Informational, Rule::severity)
    }
}
