use serde::{Deserialize, Serialize};

use crate::core::types::{Locus, LocusGroup};

/// How prominently a statement should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    /// Information a breeder or owner must not skip
    Attention,
    /// An input the rule set could not process
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Attention => write!(f, "attention"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// One explanatory entry in a group's interpretation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    pub text: String,
    pub severity: Severity,
}

impl Statement {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Info,
        }
    }

    pub fn attention(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Attention,
        }
    }

    /// Visible marker for a code the rules do not handle
    #[must_use]
    pub fn processing_failed(locus: Locus) -> Self {
        Self {
            text: format!("[ERROR] processing {} failed", locus.label()),
            severity: Severity::Error,
        }
    }

    #[must_use]
    pub fn is_attention(&self) -> bool {
        self.severity == Severity::Attention
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.severity {
            Severity::Attention => write!(f, "[ATTENTION] {}", self.text),
            Severity::Info | Severity::Error => write!(f, "{}", self.text),
        }
    }
}

/// Append-only list of statements built by one evaluator
#[derive(Debug, Default)]
pub struct StatementList {
    statements: Vec<Statement>,
}

impl StatementList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, statement: Statement) {
        self.statements.push(statement);
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.push(Statement::info(text));
    }

    pub fn attention(&mut self, text: impl Into<String>) {
        self.push(Statement::attention(text));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Seal the list into the outcome of a group
    #[must_use]
    pub fn finish(self) -> Outcome {
        if self.statements.iter().any(Statement::is_error) {
            Outcome::PartialFailure(self.statements)
        } else {
            Outcome::Complete(self.statements)
        }
    }
}

/// Statements for a group, tagged with whether any input failed to process
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "statements", rename_all = "snake_case")]
pub enum Outcome {
    Complete(Vec<Statement>),
    /// At least one statement is a processing-error marker
    PartialFailure(Vec<Statement>),
}

impl Outcome {
    #[must_use]
    pub fn statements(&self) -> &[Statement] {
        match self {
            Self::Complete(s) | Self::PartialFailure(s) => s,
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }
}

/// Interpretation of a single locus group for one subject
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupInterpretation {
    pub group: LocusGroup,

    /// The group's input codes, verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quick_genotype: Option<String>,

    /// Fixed note introducing the group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preamble: Option<String>,

    #[serde(flatten)]
    pub outcome: Outcome,
}

impl GroupInterpretation {
    #[must_use]
    pub fn new(group: LocusGroup, statements: StatementList) -> Self {
        Self {
            group,
            quick_genotype: None,
            preamble: None,
            outcome: statements.finish(),
        }
    }

    #[must_use]
    pub fn with_quick_genotype(mut self, quick_genotype: impl Into<String>) -> Self {
        self.quick_genotype = Some(quick_genotype.into());
        self
    }

    #[must_use]
    pub fn with_preamble(mut self, preamble: impl Into<String>) -> Self {
        self.preamble = Some(preamble.into());
        self
    }

    #[must_use]
    pub fn statements(&self) -> &[Statement] {
        self.outcome.statements()
    }

    /// Statement texts, without severity markers
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.statements().iter().map(|s| s.text.as_str()).collect()
    }

    #[must_use]
    pub fn has_attention(&self) -> bool {
        self.statements().iter().any(Statement::is_attention)
    }
}
