use serde::{Deserialize, Serialize};

use crate::core::types::Locus;

/// A genotype result for one locus on one subject
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum GenotypeValue {
    /// The laboratory reported this code
    Called(String),
    /// No result could be extracted for this locus
    NoCall(Locus),
}

impl GenotypeValue {
    pub fn called(code: impl Into<String>) -> Self {
        Self::Called(code.into())
    }

    /// The reported code, if there is one
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Called(code) => Some(code.as_str()),
            Self::NoCall(_) => None,
        }
    }

    /// True only when the locus was called with exactly this code
    #[must_use]
    pub fn is(&self, code: &str) -> bool {
        self.code() == Some(code)
    }

    /// True when the locus was called with a code other than `code`
    #[must_use]
    pub fn is_called_other_than(&self, code: &str) -> bool {
        self.code().is_some_and(|c| c != code)
    }

    #[must_use]
    pub fn is_no_call(&self) -> bool {
        matches!(self, Self::NoCall(_))
    }
}

impl std::fmt::Display for GenotypeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Called(code) => write!(f, "{code}"),
            Self::NoCall(locus) => write!(f, "NoCall({})", locus.gene_id()),
        }
    }
}
