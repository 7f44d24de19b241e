use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

use crate::core::types::{CodeSemantics, Locus, LocusGroup};

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Failed to read locus catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse locus catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Locus catalog has no entry for {0}")]
    MissingLocus(Locus),

    #[error("Locus catalog lists {0} more than once")]
    DuplicateLocus(Locus),

    #[error("Locus catalog entry for {0} has no genotype codes")]
    EmptyVocabulary(Locus),
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    pub created_at: String,
    pub loci: Vec<LocusEntry>,
}

/// Registry entry describing the vocabulary of one locus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocusEntry {
    pub locus: Locus,
    pub semantics: CodeSemantics,
    pub codes: Vec<String>,
    #[serde(default)]
    pub description: String,
}

impl LocusEntry {
    #[must_use]
    pub fn group(&self) -> LocusGroup {
        self.locus.group()
    }

    #[must_use]
    pub fn accepts(&self, code: &str) -> bool {
        self.codes.iter().any(|c| c == code)
    }
}

/// Static catalog of recognized loci and their valid genotype codes
#[derive(Debug)]
pub struct LocusRegistry {
    /// All entries, in catalog order
    pub entries: Vec<LocusEntry>,

    /// Index: locus -> index in entries vec
    by_locus: HashMap<Locus, usize>,
}

impl LocusRegistry {
    /// Load the embedded default catalog
    pub fn load_embedded() -> Result<Self, RegistryError> {
        // Validated at compile time via build.rs
        const EMBEDDED_CATALOG: &str = include_str!("../../catalogs/dog_loci.json");
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load catalog from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, RegistryError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse catalog from JSON string
    ///
    /// Every known locus must appear exactly once with a non-empty vocabulary.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let data: CatalogData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != CATALOG_VERSION {
            warn!(
                expected = CATALOG_VERSION,
                found = %data.version,
                "Locus catalog version mismatch"
            );
        }

        let mut by_locus = HashMap::new();
        for (index, entry) in data.loci.iter().enumerate() {
            if entry.codes.is_empty() {
                return Err(RegistryError::EmptyVocabulary(entry.locus));
            }
            if by_locus.insert(entry.locus, index).is_some() {
                return Err(RegistryError::DuplicateLocus(entry.locus));
            }
        }

        if let Some(missing) = Locus::ALL.iter().find(|l| !by_locus.contains_key(l)) {
            return Err(RegistryError::MissingLocus(*missing));
        }

        Ok(Self {
            entries: data.loci,
            by_locus,
        })
    }

    /// Get the entry for a locus
    pub fn get(&self, locus: Locus) -> Option<&LocusEntry> {
        self.by_locus.get(&locus).map(|&idx| &self.entries[idx])
    }

    /// Look up by canonical key or gene identifier
    pub fn lookup(&self, name: &str) -> Option<&LocusEntry> {
        name.parse::<Locus>().ok().and_then(|l| self.get(l))
    }

    /// Whether `code` is in the vocabulary of `locus`
    pub fn is_valid_code(&self, locus: Locus, code: &str) -> bool {
        self.get(locus).is_some_and(|e| e.accepts(code))
    }

    /// Entries belonging to one group, in catalog order
    pub fn group_entries(&self, group: LocusGroup) -> impl Iterator<Item = &LocusEntry> {
        self.entries.iter().filter(move |e| e.group() == group)
    }

    /// Export catalog to JSON
    pub fn to_json(&self) -> Result<String, RegistryError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            loci: self.entries.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of loci in catalog
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
