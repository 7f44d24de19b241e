//! Result extractors that supply genotype values keyed by locus.
//!
//! The interpretation engine only ever asks for a value by [`Locus`]. Where the
//! value comes from is the extractor's business; a missing value is always
//! returned as [`GenotypeValue::NoCall`], never as an error.
//!
//! This module provides extractors for:
//!
//! - **Genotype tables**: TSV/CSV `locus<sep>code` lines, or a JSON object
//! - **Trait profiles**: text exports of a laboratory trait report, in either the
//!   standard (6 section) or breeder (5 section) layout
//!
//! Any `Fn(Locus) -> GenotypeValue` is an extractor too.
//!
//! ## Example
//!
//! ```rust
//! use coat_decoder::parsing::profile::parse_profile_text;
//! use coat_decoder::parsing::ResultExtractor;
//! use coat_decoder::core::types::Locus;
//!
//! let text = "# Base Color\nMC1R: ee\n# Coat Color Modifiers\n# Other Coat Traits\n\
//!             ## Body Features\n# Body Size\n# Performance\n";
//! let profile = parse_profile_text(text, None).unwrap();
//!
//! assert_eq!(profile.extract(Locus::ELocus).code(), Some("ee"));
//! assert!(profile.extract(Locus::Merle).is_no_call());
//! ```
//!
//! [`Locus`]: crate::core::types::Locus
//! [`GenotypeValue::NoCall`]: crate::core::genotype::GenotypeValue::NoCall

use thiserror::Error;

use crate::core::genotype::GenotypeValue;
use crate::core::types::{Locus, ProfileLayout};

pub mod detect;
pub mod profile;
pub mod table;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid genotype input: {0}")]
    InvalidFormat(String),

    #[error("Invalid JSON genotype input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Cannot determine profile layout: found {0} trait sections (expected 5 or 6)")]
    UnknownLayout(usize),

    #[error("Too many genotype entries: {0} exceeds maximum allowed (1000)")]
    TooManyEntries(usize),
}

/// Supplies the genotype value for a locus
pub trait ResultExtractor {
    /// Value for `locus`, or `NoCall(locus)` when the source has none
    fn extract(&self, locus: Locus) -> GenotypeValue;

    /// Layout of the source profile, if the values came from one
    fn layout(&self) -> Option<ProfileLayout> {
        None
    }
}

impl<F> ResultExtractor for F
where
    F: Fn(Locus) -> GenotypeValue,
{
    fn extract(&self, locus: Locus) -> GenotypeValue {
        self(locus)
    }
}
