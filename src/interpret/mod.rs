//! Genotype interpretation engine.
//!
//! One evaluator per locus group turns that group's genotype values into an
//! ordered list of explanatory statements:
//!
//! - [`base_color`]: pigment capability and eumelanin color
//! - [`coat_modifiers`]: K, A, RALY, S, R, merle and harlequin, resolved jointly
//! - [`other_coat`]: length, texture, curl, furnishings, shedding, hairlessness, albinism
//! - [`body`]: muzzle, bobtail, muscling and blue eyes
//! - [`size`]: a fixed disclaimer
//! - [`performance`]: altitude adaptation and POMC appetite
//!
//! [`Interpreter`] runs all of them for one subject and assembles a [`Report`].
//!
//! ## Rules About Missing Data
//!
//! A locus the extractor could not find arrives as `NoCall`. Evaluators never fail
//! on it: a rule that only speaks up for a non-wild-type result stays silent, and a
//! rule that always speaks says the locus was not called. A called code the rules
//! do not understand becomes a visible `[ERROR] processing ... failed` statement and
//! marks the group as a partial failure.
//!
//! ## Example
//!
//! ```rust
//! use coat_decoder::{Interpreter, LocusRegistry};
//! use coat_decoder::core::types::{Locus, LocusGroup};
//! use coat_decoder::parsing::table::GenotypeTable;
//!
//! let registry = LocusRegistry::load_embedded().unwrap();
//! let genotypes = GenotypeTable::new()
//!     .with(Locus::BLocus, "bb")
//!     .with(Locus::DLocus, "dd");
//!
//! let report = Interpreter::new(&registry).interpret(&genotypes);
//! let base = report.group(LocusGroup::BaseColor).unwrap();
//! assert!(base.statements()[1].text.starts_with("Eumelanin color is LILAC"));
//! ```
//!
//! [`Report`]: crate::core::report::Report

use tracing::debug;

use crate::core::types::Locus;

pub mod base_color;
pub mod body;
pub mod coat_modifiers;
pub mod engine;
pub mod interaction;
pub mod other_coat;
pub mod performance;
pub mod size;

pub use engine::{Interpreter, InterpreterConfig};

/// Statement text for a locus the extractor had no result for
pub(crate) fn not_called(locus: Locus, consequence: &str) -> String {
    debug!(locus = %locus, gene = locus.gene_id(), "Locus not called");
    format!(
        "{} ({}) was not called, so {consequence}",
        locus.label(),
        locus.gene_id()
    )
}

/// Space-separated codes, `NoCall(...)` included, in the order given
pub(crate) fn quick_genotype(values: &[&crate::core::genotype::GenotypeValue]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
