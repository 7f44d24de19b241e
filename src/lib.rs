//! # coat-decoder
//!
//! A library for explaining dog coat color and trait genotypes in plain language.
//!
//! Canine trait panels report a genotype code per locus (`ee`, `KBky`, `M*m`, ...).
//! Reading those codes takes knowledge of how the loci interact: the K-locus hides
//! the A-locus, harlequin only shows on a merle coat, two merle copies are a
//! health risk, and so on.
//!
//! `coat-decoder` runs a fixed rule set over the codes of one dog and produces,
//! for each trait group, a quick genotype summary and an ordered list of
//! statements, flagging the ones an owner or breeder must not skip.
//!
//! ## Features
//!
//! - **Six trait groups**: base color, coat color modifiers, other coat traits,
//!   body features, body size and performance
//! - **Locus interactions**: dominant black masking, merle/harlequin resolution,
//!   piebald allele counting
//! - **Missing data**: uncalled loci never fail an interpretation
//! - **Input formats**: exported trait profiles (standard or breeder layout),
//!   TSV/CSV genotype tables and JSON maps
//! - **Vocabulary checks**: called codes are checked against an embedded locus catalog
//!
//! ## Example
//!
//! ```rust
//! use coat_decoder::{Interpreter, Locus, LocusGroup, LocusRegistry};
//! use coat_decoder::parsing::table::GenotypeTable;
//!
//! // Load the embedded catalog of known loci
//! let registry = LocusRegistry::load_embedded().unwrap();
//!
//! let genotypes = GenotypeTable::new()
//!     .with(Locus::KLocus, "kyky")
//!     .with(Locus::Merle, "M*m")
//!     .with(Locus::Harlequin, "Hh");
//!
//! let report = Interpreter::new(&registry).interpret(&genotypes);
//!
//! for group in &report.groups {
//!     for statement in group.statements() {
//!         println!("{}: {statement}", group.group);
//!     }
//! }
//! let modifiers = report.group(LocusGroup::CoatColorModifiers).unwrap();
//! assert!(modifiers
//!     .texts()
//!     .iter()
//!     .any(|t| t.ends_with("This dog is merle and harlequin (fawn-based).")));
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Locus registry and its embedded vocabulary
//! - [`core`]: Core data types for loci, genotype values, statements and reports
//! - [`interpret`]: Group evaluators and the interpretation engine
//! - [`parsing`]: Result extractors for trait profiles and genotype tables
//! - [`cli`]: Command-line interface implementation
//! - [`web`]: JSON web API

pub mod catalog;
pub mod cli;
pub mod core;
pub mod interpret;
pub mod parsing;
pub mod utils;
pub mod web;

// Re-export commonly used types for convenience
pub use catalog::store::LocusRegistry;
pub use core::genotype::GenotypeValue;
pub use core::report::Report;
pub use core::statement::{GroupInterpretation, Outcome, Severity, Statement};
pub use core::types::*;
pub use interpret::{Interpreter, InterpreterConfig};
pub use parsing::ResultExtractor;
