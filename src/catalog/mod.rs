//! Locus registry storage.
//!
//! The registry lists every locus the rule set understands, the group it is
//! interpreted in, how its genotype codes are read, and the codes it may carry.
//! An embedded catalog is compiled into the binary, but custom catalogs can also
//! be loaded from JSON files.
//!
//! ## Example
//!
//! ```rust,no_run
//! use coat_decoder::LocusRegistry;
//! use coat_decoder::core::types::Locus;
//!
//! let registry = LocusRegistry::load_embedded().unwrap();
//!
//! for entry in &registry.entries {
//!     println!("{} ({}): {}", entry.locus, entry.locus.gene_id(), entry.codes.join(" "));
//! }
//!
//! assert!(registry.is_valid_code(Locus::SLocus, "Ssp"));
//! ```

pub mod store;
