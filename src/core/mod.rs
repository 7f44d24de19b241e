//! Core data types for genotype interpretation.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`Locus`], [`LocusGroup`]: The recognized loci and the groups they are interpreted in
//! - [`GenotypeValue`]: A called genotype code, or the `NoCall` sentinel
//! - [`Statement`], [`Severity`]: One explanatory entry, possibly flagged for attention
//! - [`GroupInterpretation`], [`Outcome`]: A group's quick genotype plus its statements
//! - [`Report`]: All group interpretations for one subject
//!
//! ## Locus Naming
//!
//! Each locus has two names:
//!
//! | Locus | Canonical key | Gene identifier |
//! |-------|---------------|-----------------|
//! | E     | eLocus        | MC1R            |
//! | K     | kLocus        | CBD103_K        |
//! | Merle | merle         | PMEL_Merle      |
//!
//! Lookups accept either form, case-insensitively.
//!
//! [`Locus`]: types::Locus
//! [`LocusGroup`]: types::LocusGroup
//! [`GenotypeValue`]: genotype::GenotypeValue
//! [`Statement`]: statement::Statement
//! [`Severity`]: statement::Severity
//! [`GroupInterpretation`]: statement::GroupInterpretation
//! [`Outcome`]: statement::Outcome
//! [`Report`]: report::Report

pub mod genotype;
pub mod report;
pub mod statement;
pub mod types;
