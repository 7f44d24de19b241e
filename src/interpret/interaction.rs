//! Cross-locus resolution for the coat color modifier group.
//!
//! K-locus masks the A-locus, and harlequin only expresses on a merle coat whose
//! base pattern depends on K. These loci are classified here once and the
//! classifications drive the wording in [`coat_modifiers`].
//!
//! [`coat_modifiers`]: super::coat_modifiers

use serde::{Deserialize, Serialize};

use crate::core::genotype::GenotypeValue;

/// Dominant-black status from the K-locus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KStatus {
    /// `KBKB`: solid eumelanin coat, A-locus has no effect
    DominantSolid,
    /// `KBky`: dominant solid or untestable brindle
    SolidOrBrindle,
    /// `kyky`: pattern comes from the A-locus
    AllowsPattern,
    NotCalled,
    Unrecognized,
}

impl KStatus {
    #[must_use]
    pub fn classify(k_locus: &GenotypeValue) -> Self {
        match k_locus.code() {
            Some("KBKB") => Self::DominantSolid,
            Some("KBky") => Self::SolidOrBrindle,
            Some("kyky") => Self::AllowsPattern,
            Some(_) => Self::Unrecognized,
            None => Self::NotCalled,
        }
    }

    /// The A-locus only shows when K is not homozygous dominant
    #[must_use]
    pub fn masks_a_locus(&self) -> bool {
        *self == Self::DominantSolid
    }

    #[must_use]
    pub fn maybe_brindle(&self) -> bool {
        *self == Self::SolidOrBrindle
    }
}

/// Merle dosage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MerleStatus {
    /// `M*M*`
    Double,
    /// `M*m`
    Single,
    NonMerle,
    NotCalled,
}

impl MerleStatus {
    /// Any called code other than `M*M*` or `M*m` is non-merle
    #[must_use]
    pub fn classify(merle: &GenotypeValue) -> Self {
        match merle.code() {
            Some("M*M*") => Self::Double,
            Some("M*m") => Self::Single,
            Some(_) => Self::NonMerle,
            None => Self::NotCalled,
        }
    }

    #[must_use]
    pub fn is_merle(&self) -> bool {
        matches!(self, Self::Double | Self::Single)
    }
}

/// Base coloration of a merle + harlequin dog, from the K-locus
#[must_use]
pub fn harlequin_base(k_locus: &GenotypeValue) -> &'static str {
    match k_locus.code() {
        Some("KBky") => "mantle- or brindle",
        Some("kyky") => "fawn",
        _ => "mantle",
    }
}
