use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Named bundle of loci that are interpreted together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocusGroup {
    BaseColor,
    CoatColorModifiers,
    OtherCoatTraits,
    BodyFeatures,
    BodySize,
    Performance,
}

impl LocusGroup {
    /// All groups, in report order
    pub const ALL: [LocusGroup; 6] = [
        LocusGroup::BaseColor,
        LocusGroup::CoatColorModifiers,
        LocusGroup::OtherCoatTraits,
        LocusGroup::BodyFeatures,
        LocusGroup::BodySize,
        LocusGroup::Performance,
    ];

    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::BaseColor => "Base Color",
            Self::CoatColorModifiers => "Coat Color Modifiers",
            Self::OtherCoatTraits => "Other Coat Traits",
            Self::BodyFeatures => "Body Features",
            Self::BodySize => "Body Size",
            Self::Performance => "Performance",
        }
    }

    /// Loci belonging to this group, in quick-genotype order
    #[must_use]
    pub fn loci(&self) -> Vec<Locus> {
        Locus::ALL
            .iter()
            .copied()
            .filter(|l| l.group() == *self)
            .collect()
    }
}

impl std::fmt::Display for LocusGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for LocusGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "basecolor" | "color" => Ok(Self::BaseColor),
            "coatcolormodifiers" | "modifiers" => Ok(Self::CoatColorModifiers),
            "othercoattraits" | "coat" => Ok(Self::OtherCoatTraits),
            "bodyfeatures" | "body" => Ok(Self::BodyFeatures),
            "bodysize" | "size" => Ok(Self::BodySize),
            "performance" => Ok(Self::Performance),
            _ => Err(format!("Unknown locus group: '{s}'")),
        }
    }
}

/// A recognized genetic locus
///
/// The serialized form is the canonical key (e.g. `eLocus`); reports exported by the
/// testing laboratory identify the same locus by its gene identifier (e.g. `MC1R`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Locus {
    ELocus,
    Cocoa,
    Intensity,
    BLocus,
    DLocus,
    KLocus,
    ALocus,
    Raly,
    SLocus,
    RLocus,
    Merle,
    Harlequin,
    Furnishings,
    Longhair,
    Shedding,
    Curl,
    Xolo,
    Aht,
    Albino,
    ShortMuzzle,
    Bobtail,
    HindDewclaws,
    Muscling,
    BlueEyes,
    Altitude,
    Appetite,
}

impl Locus {
    pub const ALL: [Locus; 26] = [
        Locus::ELocus,
        Locus::BLocus,
        Locus::DLocus,
        Locus::Cocoa,
        Locus::Intensity,
        Locus::KLocus,
        Locus::ALocus,
        Locus::Raly,
        Locus::SLocus,
        Locus::RLocus,
        Locus::Merle,
        Locus::Harlequin,
        Locus::Furnishings,
        Locus::Longhair,
        Locus::Shedding,
        Locus::Curl,
        Locus::Xolo,
        Locus::Aht,
        Locus::Albino,
        Locus::ShortMuzzle,
        Locus::Bobtail,
        Locus::HindDewclaws,
        Locus::Muscling,
        Locus::BlueEyes,
        Locus::Altitude,
        Locus::Appetite,
    ];

    /// Canonical key, as used in genotype tables and JSON
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Self::ELocus => "eLocus",
            Self::Cocoa => "cocoa",
            Self::Intensity => "intensity",
            Self::BLocus => "bLocus",
            Self::DLocus => "dLocus",
            Self::KLocus => "kLocus",
            Self::ALocus => "aLocus",
            Self::Raly => "raly",
            Self::SLocus => "sLocus",
            Self::RLocus => "rLocus",
            Self::Merle => "merle",
            Self::Harlequin => "harlequin",
            Self::Furnishings => "furnishings",
            Self::Longhair => "longhair",
            Self::Shedding => "shedding",
            Self::Curl => "curl",
            Self::Xolo => "xolo",
            Self::Aht => "aht",
            Self::Albino => "albino",
            Self::ShortMuzzle => "shortMuzzle",
            Self::Bobtail => "bobtail",
            Self::HindDewclaws => "hindDewclaws",
            Self::Muscling => "muscling",
            Self::BlueEyes => "blueEyes",
            Self::Altitude => "altitude",
            Self::Appetite => "appetite",
        }
    }

    /// Gene identifier used by the testing laboratory's trait profile
    #[must_use]
    pub fn gene_id(&self) -> &'static str {
        match self {
            Self::ELocus => "MC1R",
            Self::Cocoa => "HPS3_Cocoa",
            Self::Intensity => "Intensity_red_pigment",
            Self::BLocus => "TYRP1",
            Self::DLocus => "MLPH_D",
            Self::KLocus => "CBD103_K",
            Self::ALocus => "ASIP",
            Self::Raly => "RALY_Saddle_trait_gene",
            Self::SLocus => "MITF",
            Self::RLocus => "USH2A_Roan",
            Self::Merle => "PMEL_Merle",
            Self::Harlequin => "PSMB7_H",
            Self::Furnishings => "RSPO2_moustache",
            Self::Longhair => "FGF5",
            Self::Shedding => "MC5R_shedding",
            Self::Curl => "KRT71_CurlyCoat",
            Self::Xolo => "FOXI3_Hairless_Linkage",
            Self::Aht => "SGK3_Hairless",
            Self::Albino => "SLC45A2_oculocutaneous_albinism_type_2_doberman_Z_factor",
            Self::ShortMuzzle => "BMP3_Muzzle",
            Self::Bobtail => "T_C189G_Bobtail",
            Self::HindDewclaws => "LMBR1_Claw",
            Self::Muscling => "ACSL4_Bulky_trait_gene",
            Self::BlueEyes => "ALX4_Blue_Eyes_Linkage",
            Self::Altitude => "EPAS1_altitude",
            Self::Appetite => "POMC_appetite_linkage",
        }
    }

    /// Human-readable name used in statements
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::ELocus => "E Locus",
            Self::Cocoa => "Cocoa",
            Self::Intensity => "Red Pigment Intensity",
            Self::BLocus => "B Locus",
            Self::DLocus => "D Locus",
            Self::KLocus => "K Locus",
            Self::ALocus => "A Locus",
            Self::Raly => "Saddle Tan (RALY)",
            Self::SLocus => "S Locus",
            Self::RLocus => "R Locus",
            Self::Merle => "Merle",
            Self::Harlequin => "Harlequin",
            Self::Furnishings => "Furnishings",
            Self::Longhair => "Coat Length",
            Self::Shedding => "Shedding",
            Self::Curl => "Coat Texture",
            Self::Xolo => "Hairless (Xolo type)",
            Self::Aht => "Hairless (AHT type)",
            Self::Albino => "Oculocutaneous Albinism Type 2",
            Self::ShortMuzzle => "Muzzle Length",
            Self::Bobtail => "Natural Bobtail",
            Self::HindDewclaws => "Hind Dewclaws",
            Self::Muscling => "Bulky Muscling",
            Self::BlueEyes => "Blue Eye Color",
            Self::Altitude => "Altitude Adaptation",
            Self::Appetite => "Appetite (POMC)",
        }
    }

    #[must_use]
    pub fn group(&self) -> LocusGroup {
        match self {
            Self::ELocus | Self::Cocoa | Self::Intensity | Self::BLocus | Self::DLocus => {
                LocusGroup::BaseColor
            }
            Self::KLocus
            | Self::ALocus
            | Self::Raly
            | Self::SLocus
            | Self::RLocus
            | Self::Merle
            | Self::Harlequin => LocusGroup::CoatColorModifiers,
            Self::Furnishings
            | Self::Longhair
            | Self::Shedding
            | Self::Curl
            | Self::Xolo
            | Self::Aht
            | Self::Albino => LocusGroup::OtherCoatTraits,
            Self::ShortMuzzle
            | Self::Bobtail
            | Self::HindDewclaws
            | Self::Muscling
            | Self::BlueEyes => LocusGroup::BodyFeatures,
            Self::Altitude | Self::Appetite => LocusGroup::Performance,
        }
    }
}

impl std::fmt::Display for Locus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Locus {
    type Err = String;

    /// Accepts either the canonical key or the gene identifier, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Locus::ALL
            .iter()
            .copied()
            .find(|l| l.key().eq_ignore_ascii_case(s) || l.gene_id().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown locus: '{s}'"))
    }
}

/// How the characters of a genotype code should be read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeSemantics {
    /// Two allele symbols, one per chromosome copy (e.g. `Bb`)
    Zygosity,
    /// The code length encodes the allele count (e.g. S-locus `SS` / `Ssp` / `spsp`)
    AlleleLength,
    /// Free-text result reported verbatim
    Descriptive,
}

impl std::fmt::Display for CodeSemantics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Zygosity => write!(f, "zygosity"),
            Self::AlleleLength => write!(f, "allele_length"),
            Self::Descriptive => write!(f, "descriptive"),
        }
    }
}

/// Layout variant of an exported trait profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileLayout {
    /// Six trait sections, one genotype code per result line
    Standard,
    /// Five trait sections (color and modifiers merged), codes in trailing parentheses
    Breeder,
}

impl ProfileLayout {
    /// Number of trait sections a profile of this layout carries
    #[must_use]
    pub fn section_count(&self) -> usize {
        match self {
            Self::Standard => 6,
            Self::Breeder => 5,
        }
    }

    #[must_use]
    pub fn from_section_count(count: usize) -> Option<Self> {
        match count {
            6 => Some(Self::Standard),
            5 => Some(Self::Breeder),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProfileLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Breeder => write!(f, "breeder"),
        }
    }
}
