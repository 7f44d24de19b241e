use serde::{Deserialize, Serialize};

use crate::core::genotype::GenotypeValue;
use crate::core::statement::{GroupInterpretation, StatementList};
use crate::core::types::{Locus, LocusGroup};
use crate::interpret::not_called;
use crate::parsing::ResultExtractor;

/// Eumelanin (black-family) pigment color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EumelaninColor {
    Black,
    Brown,
    Blue,
    Lilac,
}

impl std::fmt::Display for EumelaninColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Black => write!(f, "BLACK"),
            Self::Brown => write!(f, "BROWN"),
            Self::Blue => write!(f, "BLUE"),
            Self::Lilac => write!(f, "LILAC"),
        }
    }
}

/// Inputs of the base color group
#[derive(Debug, Clone)]
pub struct BaseColorGenotypes {
    pub e_locus: GenotypeValue,
    pub cocoa: GenotypeValue,
    pub intensity: GenotypeValue,
    pub b_locus: GenotypeValue,
    pub d_locus: GenotypeValue,
}

impl BaseColorGenotypes {
    pub fn extract(extractor: &dyn ResultExtractor) -> Self {
        Self {
            e_locus: extractor.extract(Locus::ELocus),
            cocoa: extractor.extract(Locus::Cocoa),
            intensity: extractor.extract(Locus::Intensity),
            b_locus: extractor.extract(Locus::BLocus),
            d_locus: extractor.extract(Locus::DLocus),
        }
    }

    /// `<e> <b> <d> <cocoa> with <intensity>`
    #[must_use]
    pub fn quick_genotype(&self) -> String {
        format!(
            "{} {} {} {} with {}",
            self.e_locus, self.b_locus, self.d_locus, self.cocoa, self.intensity
        )
    }
}

/// Two copies of `e` block eumelanin in hair
#[must_use]
pub fn is_recessive_red(e_locus: &GenotypeValue) -> bool {
    e_locus.is("ee")
}

/// Resolve the eumelanin color from the B and D loci
///
/// `bb` makes eumelanin brown and `dd` dilutes it; both together give lilac.
/// Anything other than the homozygous recessive code, `NoCall` included, counts
/// as not recessive.
#[must_use]
pub fn eumelanin_color(b_locus: &GenotypeValue, d_locus: &GenotypeValue) -> EumelaninColor {
    match (b_locus.is("bb"), d_locus.is("dd")) {
        (true, true) => EumelaninColor::Lilac,
        (true, false) => EumelaninColor::Brown,
        (false, true) => EumelaninColor::Blue,
        (false, false) => EumelaninColor::Black,
    }
}

/// Interpret the base color group
///
/// Always produces three statements: pigment capability, eumelanin color, and the
/// cocoa caveat.
#[must_use]
pub fn summarize_base_color(genotypes: &BaseColorGenotypes) -> GroupInterpretation {
    let mut statements = StatementList::new();

    if genotypes.e_locus.is_no_call() {
        statements.info(not_called(
            Locus::ELocus,
            "it is unknown whether this dog can produce eumelanin in hair.",
        ));
    } else if is_recessive_red(&genotypes.e_locus) {
        statements.info(
            "Recessive red and can't produce eumelanin in hairs, including eyelashes and whiskers.",
        );
    } else {
        statements.info(
            "Physically able to produce eumelanin (black, blue, brown, or lilac) pigment in hair.",
        );
    }

    let eu = eumelanin_color(&genotypes.b_locus, &genotypes.d_locus);
    let mut text = format!(
        "Eumelanin color is {eu}. Any eumelanin (including eye rims, nose, and lips) will be {eu}."
    );
    for (value, locus) in [
        (&genotypes.b_locus, Locus::BLocus),
        (&genotypes.d_locus, Locus::DLocus),
    ] {
        if value.is_no_call() {
            text.push(' ');
            text.push_str(&not_called(
                locus,
                "this assumes it has no recessive alleles.",
            ));
        }
    }
    statements.info(text);

    statements.info(format!(
        "Cocoa result: {}. Cocoa is only relevant to French Bulldogs and their mixes.",
        genotypes.cocoa
    ));

    GroupInterpretation::new(LocusGroup::BaseColor, statements)
        .with_quick_genotype(genotypes.quick_genotype())
}
