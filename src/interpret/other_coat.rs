use tracing::warn;

use crate::core::genotype::GenotypeValue;
use crate::core::statement::{GroupInterpretation, Statement, StatementList};
use crate::core::types::{Locus, LocusGroup};
use crate::interpret::{not_called, quick_genotype};
use crate::parsing::ResultExtractor;

/// Inputs of the other coat traits group
#[derive(Debug, Clone)]
pub struct OtherCoatGenotypes {
    pub furnishings: GenotypeValue,
    pub longhair: GenotypeValue,
    pub shedding: GenotypeValue,
    pub curl: GenotypeValue,
    pub xolo: GenotypeValue,
    pub aht: GenotypeValue,
    pub albino: GenotypeValue,
}

impl OtherCoatGenotypes {
    pub fn extract(extractor: &dyn ResultExtractor) -> Self {
        Self {
            furnishings: extractor.extract(Locus::Furnishings),
            longhair: extractor.extract(Locus::Longhair),
            shedding: extractor.extract(Locus::Shedding),
            curl: extractor.extract(Locus::Curl),
            xolo: extractor.extract(Locus::Xolo),
            aht: extractor.extract(Locus::Aht),
            albino: extractor.extract(Locus::Albino),
        }
    }

    #[must_use]
    pub fn quick_genotype(&self) -> String {
        quick_genotype(&[
            &self.furnishings,
            &self.longhair,
            &self.shedding,
            &self.curl,
            &self.xolo,
            &self.aht,
            &self.albino,
        ])
    }
}

/// Straight, wavy or curly, from the KRT71 code
#[must_use]
pub fn coat_curl(curl: &str) -> Option<&'static str> {
    match curl {
        "CC" => Some("straight"),
        "CT" => Some("wavy"),
        "TT" => Some("curly"),
        _ => None,
    }
}

/// Anything but `II` means furnishings are present
#[must_use]
pub fn has_furnishings(furnishings: &GenotypeValue) -> Option<bool> {
    furnishings.code().map(|c| c != "II")
}

/// Interpret the other coat traits group
#[must_use]
pub fn summarize_other_coat(genotypes: &OtherCoatGenotypes) -> GroupInterpretation {
    let mut statements = StatementList::new();

    let furnished = has_furnishings(&genotypes.furnishings);
    statements.push(coat_description(genotypes, furnished));

    if furnished == Some(true) {
        statements.info(
            "Dog has furnishings (facial hair) which may affect the coat length, texture, and \
             shedding pattern.",
        );
    }

    match genotypes.shedding.code() {
        Some("TT") => statements.info("Normal-to-low shedding that is not seasonal."),
        Some(_) => statements.info("High seasonal shedding. Dog may \"blow coat\" seasonally."),
        None => statements.info(not_called(
            Locus::Shedding,
            "the shedding pattern is unknown.",
        )),
    }

    if genotypes.xolo.is("NDup") {
        statements.info(
            "Dog is hairless (type: Xoloitzcuintli, Chinese Crested, or Peruvian Hairless Dog).",
        );
    }

    if genotypes.aht.is("ND") {
        statements.info("Dog carries a hairlessness gene (type: American Hairless Terrier).");
    } else if genotypes.aht.is("DD") {
        statements.info("Dog is hairless (type: American Hairless Terrier).");
    }

    if genotypes.albino.is_called_other_than("NN") {
        let verb = if genotypes.albino.is("DD") {
            "has"
        } else {
            "carries"
        };
        statements.attention(format!("Dog {verb} Doberman (Z-factor) albinism."));
    }

    GroupInterpretation::new(LocusGroup::OtherCoatTraits, statements)
        .with_quick_genotype(genotypes.quick_genotype())
}

/// Length, texture and curl, described together
fn coat_description(genotypes: &OtherCoatGenotypes, furnished: Option<bool>) -> Statement {
    let missing: Vec<String> = [
        (&genotypes.furnishings, Locus::Furnishings),
        (&genotypes.longhair, Locus::Longhair),
        (&genotypes.curl, Locus::Curl),
    ]
    .iter()
    .filter(|(value, _)| value.is_no_call())
    .map(|(_, locus)| format!("{} ({})", locus.label(), locus.gene_id()))
    .collect();

    let (Some(furnished), Some(longhair), Some(curl)) = (
        furnished,
        genotypes.longhair.code(),
        genotypes.curl.code(),
    ) else {
        let verb = if missing.len() == 1 { "was" } else { "were" };
        return Statement::info(format!(
            "Coat length, texture, and curl can't be fully predicted because {} {verb} not called.",
            missing.join(" and ")
        ));
    };

    let Some(curl) = coat_curl(curl) else {
        warn!(locus = %Locus::Curl, code = %curl, "Unrecognized curl genotype");
        return Statement::processing_failed(Locus::Curl);
    };

    let long = longhair == "TT";
    let length = if long { "long" } else { "short" };
    let texture = if !long && furnished { "wiry" } else { "smooth" };

    Statement::info(format!(
        "Coat should be {length}, {texture}, and relatively {curl}."
    ))
}
