use crate::core::genotype::GenotypeValue;
use crate::core::statement::{GroupInterpretation, StatementList};
use crate::core::types::{Locus, LocusGroup};
use crate::interpret::{not_called, quick_genotype};
use crate::parsing::ResultExtractor;

pub const PERFORMANCE_PREAMBLE: &str = "This section isn't relevant to most dogs. Altitude \
     Adaptation is only found in a handful of rare breeds. POMC is mainly found in Labradors \
     and their mixes.";

/// Inputs of the performance group
#[derive(Debug, Clone)]
pub struct PerformanceGenotypes {
    pub altitude: GenotypeValue,
    pub appetite: GenotypeValue,
}

impl PerformanceGenotypes {
    pub fn extract(extractor: &dyn ResultExtractor) -> Self {
        Self {
            altitude: extractor.extract(Locus::Altitude),
            appetite: extractor.extract(Locus::Appetite),
        }
    }

    #[must_use]
    pub fn quick_genotype(&self) -> String {
        quick_genotype(&[&self.altitude, &self.appetite])
    }
}

/// Interpret the performance group
#[must_use]
pub fn summarize_performance(genotypes: &PerformanceGenotypes) -> GroupInterpretation {
    let mut statements = StatementList::new();

    if genotypes.altitude.is_called_other_than("GG") {
        statements.info("Dog has the gene to be adapted to low oxygen environments.");
    }

    match genotypes.appetite.code() {
        Some("NN") => statements.info(
            "Dog does not have POMC, a genetic disease that affects appetite. Dog may still have \
             high food motivation, but it's a behavioral trait rather than a lack of healthy \
             hunger signalling.",
        ),
        Some(_) => statements.attention(
            "Dog has POMC. This is listed as a trait, but is pretty much a genetic disease that \
             causes abnormally high appetite.",
        ),
        None => statements.info(not_called(
            Locus::Appetite,
            "it is unknown whether the dog has POMC.",
        )),
    }

    GroupInterpretation::new(LocusGroup::Performance, statements)
        .with_quick_genotype(genotypes.quick_genotype())
        .with_preamble(PERFORMANCE_PREAMBLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genotypes(altitude: &str, appetite: &str) -> PerformanceGenotypes {
        PerformanceGenotypes {
            altitude: GenotypeValue::called(altitude),
            appetite: GenotypeValue::called(appetite),
        }
    }

    #[test]
    fn test_wild_type() {
        let result = summarize_performance(&genotypes("GG", "NN"));
        let texts = result.texts();
        assert_eq!(texts.len(), 1);
        assert!(texts[0].starts_with("Dog does not have POMC"));
        assert!(!result.has_attention());
        assert_eq!(result.quick_genotype.as_deref(), Some("GG NN"));
        assert_eq!(result.preamble.as_deref(), Some(PERFORMANCE_PREAMBLE));
    }

    #[test]
    fn test_pomc_is_attention() {
        for code in ["ND", "DD"] {
            let result = summarize_performance(&genotypes("GA", code));
            let statements = result.statements();
            assert_eq!(statements.len(), 2);
            assert_eq!(
                statements[0].text,
                "Dog has the gene to be adapted to low oxygen environments."
            );
            assert!(statements[1].is_attention());
            assert!(statements[1].text.starts_with("Dog has POMC."));
        }
    }

    #[test]
    fn test_no_calls() {
        let g = PerformanceGenotypes {
            altitude: GenotypeValue::NoCall(Locus::Altitude),
            appetite: GenotypeValue::NoCall(Locus::Appetite),
        };
        let result = summarize_performance(&g);
        assert_eq!(
            result.texts(),
            vec![
                "Appetite (POMC) (POMC_appetite_linkage) was not called, so it is unknown \
                 whether the dog has POMC."
            ]
        );
        assert_eq!(
            result.quick_genotype.as_deref(),
            Some("NoCall(EPAS1_altitude) NoCall(POMC_appetite_linkage)")
        );
    }
}
