use crate::core::genotype::GenotypeValue;
use crate::core::statement::{GroupInterpretation, StatementList};
use crate::core::types::{Locus, LocusGroup};
use crate::interpret::{not_called, quick_genotype};
use crate::parsing::ResultExtractor;

/// Appended to every blue-eye statement
pub const BLUE_EYES_CAVEAT: &str = "Blue eyes can also be caused by coat color traits that \
     remove pigment, such as merle, whitehead, and piebald. In addition, lightened eyes from a \
     dilute coat may appear blue but are not.";

/// Inputs of the body features group
#[derive(Debug, Clone)]
pub struct BodyGenotypes {
    pub short_muzzle: GenotypeValue,
    pub bobtail: GenotypeValue,
    pub hind_dewclaws: GenotypeValue,
    pub muscling: GenotypeValue,
    pub blue_eyes: GenotypeValue,
}

impl BodyGenotypes {
    pub fn extract(extractor: &dyn ResultExtractor) -> Self {
        Self {
            short_muzzle: extractor.extract(Locus::ShortMuzzle),
            bobtail: extractor.extract(Locus::Bobtail),
            hind_dewclaws: extractor.extract(Locus::HindDewclaws),
            muscling: extractor.extract(Locus::Muscling),
            blue_eyes: extractor.extract(Locus::BlueEyes),
        }
    }

    #[must_use]
    pub fn quick_genotype(&self) -> String {
        quick_genotype(&[
            &self.short_muzzle,
            &self.bobtail,
            &self.hind_dewclaws,
            &self.muscling,
            &self.blue_eyes,
        ])
    }
}

/// Interpret the body features group
///
/// Hind dewclaws only show up in the quick genotype.
#[must_use]
pub fn summarize_body(genotypes: &BodyGenotypes) -> GroupInterpretation {
    let mut statements = StatementList::new();

    match genotypes.short_muzzle.code() {
        Some("AA") => statements.info(
            "Short snout detected. Dog should have a shorter nose and flatter face than normal.",
        ),
        Some(_) => statements.info(
            "Short snout not detected. Dog most likely will have a normal/medium snout, but may \
             have a long one. Not all forms of short snout are testable.",
        ),
        None => statements.info(not_called(
            Locus::ShortMuzzle,
            "muzzle length is unknown. Not all forms of short snout are testable.",
        )),
    }

    match genotypes.bobtail.code() {
        Some("CG") => statements.info(
            "Natural bobtail gene present. If dog has a short tail, it may have been born that way.",
        ),
        Some(_) => statements.info(
            "No natural bobtail detected. Not all forms of natural bobtail are testable.",
        ),
        None => statements.info(not_called(
            Locus::Bobtail,
            "it is unknown whether the dog has a natural bobtail. Not all forms of natural \
             bobtail are testable.",
        )),
    }

    // Only the no-effect genotype is reported
    if genotypes.muscling.is("CC") {
        statements.info(
            "No special bulk gene detected. This dog might still be muscular, but it's not as a \
             result of this particular gene.",
        );
    }

    let eyes = match genotypes.blue_eyes.code() {
        Some("NN") => "Dog doesn't have the blue eye gene, but might have blue eyes due to other \
                       factors."
            .to_string(),
        Some(_) => "One or both eyes may be true blue, independent of coat color.".to_string(),
        None => not_called(Locus::BlueEyes, "the blue eye gene status is unknown."),
    };
    statements.info(format!("{eyes} {BLUE_EYES_CAVEAT}"));

    GroupInterpretation::new(LocusGroup::BodyFeatures, statements)
        .with_quick_genotype(genotypes.quick_genotype())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genotypes() -> BodyGenotypes {
        BodyGenotypes {
            short_muzzle: GenotypeValue::called("CC"),
            bobtail: GenotypeValue::called("CC"),
            hind_dewclaws: GenotypeValue::called("CC"),
            muscling: GenotypeValue::called("CC"),
            blue_eyes: GenotypeValue::called("NN"),
        }
    }

    #[test]
    fn test_wild_type_body() {
        let result = summarize_body(&genotypes());
        let texts = result.texts();
        assert_eq!(texts.len(), 4);
        assert!(texts[0].starts_with("Short snout not detected."));
        assert!(texts[0].contains("normal/medium snout, but may have a long one."));
        assert!(texts[1].starts_with("No natural bobtail detected."));
        assert_eq!(
            texts[2],
            "No special bulk gene detected. This dog might still be muscular, but it's not as a \
             result of this particular gene."
        );
        assert!(texts[3].starts_with("Dog doesn't have the blue eye gene"));
        assert!(texts[3].ends_with(BLUE_EYES_CAVEAT));
        assert_eq!(result.quick_genotype.as_deref(), Some("CC CC CC CC NN"));
    }

    #[test]
    fn test_muscling_allele_is_silent() {
        let mut g = genotypes();
        g.muscling = GenotypeValue::called("CT");
        let texts = summarize_body(&g).texts().join("\n");
        assert!(!texts.contains("bulk"));

        g.muscling = GenotypeValue::NoCall(Locus::Muscling);
        assert_eq!(summarize_body(&g).statements().len(), 3);
    }

    #[test]
    fn test_present_traits() {
        let mut g = genotypes();
        g.short_muzzle = GenotypeValue::called("AA");
        g.bobtail = GenotypeValue::called("CG");
        g.blue_eyes = GenotypeValue::called("NDup");
        let result = summarize_body(&g);
        let texts = result.texts();
        assert_eq!(
            texts[0],
            "Short snout detected. Dog should have a shorter nose and flatter face than normal."
        );
        assert_eq!(
            texts[1],
            "Natural bobtail gene present. If dog has a short tail, it may have been born that way."
        );
        assert!(texts[3].starts_with("One or both eyes may be true blue"));
        assert!(texts[3].ends_with(BLUE_EYES_CAVEAT));
    }

    #[test]
    fn test_blue_eye_caveat_survives_no_call() {
        let mut g = genotypes();
        g.blue_eyes = GenotypeValue::NoCall(Locus::BlueEyes);
        g.short_muzzle = GenotypeValue::NoCall(Locus::ShortMuzzle);
        g.bobtail = GenotypeValue::NoCall(Locus::Bobtail);
        let result = summarize_body(&g);
        let texts = result.texts();
        assert!(texts[0].starts_with("Muzzle Length (BMP3_Muzzle) was not called"));
        assert!(texts[1].starts_with("Natural Bobtail (T_C189G_Bobtail) was not called"));
        assert!(texts[3].starts_with("Blue Eye Color (ALX4_Blue_Eyes_Linkage) was not called"));
        assert!(texts[3].ends_with(BLUE_EYES_CAVEAT));
        assert!(result.outcome.is_complete());
    }
}
