use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::genotype::GenotypeValue;
use crate::core::statement::{GroupInterpretation, Severity, Statement, StatementList};
use crate::core::types::{Locus, LocusGroup};
use crate::interpret::interaction::{harlequin_base, KStatus, MerleStatus};
use crate::interpret::{not_called, quick_genotype};
use crate::parsing::ResultExtractor;

/// Appended to every S-locus statement
pub const WHITE_FACTORS_CAVEAT: &str = "Regardless of this piebald result, a dog may have white \
    from other factors, such as residual white, untestable white spotting, merle, very pale \
    pigmentation, or whitehead.";

/// Appended to every merle-positive statement
pub const MERLE_BREEDING_CAVEAT: &str = "If you plan to breed this dog or any of its offspring, \
    you should test the merle length, and all potential breeding partners should be tested for \
    merle even if they look non-merle.";

pub const RALY_CAVEAT: &str =
    "RALY (saddle tan) test is outdated/unreliable and should usually be ignored.";

/// Piebald dosage, read from the S-locus code length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PiebaldStatus {
    /// Length 2, e.g. `SS`
    NoPiebald,
    /// Length 3, e.g. `Ssp`
    Carrier,
    /// Length 4, e.g. `spsp`
    Piebald,
}

impl PiebaldStatus {
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::NoPiebald => "No piebald detected.",
            Self::Carrier => "Piebald carrier. Dog may have small amounts of white.",
            Self::Piebald => "Piebald. Dog should have large areas of white coat.",
        }
    }
}

/// Classify an S-locus code by its length in characters
///
/// Each `sp` allele is two characters and each `S` allele one, so only lengths 2,
/// 3 and 4 are meaningful. Any other length returns `None`.
#[must_use]
pub fn piebald_status(s_locus: &str) -> Option<PiebaldStatus> {
    match s_locus.chars().count() {
        2 => Some(PiebaldStatus::NoPiebald),
        3 => Some(PiebaldStatus::Carrier),
        4 => Some(PiebaldStatus::Piebald),
        _ => None,
    }
}

/// Describe the A-locus pattern
///
/// A two-character code has no expressed pattern allele (`aa`). Longer codes are
/// read by their first two characters, which name the dominant allele. Returns
/// `None` for an allele the rules do not know, so the caller can flag it.
#[must_use]
pub fn a_locus_pattern(a_locus: &str, maybe_brindle: bool) -> Option<String> {
    if a_locus.chars().count() == 2 {
        return Some("Recessive solid, without any phaeomelanin (yellow/tan) areas.".to_string());
    }

    match a_locus.get(..2)? {
        "ay" => Some(
            "Sable: base color will be sandy, tan, fawn, or red, with or without shading or tipping."
                .to_string(),
        ),
        "aw" => Some(
            "Agouti (wild type). Dog will have a blend of eumelanin and phaeomelanin hairs across their body."
                .to_string(),
        ),
        "at" => Some(if maybe_brindle {
            "Tan points (or brindle points).".to_string()
        } else {
            "Tan points.".to_string()
        }),
        _ => None,
    }
}

/// Inputs of the coat color modifier group
#[derive(Debug, Clone)]
pub struct CoatModifierGenotypes {
    pub k_locus: GenotypeValue,
    pub a_locus: GenotypeValue,
    pub raly: GenotypeValue,
    pub s_locus: GenotypeValue,
    pub r_locus: GenotypeValue,
    pub merle: GenotypeValue,
    pub harlequin: GenotypeValue,
}

impl CoatModifierGenotypes {
    pub fn extract(extractor: &dyn ResultExtractor) -> Self {
        Self {
            k_locus: extractor.extract(Locus::KLocus),
            a_locus: extractor.extract(Locus::ALocus),
            raly: extractor.extract(Locus::Raly),
            s_locus: extractor.extract(Locus::SLocus),
            r_locus: extractor.extract(Locus::RLocus),
            merle: extractor.extract(Locus::Merle),
            harlequin: extractor.extract(Locus::Harlequin),
        }
    }

    #[must_use]
    pub fn quick_genotype(&self) -> String {
        quick_genotype(&[
            &self.k_locus,
            &self.a_locus,
            &self.raly,
            &self.s_locus,
            &self.r_locus,
            &self.merle,
            &self.harlequin,
        ])
    }
}

/// Interpret the coat color modifier group
///
/// Statements come in a fixed order: K-locus, A-locus, RALY, S-locus, R-locus (only
/// when roan), merle, harlequin (only when not `hh`).
#[must_use]
pub fn summarize_coat_modifiers(genotypes: &CoatModifierGenotypes) -> GroupInterpretation {
    let mut statements = StatementList::new();

    let k_status = KStatus::classify(&genotypes.k_locus);
    statements.push(k_locus_statement(k_status));
    statements.push(a_locus_statement(&genotypes.a_locus, k_status));
    statements.info(RALY_CAVEAT);
    statements.push(s_locus_statement(&genotypes.s_locus));

    if genotypes.r_locus.is_called_other_than("rr") {
        statements.info(
            "Roan detected. If there are large white areas in the coat, they should have \
             ticking, roaning, or Dalmatian spots.",
        );
    }

    // Merle must be resolved before harlequin wording is chosen
    let merle_status = MerleStatus::classify(&genotypes.merle);
    statements.push(merle_statement(merle_status));

    if genotypes.harlequin.is_called_other_than("hh") {
        statements.info(harlequin_text(merle_status, &genotypes.k_locus));
    } else if genotypes.harlequin.is_no_call() {
        debug!("Harlequin not called, skipping");
    }

    GroupInterpretation::new(LocusGroup::CoatColorModifiers, statements)
        .with_quick_genotype(genotypes.quick_genotype())
}

fn k_locus_statement(k_status: KStatus) -> Statement {
    match k_status {
        KStatus::DominantSolid => Statement::info(
            "Dominant solid. Full eumelanin coat. Other genes (such as merle, piebald, seal, or \
             domino) may affect whether the appearance is actually solid or not.",
        ),
        KStatus::SolidOrBrindle => Statement::info(
            "KB/ky: may be dominant solid or may be brindle. Brindle is untestable and 4 \
             genotypes (KB/ky, KB/Kbr, Kbr/Kbr, and Kbr/ky) all test as KB/ky.",
        ),
        KStatus::AllowsPattern => Statement::info(
            "Able to have both eumelanin and phaeomelanin in coat. Pattern will be determined \
             by the A-Locus.",
        ),
        KStatus::NotCalled => Statement::info(not_called(
            Locus::KLocus,
            "it is unknown whether dominant black masks the A-Locus pattern.",
        )),
        KStatus::Unrecognized => {
            warn!(locus = %Locus::KLocus, "Unrecognized K-Locus genotype");
            Statement::processing_failed(Locus::KLocus)
        }
    }
}

fn a_locus_statement(a_locus: &GenotypeValue, k_status: KStatus) -> Statement {
    if k_status.masks_a_locus() {
        return Statement::info("A-Locus pattern will have no effect; dog is dominant solid.");
    }

    let Some(code) = a_locus.code() else {
        return Statement::info(not_called(
            Locus::ALocus,
            "the A-Locus pattern is unknown.",
        ));
    };

    match a_locus_pattern(code, k_status.maybe_brindle()) {
        Some(pattern) => Statement::info(format!("A-Locus: {pattern}")),
        None => {
            warn!(locus = %Locus::ALocus, code = %code, "Unrecognized A-Locus allele");
            Statement::processing_failed(Locus::ALocus)
        }
    }
}

fn s_locus_statement(s_locus: &GenotypeValue) -> Statement {
    let Some(code) = s_locus.code() else {
        return Statement::info(format!(
            "{} {WHITE_FACTORS_CAVEAT}",
            not_called(Locus::SLocus, "the piebald status is unknown.")
        ));
    };

    match piebald_status(code) {
        Some(status) => Statement::info(format!(
            "{} {WHITE_FACTORS_CAVEAT}",
            status.description()
        )),
        None => {
            warn!(locus = %Locus::SLocus, code = %code, "S-Locus code has an unexpected length");
            Statement {
                text: format!(
                    "[ERROR] Unrecognized piebald genotype '{code}'. {WHITE_FACTORS_CAVEAT}"
                ),
                severity: Severity::Error,
            }
        }
    }
}

fn merle_statement(merle_status: MerleStatus) -> Statement {
    match merle_status {
        MerleStatus::Double => Statement::attention(format!(
            "Dog tests as double merle and may have impaired vision or hearing. \
             {MERLE_BREEDING_CAVEAT}"
        )),
        MerleStatus::Single => {
            Statement::info(format!("Dog tests as single merle. {MERLE_BREEDING_CAVEAT}"))
        }
        MerleStatus::NonMerle => Statement::info("No merle detected."),
        MerleStatus::NotCalled => {
            Statement::info(not_called(Locus::Merle, "the merle status is unknown."))
        }
    }
}

fn harlequin_text(merle_status: MerleStatus, k_locus: &GenotypeValue) -> String {
    let mut text = String::from(
        "Harlequin detected. This gene only exists in Great Danes and their mixes, regardless \
         of whether Dane was detected in the breed results. It can only express in merle dogs.",
    );

    match merle_status {
        MerleStatus::Double | MerleStatus::Single => {
            text.push_str(&format!(
                " This dog is merle and harlequin ({}-based).",
                harlequin_base(k_locus)
            ));
        }
        MerleStatus::NonMerle => text.push_str(
            " This dog is non-merle, but it can produce harlequin offspring if paired with a \
             merle dog.",
        ),
        MerleStatus::NotCalled => text.push_str(
            " Merle was not called, so it is unknown whether harlequin is expressed.",
        ),
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genotypes() -> CoatModifierGenotypes {
        CoatModifierGenotypes {
            k_locus: GenotypeValue::called("kyky"),
            a_locus: GenotypeValue::called("ayat"),
            raly: GenotypeValue::called("NN"),
            s_locus: GenotypeValue::called("SS"),
            r_locus: GenotypeValue::called("rr"),
            merle: GenotypeValue::called("mm"),
            harlequin: GenotypeValue::called("hh"),
        }
    }

    #[test]
    fn test_fixed_order_without_optional_statements() {
        let result = summarize_coat_modifiers(&genotypes());
        let texts = result.texts();
        assert_eq!(texts.len(), 5);
        assert!(texts[0].starts_with("Able to have both eumelanin and phaeomelanin"));
        assert!(texts[1].starts_with("A-Locus: Sable"));
        assert_eq!(texts[2], RALY_CAVEAT);
        assert!(texts[3].starts_with("No piebald detected."));
        assert_eq!(texts[4], "No merle detected.");
        assert!(result.outcome.is_complete());
    }

    #[test]
    fn test_dominant_solid_masks_a_locus() {
        for a in ["ayay", "atat", "aa", "zz9"] {
            let mut g = genotypes();
            g.k_locus = GenotypeValue::called("KBKB");
            g.a_locus = GenotypeValue::called(a);
            let result = summarize_coat_modifiers(&g);
            assert_eq!(
                result.texts()[1],
                "A-Locus pattern will have no effect; dog is dominant solid."
            );
        }
    }

    #[test]
    fn test_brindle_caveat_on_tan_points() {
        let mut g = genotypes();
        g.k_locus = GenotypeValue::called("KBky");
        g.a_locus = GenotypeValue::called("atat");
        let result = summarize_coat_modifiers(&g);
        assert!(result.texts()[0].contains("4 genotypes"));
        assert_eq!(result.texts()[1], "A-Locus: Tan points (or brindle points).");

        g.k_locus = GenotypeValue::called("kyky");
        let result = summarize_coat_modifiers(&g);
        assert_eq!(result.texts()[1], "A-Locus: Tan points.");
    }

    #[test]
    fn test_a_locus_patterns() {
        assert!(a_locus_pattern("aa", false)
            .unwrap()
            .starts_with("Recessive solid"));
        assert!(a_locus_pattern("awat", false).unwrap().starts_with("Agouti"));
        assert!(a_locus_pattern("aya", false).unwrap().starts_with("Sable"));
        assert_eq!(a_locus_pattern("xyz", false), None);
        assert_eq!(a_locus_pattern("a", false), None);
    }

    #[test]
    fn test_unrecognized_a_locus_is_flagged() {
        let mut g = genotypes();
        g.a_locus = GenotypeValue::called("qqqq");
        let result = summarize_coat_modifiers(&g);
        let a = &result.statements()[1];
        assert_eq!(a.text, "[ERROR] processing A Locus failed");
        assert_eq!(a.severity, Severity::Error);
        assert!(!result.outcome.is_complete());
    }

    #[test]
    fn test_piebald_status_by_length() {
        assert_eq!(piebald_status("SS"), Some(PiebaldStatus::NoPiebald));
        assert_eq!(piebald_status("Ssp"), Some(PiebaldStatus::Carrier));
        assert_eq!(piebald_status("spsp"), Some(PiebaldStatus::Piebald));
        assert_eq!(piebald_status("S"), None);
        assert_eq!(piebald_status("spspsp"), None);
    }

    #[test]
    fn test_s_locus_caveat_always_trails() {
        for code in ["SS", "Ssp", "spsp", "S", "spspS"] {
            let mut g = genotypes();
            g.s_locus = GenotypeValue::called(code);
            let result = summarize_coat_modifiers(&g);
            assert!(
                result.texts()[3].ends_with(WHITE_FACTORS_CAVEAT),
                "caveat missing for {code}"
            );
        }

        let mut g = genotypes();
        g.s_locus = GenotypeValue::NoCall(Locus::SLocus);
        let result = summarize_coat_modifiers(&g);
        assert!(result.texts()[3].ends_with(WHITE_FACTORS_CAVEAT));
    }

    #[test]
    fn test_malformed_s_locus_is_partial_failure() {
        let mut g = genotypes();
        g.s_locus = GenotypeValue::called("S");
        let result = summarize_coat_modifiers(&g);
        assert!(result.texts()[3].contains("Unrecognized piebald genotype 'S'"));
        assert!(result.statements()[3].is_error());
        assert!(!result.outcome.is_complete());
    }

    #[test]
    fn test_roan_only_when_not_rr() {
        let mut g = genotypes();
        g.r_locus = GenotypeValue::called("Rr");
        let result = summarize_coat_modifiers(&g);
        assert_eq!(result.statements().len(), 6);
        assert!(result.texts()[4].starts_with("Roan detected."));

        g.r_locus = GenotypeValue::NoCall(Locus::RLocus);
        assert_eq!(summarize_coat_modifiers(&g).statements().len(), 5);
    }

    #[test]
    fn test_merle_attention_and_caveat() {
        let mut g = genotypes();
        g.merle = GenotypeValue::called("M*M*");
        let result = summarize_coat_modifiers(&g);
        let merle = &result.statements()[4];
        assert!(merle.is_attention());
        assert!(merle.text.contains("double merle"));
        assert!(merle.text.ends_with(MERLE_BREEDING_CAVEAT));

        g.merle = GenotypeValue::called("M*m");
        let result = summarize_coat_modifiers(&g);
        let merle = &result.statements()[4];
        assert!(!merle.is_attention());
        assert!(merle.text.ends_with(MERLE_BREEDING_CAVEAT));
    }

    #[test]
    fn test_harlequin_on_merle_fawn() {
        let mut g = genotypes();
        g.merle = GenotypeValue::called("M*m");
        g.harlequin = GenotypeValue::called("Hh");
        g.k_locus = GenotypeValue::called("kyky");
        let result = summarize_coat_modifiers(&g);
        let texts = result.texts();
        assert_eq!(texts.len(), 6);
        assert!(texts[5].starts_with("Harlequin detected."));
        assert!(texts[5].ends_with("This dog is merle and harlequin (fawn-based)."));
    }

    #[test]
    fn test_harlequin_on_non_merle() {
        let mut g = genotypes();
        g.harlequin = GenotypeValue::called("Hh");
        let result = summarize_coat_modifiers(&g);
        assert!(result.texts()[5].contains("can produce harlequin offspring"));
    }

    #[test]
    fn test_harlequin_with_merle_not_called() {
        let mut g = genotypes();
        g.merle = GenotypeValue::NoCall(Locus::Merle);
        g.harlequin = GenotypeValue::called("Hh");
        let result = summarize_coat_modifiers(&g);
        assert!(result.texts()[4].starts_with("Merle (PMEL_Merle) was not called"));
        assert!(result.texts()[5].contains("unknown whether harlequin is expressed"));
    }

    #[test]
    fn test_all_no_call_never_panics() {
        let g = CoatModifierGenotypes {
            k_locus: GenotypeValue::NoCall(Locus::KLocus),
            a_locus: GenotypeValue::NoCall(Locus::ALocus),
            raly: GenotypeValue::NoCall(Locus::Raly),
            s_locus: GenotypeValue::NoCall(Locus::SLocus),
            r_locus: GenotypeValue::NoCall(Locus::RLocus),
            merle: GenotypeValue::NoCall(Locus::Merle),
            harlequin: GenotypeValue::NoCall(Locus::Harlequin),
        };
        let result = summarize_coat_modifiers(&g);
        assert_eq!(result.statements().len(), 5);
        assert!(result.outcome.is_complete());
        assert_eq!(
            result.quick_genotype.as_deref(),
            Some(
                "NoCall(CBD103_K) NoCall(ASIP) NoCall(RALY_Saddle_trait_gene) NoCall(MITF) \
                 NoCall(USH2A_Roan) NoCall(PMEL_Merle) NoCall(PSMB7_H)"
            )
        );
    }
}
