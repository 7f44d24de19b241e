//! End-to-end interpretation tests.
//!
//! These run the full interpreter over genotype tables and exported profiles and
//! check the statements a reader would see.

use coat_decoder::interpret::body::BLUE_EYES_CAVEAT;
use coat_decoder::interpret::coat_modifiers::{MERLE_BREEDING_CAVEAT, WHITE_FACTORS_CAVEAT};
use coat_decoder::parsing::profile::parse_profile_text;
use coat_decoder::parsing::table::GenotypeTable;
use coat_decoder::{
    GenotypeValue, GroupInterpretation, Interpreter, Locus, LocusGroup, LocusRegistry,
    ProfileLayout, Report,
};

fn interpret(genotypes: &GenotypeTable) -> Report {
    let registry = LocusRegistry::load_embedded().unwrap();
    Interpreter::new(&registry).interpret(genotypes)
}

fn group(report: &Report, group: LocusGroup) -> &GroupInterpretation {
    report.group(group).unwrap()
}

/// Fully called wild-type dog
fn wild_type() -> GenotypeTable {
    GenotypeTable::new()
        .with(Locus::ELocus, "EE")
        .with(Locus::BLocus, "BB")
        .with(Locus::DLocus, "DD")
        .with(Locus::Cocoa, "NN")
        .with(Locus::Intensity, "Intermediate Red Pigmentation")
        .with(Locus::KLocus, "kyky")
        .with(Locus::ALocus, "awat")
        .with(Locus::Raly, "NN")
        .with(Locus::SLocus, "SS")
        .with(Locus::RLocus, "rr")
        .with(Locus::Merle, "mm")
        .with(Locus::Harlequin, "hh")
        .with(Locus::Furnishings, "II")
        .with(Locus::Longhair, "GG")
        .with(Locus::Shedding, "CT")
        .with(Locus::Curl, "CC")
        .with(Locus::Xolo, "NN")
        .with(Locus::Aht, "NN")
        .with(Locus::Albino, "NN")
        .with(Locus::ShortMuzzle, "CC")
        .with(Locus::Bobtail, "CC")
        .with(Locus::HindDewclaws, "CC")
        .with(Locus::Muscling, "CC")
        .with(Locus::BlueEyes, "NN")
        .with(Locus::Altitude, "GG")
        .with(Locus::Appetite, "NN")
}

#[test]
fn test_recessive_red_cannot_produce_eumelanin() {
    let report = interpret(&GenotypeTable::new().with(Locus::ELocus, "ee"));
    let base = group(&report, LocusGroup::BaseColor);
    assert!(base.texts()[0].contains("can't produce eumelanin in hairs"));
}

#[test]
fn test_lilac_from_b_and_d() {
    let report = interpret(
        &GenotypeTable::new()
            .with(Locus::BLocus, "bb")
            .with(Locus::DLocus, "dd"),
    );
    let base = group(&report, LocusGroup::BaseColor);
    assert!(base.texts()[1].starts_with("Eumelanin color is LILAC."));
}

#[test]
fn test_eumelanin_table_is_total() {
    let cases = [
        ("bb", "dd", "LILAC"),
        ("bb", "Dd", "BROWN"),
        ("Bb", "dd", "BLUE"),
        ("BB", "DD", "BLACK"),
    ];
    for (b, d, color) in cases {
        let report = interpret(
            &GenotypeTable::new()
                .with(Locus::BLocus, b)
                .with(Locus::DLocus, d),
        );
        let text = group(&report, LocusGroup::BaseColor).texts()[1].to_string();
        assert!(
            text.starts_with(&format!("Eumelanin color is {color}.")),
            "{b}/{d}: {text}"
        );
    }
}

#[test]
fn test_dominant_solid_ignores_a_locus() {
    for a in ["ayay", "atat", "aa", "zz"] {
        let report = interpret(
            &GenotypeTable::new()
                .with(Locus::KLocus, "KBKB")
                .with(Locus::ALocus, a),
        );
        let modifiers = group(&report, LocusGroup::CoatColorModifiers);
        assert_eq!(
            modifiers.texts()[1],
            "A-Locus pattern will have no effect; dog is dominant solid."
        );
        assert!(modifiers.outcome.is_complete());
    }
}

#[test]
fn test_merle_harlequin_on_fawn() {
    let report = interpret(
        &GenotypeTable::new()
            .with(Locus::Merle, "M*m")
            .with(Locus::Harlequin, "Hh")
            .with(Locus::KLocus, "kyky"),
    );
    let modifiers = group(&report, LocusGroup::CoatColorModifiers);
    let harlequin = modifiers.texts().last().copied().unwrap();
    assert!(harlequin.starts_with("Harlequin detected."));
    assert!(harlequin.ends_with("This dog is merle and harlequin (fawn-based)."));
}

#[test]
fn test_piebald_carrier_then_caveat() {
    let report = interpret(&GenotypeTable::new().with(Locus::SLocus, "Ssp"));
    let modifiers = group(&report, LocusGroup::CoatColorModifiers);
    let s_locus = modifiers.texts()[3];
    assert!(s_locus.starts_with("Piebald carrier."));
    assert!(s_locus.ends_with(WHITE_FACTORS_CAVEAT));
}

#[test]
fn test_merle_attention_only_for_double_merle() {
    for (code, attention, caveat) in [
        ("M*M*", true, true),
        ("M*m", false, true),
        ("mm", false, false),
    ] {
        let report = interpret(&GenotypeTable::new().with(Locus::Merle, code));
        let modifiers = group(&report, LocusGroup::CoatColorModifiers);
        // K, A, RALY, S, then merle
        let merle = &modifiers.statements()[4];
        assert_eq!(merle.is_attention(), attention, "{code}");
        assert_eq!(merle.text.contains(MERLE_BREEDING_CAVEAT), caveat, "{code}");
    }
}

#[test]
fn test_harlequin_only_when_not_hh() {
    let report = interpret(&GenotypeTable::new().with(Locus::Harlequin, "hh"));
    let modifiers = group(&report, LocusGroup::CoatColorModifiers);
    assert!(!modifiers.texts().iter().any(|t| t.contains("Harlequin")));

    let report = interpret(
        &GenotypeTable::new()
            .with(Locus::Harlequin, "HH")
            .with(Locus::Merle, "mm"),
    );
    let modifiers = group(&report, LocusGroup::CoatColorModifiers);
    assert!(modifiers
        .texts()
        .iter()
        .any(|t| t.contains("can produce harlequin offspring")));
}

#[test]
fn test_all_no_call_is_well_formed() {
    let report = interpret(&GenotypeTable::new());
    assert_eq!(report.groups.len(), 6);
    assert!(report.is_clean());
    assert_eq!(report.attention_count(), 0);

    let body = group(&report, LocusGroup::BodyFeatures);
    assert!(body.texts().last().unwrap().ends_with(BLUE_EYES_CAVEAT));

    let modifiers = group(&report, LocusGroup::CoatColorModifiers);
    assert!(modifiers.texts()[3].ends_with(WHITE_FACTORS_CAVEAT));

    let base = group(&report, LocusGroup::BaseColor);
    assert_eq!(
        base.quick_genotype.as_deref(),
        Some(
            "NoCall(MC1R) NoCall(TYRP1) NoCall(MLPH_D) NoCall(HPS3_Cocoa) with \
             NoCall(Intensity_red_pigment)"
        )
    );
}

#[test]
fn test_wild_type_dog() {
    let report = interpret(&wild_type());
    assert!(report.is_clean());
    assert_eq!(report.attention_count(), 0);

    let base = group(&report, LocusGroup::BaseColor);
    assert_eq!(
        base.quick_genotype.as_deref(),
        Some("EE BB DD NN with Intermediate Red Pigmentation")
    );
    assert!(base.texts()[1].starts_with("Eumelanin color is BLACK."));

    let modifiers = group(&report, LocusGroup::CoatColorModifiers);
    assert_eq!(modifiers.statements().len(), 5);
    assert!(modifiers.texts()[1].starts_with("A-Locus: Agouti"));

    let other = group(&report, LocusGroup::OtherCoatTraits);
    assert_eq!(
        other.texts(),
        vec![
            "Coat should be short, smooth, and relatively straight.",
            "High seasonal shedding. Dog may \"blow coat\" seasonally.",
        ]
    );

    let size = group(&report, LocusGroup::BodySize);
    assert_eq!(size.statements().len(), 1);
    assert!(size.quick_genotype.is_none());

    let performance = group(&report, LocusGroup::Performance);
    assert!(performance.preamble.is_some());
    assert_eq!(performance.quick_genotype.as_deref(), Some("GG NN"));
}

#[test]
fn test_attention_findings_are_counted() {
    let genotypes = wild_type()
        .with(Locus::Merle, "M*M*")
        .with(Locus::Albino, "DD")
        .with(Locus::Appetite, "ND");
    let report = interpret(&genotypes);
    assert_eq!(report.attention_count(), 3);
    assert!(report.is_clean());
}

#[test]
fn test_unrecognized_codes_are_partial_failures() {
    let genotypes = wild_type()
        .with(Locus::KLocus, "KbrKbr")
        .with(Locus::SLocus, "spspsp");
    let report = interpret(&genotypes);

    let modifiers = group(&report, LocusGroup::CoatColorModifiers);
    assert!(!modifiers.outcome.is_complete());
    assert!(modifiers.texts()[0].starts_with("[ERROR] processing K Locus failed"));
    assert!(modifiers.texts()[3].starts_with("[ERROR] Unrecognized piebald genotype"));
    assert!(modifiers.texts()[3].ends_with(WHITE_FACTORS_CAVEAT));

    // Only the group that met the codes is affected
    assert!(group(&report, LocusGroup::BaseColor).outcome.is_complete());
    assert_eq!(report.warnings.len(), 2);
    assert!(!report.is_clean());
}

#[test]
fn test_breeder_profile_end_to_end() {
    let text = "\
# Color
MC1R: E Locus (Ee)
TYRP1: B Locus (bb)
CBD103_K: K Locus (KBky)
ASIP: A Locus (atat)
PMEL_Merle: Merle (M*m)
PSMB7_H: Harlequin (Hh)
# Other Coat Traits
RSPO2_moustache: Furnishings (FI)
FGF5: Long Hair (GT)
KRT71_CurlyCoat: Curl (CT)
# Body Features
T_C189G_Bobtail: Natural Bobtail (CG)
# Body Size
IGF1: Body Size 1 (NN)
# Performance
POMC_appetite_linkage: POMC (NN)
";
    let profile = parse_profile_text(text, None).unwrap();
    let registry = LocusRegistry::load_embedded().unwrap();
    let report = Interpreter::new(&registry).interpret(&profile);

    assert_eq!(report.layout, Some(ProfileLayout::Breeder));

    let base = group(&report, LocusGroup::BaseColor);
    assert!(base.texts()[1].starts_with("Eumelanin color is BROWN."));
    assert!(base.texts()[1].contains("D Locus (MLPH_D) was not called"));

    let modifiers = group(&report, LocusGroup::CoatColorModifiers);
    assert!(modifiers.texts()[0].starts_with("KB/ky"));
    assert_eq!(modifiers.texts()[1], "A-Locus: Tan points (or brindle points).");
    assert!(modifiers
        .texts()
        .last()
        .unwrap()
        .ends_with("(mantle- or brindle-based)."));

    let other = group(&report, LocusGroup::OtherCoatTraits);
    assert_eq!(
        other.texts()[0],
        "Coat should be short, wiry, and relatively wavy."
    );

    let body = group(&report, LocusGroup::BodyFeatures);
    assert_eq!(
        body.texts()[1],
        "Natural bobtail gene present. If dog has a short tail, it may have been born that way."
    );
}

#[test]
fn test_closure_extractor_sees_every_locus() {
    use std::cell::RefCell;

    let seen = RefCell::new(Vec::new());
    let extractor = |locus: Locus| {
        seen.borrow_mut().push(locus);
        GenotypeValue::NoCall(locus)
    };

    let registry = LocusRegistry::load_embedded().unwrap();
    let _ = Interpreter::new(&registry).interpret(&extractor);

    let seen = seen.into_inner();
    for locus in Locus::ALL {
        assert!(seen.contains(&locus), "{locus} was never requested");
    }
}
