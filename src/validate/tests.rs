use super::*;

fn validator() -> MatchValidator {
    MatchValidator::new(Arc::new(
        crate::lexicon::Lexicon::builtin().expect("builtin tables compile"),
    ))
}

const REF_WITH_TERM: &str = "dasar kau bangsat tidak tahu diri";
const REF_WITHOUT_TERM: &str = "kamu memang sangat menyebalkan sekali";

#[test]
fn vetoes_high_score_without_lexical_corroboration() {
    let v = validator();
    assert!(!v.is_valid("kamu memang tidak tahu diri", REF_WITH_TERM, 0.93));
}

#[test]
fn accepts_when_comment_has_explicit_term() {
    let v = validator();
    assert!(v.is_valid("dasar bangsat kau ini", REF_WITH_TERM, 0.93));
}

#[test]
fn accepts_obfuscated_spellings_as_corroboration() {
    let v = validator();
    assert!(v.is_valid("dasar b4ngs4t kau ini", REF_WITH_TERM, 0.95));
    assert!(v.is_valid("akun t*l*l banget sih", REF_WITH_TERM, 0.97));
}

#[test]
fn accepts_when_reference_has_no_explicit_term() {
    let v = validator();
    assert!(v.is_valid("kamu memang tidak tahu diri", REF_WITHOUT_TERM, 0.95));
}

#[test]
fn accepts_at_or_below_veto_boundary() {
    let v = validator();
    // The veto requires score strictly above 0.9.
    assert!(v.is_valid("kamu memang tidak tahu diri", REF_WITH_TERM, 0.9));
    assert!(v.is_valid("kamu memang tidak tahu diri", REF_WITH_TERM, 0.89));
}
