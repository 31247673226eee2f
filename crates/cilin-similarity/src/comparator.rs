use cilin_core::constants::MAX_AGREEMENT;
use cilin_core::{CodeLevel, SemanticCode};

/// Raw agreement of two codes, 0..=10.
///
/// Every level is checked on its own: a mismatch at a coarse level does not
/// stop finer levels from scoring.
pub fn code_agreement(a: &SemanticCode, b: &SemanticCode) -> u8 {
    CodeLevel::ALL
        .iter()
        .filter(|level| a.agrees_at(b, **level))
        .map(|level| level.weight())
        .sum()
}

/// Agreement normalised to [0, 1].
pub fn compare_codes(a: &SemanticCode, b: &SemanticCode) -> f64 {
    f64::from(code_agreement(a, b)) / f64::from(MAX_AGREEMENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> SemanticCode {
        SemanticCode::parse(s).unwrap()
    }

    #[test]
    fn identical_codes_score_one() {
        assert_eq!(compare_codes(&code("Aa01A01="), &code("Aa01A01=")), 1.0);
    }

    #[test]
    fn documented_example_scores_three_tenths() {
        assert_eq!(code_agreement(&code("Aa01A01="), &code("Ab02B03=")), 3);
        assert_eq!(compare_codes(&code("Aa01A01="), &code("Ab02B03=")), 0.3);
    }

    #[test]
    fn marker_never_contributes() {
        assert_eq!(code_agreement(&code("Aa01A01="), &code("Aa01A01#")), 10);
        assert_eq!(code_agreement(&code("Ba02B02="), &code("Cb03C03=")), 0);
    }

    #[test]
    fn finer_levels_score_after_coarse_mismatch() {
        // Only the two-character atom agrees.
        assert_eq!(code_agreement(&code("Aa01A01="), &code("Bb02B01#")), 1);
        // Minor and word group agree, major and medium do not.
        assert_eq!(code_agreement(&code("Aa01A01="), &code("Bb01A02=")), 3);
    }

    #[test]
    fn per_level_weights() {
        let base = code("Aa01A01=");
        assert_eq!(code_agreement(&base, &code("Zz99Z99=")), 0);
        assert_eq!(code_agreement(&base, &code("Az99Z99=")), 3);
        assert_eq!(code_agreement(&base, &code("Za99Z99=")), 3);
        assert_eq!(code_agreement(&base, &code("Zz01Z99=")), 2);
        assert_eq!(code_agreement(&base, &code("Zz99A99=")), 1);
        assert_eq!(code_agreement(&base, &code("Zz99Z01=")), 1);
    }
}
