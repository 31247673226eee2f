use cilin_core::{CodeLevel, SemanticCode};
use proptest::prelude::*;

proptest! {
    #[test]
    fn any_eight_graphic_ascii_chars_parse(s in "[!-~]{8}") {
        let code = SemanticCode::parse(&s).unwrap();
        prop_assert_eq!(code.as_str(), s.as_str());
    }

    #[test]
    fn wrong_lengths_are_rejected(s in "[A-Za-z0-9=#@]{0,7}|[A-Za-z0-9=#@]{9,16}") {
        prop_assert!(SemanticCode::parse(&s).is_err());
    }

    #[test]
    fn segments_concatenate_back_to_code(s in "[A-Z][a-z][0-9]{2}[A-Z][0-9]{2}[=#@]") {
        let code = SemanticCode::parse(&s).unwrap();
        let rebuilt: String = CodeLevel::ALL.iter().map(|l| code.segment(*l)).collect();
        prop_assert_eq!(rebuilt, s);
    }
}
