use cilin_core::SemanticCode;
use cilin_similarity::{compare_codes, text_similarity, word_similarity};
use cilin_thesaurus::{Thesaurus, ThesaurusLoader};
use proptest::prelude::*;

const CODE: &str = "[A-D][a-d][0-2]{2}[A-C][0-2]{2}[=#@]";

fn code() -> impl Strategy<Value = SemanticCode> {
    CODE.prop_map(|s| SemanticCode::parse(&s).unwrap())
}

/// Small thesaurus over a fixed vocabulary so generated words often hit it.
fn thesaurus() -> impl Strategy<Value = Thesaurus> {
    prop::collection::vec((CODE, prop::collection::vec("[甲乙丙丁戊]", 1..4)), 1..12).prop_map(
        |lines| {
            let source: String = lines
                .iter()
                .map(|(code, words)| format!("{} {}\n", code, words.join(" ")))
                .collect();
            ThesaurusLoader::parse_str(&source).thesaurus
        },
    )
}

fn words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[甲乙丙丁戊己]", 1..6)
}

proptest! {
    #[test]
    fn code_score_is_bounded_and_symmetric(a in code(), b in code()) {
        let ab = compare_codes(&a, &b);
        prop_assert!((0.0..=1.0).contains(&ab));
        prop_assert_eq!(ab, compare_codes(&b, &a));
    }

    #[test]
    fn identical_codes_score_one(a in code()) {
        prop_assert_eq!(compare_codes(&a, &a), 1.0);
    }

    #[test]
    fn known_words_are_self_similar(t in thesaurus()) {
        for word in t.words() {
            prop_assert_eq!(word_similarity(word, word, &t), 1.0);
        }
    }

    #[test]
    fn word_similarity_is_symmetric(t in thesaurus(), a in "[甲乙丙丁戊己]", b in "[甲乙丙丁戊己]") {
        prop_assert_eq!(word_similarity(&a, &b, &t), word_similarity(&b, &a, &t));
    }

    #[test]
    fn unknown_word_scores_zero(t in thesaurus(), a in "[甲乙丙丁戊]") {
        // 己 never appears in the generated thesaurus.
        prop_assert_eq!(word_similarity(&a, "己", &t), 0.0);
    }

    #[test]
    fn text_score_is_bounded(t in thesaurus(), left in words(), right in words()) {
        let score = text_similarity(&left, &right, &t).unwrap();
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn text_score_is_symmetric(t in thesaurus(), left in words(), right in words()) {
        prop_assert_eq!(
            text_similarity(&left, &right, &t).unwrap(),
            text_similarity(&right, &left, &t).unwrap()
        );
    }

    #[test]
    fn empty_side_always_errors(t in thesaurus(), side in words()) {
        let empty: Vec<String> = Vec::new();
        prop_assert!(text_similarity(&empty, &side, &t).is_err());
        prop_assert!(text_similarity(&side, &empty, &t).is_err());
    }
}
