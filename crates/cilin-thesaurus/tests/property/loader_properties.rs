use cilin_thesaurus::ThesaurusLoader;
use proptest::prelude::*;

fn line_strategy() -> impl Strategy<Value = (String, Vec<String>)> {
    (
        "[A-L][a-n][0-9]{2}[A-F][0-9]{2}[=#@]",
        prop::collection::vec("[\u{4e00}-\u{4e2f}]{1,3}", 1..6),
    )
}

proptest! {
    #[test]
    fn every_listed_word_carries_its_code(lines in prop::collection::vec(line_strategy(), 1..20)) {
        let source: String = lines
            .iter()
            .map(|(code, words)| format!("{} {}\n", code, words.join(" ")))
            .collect();
        let outcome = ThesaurusLoader::parse_str(&source);

        for (code, words) in &lines {
            for word in words {
                prop_assert!(outcome.thesaurus.codes(word).iter().any(|c| c.as_str() == code));
            }
        }
        let listed: usize = lines.iter().map(|(_, w)| w.len()).sum();
        prop_assert_eq!(outcome.report.code_assignments, listed);
    }

    #[test]
    fn arbitrary_text_never_panics(source in "\\PC{0,400}") {
        let outcome = ThesaurusLoader::parse_str(&source);
        prop_assert!(outcome.report.lines_skipped + outcome.report.malformed_codes <= outcome.report.lines_read);
        for word in outcome.thesaurus.words() {
            prop_assert!(!outcome.thesaurus.codes(word).is_empty());
        }
    }
}
