use pangram_core::analyzer::{analyze, classify, normalize};
use pangram_core::corpus::{aggregate, PhraseCorpus};
use pangram_core::{Classification, PhraseKind, ALPHABET};
use proptest::prelude::*;

fn shuffled_alphabet() -> impl Strategy<Value = String> {
    Just(ALPHABET.chars().collect::<Vec<char>>())
        .prop_shuffle()
        .prop_map(|letters: Vec<char>| letters.into_iter().collect::<String>())
}

// ── Normalizer ────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn normalized_output_only_contains_alphabet_letters(input in any::<String>()) {
        let out = normalize(&input);
        prop_assert!(
            out.chars().all(|c| c.is_ascii_lowercase()),
            "non-letter in output: {:?}",
            out
        );
    }

    #[test]
    fn normalize_is_idempotent(input in any::<String>()) {
        let once = normalize(&input);
        let twice = normalize(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn cedilla_behaves_like_c(prefix in "[a-z ]{0,20}", suffix in "[a-z ]{0,20}") {
        let with_cedilla = format!("{prefix}ç{suffix}");
        let with_c = format!("{prefix}c{suffix}");
        prop_assert_eq!(normalize(&with_cedilla), normalize(&with_c));
        prop_assert_eq!(analyze(&with_cedilla).classification, analyze(&with_c).classification);
    }

    #[test]
    fn uppercase_does_not_change_verdict(input in "[a-zA-Z ,.!]{0,60}") {
        prop_assert_eq!(
            analyze(&input).classification,
            analyze(&input.to_uppercase()).classification
        );
    }
}

// ── Classifier ────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn any_alphabet_permutation_is_perfect(phrase in shuffled_alphabet()) {
        prop_assert_eq!(classify(&normalize(&phrase)), Classification::PerfectPangram);
    }

    #[test]
    fn permutation_plus_repeat_is_plain_pangram(
        phrase in shuffled_alphabet(),
        extra in proptest::char::range('a', 'z'),
    ) {
        let padded = format!("{phrase}{extra}");
        match classify(&normalize(&padded)) {
            Classification::Pangram { repeated } => {
                prop_assert_eq!(repeated.len(), 1);
                prop_assert_eq!(repeated[0].letter, extra);
                prop_assert_eq!(repeated[0].count, 2);
            }
            other => prop_assert!(false, "expected pangram, got {:?}", other),
        }
    }

    #[test]
    fn missing_letters_are_absent_and_ordered(input in "[a-m ]{0,40}") {
        let normalized = normalize(&input);
        match classify(&normalized) {
            Classification::NotPangram { missing } => {
                prop_assert!(missing.windows(2).all(|w| w[0] < w[1]));
                for c in ALPHABET.chars() {
                    prop_assert_eq!(missing.contains(&c), !normalized.contains(c));
                }
            }
            other => prop_assert!(false, "expected not-pangram, got {:?}", other),
        }
    }
}

// ── Aggregator ────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn aggregate_counts_add_up(phrases in proptest::collection::vec(any::<String>(), 0..40)) {
        let stats = aggregate(&phrases);
        prop_assert_eq!(stats.total, phrases.len());
        prop_assert_eq!(stats.perfect + stats.pangram + stats.not_pangram, phrases.len());
    }

    #[test]
    fn corpus_filters_agree_with_single_checks(
        phrases in proptest::collection::vec("[a-zA-Zç ]{0,40}", 0..20)
    ) {
        let corpus = PhraseCorpus::from_phrases(phrases.clone());
        prop_assert_eq!(corpus.stats(), aggregate(&phrases));

        for kind in PhraseKind::ALL {
            let expected: Vec<&str> = phrases
                .iter()
                .map(String::as_str)
                .filter(|p| analyze(p).kind() == kind)
                .collect();
            prop_assert_eq!(corpus.by_kind(kind), expected);
        }
    }
}
