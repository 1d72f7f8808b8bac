//! End-to-end scenarios over a tiny hand-checked corpus

use hangman_solver::core::{RevealedPattern, Word};
use hangman_solver::solver::{
    BruteForceFrequencies, FrequencyTable, GuessError, PatternMatching,
    ProbabilityBruteForceFrequencies, ProbabilityPatternMatching, Strategy, StrategyKind,
    StrategyType, filter_by_pattern, prune_by_length,
};
use hangman_solver::wordlists::loader::words_from_slice;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustc_hash::FxHashSet;

fn letters(s: &str) -> FxHashSet<u8> {
    s.bytes().collect()
}

fn texts(words: &[Word]) -> Vec<&str> {
    words.iter().map(Word::text).collect()
}

#[test]
fn frequencies_of_three_words() {
    let words = words_from_slice(&["crane", "grape", "brave"]);
    let table = FrequencyTable::from_words(&words);

    let expected = [
        (b'c', 1),
        (b'r', 3),
        (b'a', 3),
        (b'n', 1),
        (b'e', 3),
        (b'g', 1),
        (b'p', 1),
        (b'b', 1),
        (b'v', 1),
    ];
    for (letter, weight) in expected {
        assert_eq!(table.weight(letter), weight, "letter {}", letter as char);
    }
    assert_eq!(table.len(), expected.len());
    assert_eq!(table.total_weight(), 15);
}

#[test]
fn pattern_filter_narrows_three_words() {
    let words = words_from_slice(&["crane", "grape", "brave"]);

    let all = filter_by_pattern(&words, &RevealedPattern::parse("_R__E").unwrap());
    assert_eq!(texts(&all), vec!["crane", "grape", "brave"]);

    let only_b = filter_by_pattern(&words, &RevealedPattern::parse("B____").unwrap());
    assert_eq!(texts(&only_b), vec!["brave"]);
}

#[test]
fn deterministic_strategies_guess_a_then_b() {
    let words = words_from_slice(&["aa", "ab"]);

    let mut brute = BruteForceFrequencies::new(&words, 2);
    let mut pattern_matching = PatternMatching::new(&words, 2);
    let strategies: [&mut dyn Strategy; 2] = [&mut brute, &mut pattern_matching];

    for strategy in strategies {
        let unknown = RevealedPattern::unknown(2);
        assert_eq!(strategy.make_guess(&letters(""), &unknown), Ok(b'a'));

        let after_a = RevealedPattern::parse("a_").unwrap();
        assert_eq!(strategy.make_guess(&letters("a"), &after_a), Ok(b'b'));
    }
}

#[test]
fn one_word_corpus_fully_guessed_is_exhausted() {
    let words = words_from_slice(&["cat"]);
    let guessed = letters("cat");
    let solved = RevealedPattern::parse("cat").unwrap();

    for kind in StrategyKind::ALL {
        let mut strategy = StrategyType::new(kind, &words, 3, StdRng::seed_from_u64(4));
        assert_eq!(
            strategy.make_guess(&guessed, &solved),
            Err(GuessError::ExhaustedCandidates),
            "{kind}"
        );
    }
}

#[test]
fn pruning_keeps_order_and_is_idempotent() {
    let words = words_from_slice(&["crane", "cat", "grape", "butterfly", "brave"]);

    let pruned = prune_by_length(&words, 5);
    assert_eq!(texts(&pruned), vec!["crane", "grape", "brave"]);
    assert_eq!(texts(&prune_by_length(&pruned, 5)), texts(&pruned));
}

#[test]
fn weighted_strategies_are_reproducible_with_seed() {
    let words = words_from_slice(&["crane", "grape", "brave"]);
    let unknown = RevealedPattern::unknown(5);
    let none = letters("");

    let draw = |seed: u64| -> Vec<u8> {
        let mut brute = ProbabilityBruteForceFrequencies::new(&words, 5, StdRng::seed_from_u64(seed));
        let mut pattern = ProbabilityPatternMatching::new(&words, 5, StdRng::seed_from_u64(seed));
        (0..20)
            .flat_map(|_| {
                [
                    brute.make_guess(&none, &unknown).unwrap(),
                    pattern.make_guess(&none, &unknown).unwrap(),
                ]
            })
            .collect()
    };

    assert_eq!(draw(99), draw(99));
}
