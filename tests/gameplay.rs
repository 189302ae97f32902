//! End-to-end rounds through the public API

use rand::SeedableRng;
use rand::rngs::StdRng;
use word_scramble::commands::{check_words, find_solutions};
use word_scramble::core::{FALLBACK_ROOT_WORD, MIN_WORD_LENGTH, Outcome, Rejection};
use word_scramble::dictionary::{Language, WordListDictionary};
use word_scramble::game::GameSession;
use word_scramble::wordlists::START_WORDS;
use word_scramble::wordlists::loader::{load_from_file, parse_word_list};

fn rejected(reason: Rejection) -> Outcome {
    Outcome::Rejected { reason }
}

fn fixture_dictionary() -> WordListDictionary {
    WordListDictionary::new(
        Language::English,
        parse_word_list("silent\ntinsel\nenlist\ninlet\nlens\nlent\nnest\nnet\nten\n"),
    )
}

#[test]
fn listen_round() {
    let corpus = vec!["listen".to_string()];
    let mut session = GameSession::new(fixture_dictionary());
    let mut rng = StdRng::seed_from_u64(11);

    assert_eq!(session.start_game_with_rng(&corpus, &mut rng), "listen");

    // Spellable but unknown
    assert_eq!(session.submit("tiles"), rejected(Rejection::NotReal));
    assert_eq!(session.submit("silent"), Outcome::Accepted);
    assert_eq!(session.score(), 1);
    assert_eq!(session.used_words(), ["silent"]);
    assert_eq!(session.submit("silent"), rejected(Rejection::AlreadyUsed));
    assert_eq!(session.submit("listen"), rejected(Rejection::SameAsRoot));
    assert_eq!(session.submit("xq"), rejected(Rejection::TooShort));
    assert_eq!(session.score(), 1);
}

#[test]
fn case_and_whitespace_collide() {
    let mut session = GameSession::with_root_word(fixture_dictionary(), "listen");

    assert_eq!(session.submit("  Cat"), rejected(Rejection::NotPossible));
    assert_eq!(session.submit("Tinsel "), Outcome::Accepted);
    assert_eq!(session.submit("tinsel"), rejected(Rejection::AlreadyUsed));
    assert_eq!(session.used_words(), ["tinsel"]);
}

#[test]
fn over_used_letters_always_rejected() {
    let session = GameSession::with_root_word(fixture_dictionary(), "listen");

    for word in ["lliss", "sitts", "eenlist", "nnet", "tent"] {
        assert_eq!(
            session.check(word).map(|c| c.into_string()),
            Err(Rejection::NotPossible),
            "'{word}' uses a letter more often than 'listen' has it"
        );
    }
}

#[test]
fn every_rejection_leaves_state_alone() {
    let mut session = GameSession::with_root_word(fixture_dictionary(), "listen");
    assert_eq!(session.submit("enlist"), Outcome::Accepted);

    let before = (session.used_words().to_vec(), session.score());
    for word in ["", "ab", "enlist", "zebra", "tiles", "listen"] {
        assert!(!session.submit(word).is_accepted());
        assert_eq!((session.used_words().to_vec(), session.score()), before);
    }
}

#[test]
fn restart_draws_from_corpus_and_resets() {
    let corpus: Vec<String> = START_WORDS.iter().map(ToString::to_string).collect();
    let mut session = GameSession::new(WordListDictionary::embedded());
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..10 {
        let root = session.start_game_with_rng(&corpus, &mut rng).to_string();
        assert!(corpus.contains(&root));
        assert!(session.used_words().is_empty());
        assert_eq!(session.score(), 0);

        // Every built-in root word has at least one playable word
        let solutions = find_solutions(&WordListDictionary::embedded(), &root, MIN_WORD_LENGTH);
        let first = solutions.words.first().expect("root word has solutions");
        assert_eq!(session.submit(first), Outcome::Accepted);
        assert_eq!(session.score(), 1);
    }
}

#[test]
fn empty_corpus_file_falls_back() {
    let path = std::env::temp_dir().join(format!(
        "word_scramble_gameplay_{}_empty.txt",
        std::process::id()
    ));
    std::fs::write(&path, "\n\n").unwrap();

    let corpus = load_from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert!(corpus.is_empty());

    let mut session = GameSession::new(WordListDictionary::embedded());
    assert_eq!(session.start_game(&corpus), FALLBACK_ROOT_WORD);
    assert_eq!(session.submit("silk"), Outcome::Accepted);
}

#[test]
fn missing_corpus_file_is_an_error() {
    let path = std::env::temp_dir().join("word_scramble_gameplay_missing/start.txt");
    assert!(load_from_file(&path).is_err());
}

#[test]
fn check_command_matches_session() {
    let words: Vec<String> = ["net", "ten", "net", "nets", "listen"]
        .iter()
        .map(ToString::to_string)
        .collect();
    let result = check_words(fixture_dictionary(), "listen", &words);

    let outcomes: Vec<Outcome> = result.entries.iter().map(|e| e.outcome).collect();
    assert_eq!(
        outcomes,
        vec![
            Outcome::Accepted,
            Outcome::Accepted,
            rejected(Rejection::AlreadyUsed),
            rejected(Rejection::NotReal),
            rejected(Rejection::SameAsRoot),
        ]
    );
    assert_eq!(result.used_words, vec!["ten", "net"]);
}
