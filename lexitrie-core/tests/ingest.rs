use std::sync::{Arc, Mutex};
use std::thread;

use lexitrie_core::{Lexicon, LexiconConfig, LexiconError, Tokenizer, Trie, WordKey};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

#[test]
fn sentence_forms_are_all_reachable() {
    init_tracing();

    let mut lexicon = Lexicon::new();
    let report = lexicon.add("The quick brown-fox jumps over the lazy dog");
    assert!(report.is_clean());

    assert_eq!(
        lexicon.completions(""),
        [
            "brown",
            "brown-fox",
            "brownfox",
            "dog",
            "fox",
            "jumps",
            "lazy",
            "over",
            "quick",
            "the",
            "uick",
        ]
    );

    for prefix in ["t", "th", "qu", "brown-", "brownf", "la", "ov"] {
        assert!(lexicon.contains_prefix(prefix), "{prefix} unreachable");
    }
    assert!(!lexicon.contains("brow"));
    assert!(!lexicon.contains_prefix("cat"));
}

#[test]
fn tokenizer_forms_match_lexicon_contents() {
    let text = "[lazy] (dog) over/the\\quick";
    let tokenizer = Tokenizer::new();
    let mut trie = Trie::new();
    let mut key = WordKey::new();
    let normalizer = lexitrie_core::analyzer::TextNormalizer::new();

    for form in tokenizer.forms(text) {
        let form = form.expect("no oversized joins in this text");
        form.normalize_into(&normalizer, &mut key);
        trie.insert(&key).expect("short words insert");
    }

    let mut lexicon = Lexicon::new();
    lexicon.add(text);

    assert_eq!(trie.completions(&[]), lexicon.completions(""));
    assert_eq!(trie.stats(), lexicon.stats());
}

#[test]
fn oversized_input_does_not_stop_ingestion() {
    init_tracing();

    let huge = "y".repeat(1000);
    let text = format!("first {huge} {huge}-tail last");
    let mut lexicon = Lexicon::new();
    let report = lexicon.add(&text);

    assert!(lexicon.contains("first"));
    assert!(lexicon.contains("last"));
    assert!(lexicon.contains("tail"));
    assert!(!lexicon.is_empty());

    // whole "huge", whole "huge-tail", left "huge"
    assert_eq!(report.rejected, 3);
    assert_eq!(report.skipped_joins, 1);
    assert!(!report.is_clean());
}

#[test]
fn reserved_character_reported_with_position() {
    let mut lexicon = Lexicon::new();
    assert_eq!(
        lexicon.insert_word("ab\0"),
        Err(LexiconError::ReservedCharacter { position: 2 })
    );
    assert!(lexicon.is_empty());
}

#[test]
fn stats_describe_trie_shape() {
    let mut lexicon = Lexicon::new();
    lexicon.add("the then there these");

    let stats = lexicon.stats();
    assert_eq!(stats.words, 4);
    assert_eq!(stats.longest_word, 5);
    assert!(stats.branching_nodes >= 1);
    assert!(stats.memory_usage_bytes() > 0);
    assert!(stats.to_string().starts_with("4 words"));
}

#[test]
fn producers_share_lexicon_behind_mutex() {
    init_tracing();

    let lexicon = Arc::new(Mutex::new(Lexicon::new()));
    let texts = [
        "The quick brown-fox",
        "jumps over",
        "the lazy dog",
        "quick brown dog",
    ];

    let handles: Vec<_> = texts
        .iter()
        .map(|&text| {
            let lexicon = Arc::clone(&lexicon);
            thread::spawn(move || {
                for _ in 0..50 {
                    lexicon.lock().unwrap().add(text);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let lexicon = lexicon.lock().unwrap();
    let mut single = Lexicon::new();
    single.add_batch(&texts);

    assert_eq!(lexicon.completions(""), single.completions(""));
    assert_eq!(lexicon.len(), single.len());
    assert_eq!(lexicon.metrics().texts_ingested, 200);
    assert_eq!(lexicon.metrics().forms_inserted, single.len() as u64);
}

#[test]
fn compact_config_end_to_end() {
    let mut lexicon = Lexicon::with_config(LexiconConfig::compact()).unwrap();
    let report = lexicon.add(&format!("short {}", "q".repeat(80)));
    assert_eq!(report.rejected, 1);
    assert_eq!(lexicon.completions(""), ["short"]);
}
