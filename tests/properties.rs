use command_core::fuzzy::CorrectionKind;
use command_core::routing::{is_cacheable, looks_like_question};
use command_core::{CommandEngine, IntentCategory, IntentGroup, Lexicon};
use std::sync::Arc;
use std::thread;

const CORPUS: &[&str] = &[
    "kompyuter ovosini kotar",
    "Ovozni  BALAND qil",
    "baterya",
    "skrishot",
    "telegrm och",
    "yuklamalarni och",
    "kompyter",
    "wikipidia",
    "yutub da musiqa",
    "ekranni qulfla",
    "hozir soat necha",
    "eslatma qo'sh",
    "kalkulyator och",
    "jarvis yopil",
    "abcdefg",
    "qwe rty",
    "x",
    "",
];

fn no_corrections() -> Vec<(&'static str, &'static str)> {
    Vec::new()
}

#[test]
fn normalization_is_idempotent() {
    let engine = CommandEngine::new().unwrap();
    let lexicon = engine.lexicon();
    let inputs = CORPUS
        .iter()
        .map(|s| s.to_string())
        .chain(lexicon.vocabulary().iter().cloned())
        .chain(lexicon.corrections().keys().cloned())
        .chain(lexicon.corrections().values().cloned());

    for input in inputs {
        let once = engine.normalize(&input);
        assert_eq!(engine.normalize(&once), once, "input {input:?}");
    }
}

#[test]
fn known_correction_beats_closer_vocabulary_word() {
    let lexicon = Lexicon::new(["soat"], [("saat", "vaqt")]).unwrap();
    let engine = CommandEngine::with_lexicon(lexicon).unwrap();
    assert_eq!(engine.normalize("saat"), "vaqt");

    let traced = engine.normalize_traced("saat siat");
    assert_eq!(traced.text, "vaqt soat");
    assert_eq!(traced.corrections[0].kind, CorrectionKind::Known);
    assert_eq!(traced.corrections[1].kind, CorrectionKind::Fuzzy { distance: 1 });
}

#[test]
fn fuzzy_thresholds_follow_token_length() {
    let lexicon = Lexicon::new(["chrome", "soat"], no_corrections()).unwrap();
    let engine = CommandEngine::with_lexicon(lexicon).unwrap();

    // Long words allow two edits.
    assert_eq!(engine.normalize("chrom"), "chrome");
    assert_eq!(engine.normalize("chrmo"), "chrome");
    // Four letters allow one.
    assert_eq!(engine.normalize("siat"), "soat");
    assert_eq!(engine.normalize("suut"), "suut");
    // Too short, or too far apart in length.
    assert_eq!(engine.normalize("so"), "so");
    assert_eq!(engine.normalize("chromebook"), "chromebook");
}

#[test]
fn classification_is_total() {
    let engine = CommandEngine::new().unwrap();
    let long = "a".repeat(500);
    let inputs = ["", "   ", "1234", "???", "ко́мпьютер", "🎵🎵", "qo'y qo'y qo'y", long.as_str()];
    for raw in inputs {
        let command = engine.interpret(raw);
        assert!(IntentCategory::ALL.contains(&command.category));
        assert!(!command.action.is_empty());
        assert_eq!(command.raw_text, raw);
        if command.is_fallback() {
            assert_eq!(command.action, "chat");
            assert_eq!(command.param_str("message"), Some(raw));
        }
    }
}

#[test]
fn earlier_group_wins_when_several_match() {
    let engine = CommandEngine::new().unwrap();
    let classifier = engine.classifier();

    let text = "internet haqida qidir";
    assert!(classifier.match_group(IntentGroup::System, text).is_some());
    assert!(classifier.match_group(IntentGroup::WebSearch, text).is_some());
    let command = engine.interpret(text);
    assert_eq!(command.category, IntentCategory::System);
    assert_eq!(command.action, "network_status");

    let text = "instagram och";
    let social = classifier.match_group(IntentGroup::Social, text).unwrap();
    assert_eq!(social.param_str("platform"), Some("instagram"));
    assert_eq!(engine.interpret(text).category, IntentCategory::AppControl);
}

#[test]
fn shared_engine_across_threads() {
    let engine = Arc::new(CommandEngine::new().unwrap());
    let expected: Vec<_> = CORPUS.iter().map(|raw| engine.interpret(raw)).collect();
    let expected = Arc::new(expected);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let engine = Arc::clone(&engine);
            let expected = Arc::clone(&expected);
            thread::spawn(move || {
                for (raw, want) in CORPUS.iter().zip(expected.iter()) {
                    assert_eq!(&engine.interpret(raw), want);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn lexicon_file_round_trip_and_fallback() {
    let dir = tempfile::tempdir().unwrap();

    let path = dir.path().join("lexicon.bin");
    let custom = Lexicon::new(["telegram", "chrome"], [("tg", "telegram")]).unwrap();
    command_core::persistence::save_lexicon(&custom, &path).unwrap();
    let engine = CommandEngine::from_file_or_builtin(&path).unwrap();
    assert_eq!(engine.lexicon(), &custom);
    assert_eq!(engine.interpret("tg och").param_str("app"), Some("telegram"));

    let broken = dir.path().join("broken.json");
    std::fs::write(&broken, "{ not json").unwrap();
    let engine = CommandEngine::from_file_or_builtin(&broken).unwrap();
    assert_eq!(engine.lexicon(), &Lexicon::builtin());
}

#[test]
fn routing_hints_for_resolved_commands() {
    let engine = CommandEngine::new().unwrap();
    assert!(!is_cacheable(engine.interpret("soat necha").category));
    assert!(!is_cacheable(engine.interpret("Chrome och").category));
    assert!(is_cacheable(engine.interpret("hazil ayt").category));

    let fallback = engine.interpret("rust nima?");
    assert!(fallback.is_fallback());
    assert!(looks_like_question(&fallback.raw_text));
}
