use std::fs;

use tempfile::TempDir;

use parley_core::corpus::CsvCorpus;
use parley_core::error::Error;
use parley_core::traits::Classifier;
use parley_core::types::{LabeledText, Scored, Stage, OTHER_LABEL};
use parley_hybrid::IntentRouter;
use parley_text::DirectMatcher;
use parley_vector::VectorStage;

struct UnreachableVectorStage;

impl VectorStage for UnreachableVectorStage {
    fn rank(&self, _query: &str, _candidates: &[&str]) -> Vec<Scored> {
        panic!("vector stage must not run when the direct stage matched");
    }
}

fn corpus() -> Vec<LabeledText> {
    vec![
        LabeledText::new("what is the capital of france", "answering"),
        LabeledText::new("book a table for dinner", "transaction"),
        LabeledText::new("hi", "greeting"),
        LabeledText::new("hi there", "greeting"),
        LabeledText::new("let us play a game", "game"),
    ]
}

#[test]
fn short_greeting_is_routed_by_direct_stage_only() {
    let router = IntentRouter::with_stages(corpus(), DirectMatcher::default(), UnreachableVectorStage);
    assert_eq!(router.matching("hi there").unwrap(), "greeting");

    let outcome = router.route("Hi there!").unwrap();
    assert_eq!(outcome.stage, Stage::Direct);
    assert!((outcome.score - 1.0).abs() < 1e-12);
    assert_eq!(outcome.matched.as_deref(), Some("hi there"));
}

#[test]
fn vector_stage_handles_reworded_requests() {
    let outcome = IntentRouter::new(corpus()).route("dinner table booking").unwrap();
    assert_eq!(outcome.label, "transaction");
    assert_eq!(outcome.stage, Stage::Vector);
    assert!(outcome.score > 0.7);
}

#[test]
fn unknown_utterance_is_other() {
    let outcome = IntentRouter::new(corpus()).route("purple elephants").unwrap();
    assert_eq!(outcome.label, OTHER_LABEL);
    assert_eq!(outcome.score, 0.0);
    assert!(outcome.matched.is_none());
}

#[test]
fn later_rows_win_identical_scores() {
    let rows = vec![LabeledText::new("good morning", "answering"), LabeledText::new("good morning", "talk")];
    assert_eq!(IntentRouter::new(rows).matching("good morning").unwrap(), "talk");
}

#[test]
fn later_rows_win_equal_vector_scores() {
    // Same stems in a different order: equal cosines, direct ratios well under 0.7.
    let query = "how should i be cooking my rice";
    let rows = vec![LabeledText::new("cook rice", "answering"), LabeledText::new("rice cook", "talk")];
    let outcome = IntentRouter::new(rows).route(query).unwrap();
    assert_eq!(outcome.stage, Stage::Vector);
    assert_eq!(outcome.label, "talk");
    assert_eq!(outcome.matched.as_deref(), Some("rice cook"));

    let rows = vec![LabeledText::new("rice cook", "talk"), LabeledText::new("cook rice", "answering")];
    let outcome = IntentRouter::new(rows).route(query).unwrap();
    assert_eq!(outcome.stage, Stage::Vector);
    assert_eq!(outcome.label, "answering");
}

#[test]
fn vector_threshold_is_strict() {
    // One shared stem against a four-stem entry: cosine is exactly 0.5.
    let rows = vec![LabeledText::new("cook rice pasta sauce", "answering")];
    let router = IntentRouter::new(rows.clone()).with_threshold(0.5);
    assert_eq!(router.matching("rice pudding").unwrap(), OTHER_LABEL);
    let router = IntentRouter::new(rows).with_threshold(0.49);
    assert_eq!(router.matching("rice pudding").unwrap(), "answering");
}

#[test]
fn empty_corpus_is_a_precondition_error() {
    let err = IntentRouter::new(Vec::<LabeledText>::new()).matching("hello").unwrap_err();
    assert!(matches!(err, Error::EmptyCorpus(_)), "got {err:?}");
}

#[test]
fn csv_corpus_is_reread_on_every_call() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("intents.csv");
    fs::write(&path, "Question,Intent\nbye,quit\n").unwrap();
    let router = IntentRouter::new(CsvCorpus::new(&path));
    assert_eq!(router.classify("tell me a joke").unwrap(), OTHER_LABEL);

    fs::write(&path, "Question,Intent\nbye,quit\ntell me a joke,talk\n").unwrap();
    assert_eq!(router.classify("tell me a joke").unwrap(), "talk");
}

#[test]
fn missing_corpus_file_propagates() {
    let tmp = TempDir::new().unwrap();
    let router = IntentRouter::new(CsvCorpus::new(tmp.path().join("absent.csv")));
    assert!(matches!(router.matching("hi").unwrap_err(), Error::Io { .. }));
}
