use std::fs;

use tempfile::TempDir;

use parley_core::corpus::{next_index, CsvCorpus, QaStore};
use parley_core::error::Error;
use parley_core::traits::CorpusSource;
use parley_core::types::{LabeledText, QaPair};

#[test]
fn labeled_corpus_skips_header_and_keeps_order() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("intents.csv");
    fs::write(&path, "Question,Intent\nhello,greeting\n\"bye, then\",quit\n").unwrap();

    let rows = CsvCorpus::new(&path).load().expect("load");
    assert_eq!(rows, vec![LabeledText::new("hello", "greeting"), LabeledText::new("bye, then", "quit")]);
}

#[test]
fn missing_corpus_is_an_io_error() {
    let tmp = TempDir::new().unwrap();
    let err = CsvCorpus::new(tmp.path().join("absent.csv")).load().unwrap_err();
    assert!(matches!(err, Error::Io { .. }), "got {err:?}");
}

#[test]
fn short_row_is_reported_with_its_line() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("qa.csv");
    fs::write(&path, ",Question,Answer\n1,what is rust,a language\n2,orphan\n").unwrap();

    match QaStore::new(&path).load().unwrap_err() {
        Error::MalformedRow { line, expected, .. } => {
            assert_eq!(line, 3);
            assert_eq!(expected, 3);
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn append_preserves_existing_rows_and_adds_missing_newline() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("qa.csv");
    fs::write(&path, ",Question,Answer\n1,what is rust,a language").unwrap();

    let store = QaStore::new(&path);
    let rows = store.load().unwrap();
    store.append_row(next_index(&rows), "who wrote it, originally", "graydon").unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with(",Question,Answer\n1,what is rust,a language\n"));
    let rows = store.load().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(
        rows[1],
        QaPair { index: Some(2), question: "who wrote it, originally".into(), answer: "graydon".into() }
    );
}

#[test]
fn next_index_follows_largest_numeric_index() {
    let pair = |index| QaPair { index, question: "q".into(), answer: "a".into() };
    assert_eq!(next_index(&[]), 1);
    assert_eq!(next_index(&[pair(Some(0)), pair(Some(7)), pair(Some(3))]), 8);
    assert_eq!(next_index(&[pair(None), pair(None)]), 3);
}
