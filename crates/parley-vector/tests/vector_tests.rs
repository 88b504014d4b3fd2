use parley_text::Analyzer;
use parley_vector::{count_vector, cosine, rank, Scheme, VectorMatcher, VectorStage, Vocabulary};
use proptest::prelude::*;

proptest! {
    #[test]
    fn cosine_is_symmetric(pairs in prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 0..24)) {
        let (a, b): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
        prop_assert_eq!(cosine(&a, &b), cosine(&b, &a));
    }

    #[test]
    fn cosine_never_nan(a in prop::collection::vec(0.0f64..10.0, 0..16)) {
        let zeros = vec![0.0; a.len()];
        prop_assert!(!cosine(&a, &zeros).is_nan());
    }
}

#[test]
fn unknown_terms_give_zero_vector_and_zero_similarity() {
    let analyzer = Analyzer::default();
    let corpus = analyzer.analyze_all(&["book a table", "what time is it"]);
    let vocab = Vocabulary::build(&corpus);
    let query = count_vector(&vocab, &analyzer.analyze("purple elephants dancing"));
    assert!(query.iter().all(|x| *x == 0.0));

    let scores = VectorMatcher::raw().scores("purple elephants dancing", &["book a table", "what time is it"]);
    assert_eq!(scores, vec![0.0, 0.0]);
    let smoothed = VectorMatcher::log_tf().scores("purple elephants dancing", &["book a table", "what time is it"]);
    assert_eq!(smoothed, vec![0.0, 0.0]);
}

#[test]
fn equal_scores_keep_corpus_order() {
    let ranked = VectorMatcher::raw().rank("table", &["joke please", "book table", "table book", "table"]);
    let order: Vec<usize> = ranked.iter().map(|s| s.index).collect();
    assert_eq!(order, vec![3, 1, 2, 0]);
    assert_eq!(ranked[1].score, ranked[2].score);
}

#[test]
fn best_candidate_shares_most_stems() {
    let corpus = ["I would like to book a table", "tell me a joke", "what is the weather like"];
    let ranked = VectorMatcher::raw().rank("Could you book me a table?", &corpus);
    assert_eq!(ranked[0].index, 0);
    assert!(ranked[0].score > 0.7, "score {}", ranked[0].score);
}

#[test]
fn weighted_schemes_agree_on_the_winner() {
    let corpus = ["book a table tonight", "tell me a joke", "joke joke joke"];
    for scheme in [Scheme::LogTf, Scheme::TfIdf] {
        let ranked = VectorMatcher::new(Analyzer::default(), scheme).rank("tell me a funny joke", &corpus);
        assert_eq!(ranked[0].index, 1, "{scheme:?}");
    }
}

#[test]
fn rank_of_empty_input_is_empty() {
    assert!(rank(Vec::<f64>::new()).is_empty());
}
