use parley_core::types::Scored;

/// Cosine of the angle between `a` and `b`.
///
/// A zero-magnitude operand (typically a query made only of unknown terms)
/// scores `0.0` rather than NaN.
pub fn cosine(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let denom = magnitude(a) * magnitude(b);
    if denom == 0.0 || !denom.is_finite() {
        return 0.0;
    }
    dot / denom
}

fn magnitude(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Pair each score with its position and sort by descending score. The sort
/// is stable: equal scores keep ascending index order. NaN ranks last.
pub fn rank<I: IntoIterator<Item = f64>>(scores: I) -> Vec<Scored> {
    let key = |s: f64| if s.is_nan() { f64::NEG_INFINITY } else if s == 0.0 { 0.0 } else { s };
    let mut ranked: Vec<Scored> = scores.into_iter().enumerate().map(|(i, s)| Scored::new(i, s)).collect();
    ranked.sort_by(|a, b| key(b.score).total_cmp(&key(a.score)));
    ranked
}
