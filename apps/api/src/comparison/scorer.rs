//! Bag-of-words cosine similarity over the joint vocabulary of two texts.

use std::collections::{BTreeSet, HashMap};

/// Cosine similarity of two normalized texts in [0, 1].
///
/// The vocabulary is the set of distinct whitespace-split tokens of *both*
/// inputs, in lexicographic order, and both term-frequency vectors are laid
/// out over it. The score is therefore a function of the pair, not of
/// either text alone. If either side has no tokens the score is 0.0 —
/// never a 0/0 division.
pub fn cosine_similarity(a: &str, b: &str) -> f64 {
    let vocabulary: BTreeSet<&str> = a
        .split_whitespace()
        .chain(b.split_whitespace())
        .collect();
    if vocabulary.is_empty() {
        return 0.0;
    }

    let counts_a = term_counts(a);
    let counts_b = term_counts(b);

    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;
    for term in &vocabulary {
        let fa = counts_a.get(term).copied().unwrap_or(0) as f64;
        let fb = counts_b.get(term).copied().unwrap_or(0) as f64;
        dot += fa * fb;
        norm_a += fa * fa;
        norm_b += fb * fb;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(0.0, 1.0)
}

fn term_counts(text: &str) -> HashMap<&str, u32> {
    let mut counts = HashMap::new();
    for token in text.split_whitespace() {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}
