use std::collections::{BTreeSet, HashSet};

/// Terms of the target text that the candidate text does not contain.
///
/// Both inputs are expected to be already normalized; tokenization is the
/// same whitespace split the scorer uses, so the two stages can never
/// disagree about what a term is. Duplicates collapse to one membership.
pub fn missing_terms(candidate: &str, target: &str) -> BTreeSet<String> {
    let candidate_terms: HashSet<&str> = candidate.split_whitespace().collect();
    target
        .split_whitespace()
        .filter(|term| !candidate_terms.contains(term))
        .map(str::to_string)
        .collect()
}
