//! N-gram splitting and Jaccard distance.

use std::collections::HashSet;

/// Split a word into the set of its contiguous `n`-character substrings.
///
/// The window slides one character at a time. A word shorter than `n`
/// yields an empty set; `n == 0` also yields an empty set.
pub fn ngrams(word: &str, n: usize) -> HashSet<&str> {
    let mut grams = HashSet::new();
    if n == 0 {
        return grams;
    }

    let mut bounds: Vec<usize> = word.char_indices().map(|(i, _)| i).collect();
    bounds.push(word.len());

    for window in bounds.windows(n + 1) {
        grams.insert(&word[window[0]..window[n]]);
    }

    grams
}

/// Jaccard distance between the n-gram sets of two words:
/// `1 - |A ∩ B| / |A ∪ B|`.
///
/// Two empty sets count as a match (distance 0).
pub fn jaccard_distance(s1: &str, s2: &str, n: usize) -> f64 {
    let grams1 = ngrams(s1, n);
    let grams2 = ngrams(s2, n);

    let intersection = grams1.intersection(&grams2).count();
    let union = grams1.len() + grams2.len() - intersection;

    if union == 0 {
        return 0.0;
    }

    1.0 - intersection as f64 / union as f64
}
