//! Positional mismatch distance.

/// Count positional mismatches over the shared prefix length, plus the
/// length difference.
///
/// This is not an edit distance: no alignment is attempted, so a single
/// inserted character near the start of a word counts as many mismatches.
pub fn hamming_distance(s1: &str, s2: &str) -> usize {
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();

    let mismatches = s1
        .chars()
        .zip(s2.chars())
        .filter(|(a, b)| a != b)
        .count();

    mismatches + len1.abs_diff(len2)
}
