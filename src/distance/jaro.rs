//! Jaro and Jaro-Winkler similarity.

/// Weight applied per shared prefix character by the Winkler boost.
pub const WINKLER_PREFIX_WEIGHT: f64 = 0.1;

/// Maximum number of prefix characters the Winkler boost considers.
pub const WINKLER_MAX_PREFIX: usize = 4;

/// Jaro similarity in `[0, 1]`, 1 meaning identical.
///
/// Characters match when equal and no further apart than
/// `max(|s1|, |s2|) / 2 - 1` positions. Two empty strings are identical.
pub fn jaro_similarity(s1: &str, s2: &str) -> f64 {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    let len1 = s1_chars.len();
    let len2 = s2_chars.len();

    if len1 == 0 && len2 == 0 {
        return 1.0;
    }
    if len1 == 0 || len2 == 0 {
        return 0.0;
    }

    let window = (len1.max(len2) / 2).saturating_sub(1);

    let mut s1_matched = vec![false; len1];
    let mut s2_matched = vec![false; len2];
    let mut matches = 0usize;

    for (i, &c) in s1_chars.iter().enumerate() {
        let start = i.saturating_sub(window);
        let end = (i + window + 1).min(len2);

        for j in start..end {
            if !s2_matched[j] && s2_chars[j] == c {
                s1_matched[i] = true;
                s2_matched[j] = true;
                matches += 1;
                break;
            }
        }
    }

    if matches == 0 {
        return 0.0;
    }

    // Matched characters taken in order from each side; every position where
    // they disagree is half a transposition.
    let s2_in_order = s2_chars
        .iter()
        .zip(&s2_matched)
        .filter_map(|(c, &m)| m.then_some(c));
    let out_of_order = s1_chars
        .iter()
        .zip(&s1_matched)
        .filter_map(|(c, &m)| m.then_some(c))
        .zip(s2_in_order)
        .filter(|(a, b)| a != b)
        .count();
    let transpositions = (out_of_order / 2) as f64;

    let m = matches as f64;
    (m / len1 as f64 + m / len2 as f64 + (m - transpositions) / m) / 3.0
}

/// Jaro similarity boosted by the length of the common prefix (at most
/// [`WINKLER_MAX_PREFIX`] characters) scaled by [`WINKLER_PREFIX_WEIGHT`].
pub fn jaro_winkler_similarity(s1: &str, s2: &str) -> f64 {
    let jaro = jaro_similarity(s1, s2);
    let prefix = s1
        .chars()
        .zip(s2.chars())
        .take(WINKLER_MAX_PREFIX)
        .take_while(|(a, b)| a == b)
        .count();

    jaro + prefix as f64 * WINKLER_PREFIX_WEIGHT * (1.0 - jaro)
}

/// Distance form of Jaro (or Jaro-Winkler when `winkler` is set):
/// `1 - similarity`, clamped to `[0, 1]`.
pub fn jaro_distance(s1: &str, s2: &str, winkler: bool) -> f64 {
    let similarity = if winkler {
        jaro_winkler_similarity(s1, s2)
    } else {
        jaro_similarity(s1, s2)
    };
    (1.0 - similarity).clamp(0.0, 1.0)
}
