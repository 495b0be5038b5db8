//! Candidate selection policies.
//!
//! A selector scans every glossary word through a [`DistanceMetric`] and
//! keeps at most `k` of them. [`SelectionMethod::ExactTopK`] returns the true
//! `k` nearest words; the two heuristics trade accuracy for a single pass
//! over a bounded buffer.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMetric;
use crate::error::{CorrigeError, Result};
use crate::glossary::Glossary;

/// Ranking policy used to pick propositions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMethod {
    /// Keep every word whose distance does not exceed the best seen so far,
    /// newest first. Method id 0.
    RunningMinimum,
    /// Like [`SelectionMethod::RunningMinimum`], but also keep runner-ups
    /// whose distance is at most the mean of the buffered distances.
    /// Method id 1.
    BestPlusNearBest,
    /// Repeatedly extract the nearest remaining word. Method id 2.
    #[default]
    ExactTopK,
}

impl SelectionMethod {
    /// All methods, in id order.
    pub const ALL: [SelectionMethod; 3] = [
        SelectionMethod::RunningMinimum,
        SelectionMethod::BestPlusNearBest,
        SelectionMethod::ExactTopK,
    ];

    /// Numeric method identifier.
    pub fn id(&self) -> u8 {
        match self {
            SelectionMethod::RunningMinimum => 0,
            SelectionMethod::BestPlusNearBest => 1,
            SelectionMethod::ExactTopK => 2,
        }
    }

    /// Look a method up by its numeric identifier.
    pub fn from_id(id: u8) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|method| method.id() == id)
            .ok_or_else(|| CorrigeError::invalid_config(format!("Unknown selection method id: {id}")))
    }

    pub fn name(&self) -> &'static str {
        match self {
            SelectionMethod::RunningMinimum => "running-minimum",
            SelectionMethod::BestPlusNearBest => "best-plus-near-best",
            SelectionMethod::ExactTopK => "exact",
        }
    }

    /// Parse a method from its name or numeric identifier.
    pub fn parse_str(s: &str) -> Result<Self> {
        if let Ok(id) = s.parse::<u8>() {
            return Self::from_id(id);
        }
        match s.to_lowercase().replace('_', "-").as_str() {
            "running-minimum" | "running-min" => Ok(SelectionMethod::RunningMinimum),
            "best-plus-near-best" | "near-best" => Ok(SelectionMethod::BestPlusNearBest),
            "exact" | "exact-top-k" | "top-k" => Ok(SelectionMethod::ExactTopK),
            _ => Err(CorrigeError::invalid_config(format!(
                "Unknown selection method: {s}"
            ))),
        }
    }

    /// Select at most `k` glossary words for `query`.
    pub fn select(
        &self,
        query: &str,
        glossary: &Glossary,
        metric: &DistanceMetric,
        k: usize,
    ) -> Vec<String> {
        let scored = glossary
            .words()
            .map(|word| (word, metric.distance(query, word)));

        match self {
            SelectionMethod::RunningMinimum => running_minimum(scored, k),
            SelectionMethod::BestPlusNearBest => best_plus_near_best(scored, k),
            SelectionMethod::ExactTopK => exact_top_k(scored, k),
        }
    }
}

/// Single pass keeping each word that ties or beats the best distance seen
/// so far, pushed to the front; the oldest entry is evicted at capacity.
pub fn running_minimum<'a, I>(scored: I, k: usize) -> Vec<String>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    if k == 0 {
        return Vec::new();
    }

    let mut props: VecDeque<&str> = VecDeque::with_capacity(k);
    let mut min_dist = f64::INFINITY;

    for (word, dist) in scored {
        if dist <= min_dist {
            if props.len() == k {
                props.pop_back();
            }
            props.push_front(word);
            min_dist = dist;
        }
    }

    props.into_iter().map(str::to_string).collect()
}

/// Single pass keeping the running best at the front and admitting
/// runner-ups at position 1 when their distance is at most the mean of the
/// buffered distances.
pub fn best_plus_near_best<'a, I>(scored: I, k: usize) -> Vec<String>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    if k == 0 {
        return Vec::new();
    }

    let mut buffer: VecDeque<(&str, f64)> = VecDeque::with_capacity(k);

    for (word, dist) in scored {
        let best = buffer.front().map_or(f64::INFINITY, |&(_, d)| d);

        if dist <= best {
            if buffer.len() == k {
                buffer.pop_back();
            }
            buffer.push_front((word, dist));
        } else if dist <= buffered_mean(&buffer) {
            if buffer.len() == k {
                buffer.pop_back();
            }
            let at = buffer.len().min(1);
            buffer.insert(at, (word, dist));
        }
    }

    buffer.into_iter().map(|(word, _)| word.to_string()).collect()
}

/// Mean of buffered distances; unbounded for an empty buffer.
fn buffered_mean(buffer: &VecDeque<(&str, f64)>) -> f64 {
    if buffer.is_empty() {
        return f64::INFINITY;
    }
    buffer.iter().map(|&(_, d)| d).sum::<f64>() / buffer.len() as f64
}

/// Exact `k` nearest words, closest first. Ties go to the word met first.
pub fn exact_top_k<'a, I>(scored: I, k: usize) -> Vec<String>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let mut remaining: Vec<(&str, f64)> = scored.into_iter().collect();
    let mut chosen = Vec::with_capacity(k.min(remaining.len()));

    while chosen.len() < k && !remaining.is_empty() {
        let mut best = 0;
        for (i, &(_, dist)) in remaining.iter().enumerate().skip(1) {
            if dist < remaining[best].1 {
                best = i;
            }
        }
        let (word, _) = remaining.remove(best);
        chosen.push(word.to_string());
    }

    chosen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored<'a>(pairs: &[(&'a str, f64)]) -> Vec<(&'a str, f64)> {
        pairs.to_vec()
    }

    #[test]
    fn test_method_ids() {
        for method in SelectionMethod::ALL {
            assert_eq!(SelectionMethod::from_id(method.id()).unwrap(), method);
            assert_eq!(SelectionMethod::parse_str(method.name()).unwrap(), method);
        }
        assert_eq!(SelectionMethod::parse_str("1").unwrap(), SelectionMethod::BestPlusNearBest);
        assert!(SelectionMethod::from_id(3).is_err());
        assert!(SelectionMethod::parse_str("random").is_err());
        assert_eq!(SelectionMethod::default(), SelectionMethod::ExactTopK);
    }

    #[test]
    fn test_exact_top_k_orders_by_distance() {
        let words = scored(&[("a", 3.0), ("b", 1.0), ("c", 2.0), ("d", 0.5)]);
        assert_eq!(exact_top_k(words.clone(), 3), vec!["d", "b", "c"]);
        assert_eq!(exact_top_k(words, 10), vec!["d", "b", "c", "a"]);
    }

    #[test]
    fn test_exact_top_k_tie_break_is_first_occurrence() {
        let words = scored(&[("x", 1.0), ("y", 0.0), ("z", 1.0), ("w", 0.0)]);
        assert_eq!(exact_top_k(words, 4), vec!["y", "w", "x", "z"]);
    }

    #[test]
    fn test_exact_top_k_zero_and_empty() {
        assert!(exact_top_k(scored(&[("a", 1.0)]), 0).is_empty());
        assert!(exact_top_k(Vec::new(), 5).is_empty());
    }

    #[test]
    fn test_running_minimum_keeps_non_increasing_bests() {
        let words = scored(&[("a", 3.0), ("b", 4.0), ("c", 2.0), ("d", 2.0), ("e", 5.0)]);
        assert_eq!(running_minimum(words.clone(), 5), vec!["d", "c", "a"]);
        // oldest best is evicted at capacity
        assert_eq!(running_minimum(words, 2), vec!["d", "c"]);
    }

    #[test]
    fn test_running_minimum_misses_true_neighbours() {
        // "b" is second closest but never a running best
        let words = scored(&[("a", 1.0), ("b", 2.0), ("c", 3.0)]);
        assert_eq!(running_minimum(words.clone(), 2), vec!["a"]);
        assert_eq!(exact_top_k(words, 2), vec!["a", "b"]);
    }

    #[test]
    fn test_best_plus_near_best_admits_runner_ups() {
        // buffer: [a 2.0] -> b 5.0 > mean 2.0 rejected -> [c 1.0, a 2.0]
        // -> d 1.4 <= mean 1.5 goes behind the best -> [c, d, a]
        let words = scored(&[("a", 2.0), ("b", 5.0), ("c", 1.0), ("d", 1.4)]);
        assert_eq!(best_plus_near_best(words, 5), vec!["c", "d", "a"]);
    }

    #[test]
    fn test_best_plus_near_best_evicts_oldest_runner_up() {
        // [a 2.0] -> [c 1.0, a 2.0] -> d 1.2 at capacity evicts a -> [c, d]
        let words = scored(&[("a", 2.0), ("c", 1.0), ("d", 1.2)]);
        assert_eq!(best_plus_near_best(words, 2), vec!["c", "d"]);
    }

    #[test]
    fn test_best_plus_near_best_first_word_always_admitted() {
        let words = scored(&[("only", f64::MAX)]);
        assert_eq!(best_plus_near_best(words, 3), vec!["only"]);
        assert!(best_plus_near_best(scored(&[("a", 1.0)]), 0).is_empty());
    }

    #[test]
    fn test_single_slot_buffers() {
        let words = scored(&[("a", 2.0), ("b", 1.0), ("c", 1.5)]);
        assert_eq!(best_plus_near_best(words.clone(), 1), vec!["b"]);
        assert_eq!(running_minimum(words, 1), vec!["b"]);
    }

    #[test]
    fn test_select_uses_glossary_order() {
        let glossary: Glossary = [("the", 100), ("that", 50), ("this", 50)]
            .into_iter()
            .collect();
        let metric = DistanceMetric::NGram { n: 2 };

        let props = SelectionMethod::ExactTopK.select("teh", &glossary, &metric, 2);
        assert_eq!(props, vec!["the", "that"]);

        // all distances tie, so every word is a running best
        let props = SelectionMethod::RunningMinimum.select("teh", &glossary, &metric, 2);
        assert_eq!(props, vec!["this", "that"]);
    }
}
