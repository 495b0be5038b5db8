//! Levenshtein edit distance.

use std::cmp::min;

/// Dynamic-programming table stored as one flat arena of
/// `rows * cols` cells addressed by `(i, j)`.
#[derive(Debug, Clone)]
pub struct DpTable {
    cells: Vec<usize>,
    cols: usize,
}

impl DpTable {
    /// Create a zero-filled table.
    pub fn new(rows: usize, cols: usize) -> Self {
        DpTable {
            cells: vec![0; rows * cols],
            cols,
        }
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.cols + j]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: usize) {
        self.cells[i * self.cols + j] = value;
    }
}

/// Calculate the Levenshtein distance between two strings.
///
/// This is the minimum number of single-character insertions, deletions or
/// substitutions (unit cost each) required to change `s1` into `s2`. The full
/// `(|s1| + 1) x (|s2| + 1)` table is filled iteratively.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    let len1 = s1_chars.len();
    let len2 = s2_chars.len();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut table = DpTable::new(len1 + 1, len2 + 1);

    // Initialize first row and column
    for i in 0..=len1 {
        table.set(i, 0, i);
    }
    for j in 0..=len2 {
        table.set(0, j, j);
    }

    for i in 1..=len1 {
        for j in 1..=len2 {
            let cost = if s1_chars[i - 1] == s2_chars[j - 1] {
                0
            } else {
                1
            };

            let value = min(
                min(
                    table.get(i - 1, j) + 1, // deletion
                    table.get(i, j - 1) + 1, // insertion
                ),
                table.get(i - 1, j - 1) + cost, // substitution
            );
            table.set(i, j, value);
        }
    }

    table.get(len1, len2)
}
