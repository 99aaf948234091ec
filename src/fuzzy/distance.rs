// File: src/fuzzy/distance.rs

/// Levenshtein distance with unit costs, measured in Unicode scalar values so
/// that apostrophes and non-ASCII letters count as one edit each.
/// Complexity: O(n * m) time, O(min(n, m)) space.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    levenshtein_chars(&a, &b)
}

pub(crate) fn levenshtein_chars(a: &[char], b: &[char]) -> usize {
    // Keep the shorter word on the row axis.
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if short.is_empty() {
        return long.len();
    }

    let mut prev_row: Vec<usize> = (0..=short.len()).collect();
    let mut curr_row = vec![0; short.len() + 1];

    for (i, &c1) in long.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, &c2) in short.iter().enumerate() {
            let cost = usize::from(c1 != c2);
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }
    prev_row[short.len()]
}
