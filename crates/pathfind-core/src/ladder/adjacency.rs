//! Edit-distance predicates over words
//!
//! Lengths and positions are measured in `char`s, not bytes.

/// True if `word1` and `word2` are at most one single-character edit apart
/// (substitution, insertion or deletion). Identical words are adjacent.
///
/// Symmetric and allocation-free.
pub fn is_adjacent(word1: &str, word2: &str) -> bool {
    let len1 = word1.chars().count();
    let len2 = word2.chars().count();

    match len1.abs_diff(len2) {
        0 => at_most_one_substitution(word1, word2),
        1 if len1 > len2 => is_single_deletion(word1, word2),
        1 => is_single_deletion(word2, word1),
        _ => false,
    }
}

fn at_most_one_substitution(word1: &str, word2: &str) -> bool {
    word1
        .chars()
        .zip(word2.chars())
        .filter(|(a, b)| a != b)
        .nth(1)
        .is_none()
}

/// True if removing exactly one char from `longer` yields `shorter`.
///
/// Callers guarantee `longer` has exactly one more char than `shorter`.
fn is_single_deletion(longer: &str, shorter: &str) -> bool {
    let mut remaining = shorter.chars().peekable();
    let mut skipped = false;

    for c in longer.chars() {
        if remaining.peek() == Some(&c) {
            remaining.next();
        } else if skipped {
            return false;
        } else {
            skipped = true;
        }
    }

    remaining.next().is_none()
}

/// True if the edit distance between `str1` and `str2` is at most `d`.
///
/// Two-row dynamic programming. Stops as soon as every cell of a row exceeds
/// `d`, since later rows can only be larger.
pub fn edit_distance_within(str1: &str, str2: &str, d: usize) -> bool {
    let a: Vec<char> = str1.chars().collect();
    let b: Vec<char> = str2.chars().collect();

    if a.len().abs_diff(b.len()) > d {
        return false;
    }

    bounded_distance(&a, &b, d).is_some()
}

/// Levenshtein distance between two strings.
pub fn edit_distance(str1: &str, str2: &str) -> usize {
    let a: Vec<char> = str1.chars().collect();
    let b: Vec<char> = str2.chars().collect();
    bounded_distance(&a, &b, usize::MAX).unwrap_or(usize::MAX)
}

/// Distance if it is `<= limit`, otherwise `None`
fn bounded_distance(a: &[char], b: &[char], limit: usize) -> Option<usize> {
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        let mut row_min = curr[0];

        for (j, cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j]
            } else {
                1 + prev[j].min(prev[j + 1]).min(curr[j])
            };
            row_min = row_min.min(curr[j + 1]);
        }

        if row_min > limit {
            return None;
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    let distance = prev[b.len()];
    (distance <= limit).then_some(distance)
}
