//! Term matching over lowercased text. Offsets are byte offsets into the
//! lowercased haystack, so callers must compare ranges from the same string.

use std::ops::Range;

/// Every occurrence of `term` that is not glued to a neighbouring letter or digit
/// on either side. "java" therefore does not match inside "javascript".
pub fn find_whole_term(haystack: &str, term: &str) -> Vec<Range<usize>> {
    let term = term.to_lowercase();
    if term.is_empty() {
        return vec![];
    }
    haystack
        .match_indices(term.as_str())
        .filter(|(start, _)| {
            let end = start + term.len();
            !alnum_before(haystack, *start) && !alnum_after(haystack, end)
        })
        .map(|(start, _)| start..start + term.len())
        .collect()
}

/// First occurrence of `term` that starts a word. Suffixes are allowed, so a
/// trigger like "work" fires on "worked" and "working".
pub fn find_word_start(haystack: &str, term: &str) -> Option<usize> {
    let term = term.to_lowercase();
    if term.is_empty() {
        return None;
    }
    haystack
        .match_indices(term.as_str())
        .map(|(start, _)| start)
        .find(|start| !alnum_before(haystack, *start))
}

pub fn contains_any_word_start(haystack: &str, terms: &[String]) -> bool {
    terms.iter().any(|t| find_word_start(haystack, t).is_some())
}

pub fn overlaps(a: &Range<usize>, b: &Range<usize>) -> bool {
    a.start < b.end && b.start < a.end
}

fn alnum_before(haystack: &str, idx: usize) -> bool {
    haystack[..idx]
        .chars()
        .next_back()
        .is_some_and(char::is_alphanumeric)
}

fn alnum_after(haystack: &str, idx: usize) -> bool {
    haystack[idx..]
        .chars()
        .next()
        .is_some_and(char::is_alphanumeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_term_respects_boundaries() {
        assert!(find_whole_term("i write javascript daily", "Java").is_empty());
        assert_eq!(find_whole_term("java, javascript", "java"), vec![0..4]);
    }

    #[test]
    fn test_whole_term_handles_symbol_terms() {
        assert_eq!(find_whole_term("c++ and node.js.", "C++"), vec![0..3]);
        assert_eq!(find_whole_term("c++ and node.js.", "Node.js"), vec![8..15]);
    }

    #[test]
    fn test_whole_term_finds_every_occurrence() {
        assert_eq!(find_whole_term("sql; mysql; sql", "sql"), vec![0..3, 12..15]);
    }

    #[test]
    fn test_word_start_allows_suffixes() {
        assert_eq!(find_word_start("i worked at acme", "work"), Some(2));
        assert_eq!(find_word_start("homework", "work"), None);
    }

    #[test]
    fn test_overlap() {
        assert!(overlaps(&(0..5), &(4..8)));
        assert!(!overlaps(&(0..5), &(5..8)));
    }
}
