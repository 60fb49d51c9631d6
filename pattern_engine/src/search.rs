//! Substring search against a compiled template

use crate::template::{Algorithm, ShiftTable, Template};
use thiserror::Error;

/// Result of a completed search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Zero-based index of the reported match
    Found(usize),
    NotFound,
}

impl SearchOutcome {
    pub fn position(&self) -> Option<usize> {
        match self {
            SearchOutcome::Found(pos) => Some(*pos),
            SearchOutcome::NotFound => None,
        }
    }
}

/// Reasons a search did not run
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("Template was not loaded")]
    TemplateNotLoaded,

    #[error("Template size too big: pattern has {pattern} characters, text has {text}")]
    PatternTooLarge { pattern: usize, text: usize },
}

/// Searches `text` with the template's algorithm
pub fn search(text: &str, template: &Template) -> Result<SearchOutcome, SearchError> {
    if !template.is_loaded() {
        return Err(SearchError::TemplateNotLoaded);
    }
    if template.len() > text.len() {
        return Err(SearchError::PatternTooLarge {
            pattern: template.len(),
            text: text.len(),
        });
    }

    let text = text.as_bytes();
    let pattern = template.pattern().as_bytes();
    let outcome = match template.algorithm() {
        Algorithm::Naive => naive(text, pattern),
        Algorithm::BadCharacter => bad_character(text, pattern, template.shifts()),
    };
    tracing::debug!(
        algorithm = %template.algorithm(),
        pattern = template.pattern(),
        ?outcome,
        "search finished"
    );
    Ok(outcome)
}

impl Template {
    /// Convenience for [`search`]
    pub fn search(&self, text: &str) -> Result<SearchOutcome, SearchError> {
        search(text, self)
    }
}

/// Leftmost offset where the whole pattern matches
fn naive(text: &[u8], pattern: &[u8]) -> SearchOutcome {
    text.windows(pattern.len())
        .position(|window| window == pattern)
        .map_or(SearchOutcome::NotFound, SearchOutcome::Found)
}

/// Right-to-left scan with shift-table skips
///
/// `i` is the text index aligned with the last pattern character. The
/// comparison stops before pattern index 0.
fn bad_character(text: &[u8], pattern: &[u8], shifts: &ShiftTable) -> SearchOutcome {
    let len = pattern.len();
    let mut i = len - 1;

    while i < text.len() {
        let mut j = len - 1;
        let mut k = 0;
        let mut shift = 0;

        while j > 0 {
            let ch = text[i - k];
            if ch == pattern[j] {
                k += 1;
                j -= 1;
                continue;
            }
            shift = if j == len - 1 {
                match shifts.get(ch) {
                    0 => len,
                    s => s,
                }
            } else {
                shifts.get(pattern[j])
            };
            break;
        }

        if j == 0 {
            return SearchOutcome::Found(i - k);
        }
        // Every pattern character has a non-zero entry once compiled
        i += shift.max(1);
    }

    SearchOutcome::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(pattern: &str, algorithm: Algorithm, text: &str) -> SearchOutcome {
        Template::compiled(pattern, algorithm)
            .unwrap()
            .search(text)
            .unwrap()
    }

    const AB: &[u8] = b"ab";
    const ABC: &[u8] = b"abc";

    /// All strings over `alphabet` of length `len`
    fn words(alphabet: &[u8], len: usize) -> Vec<String> {
        let mut out = vec![String::new()];
        for _ in 0..len {
            out = out
                .iter()
                .flat_map(|word| {
                    alphabet.iter().map(move |&ch| {
                        let mut next = word.clone();
                        next.push(char::from(ch));
                        next
                    })
                })
                .collect();
        }
        out
    }

    /// Plain loop-for-loop rendition of the shift-table scan, with its own
    /// table build, kept apart from the code under test
    fn reference_bad_character(text: &[u8], pattern: &[u8]) -> Option<usize> {
        let size = pattern.len();
        let mut table = [0usize; 128];
        let mut counter = 1;
        for idx in (0..size - 1).rev() {
            let slot = &mut table[usize::from(pattern[idx])];
            if *slot == 0 {
                *slot = counter;
            }
            counter += 1;
        }
        let last = usize::from(pattern[size - 1]);
        if table[last] == 0 {
            table[last] = (counter - 1).max(1);
        }

        let curr = size - 1;
        let mut i = curr;
        while i < text.len() {
            let mut j = curr;
            let mut k = 0;
            while j > 0 {
                if text[i - k] != pattern[j] {
                    if j == curr {
                        let entry = table[usize::from(text[i])];
                        i += if entry != 0 { entry } else { size };
                    } else {
                        i += table[usize::from(pattern[j])];
                    }
                    break;
                }
                k += 1;
                j -= 1;
            }
            if j == 0 {
                return Some(i - k);
            }
        }
        None
    }

    #[test]
    fn test_not_loaded() {
        let template = Template::new(Algorithm::Naive);
        assert_eq!(search("abc", &template), Err(SearchError::TemplateNotLoaded));
    }

    #[test]
    fn test_pattern_too_large() {
        let template = Template::compiled("abcd", Algorithm::BadCharacter).unwrap();
        assert_eq!(
            template.search("abc"),
            Err(SearchError::PatternTooLarge {
                pattern: 4,
                text: 3
            })
        );
        assert_eq!(template.search("abcd"), Ok(SearchOutcome::Found(0)));
    }

    #[test]
    fn test_fixture_scenarios() {
        for algorithm in [Algorithm::Naive, Algorithm::BadCharacter] {
            assert_eq!(
                run("ab", algorithm, "aaaaaabaab"),
                SearchOutcome::Found(5),
                "{algorithm}"
            );
            assert_eq!(
                run("aba", algorithm, "aaaaaab"),
                SearchOutcome::NotFound,
                "{algorithm}"
            );
        }
    }

    #[test]
    fn test_naive_leftmost() {
        assert_eq!(run("lo", Algorithm::Naive, "hello lo"), SearchOutcome::Found(3));
        assert_eq!(run("xyz", Algorithm::Naive, "hello"), SearchOutcome::NotFound);
    }

    #[test]
    fn test_bad_character_skips_unrecorded_characters() {
        assert_eq!(
            run("needle", Algorithm::BadCharacter, "haystackneedlehay"),
            SearchOutcome::Found(8)
        );
        assert_eq!(
            run("abc", Algorithm::BadCharacter, "xxxxxxxx"),
            SearchOutcome::NotFound
        );
    }

    #[test]
    fn test_bad_character_does_not_check_first_character() {
        // Only "ab" after the first position is compared
        assert_eq!(
            run("xab", Algorithm::BadCharacter, "zab"),
            SearchOutcome::Found(0)
        );
        assert_eq!(run("xab", Algorithm::Naive, "zab"), SearchOutcome::NotFound);
    }

    #[test]
    fn test_single_character_pattern() {
        assert_eq!(run("b", Algorithm::Naive, "aab"), SearchOutcome::Found(2));
        // Nothing is compared, so the first alignment is reported
        assert_eq!(run("b", Algorithm::BadCharacter, "aab"), SearchOutcome::Found(0));
    }

    #[test]
    fn test_naive_matches_str_find() {
        for plen in 1..=3 {
            for pattern in words(AB, plen) {
                for tlen in plen..=6 {
                    for text in words(AB, tlen) {
                        let expected = text
                            .find(pattern.as_str())
                            .map_or(SearchOutcome::NotFound, SearchOutcome::Found);
                        assert_eq!(
                            run(&pattern, Algorithm::Naive, &text),
                            expected,
                            "{pattern:?} in {text:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_self_search_reports_zero() {
        for len in 1..=5 {
            for pattern in words(ABC, len) {
                for algorithm in [Algorithm::Naive, Algorithm::BadCharacter] {
                    assert_eq!(
                        run(&pattern, algorithm, &pattern),
                        SearchOutcome::Found(0),
                        "{pattern:?} {algorithm}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_bad_character_match_contract() {
        for plen in 1..=3 {
            for pattern in words(ABC, plen) {
                for tlen in plen..=6 {
                    for text in words(ABC, tlen) {
                        let outcome = run(&pattern, Algorithm::BadCharacter, &text);
                        if let SearchOutcome::Found(r) = outcome {
                            let len = pattern.len();
                            assert!(r + len <= text.len(), "{pattern:?} in {text:?}");
                            assert_eq!(
                                &text[r + 1..r + len],
                                &pattern[1..],
                                "{pattern:?} in {text:?} at {r}"
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_algorithms_agree_on_full_matches() {
        // When the leftmost full match is also the first alignment whose tail
        // matches, both algorithms must report it
        for plen in 1..=3 {
            for pattern in words(AB, plen) {
                for tlen in plen..=6 {
                    for text in words(AB, tlen) {
                        let tail_hit = (0..=text.len() - plen)
                            .find(|&r| text[r + 1..r + plen] == pattern[1..]);
                        let Some(naive_pos) = text.find(pattern.as_str()) else {
                            continue;
                        };
                        if tail_hit != Some(naive_pos) {
                            continue;
                        }
                        assert_eq!(
                            run(&pattern, Algorithm::BadCharacter, &text),
                            SearchOutcome::Found(naive_pos),
                            "{pattern:?} in {text:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_bad_character_absent_character_shifts_full_length() {
        // 'x' is not in the pattern, so the first alignment jumps by 3
        assert_eq!(
            run("abc", Algorithm::BadCharacter, "xxxabc"),
            SearchOutcome::Found(3)
        );
        assert_eq!(
            run("abc", Algorithm::BadCharacter, "xxxxabc"),
            SearchOutcome::Found(4)
        );
        assert_eq!(
            run("abc", Algorithm::BadCharacter, "xyzxyzab"),
            SearchOutcome::NotFound
        );
    }

    #[test]
    fn test_bad_character_match_at_text_end() {
        for algorithm in [Algorithm::Naive, Algorithm::BadCharacter] {
            assert_eq!(
                run("cab", algorithm, "aaacab"),
                SearchOutcome::Found(3),
                "{algorithm}"
            );
            assert_eq!(
                run("ba", algorithm, "cccba"),
                SearchOutcome::Found(3),
                "{algorithm}"
            );
        }
    }

    #[test]
    fn test_bad_character_matches_reference_scan() {
        for plen in 1..=4 {
            for pattern in words(ABC, plen) {
                let template = Template::compiled(&pattern, Algorithm::BadCharacter).unwrap();
                for tlen in plen..=7 {
                    for text in words(ABC, tlen) {
                        let expected =
                            reference_bad_character(text.as_bytes(), pattern.as_bytes())
                                .map_or(SearchOutcome::NotFound, SearchOutcome::Found);
                        assert_eq!(
                            template.search(&text),
                            Ok(expected),
                            "{pattern:?} in {text:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_outcome_position() {
        assert_eq!(SearchOutcome::Found(4).position(), Some(4));
        assert_eq!(SearchOutcome::NotFound.position(), None);
    }
}
