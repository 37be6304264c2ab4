// core/src/decode.rs
//
// Decode ("degibberify") path: constructed language -> approximate source text.
//
// Longer target strings are assumed more likely to be a single syllable than a
// combination of shorter ones, so buckets are matched longest first. Claimed
// regions of the input are recorded in a `MaskedSpans` set; the input itself is
// never rewritten while matching, so every span indexes the original text and
// the output is assembled in one pass at the end.

use tracing::trace;

use crate::dictionary::ReverseDictionary;

/// Sorted, disjoint set of consumed byte ranges `[start, end)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaskedSpans {
    spans: Vec<(usize, usize)>,
}

impl MaskedSpans {
    pub fn new() -> Self {
        Self { spans: Vec::new() }
    }

    /// Whether `[start, end)` intersects any masked span.
    pub fn overlaps(&self, start: usize, end: usize) -> bool {
        // Spans are disjoint and sorted, so their ends are sorted too
        let idx = self.spans.partition_point(|&(_, e)| e <= start);
        self.spans.get(idx).is_some_and(|&(s, _)| s < end)
    }

    /// Mask `[start, end)`. Returns false, leaving the set unchanged, when the
    /// range is empty or intersects an existing span.
    pub fn insert(&mut self, start: usize, end: usize) -> bool {
        if start >= end || self.overlaps(start, end) {
            return false;
        }
        let idx = self.spans.partition_point(|&(s, _)| s < start);
        self.spans.insert(idx, (start, end));
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.spans.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

/// Recover an approximation of the source text.
///
/// Each target string is matched literally, left to right, without overlapping
/// its own previous matches or anything claimed by a longer (or earlier)
/// mapping. Text that matches nothing is kept as-is. Never fails.
pub fn degibberify(dict: &ReverseDictionary, text: &str) -> String {
    let mut masked = MaskedSpans::new();
    let mut replacements: Vec<(usize, usize, &str)> = Vec::new();

    for (_, bucket) in dict.buckets() {
        for (target, source) in bucket {
            let mut pos = 0;
            while let Some(found) = text[pos..].find(target.as_str()) {
                let start = pos + found;
                let end = start + target.len();
                if masked.insert(start, end) {
                    replacements.push((start, end, source.as_str()));
                    pos = end;
                } else {
                    // Retry one character further so a match starting inside
                    // the rejected occurrence is still found
                    pos = start + text[start..].chars().next().map_or(1, char::len_utf8);
                }
            }
        }
    }
    trace!(matches = replacements.len(), "degibberified text");

    replacements.sort_unstable_by_key(|&(start, _, _)| start);
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for (start, end, source) in replacements {
        out.push_str(&text[last..start]);
        out.push_str(source);
        last = end;
    }
    out.push_str(&text[last..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reverse(pairs: &[(&str, &str)]) -> ReverseDictionary {
        let mut rd = ReverseDictionary::new();
        for (target, source) in pairs {
            rd.insert(*target, *source);
        }
        rd
    }

    #[test]
    fn masked_spans_reject_overlaps() {
        let mut spans = MaskedSpans::new();
        assert!(spans.insert(2, 5));
        assert!(spans.insert(7, 9));
        assert!(spans.insert(0, 2));
        assert!(!spans.insert(4, 6));
        assert!(!spans.insert(8, 8));
        assert!(spans.insert(5, 7));
        assert_eq!(
            spans.iter().collect::<Vec<_>>(),
            vec![(0, 2), (2, 5), (5, 7), (7, 9)]
        );
        assert!(!spans.overlaps(9, 12));
        assert!(spans.overlaps(6, 7));
    }

    #[test]
    fn longest_match_wins() {
        let rd = reverse(&[("ab", "x"), ("a", "y")]);
        assert_eq!(degibberify(&rd, "ab"), "x");
    }

    #[test]
    fn shorter_mappings_cannot_reenter_claimed_spans() {
        let rd = reverse(&[("ab", "x"), ("b", "q"), ("a", "y")]);
        assert_eq!(degibberify(&rd, "aba"), "xy");
        assert_eq!(degibberify(&rd, "bab"), "qx");
    }

    #[test]
    fn replacement_length_differs_from_match_length() {
        let rd = reverse(&[("grak", "hel"), ("mog", "lo"), ("o", "LONGER")]);
        assert_eq!(degibberify(&rd, "grakmog o"), "hello LONGER");
    }

    #[test]
    fn unknown_text_is_kept() {
        let rd = reverse(&[("mog", "lo")]);
        assert_eq!(degibberify(&rd, "zzz mog, zzz!"), "zzz lo, zzz!");
    }

    #[test]
    fn rejected_occurrence_does_not_hide_later_one() {
        let rd = reverse(&[("aa", "B"), ("a", "c")]);
        assert_eq!(degibberify(&rd, "aaa"), "Bc");
        // "ab" claims [0,2); "bb" at 1 is rejected but "bb" at 2 still matches
        let rd = reverse(&[("ab", "X"), ("bb", "Y")]);
        assert_eq!(degibberify(&rd, "abbb"), "XY");
    }

    #[test]
    fn multibyte_text_is_handled() {
        let rd = reverse(&[("žü", "ka"), ("ü", "u")]);
        assert_eq!(degibberify(&rd, "žüü ü"), "kau u");
    }

    #[test]
    fn empty_input_and_empty_dictionary() {
        assert_eq!(degibberify(&ReverseDictionary::new(), "anything"), "anything");
        assert_eq!(degibberify(&reverse(&[("a", "b")]), ""), "");
    }
}
