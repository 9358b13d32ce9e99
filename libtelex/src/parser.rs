/*!
Vietnamese syllable segmentation - `libtelex/src/parser.rs`

A Vietnamese syllable is

```text
initial consonant? + medial glide? + vowel nucleus + final consonant?
```

The segmenter splits a tone-free word into those four parts against fixed
tables. Matching is case-insensitive; the returned parts keep the case of the
input.

Notes
-----
- Initial consonants are matched greedily, longest first ("ngh" before "ng"
  before "n"), so table order matters.
- At each position of the remainder only the first matching nucleus in
  `VOWELS` is tried. Two-letter nuclei come first so diphthongs win over
  single vowels.
- "gi" and "qu" are only compound initials when the rest of the word still
  parses. Otherwise the word is re-parsed with "g"/"q" alone.
*/

use libtelex_core::utils::fold_case;
use tracing::trace;

/// Initial consonants, longest first.
pub const INITIAL_CONSONANTS: &[&str] = &[
    "ngh", "qu", "ch", "gh", "gi", "kh", "ng", "nh", "ph", "th", "tr", "b", "c", "d", "đ", "g",
    "h", "k", "l", "m", "n", "p", "q", "r", "s", "t", "v", "x",
];

/// Glides allowed between the initial consonant and the nucleus.
pub const MEDIAL_GLIDES: &[&str] = &["o", "u"];

/// Vowel nuclei, two-letter entries first.
pub const VOWELS: &[&str] = &[
    "ia", "ua", "ưa", "ya", "iê", "yê", "ươ", "uơ", "ưo", "ie", "ye", "uô", "uo", "ưô", "i", "y",
    "e", "ê", "a", "ă", "â", "u", "ư", "o", "ơ", "ô",
];

/// Final consonants (including the semivowel finals u, o, i, y).
pub const FINAL_CONSONANTS: &[&str] = &["ch", "ng", "nh", "p", "t", "c", "m", "n", "u", "o", "i", "y"];

/// Letters counted by the vowel limit.
const VOWEL_LETTERS: &str = "aeiouyăâêôơư";

/// Words with more vowel letters than this never form a syllable.
pub const MAX_VOWEL_LETTERS: usize = 3;

/// The four parts of a segmented syllable.
///
/// Concatenating the parts in order gives back the segmented word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Syllable {
    /// Initial consonant, possibly empty.
    pub initial: String,
    /// Medial glide ("o" or "u"), possibly empty.
    pub medial: String,
    /// Vowel nucleus, never empty.
    pub nucleus: String,
    /// Final consonant, possibly empty.
    pub coda: String,
}

impl Syllable {
    /// The word this syllable was segmented from.
    pub fn text(&self) -> String {
        self.with_nucleus(&self.nucleus)
    }

    /// Rebuild the word with a different nucleus.
    pub fn with_nucleus(&self, nucleus: &str) -> String {
        self.with_parts(&self.initial, nucleus)
    }

    /// Rebuild the word with a different initial consonant and nucleus.
    pub fn with_parts(&self, initial: &str, nucleus: &str) -> String {
        let mut out = String::with_capacity(
            initial.len() + self.medial.len() + nucleus.len() + self.coda.len(),
        );
        out.push_str(initial);
        out.push_str(&self.medial);
        out.push_str(nucleus);
        out.push_str(&self.coda);
        out
    }
}

/// Word chars alongside their case-folded copy; indices line up.
struct Letters {
    chars: Vec<char>,
    folded: Vec<char>,
}

impl Letters {
    fn new(word: &str) -> Self {
        let chars: Vec<char> = word.chars().collect();
        let folded = chars.iter().copied().map(fold_case).collect();
        Self { chars, folded }
    }

    fn len(&self) -> usize {
        self.chars.len()
    }

    /// Does `entry` occur in the folded word at `at`?
    fn matches_at(&self, at: usize, entry: &str) -> bool {
        let mut idx = at;
        for ch in entry.chars() {
            if self.folded.get(idx) != Some(&ch) {
                return false;
            }
            idx += 1;
        }
        true
    }

    fn slice(&self, start: usize, end: usize) -> String {
        self.chars[start..end].iter().collect()
    }

    /// Is the folded range empty or exactly one of `table`'s entries?
    fn empty_or_in(&self, start: usize, end: usize, table: &[&str]) -> bool {
        let part = &self.folded[start..end];
        part.is_empty()
            || table
                .iter()
                .any(|entry| entry.chars().eq(part.iter().copied()))
    }
}

/// Split a tone-free word into initial, medial, nucleus and coda.
///
/// Returns `None` when no valid structure exists, even after retrying a
/// "gi"/"qu" initial as "g"/"q".
pub fn segment(word: &str) -> Option<Syllable> {
    let letters = Letters::new(word);

    let vowel_count = letters
        .folded
        .iter()
        .filter(|ch| VOWEL_LETTERS.contains(**ch))
        .count();
    if vowel_count > MAX_VOWEL_LETTERS {
        trace!(word, vowel_count, "too many vowels to segment");
        return None;
    }

    let initial_len = INITIAL_CONSONANTS
        .iter()
        .find(|initial| letters.matches_at(0, initial))
        .map_or(0, |initial| initial.chars().count());

    if let Some(syllable) = parse_remaining(&letters, initial_len) {
        return Some(syllable);
    }

    // "gi"/"qu" followed by something that only parses with the i/u in it
    let compound = &letters.folded[..initial_len];
    if compound == ['g', 'i'] || compound == ['q', 'u'] {
        trace!(word, "retrying with single-letter initial");
        return parse_remaining(&letters, 1);
    }

    None
}

/// Find the leftmost nucleus in `letters[start..]` with a valid medial before
/// it and a valid coda after it.
fn parse_remaining(letters: &Letters, start: usize) -> Option<Syllable> {
    if start >= letters.len() {
        return None;
    }

    for pos in start..letters.len() {
        let Some(nucleus) = VOWELS.iter().find(|v| letters.matches_at(pos, v)) else {
            continue;
        };
        let end = pos + nucleus.chars().count();

        // A "u" glide in front of a u/ư nucleus is the tail of "qu", not a glide
        let medial = &letters.folded[start..pos];
        if medial == ['u'] && matches!(letters.folded[pos], 'u' | 'ư') {
            continue;
        }

        if letters.empty_or_in(start, pos, MEDIAL_GLIDES)
            && letters.empty_or_in(end, letters.len(), FINAL_CONSONANTS)
        {
            return Some(Syllable {
                initial: letters.slice(0, start),
                medial: letters.slice(start, pos),
                nucleus: letters.slice(pos, end),
                coda: letters.slice(end, letters.len()),
            });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(word: &str) -> Option<(String, String, String, String)> {
        segment(word).map(|s| (s.initial, s.medial, s.nucleus, s.coda))
    }

    fn p(i: &str, m: &str, n: &str, c: &str) -> Option<(String, String, String, String)> {
        Some((i.into(), m.into(), n.into(), c.into()))
    }

    #[test]
    fn single_vowel() {
        assert_eq!(parts("a"), p("", "", "a", ""));
    }

    #[test]
    fn longest_initial_wins() {
        assert_eq!(parts("nghiêng"), p("ngh", "", "iê", "ng"));
        assert_eq!(parts("nhanh"), p("nh", "", "a", "nh"));
        assert_eq!(parts("tiêng"), p("t", "", "iê", "ng"));
    }

    #[test]
    fn medial_glide() {
        assert_eq!(parts("hoa"), p("h", "o", "a", ""));
        assert_eq!(parts("thuân"), p("th", "u", "â", "n"));
    }

    #[test]
    fn diphthong_preferred_over_single_vowel() {
        assert_eq!(parts("thương"), p("th", "", "ươ", "ng"));
        assert_eq!(parts("mua"), p("m", "", "ua", ""));
    }

    #[test]
    fn gi_and_qu_fallback() {
        assert_eq!(parts("gia"), p("gi", "", "a", ""));
        assert_eq!(parts("gi"), p("g", "", "i", ""));
        assert_eq!(parts("gin"), p("g", "", "i", "n"));
        assert_eq!(parts("quôc"), p("qu", "", "ô", "c"));
        assert_eq!(parts("qu"), p("q", "", "u", ""));
    }

    #[test]
    fn keeps_input_case() {
        assert_eq!(parts("NGHIÊNG"), p("NGH", "", "IÊ", "NG"));
        assert_eq!(parts("Đươc"), p("Đ", "", "ươ", "c"));
    }

    #[test]
    fn u_glide_before_u_nucleus_rejected() {
        assert_eq!(parts("tuua"), None);
    }

    #[test]
    fn rejects_invalid_structure() {
        assert_eq!(parts(""), None);
        assert_eq!(parts("d"), None);
        assert_eq!(parts("xyz"), None);
        assert_eq!(parts("ab"), None);
        assert_eq!(parts("khuyeen"), None);
        assert_eq!(parts("a1"), None);
    }

    #[test]
    fn text_reassembles_word() {
        let syllable = segment("Thuyên").expect("segments");
        assert_eq!(syllable.text(), "Thuyên");
        assert_eq!(syllable.with_nucleus("yế"), "Thuyến");
        assert_eq!(syllable.with_parts("Kh", "yê"), "Khuyên");
    }
}
