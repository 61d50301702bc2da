//! Text Normalizer — canonical searchable form plus boundary-aware search.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Symbols that survive normalization besides letters and digits. Keeps
/// tokens like "c++", "c#" and "node.js" intact.
const KEPT_SYMBOLS: [char; 4] = ['-', '+', '#', '.'];

/// A searchable, canonical form of one input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    text: String,
}

/// Normalizes raw text for matching. Never fails; empty input yields empty
/// output.
///
/// Steps, in order: NFD-fold and drop combining marks (accents), lowercase,
/// map every character outside letters/digits/`-+#.` to a space, collapse
/// whitespace runs to single spaces and trim.
pub fn normalize(raw: &str) -> NormalizedText {
    let mut stripped = String::with_capacity(raw.len());
    for ch in raw.nfd().filter(|c| !is_combining_mark(*c)) {
        for lower in ch.to_lowercase() {
            if lower.is_alphanumeric() || KEPT_SYMBOLS.contains(&lower) {
                stripped.push(lower);
            } else {
                stripped.push(' ');
            }
        }
    }
    let text = stripped.split_whitespace().collect::<Vec<_>>().join(" ");
    NormalizedText { text }
}

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Boundary-respecting containment. `phrase` must already be normalized.
    ///
    /// An occurrence only counts when it is not adjacent to another
    /// alphanumeric character (boundary = start/end of text or a
    /// non-alphanumeric character), so "go" never matches inside "golang"
    /// or "ongoing". The empty phrase never matches.
    pub fn contains_phrase(&self, phrase: &str) -> bool {
        if phrase.is_empty() {
            return false;
        }
        // Scans every occurrence, including ones overlapping a rejected hit.
        let mut from = 0;
        while let Some(pos) = self.text[from..].find(phrase) {
            let start = from + pos;
            let end = start + phrase.len();
            let before_ok = self.text[..start]
                .chars()
                .next_back()
                .map_or(true, |c| !c.is_alphanumeric());
            let after_ok = self.text[end..]
                .chars()
                .next()
                .map_or(true, |c| !c.is_alphanumeric());
            if before_ok && after_ok {
                return true;
            }
            from = match self.text[start..].chars().next() {
                Some(c) => start + c.len_utf8(),
                None => break,
            };
        }
        false
    }
}
