//! Normalize a dictionary into a deduplicated [`WordList`] and reduce it
//! to one mask per anagram group.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::error::{AnagramError, Result};
use crate::mask::{bit_for, LetterMask};

/// A single dictionary entry after normalization.
///
/// Invariant: `popcount(mask) == text.len()` — enforced by construction,
/// since both are derived from the same filtered character sequence and
/// a word is rejected outright if any letter repeats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub text: String,
    pub mask: LetterMask,
}

/// Sorted, deduplicated collection of [`Word`]s.
pub type WordList = Vec<Word>;

/// Read `path` into memory.
///
/// Dictionaries in this domain are plain word lists (tens to low hundreds
/// of thousands of short lines), so one `read_to_string` call is simpler
/// than a line-at-a-time `BufReader` loop and no slower at this size. A
/// missing or unreadable file becomes [`AnagramError::DictionaryUnavailable`].
pub fn load_dictionary(path: &Path) -> Result<String> {
    let mut file = File::open(path).map_err(|source| AnagramError::DictionaryUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|source| AnagramError::DictionaryUnavailable { path: path.to_path_buf(), source })?;
    Ok(contents)
}

/// Normalize raw dictionary text into a sorted, deduplicated [`WordList`].
///
/// Lines are split on `\n` with any trailing `\r` stripped. Characters
/// outside `[a-z]` (after ASCII-lowercasing) are dropped both from the
/// computed mask and from the emitted `text`, keeping
/// `popcount(mask) == text.len()` a true invariant rather than a
/// display-only approximation. A word with a repeated letter, or one
/// that normalizes to nothing, is dropped entirely.
pub fn normalize_words(raw: &str) -> WordList {
    let mut words: WordList = Vec::new();
    for line in raw.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let mut text = String::with_capacity(line.len());
        let mut mask: LetterMask = 0;
        let mut rejected = false;
        for ch in line.chars().flat_map(char::to_lowercase) {
            let Some(bit) = bit_for(ch) else { continue };
            if mask & bit != 0 {
                rejected = true;
                break;
            }
            mask |= bit;
            text.push(ch);
        }
        if rejected || mask == 0 {
            continue;
        }
        words.push(Word { text, mask });
    }
    words.sort_unstable_by(|a, b| a.text.cmp(&b.text));
    words.dedup_by(|a, b| a.text == b.text && a.mask == b.mask);
    debug!("normalized dictionary: {} words survive filtering", words.len());
    words
}

/// Build the level-0 mask list: one entry per distinct mask, ordered by
/// that mask's first-occurring word in `words`.
///
/// The full `WordList` is retained separately by the caller so that
/// anagrams can be re-expanded by [`crate::render`] once a solution is
/// found.
pub fn build_level0(words: &WordList) -> Vec<LetterMask> {
    let mut seen = std::collections::HashSet::with_capacity(words.len());
    let mut level0 = Vec::new();
    for word in words {
        if seen.insert(word.mask) {
            level0.push(word.mask);
        }
    }
    debug!("level-0 mask list: {} distinct anagram groups", level0.len());
    level0
}
