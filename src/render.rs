//! Expand a solved sequence of masks back into readable sentences.

use crate::mask::LetterMask;
use crate::words::WordList;

/// Render one solution: each position's words (its full anagram group,
/// in `WordList` order) joined by `|`, positions joined by a single space.
pub fn render(solution: &[LetterMask], words: &WordList) -> String {
    solution
        .iter()
        .map(|&mask| {
            words
                .iter()
                .filter(|w| w.mask == mask)
                .map(|w| w.text.as_str())
                .collect::<Vec<&str>>()
                .join("|")
        })
        .collect::<Vec<String>>()
        .join(" ")
}
