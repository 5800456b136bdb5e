//! Optional result exporters (`-o/--output`), gated behind the `cli`
//! feature alongside the `csv`/`serde_json` dependencies they need.

mod csv;
mod json;

use std::path::Path;

use crate::error::{AnagramError, Result};
use crate::session::Solution;

/// Write every solution to `path`, inferring CSV vs JSON from its file
/// extension (case-insensitively). Any other extension, or none, is an
/// error rather than a silent guess.
pub fn write(path: &Path, solutions: &[Solution]) -> Result<()> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => csv::write(path, solutions),
        Some(ext) if ext.eq_ignore_ascii_case("json") => json::write(path, solutions),
        _ => Err(AnagramError::UnsupportedExportFormat { path: path.to_path_buf() }),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::mask::LetterMask;
    use std::path::PathBuf;

    fn sample() -> Vec<Solution> {
        vec![Solution {
            masks: Vec::<LetterMask>::new(),
            text: "abcdefghijklm nopqrstuvwxyz".to_string(),
        }]
    }

    #[test]
    fn rejects_unknown_extensions() {
        let err = write(&PathBuf::from("out.txt"), &sample()).unwrap_err();
        assert!(matches!(err, AnagramError::UnsupportedExportFormat { .. }));
    }
}
