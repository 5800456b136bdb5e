//! Export solutions as CSV.

use std::path::Path;

use csv::WriterBuilder;

use crate::error::Result;
use crate::session::Solution;

/// One row per solution: its 1-based position and its rendered sentence
/// (anagram alternatives still `|`-joined within a word position).
pub fn write(path: &Path, solutions: &[Solution]) -> Result<()> {
    let mut writer = WriterBuilder::new().flexible(true).from_path(path)?;
    writer.write_record(["#", "sentence"])?;
    for (i, solution) in solutions.iter().enumerate() {
        writer.write_record([(i + 1).to_string(), solution.text.clone()])?;
    }
    writer.flush()?;
    Ok(())
}
