//! Export solutions as JSON.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::session::Solution;

#[derive(Serialize)]
struct Entry<'a> {
    index: usize,
    sentence: &'a str,
}

/// All solutions as a JSON array of `{index, sentence}` objects, in
/// emission order.
pub fn write(path: &Path, solutions: &[Solution]) -> Result<()> {
    let entries: Vec<Entry> = solutions
        .iter()
        .enumerate()
        .map(|(i, s)| Entry { index: i + 1, sentence: &s.text })
        .collect();
    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string(&entries)?.as_bytes())?;
    Ok(())
}
