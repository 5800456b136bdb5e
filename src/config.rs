//! Command-line configuration for the pangram-heterogram search.
//!
//! Kept as a `clap::Parser` struct separate from the binary so a future
//! non-CLI frontend could reuse it.

use std::path::PathBuf;

use clap::Parser;

/// Search a dictionary for pangrammatic heterograms: sentences whose
/// words collectively use every letter of the alphabet exactly once.
#[derive(Debug, Default, Parser)]
#[clap(max_term_width = 80)]
pub struct Config {
    /// Dictionary file containing one word per line as plain text.
    /// Files suitable for `ispell` or GNU `aspell` are compatible.
    #[clap(name = "PATH", default_value = "/usr/share/dict/words")]
    pub dict_file_path: PathBuf,

    /// Display additional diagnostic detail (memo hit/skip/shrink
    /// counts) via the `log` crate; set `RUST_LOG=debug` to see it.
    /// Never alters the solution/progress lines on stdout.
    #[clap(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Export all solutions to PATH in addition to printing them;
    /// format (CSV or JSON) is inferred from the file extension.
    #[clap(short = 'o', long = "output", name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Use 16-bit memo counters instead of 32-bit, halving the ~256 MiB
    /// table. Safe only when the post-reduction mask list has at most
    /// 65535 entries; larger dictionaries may silently wrap the counter.
    #[clap(long = "compact-memo")]
    pub compact_memo: bool,

    /// Stop after emitting this many solutions (0 = unbounded). Useful
    /// for smoke-testing against a very large dictionary.
    #[clap(long = "max-solutions", default_value = "0", name = "N")]
    pub max_solutions: usize,
}
