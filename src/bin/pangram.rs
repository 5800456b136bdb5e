//! Command-line interface: search a dictionary for pangrammatic
//! heterograms and print every one found.

extern crate pangram_heterograms;

use clap::Parser;

use pangram_heterograms::config::Config;
use pangram_heterograms::error::Result;
use pangram_heterograms::session;

#[cfg(feature = "cli")]
use pangram_heterograms::export;

fn main() -> Result<()> {
    let config = Config::parse();

    let default_level = if config.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let report = session::run(&config)?;

    #[cfg(feature = "cli")]
    if let Some(path) = &config.output {
        export::write(path, &report.solutions)?;
    }

    Ok(())
}
