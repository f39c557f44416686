//! Tangle command implementation.

use std::path::PathBuf;

use texlip::errors::Result;
use texlip::{tangle_file, Config};

/// Options for the tangle command.
#[derive(Debug, Clone, Default)]
pub struct TangleOptions {
    /// Input TeX document.
    pub input: PathBuf,
    /// Suppress the statistics report.
    pub quiet: bool,
    /// Print the statistics as JSON.
    pub json: bool,
}

/// Executes the tangle command.
pub fn tangle(config: Config, options: &TangleOptions) -> Result<()> {
    let stats = tangle_file(config, &options.input)?;

    if options.quiet {
        return Ok(());
    }
    if options.json {
        println!("{}", stats.to_json()?);
    } else {
        print!("{}", stats);
    }
    Ok(())
}
