//! Texlip CLI - extract literate-programming blocks from TeX documents

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use texlip::Config;

mod commands;

#[derive(Parser)]
#[command(name = "texlip")]
#[command(author, about = "Extract literate-programming blocks from a TeX document", long_about = None)]
#[command(disable_version_flag = true)]
struct Cli {
    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Write a tag comment as the first line of each output
    #[arg(short, long)]
    tag: bool,

    /// Directory to output files to
    #[arg(short = 'd', long, value_name = "DIR")]
    basedir: Option<PathBuf>,

    /// Put each language's files in its own directory
    #[arg(short = 'l', long)]
    lang_hier: bool,

    /// Write a date and time comment as the last line of each output
    #[arg(short = 'T', long)]
    timetag: bool,

    /// Do not show statistics
    #[arg(short, long)]
    quiet: bool,

    /// Print statistics as JSON
    #[arg(long, conflicts_with = "quiet")]
    json: bool,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Display the version
    #[arg(short = 'V', long)]
    version: bool,

    /// Input TeX document
    #[arg(value_name = "INPUT", required_unless_present = "version")]
    input: Option<PathBuf>,
}

impl Cli {
    /// Applies command-line overrides on top of the file configuration.
    fn apply_to(&self, mut config: Config) -> Config {
        if let Some(basedir) = &self.basedir {
            config.basedir = basedir.clone();
        }
        config.tag |= self.tag;
        config.lang_hier |= self.lang_hier;
        config.timetag |= self.timetag;
        config
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.version {
        println!(
            "texlip, version {}.\nBy {}.",
            env!("CARGO_PKG_VERSION"),
            env!("CARGO_PKG_AUTHORS")
        );
        return ExitCode::SUCCESS;
    }

    let Some(input) = cli.input.clone() else {
        Cli::command()
            .error(ErrorKind::MissingRequiredArgument, "missing INPUT document")
            .exit();
    };

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    // Read configuration from file or use defaults
    let config = match cli.config {
        Some(ref path) => texlip::config::read_config_file(path),
        None => std::env::current_dir()
            .map_err(texlip::TexlipError::from)
            .and_then(|dir| texlip::config::read_config(&dir)),
    };
    let config = match config {
        Ok(config) => cli.apply_to(config),
        Err(e) => {
            eprintln!("Error reading configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    tracing::debug!("Using configuration: {:?}", config);

    let options = commands::TangleOptions {
        input,
        quiet: cli.quiet,
        json: cli.json,
    };

    match commands::tangle(config, &options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
