//! Command-line interface for the converter.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{DEFAULT_ENCODING, DEFAULT_LANGUAGES};
use crate::converter::convert_directory;
use crate::error::{ConvertError, Result};

/// Convert dict.cc style tab-delimited word lists to XDXF dictionary files.
#[derive(Parser)]
#[command(name = "dictcc-xdxf")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a directory's dict.txt to lex.db and dict.xdxf.
    Convert {
        /// Directory containing dict.txt
        dir: PathBuf,

        /// Text encoding of the input and output files
        #[arg(short, long, default_value = DEFAULT_ENCODING)]
        encoding: String,

        /// Source and target language codes (EN, DE, BG, RU)
        #[arg(
            short,
            long,
            num_args = 2,
            value_names = ["FROM", "TO"],
            default_values = [DEFAULT_LANGUAGES.0, DEFAULT_LANGUAGES.1]
        )]
        languages: Vec<String>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            dir,
            encoding,
            languages,
        } => convert_command(&dir, &encoding, &languages),
    }
}

/// Execute the convert command.
fn convert_command(dir: &Path, encoding: &str, languages: &[String]) -> Result<()> {
    let [from, to] = languages else {
        // clap enforces exactly two values; this guards direct callers.
        return Err(ConvertError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "Expected exactly two language codes",
        )));
    };

    println!(
        "{} {} ({} {} {})",
        style("Converting").bold(),
        style(dir.display()).cyan(),
        style(from).green(),
        style("->").dim(),
        style(to).green()
    );
    println!();

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Parsing dictionary and writing XDXF...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let report = match convert_directory(dir, encoding, from, to) {
        Ok(report) => report,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();

    println!("  Entries: {}", style(report.accepted).green());
    if report.rejected > 0 {
        println!(
            "  Dropped malformed lines: {}",
            style(report.rejected).yellow().bold()
        );
    }
    println!();
    println!(
        "{} {}",
        style("Store:").green().bold(),
        report.db_path.display()
    );
    println!(
        "{} {}",
        style("XDXF:").green().bold(),
        report.xdxf_path.display()
    );

    Ok(())
}
