//! Command implementations for lexsieve CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::cleaner::TextCleaner;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;

/// Execute a CLI command.
pub fn execute_command(args: LexsieveArgs) -> Result<()> {
    match &args.command {
        Command::Clean(clean_args) => clean_documents(clean_args, &args),
        Command::Explain(explain_args) => explain_text(explain_args, &args),
        Command::Config(config_args) => show_config(config_args, &args),
    }
}

/// Clean documents read one per line.
fn clean_documents(args: &CleanArgs, cli_args: &LexsieveArgs) -> Result<()> {
    let config = args.filter.resolve()?;
    let cleaner = TextCleaner::new(config)?;

    let documents = match &args.input {
        Some(path) => read_documents_from_file(path)?,
        None => read_documents(io::stdin().lock())?,
    };
    info!(documents = documents.len(), "Read input documents");

    let report = cleaner.clean_with_report(&documents);

    match &args.output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_documents(
                &mut writer,
                &report.documents,
                cli_args.output_format,
                cli_args.pretty,
            )?;
            writer.flush()?;
            info!(path = %path.display(), "Wrote cleaned documents");
        }
        None => {
            let mut writer = io::stdout().lock();
            write_documents(
                &mut writer,
                &report.documents,
                cli_args.output_format,
                cli_args.pretty,
            )?;
        }
    }

    if args.stats {
        write_stats(&mut io::stderr().lock(), &report.stats, cli_args.output_format)?;
    }

    Ok(())
}

/// Print the decision for every token of one text.
fn explain_text(args: &ExplainArgs, cli_args: &LexsieveArgs) -> Result<()> {
    let config = args.filter.resolve()?;
    let cleaner = TextCleaner::new(config)?;

    let mut decisions = cleaner.explain(&args.text)?;
    if args.dropped_only {
        decisions.retain(|decision| !decision.is_kept());
    }

    write_decisions(
        &mut io::stdout().lock(),
        &decisions,
        cli_args.output_format,
        cli_args.pretty,
    )
}

/// Print the effective configuration.
fn show_config(args: &ConfigArgs, _cli_args: &LexsieveArgs) -> Result<()> {
    let config = args.filter.resolve()?;
    write_json(&mut io::stdout().lock(), &config, true)
}

/// Read one document per line; line terminators are dropped.
pub fn read_documents<R: BufRead>(reader: R) -> Result<Vec<String>> {
    Ok(reader.lines().collect::<io::Result<Vec<String>>>()?)
}

/// Read documents from a file path.
pub fn read_documents_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    read_documents(BufReader::new(File::open(path)?))
}
