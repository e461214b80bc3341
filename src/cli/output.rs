//! Output formatting for CLI commands.

use std::io::Write;

use serde::Serialize;

use crate::cleaner::{CleanStats, TokenDecision};
use crate::cli::args::OutputFormat;
use crate::error::Result;

/// Write cleaned documents, one per line (or one JSON array).
pub fn write_documents<W: Write>(
    writer: &mut W,
    documents: &[Vec<String>],
    format: OutputFormat,
    pretty: bool,
) -> Result<()> {
    match format {
        OutputFormat::Human => {
            for document in documents {
                writeln!(writer, "{}", document.join(" "))?;
            }
        }
        OutputFormat::Tsv => {
            for document in documents {
                let fields: Vec<String> = document.iter().map(|t| escape_tsv(t)).collect();
                writeln!(writer, "{}", fields.join("\t"))?;
            }
        }
        OutputFormat::Json => write_json(writer, &documents, pretty)?,
    }
    Ok(())
}

/// Write per-token decisions.
pub fn write_decisions<W: Write>(
    writer: &mut W,
    decisions: &[TokenDecision],
    format: OutputFormat,
    pretty: bool,
) -> Result<()> {
    match format {
        OutputFormat::Human => {
            let width = decisions
                .iter()
                .map(|d| d.token.text.chars().count())
                .max()
                .unwrap_or(0);
            for decision in decisions {
                writeln!(
                    writer,
                    "{:<width$}  {}",
                    decision.token.text,
                    describe(decision),
                    width = width
                )?;
            }
        }
        OutputFormat::Tsv => {
            writeln!(writer, "position\ttext\tlemma\tdecision\toutput")?;
            for decision in decisions {
                writeln!(
                    writer,
                    "{}\t{}\t{}\t{}\t{}",
                    decision.token.position,
                    escape_tsv(&decision.token.text),
                    escape_tsv(&decision.token.lemma),
                    decision.reason.map_or("keep", |r| r.as_str()),
                    decision.output.as_deref().map(escape_tsv).unwrap_or_default()
                )?;
            }
        }
        OutputFormat::Json => write_json(writer, &decisions, pretty)?,
    }
    Ok(())
}

/// Write cleaning statistics.
pub fn write_stats<W: Write>(writer: &mut W, stats: &CleanStats, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(writer, stats, false)?,
        OutputFormat::Human | OutputFormat::Tsv => {
            writeln!(writer, "Documents:        {}", stats.documents)?;
            writeln!(writer, "Failed documents: {}", stats.failed_documents)?;
            writeln!(writer, "Tokens seen:      {}", stats.tokens_seen)?;
            writeln!(writer, "Tokens kept:      {}", stats.tokens_kept)?;
            writeln!(writer, "Tokens dropped:   {}", stats.tokens_dropped())?;
            for (reason, count) in &stats.dropped {
                writeln!(writer, "  {reason:<17} {count}")?;
            }
        }
    }
    Ok(())
}

/// Output a serializable value as JSON.
pub fn write_json<W: Write, T: Serialize + ?Sized>(
    writer: &mut W,
    value: &T,
    pretty: bool,
) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, value)?;
    } else {
        serde_json::to_writer(&mut *writer, value)?;
    }
    writeln!(writer)?;
    Ok(())
}

fn describe(decision: &TokenDecision) -> String {
    match (&decision.reason, &decision.output) {
        (Some(reason), _) => format!("drop ({reason})"),
        (None, Some(output)) => format!("keep -> {output}"),
        (None, None) => "keep".to_string(),
    }
}

/// Escape tabs and newlines so a token stays in one TSV field.
fn escape_tsv(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('\t', "\\t")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}
