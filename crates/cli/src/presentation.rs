// crates/cli/src/presentation.rs
use crate::config::Config;
use crate::error::Result;
use occurs_core::FrequencyTable;
use occurs_engine::error::EngineError;
use occurs_engine::options::OutputFormat;
use serde::Serializer;
use std::io::Write;

/// Writes `table` to `out` in the configured format.
///
/// Entries are unordered unless `config.sort` is set.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_results<W: Write>(out: &mut W, table: FrequencyTable, config: &Config) -> Result<()> {
    if config.format == OutputFormat::Json && !config.sort {
        serde_json::to_writer_pretty(&mut *out, &table)?;
        writeln!(out)?;
        out.flush()?;
        return Ok(());
    }

    let entries: Vec<(String, u64)> = if config.sort {
        table.into_sorted_vec()
    } else {
        table.into_iter().collect()
    };

    match config.format {
        OutputFormat::Plain => print_plain(out, &entries)?,
        OutputFormat::Columns => print_columns(out, &entries)?,
        OutputFormat::Json => print_sorted_json(out, &entries)?,
    }
    out.flush()?;
    Ok(())
}

fn print_plain<W: Write>(out: &mut W, entries: &[(String, u64)]) -> std::io::Result<()> {
    for (line, count) in entries {
        writeln!(out, "{count} {line}")?;
    }
    Ok(())
}

/// Counts are right-aligned to the widest count; lines are written verbatim.
fn print_columns<W: Write>(out: &mut W, entries: &[(String, u64)]) -> std::io::Result<()> {
    let width = entries
        .iter()
        .map(|(_, count)| count.to_string().len())
        .max()
        .unwrap_or(0);

    for (line, count) in entries {
        writeln!(out, "{count:>width$} {line}")?;
    }
    Ok(())
}

/// A plain map would lose the sort, so entries are streamed in order.
fn print_sorted_json<W: Write>(out: &mut W, entries: &[(String, u64)]) -> Result<()> {
    let mut ser = serde_json::Serializer::pretty(&mut *out);
    (&mut ser).collect_map(entries.iter().map(|(line, count)| (line, count)))?;
    writeln!(out)?;
    Ok(())
}

/// Reports per-input failures on stderr without stopping the run.
pub fn print_errors(errors: &[(String, EngineError)]) {
    for (label, err) in errors {
        match err {
            EngineError::Open { source, .. } => {
                eprintln!("Skipping {label:?} because of error: {source}");
            }
            other => eprintln!("Error while counting from {label}: {other}"),
        }
    }
}
