//! Rendering of command results.
//!
//! Results go to stdout in the requested [`OutputFormat`]; notices carry a
//! colored marker, and warnings and errors go to stderr.

use std::io::{self, Write};

use colored::{ColoredString, Colorize};
use serde::Serialize;
use tabled::settings::{object::Columns, Alignment, Style};
use tabled::{Table, Tabled};

use crate::cli::OutputFormat;

/// Kind of a one-line notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Success,
    Info,
    Warning,
    Error,
}

impl Notice {
    fn marker(self) -> ColoredString {
        match self {
            Notice::Success => "✓".green(),
            Notice::Info => "ℹ".blue(),
            Notice::Warning => "⚠".yellow(),
            Notice::Error => "✗".red(),
        }
    }
}

/// Prints a notice line.
pub fn notice(kind: Notice, message: &str) {
    match kind {
        Notice::Warning | Notice::Error => eprintln!("{} {message}", kind.marker()),
        Notice::Success | Notice::Info => println!("{} {message}", kind.marker()),
    }
}

/// Prints a section title above a table.
pub fn heading(title: &str) {
    println!("\n{}", title.bold().underline());
}

/// Renders rows in `format`.
///
/// `Minimal` writes tab-separated values without a header.
pub fn render<T: Serialize + Tabled>(rows: &[T], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table if rows.is_empty() => println!("Nenhum resultado."),
        OutputFormat::Table => {
            let mut table = Table::new(rows);
            table
                .with(Style::rounded())
                .modify(Columns::first(), Alignment::left());
            println!("{table}");
        }
        OutputFormat::Json => print_json(rows)?,
        OutputFormat::Csv => write_delimited(rows, io::stdout().lock(), b',', true)?,
        OutputFormat::Minimal => write_delimited(rows, io::stdout().lock(), b'\t', false)?,
    }
    Ok(())
}

/// Prints any serializable value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn write_delimited<T: Serialize, W: Write>(
    rows: &[T],
    writer: W,
    delimiter: u8,
    headers: bool,
) -> anyhow::Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(headers)
        .from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Row {
        term: u32,
        payment: String,
    }

    fn delimited(delimiter: u8, headers: bool) -> String {
        let rows = [
            Row { term: 6, payment: "2100.00".into() },
            Row { term: 12, payment: "1134.72".into() },
        ];
        let mut buf = Vec::new();
        write_delimited(&rows, &mut buf, delimiter, headers).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_csv_has_header() {
        assert_eq!(delimited(b',', true), "term,payment\n6,2100.00\n12,1134.72\n");
    }

    #[test]
    fn test_minimal_is_headerless_tsv() {
        assert_eq!(delimited(b'\t', false), "6\t2100.00\n12\t1134.72\n");
    }
}
