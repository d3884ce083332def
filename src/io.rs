//! Line-based ingestion and serialization.
//!
//! Input lines read `item1<sep>item2<sep>...: p1<sep>p2<sep>...`, output lines
//! `item1<sep>item2<sep>...:support`.

use crate::config::MinerConfig;
use crate::error::{PufError, Result};
use crate::puf::{Item, Transaction, UncertainDatabase, UncertainPatterns};
use std::fmt::Display;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

fn split_tokens<'a>(field: &'a str, separator: &'a str) -> impl Iterator<Item = &'a str> {
    field
        .split(separator)
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

fn parse_line(line: &str, line_no: usize, separator: &str) -> Result<Transaction<String>> {
    let parse_error = |message: String| PufError::Parse {
        line: line_no,
        message,
    };

    let (items, probabilities) = line
        .split_once(':')
        .ok_or_else(|| parse_error("missing ':' between items and probabilities".to_string()))?;

    let labels: Vec<&str> = split_tokens(items, separator).collect();
    let probabilities = split_tokens(probabilities, separator)
        .map(|token| {
            let probability = token
                .parse::<f64>()
                .map_err(|e| parse_error(format!("invalid probability {token:?}: {e}")))?;
            if !(0.0..=1.0).contains(&probability) {
                return Err(parse_error(format!("probability {probability} outside [0, 1]")));
            }
            Ok(probability)
        })
        .collect::<Result<Vec<f64>>>()?;

    if labels.len() != probabilities.len() {
        return Err(parse_error(format!(
            "{} items but {} probabilities",
            labels.len(),
            probabilities.len()
        )));
    }

    Ok(labels
        .into_iter()
        .zip(probabilities)
        .map(|(label, probability)| Item::new(label.to_string(), probability))
        .collect())
}

/// Reads an uncertain database. Blank lines are skipped.
pub fn read_transactions<R: BufRead>(reader: R, separator: &str) -> Result<UncertainDatabase<String>> {
    let mut database = UncertainDatabase::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        database.push(parse_line(line, idx + 1, separator)?);
    }

    debug!(transactions = database.len(), "read uncertain database");
    Ok(database)
}

pub fn read_transactions_from_path(
    path: impl AsRef<Path>,
    separator: &str,
) -> Result<UncertainDatabase<String>> {
    let file = File::open(path.as_ref())?;
    read_transactions(BufReader::new(file), separator)
}

/// Writes one line per pattern in the order the patterns were found.
pub fn write_patterns<W, L>(mut writer: W, patterns: &UncertainPatterns<L>, separator: &str) -> Result<()>
where
    W: Write,
    L: Display,
{
    for pattern in patterns {
        let items: Vec<String> = pattern.items.iter().map(ToString::to_string).collect();
        writeln!(writer, "{}:{}", items.join(separator), pattern.support)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn save_patterns<L: Display>(
    path: impl AsRef<Path>,
    patterns: &UncertainPatterns<L>,
    separator: &str,
) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_patterns(BufWriter::new(file), patterns, separator)
}

/// Reads a database using the separator of `config`.
pub fn load_database(path: impl AsRef<Path>, config: &MinerConfig) -> Result<UncertainDatabase<String>> {
    read_transactions_from_path(path, &config.separator)
}

/// Saves patterns using the separator of `config`.
pub fn export_patterns<L: Display>(
    path: impl AsRef<Path>,
    patterns: &UncertainPatterns<L>,
    config: &MinerConfig,
) -> Result<()> {
    save_patterns(path, patterns, &config.separator)
}
