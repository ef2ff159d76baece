//! Loading candidate datasets from text files
//!
//! A dataset file holds up to [`MAX_DATASETS`] datasets, one per line,
//! integers separated by whitespace. Each token is converted with `atoi`
//! semantics: the leading optionally-signed run of digits is the value
//! (`"12ab"` is `12`), and a token with no such prefix counts as `0` and
//! is logged at `warn` level.
//!
//! The loader is deliberately a dumb tokenizer: it does not enforce the
//! heap capacity limit. Feeding an oversized dataset to
//! [`DaryHeap::from_vec`](crate::DaryHeap::from_vec) reports
//! [`HeapError::CapacityExceeded`](crate::HeapError::CapacityExceeded)
//! there.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

/// Maximum number of datasets read from a single file; extra lines are
/// silently ignored.
pub const MAX_DATASETS: usize = 10;

/// Error type for dataset loading
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),
}

/// Reads up to [`MAX_DATASETS`] datasets from the file at `path`.
///
/// Empty lines produce empty datasets; they are kept so that line numbers
/// in the file line up with dataset numbers shown to the user.
pub fn read_datasets<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<i64>>, LoadError> {
    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);

    let mut datasets = Vec::new();
    for line in reader.lines() {
        if datasets.len() == MAX_DATASETS {
            break;
        }
        let line = line?;
        let values = parse_line(&line);
        datasets.push(values);
    }
    Ok(datasets)
}

/// Tokenizes one line into integers with `atoi` semantics
fn parse_line(line: &str) -> Vec<i64> {
    line.split_whitespace()
        .map(|token| {
            leading_int(token)
                .and_then(|prefix| prefix.parse::<i64>().ok())
                .unwrap_or_else(|| {
                    log::warn!("non-numeric token {:?} treated as 0", token);
                    0
                })
        })
        .collect()
}

/// Returns the longest `[+-]?[0-9]+` prefix of `token`, `None` if it has
/// no digits to start with
fn leading_int(token: &str) -> Option<&str> {
    let digits_start = usize::from(matches!(token.as_bytes().first(), Some(b'+' | b'-')));
    let digits_end = token[digits_start..]
        .find(|ch: char| !ch.is_ascii_digit())
        .map_or(token.len(), |offset| digits_start + offset);
    (digits_end > digits_start).then(|| &token[..digits_end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_line_basic() {
        assert_eq!(parse_line("4 1 3 2 16"), vec![4, 1, 3, 2, 16]);
        assert_eq!(parse_line("-5 0 +7"), vec![-5, 0, 7]);
        assert_eq!(parse_line(""), Vec::<i64>::new());
    }

    #[test]
    fn test_parse_line_non_numeric_tokens_become_zero() {
        assert_eq!(parse_line("1 abc 3"), vec![1, 0, 3]);
        assert_eq!(parse_line("- + ---"), vec![0, 0, 0]);
    }

    #[test]
    fn test_parse_line_takes_leading_numeric_prefix() {
        assert_eq!(parse_line("12ab 7"), vec![12, 7]);
        assert_eq!(parse_line("-3x +5y5"), vec![-3, 5]);
        assert_eq!(parse_line("1.5"), vec![1]);
    }

    #[test]
    fn test_read_datasets_from_file() {
        let dir = std::env::temp_dir();
        let path = dir.join("dary_maxheap_loader_test.txt");
        {
            let mut f = File::create(&path).unwrap();
            writeln!(f, "4 1 3 2 16").unwrap();
            writeln!(f, "-1 -2 -3").unwrap();
            writeln!(f).unwrap();
            writeln!(f, "9").unwrap();
        }

        let datasets = read_datasets(&path).unwrap();
        assert_eq!(datasets.len(), 4);
        assert_eq!(datasets[0], vec![4, 1, 3, 2, 16]);
        assert_eq!(datasets[1], vec![-1, -2, -3]);
        assert!(datasets[2].is_empty());
        assert_eq!(datasets[3], vec![9]);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_read_datasets_caps_at_ten() {
        let dir = std::env::temp_dir();
        let path = dir.join("dary_maxheap_loader_cap_test.txt");
        {
            let mut f = File::create(&path).unwrap();
            for i in 0..15 {
                writeln!(f, "{}", i).unwrap();
            }
        }

        let datasets = read_datasets(&path).unwrap();
        assert_eq!(datasets.len(), MAX_DATASETS);
        assert_eq!(datasets[9], vec![9]);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_read_missing_file_is_an_error() {
        let result = read_datasets("/nonexistent/definitely-not-here.txt");
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
