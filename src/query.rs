//! Line-oriented batch queries: `R C Gr Gc Lr Lc` in, one result per line out.

use crate::board::BoardError;
use crate::distance::{knight_distance_raw, Distance};
use std::io::{BufRead, Write};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("expected 6 integers, found {found}")]
    FieldCount { found: usize },
    #[error("field {index} ({text:?}) is not an integer")]
    NotAnInteger { index: usize, text: String },
    #[error(transparent)]
    Board(#[from] BoardError),
}

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("line {line}: {source}")]
    Query {
        line: usize,
        #[source]
        source: QueryError,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// One distance query, exactly as read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query {
    pub rows: i64,
    pub cols: i64,
    pub source_row: i64,
    pub source_col: i64,
    pub target_row: i64,
    pub target_col: i64,
}

impl Query {
    pub fn evaluate(&self) -> Result<Distance, QueryError> {
        Ok(knight_distance_raw(
            self.rows,
            self.cols,
            self.source_row,
            self.source_col,
            self.target_row,
            self.target_col,
        )?)
    }
}

impl FromStr for Query {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(QueryError::FieldCount {
                found: fields.len(),
            });
        }
        let mut v = [0i64; 6];
        for (index, (slot, text)) in v.iter_mut().zip(&fields).enumerate() {
            *slot = text.parse().map_err(|_| QueryError::NotAnInteger {
                index: index + 1,
                text: text.to_string(),
            })?;
        }
        Ok(Query {
            rows: v[0],
            cols: v[1],
            source_row: v[2],
            source_col: v[3],
            target_row: v[4],
            target_col: v[5],
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    pub answered: usize,
    pub unreachable: usize,
}

/// Answer every non-blank line of `input`, writing one token per line to
/// `output`. Stops at the first malformed line.
pub fn run_batch<R: BufRead, W: Write>(input: R, mut output: W) -> Result<BatchStats, BatchError> {
    let mut stats = BatchStats::default();
    for (i, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let answer = line
            .parse::<Query>()
            .and_then(|q| q.evaluate())
            .map_err(|source| BatchError::Query { line: i + 1, source })?;
        writeln!(output, "{answer}")?;
        stats.answered += 1;
        if !answer.is_reachable() {
            stats.unreachable += 1;
        }
    }
    output.flush()?;
    log::debug!(
        "answered {} queries ({} impossible)",
        stats.answered,
        stats.unreachable
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_integers() {
        let q: Query = "8 8  1 1\t2 2".parse().unwrap();
        assert_eq!(q.rows, 8);
        assert_eq!(q.target_col, 2);
        assert_eq!(q.evaluate(), Ok(Distance::Moves(4)));
    }

    #[test]
    fn rejects_malformed_lines() {
        assert_eq!(
            "8 8 1 1 2".parse::<Query>(),
            Err(QueryError::FieldCount { found: 5 })
        );
        assert!(matches!(
            "8 8 1 x 2 2".parse::<Query>(),
            Err(QueryError::NotAnInteger { index: 4, .. })
        ));
    }

    #[test]
    fn batch_writes_one_token_per_line() {
        let input = "8 8 1 1 2 2\n\n3 3 2 2 1 1\n3 3 1 1 1 1\n";
        let mut out = Vec::new();
        let stats = run_batch(input.as_bytes(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "4\nimpossible\n0\n");
        assert_eq!(
            stats,
            BatchStats {
                answered: 3,
                unreachable: 1
            }
        );
    }

    #[test]
    fn batch_reports_the_failing_line() {
        let input = "8 8 1 1 2 2\n0 8 1 1 1 1\n";
        let err = run_batch(input.as_bytes(), Vec::new()).unwrap_err();
        assert!(matches!(err, BatchError::Query { line: 2, .. }));
    }
}
