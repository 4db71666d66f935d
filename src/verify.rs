//! Exhaustive comparison of the closed form against breadth-first search.
//!
//! Every board up to the configured size is checked from every source square.
//! Disagreements are collected, never raised, so one run lists all of them.

use crate::board::Board;
use crate::coord::Square;
use crate::distance::{knight_distance, Distance};
use crate::oracle::bfs_distances;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("{field} must be >= 1")]
    Invalid { field: &'static str },
}

/// Size bound for a verification run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VerifyConfig {
    /// Largest number of rows checked.
    pub max_rows: u32,
    /// Largest number of columns checked.
    pub max_cols: u32,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            max_rows: 15,
            max_cols: 15,
        }
    }
}

impl VerifyConfig {
    pub fn new(max_rows: u32, max_cols: u32) -> Self {
        Self { max_rows, max_cols }
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let bytes = std::fs::read(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let cfg: VerifyConfig =
            serde_json::from_slice(&bytes).map_err(|source| ConfigError::Json {
                path: path.display().to_string(),
                source,
            })?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_rows == 0 {
            return Err(ConfigError::Invalid { field: "max_rows" });
        }
        if self.max_cols == 0 {
            return Err(ConfigError::Invalid { field: "max_cols" });
        }
        Ok(())
    }
}

/// A target square where the closed form and the search disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    pub square: Square,
    pub computed: Distance,
    pub expected: Distance,
}

/// All mismatches for one board and source square.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceReport {
    pub board: Board,
    pub source: Square,
    pub mismatches: Vec<Mismatch>,
}

impl SourceReport {
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
    }
}

impl fmt::Display for SourceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "=== Mistakes for board {} from start {} ===",
            self.board, self.source
        )?;
        for m in &self.mismatches {
            writeln!(
                f,
                "Cell ({},{}): calc={}, bfs={}",
                m.square.row, m.square.col, m.computed, m.expected
            )?;
        }
        Ok(())
    }
}

/// Outcome of [`verify_all`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct VerifySummary {
    pub boards: u64,
    pub sources: u64,
    pub cells: u64,
    /// Only sources with at least one mismatch.
    pub reports: Vec<SourceReport>,
}

impl VerifySummary {
    pub fn mismatch_count(&self) -> usize {
        self.reports.iter().map(|r| r.mismatches.len()).sum()
    }

    pub fn is_clean(&self) -> bool {
        self.reports.is_empty()
    }
}

/// Compare every target square on `board` from `source`.
pub fn verify_source(board: &Board, source: Square) -> SourceReport {
    let oracle = bfs_distances(board, source);
    let mismatches = board
        .squares()
        .filter_map(|sq| {
            let computed = knight_distance(board, source, sq);
            let expected = oracle.distance(sq);
            (computed != expected).then_some(Mismatch {
                square: sq,
                computed,
                expected,
            })
        })
        .collect();
    SourceReport {
        board: *board,
        source,
        mismatches,
    }
}

/// Check all boards `1..=max_rows x 1..=max_cols` from every source square.
pub fn verify_all(config: &VerifyConfig) -> VerifySummary {
    let mut summary = VerifySummary::default();

    for rows in 1..=config.max_rows {
        for cols in 1..=config.max_cols {
            let board = Board::new(rows, cols).expect("both ranges start at 1");
            summary.boards += 1;
            let before = summary.reports.len();

            for source in board.squares() {
                let report = verify_source(&board, source);
                summary.sources += 1;
                summary.cells += board.area() as u64;
                if !report.is_clean() {
                    summary.reports.push(report);
                }
            }

            let bad = summary.reports.len() - before;
            if bad > 0 {
                log::warn!("board {board}: {bad} source(s) with mismatches");
            } else {
                log::debug!("board {board}: ok");
            }
        }
    }

    log::debug!(
        "checked {} boards, {} sources, {} cells: {} mismatches",
        summary.boards,
        summary.sources,
        summary.cells,
        summary.mismatch_count()
    );
    summary
}
