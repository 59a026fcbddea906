use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

use super::model::{ConditionSeries, HeatmapGrid};
use crate::config::HeatmapConfig;

// ---------------------------------------------------------------------------
// LoadError
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{line}: expected two whitespace-separated values, found {found}")]
    ShortLine {
        path: PathBuf,
        line: usize,
        found: usize,
    },

    #[error("{path}:{line}: '{token}' is not a number")]
    BadNumber {
        path: PathBuf,
        line: usize,
        token: String,
    },
}

// ---------------------------------------------------------------------------
// Single-file loader
// ---------------------------------------------------------------------------

/// Parse one condition file into a [`ConditionSeries`].
///
/// Layout: one record per line, two whitespace-separated floats – tilt angle
/// first, coupling value second. Columns beyond the second are ignored. Any
/// blank or malformed line fails the whole load; there are no partial
/// results.
pub fn read_series(path: &Path, key: f64) -> Result<ConditionSeries, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut angles = Vec::new();
    let mut values = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let line_no = idx + 1;

        let mut tokens = line.split_whitespace();
        let (angle_tok, value_tok) = match (tokens.next(), tokens.next()) {
            (Some(a), Some(v)) => (a, v),
            (first, _) => {
                return Err(LoadError::ShortLine {
                    path: path.to_path_buf(),
                    line: line_no,
                    found: usize::from(first.is_some()),
                });
            }
        };

        angles.push(parse_field(angle_tok, path, line_no)?);
        values.push(parse_field(value_tok, path, line_no)?);
    }

    Ok(ConditionSeries { key, angles, values })
}

fn parse_field(token: &str, path: &Path, line: usize) -> Result<f64, LoadError> {
    token.parse::<f64>().map_err(|_| LoadError::BadNumber {
        path: path.to_path_buf(),
        line,
        token: token.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Full-sweep loading
// ---------------------------------------------------------------------------

/// Load every configured condition file, sequentially and in key order.
/// The first failure aborts the whole load.
pub fn load_conditions(config: &HeatmapConfig) -> Result<Vec<ConditionSeries>> {
    let mut series = Vec::with_capacity(config.condition_keys.len());
    for &key in &config.condition_keys {
        let path = config.path_for(key);
        let s = read_series(&path, key)
            .with_context(|| format!("loading condition {key} from {}", path.display()))?;
        log::debug!(
            "condition {key}: {} samples from {}",
            s.len(),
            path.display()
        );
        series.push(s);
    }
    Ok(series)
}

/// Load and assemble the full heatmap grid for `config`.
pub fn load_grid(config: &HeatmapConfig) -> Result<HeatmapGrid> {
    let series = load_conditions(config)?;
    HeatmapGrid::assemble(series).context("assembling heatmap grid")
}
