use thiserror::Error;

// ---------------------------------------------------------------------------
// ConditionSeries – one parsed condition file
// ---------------------------------------------------------------------------

/// The two columns of one condition file: tilt angles and measured coupling
/// values, in file order and of equal length.
#[derive(Debug, Clone)]
pub struct ConditionSeries {
    /// Normalized-thickness key this series was loaded for.
    pub key: f64,
    /// Tilt angle of each record (degrees).
    pub angles: Vec<f64>,
    /// Measured coupling value of each record – same length as `angles`.
    pub values: Vec<f64>,
}

impl ConditionSeries {
    /// Number of records in the series.
    pub fn len(&self) -> usize {
        self.angles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }
}

// ---------------------------------------------------------------------------
// GridError
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum GridError {
    #[error("no condition series to assemble")]
    Empty,

    #[error("condition {key}: file contains no records")]
    NoRecords { key: f64 },

    #[error("condition {key}: {values} values for {angles} angles")]
    Ragged { key: f64, angles: usize, values: usize },

    #[error(
        "condition {key}: angle axis has {actual} samples, expected {expected} \
         (all files must share the first file's angle axis)"
    )]
    LengthMismatch {
        key: f64,
        expected: usize,
        actual: usize,
    },

    #[error(
        "condition {key}: angle axis differs from the first file at sample {index} \
         ({actual} vs {expected})"
    )]
    AngleMismatch {
        key: f64,
        index: usize,
        expected: f64,
        actual: f64,
    },
}

// ---------------------------------------------------------------------------
// HeatmapGrid – the assembled value matrix plus its coordinate axes
// ---------------------------------------------------------------------------

/// Rectangular grid of coupling values: one row per condition key, one column
/// per sample of the shared angle axis. Immutable after assembly.
#[derive(Debug, Clone)]
pub struct HeatmapGrid {
    keys: Vec<f64>,
    angles: Vec<f64>,
    rows: Vec<Vec<f64>>,
}

impl HeatmapGrid {
    /// Assemble the grid from the loaded series, in series order.
    ///
    /// The angle axis is taken from the first series; every other series must
    /// carry the identical axis (length and values), otherwise the grid would
    /// silently misplace its samples.
    pub fn assemble(series: Vec<ConditionSeries>) -> Result<Self, GridError> {
        let Some(first) = series.first() else {
            return Err(GridError::Empty);
        };
        let angles = first.angles.clone();

        let mut keys = Vec::with_capacity(series.len());
        let mut rows = Vec::with_capacity(series.len());
        for s in &series {
            if s.is_empty() {
                return Err(GridError::NoRecords { key: s.key });
            }
            if s.values.len() != s.angles.len() {
                return Err(GridError::Ragged {
                    key: s.key,
                    angles: s.angles.len(),
                    values: s.values.len(),
                });
            }
            if s.angles.len() != angles.len() {
                return Err(GridError::LengthMismatch {
                    key: s.key,
                    expected: angles.len(),
                    actual: s.angles.len(),
                });
            }
            if let Some(index) = s.angles.iter().zip(&angles).position(|(a, b)| a != b) {
                return Err(GridError::AngleMismatch {
                    key: s.key,
                    index,
                    expected: angles[index],
                    actual: s.angles[index],
                });
            }
            keys.push(s.key);
            rows.push(s.values.clone());
        }

        Ok(HeatmapGrid { keys, angles, rows })
    }

    /// Number of rows (condition keys).
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (samples along the angle axis).
    pub fn n_cols(&self) -> usize {
        self.angles.len()
    }

    pub fn keys(&self) -> &[f64] {
        &self.keys
    }

    pub fn angles(&self) -> &[f64] {
        &self.angles
    }

    pub fn value_at(&self, row: usize, col: usize) -> f64 {
        self.rows[row][col]
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.rows[row]
    }

    /// (min, max) of the condition keys, regardless of their row order.
    pub fn key_span(&self) -> (f64, f64) {
        span(&self.keys)
    }

    /// (min, max) of the angle axis.
    pub fn angle_span(&self) -> (f64, f64) {
        span(&self.angles)
    }

    /// The coordinate mesh: X holds each key repeated across its row, Y holds
    /// the angle axis repeated per row. Both are shaped (n_rows, n_cols).
    pub fn mesh(&self) -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
        let xs = self
            .keys
            .iter()
            .map(|&k| vec![k; self.angles.len()])
            .collect();
        let ys = self.keys.iter().map(|_| self.angles.clone()).collect();
        (xs, ys)
    }

    /// Bilinearly interpolated value at an arbitrary (key, angle) point.
    /// Points outside the grid hull clamp to the nearest edge.
    pub fn sample(&self, key: f64, angle: f64) -> f64 {
        let (r0, r1, tr) = bracket(&self.keys, key);
        let (c0, c1, tc) = bracket(&self.angles, angle);

        let near = lerp(self.rows[r0][c0], self.rows[r0][c1], tc);
        let far = lerp(self.rows[r1][c0], self.rows[r1][c1], tc);
        lerp(near, far, tr)
    }
}

fn span(axis: &[f64]) -> (f64, f64) {
    let min = axis.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = axis.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    (min, max)
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Locate the axis segment bracketing `x` and the position within it.
///
/// Works for ascending and descending monotonic axes; the fraction is
/// clamped so out-of-hull points land on the nearest edge.
fn bracket(axis: &[f64], x: f64) -> (usize, usize, f64) {
    if axis.len() < 2 {
        return (0, 0, 0.0);
    }
    let ascending = axis[0] <= axis[axis.len() - 1];
    let after = if ascending {
        axis.partition_point(|&a| a <= x)
    } else {
        axis.partition_point(|&a| a >= x)
    };
    let i = after.clamp(1, axis.len() - 1) - 1;

    let (a, b) = (axis[i], axis[i + 1]);
    let denom = b - a;
    let t = if denom.abs() < f64::EPSILON {
        0.0
    } else {
        ((x - a) / denom).clamp(0.0, 1.0)
    };
    (i, i + 1, t)
}
