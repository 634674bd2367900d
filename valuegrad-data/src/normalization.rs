//! Column-wise feature scaling for row-major numeric data.
//!
//! Both scalers compute their statistics once and keep them so that rows seen
//! later (a test split, a single query) can be transformed the same way.
//! A column with zero spread produces `NaN` or `inf`, as IEEE division does.

use num_traits::{Float, FromPrimitive};
use valuegrad_core::ValueGradError;

/// Result of [`standardize`]: z-scores and the statistics used to compute them.
#[derive(Debug, Clone, PartialEq)]
pub struct Standardized<T> {
    /// Column sums.
    pub totals: Vec<T>,
    pub means: Vec<T>,
    /// Population standard deviation of each column.
    pub stds: Vec<T>,
    pub rows: Vec<Vec<T>>,
}

impl<T: Float> Standardized<T> {
    /// Applies `(x - mean) / std` column by column.
    ///
    /// # Errors
    /// `InputSizeMismatch` if `row` is not as wide as the fitted data.
    pub fn transform(&self, row: &[T]) -> Result<Vec<T>, ValueGradError> {
        check_width(self.means.len(), row.len(), "Standardized::transform")?;
        Ok(row
            .iter()
            .zip(self.means.iter().zip(&self.stds))
            .map(|(&x, (&mean, &std))| (x - mean) / std)
            .collect())
    }
}

/// Result of [`normalize_min_max`]: rows rescaled to `[0, 1]` per column.
#[derive(Debug, Clone, PartialEq)]
pub struct MinMaxScaled<T> {
    pub mins: Vec<T>,
    pub maxs: Vec<T>,
    pub rows: Vec<Vec<T>>,
}

impl<T: Float> MinMaxScaled<T> {
    /// Applies `(x - min) / (max - min)` column by column. Values outside the
    /// fitted range map outside `[0, 1]`.
    pub fn transform(&self, row: &[T]) -> Result<Vec<T>, ValueGradError> {
        check_width(self.mins.len(), row.len(), "MinMaxScaled::transform")?;
        Ok(row
            .iter()
            .zip(self.mins.iter().zip(&self.maxs))
            .map(|(&x, (&min, &max))| (x - min) / (max - min))
            .collect())
    }
}

/// Standardizes every column of `rows` to zero mean and unit variance.
///
/// # Errors
/// - `EmptyReduction` if `rows` is empty.
/// - `InputSizeMismatch` if the rows do not all have the same width.
pub fn standardize<T: Float + FromPrimitive>(rows: &[Vec<T>]) -> Result<Standardized<T>, ValueGradError> {
    let width = common_width(rows, "standardize")?;
    let count = T::from_usize(rows.len()).ok_or_else(|| {
        ValueGradError::ConversionError(format!("row count {} is not representable", rows.len()))
    })?;

    let mut totals = vec![T::zero(); width];
    for row in rows {
        for (total, &x) in totals.iter_mut().zip(row) {
            *total = *total + x;
        }
    }
    let means: Vec<T> = totals.iter().map(|&t| t / count).collect();

    let mut squared = vec![T::zero(); width];
    for row in rows {
        for ((acc, &x), &mean) in squared.iter_mut().zip(row).zip(&means) {
            let d = x - mean;
            *acc = *acc + d * d;
        }
    }
    let stds: Vec<T> = squared.iter().map(|&s| (s / count).sqrt()).collect();

    let mut scaled = Standardized {
        totals,
        means,
        stds,
        rows: Vec::with_capacity(rows.len()),
    };
    for row in rows {
        let z = scaled.transform(row)?;
        scaled.rows.push(z);
    }
    log::debug!("Standardized {} rows of width {}", rows.len(), width);
    Ok(scaled)
}

/// Rescales every column of `rows` linearly so its minimum maps to 0 and its
/// maximum to 1.
///
/// # Errors
/// Same as [`standardize`].
pub fn normalize_min_max<T: Float>(rows: &[Vec<T>]) -> Result<MinMaxScaled<T>, ValueGradError> {
    let width = common_width(rows, "normalize_min_max")?;
    let mut mins = vec![T::infinity(); width];
    let mut maxs = vec![T::neg_infinity(); width];
    for row in rows {
        for ((min, max), &x) in mins.iter_mut().zip(maxs.iter_mut()).zip(row) {
            *min = min.min(x);
            *max = max.max(x);
        }
    }

    let mut scaled = MinMaxScaled {
        mins,
        maxs,
        rows: Vec::with_capacity(rows.len()),
    };
    for row in rows {
        let r = scaled.transform(row)?;
        scaled.rows.push(r);
    }
    log::debug!("Min-max normalized {} rows of width {}", rows.len(), width);
    Ok(scaled)
}

fn common_width<T>(rows: &[Vec<T>], operation: &str) -> Result<usize, ValueGradError> {
    let first = rows.first().ok_or_else(|| ValueGradError::EmptyReduction {
        operation: operation.to_string(),
    })?;
    let width = first.len();
    for row in rows {
        check_width(width, row.len(), operation)?;
    }
    Ok(width)
}

fn check_width(expected: usize, actual: usize, operation: &str) -> Result<(), ValueGradError> {
    if expected != actual {
        return Err(ValueGradError::InputSizeMismatch {
            expected,
            actual,
            operation: operation.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_rows() -> Vec<Vec<f64>> {
        vec![vec![1.0, 10.0], vec![2.0, 20.0], vec![3.0, 60.0]]
    }

    #[test]
    fn test_standardize_statistics() {
        let result = standardize(&sample_rows()).unwrap();
        assert_eq!(result.totals, vec![6.0, 90.0]);
        assert_eq!(result.means, vec![2.0, 30.0]);
        assert_relative_eq!(result.stds[0], (2.0f64 / 3.0).sqrt());
        assert_relative_eq!(result.stds[1], (1400.0f64 / 3.0).sqrt());
        assert_eq!(result.rows.len(), 3);
        assert_relative_eq!(result.rows[1][0], 0.0);
        assert_relative_eq!(result.rows[2][0], 1.0 / (2.0f64 / 3.0).sqrt());
    }

    #[test]
    fn test_standardized_columns_have_zero_mean_unit_variance() {
        let result = standardize(&sample_rows()).unwrap();
        for col in 0..2 {
            let column: Vec<f64> = result.rows.iter().map(|r| r[col]).collect();
            let mean = column.iter().sum::<f64>() / 3.0;
            let var = column.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / 3.0;
            assert_relative_eq!(mean, 0.0, epsilon = 1e-12);
            assert_relative_eq!(var, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_min_max() {
        let result = normalize_min_max(&sample_rows()).unwrap();
        assert_eq!(result.mins, vec![1.0, 10.0]);
        assert_eq!(result.maxs, vec![3.0, 60.0]);
        assert_eq!(result.rows[0], vec![0.0, 0.0]);
        assert_eq!(result.rows[1], vec![0.5, 0.2]);
        assert_eq!(result.rows[2], vec![1.0, 1.0]);
        assert_eq!(result.transform(&[5.0, 35.0]).unwrap(), vec![2.0, 0.5]);
    }

    #[test]
    fn test_constant_column_is_not_trapped() {
        let rows = vec![vec![4.0], vec![4.0]];
        let z = standardize(&rows).unwrap();
        assert_eq!(z.stds, vec![0.0]);
        assert!(z.rows[0][0].is_nan());
        let m = normalize_min_max(&rows).unwrap();
        assert!(m.rows[1][0].is_nan());
    }

    #[test]
    fn test_empty_input() {
        let rows: Vec<Vec<f64>> = Vec::new();
        assert!(matches!(standardize(&rows), Err(ValueGradError::EmptyReduction { .. })));
        assert!(matches!(
            normalize_min_max(&rows),
            Err(ValueGradError::EmptyReduction { .. })
        ));
    }

    #[test]
    fn test_ragged_rows() {
        let rows = vec![vec![1.0, 2.0], vec![3.0]];
        assert_eq!(
            standardize(&rows),
            Err(ValueGradError::InputSizeMismatch {
                expected: 2,
                actual: 1,
                operation: "standardize".to_string(),
            })
        );
        let fitted = normalize_min_max(&sample_rows()).unwrap();
        assert!(fitted.transform(&[1.0]).is_err());
    }
}
