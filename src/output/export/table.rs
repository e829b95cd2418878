//! Row-aligned export table
//!
//! The table is stored as an `ndarray::Array2<f64>` of shape
//! `[time_points × (1 + depths)]`: column 0 holds the time grid, column
//! `j + 1` the `j`-th series in insertion order.

use indexmap::IndexMap;
use ndarray::{s, Array2, ArrayView1};

use super::ExportError;
use crate::physics::{ConcentrationSeries, TimeGrid};
use crate::solver::SimulationResult;

/// Header of the time column
pub const TIME_HEADER: &str = "Time (days)";

/// Column-oriented table: one time column plus one column per labeled series
#[derive(Debug, Clone, PartialEq)]
pub struct ExportTable {
    time_header: String,
    labels: Vec<String>,
    data: Array2<f64>,
}

impl ExportTable {
    /// Assemble the table from a time grid and labeled series
    ///
    /// # Errors
    ///
    /// - [`ExportError::EmptyLabel`] for an empty column label
    /// - [`ExportError::LengthMismatch`] when a series does not have exactly
    ///   one value per time point (never truncated or padded)
    /// - [`ExportError::NonFinite`] for NaN or infinite values
    pub fn from_columns(
        grid: &TimeGrid,
        columns: &IndexMap<String, ConcentrationSeries>,
    ) -> Result<Self, ExportError> {
        let rows = grid.len();
        let mut data = Array2::<f64>::zeros((rows, columns.len() + 1));
        data.column_mut(0).assign(&ArrayView1::from(grid.as_slice()));

        for (j, (label, series)) in columns.iter().enumerate() {
            if label.trim().is_empty() {
                return Err(ExportError::EmptyLabel);
            }
            if series.len() != rows {
                return Err(ExportError::LengthMismatch {
                    label: label.clone(),
                    expected: rows,
                    actual: series.len(),
                });
            }
            if let Some(row) = series.iter().position(|c| !c.is_finite()) {
                return Err(ExportError::NonFinite { label: label.clone(), row });
            }
            data.column_mut(j + 1).assign(&ArrayView1::from(series.as_slice()));
        }

        Ok(Self {
            time_header: TIME_HEADER.to_string(),
            labels: columns.keys().cloned().collect(),
            data,
        })
    }

    /// Assemble the table from every series of a simulation result
    pub fn from_result(result: &SimulationResult) -> Result<Self, ExportError> {
        Self::from_columns(&result.time_grid, &result.series_map())
    }

    /// Builder pattern: replace the time column header
    pub fn with_time_header(mut self, header: impl Into<String>) -> Self {
        self.time_header = header.into();
        self
    }

    /// Header row: time header followed by the series labels
    pub fn headers(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.time_header.as_str()).chain(self.labels.iter().map(String::as_str))
    }

    /// Series labels in column order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of data rows (time points)
    pub fn n_rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns including the time column
    pub fn n_columns(&self) -> usize {
        self.data.ncols()
    }

    /// Time column
    pub fn times(&self) -> ArrayView1<'_, f64> {
        self.data.column(0)
    }

    /// Column of the series with `label`
    pub fn column(&self, label: &str) -> Option<ArrayView1<'_, f64>> {
        self.labels
            .iter()
            .position(|l| l == label)
            .map(|j| self.data.column(j + 1))
    }

    /// Iterate over rows: `[time, c₁, c₂, ...]`
    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, f64>> {
        self.data.rows().into_iter()
    }

    /// Concentration block without the time column
    pub fn concentrations(&self) -> ndarray::ArrayView2<'_, f64> {
        self.data.slice(s![.., 1..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::DepthSeries;

    fn grid() -> TimeGrid {
        TimeGrid::from_points(vec![1.0, 2.0, 3.0]).unwrap()
    }

    #[test]
    fn test_table_layout() {
        let mut columns = IndexMap::new();
        columns.insert("Depth 50 cm".to_string(), ConcentrationSeries::from_vec(vec![0.1, 0.2, 0.3]));
        columns.insert("Depth 10 cm".to_string(), ConcentrationSeries::from_vec(vec![1.0, 2.0, 3.0]));

        let table = ExportTable::from_columns(&grid(), &columns).unwrap();

        assert_eq!(table.n_rows(), 3);
        assert_eq!(table.n_columns(), 3);
        let headers: Vec<&str> = table.headers().collect();
        assert_eq!(headers, vec!["Time (days)", "Depth 50 cm", "Depth 10 cm"]);
        assert_eq!(table.times().to_vec(), vec![1.0, 2.0, 3.0]);
        assert_eq!(table.column("Depth 10 cm").unwrap().to_vec(), vec![1.0, 2.0, 3.0]);
        assert!(table.column("Depth 90 cm").is_none());

        let second_row = table.rows().nth(1).unwrap().to_vec();
        assert_eq!(second_row, vec![2.0, 0.2, 2.0]);
        assert_eq!(table.concentrations().dim(), (3, 2));
    }

    #[test]
    fn test_table_without_series_has_time_column_only() {
        let table = ExportTable::from_columns(&grid(), &IndexMap::new()).unwrap();
        assert_eq!(table.n_columns(), 1);
        assert!(table.labels().is_empty());
    }

    #[test]
    fn test_table_rejects_length_mismatch() {
        let mut columns = IndexMap::new();
        columns.insert("Depth 10 cm".to_string(), ConcentrationSeries::from_vec(vec![1.0, 2.0, 3.0, 4.0]));

        let err = ExportTable::from_columns(&grid(), &columns).unwrap_err();
        match err {
            ExportError::LengthMismatch { label, expected, actual } => {
                assert_eq!(label, "Depth 10 cm");
                assert_eq!(expected, 3);
                assert_eq!(actual, 4);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_table_rejects_nan_and_empty_label() {
        let mut columns = IndexMap::new();
        columns.insert("Depth 10 cm".to_string(), ConcentrationSeries::from_vec(vec![1.0, f64::NAN, 3.0]));
        assert!(matches!(
            ExportTable::from_columns(&grid(), &columns),
            Err(ExportError::NonFinite { row: 1, .. })
        ));

        let mut columns = IndexMap::new();
        columns.insert("  ".to_string(), ConcentrationSeries::from_vec(vec![1.0, 2.0, 3.0]));
        assert!(matches!(
            ExportTable::from_columns(&grid(), &columns),
            Err(ExportError::EmptyLabel)
        ));
    }

    #[test]
    fn test_table_from_result() {
        let result = SimulationResult::new(
            grid(),
            vec![DepthSeries::new(30.0, ConcentrationSeries::from_vec(vec![4.0, 5.0, 6.0]))],
            "Test",
        );
        let table = ExportTable::from_result(&result).unwrap().with_time_header("t");
        let headers: Vec<&str> = table.headers().collect();
        assert_eq!(headers, vec!["t", "Depth 30 cm"]);
    }
}
