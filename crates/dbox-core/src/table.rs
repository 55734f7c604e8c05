//! Column boundaries and the row matrix produced by a parse.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Character offsets into a ruler line where each column's content ends.
///
/// Strictly increasing. The last offset is the ruler length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct ColumnBoundaries(Vec<usize>);

impl ColumnBoundaries {
    /// Build boundaries from cross offsets and the ruler length.
    ///
    /// Offsets exactly one apart collapse to the later one, so adjacent
    /// cross marks never produce a zero-width column.
    pub fn from_crosses(crosses: &[usize], end: usize) -> Self {
        let mut offsets: Vec<usize> = crosses.iter().copied().filter(|&o| o < end).collect();
        offsets.sort_unstable();
        offsets.dedup();
        offsets.push(end);

        let collapsed = offsets
            .iter()
            .enumerate()
            .filter(|&(i, &offset)| offsets.get(i + 1).map_or(true, |&next| next - offset != 1))
            .map(|(_, &offset)| offset)
            .collect();

        Self(collapsed)
    }

    /// Offsets as a slice.
    pub fn offsets(&self) -> &[usize] {
        &self.0
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no columns.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Half-open character spans `[start, end)` for every column.
    ///
    /// A column starts one past the previous boundary; the boundary
    /// character itself belongs to no column.
    pub fn spans(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0.iter().scan(0usize, |start, &end| {
            let span = (*start, end);
            *start = end + 1;
            Some(span)
        })
    }
}

/// Ordered rows of string fields. Row 0 is the header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct RowMatrix {
    rows: Vec<Vec<String>>,
}

impl RowMatrix {
    /// Create a matrix holding only a header row.
    pub fn new(header: Vec<String>) -> Self {
        Self { rows: vec![header] }
    }

    /// Create a matrix from raw rows; the first row is the header.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        if rows.is_empty() {
            return Self::default();
        }
        Self { rows }
    }

    /// Append a data row.
    pub fn push(&mut self, row: Vec<String>) {
        if self.rows.is_empty() {
            self.rows.push(Vec::new());
        }
        self.rows.push(row);
    }

    /// Header row.
    pub fn header(&self) -> &[String] {
        self.rows.first().map(Vec::as_slice).unwrap_or_default()
    }

    /// Data rows (everything after the header).
    pub fn data(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or_default()
    }

    /// All rows, header first.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows.
    pub fn data_len(&self) -> usize {
        self.data().len()
    }

    /// Number of columns in the header.
    pub fn width(&self) -> usize {
        self.header().len()
    }

    /// Check every row has the header's field count.
    pub fn is_rectangular(&self) -> bool {
        let width = self.width();
        self.rows.iter().all(|row| row.len() == width)
    }

    /// Index of a header column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header().iter().position(|h| h == name)
    }

    /// New matrix holding only the named columns, in the given order.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> crate::Result<Self> {
        let indices = names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.column_index(name)
                    .ok_or_else(|| crate::Error::UnknownColumn(name.to_string()))
            })
            .collect::<crate::Result<Vec<_>>>()?;

        let rows = self
            .rows
            .iter()
            .map(|row| {
                indices
                    .iter()
                    .map(|&i| row.get(i).cloned().unwrap_or_default())
                    .collect()
            })
            .collect();

        Ok(Self { rows })
    }

    /// Consume the matrix, returning all rows.
    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_boundaries_append_end() {
        let b = ColumnBoundaries::from_crosses(&[4, 17, 29], 38);
        assert_eq!(b.offsets(), &[4, 17, 29, 38]);
        assert_eq!(b.len(), 4);
    }

    #[test]
    fn test_adjacent_crosses_collapse() {
        let b = ColumnBoundaries::from_crosses(&[5, 6, 13, 14], 18);
        assert_eq!(b.offsets(), &[6, 14, 18]);
    }

    #[test]
    fn test_collapse_chain_keeps_last() {
        let b = ColumnBoundaries::from_crosses(&[3, 4, 5], 9);
        assert_eq!(b.offsets(), &[5, 9]);
    }

    #[test]
    fn test_trailing_cross_collapses_into_end() {
        let b = ColumnBoundaries::from_crosses(&[4, 9], 10);
        assert_eq!(b.offsets(), &[4, 10]);
    }

    #[test]
    fn test_no_crosses_single_column() {
        let b = ColumnBoundaries::from_crosses(&[], 8);
        assert_eq!(b.offsets(), &[8]);
    }

    #[test]
    fn test_spans_skip_boundary_character() {
        let b = ColumnBoundaries::from_crosses(&[4, 17], 25);
        let spans: Vec<_> = b.spans().collect();
        assert_eq!(spans, vec![(0, 4), (5, 17), (18, 25)]);
    }

    #[test]
    fn test_row_matrix_accessors() {
        let mut m = RowMatrix::new(row(&["id", "name"]));
        m.push(row(&["1", "alice"]));
        m.push(row(&["2", "bob"]));

        assert_eq!(m.header(), &row(&["id", "name"])[..]);
        assert_eq!(m.data_len(), 2);
        assert_eq!(m.width(), 2);
        assert_eq!(m.rows().len(), 3);
        assert!(m.is_rectangular());
    }

    #[test]
    fn test_row_matrix_detects_ragged_rows() {
        let mut m = RowMatrix::new(row(&["id", "name"]));
        m.push(row(&["1"]));
        assert!(!m.is_rectangular());
    }

    #[test]
    fn test_select_columns() {
        let mut m = RowMatrix::new(row(&["id", "date", "amount"]));
        m.push(row(&["1", "2010-09-01", "146035"]));

        let selected = m.select(&["amount", "id"]).unwrap();
        assert_eq!(selected.header(), &row(&["amount", "id"])[..]);
        assert_eq!(selected.data()[0], row(&["146035", "1"]));
    }

    #[test]
    fn test_select_unknown_column() {
        let m = RowMatrix::new(row(&["id"]));
        let err = m.select(&["nope"]).unwrap_err();
        assert!(matches!(err, crate::Error::UnknownColumn(name) if name == "nope"));
    }

    #[test]
    fn test_empty_matrix() {
        let m = RowMatrix::from_rows(vec![]);
        assert!(m.header().is_empty());
        assert!(m.data().is_empty());
        assert!(m.is_rectangular());
    }

    #[test]
    fn test_row_matrix_serializes_as_nested_arrays() {
        let mut m = RowMatrix::new(row(&["a"]));
        m.push(row(&["1"]));
        assert_eq!(serde_json::to_string(&m).unwrap(), r#"[["a"],["1"]]"#);
    }
}
