use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid number '{token}' at {path}:{line}")]
    Parse {
        path: String,
        line: usize,
        token: String,
    },

    #[error("Row at {path}:{line} has {found} column(s), expected {expected}")]
    RaggedRow {
        path: String,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Table '{path}' contains no data rows")]
    Empty { path: String },

    #[error("Table '{path}' has {found} column(s), but column {index} was requested")]
    MissingColumn {
        path: String,
        index: usize,
        found: usize,
    },
}

/// A whitespace-delimited numeric table read fully into memory.
///
/// Parsing follows the conventions of the `.dat` files these figures are
/// built from: blank lines are skipped, `#` starts a comment (either a whole
/// line or a trailing one), every data row must have the same number of
/// columns, and every field must parse as `f64`.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericTable {
    path: String,
    columns: usize,
    rows: Vec<Vec<f64>>,
}

impl NumericTable {
    pub fn load(path: &Path) -> Result<Self, TableError> {
        let display = path.to_string_lossy().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| TableError::Io {
            path: display.clone(),
            source: e,
        })?;
        Self::parse(&display, &content)
    }

    fn parse(display: &str, content: &str) -> Result<Self, TableError> {
        let mut columns = 0;
        let mut rows = Vec::new();

        for (line_no, raw) in content.lines().enumerate() {
            let line = match raw.find('#') {
                Some(pos) => &raw[..pos],
                None => raw,
            };
            if line.trim().is_empty() {
                continue;
            }

            let mut row = Vec::with_capacity(columns.max(2));
            for token in line.split_whitespace() {
                let value = token.parse::<f64>().map_err(|_| TableError::Parse {
                    path: display.to_string(),
                    line: line_no + 1,
                    token: token.to_string(),
                })?;
                row.push(value);
            }

            if rows.is_empty() {
                columns = row.len();
            } else if row.len() != columns {
                return Err(TableError::RaggedRow {
                    path: display.to_string(),
                    line: line_no + 1,
                    expected: columns,
                    found: row.len(),
                });
            }
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(TableError::Empty {
                path: display.to_string(),
            });
        }

        Ok(Self {
            path: display.to_string(),
            columns,
            rows,
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns
    }

    /// Returns the values of one column, in row order.
    pub fn column(&self, index: usize) -> Result<Vec<f64>, TableError> {
        if index >= self.columns {
            return Err(TableError::MissingColumn {
                path: self.path.clone(),
                index,
                found: self.columns,
            });
        }
        Ok(self.rows.iter().map(|row| row[index]).collect())
    }

    /// Iterates over `(column a, column b)` pairs without allocating.
    pub fn column_pair(
        &self,
        a: usize,
        b: usize,
    ) -> Result<impl Iterator<Item = (f64, f64)> + '_, TableError> {
        let max = a.max(b);
        if max >= self.columns {
            return Err(TableError::MissingColumn {
                path: self.path.clone(),
                index: max,
                found: self.columns,
            });
        }
        Ok(self.rows.iter().map(move |row| (row[a], row[b])))
    }

    /// Minimum value of one column. Tables are never empty after a
    /// successful load, so this only fails for an out-of-range column.
    pub fn column_min(&self, index: usize) -> Result<f64, TableError> {
        Ok(self.column(index)?.into_iter().fold(f64::INFINITY, f64::min))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn load_parses_whitespace_delimited_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("curve.dat");
        fs::write(&path, "10.0 1.5\n20.0\t2.5\n  30.0   3.5\n").unwrap();

        let table = NumericTable::load(&path).unwrap();
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.column(0).unwrap(), vec![10.0, 20.0, 30.0]);
        assert_eq!(table.column(1).unwrap(), vec![1.5, 2.5, 3.5]);
    }

    #[test]
    fn load_skips_comments_and_blank_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("curve.dat");
        fs::write(&path, "# header\n\n1.0 2.0 # trailing\n\n3.0 4.0\n").unwrap();

        let table = NumericTable::load(&path).unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column(0).unwrap(), vec![1.0, 3.0]);
    }

    #[test]
    fn load_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let result = NumericTable::load(&dir.path().join("absent.dat"));
        assert!(matches!(result, Err(TableError::Io { .. })));
    }

    #[test]
    fn load_fails_for_non_numeric_token() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.dat");
        fs::write(&path, "1.0 2.0\n3.0 oops\n").unwrap();

        let result = NumericTable::load(&path);
        assert!(
            matches!(result, Err(TableError::Parse { line: 2, ref token, .. }) if token == "oops")
        );
    }

    #[test]
    fn load_fails_for_ragged_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ragged.dat");
        fs::write(&path, "1.0 2.0\n3.0\n").unwrap();

        let result = NumericTable::load(&path);
        assert!(matches!(
            result,
            Err(TableError::RaggedRow {
                line: 2,
                expected: 2,
                found: 1,
                ..
            })
        ));
    }

    #[test]
    fn load_fails_for_table_with_no_data() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.dat");
        fs::write(&path, "# only comments\n\n").unwrap();

        let result = NumericTable::load(&path);
        assert!(matches!(result, Err(TableError::Empty { .. })));
    }

    #[test]
    fn column_out_of_range_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("narrow.dat");
        fs::write(&path, "1.0 2.0\n").unwrap();

        let table = NumericTable::load(&path).unwrap();
        let result = table.column(2);
        assert!(matches!(
            result,
            Err(TableError::MissingColumn {
                index: 2,
                found: 2,
                ..
            })
        ));
    }

    #[test]
    fn column_min_finds_the_smallest_value() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("min.dat");
        fs::write(&path, "3.0 0.0\n-7.5 0.0\n2.0 0.0\n").unwrap();

        let table = NumericTable::load(&path).unwrap();
        assert_eq!(table.column_min(0).unwrap(), -7.5);
    }
}
