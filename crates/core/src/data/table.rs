use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use super::error::{TableError, TableResult};

/// Header a dataframe reader assigns to a blank first header cell
pub const INDEX_COLUMN_NAME: &str = "Unnamed: 0";

/// Whether the header at `position` is the exported row-index column
///
/// That column is written with a blank header, which dataframe readers name
/// `Unnamed: 0`; either spelling is accepted.
pub fn is_index_column(position: usize, header: &str) -> bool {
    let header = header.trim();
    header == INDEX_COLUMN_NAME || (position == 0 && header.is_empty())
}

/// In-memory moderator data with the index column removed
///
/// Cells are kept as the text that was in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeratorTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl ModeratorTable {
    /// Load a table from a comma-separated file
    ///
    /// # Errors
    /// - [`TableError::Io`] if the file cannot be opened
    /// - [`TableError::Csv`] if a record cannot be parsed (e.g. ragged rows)
    /// - [`TableError::MissingIndexColumn`] if there is no index column to drop
    pub fn load(path: impl AsRef<Path>) -> TableResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_reader(file)?;

        debug!(
            path = %path.display(),
            rows = table.row_count(),
            columns = table.column_count(),
            "loaded moderator table"
        );
        Ok(table)
    }

    /// Parse a table from any reader
    ///
    /// # Errors
    /// Same as [`ModeratorTable::load`] except for [`TableError::Io`].
    pub fn from_reader<R: Read>(reader: R) -> TableResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let header_record = reader.headers()?.clone();
        let index = header_record
            .iter()
            .enumerate()
            .position(|(i, h)| is_index_column(i, h))
            .ok_or(TableError::MissingIndexColumn)?;

        let headers = header_record
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != index)
            .map(|(_, h)| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let row = record
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != index)
                .map(|(_, cell)| cell.to_string())
                .collect();
            rows.push(row);
        }

        Ok(Self { headers, rows })
    }

    /// Column names, in file order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows, in file order
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    fn column_index(&self, name: &str) -> TableResult<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| TableError::UnknownColumn(name.to_string()))
    }

    /// Raw cells of one column
    ///
    /// # Errors
    /// [`TableError::UnknownColumn`] if no header matches `name`.
    pub fn column(&self, name: &str) -> TableResult<Vec<&str>> {
        let index = self.column_index(name)?;
        Ok(self.rows.iter().map(|row| row[index].as_str()).collect())
    }

    /// One column parsed as numbers; blank cells become NaN
    ///
    /// # Errors
    /// - [`TableError::UnknownColumn`] if no header matches `name`
    /// - [`TableError::NonNumeric`] on the first cell that is not a number
    pub fn column_f64(&self, name: &str) -> TableResult<Vec<f64>> {
        let index = self.column_index(name)?;
        self.rows
            .iter()
            .enumerate()
            .map(|(row, cells)| {
                let cell = cells[index].trim();
                if cell.is_empty() {
                    return Ok(f64::NAN);
                }
                cell.parse::<f64>().map_err(|_| TableError::NonNumeric {
                    column: name.to_string(),
                    row,
                    value: cell.to_string(),
                })
            })
            .collect()
    }
}

/// Load a moderator data file, dropping its index column
///
/// # Errors
/// See [`ModeratorTable::load`].
pub fn read_moderator_table(path: impl AsRef<Path>) -> TableResult<ModeratorTable> {
    ModeratorTable::load(path)
}
