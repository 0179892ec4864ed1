//! Tabular moderator data produced by external tools
//!
//! Files are comma-separated with a header row and carry the artifact index
//! column left behind by a dataframe export. Loading drops that column and
//! keeps everything else as text; numeric access is per column.

mod error;
mod table;

pub use error::{TableError, TableResult};
pub use table::{is_index_column, read_moderator_table, ModeratorTable, INDEX_COLUMN_NAME};
