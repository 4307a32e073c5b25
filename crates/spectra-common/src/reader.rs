//! Table-loading capability.

use async_trait::async_trait;

use crate::error::ReadError;
use crate::filter::FilterClause;
use crate::table::Table;

/// Loads a table from a location, applying projection and row filters
/// while reading rather than afterwards.
#[async_trait]
pub trait TableReader: Send + Sync {
    /// Read the table at `location`.
    ///
    /// `columns` selects and orders the returned columns. `filters` is a
    /// conjunction of clauses; a column referenced only by a filter does not
    /// need to be projected.
    async fn read_table(
        &self,
        location: &str,
        columns: Option<&[String]>,
        filters: Option<&[FilterClause]>,
    ) -> Result<Table, ReadError>;
}
