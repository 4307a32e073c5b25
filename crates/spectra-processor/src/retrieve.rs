//! The retrieval-and-transform operation.

use tracing::{debug, info, instrument};

use spectra_common::{resolve_path, OutputMapping, SpectraResult, TableReader};

use crate::geometry::points_from_cells;
use crate::request::SpectraRequest;

/// Column holding WKB geometry in the published files.
pub const GEOMETRY_COLUMN: &str = "geometry";

/// Column replacing [`GEOMETRY_COLUMN`] with decoded `{x, y}` records.
pub const POINT_COLUMN: &str = "point";

/// Fetch a spectra file and turn it into a column-major mapping.
///
/// Steps, in order:
/// 1. resolve the file location from model, variable, date and region;
/// 2. read it with the requested columns and filters pushed down;
/// 3. drop duplicate rows if asked;
/// 4. replace a `geometry` column by a trailing `point` column.
///
/// Reader failures are wrapped as not-found, empty-data or generic load
/// errors, each keeping the reader's message.
#[instrument(
    skip(reader, request),
    fields(model = %request.model, variable = %request.variable, date = %request.date)
)]
pub async fn retrieve(
    reader: &dyn TableReader,
    base_url: &str,
    request: &SpectraRequest,
) -> SpectraResult<OutputMapping> {
    let columns = request.column_list();
    let filters = request.filters.as_deref();

    let location = resolve_path(
        base_url,
        &request.model,
        &request.variable,
        &request.date,
        request.region.as_deref(),
    )?;
    debug!(%location, "Resolved spectra location");

    let mut table = reader
        .read_table(&location, columns.as_deref(), filters)
        .await?;

    if request.remove_duplicates {
        let removed = table.drop_duplicates();
        debug!(removed, "Removed duplicate rows");
    }

    if let Some(geometry) = table.take_column(GEOMETRY_COLUMN) {
        let points = points_from_cells(geometry)?;
        table.push_column(POINT_COLUMN, points)?;
    }

    info!(
        rows = table.num_rows(),
        columns = table.num_columns(),
        "Retrieved spectra"
    );
    Ok(table.into_output())
}
