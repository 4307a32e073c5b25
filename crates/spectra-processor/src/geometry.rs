//! Well-known-binary point decoding.

use geo_types::Geometry;
use geozero::wkb::Wkb;
use geozero::ToGeo;

use spectra_common::{CellValue, PointRecord, SpectraError, SpectraResult};

/// Decode one WKB value. Only points are accepted.
pub fn decode_point(bytes: &[u8]) -> SpectraResult<PointRecord> {
    let geometry = Wkb(bytes.to_vec())
        .to_geo()
        .map_err(|e| SpectraError::Geometry(e.to_string()))?;

    match geometry {
        Geometry::Point(point) => Ok(PointRecord {
            x: point.x(),
            y: point.y(),
        }),
        other => Err(SpectraError::Geometry(format!(
            "expected a point, found a {}",
            kind(&other)
        ))),
    }
}

/// Decode a whole geometry column into `{x, y}` point cells.
pub fn points_from_cells(cells: Vec<CellValue>) -> SpectraResult<Vec<CellValue>> {
    cells
        .into_iter()
        .enumerate()
        .map(|(row, cell)| match cell {
            CellValue::Binary(bytes) => decode_point(&bytes)
                .map(CellValue::Point)
                .map_err(|e| SpectraError::Geometry(format!("row {}: {}", row, e))),
            CellValue::Null => Err(SpectraError::Geometry(format!(
                "row {}: geometry is null",
                row
            ))),
            _ => Err(SpectraError::Geometry(format!(
                "row {}: geometry is not binary",
                row
            ))),
        })
        .collect()
}

fn kind(geometry: &Geometry<f64>) -> &'static str {
    match geometry {
        Geometry::Point(_) => "point",
        Geometry::Line(_) => "line",
        Geometry::LineString(_) => "line string",
        Geometry::Polygon(_) => "polygon",
        Geometry::MultiPoint(_) => "multi point",
        Geometry::MultiLineString(_) => "multi line string",
        Geometry::MultiPolygon(_) => "multi polygon",
        Geometry::GeometryCollection(_) => "geometry collection",
        Geometry::Rect(_) => "rectangle",
        Geometry::Triangle(_) => "triangle",
    }
}
