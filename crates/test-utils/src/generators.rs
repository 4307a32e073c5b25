//! Encoders for binary geometry test data.

/// WKB geometry type code for a 2D point.
pub const WKB_POINT: u32 = 1;

/// WKB geometry type code for a 2D line string.
pub const WKB_LINESTRING: u32 = 2;

/// Encode a 2D point as little-endian well-known binary.
pub fn wkb_point(x: f64, y: f64) -> Vec<u8> {
    let mut buf = Vec::with_capacity(21);
    buf.push(1u8);
    buf.extend_from_slice(&WKB_POINT.to_le_bytes());
    buf.extend_from_slice(&x.to_le_bytes());
    buf.extend_from_slice(&y.to_le_bytes());
    buf
}

/// Encode a 2D point as big-endian well-known binary.
pub fn wkb_point_be(x: f64, y: f64) -> Vec<u8> {
    let mut buf = Vec::with_capacity(21);
    buf.push(0u8);
    buf.extend_from_slice(&WKB_POINT.to_be_bytes());
    buf.extend_from_slice(&x.to_be_bytes());
    buf.extend_from_slice(&y.to_be_bytes());
    buf
}

/// Encode a 2D line string as little-endian well-known binary.
pub fn wkb_linestring(coords: &[(f64, f64)]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(9 + coords.len() * 16);
    buf.push(1u8);
    buf.extend_from_slice(&WKB_LINESTRING.to_le_bytes());
    buf.extend_from_slice(&(coords.len() as u32).to_le_bytes());
    for (x, y) in coords {
        buf.extend_from_slice(&x.to_le_bytes());
        buf.extend_from_slice(&y.to_le_bytes());
    }
    buf
}
