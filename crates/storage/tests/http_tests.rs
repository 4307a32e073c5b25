//! Reads over plain HTTP from a local mirror.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;

use spectra_common::{ReadError, TableReader};
use storage::{GeoparquetReader, ObjectStorage};
use test_utils::{sample_rows, spectra_batch, SpectraArchive};

const FILE: &str = "gewps/2025031500_MSC_GEWPS_EFTH.geoparquet";

#[derive(Default)]
struct Mirror {
    files: HashMap<String, Vec<u8>>,
    unavailable_hits: AtomicUsize,
}

async fn serve_file(State(mirror): State<Arc<Mirror>>, Path(file): Path<String>) -> Response {
    match mirror.files.get(&file) {
        Some(bytes) => (
            StatusCode::OK,
            [(header::CONTENT_LENGTH, bytes.len().to_string())],
            bytes.clone(),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn unavailable(State(mirror): State<Arc<Mirror>>) -> StatusCode {
    mirror.unavailable_hits.fetch_add(1, Ordering::SeqCst);
    StatusCode::SERVICE_UNAVAILABLE
}

async fn start(mirror: Arc<Mirror>) -> SocketAddr {
    let app = Router::new()
        .route("/geoparquet/*file", get(serve_file))
        .route("/unavailable/*file", get(unavailable))
        .with_state(mirror);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn sample_file() -> Vec<u8> {
    let archive = SpectraArchive::new();
    let path = archive.write(FILE, &spectra_batch(&sample_rows()));
    std::fs::read(path).unwrap()
}

// ============================================================================
// Plain HTTP mirror
// ============================================================================

#[tokio::test]
async fn test_reads_from_plain_http_mirror() {
    let mut mirror = Mirror::default();
    mirror.files.insert(FILE.to_string(), b"PAR1".to_vec());
    let addr = start(Arc::new(mirror)).await;

    let storage = ObjectStorage::for_location(&format!("http://{}/geoparquet/{}", addr, FILE))
        .unwrap();
    assert_eq!(storage.get().await.unwrap().as_ref(), b"PAR1");
}

#[tokio::test]
async fn test_missing_object_on_mirror_is_not_found() {
    let addr = start(Arc::new(Mirror::default())).await;

    let storage =
        ObjectStorage::for_location(&format!("http://{}/geoparquet/absent.geoparquet", addr))
            .unwrap();
    let err = storage.get().await.unwrap_err();
    assert!(matches!(err, ReadError::NotFound(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_geoparquet_table_over_http() {
    let mut mirror = Mirror::default();
    mirror.files.insert(FILE.to_string(), sample_file());
    let addr = start(Arc::new(mirror)).await;

    let columns = vec!["member".to_string(), "station_name".to_string()];
    let table = GeoparquetReader::new()
        .read_table(
            &format!("http://{}/geoparquet/{}", addr, FILE),
            Some(&columns),
            None,
        )
        .await
        .unwrap();

    assert_eq!(table.column_names(), vec!["member", "station_name"]);
    assert_eq!(table.num_rows(), 5);
}

// ============================================================================
// Failures are not retried
// ============================================================================

#[tokio::test]
async fn test_server_error_is_requested_once() {
    let mirror = Arc::new(Mirror::default());
    let addr = start(Arc::clone(&mirror)).await;

    let storage = ObjectStorage::for_location(&format!("http://{}/unavailable/{}", addr, FILE))
        .unwrap();
    let err = storage.get().await.unwrap_err();

    assert!(matches!(err, ReadError::Other(_)), "got {:?}", err);
    assert_eq!(mirror.unavailable_hits.load(Ordering::SeqCst), 1);
}
