use anyhow::Result;
use tracing::warn;

use crate::assets::StaticFiles;
use crate::http::request::{Method, Request};
use crate::http::response::Response;
use crate::store::{DeleteOutcome, Record, RecordStore};

/// Dispatches one request, in precedence order: static paths, favicon,
/// `/records`, `/add`, `/delete`, then the 404/400 fallbacks.
pub async fn route(
    request: &Request,
    store: &RecordStore,
    assets: &StaticFiles,
) -> Result<Response> {
    match (request.method, request.path.as_str()) {
        (Method::GET, path) if is_static_path(path) => assets.serve(path).await,
        (Method::GET, "/favicon.ico") => Ok(Response::no_content()),
        (Method::GET, "/records") => list_records(store).await,
        (Method::POST, "/add") => add_record(store, &request.body).await,
        (Method::POST, "/delete") => delete_record(store, &request.body).await,
        (Method::GET | Method::POST, _) => Ok(Response::not_found("Invalid endpoint")),
        _ => Ok(Response::bad_request("Unsupported method")),
    }
}

fn is_static_path(path: &str) -> bool {
    path == "/" || path.ends_with(".html") || path.ends_with(".css") || path.ends_with(".js")
}

async fn list_records(store: &RecordStore) -> Result<Response> {
    let records = store.list().await?;
    let json = serde_json::to_string(&records)?;
    Ok(Response::json(json))
}

async fn add_record(store: &RecordStore, body: &[u8]) -> Result<Response> {
    let body = String::from_utf8_lossy(body);

    match Record::parse_form(&body) {
        Ok(record) => {
            store.append(&record).await?;
            Ok(Response::ok_text("Record added successfully"))
        }
        Err(e) => {
            warn!("Rejected add: {:?}", e);
            Ok(Response::bad_request("Malformed form body"))
        }
    }
}

async fn delete_record(store: &RecordStore, body: &[u8]) -> Result<Response> {
    let body = String::from_utf8_lossy(body);

    // Body is "id=<n>"; the value must parse as a non-negative integer.
    let id = body
        .split_once('=')
        .and_then(|(_key, value)| value.parse::<usize>().ok());

    let Some(id) = id else {
        warn!("Rejected delete: unparseable id in {:?}", body);
        return Ok(Response::bad_request("Invalid ID"));
    };

    match store.delete(id).await? {
        DeleteOutcome::Deleted => Ok(Response::ok_text("Record deleted successfully")),
        DeleteOutcome::OutOfRange => Ok(Response::bad_request("Invalid ID")),
        DeleteOutcome::NoStore => Ok(Response::ok_text("No records to delete")),
    }
}
