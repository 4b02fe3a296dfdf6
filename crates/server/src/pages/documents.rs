use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

use crate::case_api::DocumentBinary;
use crate::error_convert::CaseApiErrorExt;
use crate::session::SessionHandle;
use crate::state::AppState;

use super::redirect_not_found;

fn content_disposition(file_name: Option<&str>) -> Option<HeaderValue> {
    let name = file_name?.replace('"', "");
    HeaderValue::from_str(&format!("inline; filename=\"{name}\"")).ok()
}

fn binary_response(document: DocumentBinary) -> Response {
    let mut response = (StatusCode::OK, Body::from(document.bytes)).into_response();
    let headers = response.headers_mut();
    if let Ok(value) = HeaderValue::from_str(&document.content_type) {
        headers.insert(header::CONTENT_TYPE, value);
    }
    if let Some(value) = content_disposition(document.file_name.as_deref()) {
        headers.insert(header::CONTENT_DISPOSITION, value);
    }
    response
}

/// GET /getCaseDocument/{doc_id}
///
/// Streams a document from the document store, or redirects to not found.
pub async fn get_case_document(
    State(state): State<AppState>,
    session: SessionHandle,
    Path(doc_id): Path<String>,
) -> Response {
    let token = session.update(|s| s.access_token().map(str::to_string));
    match state.case_api.get_case_document(token.as_deref(), &doc_id).await {
        Ok(document) => binary_response(document),
        Err(e) => {
            let err = e.into_app_error();
            tracing::error!(
                doc_id = %doc_id,
                kind = %err.kind,
                error = %err.message,
                "could not fetch document"
            );
            redirect_not_found()
        }
    }
}
