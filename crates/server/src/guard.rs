use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::progress::navigation::is_allowed;
use crate::session::SessionHandle;
use crate::urls;

/// Send requests for response-editing pages back to the task list once the
/// selected respondent's ET3 has been submitted. Must run inside
/// `session_middleware`.
pub async fn submission_guard(request: Request, next: Next) -> Response {
    let path = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());
    let path = urlencoding::decode(&path)
        .map(|decoded| decoded.into_owned())
        .unwrap_or(path);

    let allowed = match request.extensions().get::<SessionHandle>() {
        Some(handle) => handle.update(|session| is_allowed(&path, session.selected_respondent())),
        None => true,
    };

    if !allowed {
        tracing::info!(path = %path, "blocked page after ET3 submission");
        return Redirect::to(urls::RESPONDENT_RESPONSE_TASK_LIST).into_response();
    }

    next.run(request).await
}
