use axum::extract::FromRef;
use shared_types::AppConfig;
use std::sync::Arc;
use std::time::Duration;

use crate::case_api::CaseApi;
use crate::session::SessionStore;

/// Shared application state passed to Axum handlers via `State`.
/// Derives `FromRef` so middleware can extract `State<SessionStore>` directly.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub case_api: Arc<dyn CaseApi>,
    pub sessions: SessionStore,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(case_api: Arc<dyn CaseApi>, config: AppConfig) -> Self {
        Self {
            case_api,
            sessions: SessionStore::with_ttl(Duration::from_secs(config.session.ttl_secs)),
            config: Arc::new(config),
        }
    }
}
