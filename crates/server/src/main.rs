use std::sync::Arc;

use server::case_api::HttpCaseApi;
use server::state::AppState;

#[tokio::main]
async fn main() {
    server::telemetry::init_tracing();
    let config = server::config::load_config();
    server::health::record_start_time();

    let case_api = match HttpCaseApi::new(&config.case_api) {
        Ok(api) => api,
        Err(e) => {
            tracing::error!(error = %e, "could not build case API client");
            std::process::exit(1);
        }
    };
    let state = AppState::new(Arc::new(case_api), config.clone());
    let router = server::telemetry::with_http_tracing(
        server::pages::router(state),
        config.features.is_enabled("telemetry"),
    );

    let address = server::config::bind_address();
    let listener = match tokio::net::TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(address = %address, error = %e, "could not bind");
            std::process::exit(1);
        }
    };
    tracing::info!(address = %address, case_api = %config.case_api.base_url, "ET3 respond service listening");

    if let Err(e) = axum::serve(listener, router).await {
        tracing::error!(error = %e, "server stopped");
    }
}
