use shared_types::{
    AppError, AppErrorKind, Et3HubLinkName, Et3Status, FormError, Language, LinkStatus,
};
use utoipa::OpenApi;

use crate::health::{self, HealthResponse};
use crate::pages::hub::{self, HubSection, HubView};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        hub::task_list,
    ),
    components(schemas(
        AppError, AppErrorKind, FormError, Language, LinkStatus, Et3HubLinkName, Et3Status,
        HealthResponse, HubSection, HubView,
    )),
    tags(
        (name = "response", description = "ET3 response progress"),
        (name = "health", description = "Health check endpoint")
    ),
    info(
        title = "ET3 Respond API",
        description = "Respond to an employment tribunal claim",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;
