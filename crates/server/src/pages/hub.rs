use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared_types::{AppError, Et3HubLinkName, Et3Status, HubLinksStatuses, LinkStatus};

use crate::i18n::{link_status_label, ProgressTranslations};
use crate::progress::{applicable_sections, current_et3_status, overall_status};
use crate::session::SessionHandle;
use crate::urls;

use super::{case_context, redirect_not_found, render, PageView};

/// Page each task list section starts on.
pub fn hub_section_url(name: Et3HubLinkName) -> &'static str {
    match name {
        Et3HubLinkName::ContactDetails => urls::RESPONDENT_NAME,
        Et3HubLinkName::EmployerDetails => urls::RESPONDENT_EMPLOYEES,
        Et3HubLinkName::ConciliationAndEmployeeDetails => urls::ACAS_EARLY_CONCILIATION_CERTIFICATE,
        Et3HubLinkName::PayPensionBenefitDetails => urls::CLAIMANT_PAY_DETAILS,
        Et3HubLinkName::ContestClaim => urls::RESPONDENT_CONTEST_CLAIM,
        Et3HubLinkName::EmployersContractClaim => urls::EMPLOYERS_CONTRACT_CLAIM,
        Et3HubLinkName::CheckYorAnswers => urls::CHECK_YOUR_ANSWERS_ET3,
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HubSection {
    pub name: Et3HubLinkName,
    pub status: LinkStatus,
    pub label: String,
    pub url: String,
}

/// Task list for the selected respondent.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HubView {
    pub case_id: String,
    pub ethos_case_reference: Option<String>,
    pub respondent_name: Option<String>,
    pub overall_status: String,
    pub et3_status: Et3Status,
    pub due_date: Option<String>,
    pub sections: Vec<HubSection>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingView {
    pub ethos_case_reference: Option<String>,
    pub respondent_name: Option<String>,
    pub due_date: Option<String>,
    pub start_url: &'static str,
}

/// GET /respondent-response-landing
pub async fn landing(session: SessionHandle) -> Response {
    let Some(ctx) = case_context(&session) else {
        return redirect_not_found();
    };
    let data = LandingView {
        ethos_case_reference: ctx.case.ethos_case_reference.clone(),
        respondent_name: ctx.respondent.display_name().map(str::to_string),
        due_date: ctx.case.et3_response_due_date.clone(),
        start_url: urls::RESPONDENT_RESPONSE_TASK_LIST,
    };
    render(&session, urls::RESPONDENT_RESPONSE_LANDING, data).into_response()
}

/// GET /respondent-response-task-list
///
/// Progress through the ET3 response for the selected respondent.
#[utoipa::path(
    get,
    path = "/respondent-response-task-list",
    params(
        ("lng" = Option<String>, Query, description = "Switch language: en or cy")
    ),
    responses(
        (status = 200, description = "Task list", body = PageView<HubView>),
        (status = 404, description = "No case in the session", body = AppError)
    ),
    tag = "response"
)]
pub async fn task_list(session: SessionHandle) -> Result<Json<PageView<HubView>>, AppError> {
    let ctx = case_context(&session)
        .ok_or_else(|| AppError::not_found("No case selected for this session"))?;

    let translations = ProgressTranslations::for_language(ctx.language);
    let initial = HubLinksStatuses::initial();
    let stored = ctx.respondent.hub_links_statuses.as_ref().unwrap_or(&initial);

    let mut names = applicable_sections(&ctx.case);
    names.push(Et3HubLinkName::CheckYorAnswers);
    let sections = names
        .into_iter()
        .map(|name| {
            let status = stored
                .get(name)
                .or_else(|| initial.get(name))
                .unwrap_or(LinkStatus::NotStarted);
            HubSection {
                name,
                status,
                label: link_status_label(status, ctx.language).to_string(),
                url: hub_section_url(name).to_string(),
            }
        })
        .collect();

    let data = HubView {
        case_id: ctx.case.id.clone(),
        ethos_case_reference: ctx.case.ethos_case_reference.clone(),
        respondent_name: ctx.respondent.display_name().map(str::to_string),
        overall_status: overall_status(&ctx.case, &ctx.respondent, &translations),
        et3_status: current_et3_status(&ctx.respondent, &ctx.case),
        due_date: ctx.case.et3_response_due_date.clone(),
        sections,
    };
    Ok(Json(render(&session, urls::RESPONDENT_RESPONSE_TASK_LIST, data)))
}
