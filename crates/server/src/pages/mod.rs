//! Page controllers. Every page renders a JSON [`PageView`]; form posts either
//! re-render the page with errors or save through the case API and redirect.

pub mod case_details;
pub mod check_your_answers;
pub mod conciliation;
pub mod contact_details;
pub mod contest_claim;
pub mod documents;
pub mod employee_details;
pub mod employer_details;
pub mod employers_contract_claim;
pub mod hub;
pub mod pay_details;

use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use shared_types::{
    error_type, AppError, AppErrorKind, CaseWithId, Et3ModificationType, FormError, Language,
    RespondentEt3Model,
};

use crate::error_convert::CaseApiErrorExt;
use crate::formatter::{to_api_update_request, to_view_model_for_session, SectionUpdate};
use crate::progress::{update_case_details_link_status, update_hub_link_status};
use crate::session::{session_middleware, SessionHandle};
use crate::state::AppState;
use crate::{guard, health, urls};

/// Multipart framing allowance on top of the largest accepted file.
const BODY_LIMIT_SLACK: usize = 1024 * 1024;

pub const YES_NO: &[&str] = &["Yes", "No"];
pub const YES_NO_NOT_SURE: &[&str] = &["Yes", "No", "Not Sure"];

/// Trimmed form value, `None` when blank.
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// JSON body of every rendered page.
#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageView<T> {
    pub page: String,
    pub language: Language,
    pub errors: Vec<FormError>,
    pub has_api_error: bool,
    pub data: T,
}

impl<T: Serialize> IntoResponse for PageView<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

fn build<T>(page: &str, language: Language, errors: Vec<FormError>, data: T) -> PageView<T> {
    PageView {
        page: page.trim_start_matches('/').to_string(),
        language,
        has_api_error: errors.iter().any(|e| e.error_type == error_type::API),
        errors,
        data,
    }
}

/// Render a page, taking any errors left in the session.
pub fn render<T>(session: &SessionHandle, page: &str, data: T) -> PageView<T> {
    let (language, errors) = session.update(|s| (s.language, std::mem::take(&mut s.errors)));
    build(page, language, errors, data)
}

/// Re-render a page after a failed post. The errors stay in the session.
pub fn render_with_errors<T>(
    session: &SessionHandle,
    page: &str,
    errors: Vec<FormError>,
    data: T,
) -> PageView<T> {
    let language = session.update(|s| {
        s.errors = errors.clone();
        s.language
    });
    build(page, language, errors, data)
}

/// Clear errors from the previous post.
pub fn start_post(session: &SessionHandle) {
    session.update(|s| s.errors.clear());
}

/// Where a successful post goes: the task list for save-for-later, `next` otherwise.
pub fn redirect_after_save(save_for_later: bool, next: &str) -> Response {
    if save_for_later {
        Redirect::to(urls::RESPONDENT_RESPONSE_TASK_LIST).into_response()
    } else {
        Redirect::to(next).into_response()
    }
}

pub fn redirect_not_found() -> Response {
    Redirect::to(urls::NOT_FOUND).into_response()
}

/// Case held in the session together with the selected respondent.
#[derive(Debug, Clone)]
pub struct CaseContext {
    pub case: CaseWithId,
    pub respondent_index: usize,
    pub respondent: RespondentEt3Model,
    pub language: Language,
}

/// The session's case and selected respondent, if both are present.
pub fn case_context(session: &SessionHandle) -> Option<CaseContext> {
    session.update(|s| {
        let case = s.user_case.clone()?;
        let respondent = case.respondents.get(s.selected_respondent_index)?.clone();
        Some(CaseContext {
            case,
            respondent_index: s.selected_respondent_index,
            respondent,
            language: s.language,
        })
    })
}

/// Why a respondent update did not go through.
#[derive(Debug)]
pub enum SaveError {
    /// No case or selected respondent in the session.
    NoCase,
    Api(AppError),
}

impl SaveError {
    /// Response for a failed save: not found when there is no case or the
    /// case API no longer knows it, otherwise the page again with the API
    /// error.
    pub fn into_page_response<T: Serialize>(
        self,
        session: &SessionHandle,
        page: &str,
        data: T,
    ) -> Response {
        match self {
            SaveError::NoCase => redirect_not_found(),
            SaveError::Api(err) if err.kind == AppErrorKind::NotFound => redirect_not_found(),
            SaveError::Api(_) => {
                render_with_errors(session, page, vec![FormError::api()], data).into_response()
            }
        }
    }
}

/// Apply `edit` to the selected respondent, mark the given sections, send the
/// modification to the case API and keep the returned case in the session.
pub async fn save_respondent(
    state: &AppState,
    session: &SessionHandle,
    request_type: Et3ModificationType,
    sections: SectionUpdate,
    edit: impl FnOnce(&mut RespondentEt3Model),
) -> Result<(), SaveError> {
    let ctx = case_context(session).ok_or(SaveError::NoCase)?;
    let token = session.update(|s| s.access_token().map(str::to_string));

    let mut case = ctx.case;
    let mut respondent = ctx.respondent;
    edit(&mut respondent);
    if let Some((name, status)) = sections.hub {
        update_hub_link_status(&case, &mut respondent, name, status);
    }
    if let Some((name, status)) = sections.case_details {
        update_case_details_link_status(&mut respondent, name, status);
    }
    case.respondents[ctx.respondent_index] = respondent;

    let request = to_api_update_request(&case, ctx.respondent_index, request_type, sections)
        .ok_or(SaveError::NoCase)?;

    match state.case_api.modify_et3_data(token.as_deref(), &request).await {
        Ok(updated) => {
            session.update(|s| {
                let refreshed = if updated.case_data.is_some() {
                    to_view_model_for_session(&updated, s)
                } else {
                    case
                };
                s.user_case = Some(refreshed);
            });
            Ok(())
        }
        Err(e) => {
            let err = e.into_app_error();
            tracing::error!(
                case_id = %case.id,
                request_type = %request_type,
                kind = %err.kind,
                error = %err.message,
                "ET3 update failed"
            );
            Err(SaveError::Api(err))
        }
    }
}

/// GET /not-found
pub async fn not_found(session: SessionHandle) -> Response {
    (
        StatusCode::NOT_FOUND,
        render(&session, urls::NOT_FOUND, serde_json::Value::Null),
    )
        .into_response()
}

async fn fallback() -> Response {
    redirect_not_found()
}

/// The full application router: pages behind the session and submission
/// guard middleware, plus the health check.
pub fn router(state: AppState) -> Router {
    let body_limit = state.config.uploads.max_bytes + BODY_LIMIT_SLACK;

    let pages = Router::new()
        .route(
            &format!("{}/{{case_id}}", urls::CASE_DETAILS),
            get(case_details::case_details),
        )
        .route(urls::CLAIMANT_DETAILS, get(case_details::claimant_details))
        .route(urls::CLAIMANT_ET1_FORM, get(case_details::claimant_et1_form))
        .route(urls::CASE_DOCUMENTS, get(case_details::case_documents))
        .route(urls::RESPONDENT_RESPONSE_LANDING, get(hub::landing))
        .route(urls::RESPONDENT_RESPONSE_TASK_LIST, get(hub::task_list))
        .route(
            urls::RESPONDENT_NAME,
            get(contact_details::respondent_name).post(contact_details::post_respondent_name),
        )
        .route(
            urls::HEARING_PREFERENCES,
            get(contact_details::hearing_preferences)
                .post(contact_details::post_hearing_preferences),
        )
        .route(
            urls::RESPONDENT_CONTACT_PREFERENCES,
            get(contact_details::contact_preferences)
                .post(contact_details::post_contact_preferences),
        )
        .route(
            urls::RESPONDENT_EMPLOYEES,
            get(employer_details::respondent_employees)
                .post(employer_details::post_respondent_employees),
        )
        .route(
            urls::ACAS_EARLY_CONCILIATION_CERTIFICATE,
            get(conciliation::acas_certificate).post(conciliation::post_acas_certificate),
        )
        .route(
            urls::CLAIMANT_EMPLOYMENT_DATES,
            get(employee_details::employment_dates)
                .post(employee_details::post_employment_dates),
        )
        .route(
            urls::CLAIMANT_EMPLOYMENT_DATES_ENTER,
            get(employee_details::employment_dates_enter)
                .post(employee_details::post_employment_dates_enter),
        )
        .route(
            urls::IS_CLAIMANT_EMPLOYMENT_CONTINUING,
            get(employee_details::employment_continuing)
                .post(employee_details::post_employment_continuing),
        )
        .route(
            urls::CLAIMANT_JOB_TITLE,
            get(employee_details::job_title).post(employee_details::post_job_title),
        )
        .route(
            urls::CLAIMANT_AVERAGE_WEEKLY_WORK_HOURS,
            get(employee_details::weekly_hours).post(employee_details::post_weekly_hours),
        )
        .route(
            urls::CLAIMANT_PAY_DETAILS,
            get(pay_details::claimant_pay_details).post(pay_details::post_claimant_pay_details),
        )
        .route(
            urls::RESPONDENT_CONTEST_CLAIM,
            get(contest_claim::contest_claim).post(contest_claim::post_contest_claim),
        )
        .route(
            urls::RESPONDENT_CONTEST_CLAIM_REASON,
            get(contest_claim::contest_claim_reason).post(contest_claim::post_contest_claim_reason),
        )
        .route(
            urls::EMPLOYERS_CONTRACT_CLAIM,
            get(employers_contract_claim::employers_contract_claim)
                .post(employers_contract_claim::post_employers_contract_claim),
        )
        .route(
            urls::CHECK_YOUR_ANSWERS_ET3,
            get(check_your_answers::check_your_answers)
                .post(check_your_answers::post_check_your_answers),
        )
        .route(
            urls::APPLICATION_SUBMITTED,
            get(check_your_answers::application_submitted),
        )
        .route(
            &format!("{}/{{doc_id}}", urls::GET_CASE_DOCUMENT),
            get(documents::get_case_document),
        )
        .route(urls::NOT_FOUND, get(not_found))
        .fallback(fallback)
        .layer(middleware::from_fn(guard::submission_guard))
        .layer(middleware::from_fn_with_state(state.clone(), session_middleware))
        .layer(DefaultBodyLimit::max(body_limit));

    Router::new()
        .route(urls::HEALTH, get(health::health_check))
        .merge(pages)
        .with_state(state)
}
