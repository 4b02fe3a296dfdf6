use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use shared_types::{
    Address, DocumentTableRow, Et3CaseDetailsLinkName, Et3ModificationType, Et3Status, LinkStatus,
};

use crate::documents::{combine_documents, find_et1_document_by_language, get_doc_id};
use crate::error_convert::CaseApiErrorExt;
use crate::formatter::{to_view_model_for_session, SectionUpdate};
use crate::progress::case_details::{case_details_links, CaseDetailsLink};
use crate::progress::{current_et3_status, mark_viewed};
use crate::session::SessionHandle;
use crate::state::AppState;
use crate::urls;

use super::{case_context, redirect_not_found, render, save_respondent};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseDetailsView {
    pub case_id: String,
    pub ethos_case_reference: Option<String>,
    pub claimant_name: Option<String>,
    pub respondent_name: Option<String>,
    pub due_date: Option<String>,
    pub et3_status: Et3Status,
    pub links: Vec<CaseDetailsLink>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimantDetailsView {
    pub claimant_name: Option<String>,
    pub preferred_title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<Address>,
    pub contact_preference: Option<String>,
    pub hearing_preferences: Vec<String>,
    pub hearing_assistance: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Et1FormView {
    pub file_name: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseDocumentsView {
    pub documents: Vec<DocumentTableRow>,
}

/// GET /case-details/{case_id}
///
/// Fetches the case, selects the user's respondent and lists the case
/// details sections.
pub async fn case_details(
    State(state): State<AppState>,
    session: SessionHandle,
    Path(case_id): Path<String>,
) -> Response {
    let token = session.update(|s| s.access_token().map(str::to_string));
    let remote = match state.case_api.get_user_case(token.as_deref(), &case_id).await {
        Ok(remote) => remote,
        Err(e) => {
            let err = e.into_app_error();
            tracing::error!(
                case_id = %case_id,
                kind = %err.kind,
                error = %err.message,
                "could not fetch case"
            );
            return redirect_not_found();
        }
    };

    let (view, index, language) = session.update(|s| {
        let view = to_view_model_for_session(&remote, s);
        s.user_case = Some(view.clone());
        (view, s.selected_respondent_index, s.language)
    });
    let respondent = view.respondents.get(index);

    let data = CaseDetailsView {
        case_id: view.id.clone(),
        ethos_case_reference: view.ethos_case_reference.clone(),
        claimant_name: view.claimant_full_name(),
        respondent_name: respondent.and_then(|r| r.display_name()).map(str::to_string),
        due_date: view.et3_response_due_date.clone(),
        et3_status: respondent
            .map(|r| current_et3_status(r, &view))
            .unwrap_or(Et3Status::NotStarted),
        links: case_details_links(respondent, language),
    };
    render(&session, urls::CASE_DETAILS, data).into_response()
}

/// Mark a case-details section viewed the first time its page is opened.
/// A failed update is logged and the page still renders.
async fn record_viewed(state: &AppState, session: &SessionHandle, name: Et3CaseDetailsLinkName) {
    let Some(ctx) = case_context(session) else {
        return;
    };
    let mut respondent = ctx.respondent;
    if !mark_viewed(&mut respondent, name) {
        return;
    }
    let result = save_respondent(
        state,
        session,
        Et3ModificationType::UpdateRespondent,
        SectionUpdate::case_details(name, LinkStatus::Viewed),
        |_| {},
    )
    .await;
    if result.is_err() {
        tracing::warn!(section = %name, "could not record section as viewed");
    }
}

/// GET /claimant-details
pub async fn claimant_details(State(state): State<AppState>, session: SessionHandle) -> Response {
    let Some(ctx) = case_context(&session) else {
        return redirect_not_found();
    };
    record_viewed(&state, &session, Et3CaseDetailsLinkName::PersonalDetails).await;

    let case = ctx.case;
    let data = ClaimantDetailsView {
        claimant_name: case.claimant_full_name(),
        preferred_title: case.claimant_preferred_title,
        email: case.claimant_email,
        phone: case.claimant_phone,
        address: case.claimant_address,
        contact_preference: case.claimant_contact_preference,
        hearing_preferences: case.claimant_hearing_preferences,
        hearing_assistance: case.claimant_hearing_assistance,
    };
    render(&session, urls::CLAIMANT_DETAILS, data).into_response()
}

/// GET /claimant-et1-form
pub async fn claimant_et1_form(State(state): State<AppState>, session: SessionHandle) -> Response {
    let Some(ctx) = case_context(&session) else {
        return redirect_not_found();
    };
    record_viewed(&state, &session, Et3CaseDetailsLinkName::Et1ClaimForm).await;

    let et1 = find_et1_document_by_language(&ctx.case.documents, ctx.language)
        .and_then(|item| item.document.as_ref())
        .or(ctx.case.et1_submitted_form.as_ref());
    let data = Et1FormView {
        file_name: et1.map(|d| d.document_filename.clone()),
        link: et1
            .and_then(|d| get_doc_id(&d.document_url))
            .map(|id| format!("{}/{id}", urls::GET_CASE_DOCUMENT)),
    };
    render(&session, urls::CLAIMANT_ET1_FORM, data).into_response()
}

/// GET /case-documents
pub async fn case_documents(session: SessionHandle) -> Response {
    let Some(ctx) = case_context(&session) else {
        return redirect_not_found();
    };
    let data = CaseDocumentsView {
        documents: combine_documents(&ctx.case, Some(&ctx.respondent)),
    };
    render(&session, urls::CASE_DOCUMENTS, data).into_response()
}
