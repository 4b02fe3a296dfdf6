use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use shared_types::{
    error_type, Et3HubLinkName, Et3ModificationType, Et3Status, FormError, LinkStatus,
    RespondentEt3Model, YesOrNo, HIDDEN_ERROR_PROPERTY,
};

use crate::dates::format_api_timestamp;
use crate::documents::get_doc_id;
use crate::formatter::SectionUpdate;
use crate::progress::{all_sections_completed, applicable_sections, current_et3_status};
use crate::session::SessionHandle;
use crate::state::AppState;
use crate::urls;

use super::hub::hub_section_url;
use super::{case_context, redirect_not_found, render, render_with_errors, save_respondent, start_post};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnsweredSection {
    pub name: Et3HubLinkName,
    pub status: Option<LinkStatus>,
    pub change_url: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckYourAnswersView {
    pub sections: Vec<AnsweredSection>,
    pub can_submit: bool,
    pub answers: RespondentEt3Model,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedView {
    pub ethos_case_reference: Option<String>,
    pub respondent_name: Option<String>,
    pub et3_status: Et3Status,
    pub submitted_on: Option<String>,
    pub et3_form_link: Option<String>,
}

fn summary(ctx: &super::CaseContext) -> CheckYourAnswersView {
    let stored = ctx.respondent.hub_links_statuses.as_ref();
    CheckYourAnswersView {
        sections: applicable_sections(&ctx.case)
            .into_iter()
            .map(|name| AnsweredSection {
                name,
                status: stored.and_then(|s| s.get(name)),
                change_url: hub_section_url(name),
            })
            .collect(),
        can_submit: all_sections_completed(&ctx.case, &ctx.respondent),
        answers: ctx.respondent.clone(),
    }
}

/// GET /check-your-answers-et3
pub async fn check_your_answers(session: SessionHandle) -> Response {
    let Some(ctx) = case_context(&session) else {
        return redirect_not_found();
    };
    render(&session, urls::CHECK_YOUR_ANSWERS_ET3, summary(&ctx)).into_response()
}

/// POST /check-your-answers-et3
///
/// Submits the response once every section is completed.
pub async fn post_check_your_answers(
    State(state): State<AppState>,
    session: SessionHandle,
) -> Response {
    start_post(&session);
    let Some(ctx) = case_context(&session) else {
        return redirect_not_found();
    };
    if !all_sections_completed(&ctx.case, &ctx.respondent) {
        let errors = vec![FormError::new(error_type::REQUIRED, HIDDEN_ERROR_PROPERTY)];
        return render_with_errors(&session, urls::CHECK_YOUR_ANSWERS_ET3, errors, summary(&ctx))
            .into_response();
    }

    let result = save_respondent(
        &state,
        &session,
        Et3ModificationType::SubmitRespondent,
        SectionUpdate::hub(Et3HubLinkName::CheckYorAnswers, LinkStatus::Completed),
        |_| {},
    )
    .await;

    match result {
        Ok(()) => {
            // The reply may omit the case, so record the submission locally too.
            session.update(|s| {
                let index = s.selected_respondent_index;
                if let Some(respondent) = s
                    .user_case
                    .as_mut()
                    .and_then(|case| case.respondents.get_mut(index))
                {
                    respondent.response_received = Some(YesOrNo::Yes);
                }
            });
            tracing::info!(case_id = %ctx.case.id, "ET3 response submitted");
            super::redirect_after_save(false, urls::APPLICATION_SUBMITTED)
        }
        Err(e) => e.into_page_response(&session, urls::CHECK_YOUR_ANSWERS_ET3, summary(&ctx)),
    }
}

/// GET /application-submitted
pub async fn application_submitted(session: SessionHandle) -> Response {
    let Some(ctx) = case_context(&session) else {
        return redirect_not_found();
    };
    let respondent = &ctx.respondent;
    let data = SubmittedView {
        ethos_case_reference: ctx.case.ethos_case_reference.clone(),
        respondent_name: respondent.display_name().map(str::to_string),
        et3_status: current_et3_status(respondent, &ctx.case),
        submitted_on: respondent
            .response_received_date
            .as_deref()
            .and_then(|d| format_api_timestamp(d, ctx.language)),
        et3_form_link: respondent
            .et3_form
            .as_ref()
            .and_then(|d| get_doc_id(&d.document_url))
            .map(|id| format!("{}/{id}", urls::GET_CASE_DOCUMENT)),
    };
    render(&session, urls::APPLICATION_SUBMITTED, data).into_response()
}
