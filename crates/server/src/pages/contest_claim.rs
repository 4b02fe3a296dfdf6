use axum::{
    extract::{Multipart, State},
    response::{IntoResponse, Response},
    Form,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use shared_types::{
    document_type, AppError, Et3HubLinkName, Et3ModificationType, FormError, LinkStatus, YesOrNo,
};
use validator::Validate;

use crate::case_api::UploadFile;
use crate::documents::document_type_item_from_upload;
use crate::error_convert::{CaseApiErrorExt, ValidateForm};
use crate::formatter::SectionUpdate;
use crate::session::SessionHandle;
use crate::state::AppState;
use crate::urls;
use crate::validation::file::check_file;
use crate::validation::{is_field_filled_in, is_one_of, FormErrors};

use super::{
    case_context, non_blank, redirect_after_save, redirect_not_found, render,
    render_with_errors, save_respondent, start_post, YES_NO,
};

/// Case type used for uploads when the case does not carry one.
const DEFAULT_CASE_TYPE_ID: &str = "ET_EnglandWales";
const DOCUMENT_FIELD: &str = "contest_claim_document";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContestClaimForm {
    #[serde(default)]
    pub contest_claim: Option<String>,
    #[serde(default, rename = "saveForLater", skip_serializing)]
    pub save_for_later: Option<String>,
}

/// GET /respondent-contest-claim
pub async fn contest_claim(session: SessionHandle) -> Response {
    let Some(ctx) = case_context(&session) else {
        return redirect_not_found();
    };
    let form = ContestClaimForm {
        contest_claim: ctx.respondent.contest_claim.map(|v| v.to_string()),
        save_for_later: None,
    };
    render(&session, urls::RESPONDENT_CONTEST_CLAIM, form).into_response()
}

/// POST /respondent-contest-claim
///
/// Contesting moves on to the reasons page. Not contesting completes the section.
pub async fn post_contest_claim(
    State(state): State<AppState>,
    session: SessionHandle,
    Form(form): Form<ContestClaimForm>,
) -> Response {
    start_post(&session);
    let mut errors = FormErrors::new();
    errors.check("contest_claim", is_one_of(form.contest_claim.as_deref(), YES_NO));
    if !errors.is_empty() {
        let errors = errors.into_vec();
        return render_with_errors(&session, urls::RESPONDENT_CONTEST_CLAIM, errors, form)
            .into_response();
    }

    let answer = form.contest_claim.as_deref().and_then(YesOrNo::from_api);
    let save_for_later = form.save_for_later.is_some();
    let (status, next) = match answer {
        Some(YesOrNo::No) if !save_for_later => {
            (LinkStatus::Completed, urls::RESPONDENT_RESPONSE_TASK_LIST)
        }
        Some(YesOrNo::No) => (LinkStatus::InProgress, urls::RESPONDENT_RESPONSE_TASK_LIST),
        _ => (LinkStatus::InProgress, urls::RESPONDENT_CONTEST_CLAIM_REASON),
    };

    let result = save_respondent(
        &state,
        &session,
        Et3ModificationType::UpdateRespondent,
        SectionUpdate::hub(Et3HubLinkName::ContestClaim, status),
        |respondent| respondent.contest_claim = answer,
    )
    .await;

    match result {
        Ok(()) => redirect_after_save(save_for_later, next),
        Err(e) => e.into_page_response(&session, urls::RESPONDENT_CONTEST_CLAIM, form),
    }
}

#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct ContestClaimReasonForm {
    #[validate(length(max = 2500, code = "tooLong"))]
    pub contest_claim_details: Option<String>,
    /// File names already attached to the response.
    pub uploaded_documents: Vec<String>,
    #[serde(skip)]
    pub save_for_later: bool,
}

/// Fields read from the multipart body.
struct ReasonSubmission {
    form: ContestClaimReasonForm,
    file: Option<UploadFile>,
}

async fn read_reason_submission(mut multipart: Multipart) -> Result<ReasonSubmission, AppError> {
    let mut form = ContestClaimReasonForm::default();
    let mut file = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::bad_request(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "contest_claim_details" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::bad_request(e.to_string()))?;
                form.contest_claim_details = Some(text);
            }
            "saveForLater" => form.save_for_later = true,
            DOCUMENT_FIELD => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes: Bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::bad_request(e.to_string()))?;
                // Browsers send an unnamed empty part when no file is chosen.
                if !file_name.is_empty() {
                    file = Some(UploadFile {
                        file_name,
                        content_type,
                        bytes,
                    });
                }
            }
            _ => {}
        }
    }

    Ok(ReasonSubmission { form, file })
}

fn uploaded_names(respondent: &shared_types::RespondentEt3Model) -> Vec<String> {
    respondent
        .contest_claim_documents
        .iter()
        .filter_map(|item| item.document.as_ref())
        .map(|d| d.document_filename.clone())
        .collect()
}

/// GET /respondent-contest-claim-reason
pub async fn contest_claim_reason(session: SessionHandle) -> Response {
    let Some(ctx) = case_context(&session) else {
        return redirect_not_found();
    };
    let form = ContestClaimReasonForm {
        contest_claim_details: ctx.respondent.contest_claim_details.clone(),
        uploaded_documents: uploaded_names(&ctx.respondent),
        save_for_later: false,
    };
    render(&session, urls::RESPONDENT_CONTEST_CLAIM_REASON, form).into_response()
}

/// POST /respondent-contest-claim-reason
///
/// Multipart: `contest_claim_details` text and an optional
/// `contest_claim_document` file, checked before it is uploaded.
pub async fn post_contest_claim_reason(
    State(state): State<AppState>,
    session: SessionHandle,
    multipart: Multipart,
) -> Result<Response, AppError> {
    start_post(&session);
    let ReasonSubmission { mut form, file } = read_reason_submission(multipart).await?;
    let Some(ctx) = case_context(&session) else {
        return Ok(redirect_not_found());
    };
    form.uploaded_documents = uploaded_names(&ctx.respondent);

    let mut errors = FormErrors::new();
    errors.check(
        "contest_claim_details",
        is_field_filled_in(form.contest_claim_details.as_deref()),
    );
    errors.extend(form.form_errors());

    let file = match file {
        Some(_) if !state.config.features.document_upload => {
            tracing::info!("document upload disabled, ignoring attached file");
            None
        }
        other => other,
    };
    if let Some(upload) = &file {
        let max_bytes = state.config.uploads.max_bytes;
        let checked = check_file(DOCUMENT_FIELD, &upload.file_name, upload.bytes.len(), max_bytes);
        if let Some(error) = checked {
            errors.add(error);
        }
    }
    if !errors.is_empty() {
        return Ok(render_with_errors(
            &session,
            urls::RESPONDENT_CONTEST_CLAIM_REASON,
            errors.into_vec(),
            form,
        )
        .into_response());
    }

    let mut new_document = None;
    if let Some(upload) = file {
        let token = session.update(|s| s.access_token().map(str::to_string));
        let case_type_id = ctx
            .case
            .case_type_id
            .clone()
            .unwrap_or_else(|| DEFAULT_CASE_TYPE_ID.to_string());
        match state
            .case_api
            .upload_document(token.as_deref(), upload, &case_type_id)
            .await
        {
            Ok(uploaded) => {
                new_document = Some(document_type_item_from_upload(
                    &uploaded,
                    document_type::ET3_ATTACHMENT,
                ));
            }
            Err(e) => {
                let err = e.into_app_error();
                tracing::error!(
                    case_id = %ctx.case.id,
                    kind = %err.kind,
                    error = %err.message,
                    "document upload failed"
                );
                return Ok(render_with_errors(
                    &session,
                    urls::RESPONDENT_CONTEST_CLAIM_REASON,
                    vec![FormError::api()],
                    form,
                )
                .into_response());
            }
        }
    }

    let save_for_later = form.save_for_later;
    let status = if save_for_later {
        LinkStatus::InProgress
    } else {
        LinkStatus::Completed
    };
    let details = non_blank(form.contest_claim_details.as_deref());

    let result = save_respondent(
        &state,
        &session,
        Et3ModificationType::UpdateRespondent,
        SectionUpdate::hub(Et3HubLinkName::ContestClaim, status),
        |respondent| {
            respondent.contest_claim = Some(YesOrNo::Yes);
            respondent.contest_claim_details = details;
            respondent.contest_claim_documents.extend(new_document);
        },
    )
    .await;

    Ok(match result {
        Ok(()) => redirect_after_save(save_for_later, urls::RESPONDENT_RESPONSE_TASK_LIST),
        Err(e) => e.into_page_response(&session, urls::RESPONDENT_CONTEST_CLAIM_REASON, form),
    })
}

