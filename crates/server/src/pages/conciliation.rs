use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Form,
};
use serde::{Deserialize, Serialize};
use shared_types::{Et3HubLinkName, Et3ModificationType, LinkStatus, YesOrNo};
use validator::Validate;

use crate::error_convert::ValidateForm;
use crate::formatter::SectionUpdate;
use crate::session::SessionHandle;
use crate::state::AppState;
use crate::urls;
use crate::validation::{is_field_filled_in, is_one_of, FormErrors};

use super::{
    case_context, non_blank, redirect_after_save, redirect_not_found, render,
    render_with_errors, save_respondent, start_post, YES_NO,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct AcasCertificateForm {
    #[serde(default)]
    pub acas_agree: Option<String>,
    #[serde(default)]
    #[validate(length(max = 2500, code = "tooLong"))]
    pub acas_agree_reason: Option<String>,
    #[serde(default, rename = "saveForLater", skip_serializing)]
    pub save_for_later: Option<String>,
}

impl AcasCertificateForm {
    fn errors(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        errors.check("acas_agree", is_one_of(self.acas_agree.as_deref(), YES_NO));
        if self.acas_agree.as_deref() == Some(YesOrNo::No.as_str()) {
            errors.check(
                "acas_agree_reason",
                is_field_filled_in(self.acas_agree_reason.as_deref()),
            );
        }
        errors.extend(self.form_errors());
        errors
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AcasCertificateView {
    pub acas_certificates: Vec<String>,
    pub form: AcasCertificateForm,
}

/// GET /acas-early-conciliation-certificate
pub async fn acas_certificate(session: SessionHandle) -> Response {
    let Some(ctx) = case_context(&session) else {
        return redirect_not_found();
    };
    let data = AcasCertificateView {
        acas_certificates: ctx
            .case
            .acas_certificates
            .iter()
            .filter_map(|item| item.document.as_ref())
            .map(|d| d.document_filename.clone())
            .collect(),
        form: AcasCertificateForm {
            acas_agree: ctx.respondent.acas_agree.map(|v| v.to_string()),
            acas_agree_reason: ctx.respondent.acas_agree_reason,
            save_for_later: None,
        },
    };
    render(&session, urls::ACAS_EARLY_CONCILIATION_CERTIFICATE, data).into_response()
}

/// POST /acas-early-conciliation-certificate
pub async fn post_acas_certificate(
    State(state): State<AppState>,
    session: SessionHandle,
    Form(form): Form<AcasCertificateForm>,
) -> Response {
    start_post(&session);
    let errors = form.errors();
    if !errors.is_empty() {
        return render_with_errors(
            &session,
            urls::ACAS_EARLY_CONCILIATION_CERTIFICATE,
            errors.into_vec(),
            form,
        )
        .into_response();
    }

    let save_for_later = form.save_for_later.is_some();
    let acas_agree = form.acas_agree.as_deref().and_then(YesOrNo::from_api);
    let reason = non_blank(form.acas_agree_reason.as_deref())
        .filter(|_| acas_agree == Some(YesOrNo::No));

    let result = save_respondent(
        &state,
        &session,
        Et3ModificationType::UpdateRespondent,
        SectionUpdate::hub(
            Et3HubLinkName::ConciliationAndEmployeeDetails,
            LinkStatus::InProgress,
        ),
        |respondent| {
            respondent.acas_agree = acas_agree;
            respondent.acas_agree_reason = reason;
        },
    )
    .await;

    match result {
        Ok(()) => redirect_after_save(save_for_later, urls::CLAIMANT_EMPLOYMENT_DATES),
        Err(e) => e.into_page_response(&session, urls::ACAS_EARLY_CONCILIATION_CERTIFICATE, form),
    }
}
