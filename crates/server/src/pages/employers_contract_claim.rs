use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
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
pub struct EmployersContractClaimForm {
    #[serde(default)]
    pub employer_claim: Option<String>,
    #[serde(default)]
    #[validate(length(max = 2500, code = "tooLong"))]
    pub employer_claim_details: Option<String>,
    #[serde(default, rename = "saveForLater", skip_serializing)]
    pub save_for_later: Option<String>,
}

impl EmployersContractClaimForm {
    fn errors(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        errors.check("employer_claim", is_one_of(self.employer_claim.as_deref(), YES_NO));
        if self.employer_claim.as_deref() == Some(YesOrNo::Yes.as_str()) {
            errors.check(
                "employer_claim_details",
                is_field_filled_in(self.employer_claim_details.as_deref()),
            );
        }
        errors.extend(self.form_errors());
        errors
    }
}

/// GET /employers-contract-claim
///
/// Only offered when the claim includes breach of contract.
pub async fn employers_contract_claim(session: SessionHandle) -> Response {
    let Some(ctx) = case_context(&session) else {
        return redirect_not_found();
    };
    if !ctx.case.includes_breach_of_contract() {
        return Redirect::to(urls::RESPONDENT_RESPONSE_TASK_LIST).into_response();
    }
    let form = EmployersContractClaimForm {
        employer_claim: ctx.respondent.employer_claim.map(|v| v.to_string()),
        employer_claim_details: ctx.respondent.employer_claim_details,
        save_for_later: None,
    };
    render(&session, urls::EMPLOYERS_CONTRACT_CLAIM, form).into_response()
}

/// POST /employers-contract-claim
pub async fn post_employers_contract_claim(
    State(state): State<AppState>,
    session: SessionHandle,
    Form(form): Form<EmployersContractClaimForm>,
) -> Response {
    start_post(&session);
    let Some(ctx) = case_context(&session) else {
        return redirect_not_found();
    };
    if !ctx.case.includes_breach_of_contract() {
        return Redirect::to(urls::RESPONDENT_RESPONSE_TASK_LIST).into_response();
    }

    let errors = form.errors();
    if !errors.is_empty() {
        let errors = errors.into_vec();
        return render_with_errors(&session, urls::EMPLOYERS_CONTRACT_CLAIM, errors, form)
            .into_response();
    }

    let save_for_later = form.save_for_later.is_some();
    let status = if save_for_later {
        LinkStatus::InProgress
    } else {
        LinkStatus::Completed
    };
    let employer_claim = form.employer_claim.as_deref().and_then(YesOrNo::from_api);
    let details = non_blank(form.employer_claim_details.as_deref())
        .filter(|_| employer_claim == Some(YesOrNo::Yes));

    let result = save_respondent(
        &state,
        &session,
        Et3ModificationType::UpdateRespondent,
        SectionUpdate::hub(Et3HubLinkName::EmployersContractClaim, status),
        |respondent| {
            respondent.employer_claim = employer_claim;
            respondent.employer_claim_details = details;
        },
    )
    .await;

    match result {
        Ok(()) => redirect_after_save(save_for_later, urls::RESPONDENT_RESPONSE_TASK_LIST),
        Err(e) => e.into_page_response(&session, urls::EMPLOYERS_CONTRACT_CLAIM, form),
    }
}
