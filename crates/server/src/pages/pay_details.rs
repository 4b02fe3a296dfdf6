use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Form,
};
use serde::{Deserialize, Serialize};
use shared_types::{
    Et3HubLinkName, Et3ModificationType, LinkStatus, PayFrequency, YesOrNoOrNotSure,
};
use validator::Validate;

use crate::error_convert::ValidateForm;
use crate::formatter::SectionUpdate;
use crate::session::SessionHandle;
use crate::state::AppState;
use crate::urls;
use crate::validation::{is_one_of, is_valid_currency, FormErrors};

use super::{
    case_context, non_blank, redirect_after_save, redirect_not_found, render,
    render_with_errors, save_respondent, start_post, YES_NO_NOT_SURE,
};

const PAY_FREQUENCIES: &[&str] = &["Weekly", "Monthly", "Annually"];

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ClaimantPayDetailsForm {
    #[serde(default)]
    pub earning_details_correct: Option<String>,
    #[serde(default)]
    pub pay_frequency: Option<String>,
    #[serde(default)]
    pub pay_before_tax: Option<String>,
    #[serde(default)]
    pub pay_takehome: Option<String>,
    #[serde(default)]
    pub is_notice_correct: Option<String>,
    #[serde(default)]
    #[validate(length(max = 2500, code = "tooLong"))]
    pub correct_notice_details: Option<String>,
    #[serde(default)]
    pub is_pension_correct: Option<String>,
    #[serde(default)]
    #[validate(length(max = 2500, code = "tooLong"))]
    pub pension_correct_details: Option<String>,
    #[serde(default, rename = "saveForLater", skip_serializing)]
    pub save_for_later: Option<String>,
}

fn optional_answer(errors: &mut FormErrors, property: &str, value: Option<&str>, allowed: &[&str]) {
    if non_blank(value).is_some() {
        errors.check(property, is_one_of(value, allowed));
    }
}

impl ClaimantPayDetailsForm {
    fn errors(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        errors.check(
            "earning_details_correct",
            is_one_of(self.earning_details_correct.as_deref(), YES_NO_NOT_SURE),
        );
        optional_answer(
            &mut errors,
            "pay_frequency",
            self.pay_frequency.as_deref(),
            PAY_FREQUENCIES,
        );
        errors.check("pay_before_tax", is_valid_currency(self.pay_before_tax.as_deref()));
        errors.check("pay_takehome", is_valid_currency(self.pay_takehome.as_deref()));
        optional_answer(
            &mut errors,
            "is_notice_correct",
            self.is_notice_correct.as_deref(),
            YES_NO_NOT_SURE,
        );
        optional_answer(
            &mut errors,
            "is_pension_correct",
            self.is_pension_correct.as_deref(),
            YES_NO_NOT_SURE,
        );
        errors.extend(self.form_errors());
        errors
    }
}

/// GET /claimant-pay-details
pub async fn claimant_pay_details(session: SessionHandle) -> Response {
    let Some(ctx) = case_context(&session) else {
        return redirect_not_found();
    };
    let r = ctx.respondent;
    let form = ClaimantPayDetailsForm {
        earning_details_correct: r.earning_details_correct.map(|v| v.to_string()),
        pay_frequency: r.pay_frequency.map(|v| v.to_string()),
        pay_before_tax: r.pay_before_tax,
        pay_takehome: r.pay_takehome,
        is_notice_correct: r.is_notice_correct.map(|v| v.to_string()),
        correct_notice_details: r.correct_notice_details,
        is_pension_correct: r.is_pension_correct.map(|v| v.to_string()),
        pension_correct_details: r.pension_correct_details,
        save_for_later: None,
    };
    render(&session, urls::CLAIMANT_PAY_DETAILS, form).into_response()
}

/// POST /claimant-pay-details
pub async fn post_claimant_pay_details(
    State(state): State<AppState>,
    session: SessionHandle,
    Form(form): Form<ClaimantPayDetailsForm>,
) -> Response {
    start_post(&session);
    let errors = form.errors();
    if !errors.is_empty() {
        return render_with_errors(&session, urls::CLAIMANT_PAY_DETAILS, errors.into_vec(), form)
            .into_response();
    }

    let save_for_later = form.save_for_later.is_some();
    let status = if save_for_later {
        LinkStatus::InProgress
    } else {
        LinkStatus::Completed
    };
    let answers = form.clone();

    let result = save_respondent(
        &state,
        &session,
        Et3ModificationType::UpdateRespondent,
        SectionUpdate::hub(Et3HubLinkName::PayPensionBenefitDetails, status),
        |r| {
            r.earning_details_correct = answers
                .earning_details_correct
                .as_deref()
                .and_then(YesOrNoOrNotSure::from_api);
            r.pay_frequency = answers.pay_frequency.as_deref().and_then(PayFrequency::from_api);
            r.pay_before_tax = non_blank(answers.pay_before_tax.as_deref());
            r.pay_takehome = non_blank(answers.pay_takehome.as_deref());
            r.is_notice_correct = answers
                .is_notice_correct
                .as_deref()
                .and_then(YesOrNoOrNotSure::from_api);
            r.correct_notice_details = non_blank(answers.correct_notice_details.as_deref());
            r.is_pension_correct = answers
                .is_pension_correct
                .as_deref()
                .and_then(YesOrNoOrNotSure::from_api);
            r.pension_correct_details = non_blank(answers.pension_correct_details.as_deref());
        },
    )
    .await;

    match result {
        Ok(()) => redirect_after_save(save_for_later, urls::RESPONDENT_RESPONSE_TASK_LIST),
        Err(e) => e.into_page_response(&session, urls::CLAIMANT_PAY_DETAILS, form),
    }
}
