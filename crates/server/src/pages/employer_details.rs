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
use crate::validation::{is_field_filled_in, is_one_of, is_valid_whole_number, FormErrors};

use super::{
    case_context, non_blank, redirect_after_save, redirect_not_found, render,
    render_with_errors, save_respondent, start_post, YES_NO,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RespondentEmployeesForm {
    #[serde(default)]
    #[validate(length(max = 100, code = "tooLong"))]
    pub employer_type: Option<String>,
    #[serde(default)]
    #[validate(length(max = 100, code = "tooLong"))]
    pub company_number: Option<String>,
    #[serde(default)]
    pub employment_count: Option<String>,
    #[serde(default)]
    pub multiple_sites: Option<String>,
    #[serde(default)]
    pub site_employment_count: Option<String>,
    #[serde(default, rename = "saveForLater", skip_serializing)]
    pub save_for_later: Option<String>,
}

impl RespondentEmployeesForm {
    fn errors(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        errors.check(
            "employment_count",
            is_field_filled_in(self.employment_count.as_deref())
                .or_else(|| is_valid_whole_number(self.employment_count.as_deref())),
        );
        errors.check("multiple_sites", is_one_of(self.multiple_sites.as_deref(), YES_NO));
        if self.multiple_sites.as_deref() == Some(YesOrNo::Yes.as_str()) {
            errors.check(
                "site_employment_count",
                is_valid_whole_number(self.site_employment_count.as_deref()),
            );
        }
        errors.extend(self.form_errors());
        errors
    }
}

/// GET /respondent-employees
pub async fn respondent_employees(session: SessionHandle) -> Response {
    let Some(ctx) = case_context(&session) else {
        return redirect_not_found();
    };
    let respondent = ctx.respondent;
    let form = RespondentEmployeesForm {
        employer_type: respondent.employer_type,
        company_number: respondent.company_number,
        employment_count: respondent.employment_count,
        multiple_sites: respondent.multiple_sites.map(|v| v.to_string()),
        site_employment_count: respondent.site_employment_count,
        save_for_later: None,
    };
    render(&session, urls::RESPONDENT_EMPLOYEES, form).into_response()
}

/// POST /respondent-employees
pub async fn post_respondent_employees(
    State(state): State<AppState>,
    session: SessionHandle,
    Form(form): Form<RespondentEmployeesForm>,
) -> Response {
    start_post(&session);
    let errors = form.errors();
    if !errors.is_empty() {
        return render_with_errors(&session, urls::RESPONDENT_EMPLOYEES, errors.into_vec(), form)
            .into_response();
    }

    let save_for_later = form.save_for_later.is_some();
    let status = if save_for_later {
        LinkStatus::InProgress
    } else {
        LinkStatus::Completed
    };
    let multiple_sites = form.multiple_sites.as_deref().and_then(YesOrNo::from_api);
    let employer_type = non_blank(form.employer_type.as_deref());
    let company_number = non_blank(form.company_number.as_deref());
    let employment_count = non_blank(form.employment_count.as_deref());
    let site_employment_count = non_blank(form.site_employment_count.as_deref())
        .filter(|_| multiple_sites == Some(YesOrNo::Yes));

    let result = save_respondent(
        &state,
        &session,
        Et3ModificationType::UpdateRespondent,
        SectionUpdate::hub(Et3HubLinkName::EmployerDetails, status),
        |respondent| {
            respondent.employer_type = employer_type;
            respondent.company_number = company_number;
            respondent.employment_count = employment_count;
            respondent.multiple_sites = multiple_sites;
            respondent.site_employment_count = site_employment_count;
        },
    )
    .await;

    match result {
        Ok(()) => redirect_after_save(save_for_later, urls::RESPONDENT_RESPONSE_TASK_LIST),
        Err(e) => e.into_page_response(&session, urls::RESPONDENT_EMPLOYEES, form),
    }
}
