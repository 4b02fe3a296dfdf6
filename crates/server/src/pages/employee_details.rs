//! Employee details pages that follow the ACAS certificate: employment dates,
//! whether employment continues, job title and average weekly hours. The last
//! page completes the conciliation and employee details section.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Form,
};
use serde::{Deserialize, Serialize};
use shared_types::{
    error_type, CaseDate, Et3HubLinkName, Et3ModificationType, LinkStatus, RespondentEt3Model,
    YesOrNoOrNotSure,
};
use validator::Validate;

use crate::dates;
use crate::error_convert::ValidateForm;
use crate::formatter::SectionUpdate;
use crate::session::SessionHandle;
use crate::state::AppState;
use crate::urls;
use crate::validation::{
    is_field_filled_in, is_one_of, is_valid_avg_weekly_hours, is_valid_case_date, FormErrors,
};

use super::{
    case_context, non_blank, redirect_after_save, redirect_not_found, render,
    render_with_errors, save_respondent, start_post, SaveError, YES_NO_NOT_SURE,
};

fn answer(value: Option<&str>) -> Option<YesOrNoOrNotSure> {
    value.map(str::trim).and_then(YesOrNoOrNotSure::from_api)
}

fn status_for(save_for_later: bool) -> LinkStatus {
    if save_for_later {
        LinkStatus::InProgress
    } else {
        LinkStatus::Completed
    }
}

/// Save answers from one of the intermediate pages, leaving the section in
/// progress.
async fn save_in_progress(
    state: &AppState,
    session: &SessionHandle,
    edit: impl FnOnce(&mut RespondentEt3Model),
) -> Result<(), SaveError> {
    save_respondent(
        state,
        session,
        Et3ModificationType::UpdateRespondent,
        SectionUpdate::hub(
            Et3HubLinkName::ConciliationAndEmployeeDetails,
            LinkStatus::InProgress,
        ),
        edit,
    )
    .await
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmploymentDatesForm {
    #[serde(default)]
    pub are_dates_correct: Option<String>,
    #[serde(default, rename = "saveForLater", skip_serializing)]
    pub save_for_later: Option<String>,
}

impl EmploymentDatesForm {
    fn errors(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        errors.check(
            "are_dates_correct",
            is_one_of(self.are_dates_correct.as_deref(), YES_NO_NOT_SURE),
        );
        errors
    }
}

/// GET /claimant-employment-dates
pub async fn employment_dates(session: SessionHandle) -> Response {
    let Some(ctx) = case_context(&session) else {
        return redirect_not_found();
    };
    let form = EmploymentDatesForm {
        are_dates_correct: ctx.respondent.are_dates_correct.map(|v| v.to_string()),
        save_for_later: None,
    };
    render(&session, urls::CLAIMANT_EMPLOYMENT_DATES, form).into_response()
}

/// POST /claimant-employment-dates
pub async fn post_employment_dates(
    State(state): State<AppState>,
    session: SessionHandle,
    Form(form): Form<EmploymentDatesForm>,
) -> Response {
    start_post(&session);
    let errors = form.errors();
    if !errors.is_empty() {
        return render_with_errors(
            &session,
            urls::CLAIMANT_EMPLOYMENT_DATES,
            errors.into_vec(),
            form,
        )
        .into_response();
    }

    let are_dates_correct = answer(form.are_dates_correct.as_deref());
    let result = save_in_progress(&state, &session, |r| {
        r.are_dates_correct = are_dates_correct;
        if are_dates_correct != Some(YesOrNoOrNotSure::No) {
            r.employment_start_date = None;
            r.employment_end_date = None;
            r.employment_information = None;
        }
    })
    .await;

    let next = if are_dates_correct == Some(YesOrNoOrNotSure::No) {
        urls::CLAIMANT_EMPLOYMENT_DATES_ENTER
    } else {
        urls::IS_CLAIMANT_EMPLOYMENT_CONTINUING
    };
    match result {
        Ok(()) => redirect_after_save(form.save_for_later.is_some(), next),
        Err(e) => e.into_page_response(&session, urls::CLAIMANT_EMPLOYMENT_DATES, form),
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct EmploymentDatesEnterForm {
    #[serde(default)]
    pub employment_start_date_day: String,
    #[serde(default)]
    pub employment_start_date_month: String,
    #[serde(default)]
    pub employment_start_date_year: String,
    #[serde(default)]
    pub employment_end_date_day: String,
    #[serde(default)]
    pub employment_end_date_month: String,
    #[serde(default)]
    pub employment_end_date_year: String,
    #[serde(default)]
    #[validate(length(max = 2500, code = "tooLong"))]
    pub employment_information: Option<String>,
    #[serde(default, rename = "saveForLater", skip_serializing)]
    pub save_for_later: Option<String>,
}

impl EmploymentDatesEnterForm {
    fn start_date(&self) -> CaseDate {
        CaseDate {
            day: self.employment_start_date_day.clone(),
            month: self.employment_start_date_month.clone(),
            year: self.employment_start_date_year.clone(),
        }
    }

    fn end_date(&self) -> CaseDate {
        CaseDate {
            day: self.employment_end_date_day.clone(),
            month: self.employment_end_date_month.clone(),
            year: self.employment_end_date_year.clone(),
        }
    }

    fn has_end_date(&self) -> bool {
        [
            &self.employment_end_date_day,
            &self.employment_end_date_month,
            &self.employment_end_date_year,
        ]
        .iter()
        .any(|part| !part.trim().is_empty())
    }

    fn errors(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        let start = self.start_date();
        errors.check("employment_start_date", is_valid_case_date(&start));
        if self.has_end_date() {
            let end = self.end_date();
            match is_valid_case_date(&end) {
                Some(error) => errors.check("employment_end_date", Some(error)),
                None => {
                    // API dates compare in calendar order as plain strings.
                    let before_start = dates::convert_to_api_format(&start)
                        .zip(dates::convert_to_api_format(&end))
                        .is_some_and(|(start, end)| end < start);
                    if before_start {
                        errors.check("employment_end_date", Some(error_type::INVALID));
                    }
                }
            }
        }
        errors.extend(self.form_errors());
        errors
    }
}

/// GET /claimant-employment-dates-enter
pub async fn employment_dates_enter(session: SessionHandle) -> Response {
    let Some(ctx) = case_context(&session) else {
        return redirect_not_found();
    };
    let r = ctx.respondent;
    let start = r
        .employment_start_date
        .as_deref()
        .and_then(dates::parse_to_case_date)
        .unwrap_or_default();
    let end = r
        .employment_end_date
        .as_deref()
        .and_then(dates::parse_to_case_date)
        .unwrap_or_default();
    let form = EmploymentDatesEnterForm {
        employment_start_date_day: start.day,
        employment_start_date_month: start.month,
        employment_start_date_year: start.year,
        employment_end_date_day: end.day,
        employment_end_date_month: end.month,
        employment_end_date_year: end.year,
        employment_information: r.employment_information,
        save_for_later: None,
    };
    render(&session, urls::CLAIMANT_EMPLOYMENT_DATES_ENTER, form).into_response()
}

/// POST /claimant-employment-dates-enter
pub async fn post_employment_dates_enter(
    State(state): State<AppState>,
    session: SessionHandle,
    Form(form): Form<EmploymentDatesEnterForm>,
) -> Response {
    start_post(&session);
    let errors = form.errors();
    if !errors.is_empty() {
        return render_with_errors(
            &session,
            urls::CLAIMANT_EMPLOYMENT_DATES_ENTER,
            errors.into_vec(),
            form,
        )
        .into_response();
    }

    let start = dates::convert_to_api_format(&form.start_date());
    let end = form
        .has_end_date()
        .then(|| dates::convert_to_api_format(&form.end_date()))
        .flatten();
    let information = non_blank(form.employment_information.as_deref());
    let result = save_in_progress(&state, &session, |r| {
        r.employment_start_date = start;
        r.employment_end_date = end;
        r.employment_information = information;
    })
    .await;

    match result {
        Ok(()) => redirect_after_save(
            form.save_for_later.is_some(),
            urls::IS_CLAIMANT_EMPLOYMENT_CONTINUING,
        ),
        Err(e) => e.into_page_response(&session, urls::CLAIMANT_EMPLOYMENT_DATES_ENTER, form),
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmploymentContinuingForm {
    #[serde(default)]
    pub continuing_employment: Option<String>,
    #[serde(default, rename = "saveForLater", skip_serializing)]
    pub save_for_later: Option<String>,
}

/// GET /is-claimant-employment-continuing
pub async fn employment_continuing(session: SessionHandle) -> Response {
    let Some(ctx) = case_context(&session) else {
        return redirect_not_found();
    };
    let form = EmploymentContinuingForm {
        continuing_employment: ctx.respondent.continuing_employment.map(|v| v.to_string()),
        save_for_later: None,
    };
    render(&session, urls::IS_CLAIMANT_EMPLOYMENT_CONTINUING, form).into_response()
}

/// POST /is-claimant-employment-continuing
pub async fn post_employment_continuing(
    State(state): State<AppState>,
    session: SessionHandle,
    Form(form): Form<EmploymentContinuingForm>,
) -> Response {
    start_post(&session);
    let mut errors = FormErrors::new();
    errors.check(
        "continuing_employment",
        is_one_of(form.continuing_employment.as_deref(), YES_NO_NOT_SURE),
    );
    if !errors.is_empty() {
        return render_with_errors(
            &session,
            urls::IS_CLAIMANT_EMPLOYMENT_CONTINUING,
            errors.into_vec(),
            form,
        )
        .into_response();
    }

    let continuing = answer(form.continuing_employment.as_deref());
    let result = save_in_progress(&state, &session, |r| {
        r.continuing_employment = continuing;
    })
    .await;

    match result {
        Ok(()) => redirect_after_save(form.save_for_later.is_some(), urls::CLAIMANT_JOB_TITLE),
        Err(e) => e.into_page_response(&session, urls::IS_CLAIMANT_EMPLOYMENT_CONTINUING, form),
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct JobTitleForm {
    #[serde(default)]
    pub is_job_title_correct: Option<String>,
    #[serde(default)]
    #[validate(length(max = 100, code = "tooLong"))]
    pub correct_job_title: Option<String>,
    #[serde(default, rename = "saveForLater", skip_serializing)]
    pub save_for_later: Option<String>,
}

impl JobTitleForm {
    fn errors(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        errors.check(
            "is_job_title_correct",
            is_one_of(self.is_job_title_correct.as_deref(), YES_NO_NOT_SURE),
        );
        if answer(self.is_job_title_correct.as_deref()) == Some(YesOrNoOrNotSure::No) {
            errors.check(
                "correct_job_title",
                is_field_filled_in(self.correct_job_title.as_deref()),
            );
        }
        errors.extend(self.form_errors());
        errors
    }
}

/// GET /claimant-job-title
pub async fn job_title(session: SessionHandle) -> Response {
    let Some(ctx) = case_context(&session) else {
        return redirect_not_found();
    };
    let form = JobTitleForm {
        is_job_title_correct: ctx.respondent.is_job_title_correct.map(|v| v.to_string()),
        correct_job_title: ctx.respondent.correct_job_title,
        save_for_later: None,
    };
    render(&session, urls::CLAIMANT_JOB_TITLE, form).into_response()
}

/// POST /claimant-job-title
pub async fn post_job_title(
    State(state): State<AppState>,
    session: SessionHandle,
    Form(form): Form<JobTitleForm>,
) -> Response {
    start_post(&session);
    let errors = form.errors();
    if !errors.is_empty() {
        return render_with_errors(&session, urls::CLAIMANT_JOB_TITLE, errors.into_vec(), form)
            .into_response();
    }

    let correct = answer(form.is_job_title_correct.as_deref());
    let title = non_blank(form.correct_job_title.as_deref())
        .filter(|_| correct == Some(YesOrNoOrNotSure::No));
    let result = save_in_progress(&state, &session, |r| {
        r.is_job_title_correct = correct;
        r.correct_job_title = title;
    })
    .await;

    match result {
        Ok(()) => redirect_after_save(
            form.save_for_later.is_some(),
            urls::CLAIMANT_AVERAGE_WEEKLY_WORK_HOURS,
        ),
        Err(e) => e.into_page_response(&session, urls::CLAIMANT_JOB_TITLE, form),
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeeklyHoursForm {
    #[serde(default)]
    pub claimant_weekly_hours: Option<String>,
    #[serde(default)]
    pub claimant_correct_hours: Option<String>,
    #[serde(default, rename = "saveForLater", skip_serializing)]
    pub save_for_later: Option<String>,
}

impl WeeklyHoursForm {
    fn errors(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        errors.check(
            "claimant_weekly_hours",
            is_one_of(self.claimant_weekly_hours.as_deref(), YES_NO_NOT_SURE),
        );
        if answer(self.claimant_weekly_hours.as_deref()) == Some(YesOrNoOrNotSure::No) {
            let hours = self.claimant_correct_hours.as_deref();
            errors.check(
                "claimant_correct_hours",
                is_field_filled_in(hours).or_else(|| is_valid_avg_weekly_hours(hours)),
            );
        }
        errors
    }
}

/// GET /claimant-average-weekly-work-hours
pub async fn weekly_hours(session: SessionHandle) -> Response {
    let Some(ctx) = case_context(&session) else {
        return redirect_not_found();
    };
    let form = WeeklyHoursForm {
        claimant_weekly_hours: ctx.respondent.claimant_weekly_hours.map(|v| v.to_string()),
        claimant_correct_hours: ctx.respondent.claimant_correct_hours,
        save_for_later: None,
    };
    render(&session, urls::CLAIMANT_AVERAGE_WEEKLY_WORK_HOURS, form).into_response()
}

/// POST /claimant-average-weekly-work-hours
pub async fn post_weekly_hours(
    State(state): State<AppState>,
    session: SessionHandle,
    Form(form): Form<WeeklyHoursForm>,
) -> Response {
    start_post(&session);
    let errors = form.errors();
    if !errors.is_empty() {
        return render_with_errors(
            &session,
            urls::CLAIMANT_AVERAGE_WEEKLY_WORK_HOURS,
            errors.into_vec(),
            form,
        )
        .into_response();
    }

    let save_for_later = form.save_for_later.is_some();
    let weekly_hours = answer(form.claimant_weekly_hours.as_deref());
    let hours = non_blank(form.claimant_correct_hours.as_deref())
        .filter(|_| weekly_hours == Some(YesOrNoOrNotSure::No));
    let result = save_respondent(
        &state,
        &session,
        Et3ModificationType::UpdateRespondent,
        SectionUpdate::hub(
            Et3HubLinkName::ConciliationAndEmployeeDetails,
            status_for(save_for_later),
        ),
        |r| {
            r.claimant_weekly_hours = weekly_hours;
            r.claimant_correct_hours = hours;
        },
    )
    .await;

    match result {
        Ok(()) => redirect_after_save(save_for_later, urls::RESPONDENT_RESPONSE_TASK_LIST),
        Err(e) => e.into_page_response(&session, urls::CLAIMANT_AVERAGE_WEEKLY_WORK_HOURS, form),
    }
}
