//! Which wizard pages stay reachable once the response has been submitted.

use shared_types::RespondentEt3Model;

use crate::urls;

/// Pages that edit the response. Closed after submission.
pub const NOT_ALLOWED_AFTER_SUBMISSION: &[&str] = &[
    urls::RESPONDENT_RESPONSE_LANDING,
    urls::RESPONDENT_NAME,
    urls::HEARING_PREFERENCES,
    urls::RESPONDENT_CONTACT_PREFERENCES,
    urls::RESPONDENT_EMPLOYEES,
    urls::ACAS_EARLY_CONCILIATION_CERTIFICATE,
    urls::CLAIMANT_EMPLOYMENT_DATES,
    urls::CLAIMANT_EMPLOYMENT_DATES_ENTER,
    urls::IS_CLAIMANT_EMPLOYMENT_CONTINUING,
    urls::CLAIMANT_JOB_TITLE,
    urls::CLAIMANT_AVERAGE_WEEKLY_WORK_HOURS,
    urls::CLAIMANT_PAY_DETAILS,
    urls::RESPONDENT_CONTEST_CLAIM,
    urls::RESPONDENT_CONTEST_CLAIM_REASON,
    urls::EMPLOYERS_CONTRACT_CLAIM,
    urls::CHECK_YOUR_ANSWERS_ET3,
];

const LANGUAGE_PARAMS: [&str; 2] = ["lng=en", "lng=cy"];

/// Drop `lng=en` / `lng=cy` from the query string, wherever it appears.
pub fn strip_language_param(path: &str) -> String {
    let Some((base, query)) = path.split_once('?') else {
        return path.to_string();
    };
    let kept: Vec<&str> = query
        .split('&')
        .filter(|pair| !pair.is_empty() && !LANGUAGE_PARAMS.contains(pair))
        .collect();
    if kept.is_empty() {
        base.to_string()
    } else {
        format!("{base}?{}", kept.join("&"))
    }
}

pub fn is_not_allowed_after_submission(path: &str) -> bool {
    let stripped = strip_language_param(path);
    let bare = stripped.split('?').next().unwrap_or_default();
    let bare = if bare.len() > 1 {
        bare.trim_end_matches('/')
    } else {
        bare
    };
    NOT_ALLOWED_AFTER_SUBMISSION.contains(&bare)
}

/// Whether `path` may be served to the user answering for `respondent`.
pub fn is_allowed(path: &str, respondent: Option<&RespondentEt3Model>) -> bool {
    let submitted = respondent.is_some_and(RespondentEt3Model::is_submitted);
    !(submitted && is_not_allowed_after_submission(path))
}
