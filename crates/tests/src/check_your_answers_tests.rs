use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use shared_types::Et3ModificationType;

use crate::common::{
    app_with_case, get, hub_statuses, post_form, sample_case, with_respondent, CASE_ID,
};

const ALL_CORE_COMPLETED: &[(&str, &str)] = &[
    ("contactDetails", "completed"),
    ("employerDetails", "completed"),
    ("conciliationAndEmployeeDetails", "completed"),
    ("payPensionBenefitDetails", "completed"),
    ("contestClaim", "completed"),
    ("checkYorAnswers", "notStartedYet"),
];

fn completed_case() -> shared_types::ccd::CaseApiDataResponse {
    with_respondent(sample_case(), |r| {
        r.et3_hub_links_statuses = Some(hub_statuses(ALL_CORE_COMPLETED));
        r.response_respondent_name = Some("Acme Widgets Ltd".to_string());
    })
}

#[tokio::test]
async fn summary_lists_sections_and_blocks_submission_until_complete() {
    let (app, _state, _api, cookie) = app_with_case(sample_case());

    let response = get(&app, "/check-your-answers-et3", &cookie).await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["canSubmit"], false);
    assert_eq!(data["sections"].as_array().unwrap().len(), 5);
    assert_eq!(data["sections"][0]["changeUrl"], "/respondent-name");
}

#[tokio::test]
async fn incomplete_response_cannot_be_submitted() {
    let (app, _state, api, cookie) = app_with_case(sample_case());

    let response = post_form(&app, "/check-your-answers-et3", &cookie, &[]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.error_for("hiddenErrorField").as_deref(), Some("required"));
    assert!(api.updates().is_empty());
}

#[tokio::test]
async fn complete_response_is_submitted() {
    let (app, _state, api, cookie) = app_with_case(completed_case());

    let summary = get(&app, "/check-your-answers-et3", &cookie).await;
    assert_eq!(summary.body["data"]["canSubmit"], true);

    let response = post_form(&app, "/check-your-answers-et3", &cookie, &[]).await;

    response.assert_redirect("/application-submitted");
    let updates = api.updates();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].request_type, Et3ModificationType::SubmitRespondent);
    assert_eq!(
        updates[0].response_hub_links_section_id.as_deref(),
        Some("checkYorAnswers")
    );
    assert_eq!(
        api.stored_respondent(CASE_ID).unwrap().response_received.as_deref(),
        Some("Yes")
    );

    let submitted = get(&app, "/application-submitted", &cookie).await;
    assert_eq!(submitted.status, StatusCode::OK);
    let data = &submitted.body["data"];
    assert_eq!(data["et3Status"], "submitted");
    assert_eq!(data["submittedOn"], "20 May 2024");
    assert_eq!(data["ethosCaseReference"], "6000001/2024");
    assert_eq!(data["respondentName"], "Acme Widgets Ltd");
}

#[tokio::test]
async fn failed_submission_keeps_the_user_on_the_summary() {
    let (app, _state, api, cookie) = app_with_case(completed_case());
    api.fail_updates();

    let response = post_form(&app, "/check-your-answers-et3", &cookie, &[]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["page"], "check-your-answers-et3");
    assert_eq!(response.body["hasApiError"], true);
}

#[tokio::test]
async fn submission_locks_the_response_even_when_the_reply_has_no_case() {
    let (app, _state, api, cookie) = app_with_case(completed_case());
    api.reply_without_case_data();

    let response = post_form(&app, "/check-your-answers-et3", &cookie, &[]).await;
    response.assert_redirect("/application-submitted");

    let submitted = get(&app, "/application-submitted", &cookie).await;
    assert_eq!(submitted.body["data"]["et3Status"], "submitted");

    let blocked = get(&app, "/respondent-name", &cookie).await;
    blocked.assert_redirect("/respondent-response-task-list");
}
