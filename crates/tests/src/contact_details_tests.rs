use std::sync::Arc;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use shared_types::{Et3ModificationType, Language};

use crate::common::{
    app_with_case, get, post_form, sample_case, seed_session, test_app, FakeCaseApi, CASE_ID,
};

#[tokio::test]
async fn respondent_name_page_shows_the_name_on_the_claim() {
    let (app, _state, _api, cookie) = app_with_case(sample_case());

    let response = get(&app, "/respondent-name", &cookie).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["respondentName"], "Acme Widgets Ltd");
    assert!(response.body["data"]["form"]["respondent_name_question"].is_null());
}

#[tokio::test]
async fn confirming_the_name_saves_and_moves_on() {
    let (app, _state, api, cookie) = app_with_case(sample_case());

    let response = post_form(
        &app,
        "/respondent-name",
        &cookie,
        &[("respondent_name_question", "Yes")],
    )
    .await;

    response.assert_redirect("/hearing-preferences");
    let updates = api.updates();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].request_type, Et3ModificationType::UpdateRespondent);
    assert_eq!(updates[0].case_submission_reference, CASE_ID);
    assert_eq!(
        updates[0].response_hub_links_section_id.as_deref(),
        Some("contactDetails")
    );
    assert_eq!(
        updates[0].response_hub_links_section_status.as_deref(),
        Some("inProgress")
    );

    let stored = api.stored_respondent(CASE_ID).unwrap();
    assert_eq!(
        stored.response_respondent_name.as_deref(),
        Some("Acme Widgets Ltd")
    );

    let page = get(&app, "/respondent-name", &cookie).await;
    assert_eq!(page.body["data"]["form"]["respondent_name_question"], "Yes");
}

#[tokio::test]
async fn a_different_name_is_required_when_the_claim_has_it_wrong() {
    let (app, _state, api, cookie) = app_with_case(sample_case());

    let response = post_form(
        &app,
        "/respondent-name",
        &cookie,
        &[("respondent_name_question", "No"), ("response_respondent_name", " ")],
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.error_for("response_respondent_name").as_deref(),
        Some("required")
    );
    assert!(api.updates().is_empty());

    let response = post_form(
        &app,
        "/respondent-name",
        &cookie,
        &[
            ("respondent_name_question", "No"),
            ("response_respondent_name", "Acme Widgets (Holdings) Ltd"),
        ],
    )
    .await;

    response.assert_redirect("/hearing-preferences");
    let stored = api.stored_respondent(CASE_ID).unwrap();
    assert_eq!(
        stored.response_respondent_name.as_deref(),
        Some("Acme Widgets (Holdings) Ltd")
    );
}

#[tokio::test]
async fn errors_show_once_on_the_next_page_load() {
    let (app, _state, _api, cookie) = app_with_case(sample_case());

    let response = post_form(&app, "/respondent-name", &cookie, &[]).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.error_properties(), vec!["respondent_name_question"]);

    let reload = get(&app, "/respondent-name", &cookie).await;
    assert_eq!(reload.error_properties(), vec!["respondent_name_question"]);

    let again = get(&app, "/respondent-name", &cookie).await;
    assert!(again.error_properties().is_empty());
}

#[tokio::test]
async fn save_for_later_returns_to_the_task_list() {
    let (app, _state, api, cookie) = app_with_case(sample_case());

    let response = post_form(
        &app,
        "/respondent-name",
        &cookie,
        &[("respondent_name_question", "Yes"), ("saveForLater", "true")],
    )
    .await;

    response.assert_redirect("/respondent-response-task-list");
    assert_eq!(api.updates().len(), 1);
}

#[tokio::test]
async fn api_failure_reports_a_hidden_field_error() {
    let (app, _state, api, cookie) = app_with_case(sample_case());
    api.fail_updates();

    let response = post_form(
        &app,
        "/respondent-name",
        &cookie,
        &[("respondent_name_question", "Yes")],
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["hasApiError"], true);
    assert_eq!(response.error_for("hiddenErrorField").as_deref(), Some("api"));
}

#[tokio::test]
async fn hearing_preferences_accept_several_formats() {
    let (app, _state, api, cookie) = app_with_case(sample_case());

    let response = post_form(
        &app,
        "/hearing-preferences",
        &cookie,
        &[
            ("hearing_format", "Video"),
            ("hearing_format", "Phone"),
            ("support_needed", "Yes"),
            ("support_details", "Step-free access"),
        ],
    )
    .await;

    response.assert_redirect("/respondent-contact-preferences");
    let stored = api.stored_respondent(CASE_ID).unwrap();
    assert_eq!(
        stored.et3_response_hearing_respondent,
        Some(vec!["Video".to_string(), "Phone".to_string()])
    );
    assert_eq!(stored.et3_response_respondent_support_needed.as_deref(), Some("Yes"));
    assert_eq!(
        stored.et3_response_respondent_support_details.as_deref(),
        Some("Step-free access")
    );
}

#[tokio::test]
async fn neither_format_cannot_be_combined_with_others() {
    let (app, _state, api, cookie) = app_with_case(sample_case());

    let response = post_form(
        &app,
        "/hearing-preferences",
        &cookie,
        &[
            ("hearing_format", "Neither"),
            ("hearing_format", "Video"),
            ("support_needed", "No"),
        ],
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.error_for("hearing_format").as_deref(), Some("invalid"));
    assert!(api.updates().is_empty());
}

#[tokio::test]
async fn email_contact_needs_a_valid_address() {
    let (app, _state, api, cookie) = app_with_case(sample_case());

    let response = post_form(
        &app,
        "/respondent-contact-preferences",
        &cookie,
        &[
            ("contact_preference", "Email"),
            ("response_respondent_email", "not-an-email"),
        ],
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.error_for("response_respondent_email").as_deref(),
        Some("invalid")
    );
    assert!(api.updates().is_empty());
}

#[tokio::test]
async fn contact_preferences_complete_the_section() {
    let (app, _state, api, cookie) = app_with_case(sample_case());

    let response = post_form(
        &app,
        "/respondent-contact-preferences",
        &cookie,
        &[
            ("contact_preference", "Email"),
            ("response_respondent_email", "hr@acme.test"),
            ("response_respondent_phone", "01234 567890"),
            ("language_preference", "English"),
        ],
    )
    .await;

    response.assert_redirect("/respondent-response-task-list");
    let stored = api.stored_respondent(CASE_ID).unwrap();
    assert_eq!(stored.response_respondent_contact_preference.as_deref(), Some("Email"));
    assert_eq!(stored.response_respondent_email.as_deref(), Some("hr@acme.test"));
    assert_eq!(
        stored
            .et3_hub_links_statuses
            .unwrap()
            .get("contactDetails")
            .map(String::as_str),
        Some("completed")
    );

    let task_list = get(&app, "/respondent-response-task-list", &cookie).await;
    assert_eq!(
        task_list.body["data"]["overallStatus"],
        "1 of 5 tasks completed"
    );
}

#[tokio::test]
async fn saving_a_case_the_api_no_longer_has_goes_to_not_found() {
    let api = Arc::new(FakeCaseApi::default());
    let (app, state) = test_app(api.clone());
    let cookie = seed_session(&state, &sample_case(), Language::En);

    let response = post_form(
        &app,
        "/respondent-name",
        &cookie,
        &[("respondent_name_question", "Yes")],
    )
    .await;

    response.assert_redirect("/not-found");
    assert_eq!(api.updates().len(), 1);
}
