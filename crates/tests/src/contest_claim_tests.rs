use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use std::sync::Arc;

use crate::common::{
    app_with_case, post_form, post_multipart, sample_case, seed_session, test_app_with_config,
    test_config, FakeCaseApi, Part, CASE_ID, UPLOADED_DOC_ID,
};

const PDF: &[u8] = b"%PDF-1.4 grounds of resistance";

fn contest_status(api: &FakeCaseApi) -> Option<String> {
    api.stored_respondent(CASE_ID)?
        .et3_hub_links_statuses?
        .get("contestClaim")
        .cloned()
}

#[tokio::test]
async fn not_contesting_completes_the_section() {
    let (app, _state, api, cookie) = app_with_case(sample_case());

    let response = post_form(
        &app,
        "/respondent-contest-claim",
        &cookie,
        &[("contest_claim", "No")],
    )
    .await;

    response.assert_redirect("/respondent-response-task-list");
    let stored = api.stored_respondent(CASE_ID).unwrap();
    assert_eq!(stored.et3_response_respondent_contest_claim.as_deref(), Some("No"));
    assert_eq!(contest_status(&api).as_deref(), Some("completed"));
}

#[tokio::test]
async fn contesting_asks_for_reasons() {
    let (app, _state, api, cookie) = app_with_case(sample_case());

    let response = post_form(
        &app,
        "/respondent-contest-claim",
        &cookie,
        &[("contest_claim", "Yes")],
    )
    .await;

    response.assert_redirect("/respondent-contest-claim-reason");
    assert_eq!(contest_status(&api).as_deref(), Some("inProgress"));
}

#[tokio::test]
async fn contest_answer_is_required() {
    let (app, _state, api, cookie) = app_with_case(sample_case());

    let response = post_form(&app, "/respondent-contest-claim", &cookie, &[]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.error_for("contest_claim").as_deref(), Some("required"));
    assert!(api.updates().is_empty());
}

#[tokio::test]
async fn reasons_with_a_document_are_uploaded_and_saved() {
    let (app, _state, api, cookie) = app_with_case(sample_case());

    let response = post_multipart(
        &app,
        "/respondent-contest-claim-reason",
        &cookie,
        &[
            Part::Text("contest_claim_details", "The claimant resigned voluntarily."),
            Part::File {
                name: "contest_claim_document",
                file_name: "grounds.pdf",
                content_type: "application/pdf",
                contents: PDF,
            },
        ],
    )
    .await;

    response.assert_redirect("/respondent-response-task-list");
    assert_eq!(api.uploads(), vec!["grounds.pdf".to_string()]);

    let stored = api.stored_respondent(CASE_ID).unwrap();
    assert_eq!(stored.et3_response_respondent_contest_claim.as_deref(), Some("Yes"));
    assert_eq!(
        stored.et3_response_contest_claim_details.as_deref(),
        Some("The claimant resigned voluntarily.")
    );
    let documents = stored.et3_response_contest_claim_document.unwrap();
    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].id.as_deref(), Some(UPLOADED_DOC_ID));
    let value = documents[0].value.as_ref().unwrap();
    assert_eq!(value.type_of_document.as_deref(), Some("ET3 Attachment"));
    assert_eq!(
        value
            .uploaded_document
            .as_ref()
            .and_then(|d| d.document_filename.as_deref()),
        Some("grounds.pdf")
    );
    assert_eq!(contest_status(&api).as_deref(), Some("completed"));
}

#[tokio::test]
async fn disallowed_file_type_is_rejected_before_upload() {
    let (app, _state, api, cookie) = app_with_case(sample_case());

    let response = post_multipart(
        &app,
        "/respondent-contest-claim-reason",
        &cookie,
        &[
            Part::Text("contest_claim_details", "See attached."),
            Part::File {
                name: "contest_claim_document",
                file_name: "grounds.exe",
                content_type: "application/octet-stream",
                contents: b"MZ",
            },
        ],
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.error_for("contest_claim_document").as_deref(),
        Some("invalidFileFormat")
    );
    assert!(api.uploads().is_empty());
    assert!(api.updates().is_empty());
}

#[tokio::test]
async fn oversized_file_is_rejected() {
    let (app, _state, api, cookie) = app_with_case(sample_case());
    let big = vec![b'x'; test_config().uploads.max_bytes + 1];

    let response = post_multipart(
        &app,
        "/respondent-contest-claim-reason",
        &cookie,
        &[
            Part::Text("contest_claim_details", "See attached."),
            Part::File {
                name: "contest_claim_document",
                file_name: "grounds.txt",
                content_type: "text/plain",
                contents: &big,
            },
        ],
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.error_for("contest_claim_document").as_deref(),
        Some("invalidFileSize")
    );
    assert!(api.uploads().is_empty());
}

#[tokio::test]
async fn reasons_are_required() {
    let (app, _state, api, cookie) = app_with_case(sample_case());

    let response = post_multipart(
        &app,
        "/respondent-contest-claim-reason",
        &cookie,
        &[Part::Text("contest_claim_details", "   ")],
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.error_for("contest_claim_details").as_deref(),
        Some("required")
    );
    assert!(api.updates().is_empty());
}

#[tokio::test]
async fn empty_file_part_is_treated_as_no_file() {
    let (app, _state, api, cookie) = app_with_case(sample_case());

    let response = post_multipart(
        &app,
        "/respondent-contest-claim-reason",
        &cookie,
        &[
            Part::Text("contest_claim_details", "No documents to add."),
            Part::File {
                name: "contest_claim_document",
                file_name: "",
                content_type: "application/octet-stream",
                contents: b"",
            },
        ],
    )
    .await;

    response.assert_redirect("/respondent-response-task-list");
    assert!(api.uploads().is_empty());
}

#[tokio::test]
async fn attached_file_is_ignored_when_uploads_are_off() {
    let case = sample_case();
    let api = Arc::new(FakeCaseApi::with_case(case.clone()));
    let mut config = test_config();
    config.features.document_upload = false;
    let (app, state) = test_app_with_config(api.clone(), config);
    let cookie = seed_session(&state, &case, shared_types::Language::En);

    let response = post_multipart(
        &app,
        "/respondent-contest-claim-reason",
        &cookie,
        &[
            Part::Text("contest_claim_details", "See attached."),
            Part::File {
                name: "contest_claim_document",
                file_name: "grounds.pdf",
                content_type: "application/pdf",
                contents: PDF,
            },
        ],
    )
    .await;

    response.assert_redirect("/respondent-response-task-list");
    assert!(api.uploads().is_empty());
    let stored = api.stored_respondent(CASE_ID).unwrap();
    assert_eq!(stored.et3_response_contest_claim_document, None);
}

#[tokio::test]
async fn failed_upload_reports_an_api_error() {
    let (app, _state, api, cookie) = app_with_case(sample_case());
    api.fail_uploads();

    let response = post_multipart(
        &app,
        "/respondent-contest-claim-reason",
        &cookie,
        &[
            Part::Text("contest_claim_details", "See attached."),
            Part::File {
                name: "contest_claim_document",
                file_name: "grounds.pdf",
                content_type: "application/pdf",
                contents: PDF,
            },
        ],
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["hasApiError"], true);
    assert!(api.updates().is_empty());
}
