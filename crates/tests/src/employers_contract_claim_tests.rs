use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common::{app_with_case, breach_of_contract_case, get, post_form, sample_case, CASE_ID};

#[tokio::test]
async fn page_is_skipped_without_breach_of_contract() {
    let (app, _state, api, cookie) = app_with_case(sample_case());

    let page = get(&app, "/employers-contract-claim", &cookie).await;
    page.assert_redirect("/respondent-response-task-list");

    let post = post_form(
        &app,
        "/employers-contract-claim",
        &cookie,
        &[("employer_claim", "No")],
    )
    .await;
    post.assert_redirect("/respondent-response-task-list");
    assert!(api.updates().is_empty());
}

#[tokio::test]
async fn making_a_claim_needs_details() {
    let (app, _state, api, cookie) = app_with_case(breach_of_contract_case());

    let response = post_form(
        &app,
        "/employers-contract-claim",
        &cookie,
        &[("employer_claim", "Yes")],
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.error_for("employer_claim_details").as_deref(),
        Some("required")
    );
    assert!(api.updates().is_empty());
}

#[tokio::test]
async fn claim_details_complete_the_section() {
    let (app, _state, api, cookie) = app_with_case(breach_of_contract_case());

    let response = post_form(
        &app,
        "/employers-contract-claim",
        &cookie,
        &[
            ("employer_claim", "Yes"),
            ("employer_claim_details", "Unreturned company laptop"),
        ],
    )
    .await;

    response.assert_redirect("/respondent-response-task-list");
    let stored = api.stored_respondent(CASE_ID).unwrap();
    assert_eq!(stored.et3_response_employer_claim.as_deref(), Some("Yes"));
    assert_eq!(
        stored.et3_response_employer_claim_details.as_deref(),
        Some("Unreturned company laptop")
    );
    assert_eq!(
        stored
            .et3_hub_links_statuses
            .unwrap()
            .get("employersContractClaim")
            .map(String::as_str),
        Some("completed")
    );
}
