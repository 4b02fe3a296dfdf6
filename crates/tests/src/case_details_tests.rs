use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use shared_types::Language;
use std::sync::Arc;

use crate::common::{
    app_with_case, cookie_for, get, sample_case, signed_in_user, test_app, FakeCaseApi,
    ACAS_DOC_ID, CASE_ID, ET1_DOC_ID,
};
use server::session::Session;

#[tokio::test]
async fn case_details_loads_the_case_into_the_session() {
    let api = Arc::new(FakeCaseApi::with_case(sample_case()));
    let (app, state) = test_app(api);
    let cookie = cookie_for(
        &state,
        Session {
            user: Some(signed_in_user()),
            ..Default::default()
        },
    );

    let response = get(&app, &format!("/case-details/{CASE_ID}"), &cookie).await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(response.body["page"], "case-details");
    assert_eq!(data["caseId"], CASE_ID);
    assert_eq!(data["ethosCaseReference"], "6000001/2024");
    assert_eq!(data["claimantName"], "Jane Doe");
    assert_eq!(data["respondentName"], "Acme Widgets Ltd");
    assert_eq!(data["dueDate"], "29 May 2024");
    assert_eq!(data["et3Status"], "notStarted");

    let links = data["links"].as_array().unwrap();
    assert_eq!(links.len(), 10);
    assert_eq!(links[0]["name"], "personalDetails");
    assert_eq!(links[0]["status"], "notViewedYet");
    assert_eq!(links[0]["clickable"], true);

    let id = cookie.split_once('=').unwrap().1;
    let session = state.sessions.load(id).unwrap();
    assert_eq!(session.user_case.unwrap().id, CASE_ID);
    assert_eq!(session.selected_respondent_index, 0);
}

#[tokio::test]
async fn case_details_in_welsh_uses_welsh_dates() {
    let (app, _state, _api, cookie) = app_with_case(sample_case());

    let response = get(&app, &format!("/case-details/{CASE_ID}?lng=cy"), &cookie).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["language"], "cy");
    assert_eq!(response.body["data"]["dueDate"], "29 Mai 2024");
}

#[tokio::test]
async fn unknown_case_redirects_to_not_found() {
    let (app, _state, _api, cookie) = app_with_case(sample_case());

    let response = get(&app, "/case-details/9999999999999999", &cookie).await;

    response.assert_redirect("/not-found");
}

#[tokio::test]
async fn claimant_details_are_marked_viewed_once() {
    let (app, _state, api, cookie) = app_with_case(sample_case());

    let response = get(&app, "/claimant-details", &cookie).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["claimantName"], "Jane Doe");

    let updates = api.updates();
    assert_eq!(updates.len(), 1);
    assert_eq!(
        updates[0].case_details_links_section_id.as_deref(),
        Some("personalDetails")
    );
    assert_eq!(
        updates[0].case_details_links_section_status.as_deref(),
        Some("viewed")
    );
    assert_eq!(updates[0].response_hub_links_section_id, None);

    get(&app, "/claimant-details", &cookie).await;
    assert_eq!(api.updates().len(), 1);
}

#[tokio::test]
async fn claimant_details_still_render_when_the_update_fails() {
    let (app, _state, api, cookie) = app_with_case(sample_case());
    api.fail_updates();

    let response = get(&app, "/claimant-details", &cookie).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["hasApiError"], false);
    assert_eq!(response.body["data"]["claimantName"], "Jane Doe");
}

#[tokio::test]
async fn et1_form_links_to_the_document() {
    let (app, _state, api, cookie) = app_with_case(sample_case());

    let response = get(&app, "/claimant-et1-form", &cookie).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["fileName"], "ET1 - Jane Doe.pdf");
    assert_eq!(
        response.body["data"]["link"],
        format!("/getCaseDocument/{ET1_DOC_ID}")
    );
    assert_eq!(
        api.updates()[0].case_details_links_section_id.as_deref(),
        Some("et1ClaimForm")
    );
}

#[tokio::test]
async fn case_documents_lists_claimant_documents() {
    let (app, _state, _api, cookie) = app_with_case(sample_case());

    let response = get(&app, "/case-documents", &cookie).await;

    assert_eq!(response.status, StatusCode::OK);
    let ids: Vec<&str> = response.body["data"]["documents"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|row| row["doc_id"].as_str())
        .collect();
    assert_eq!(ids, vec![ET1_DOC_ID, ACAS_DOC_ID]);
}

#[tokio::test]
async fn case_pages_need_a_case_in_the_session() {
    let (app, state) = test_app(Arc::new(FakeCaseApi::default()));
    let cookie = cookie_for(
        &state,
        Session {
            language: Language::En,
            ..Default::default()
        },
    );

    for uri in ["/claimant-details", "/claimant-et1-form", "/case-documents"] {
        let response = get(&app, uri, &cookie).await;
        response.assert_redirect("/not-found");
    }
}
