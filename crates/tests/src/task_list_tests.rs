use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use server::session::Session;
use shared_types::AppConfig;
use std::sync::Arc;

use crate::common::{
    app_with_case, breach_of_contract_case, cookie_for, get, hub_statuses, sample_case,
    seed_session, test_app_with_config, with_respondent, FakeCaseApi,
};

fn section<'a>(body: &'a serde_json::Value, name: &str) -> &'a serde_json::Value {
    body["data"]["sections"]
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["name"] == name)
        .unwrap_or_else(|| panic!("no section {name}"))
}

#[tokio::test]
async fn fresh_response_lists_core_sections_and_locks_check_your_answers() {
    let (app, _state, _api, cookie) = app_with_case(sample_case());

    let response = get(&app, "/respondent-response-task-list", &cookie).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["page"], "respondent-response-task-list");
    let data = &response.body["data"];
    assert_eq!(data["overallStatus"], "0 of 5 tasks completed");
    assert_eq!(data["et3Status"], "notStarted");

    let names: Vec<&str> = data["sections"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|s| s["name"].as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "contactDetails",
            "employerDetails",
            "conciliationAndEmployeeDetails",
            "payPensionBenefitDetails",
            "contestClaim",
            "checkYorAnswers",
        ]
    );
    let cya = section(&response.body, "checkYorAnswers");
    assert_eq!(cya["status"], "cannotStartYet");
    assert_eq!(cya["url"], "/check-your-answers-et3");
    assert_eq!(section(&response.body, "contactDetails")["label"], "Not started yet");
}

#[tokio::test]
async fn breach_of_contract_adds_the_employer_claim_section() {
    let case = with_respondent(breach_of_contract_case(), |r| {
        r.et3_hub_links_statuses = Some(hub_statuses(&[
            ("contactDetails", "completed"),
            ("employerDetails", "completed"),
            ("contestClaim", "completed"),
            ("payPensionBenefitDetails", "inProgress"),
        ]));
    });
    let (app, _state, _api, cookie) = app_with_case(case);

    let response = get(&app, "/respondent-response-task-list", &cookie).await;

    let data = &response.body["data"];
    assert_eq!(data["overallStatus"], "3 of 6 tasks completed");
    assert_eq!(data["et3Status"], "inProgress");
    assert_eq!(
        section(&response.body, "employersContractClaim")["url"],
        "/employers-contract-claim"
    );
    assert_eq!(
        section(&response.body, "payPensionBenefitDetails")["status"],
        "inProgress"
    );
    assert_eq!(
        section(&response.body, "conciliationAndEmployeeDetails")["status"],
        "notStartedYet"
    );
}

#[tokio::test]
async fn welsh_task_list_translates_progress() {
    let (app, _state, _api, cookie) = app_with_case(sample_case());

    let response = get(&app, "/respondent-response-task-list?lng=cy", &cookie).await;

    assert_eq!(response.body["language"], "cy");
    assert_eq!(
        response.body["data"]["overallStatus"],
        "0 o 5 tasg wedi'u cwblhau"
    );
}

#[tokio::test]
async fn welsh_is_ignored_when_switched_off() {
    let case = sample_case();
    let api = Arc::new(FakeCaseApi::with_case(case.clone()));
    let (app, state) = test_app_with_config(api, AppConfig::default());
    let cookie = seed_session(&state, &case, shared_types::Language::En);

    let response = get(&app, "/respondent-response-task-list?lng=cy", &cookie).await;

    assert_eq!(response.body["language"], "en");
    assert_eq!(response.body["data"]["overallStatus"], "0 of 5 tasks completed");
}

#[tokio::test]
async fn task_list_without_a_case_is_not_found() {
    let (app, state) = test_app_with_config(Arc::new(FakeCaseApi::default()), AppConfig::default());
    let cookie = cookie_for(&state, Session::default());

    let response = get(&app, "/respondent-response-task-list", &cookie).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["kind"], "NotFound");
}

#[tokio::test]
async fn landing_page_points_at_the_task_list() {
    let (app, _state, _api, cookie) = app_with_case(sample_case());

    let response = get(&app, "/respondent-response-landing", &cookie).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["startUrl"], "/respondent-response-task-list");
    assert_eq!(response.body["data"]["dueDate"], "29 May 2024");
}
