use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, HeaderMap, Request, StatusCode},
    Router,
};
use bytes::Bytes;
use serde_json::Value;
use server::case_api::{CaseApi, CaseApiError, DocumentBinary, UploadFile};
use server::formatter::to_view_model;
use server::session::{Session, UserDetails};
use server::state::AppState;
use shared_types::ccd::{
    CaseApiDataResponse, CaseData, ClaimantIndTypeApi, DocumentApi, DocumentTypeApi,
    DocumentTypeItemApi, Et3UpdateRequest, RespondentApiModel, RespondentItemApi,
};
use shared_types::{
    AppConfig, DocumentLink, DocumentUploadLinks, DocumentUploadResponse, Et3ModificationType,
    Language,
};
use tower::ServiceExt;

pub const CASE_ID: &str = "1700000000000001";
pub const USER_ID: &str = "respondent-user-1";
pub const ET1_DOC_ID: &str = "a0c113ec-0000-4000-8000-000000000001";
pub const ACAS_DOC_ID: &str = "a0c113ec-0000-4000-8000-000000000002";
pub const UPLOADED_DOC_ID: &str = "a0c113ec-0000-4000-8000-0000000000ff";
pub const SUBMITTED_AT: &str = "2024-05-20T10:15:00.000";

const DOC_STORE: &str = "http://dm-store:8080/documents";

fn document(id: &str, file_name: &str) -> DocumentApi {
    DocumentApi {
        document_url: Some(format!("{DOC_STORE}/{id}")),
        document_filename: Some(file_name.to_string()),
        document_binary_url: Some(format!("{DOC_STORE}/{id}/binary")),
        category_id: None,
        upload_timestamp: Some("2024-04-30T09:00:00.000".to_string()),
    }
}

fn collection_item(id: &str, type_of_document: &str, file_name: &str) -> DocumentTypeItemApi {
    DocumentTypeItemApi {
        id: Some(id.to_string()),
        value: Some(DocumentTypeApi {
            type_of_document: Some(type_of_document.to_string()),
            short_description: None,
            uploaded_document: Some(document(id, file_name)),
        }),
    }
}

/// A served discrimination claim with one respondent belonging to [`USER_ID`].
pub fn sample_case() -> CaseApiDataResponse {
    CaseApiDataResponse {
        id: Some(CASE_ID.to_string()),
        case_type_id: Some("ET_EnglandWales".to_string()),
        state: Some("Accepted".to_string()),
        created_date: Some("2024-04-28T11:30:00.000".to_string()),
        last_modified: Some("2024-05-02T08:00:00.000".to_string()),
        case_data: Some(CaseData {
            ethos_case_reference: Some("6000001/2024".to_string()),
            types_of_claim: Some(vec!["discrimination".to_string()]),
            claimant_ind_type: Some(ClaimantIndTypeApi {
                claimant_first_names: Some("Jane".to_string()),
                claimant_last_name: Some("Doe".to_string()),
                claimant_date_of_birth: Some("1985-03-14".to_string()),
                claimant_preferred_title: None,
            }),
            respondent_collection: Some(vec![RespondentItemApi {
                id: Some("respondent-item-1".to_string()),
                value: Some(RespondentApiModel {
                    idam_id: Some(USER_ID.to_string()),
                    respondent_name: Some("Acme Widgets Ltd".to_string()),
                    ..Default::default()
                }),
            }]),
            document_collection: Some(vec![
                collection_item(ET1_DOC_ID, "ET1", "ET1 - Jane Doe.pdf"),
                collection_item(ACAS_DOC_ID, "ACAS Certificate", "ACAS R000001.pdf"),
            ]),
            claim_served_date: Some("2024-05-01".to_string()),
            ..Default::default()
        }),
    }
}

/// Same case with a breach of contract claim, which adds the employer's
/// contract claim section.
pub fn breach_of_contract_case() -> CaseApiDataResponse {
    let mut case = sample_case();
    if let Some(data) = case.case_data.as_mut() {
        data.types_of_claim = Some(vec![
            "discrimination".to_string(),
            "breachOfContract".to_string(),
        ]);
    }
    case
}

/// Set fields on the first respondent of a remote case.
pub fn with_respondent(
    mut case: CaseApiDataResponse,
    edit: impl FnOnce(&mut RespondentApiModel),
) -> CaseApiDataResponse {
    if let Some(respondent) = case
        .case_data
        .as_mut()
        .and_then(|d| d.respondent_collection.as_mut())
        .and_then(|c| c.first_mut())
        .and_then(|item| item.value.as_mut())
    {
        edit(respondent);
    }
    case
}

/// Hub status map with the given sections, in wire form.
pub fn hub_statuses(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[derive(Default)]
struct FakeState {
    cases: HashMap<String, CaseApiDataResponse>,
    updates: Vec<Et3UpdateRequest>,
    uploads: Vec<String>,
    documents: HashMap<String, DocumentBinary>,
    fail_updates: bool,
    fail_uploads: bool,
    bare_update_replies: bool,
    unreachable: bool,
}

/// In-memory case API. ET3 modifications are applied to the stored case the
/// way the real API applies them, and every request is recorded.
#[derive(Default)]
pub struct FakeCaseApi {
    state: Mutex<FakeState>,
}

impl FakeCaseApi {
    pub fn with_case(case: CaseApiDataResponse) -> Self {
        let api = Self::default();
        api.put_case(case);
        api
    }

    pub fn put_case(&self, case: CaseApiDataResponse) {
        let id = case.id.clone().unwrap_or_default();
        self.state.lock().unwrap().cases.insert(id, case);
    }

    pub fn case(&self, id: &str) -> Option<CaseApiDataResponse> {
        self.state.lock().unwrap().cases.get(id).cloned()
    }

    pub fn put_document(&self, id: &str, document: DocumentBinary) {
        self.state
            .lock()
            .unwrap()
            .documents
            .insert(id.to_string(), document);
    }

    pub fn updates(&self) -> Vec<Et3UpdateRequest> {
        self.state.lock().unwrap().updates.clone()
    }

    pub fn uploads(&self) -> Vec<String> {
        self.state.lock().unwrap().uploads.clone()
    }

    pub fn fail_updates(&self) {
        self.state.lock().unwrap().fail_updates = true;
    }

    pub fn fail_uploads(&self) {
        self.state.lock().unwrap().fail_uploads = true;
    }

    /// Fail the health check as if the case API were down.
    pub fn go_offline(&self) {
        self.state.lock().unwrap().unreachable = true;
    }

    /// Answer ET3 modifications with the case envelope but no `case_data`.
    pub fn reply_without_case_data(&self) {
        self.state.lock().unwrap().bare_update_replies = true;
    }

    /// First respondent of the stored case.
    pub fn stored_respondent(&self, case_id: &str) -> Option<RespondentApiModel> {
        self.case(case_id)?
            .case_data?
            .respondent_collection?
            .into_iter()
            .next()?
            .value
    }

    /// Wire status of one hub section of the stored first respondent.
    pub fn hub_status(&self, case_id: &str, section: &str) -> Option<String> {
        self.stored_respondent(case_id)?
            .et3_hub_links_statuses?
            .get(section)
            .cloned()
    }
}

fn upstream_failure() -> CaseApiError {
    CaseApiError::Status {
        status: 500,
        body: "case API unavailable".to_string(),
    }
}

#[async_trait]
impl CaseApi for FakeCaseApi {
    async fn get_user_case(
        &self,
        _token: Option<&str>,
        case_id: &str,
    ) -> server::case_api::Result<CaseApiDataResponse> {
        self.case(case_id)
            .ok_or_else(|| CaseApiError::NotFound(format!("case {case_id}")))
    }

    async fn modify_et3_data(
        &self,
        _token: Option<&str>,
        request: &Et3UpdateRequest,
    ) -> server::case_api::Result<CaseApiDataResponse> {
        let mut state = self.state.lock().unwrap();
        state.updates.push(request.clone());
        if state.fail_updates {
            return Err(upstream_failure());
        }
        let bare_reply = state.bare_update_replies;

        let case = state
            .cases
            .get_mut(&request.case_submission_reference)
            .ok_or_else(|| CaseApiError::NotFound(request.case_submission_reference.clone()))?;
        let respondents = case
            .case_data
            .as_mut()
            .and_then(|d| d.respondent_collection.as_mut())
            .ok_or_else(|| CaseApiError::NotFound("respondent".to_string()))?;
        let item = respondents
            .iter_mut()
            .find(|item| {
                item.value.as_ref().and_then(|v| v.idam_id.as_ref())
                    == request.respondent.idam_id.as_ref()
            })
            .ok_or_else(|| CaseApiError::NotFound("respondent".to_string()))?;

        let mut respondent = request.respondent.clone();
        if let (Some(id), Some(status)) = (
            &request.response_hub_links_section_id,
            &request.response_hub_links_section_status,
        ) {
            respondent
                .et3_hub_links_statuses
                .get_or_insert_with(HashMap::new)
                .insert(id.clone(), status.clone());
        }
        if let (Some(id), Some(status)) = (
            &request.case_details_links_section_id,
            &request.case_details_links_section_status,
        ) {
            respondent
                .et3_case_details_links_statuses
                .get_or_insert_with(HashMap::new)
                .insert(id.clone(), status.clone());
        }
        if request.request_type == Et3ModificationType::SubmitRespondent {
            respondent.response_received = Some("Yes".to_string());
            respondent.response_received_date = Some(SUBMITTED_AT.to_string());
        }
        item.value = Some(respondent);

        if bare_reply {
            return Ok(CaseApiDataResponse {
                id: case.id.clone(),
                case_type_id: case.case_type_id.clone(),
                ..Default::default()
            });
        }
        Ok(case.clone())
    }

    async fn upload_document(
        &self,
        _token: Option<&str>,
        file: UploadFile,
        _case_type_id: &str,
    ) -> server::case_api::Result<DocumentUploadResponse> {
        let mut state = self.state.lock().unwrap();
        if state.fail_uploads {
            return Err(upstream_failure());
        }
        state.uploads.push(file.file_name.clone());
        Ok(DocumentUploadResponse {
            id: UPLOADED_DOC_ID.to_string(),
            mime_type: file.content_type,
            original_document_name: file.file_name,
            size: file.bytes.len() as u64,
            created_on: Some("2024-05-10T12:00:00.000".to_string()),
            classification: Some("PUBLIC".to_string()),
            links: DocumentUploadLinks {
                self_link: DocumentLink {
                    href: format!("{DOC_STORE}/{UPLOADED_DOC_ID}"),
                },
                binary: DocumentLink {
                    href: format!("{DOC_STORE}/{UPLOADED_DOC_ID}/binary"),
                },
            },
        })
    }

    async fn get_case_document(
        &self,
        _token: Option<&str>,
        doc_id: &str,
    ) -> server::case_api::Result<DocumentBinary> {
        self.state
            .lock()
            .unwrap()
            .documents
            .get(doc_id)
            .cloned()
            .ok_or_else(|| CaseApiError::NotFound(format!("document {doc_id}")))
    }

    async fn ping(&self) -> server::case_api::Result<()> {
        if self.state.lock().unwrap().unreachable {
            return Err(CaseApiError::RequestFailed("connection refused".to_string()));
        }
        Ok(())
    }
}

/// Config used by every test: Welsh and uploads on, small upload limit.
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.features.welsh_language = true;
    config.features.document_upload = true;
    config.uploads.max_bytes = 64 * 1024;
    config
}

/// Build the full router around a fake case API.
pub fn test_app(api: Arc<FakeCaseApi>) -> (Router, AppState) {
    test_app_with_config(api, test_config())
}

pub fn test_app_with_config(api: Arc<FakeCaseApi>, config: AppConfig) -> (Router, AppState) {
    let state = AppState::new(api, config);
    let router = server::pages::router(state.clone());
    (router, state)
}

pub fn signed_in_user() -> UserDetails {
    UserDetails {
        id: USER_ID.to_string(),
        email: Some("hr@acme.test".to_string()),
        access_token: Some("test-token".to_string()),
        given_name: Some("Pat".to_string()),
        family_name: Some("Jones".to_string()),
    }
}

/// Store a session holding `case` and return the cookie header that selects it.
pub fn seed_session(state: &AppState, case: &CaseApiDataResponse, language: Language) -> String {
    let session = Session {
        user: Some(signed_in_user()),
        user_case: Some(to_view_model(case, language)),
        selected_respondent_index: 0,
        errors: Vec::new(),
        language,
    };
    cookie_for(state, session)
}

/// Store any session and return its cookie header.
pub fn cookie_for(state: &AppState, session: Session) -> String {
    let id = state.sessions.create(session);
    format!("{}={id}", state.config.session.cookie_name)
}

/// A fake API holding `case`, the app around it, and a session for the case.
pub fn app_with_case(case: CaseApiDataResponse) -> (Router, AppState, Arc<FakeCaseApi>, String) {
    let api = Arc::new(FakeCaseApi::with_case(case.clone()));
    let (app, state) = test_app(api.clone());
    let cookie = seed_session(&state, &case, Language::En);
    (app, state, api, cookie)
}

/// Status, headers and body of a response. The body is JSON when it parses
/// as JSON and a string otherwise.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
    pub bytes: Bytes,
}

impl TestResponse {
    pub fn location(&self) -> Option<&str> {
        self.headers.get(header::LOCATION)?.to_str().ok()
    }

    pub fn assert_redirect(&self, to: &str) {
        assert_eq!(self.status, StatusCode::SEE_OTHER, "body: {}", self.body);
        assert_eq!(self.location(), Some(to));
    }

    /// `propertyName` of every reported form error.
    pub fn error_properties(&self) -> Vec<String> {
        self.body["errors"]
            .as_array()
            .map(|errors| {
                errors
                    .iter()
                    .filter_map(|e| e["propertyName"].as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// `errorType` reported for one property.
    pub fn error_for(&self, property: &str) -> Option<String> {
        self.body["errors"].as_array()?.iter().find_map(|e| {
            (e["propertyName"] == property)
                .then(|| e["errorType"].as_str().map(str::to_string))
                .flatten()
        })
    }
}

pub async fn get(app: &Router, uri: &str, cookie: &str) -> TestResponse {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap();

    send(app, req).await
}

pub async fn get_anonymous(app: &Router, uri: &str) -> TestResponse {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, req).await
}

/// POST `application/x-www-form-urlencoded` pairs.
pub async fn post_form(
    app: &Router,
    uri: &str,
    cookie: &str,
    fields: &[(&str, &str)],
) -> TestResponse {
    let body = fields
        .iter()
        .map(|(k, v)| format!("{}={}", urlencode(k), urlencode(v)))
        .collect::<Vec<_>>()
        .join("&");
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::COOKIE, cookie)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();

    send(app, req).await
}

fn urlencode(value: &str) -> String {
    value
        .bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                (b as char).to_string()
            }
            b' ' => "+".to_string(),
            _ => format!("%{b:02X}"),
        })
        .collect()
}

const BOUNDARY: &str = "----et3-test-boundary";

/// One part of a multipart body.
pub enum Part<'a> {
    Text(&'a str, &'a str),
    File {
        name: &'a str,
        file_name: &'a str,
        content_type: &'a str,
        contents: &'a [u8],
    },
}

pub async fn post_multipart(app: &Router, uri: &str, cookie: &str, parts: &[Part<'_>]) -> TestResponse {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File {
                name,
                file_name,
                content_type,
                contents,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n\
                         Content-Type: {content_type}\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(contents);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::COOKIE, cookie)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();

    send(app, req).await
}

/// Send a request through the router and parse the response.
pub async fn send(app: &Router, req: Request<Body>) -> TestResponse {
    let response = app
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).to_string()))
    };

    TestResponse {
        status,
        headers,
        body,
        bytes,
    }
}
