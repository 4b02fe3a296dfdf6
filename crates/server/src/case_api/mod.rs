//! Outbound calls to the case-management API.

pub mod http;

use async_trait::async_trait;
use bytes::Bytes;
use shared_types::ccd::{CaseApiDataResponse, Et3UpdateRequest};
use shared_types::DocumentUploadResponse;
use thiserror::Error;

pub use http::HttpCaseApi;

#[derive(Debug, Error)]
pub enum CaseApiError {
    #[error("case API request failed: {0}")]
    RequestFailed(String),

    #[error("case API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("case API response could not be decoded: {0}")]
    Decode(String),

    #[error("not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, CaseApiError>;

/// A document's content as served by the document store.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentBinary {
    pub content_type: String,
    pub file_name: Option<String>,
    pub bytes: Bytes,
}

/// File staged for upload.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

/// Operations this service needs from the case API. `token` is the signed-in
/// user's access token, sent as a bearer credential.
#[async_trait]
pub trait CaseApi: Send + Sync {
    async fn get_user_case(&self, token: Option<&str>, case_id: &str)
        -> Result<CaseApiDataResponse>;

    /// Patch the ET3 fields of one respondent. Returns the updated case.
    async fn modify_et3_data(
        &self,
        token: Option<&str>,
        request: &Et3UpdateRequest,
    ) -> Result<CaseApiDataResponse>;

    async fn upload_document(
        &self,
        token: Option<&str>,
        file: UploadFile,
        case_type_id: &str,
    ) -> Result<DocumentUploadResponse>;

    async fn get_case_document(&self, token: Option<&str>, doc_id: &str)
        -> Result<DocumentBinary>;

    /// Cheap reachability check used by the health endpoint.
    async fn ping(&self) -> Result<()>;
}
