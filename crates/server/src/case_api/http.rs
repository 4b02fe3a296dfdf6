use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, multipart, Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use shared_types::ccd::{CaseApiDataResponse, Et3UpdateRequest};
use shared_types::{CaseApiSettings, DocumentUploadResponse};

use super::{CaseApi, CaseApiError, DocumentBinary, Result, UploadFile};

/// Multipart field the upload endpoint reads the file from.
const UPLOAD_FIELD: &str = "document_upload";

/// `CaseApi` over HTTP.
#[derive(Clone)]
pub struct HttpCaseApi {
    client: Client,
    base_url: String,
}

impl HttpCaseApi {
    pub fn new(settings: &CaseApiSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| CaseApiError::RequestFailed(e.to_string()))?;
        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorised(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(builder: RequestBuilder) -> Result<Response> {
        let response = builder
            .send()
            .await
            .map_err(|e| CaseApiError::RequestFailed(e.to_string()))?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(CaseApiError::NotFound(response.url().path().to_string()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CaseApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn json<T: DeserializeOwned>(response: Response) -> Result<T> {
        response
            .json::<T>()
            .await
            .map_err(|e| CaseApiError::Decode(e.to_string()))
    }
}

/// File name from a `Content-Disposition` header value.
pub fn file_name_from_disposition(value: &str) -> Option<String> {
    value.split(';').map(str::trim).find_map(|part| {
        let name = part.strip_prefix("filename=")?;
        let name = name.trim_matches('"');
        (!name.is_empty()).then(|| name.to_string())
    })
}

#[async_trait]
impl CaseApi for HttpCaseApi {
    #[tracing::instrument(skip(self, token))]
    async fn get_user_case(
        &self,
        token: Option<&str>,
        case_id: &str,
    ) -> Result<CaseApiDataResponse> {
        let builder = self
            .client
            .post(self.url("/cases/user-case"))
            .json(&serde_json::json!({ "case_id": case_id }));
        let response = Self::send(Self::authorised(builder, token)).await?;
        Self::json(response).await
    }

    #[tracing::instrument(
        skip(self, token, request),
        fields(
            case_id = %request.case_submission_reference,
            request_type = %request.request_type,
            section = ?request.response_hub_links_section_id,
        )
    )]
    async fn modify_et3_data(
        &self,
        token: Option<&str>,
        request: &Et3UpdateRequest,
    ) -> Result<CaseApiDataResponse> {
        let builder = self.client.put(self.url("/et3/modifyEt3Data")).json(request);
        let response = Self::send(Self::authorised(builder, token)).await?;
        Self::json(response).await
    }

    #[tracing::instrument(skip(self, token, file), fields(file_name = %file.file_name, size = file.bytes.len()))]
    async fn upload_document(
        &self,
        token: Option<&str>,
        file: UploadFile,
        case_type_id: &str,
    ) -> Result<DocumentUploadResponse> {
        let part = multipart::Part::bytes(file.bytes.to_vec())
            .file_name(file.file_name)
            .mime_str(&file.content_type)
            .map_err(|e| CaseApiError::RequestFailed(e.to_string()))?;
        let form = multipart::Form::new().part(UPLOAD_FIELD, part);
        let builder = self
            .client
            .post(self.url(&format!("/documents/upload/{case_type_id}")))
            .multipart(form);
        let response = Self::send(Self::authorised(builder, token)).await?;
        Self::json(response).await
    }

    #[tracing::instrument(skip(self, token))]
    async fn get_case_document(&self, token: Option<&str>, doc_id: &str) -> Result<DocumentBinary> {
        let builder = self
            .client
            .get(self.url(&format!("/cases/document/{doc_id}")));
        let response = Self::send(Self::authorised(builder, token)).await?;

        let headers = response.headers();
        let content_type = headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/octet-stream")
            .to_string();
        let file_name = headers
            .get(header::CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .and_then(file_name_from_disposition);
        let bytes = response
            .bytes()
            .await
            .map_err(|e| CaseApiError::RequestFailed(e.to_string()))?;

        Ok(DocumentBinary {
            content_type,
            file_name,
            bytes,
        })
    }

    #[tracing::instrument(skip(self))]
    async fn ping(&self) -> Result<()> {
        Self::send(self.client.get(self.url("/health"))).await?;
        Ok(())
    }
}
