use serde::{Deserialize, Serialize};

/// Document-store reference in the internal shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub document_url: String,
    pub document_filename: String,
    pub document_binary_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_timestamp: Option<String>,
}

/// A typed document held in one of the case's document collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentTypeItem {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_of_document: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<Document>,
}

/// `typeOfDocument` values the service recognises.
pub mod document_type {
    pub const ET1: &str = "ET1";
    pub const ET1_ATTACHMENT: &str = "ET1 Attachment";
    pub const ACAS_CERTIFICATE: &str = "ACAS Certificate";
    pub const ET3_ATTACHMENT: &str = "ET3 Attachment";
}

/// Synthetic label attached to each row of the aggregated document table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub enum DocumentCategory {
    Et1Form,
    Et1Attachment,
    AcasCertificate,
    Et3Form,
    ContestClaim,
    EmployerContractClaim,
}

/// One row of the case documents table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DocumentTableRow {
    pub doc_id: String,
    pub category: DocumentCategory,
    pub file_name: String,
    /// Link to the document download route.
    pub link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploaded: Option<String>,
}

/// Document-store reply to an upload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DocumentUploadResponse {
    pub id: String,
    pub mime_type: String,
    pub original_document_name: String,
    pub size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<String>,
    #[serde(rename = "_links")]
    pub links: DocumentUploadLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentUploadLinks {
    #[serde(rename = "self")]
    pub self_link: DocumentLink,
    pub binary: DocumentLink,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentLink {
    pub href: String,
}
