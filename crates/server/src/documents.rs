//! Document references: id extraction, shape conversion and the aggregated
//! case documents table.

use shared_types::ccd::{DocumentApi, DocumentTypeApi, DocumentTypeItemApi};
use shared_types::{
    document_type, CaseWithId, Document, DocumentCategory, DocumentTableRow, DocumentTypeItem,
    DocumentUploadResponse, Language, RespondentEt3Model,
};

use crate::urls::GET_CASE_DOCUMENT;

/// Marker carried in the file name of Welsh ET1 forms.
const WELSH_ET1_MARKER: &str = "et1 cy";

/// Opaque document-store id taken from the last path segment of a document URL.
///
/// Accepts both `.../documents/{id}` and `.../documents/{id}/binary`.
pub fn get_doc_id(url: &str) -> Option<String> {
    let trimmed = url.trim().trim_end_matches('/');
    let trimmed = trimmed.strip_suffix("/binary").unwrap_or(trimmed);
    let id = trimmed.rsplit('/').next()?;
    if id.is_empty() || id.contains(':') {
        return None;
    }
    Some(id.to_string())
}

pub fn document_from_api(api: &DocumentApi) -> Option<Document> {
    if api.document_url.is_none() && api.document_binary_url.is_none() {
        return None;
    }
    Some(Document {
        document_url: api.document_url.clone().unwrap_or_default(),
        document_filename: api.document_filename.clone().unwrap_or_default(),
        document_binary_url: api.document_binary_url.clone().unwrap_or_default(),
        category_id: api.category_id.clone(),
        upload_timestamp: api.upload_timestamp.clone(),
    })
}

pub fn document_to_api(document: &Document) -> DocumentApi {
    fn non_empty(value: &str) -> Option<String> {
        (!value.is_empty()).then(|| value.to_string())
    }
    DocumentApi {
        document_url: non_empty(&document.document_url),
        document_filename: non_empty(&document.document_filename),
        document_binary_url: non_empty(&document.document_binary_url),
        category_id: document.category_id.clone(),
        upload_timestamp: document.upload_timestamp.clone(),
    }
}

/// API collection items to the internal shape. Items with neither an id nor a
/// document are dropped.
pub fn map_document_type_items(items: &[DocumentTypeItemApi]) -> Vec<DocumentTypeItem> {
    items
        .iter()
        .filter_map(|item| {
            let value = item.value.as_ref();
            let document = value
                .and_then(|v| v.uploaded_document.as_ref())
                .and_then(document_from_api);
            let id = item
                .id
                .clone()
                .or_else(|| document.as_ref().and_then(|d| get_doc_id(&d.document_url)))?;
            Some(DocumentTypeItem {
                id,
                type_of_document: value.and_then(|v| v.type_of_document.clone()),
                short_description: value.and_then(|v| v.short_description.clone()),
                document,
            })
        })
        .collect()
}

pub fn document_type_item_to_api(item: &DocumentTypeItem) -> DocumentTypeItemApi {
    DocumentTypeItemApi {
        id: (!item.id.is_empty()).then(|| item.id.clone()),
        value: Some(DocumentTypeApi {
            type_of_document: item.type_of_document.clone(),
            short_description: item.short_description.clone(),
            uploaded_document: item.document.as_ref().map(document_to_api),
        }),
    }
}

/// Items of the collection whose `typeOfDocument` is one of `types`.
pub fn filter_by_type(items: &[DocumentTypeItem], types: &[&str]) -> Vec<DocumentTypeItem> {
    items
        .iter()
        .filter(|item| {
            item.type_of_document
                .as_deref()
                .is_some_and(|t| types.contains(&t))
        })
        .cloned()
        .collect()
}

fn is_welsh_et1(item: &DocumentTypeItem) -> bool {
    item.document
        .as_ref()
        .is_some_and(|d| d.document_filename.to_lowercase().contains(WELSH_ET1_MARKER))
}

/// The ET1 claim form to show for the given language.
///
/// Welsh asks for the Welsh-flagged form and falls back to the English one
/// when there is none. Any other language only ever gets the English form.
pub fn find_et1_document_by_language(
    items: &[DocumentTypeItem],
    language: Language,
) -> Option<&DocumentTypeItem> {
    let et1_forms = || {
        items
            .iter()
            .filter(|item| item.type_of_document.as_deref() == Some(document_type::ET1))
    };
    let english = || et1_forms().find(|item| !is_welsh_et1(item));
    match language {
        Language::Cy => et1_forms().find(|item| is_welsh_et1(item)).or_else(english),
        Language::En => english(),
    }
}

/// Collection item for a freshly uploaded document.
pub fn document_type_item_from_upload(
    upload: &DocumentUploadResponse,
    type_of_document: &str,
) -> DocumentTypeItem {
    let document_url = upload.links.self_link.href.clone();
    DocumentTypeItem {
        id: get_doc_id(&document_url).unwrap_or_else(|| upload.id.clone()),
        type_of_document: Some(type_of_document.to_string()),
        short_description: None,
        document: Some(Document {
            document_url,
            document_filename: upload.original_document_name.clone(),
            document_binary_url: upload.links.binary.href.clone(),
            category_id: None,
            upload_timestamp: upload.created_on.clone(),
        }),
    }
}

fn row_for(document: &Document, category: DocumentCategory) -> Option<DocumentTableRow> {
    let doc_id = get_doc_id(&document.document_url)
        .or_else(|| get_doc_id(&document.document_binary_url))?;
    Some(DocumentTableRow {
        link: format!("{GET_CASE_DOCUMENT}/{doc_id}"),
        doc_id,
        category,
        file_name: document.document_filename.clone(),
        uploaded: document.upload_timestamp.clone(),
    })
}

/// Every document the respondent can see, flattened into table rows.
///
/// Claimant-side collections come first, then the respondent's own ET3
/// documents. Entries without a usable URL are skipped and each document id
/// appears once.
pub fn combine_documents(
    view: &CaseWithId,
    respondent: Option<&RespondentEt3Model>,
) -> Vec<DocumentTableRow> {
    let mut rows: Vec<DocumentTableRow> = Vec::new();
    let mut push = |document: Option<&Document>, category: DocumentCategory| {
        if let Some(row) = document.and_then(|d| row_for(d, category)) {
            if !rows.iter().any(|existing| existing.doc_id == row.doc_id) {
                rows.push(row);
            }
        }
    };

    for item in &view.documents {
        push(item.document.as_ref(), DocumentCategory::Et1Form);
    }
    push(view.et1_submitted_form.as_ref(), DocumentCategory::Et1Form);
    for item in &view.claimant_attachments {
        push(item.document.as_ref(), DocumentCategory::Et1Attachment);
    }
    for item in &view.acas_certificates {
        push(item.document.as_ref(), DocumentCategory::AcasCertificate);
    }

    if let Some(respondent) = respondent {
        push(respondent.et3_form.as_ref(), DocumentCategory::Et3Form);
        for item in &respondent.contest_claim_documents {
            push(item.document.as_ref(), DocumentCategory::ContestClaim);
        }
        push(
            respondent.employer_claim_document.as_ref(),
            DocumentCategory::EmployerContractClaim,
        );
    }

    rows
}
