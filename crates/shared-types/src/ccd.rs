//! Case shapes exactly as the case-management API sends and accepts them.
//!
//! Field names follow the remote schema. Every field is optional: the API
//! omits whatever has not been captured yet, and whatever we send back is
//! omitted rather than defaulted when the view-model has no value for it.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

use crate::common::Et3ModificationType;

/// CCD case ids arrive as JSON numbers from some endpoints and strings from others.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Top-level case envelope returned by the case API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseApiDataResponse {
    #[serde(deserialize_with = "string_or_number", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_type_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_data: Option<CaseData>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CaseData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ethos_case_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types_of_claim: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claimant_ind_type: Option<ClaimantIndTypeApi>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claimant_type: Option<ClaimantTypeApi>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claimant_represented_question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claimant_hearing_preference: Option<ClaimantHearingPreferenceApi>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub respondent_collection: Option<Vec<RespondentItemApi>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_collection: Option<Vec<DocumentTypeItemApi>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claim_served_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_accept_case: Option<PreAcceptCaseApi>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub et1_submitted_form: Option<DocumentApi>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managing_office: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tribunal_correspondence_email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClaimantIndTypeApi {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claimant_first_names: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claimant_last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claimant_date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claimant_preferred_title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClaimantTypeApi {
    #[serde(rename = "claimant_addressUK", skip_serializing_if = "Option::is_none")]
    pub claimant_address_uk: Option<AddressApi>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claimant_email_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claimant_phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claimant_contact_preference: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClaimantHearingPreferenceApi {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hearing_preferences: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hearing_assistance: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PreAcceptCaseApi {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_accepted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_accepted: Option<String>,
}

/// CCD `AddressUK` complex type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AddressApi {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_town: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// One entry of `respondentCollection`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RespondentItemApi {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<RespondentApiModel>,
}

/// Respondent record with all ET3 response fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RespondentApiModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idam_id: Option<String>,
    #[serde(rename = "respondent_name", skip_serializing_if = "Option::is_none")]
    pub respondent_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub respondent_organisation: Option<String>,
    #[serde(rename = "respondent_address", skip_serializing_if = "Option::is_none")]
    pub respondent_address: Option<AddressApi>,
    #[serde(rename = "respondent_phone1", skip_serializing_if = "Option::is_none")]
    pub respondent_phone1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_received: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_received_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_respondent_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_respondent_address: Option<AddressApi>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_respondent_phone1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_respondent_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_respondent_contact_preference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub et3_response_language_preference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub et3_response_respondent_contact_name: Option<String>,
    #[serde(rename = "et3ResponseDXAddress", skip_serializing_if = "Option::is_none")]
    pub et3_response_dx_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub et3_response_hearing_respondent: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub et3_response_respondent_support_needed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub et3_response_respondent_support_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub et3_response_respondent_employer_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub et3_response_respondent_preferred_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub et3_response_respondent_company_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub et3_response_employment_count: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub et3_response_multiple_sites: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub et3_response_site_employment_count: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub et3_response_acas_agree: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub et3_response_acas_agree_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub et3_response_are_dates_correct: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub et3_response_employment_start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub et3_response_employment_end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub et3_response_employment_information: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub et3_response_continuing_employment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub et3_response_is_job_title_correct: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub et3_response_correct_job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub et3_response_claimant_weekly_hours: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub et3_response_claimant_correct_hours: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub et3_response_earning_details_correct: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub et3_response_pay_frequency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub et3_response_pay_before_tax: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub et3_response_pay_takehome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub et3_response_is_notice_correct: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub et3_response_correct_notice_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub et3_response_is_pension_correct: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub et3_response_pension_correct_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub et3_response_respondent_contest_claim: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub et3_response_contest_claim_document: Option<Vec<DocumentTypeItemApi>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub et3_response_contest_claim_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub et3_response_employer_claim: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub et3_response_employer_claim_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub et3_response_employer_claim_document: Option<DocumentApi>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub et3_form: Option<DocumentApi>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub et3_hub_links_statuses: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub et3_case_details_links_statuses: Option<HashMap<String, String>>,
}

/// One entry of a CCD document collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentTypeItemApi {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<DocumentTypeApi>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DocumentTypeApi {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_of_document: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploaded_document: Option<DocumentApi>,
}

/// CCD `Document` field: links into the document store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentApi {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_binary_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_timestamp: Option<String>,
}

/// Body of the ET3 modification endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Et3UpdateRequest {
    pub case_submission_reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_type_id: Option<String>,
    pub request_type: Et3ModificationType,
    pub respondent: RespondentApiModel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_hub_links_section_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_hub_links_section_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_details_links_section_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_details_links_section_status: Option<String>,
}

/// Whole-case body for the generic case update endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateCaseBody {
    pub case_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_type_id: Option<String>,
    pub case_data: CaseData,
}
