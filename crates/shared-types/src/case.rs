use serde::{Deserialize, Serialize};

use crate::common::{type_of_claim, Address, YesOrNo};
use crate::document::{Document, DocumentTypeItem};
use crate::respondent::RespondentEt3Model;

/// A date as entered in a three-field date input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CaseDate {
    pub day: String,
    pub month: String,
    pub year: String,
}

/// Page-oriented projection of a remote case.
///
/// Rebuilt from the latest remote payload every time the case is fetched and
/// held in the session between requests. Never persisted on its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseWithId {
    pub id: String,
    pub case_type_id: Option<String>,
    pub state: Option<String>,
    pub ethos_case_reference: Option<String>,
    /// Display form of the case creation timestamp.
    pub created_date: Option<String>,
    pub last_modified: Option<String>,
    pub type_of_claim: Vec<String>,

    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<CaseDate>,
    pub claimant_preferred_title: Option<String>,
    pub claimant_email: Option<String>,
    pub claimant_phone: Option<String>,
    pub claimant_contact_preference: Option<String>,
    pub claimant_address: Option<Address>,
    pub claimant_represented: Option<YesOrNo>,

    pub claimant_hearing_preferences: Vec<String>,
    pub claimant_hearing_assistance: Option<String>,

    pub respondents: Vec<RespondentEt3Model>,
    /// Every item of the remote `documentCollection`.
    pub document_collection: Vec<DocumentTypeItem>,
    /// ET1 claim forms, English and Welsh.
    pub documents: Vec<DocumentTypeItem>,
    pub acas_certificates: Vec<DocumentTypeItem>,
    pub claimant_attachments: Vec<DocumentTypeItem>,
    pub et1_submitted_form: Option<Document>,

    pub claim_served_date: Option<String>,
    pub receipt_date: Option<String>,
    pub date_accepted: Option<String>,
    /// Date the ET3 response is due, rendered in the session language.
    pub et3_response_due_date: Option<String>,
    pub managing_office: Option<String>,
    pub tribunal_correspondence_email: Option<String>,
}

impl CaseWithId {
    pub fn includes_breach_of_contract(&self) -> bool {
        self.type_of_claim
            .iter()
            .any(|claim| claim == type_of_claim::BREACH_OF_CONTRACT)
    }

    pub fn claimant_full_name(&self) -> Option<String> {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            (Some(first), None) => Some(first.to_string()),
            (None, Some(last)) => Some(last.to_string()),
            (None, None) => None,
        }
    }
}
