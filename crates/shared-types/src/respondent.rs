use serde::{Deserialize, Serialize};

use crate::common::{Address, EmailOrPost, HearingFormat, PayFrequency, YesOrNo, YesOrNoOrNotSure};
use crate::document::{Document, DocumentTypeItem};
use crate::link_status::{CaseDetailsLinksStatuses, HubLinksStatuses};

/// One respondent of the case with its ET3 response, in view-model shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RespondentEt3Model {
    /// Position-stable collection id assigned by the case API.
    pub id: Option<String>,
    pub idam_id: Option<String>,

    // Contact details
    pub respondent_name: Option<String>,
    pub respondent_organisation: Option<String>,
    pub respondent_address: Option<Address>,
    pub respondent_phone: Option<String>,
    pub response_respondent_name: Option<String>,
    pub response_respondent_address: Option<Address>,
    pub response_respondent_phone: Option<String>,
    pub response_respondent_email: Option<String>,
    pub contact_preference: Option<EmailOrPost>,
    pub language_preference: Option<String>,
    pub contact_name: Option<String>,
    pub dx_address: Option<String>,
    pub hearing_formats: Vec<HearingFormat>,
    pub support_needed: Option<YesOrNoOrNotSure>,
    pub support_details: Option<String>,

    // Employer details
    pub employer_type: Option<String>,
    pub preferred_title: Option<String>,
    pub company_number: Option<String>,
    pub employment_count: Option<String>,
    pub multiple_sites: Option<YesOrNo>,
    pub site_employment_count: Option<String>,

    // Conciliation and employee details
    pub acas_agree: Option<YesOrNo>,
    pub acas_agree_reason: Option<String>,
    pub are_dates_correct: Option<YesOrNoOrNotSure>,
    pub employment_start_date: Option<String>,
    pub employment_end_date: Option<String>,
    pub employment_information: Option<String>,
    pub continuing_employment: Option<YesOrNoOrNotSure>,
    pub is_job_title_correct: Option<YesOrNoOrNotSure>,
    pub correct_job_title: Option<String>,
    pub claimant_weekly_hours: Option<YesOrNoOrNotSure>,
    pub claimant_correct_hours: Option<String>,

    // Pay, pension and benefits
    pub earning_details_correct: Option<YesOrNoOrNotSure>,
    pub pay_frequency: Option<PayFrequency>,
    pub pay_before_tax: Option<String>,
    pub pay_takehome: Option<String>,
    pub is_notice_correct: Option<YesOrNoOrNotSure>,
    pub correct_notice_details: Option<String>,
    pub is_pension_correct: Option<YesOrNoOrNotSure>,
    pub pension_correct_details: Option<String>,

    // Contest claim
    pub contest_claim: Option<YesOrNo>,
    pub contest_claim_details: Option<String>,
    pub contest_claim_documents: Vec<DocumentTypeItem>,

    // Employer's contract claim
    pub employer_claim: Option<YesOrNo>,
    pub employer_claim_details: Option<String>,
    pub employer_claim_document: Option<Document>,

    // Submission
    pub response_received: Option<YesOrNo>,
    pub response_received_date: Option<String>,
    pub et3_form: Option<Document>,

    pub hub_links_statuses: Option<HubLinksStatuses>,
    pub case_details_links_statuses: Option<CaseDetailsLinksStatuses>,
}

impl RespondentEt3Model {
    /// Whether this respondent's ET3 has already been submitted.
    pub fn is_submitted(&self) -> bool {
        self.response_received == Some(YesOrNo::Yes)
    }

    /// Name to show for the respondent, preferring the name they gave in the response.
    pub fn display_name(&self) -> Option<&str> {
        self.response_respondent_name
            .as_deref()
            .or(self.respondent_name.as_deref())
    }
}
