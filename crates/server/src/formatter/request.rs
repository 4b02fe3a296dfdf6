use shared_types::ccd::{
    CaseData, ClaimantHearingPreferenceApi, ClaimantIndTypeApi, ClaimantTypeApi,
    Et3UpdateRequest, PreAcceptCaseApi, RespondentItemApi, UpdateCaseBody,
};
use shared_types::{
    CaseWithId, Et3CaseDetailsLinkName, Et3HubLinkName, Et3ModificationType, LinkStatus,
};

use crate::dates::convert_to_api_format;
use crate::documents::{document_to_api, document_type_item_to_api};

use super::respondent::{address_to_api, respondent_to_api};

/// Section markers sent alongside an ET3 modification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionUpdate {
    pub hub: Option<(Et3HubLinkName, LinkStatus)>,
    pub case_details: Option<(Et3CaseDetailsLinkName, LinkStatus)>,
}

impl SectionUpdate {
    pub fn hub(name: Et3HubLinkName, status: LinkStatus) -> Self {
        Self {
            hub: Some((name, status)),
            case_details: None,
        }
    }

    pub fn case_details(name: Et3CaseDetailsLinkName, status: LinkStatus) -> Self {
        Self {
            hub: None,
            case_details: Some((name, status)),
        }
    }
}

/// Body for the ET3 modification endpoint, carrying the selected respondent.
///
/// `None` when `respondent_index` does not point at a respondent.
pub fn to_api_update_request(
    view: &CaseWithId,
    respondent_index: usize,
    request_type: Et3ModificationType,
    sections: SectionUpdate,
) -> Option<Et3UpdateRequest> {
    let respondent = view.respondents.get(respondent_index)?;
    Some(Et3UpdateRequest {
        case_submission_reference: view.id.clone(),
        case_type_id: view.case_type_id.clone(),
        request_type,
        respondent: respondent_to_api(respondent),
        response_hub_links_section_id: sections.hub.map(|(name, _)| name.as_str().to_string()),
        response_hub_links_section_status: sections
            .hub
            .map(|(_, status)| status.as_str().to_string()),
        case_details_links_section_id: sections
            .case_details
            .map(|(name, _)| name.as_str().to_string()),
        case_details_links_section_status: sections
            .case_details
            .map(|(_, status)| status.as_str().to_string()),
    })
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    (!items.is_empty()).then_some(items)
}

/// Whole view-model back to `caseData`. Fields the view-model does not hold
/// are left out.
pub fn to_api_case_data(view: &CaseWithId) -> CaseData {
    let claimant_ind_type = ClaimantIndTypeApi {
        claimant_first_names: view.first_name.clone(),
        claimant_last_name: view.last_name.clone(),
        claimant_date_of_birth: view.date_of_birth.as_ref().and_then(convert_to_api_format),
        claimant_preferred_title: view.claimant_preferred_title.clone(),
    };
    let claimant_type = ClaimantTypeApi {
        claimant_address_uk: view.claimant_address.as_ref().map(address_to_api),
        claimant_email_address: view.claimant_email.clone(),
        claimant_phone_number: view.claimant_phone.clone(),
        claimant_contact_preference: view.claimant_contact_preference.clone(),
    };
    let hearing = ClaimantHearingPreferenceApi {
        hearing_preferences: non_empty(view.claimant_hearing_preferences.clone()),
        hearing_assistance: view.claimant_hearing_assistance.clone(),
    };

    CaseData {
        ethos_case_reference: view.ethos_case_reference.clone(),
        types_of_claim: non_empty(view.type_of_claim.clone()),
        claimant_ind_type: (claimant_ind_type != ClaimantIndTypeApi::default())
            .then_some(claimant_ind_type),
        claimant_type: (claimant_type != ClaimantTypeApi::default()).then_some(claimant_type),
        claimant_represented_question: view.claimant_represented.map(|v| v.to_string()),
        claimant_hearing_preference: (hearing != ClaimantHearingPreferenceApi::default())
            .then_some(hearing),
        respondent_collection: non_empty(
            view.respondents
                .iter()
                .map(|r| RespondentItemApi {
                    id: r.id.clone(),
                    value: Some(respondent_to_api(r)),
                })
                .collect(),
        ),
        document_collection: non_empty(
            view.document_collection
                .iter()
                .map(document_type_item_to_api)
                .collect(),
        ),
        claim_served_date: view.claim_served_date.clone(),
        receipt_date: view.receipt_date.clone(),
        pre_accept_case: view.date_accepted.as_ref().map(|date| PreAcceptCaseApi {
            case_accepted: None,
            date_accepted: Some(date.clone()),
        }),
        et1_submitted_form: view.et1_submitted_form.as_ref().map(document_to_api),
        managing_office: view.managing_office.clone(),
        tribunal_correspondence_email: view.tribunal_correspondence_email.clone(),
    }
}

pub fn to_update_case_body(view: &CaseWithId) -> UpdateCaseBody {
    UpdateCaseBody {
        case_id: view.id.clone(),
        case_type_id: view.case_type_id.clone(),
        case_data: to_api_case_data(view),
    }
}
