//! Mapping between the case API's case record and the page view-model.
//!
//! Nothing in here fails: whatever the remote payload is missing comes out as
//! `None` or an empty list, and callers decide what an absent value means.

pub mod request;
pub mod respondent;

use shared_types::ccd::CaseApiDataResponse;
use shared_types::{document_type, CaseWithId, Language, RespondentEt3Model, YesOrNo};

use crate::dates::{due_date, format_api_timestamp, parse_to_case_date, ET3_RESPONSE_DAYS};
use crate::documents::{document_from_api, filter_by_type, map_document_type_items};

pub use request::{to_api_case_data, to_api_update_request, to_update_case_body, SectionUpdate};
pub use respondent::{map_respondents, respondent_from_api, respondent_to_api};

/// Per-request state the formatter reads and writes.
pub trait FormatterContext {
    fn language(&self) -> Language;
    fn user_id(&self) -> Option<&str>;
    fn selected_respondent_index(&self) -> usize;
    fn set_selected_respondent_index(&mut self, index: usize);
}

/// Build the view-model from a remote case.
pub fn to_view_model(remote: &CaseApiDataResponse, language: Language) -> CaseWithId {
    let data = remote.case_data.clone().unwrap_or_default();
    let ind = data.claimant_ind_type.unwrap_or_default();
    let claimant = data.claimant_type.unwrap_or_default();
    let hearing = data.claimant_hearing_preference.unwrap_or_default();

    let document_collection = data
        .document_collection
        .as_deref()
        .map(map_document_type_items)
        .unwrap_or_default();

    CaseWithId {
        id: remote.id.clone().unwrap_or_default(),
        case_type_id: remote.case_type_id.clone(),
        state: remote.state.clone(),
        ethos_case_reference: data.ethos_case_reference,
        created_date: remote
            .created_date
            .as_deref()
            .and_then(|d| format_api_timestamp(d, language)),
        last_modified: remote
            .last_modified
            .as_deref()
            .and_then(|d| format_api_timestamp(d, language)),
        type_of_claim: data.types_of_claim.unwrap_or_default(),

        first_name: ind.claimant_first_names,
        last_name: ind.claimant_last_name,
        date_of_birth: ind
            .claimant_date_of_birth
            .as_deref()
            .and_then(parse_to_case_date),
        claimant_preferred_title: ind.claimant_preferred_title,
        claimant_email: claimant.claimant_email_address,
        claimant_phone: claimant.claimant_phone_number,
        claimant_contact_preference: claimant.claimant_contact_preference,
        claimant_address: claimant
            .claimant_address_uk
            .as_ref()
            .map(respondent::address_from_api),
        claimant_represented: data
            .claimant_represented_question
            .as_deref()
            .and_then(YesOrNo::from_api),
        claimant_hearing_preferences: hearing.hearing_preferences.unwrap_or_default(),
        claimant_hearing_assistance: hearing.hearing_assistance,

        respondents: data
            .respondent_collection
            .as_deref()
            .map(map_respondents)
            .unwrap_or_default(),
        documents: filter_by_type(&document_collection, &[document_type::ET1]),
        acas_certificates: filter_by_type(&document_collection, &[document_type::ACAS_CERTIFICATE]),
        claimant_attachments: filter_by_type(&document_collection, &[document_type::ET1_ATTACHMENT]),
        document_collection,
        et1_submitted_form: data.et1_submitted_form.as_ref().and_then(document_from_api),

        et3_response_due_date: data
            .claim_served_date
            .as_deref()
            .and_then(|d| due_date(d, ET3_RESPONSE_DAYS, language)),
        claim_served_date: data.claim_served_date,
        receipt_date: data.receipt_date,
        date_accepted: data.pre_accept_case.and_then(|p| p.date_accepted),
        managing_office: data.managing_office,
        tribunal_correspondence_email: data.tribunal_correspondence_email,
    }
}

/// Build the view-model and record which respondent the signed-in user is.
pub fn to_view_model_for_session<C: FormatterContext>(
    remote: &CaseApiDataResponse,
    context: &mut C,
) -> CaseWithId {
    let view = to_view_model(remote, context.language());
    let index = resolve_selected_respondent(
        &view.respondents,
        context.user_id(),
        context.selected_respondent_index(),
    );
    context.set_selected_respondent_index(index);
    view
}

/// Position of the user's respondent.
///
/// With no match the current index is kept while it still points into the
/// list, otherwise the first respondent is used.
pub fn resolve_selected_respondent(
    respondents: &[RespondentEt3Model],
    user_id: Option<&str>,
    current: usize,
) -> usize {
    let matched = user_id.and_then(|user_id| {
        respondents
            .iter()
            .position(|r| r.idam_id.as_deref() == Some(user_id))
    });
    match matched {
        Some(index) => index,
        None => {
            let fallback = if current < respondents.len() { current } else { 0 };
            tracing::warn!(
                user_id = user_id.unwrap_or("<none>"),
                respondents = respondents.len(),
                fallback,
                "no respondent matches the signed-in user"
            );
            fallback
        }
    }
}

pub fn find_selected_respondent(view: &CaseWithId, index: usize) -> Option<&RespondentEt3Model> {
    view.respondents.get(index)
}
