use std::collections::HashMap;

use shared_types::ccd::{AddressApi, RespondentApiModel, RespondentItemApi};
use shared_types::{
    Address, CaseDetailsLinksStatuses, EmailOrPost, Et3CaseDetailsLinkName, Et3HubLinkName,
    HearingFormat, HubLinksStatuses, LinkStatus, PayFrequency, RespondentEt3Model, YesOrNo,
    YesOrNoOrNotSure,
};

use crate::documents::{
    document_from_api, document_to_api, document_type_item_to_api, map_document_type_items,
};

pub fn address_from_api(api: &AddressApi) -> Address {
    Address {
        line1: api.address_line1.clone(),
        line2: api.address_line2.clone(),
        line3: api.address_line3.clone(),
        town: api.post_town.clone(),
        county: api.county.clone(),
        postcode: api.post_code.clone(),
        country: api.country.clone(),
    }
}

pub fn address_to_api(address: &Address) -> AddressApi {
    AddressApi {
        address_line1: address.line1.clone(),
        address_line2: address.line2.clone(),
        address_line3: address.line3.clone(),
        post_town: address.town.clone(),
        county: address.county.clone(),
        post_code: address.postcode.clone(),
        country: address.country.clone(),
    }
}

fn yes_no(value: &Option<String>) -> Option<YesOrNo> {
    value.as_deref().and_then(YesOrNo::from_api)
}

fn yes_no_not_sure(value: &Option<String>) -> Option<YesOrNoOrNotSure> {
    value.as_deref().and_then(YesOrNoOrNotSure::from_api)
}

fn text<T: std::fmt::Display>(value: &Option<T>) -> Option<String> {
    value.as_ref().map(ToString::to_string)
}

/// Remote hub map to typed statuses. Unknown section names or status values
/// are ignored.
pub fn hub_statuses_from_api(map: &HashMap<String, String>) -> HubLinksStatuses {
    let mut statuses = HubLinksStatuses::default();
    for (name, status) in map {
        if let (Some(name), Some(status)) =
            (Et3HubLinkName::from_api(name), LinkStatus::from_api(status))
        {
            statuses.set(name, status);
        }
    }
    statuses
}

pub fn hub_statuses_to_api(statuses: &HubLinksStatuses) -> HashMap<String, String> {
    statuses
        .0
        .iter()
        .map(|(name, status)| (name.as_str().to_string(), status.as_str().to_string()))
        .collect()
}

pub fn case_details_statuses_from_api(map: &HashMap<String, String>) -> CaseDetailsLinksStatuses {
    let mut statuses = CaseDetailsLinksStatuses::default();
    for (name, status) in map {
        if let (Some(name), Some(status)) = (
            Et3CaseDetailsLinkName::from_api(name),
            LinkStatus::from_api(status),
        ) {
            statuses.set(name, status);
        }
    }
    statuses
}

pub fn case_details_statuses_to_api(statuses: &CaseDetailsLinksStatuses) -> HashMap<String, String> {
    statuses
        .0
        .iter()
        .map(|(name, status)| (name.as_str().to_string(), status.as_str().to_string()))
        .collect()
}

/// One `respondentCollection` entry to the view-model.
pub fn respondent_from_api(item: &RespondentItemApi) -> RespondentEt3Model {
    let Some(api) = item.value.as_ref() else {
        return RespondentEt3Model {
            id: item.id.clone(),
            ..Default::default()
        };
    };

    RespondentEt3Model {
        id: item.id.clone(),
        idam_id: api.idam_id.clone(),
        respondent_name: api.respondent_name.clone(),
        respondent_organisation: api.respondent_organisation.clone(),
        respondent_address: api.respondent_address.as_ref().map(address_from_api),
        respondent_phone: api.respondent_phone1.clone(),
        response_respondent_name: api.response_respondent_name.clone(),
        response_respondent_address: api.response_respondent_address.as_ref().map(address_from_api),
        response_respondent_phone: api.response_respondent_phone1.clone(),
        response_respondent_email: api.response_respondent_email.clone(),
        contact_preference: api
            .response_respondent_contact_preference
            .as_deref()
            .and_then(EmailOrPost::from_api),
        language_preference: api.et3_response_language_preference.clone(),
        contact_name: api.et3_response_respondent_contact_name.clone(),
        dx_address: api.et3_response_dx_address.clone(),
        hearing_formats: api
            .et3_response_hearing_respondent
            .iter()
            .flatten()
            .filter_map(|f| HearingFormat::from_api(f))
            .collect(),
        support_needed: yes_no_not_sure(&api.et3_response_respondent_support_needed),
        support_details: api.et3_response_respondent_support_details.clone(),
        employer_type: api.et3_response_respondent_employer_type.clone(),
        preferred_title: api.et3_response_respondent_preferred_title.clone(),
        company_number: api.et3_response_respondent_company_number.clone(),
        employment_count: api.et3_response_employment_count.clone(),
        multiple_sites: yes_no(&api.et3_response_multiple_sites),
        site_employment_count: api.et3_response_site_employment_count.clone(),
        acas_agree: yes_no(&api.et3_response_acas_agree),
        acas_agree_reason: api.et3_response_acas_agree_reason.clone(),
        are_dates_correct: yes_no_not_sure(&api.et3_response_are_dates_correct),
        employment_start_date: api.et3_response_employment_start_date.clone(),
        employment_end_date: api.et3_response_employment_end_date.clone(),
        employment_information: api.et3_response_employment_information.clone(),
        continuing_employment: yes_no_not_sure(&api.et3_response_continuing_employment),
        is_job_title_correct: yes_no_not_sure(&api.et3_response_is_job_title_correct),
        correct_job_title: api.et3_response_correct_job_title.clone(),
        claimant_weekly_hours: yes_no_not_sure(&api.et3_response_claimant_weekly_hours),
        claimant_correct_hours: api.et3_response_claimant_correct_hours.clone(),
        earning_details_correct: yes_no_not_sure(&api.et3_response_earning_details_correct),
        pay_frequency: api
            .et3_response_pay_frequency
            .as_deref()
            .and_then(PayFrequency::from_api),
        pay_before_tax: api.et3_response_pay_before_tax.clone(),
        pay_takehome: api.et3_response_pay_takehome.clone(),
        is_notice_correct: yes_no_not_sure(&api.et3_response_is_notice_correct),
        correct_notice_details: api.et3_response_correct_notice_details.clone(),
        is_pension_correct: yes_no_not_sure(&api.et3_response_is_pension_correct),
        pension_correct_details: api.et3_response_pension_correct_details.clone(),
        contest_claim: yes_no(&api.et3_response_respondent_contest_claim),
        contest_claim_details: api.et3_response_contest_claim_details.clone(),
        contest_claim_documents: api
            .et3_response_contest_claim_document
            .as_deref()
            .map(map_document_type_items)
            .unwrap_or_default(),
        employer_claim: yes_no(&api.et3_response_employer_claim),
        employer_claim_details: api.et3_response_employer_claim_details.clone(),
        employer_claim_document: api
            .et3_response_employer_claim_document
            .as_ref()
            .and_then(document_from_api),
        response_received: yes_no(&api.response_received),
        response_received_date: api.response_received_date.clone(),
        et3_form: api.et3_form.as_ref().and_then(document_from_api),
        hub_links_statuses: api.et3_hub_links_statuses.as_ref().map(hub_statuses_from_api),
        case_details_links_statuses: api
            .et3_case_details_links_statuses
            .as_ref()
            .map(case_details_statuses_from_api),
    }
}

pub fn map_respondents(items: &[RespondentItemApi]) -> Vec<RespondentEt3Model> {
    items.iter().map(respondent_from_api).collect()
}

/// View-model respondent back to the remote record. Absent values stay absent.
pub fn respondent_to_api(respondent: &RespondentEt3Model) -> RespondentApiModel {
    RespondentApiModel {
        idam_id: respondent.idam_id.clone(),
        respondent_name: respondent.respondent_name.clone(),
        respondent_organisation: respondent.respondent_organisation.clone(),
        respondent_address: respondent.respondent_address.as_ref().map(address_to_api),
        respondent_phone1: respondent.respondent_phone.clone(),
        response_received: text(&respondent.response_received),
        response_received_date: respondent.response_received_date.clone(),
        response_respondent_name: respondent.response_respondent_name.clone(),
        response_respondent_address: respondent
            .response_respondent_address
            .as_ref()
            .map(address_to_api),
        response_respondent_phone1: respondent.response_respondent_phone.clone(),
        response_respondent_email: respondent.response_respondent_email.clone(),
        response_respondent_contact_preference: text(&respondent.contact_preference),
        et3_response_language_preference: respondent.language_preference.clone(),
        et3_response_respondent_contact_name: respondent.contact_name.clone(),
        et3_response_dx_address: respondent.dx_address.clone(),
        et3_response_hearing_respondent: (!respondent.hearing_formats.is_empty()).then(|| {
            respondent
                .hearing_formats
                .iter()
                .map(|f| f.as_str().to_string())
                .collect()
        }),
        et3_response_respondent_support_needed: text(&respondent.support_needed),
        et3_response_respondent_support_details: respondent.support_details.clone(),
        et3_response_respondent_employer_type: respondent.employer_type.clone(),
        et3_response_respondent_preferred_title: respondent.preferred_title.clone(),
        et3_response_respondent_company_number: respondent.company_number.clone(),
        et3_response_employment_count: respondent.employment_count.clone(),
        et3_response_multiple_sites: text(&respondent.multiple_sites),
        et3_response_site_employment_count: respondent.site_employment_count.clone(),
        et3_response_acas_agree: text(&respondent.acas_agree),
        et3_response_acas_agree_reason: respondent.acas_agree_reason.clone(),
        et3_response_are_dates_correct: text(&respondent.are_dates_correct),
        et3_response_employment_start_date: respondent.employment_start_date.clone(),
        et3_response_employment_end_date: respondent.employment_end_date.clone(),
        et3_response_employment_information: respondent.employment_information.clone(),
        et3_response_continuing_employment: text(&respondent.continuing_employment),
        et3_response_is_job_title_correct: text(&respondent.is_job_title_correct),
        et3_response_correct_job_title: respondent.correct_job_title.clone(),
        et3_response_claimant_weekly_hours: text(&respondent.claimant_weekly_hours),
        et3_response_claimant_correct_hours: respondent.claimant_correct_hours.clone(),
        et3_response_earning_details_correct: text(&respondent.earning_details_correct),
        et3_response_pay_frequency: text(&respondent.pay_frequency),
        et3_response_pay_before_tax: respondent.pay_before_tax.clone(),
        et3_response_pay_takehome: respondent.pay_takehome.clone(),
        et3_response_is_notice_correct: text(&respondent.is_notice_correct),
        et3_response_correct_notice_details: respondent.correct_notice_details.clone(),
        et3_response_is_pension_correct: text(&respondent.is_pension_correct),
        et3_response_pension_correct_details: respondent.pension_correct_details.clone(),
        et3_response_respondent_contest_claim: text(&respondent.contest_claim),
        et3_response_contest_claim_document: (!respondent.contest_claim_documents.is_empty())
            .then(|| {
                respondent
                    .contest_claim_documents
                    .iter()
                    .map(document_type_item_to_api)
                    .collect()
            }),
        et3_response_contest_claim_details: respondent.contest_claim_details.clone(),
        et3_response_employer_claim: text(&respondent.employer_claim),
        et3_response_employer_claim_details: respondent.employer_claim_details.clone(),
        et3_response_employer_claim_document: respondent
            .employer_claim_document
            .as_ref()
            .map(document_to_api),
        et3_form: respondent.et3_form.as_ref().map(document_to_api),
        et3_hub_links_statuses: respondent.hub_links_statuses.as_ref().map(hub_statuses_to_api),
        et3_case_details_links_statuses: respondent
            .case_details_links_statuses
            .as_ref()
            .map(case_details_statuses_to_api),
    }
}
