//! Completion state of a respondent's ET3 response, derived from the link
//! status maps held on the respondent.

pub mod case_details;
pub mod navigation;

use shared_types::{
    CaseDetailsLinksStatuses, CaseWithId, Et3CaseDetailsLinkName, Et3HubLinkName, Et3Status,
    HubLinksStatuses, LinkStatus, RespondentEt3Model,
};

use crate::i18n::ProgressTranslations;

/// Task list sections every respondent has to complete.
pub const CORE_SECTIONS: [Et3HubLinkName; 5] = [
    Et3HubLinkName::ContactDetails,
    Et3HubLinkName::EmployerDetails,
    Et3HubLinkName::ConciliationAndEmployeeDetails,
    Et3HubLinkName::PayPensionBenefitDetails,
    Et3HubLinkName::ContestClaim,
];

/// Sections that count towards completion for this case.
pub fn applicable_sections(view: &CaseWithId) -> Vec<Et3HubLinkName> {
    let mut sections = CORE_SECTIONS.to_vec();
    if view.includes_breach_of_contract() {
        sections.push(Et3HubLinkName::EmployersContractClaim);
    }
    sections
}

fn hub_status(respondent: &RespondentEt3Model, name: Et3HubLinkName) -> Option<LinkStatus> {
    respondent.hub_links_statuses.as_ref()?.get(name)
}

pub fn completed_count(view: &CaseWithId, respondent: &RespondentEt3Model) -> usize {
    applicable_sections(view)
        .into_iter()
        .filter(|name| hub_status(respondent, *name) == Some(LinkStatus::Completed))
        .count()
}

/// `"<n> of <total> tasks completed"` in the translation's language.
pub fn overall_status(
    view: &CaseWithId,
    respondent: &RespondentEt3Model,
    translations: &ProgressTranslations,
) -> String {
    let total = applicable_sections(view).len();
    let done = completed_count(view, respondent);
    format!(
        "{done} {} {total} {}",
        translations.of, translations.tasks_completed
    )
}

pub fn all_sections_completed(view: &CaseWithId, respondent: &RespondentEt3Model) -> bool {
    completed_count(view, respondent) == applicable_sections(view).len()
}

pub fn current_et3_status(respondent: &RespondentEt3Model, view: &CaseWithId) -> Et3Status {
    if respondent.is_submitted() {
        return Et3Status::Submitted;
    }
    if all_sections_completed(view, respondent) {
        return Et3Status::Completed;
    }
    let started = applicable_sections(view).into_iter().any(|name| {
        matches!(
            hub_status(respondent, name),
            Some(status) if status != LinkStatus::NotStarted && status != LinkStatus::CannotStartYet
        )
    });
    if started {
        Et3Status::InProgress
    } else {
        Et3Status::NotStarted
    }
}

/// Set one task list section, initialising the map if the respondent has none.
///
/// Check your answers unlocks once every applicable section is completed.
pub fn update_hub_link_status(
    view: &CaseWithId,
    respondent: &mut RespondentEt3Model,
    name: Et3HubLinkName,
    status: LinkStatus,
) {
    let statuses = respondent
        .hub_links_statuses
        .get_or_insert_with(HubLinksStatuses::initial);
    statuses.set(name, status);

    if all_sections_completed(view, respondent) {
        if let Some(statuses) = respondent.hub_links_statuses.as_mut() {
            if statuses.get(Et3HubLinkName::CheckYorAnswers) != Some(LinkStatus::Completed) {
                statuses.set(Et3HubLinkName::CheckYorAnswers, LinkStatus::NotStarted);
            }
        }
    }
}

pub fn update_case_details_link_status(
    respondent: &mut RespondentEt3Model,
    name: Et3CaseDetailsLinkName,
    status: LinkStatus,
) {
    respondent
        .case_details_links_statuses
        .get_or_insert_with(CaseDetailsLinksStatuses::initial)
        .set(name, status);
}

/// Move a case-details section from not viewed to viewed. Returns whether it changed.
pub fn mark_viewed(respondent: &mut RespondentEt3Model, name: Et3CaseDetailsLinkName) -> bool {
    let current = respondent
        .case_details_links_statuses
        .as_ref()
        .and_then(|s| s.get(name));
    if matches!(current, None | Some(LinkStatus::NotViewed)) {
        update_case_details_link_status(respondent, name, LinkStatus::Viewed);
        return true;
    }
    false
}
