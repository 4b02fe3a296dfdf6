use serde::Serialize;
use shared_types::{
    CaseDetailsLinksStatuses, Et3CaseDetailsLinkName, Language, LinkStatus, RespondentEt3Model,
};

use crate::i18n::link_status_label;

/// Whether a section link can be followed given its status.
pub fn is_link_clickable(status: LinkStatus) -> bool {
    !matches!(
        status,
        LinkStatus::NotStarted | LinkStatus::NotAvailableYet | LinkStatus::CannotStartYet
    )
}

/// Status badge colour modifier.
pub fn status_colour(status: LinkStatus) -> &'static str {
    match status {
        LinkStatus::NotAvailableYet | LinkStatus::WaitingForTribunal | LinkStatus::CannotStartYet => {
            "--grey"
        }
        LinkStatus::ReadyToView | LinkStatus::Optional | LinkStatus::Stored => "--blue",
        LinkStatus::NotStarted | LinkStatus::NotViewed => "--red",
        LinkStatus::Viewed | LinkStatus::Submitted => "--turquoise",
        LinkStatus::Completed => "--green",
        LinkStatus::InProgress | LinkStatus::Updated => "--yellow",
    }
}

/// Page each case-details section opens.
pub fn section_url(name: Et3CaseDetailsLinkName) -> &'static str {
    use crate::urls;
    match name {
        Et3CaseDetailsLinkName::PersonalDetails => urls::CLAIMANT_DETAILS,
        Et3CaseDetailsLinkName::Et1ClaimForm => urls::CLAIMANT_ET1_FORM,
        Et3CaseDetailsLinkName::RespondentResponse => urls::RESPONDENT_RESPONSE_LANDING,
        Et3CaseDetailsLinkName::HearingDetails => urls::HEARING_DETAILS,
        Et3CaseDetailsLinkName::RespondentRequestsAndApplications => urls::RESPONDENT_APPLICATIONS,
        Et3CaseDetailsLinkName::ClaimantApplications => urls::CLAIMANT_APPLICATIONS,
        Et3CaseDetailsLinkName::ContactTribunal => urls::CONTACT_TRIBUNAL,
        Et3CaseDetailsLinkName::TribunalOrders => urls::TRIBUNAL_ORDERS,
        Et3CaseDetailsLinkName::TribunalJudgements => urls::TRIBUNAL_JUDGEMENTS,
        Et3CaseDetailsLinkName::Documents => urls::CASE_DOCUMENTS,
    }
}

/// One row of the case-details section list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseDetailsLink {
    pub name: Et3CaseDetailsLinkName,
    pub status: LinkStatus,
    pub label: &'static str,
    pub colour: &'static str,
    pub clickable: bool,
    pub url: &'static str,
}

/// Section rows in display order. A respondent without a stored map gets the
/// initial statuses.
pub fn case_details_links(
    respondent: Option<&RespondentEt3Model>,
    language: Language,
) -> Vec<CaseDetailsLink> {
    let initial = CaseDetailsLinksStatuses::initial();
    let statuses = respondent
        .and_then(|r| r.case_details_links_statuses.as_ref())
        .unwrap_or(&initial);

    Et3CaseDetailsLinkName::ALL
        .iter()
        .map(|name| {
            let status = statuses
                .get(*name)
                .or_else(|| initial.get(*name))
                .unwrap_or(LinkStatus::NotAvailableYet);
            CaseDetailsLink {
                name: *name,
                status,
                label: link_status_label(status, language),
                colour: status_colour(status),
                clickable: is_link_clickable(status),
                url: section_url(*name),
            }
        })
        .collect()
}
