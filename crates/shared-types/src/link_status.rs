use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::common::api_enum;

api_enum! {
    /// Progress marker shown against a task list or case-details section.
    pub enum LinkStatus {
        NotStarted => "notStartedYet",
        InProgress => "inProgress",
        Completed => "completed",
        Submitted => "submitted",
        Viewed => "viewed",
        NotViewed => "notViewedYet",
        ReadyToView => "readyToView",
        NotAvailableYet => "notAvailableYet",
        WaitingForTribunal => "waitingForTheTribunal",
        Optional => "optional",
        Updated => "updated",
        Stored => "stored",
        CannotStartYet => "cannotStartYet",
    }
}

api_enum! {
    /// Sections of the respondent response task list.
    pub enum Et3HubLinkName {
        ContactDetails => "contactDetails",
        EmployerDetails => "employerDetails",
        ConciliationAndEmployeeDetails => "conciliationAndEmployeeDetails",
        PayPensionBenefitDetails => "payPensionBenefitDetails",
        ContestClaim => "contestClaim",
        EmployersContractClaim => "employersContractClaim",
        CheckYorAnswers => "checkYorAnswers",
    }
}

api_enum! {
    /// Sections of the case-details page.
    pub enum Et3CaseDetailsLinkName {
        PersonalDetails => "personalDetails",
        Et1ClaimForm => "et1ClaimForm",
        RespondentResponse => "respondentResponse",
        HearingDetails => "hearingDetails",
        RespondentRequestsAndApplications => "respondentRequestsAndApplications",
        ClaimantApplications => "claimantApplications",
        ContactTribunal => "contactTribunal",
        TribunalOrders => "tribunalOrders",
        TribunalJudgements => "tribunalJudgements",
        Documents => "documents",
    }
}

/// Task list statuses for one respondent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HubLinksStatuses(pub BTreeMap<Et3HubLinkName, LinkStatus>);

impl HubLinksStatuses {
    /// State of a response nobody has touched yet.
    pub fn initial() -> Self {
        let mut map = BTreeMap::new();
        for name in Et3HubLinkName::ALL {
            let status = match name {
                Et3HubLinkName::CheckYorAnswers => LinkStatus::CannotStartYet,
                _ => LinkStatus::NotStarted,
            };
            map.insert(*name, status);
        }
        Self(map)
    }

    pub fn get(&self, name: Et3HubLinkName) -> Option<LinkStatus> {
        self.0.get(&name).copied()
    }

    pub fn set(&mut self, name: Et3HubLinkName, status: LinkStatus) {
        self.0.insert(name, status);
    }
}

/// Case-details page statuses for one respondent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseDetailsLinksStatuses(pub BTreeMap<Et3CaseDetailsLinkName, LinkStatus>);

impl CaseDetailsLinksStatuses {
    pub fn initial() -> Self {
        let mut map = BTreeMap::new();
        for name in Et3CaseDetailsLinkName::ALL {
            let status = match name {
                Et3CaseDetailsLinkName::PersonalDetails | Et3CaseDetailsLinkName::Et1ClaimForm => {
                    LinkStatus::NotViewed
                }
                Et3CaseDetailsLinkName::RespondentResponse => LinkStatus::NotStarted,
                Et3CaseDetailsLinkName::ContactTribunal | Et3CaseDetailsLinkName::Documents => {
                    LinkStatus::Optional
                }
                _ => LinkStatus::NotAvailableYet,
            };
            map.insert(*name, status);
        }
        Self(map)
    }

    pub fn get(&self, name: Et3CaseDetailsLinkName) -> Option<LinkStatus> {
        self.0.get(&name).copied()
    }

    pub fn set(&mut self, name: Et3CaseDetailsLinkName, status: LinkStatus) {
        self.0.insert(name, status);
    }
}
