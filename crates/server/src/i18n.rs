//! Strings the service renders itself, in English and Welsh.

use shared_types::{Language, LinkStatus};

const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

const MONTHS_CY: [&str; 12] = [
    "Ionawr", "Chwefror", "Mawrth", "Ebrill", "Mai", "Mehefin", "Gorffennaf", "Awst", "Medi",
    "Hydref", "Tachwedd", "Rhagfyr",
];

/// Month name for a 1-based month number.
pub fn month_name(month: u32, language: Language) -> &'static str {
    let table = match language {
        Language::En => &MONTHS_EN,
        Language::Cy => &MONTHS_CY,
    };
    table
        .get((month as usize).wrapping_sub(1))
        .copied()
        .unwrap_or("")
}

/// Fragments of the "n of m tasks completed" summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressTranslations {
    pub of: &'static str,
    pub tasks_completed: &'static str,
}

impl ProgressTranslations {
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::En => Self {
                of: "of",
                tasks_completed: "tasks completed",
            },
            Language::Cy => Self {
                of: "o",
                tasks_completed: "tasg wedi'u cwblhau",
            },
        }
    }
}

/// Label shown inside a status badge.
pub fn link_status_label(status: LinkStatus, language: Language) -> &'static str {
    match language {
        Language::En => match status {
            LinkStatus::NotStarted => "Not started yet",
            LinkStatus::InProgress => "In progress",
            LinkStatus::Completed => "Completed",
            LinkStatus::Submitted => "Submitted",
            LinkStatus::Viewed => "Viewed",
            LinkStatus::NotViewed => "Not viewed yet",
            LinkStatus::ReadyToView => "Ready to view",
            LinkStatus::NotAvailableYet => "Not available yet",
            LinkStatus::WaitingForTribunal => "Waiting for the tribunal",
            LinkStatus::Optional => "Optional",
            LinkStatus::Updated => "Updated",
            LinkStatus::Stored => "Stored",
            LinkStatus::CannotStartYet => "Cannot start yet",
        },
        Language::Cy => match status {
            LinkStatus::NotStarted => "Heb ddechrau eto",
            LinkStatus::InProgress => "Ar y gweill",
            LinkStatus::Completed => "Wedi cwblhau",
            LinkStatus::Submitted => "Wedi'i gyflwyno",
            LinkStatus::Viewed => "Wedi gweld",
            LinkStatus::NotViewed => "Heb ei weld eto",
            LinkStatus::ReadyToView => "Yn barod i'w weld",
            LinkStatus::NotAvailableYet => "Ddim ar gael eto",
            LinkStatus::WaitingForTribunal => "Aros am y tribiwnlys",
            LinkStatus::Optional => "Dewisol",
            LinkStatus::Updated => "Wedi diweddaru",
            LinkStatus::Stored => "Wedi'i storio",
            LinkStatus::CannotStartYet => "Methu dechrau eto",
        },
    }
}
