use serde::{Deserialize, Serialize};

/// Declares a unit enum whose wire form is the string the case API uses.
///
/// Generates `as_str`, a lenient `from_api` parser (unknown values yield
/// `None`), an `ALL` table in declaration order and a `Display` impl.
macro_rules! api_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $value)] $variant, )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }

            pub fn from_api(value: &str) -> Option<Self> {
                match value {
                    $($value => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use api_enum;

api_enum! {
    pub enum YesOrNo {
        Yes => "Yes",
        No => "No",
    }
}

api_enum! {
    pub enum YesOrNoOrNotSure {
        Yes => "Yes",
        No => "No",
        NotSure => "Not Sure",
    }
}

api_enum! {
    /// How the respondent wants the tribunal to contact them.
    pub enum EmailOrPost {
        Email => "Email",
        Post => "Post",
    }
}

api_enum! {
    pub enum PayFrequency {
        Weekly => "Weekly",
        Monthly => "Monthly",
        Annually => "Annually",
    }
}

api_enum! {
    /// Hearing formats the respondent can take part in.
    pub enum HearingFormat {
        Video => "Video",
        Phone => "Phone",
        Neither => "Neither",
    }
}

api_enum! {
    /// UI language, keyed by the `lng` query parameter value.
    pub enum Language {
        En => "en",
        Cy => "cy",
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}

api_enum! {
    /// Modification type sent with every ET3 update to the case API.
    pub enum Et3ModificationType {
        UpdateRespondent => "UpdateRespondent",
        SubmitRespondent => "SubmitRespondent",
    }
}

api_enum! {
    /// Overall state of a respondent's ET3 response.
    pub enum Et3Status {
        NotStarted => "notStarted",
        InProgress => "inProgress",
        Completed => "completed",
        Submitted => "submitted",
    }
}

/// Claim type codes as stored in `typesOfClaim`.
pub mod type_of_claim {
    pub const BREACH_OF_CONTRACT: &str = "breachOfContract";
    pub const DISCRIMINATION: &str = "discrimination";
    pub const PAY_RELATED: &str = "payRelated";
    pub const UNFAIR_DISMISSAL: &str = "unfairDismissal";
    pub const WHISTLE_BLOWING: &str = "whistleBlowing";
    pub const OTHER_TYPES: &str = "otherTypesOfClaims";
}

/// Postal address in the internal (view-model) shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub town: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}
