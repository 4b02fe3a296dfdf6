//! Contact details section: respondent name, hearing preferences and contact
//! preferences, in that order.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Form,
};
use serde::{Deserialize, Serialize};
use shared_types::{
    error_type, EmailOrPost, Et3HubLinkName, Et3ModificationType, HearingFormat, LinkStatus,
    YesOrNo, YesOrNoOrNotSure,
};
use validator::Validate;

use crate::error_convert::ValidateForm;
use crate::formatter::SectionUpdate;
use crate::session::SessionHandle;
use crate::state::AppState;
use crate::urls;
use crate::validation::{
    is_field_filled_in, is_one_of, is_valid_uk_tel_number, FormErrors,
};

use super::{
    case_context, non_blank, redirect_after_save, redirect_not_found, render,
    render_with_errors, save_respondent, start_post, CaseContext, YES_NO, YES_NO_NOT_SURE,
};

const LANGUAGES: &[&str] = &["English", "Welsh"];

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RespondentNameForm {
    #[serde(default)]
    pub respondent_name_question: Option<String>,
    #[serde(default)]
    #[validate(length(max = 100, code = "tooLong"))]
    pub response_respondent_name: Option<String>,
    #[serde(default, rename = "saveForLater", skip_serializing)]
    pub save_for_later: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RespondentNameView {
    /// Name the claimant gave for the respondent.
    pub respondent_name: Option<String>,
    pub form: RespondentNameForm,
}

fn name_view(ctx: &CaseContext, form: RespondentNameForm) -> RespondentNameView {
    RespondentNameView {
        respondent_name: ctx.respondent.respondent_name.clone(),
        form,
    }
}

/// GET /respondent-name
pub async fn respondent_name(session: SessionHandle) -> Response {
    let Some(ctx) = case_context(&session) else {
        return redirect_not_found();
    };
    let respondent = &ctx.respondent;
    let confirmed = respondent.response_respondent_name.as_ref().map(|given| {
        respondent.respondent_name.as_ref() == Some(given)
    });
    let form = RespondentNameForm {
        respondent_name_question: confirmed.map(|same| {
            let answer = if same { YesOrNo::Yes } else { YesOrNo::No };
            answer.to_string()
        }),
        response_respondent_name: respondent
            .response_respondent_name
            .clone()
            .filter(|_| confirmed == Some(false)),
        save_for_later: None,
    };
    render(&session, urls::RESPONDENT_NAME, name_view(&ctx, form)).into_response()
}

/// POST /respondent-name
pub async fn post_respondent_name(
    State(state): State<AppState>,
    session: SessionHandle,
    Form(form): Form<RespondentNameForm>,
) -> Response {
    start_post(&session);
    let Some(ctx) = case_context(&session) else {
        return redirect_not_found();
    };

    let mut errors = FormErrors::new();
    errors.check(
        "respondent_name_question",
        is_one_of(form.respondent_name_question.as_deref(), YES_NO),
    );
    let confirmed = form.respondent_name_question.as_deref() == Some(YesOrNo::Yes.as_str());
    if form.respondent_name_question.as_deref() == Some(YesOrNo::No.as_str()) {
        errors.check(
            "response_respondent_name",
            is_field_filled_in(form.response_respondent_name.as_deref()),
        );
    }
    errors.extend(form.form_errors());
    if !errors.is_empty() {
        let view = name_view(&ctx, form);
        return render_with_errors(&session, urls::RESPONDENT_NAME, errors.into_vec(), view)
            .into_response();
    }

    let name = if confirmed {
        ctx.respondent.respondent_name.clone()
    } else {
        non_blank(form.response_respondent_name.as_deref())
    };
    let result = save_respondent(
        &state,
        &session,
        Et3ModificationType::UpdateRespondent,
        SectionUpdate::hub(Et3HubLinkName::ContactDetails, LinkStatus::InProgress),
        |respondent| respondent.response_respondent_name = name,
    )
    .await;

    match result {
        Ok(()) => redirect_after_save(form.save_for_later.is_some(), urls::HEARING_PREFERENCES),
        Err(e) => e.into_page_response(&session, urls::RESPONDENT_NAME, name_view(&ctx, form)),
    }
}

/// Hearing formats arrive as repeated `hearing_format` fields, so the form is
/// read from raw pairs.
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct HearingPreferencesForm {
    pub hearing_format: Vec<String>,
    pub support_needed: Option<String>,
    #[validate(length(max = 2500, code = "tooLong"))]
    pub support_details: Option<String>,
    #[serde(skip)]
    pub save_for_later: bool,
}

impl HearingPreferencesForm {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut form = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "hearing_format" => form.hearing_format.push(value),
                "support_needed" => form.support_needed = Some(value),
                "support_details" => form.support_details = Some(value),
                "saveForLater" => form.save_for_later = true,
                _ => {}
            }
        }
        form
    }

    fn errors(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        if self.hearing_format.is_empty() {
            errors.check("hearing_format", Some(error_type::REQUIRED));
        }
        let parsed: Vec<Option<HearingFormat>> = self
            .hearing_format
            .iter()
            .map(|v| HearingFormat::from_api(v))
            .collect();
        let neither_with_others =
            parsed.contains(&Some(HearingFormat::Neither)) && parsed.len() > 1;
        if parsed.iter().any(Option::is_none) || neither_with_others {
            errors.check("hearing_format", Some(error_type::INVALID));
        }
        errors.check(
            "support_needed",
            is_one_of(self.support_needed.as_deref(), YES_NO_NOT_SURE),
        );
        if self.support_needed.as_deref() == Some(YesOrNoOrNotSure::Yes.as_str()) {
            errors.check("support_details", is_field_filled_in(self.support_details.as_deref()));
        }
        errors.extend(self.form_errors());
        errors
    }
}

/// GET /hearing-preferences
pub async fn hearing_preferences(session: SessionHandle) -> Response {
    let Some(ctx) = case_context(&session) else {
        return redirect_not_found();
    };
    let respondent = ctx.respondent;
    let form = HearingPreferencesForm {
        hearing_format: respondent.hearing_formats.iter().map(|f| f.to_string()).collect(),
        support_needed: respondent.support_needed.map(|v| v.to_string()),
        support_details: respondent.support_details,
        save_for_later: false,
    };
    render(&session, urls::HEARING_PREFERENCES, form).into_response()
}

/// POST /hearing-preferences
pub async fn post_hearing_preferences(
    State(state): State<AppState>,
    session: SessionHandle,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    start_post(&session);
    let form = HearingPreferencesForm::from_pairs(pairs);
    let errors = form.errors();
    if !errors.is_empty() {
        return render_with_errors(&session, urls::HEARING_PREFERENCES, errors.into_vec(), form)
            .into_response();
    }

    let formats: Vec<HearingFormat> = form
        .hearing_format
        .iter()
        .filter_map(|v| HearingFormat::from_api(v))
        .collect();
    let support_needed = form.support_needed.as_deref().and_then(YesOrNoOrNotSure::from_api);
    let support_details = non_blank(form.support_details.as_deref())
        .filter(|_| support_needed == Some(YesOrNoOrNotSure::Yes));

    let result = save_respondent(
        &state,
        &session,
        Et3ModificationType::UpdateRespondent,
        SectionUpdate::hub(Et3HubLinkName::ContactDetails, LinkStatus::InProgress),
        |respondent| {
            respondent.hearing_formats = formats;
            respondent.support_needed = support_needed;
            respondent.support_details = support_details;
        },
    )
    .await;

    match result {
        Ok(()) => redirect_after_save(form.save_for_later, urls::RESPONDENT_CONTACT_PREFERENCES),
        Err(e) => e.into_page_response(&session, urls::HEARING_PREFERENCES, form),
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ContactPreferencesForm {
    #[serde(default)]
    pub contact_preference: Option<String>,
    #[serde(default)]
    #[validate(email(code = "invalid"))]
    pub response_respondent_email: Option<String>,
    #[serde(default)]
    #[validate(length(min = 10, max = 20, code = "invalid"))]
    pub response_respondent_phone: Option<String>,
    #[serde(default)]
    pub language_preference: Option<String>,
    #[serde(default, rename = "saveForLater", skip_serializing)]
    pub save_for_later: Option<String>,
}

impl ContactPreferencesForm {
    /// Blank inputs arrive as empty strings; treat them as absent.
    fn trimmed(&self) -> Self {
        Self {
            contact_preference: non_blank(self.contact_preference.as_deref()),
            response_respondent_email: non_blank(self.response_respondent_email.as_deref()),
            response_respondent_phone: non_blank(self.response_respondent_phone.as_deref()),
            language_preference: non_blank(self.language_preference.as_deref()),
            save_for_later: self.save_for_later.clone(),
        }
    }

    fn errors(&self) -> FormErrors {
        let form = self.trimmed();
        let mut errors = FormErrors::new();
        errors.check(
            "contact_preference",
            is_one_of(form.contact_preference.as_deref(), &["Email", "Post"]),
        );
        if form.contact_preference.as_deref() == Some(EmailOrPost::Email.as_str()) {
            errors.check(
                "response_respondent_email",
                is_field_filled_in(form.response_respondent_email.as_deref()),
            );
        }
        errors.check(
            "response_respondent_phone",
            is_valid_uk_tel_number(form.response_respondent_phone.as_deref()),
        );
        if form.language_preference.is_some() {
            errors.check(
                "language_preference",
                is_one_of(form.language_preference.as_deref(), LANGUAGES),
            );
        }
        errors.extend(form.form_errors());
        errors
    }
}

/// GET /respondent-contact-preferences
pub async fn contact_preferences(session: SessionHandle) -> Response {
    let Some(ctx) = case_context(&session) else {
        return redirect_not_found();
    };
    let respondent = ctx.respondent;
    let form = ContactPreferencesForm {
        contact_preference: respondent.contact_preference.map(|v| v.to_string()),
        response_respondent_email: respondent.response_respondent_email,
        response_respondent_phone: respondent.response_respondent_phone,
        language_preference: respondent.language_preference,
        save_for_later: None,
    };
    render(&session, urls::RESPONDENT_CONTACT_PREFERENCES, form).into_response()
}

/// POST /respondent-contact-preferences
///
/// Last page of the section: completes it unless saved for later.
pub async fn post_contact_preferences(
    State(state): State<AppState>,
    session: SessionHandle,
    Form(form): Form<ContactPreferencesForm>,
) -> Response {
    start_post(&session);
    let errors = form.errors();
    if !errors.is_empty() {
        return render_with_errors(
            &session,
            urls::RESPONDENT_CONTACT_PREFERENCES,
            errors.into_vec(),
            form,
        )
        .into_response();
    }

    let save_for_later = form.save_for_later.is_some();
    let status = if save_for_later {
        LinkStatus::InProgress
    } else {
        LinkStatus::Completed
    };
    let contact_preference = form.contact_preference.as_deref().and_then(EmailOrPost::from_api);
    let email = non_blank(form.response_respondent_email.as_deref());
    let phone = non_blank(form.response_respondent_phone.as_deref());
    let language = non_blank(form.language_preference.as_deref());

    let result = save_respondent(
        &state,
        &session,
        Et3ModificationType::UpdateRespondent,
        SectionUpdate::hub(Et3HubLinkName::ContactDetails, status),
        |respondent| {
            respondent.contact_preference = contact_preference;
            respondent.response_respondent_email = email;
            respondent.response_respondent_phone = phone;
            respondent.language_preference = language;
        },
    )
    .await;

    match result {
        Ok(()) => redirect_after_save(save_for_later, urls::RESPONDENT_RESPONSE_TASK_LIST),
        Err(e) => e.into_page_response(&session, urls::RESPONDENT_CONTACT_PREFERENCES, form),
    }
}
