use shared_types::{AppError, FormError};

use crate::case_api::CaseApiError;

/// Convert a `CaseApiError` into an `AppError`.
pub fn case_api_to_app_error(err: CaseApiError) -> AppError {
    match &err {
        CaseApiError::NotFound(what) => AppError::not_found(format!("Not found: {what}")),
        CaseApiError::Status { status: 401, .. } => {
            AppError::unauthorized("Case API rejected the access token")
        }
        CaseApiError::Status { status: 403, .. } => {
            AppError::forbidden("Case API refused access to the case")
        }
        _ => AppError::upstream(err.to_string()),
    }
}

/// Extension trait providing `.into_app_error()` on `CaseApiError`.
pub trait CaseApiErrorExt {
    fn into_app_error(self) -> AppError;
}

impl CaseApiErrorExt for CaseApiError {
    fn into_app_error(self) -> AppError {
        case_api_to_app_error(self)
    }
}

/// Turn validator failures into session form errors. The rule `code` is the
/// error type, the field name is the property. Sorted by property name.
pub fn validation_errors_to_form_errors(errors: &validator::ValidationErrors) -> Vec<FormError> {
    let mut form_errors: Vec<FormError> = errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| {
            errs.first()
                .map(|first| FormError::new(first.code.to_string(), field.to_string()))
        })
        .collect();
    form_errors.sort_by(|a, b| a.property_name.cmp(&b.property_name));
    form_errors
}

/// Trait for validating submitted forms before processing.
pub trait ValidateForm {
    /// Errors for every failing field, empty when the form is valid.
    fn form_errors(&self) -> Vec<FormError>;
}

impl<T: validator::Validate> ValidateForm for T {
    fn form_errors(&self) -> Vec<FormError> {
        match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => validation_errors_to_form_errors(&errors),
        }
    }
}
