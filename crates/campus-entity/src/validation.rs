//! Translation of `validator` results into [`AppError`].

use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use campus_core::error::AppError;
use campus_core::result::AppResult;

/// Validate an input record, reporting the first offending field.
///
/// Fields are visited in name order so the reported field is stable.
pub fn validate_input<T: Validate>(input: &T) -> AppResult<()> {
    match input.validate() {
        Ok(()) => Ok(()),
        Err(errors) => {
            let (field, message) = first_violation(&errors)
                .unwrap_or_else(|| ("payload".to_string(), "Invalid payload".to_string()));
            Err(AppError::invalid_field(field, message))
        }
    }
}

fn first_violation(errors: &ValidationErrors) -> Option<(String, String)> {
    let mut entries: Vec<_> = errors.errors().iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    for (field, kind) in entries {
        match kind {
            ValidationErrorsKind::Field(errs) => {
                if let Some(err) = errs.first() {
                    return Some((field.to_string(), describe(field, err)));
                }
            }
            ValidationErrorsKind::Struct(inner) => {
                if let Some(found) = first_violation(inner) {
                    return Some(found);
                }
            }
            ValidationErrorsKind::List(items) => {
                for inner in items.values() {
                    if let Some(found) = first_violation(inner) {
                        return Some(found);
                    }
                }
            }
        }
    }
    None
}

fn describe(field: &str, err: &ValidationError) -> String {
    match &err.message {
        Some(message) => message.to_string(),
        None => format!("Field '{field}' failed the '{}' check", err.code),
    }
}
