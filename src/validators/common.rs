//! Shared validation utilities.

use std::collections::BTreeMap;

use validator::ValidationErrors;

use crate::constants::ERR_PASSWORD_MISMATCH;
use crate::errors::AppError;

/// Convert validator errors into a redirect-with-flash `AppError`,
/// keyed by field name so the form can render each message next to its
/// input.
///
/// # Example
/// ```ignore
/// form.validate().map_err(|e| validation_errors_to_flash(e, "/repositories/create"))?;
/// ```
pub fn validation_errors_to_flash(e: ValidationErrors, redirect_to: &str) -> AppError {
    let mut errors: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (field, field_errors) in e.field_errors() {
        let messages = field_errors
            .iter()
            .map(|err| err.message.clone().unwrap_or_default().to_string())
            .collect();
        errors.insert(field.to_string(), messages);
    }
    AppError::Validation {
        redirect_to: redirect_to.to_string(),
        errors,
    }
}

/// Validate that the password confirmation matches the password.
pub fn validate_password_match(
    password: &str,
    confirmation: &str,
    redirect_to: &str,
) -> Result<(), AppError> {
    if password != confirmation {
        return Err(AppError::Validation {
            redirect_to: redirect_to.to_string(),
            errors: BTreeMap::from([(
                "password".to_string(),
                vec![ERR_PASSWORD_MISMATCH.to_string()],
            )]),
        });
    }
    Ok(())
}
