//! Validation utilities.

use crate::{FieldError, TallyError};
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `TallyError` on failure.
    fn validate_request(&self) -> Result<(), TallyError> {
        self.validate().map_err(validation_errors_to_tally_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Flattens `validator::ValidationErrors` into field-level errors.
#[must_use]
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: (*field).to_string(),
                message: error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string),
                code: error.code.to_string(),
            })
        })
        .collect()
}

/// Converts `validator::ValidationErrors` to `TallyError`.
#[must_use]
pub fn validation_errors_to_tally_error(errors: ValidationErrors) -> TallyError {
    let message = field_errors(&errors)
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ");

    TallyError::Validation(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Validate)]
    struct Named {
        #[validate(length(min = 1, message = "must not be empty"))]
        name: String,
    }

    #[test]
    fn test_valid_struct_passes() {
        let named = Named {
            name: "alice".to_string(),
        };
        assert!(named.validate_request().is_ok());
    }

    #[test]
    fn test_invalid_struct_reports_field() {
        let named = Named {
            name: String::new(),
        };
        let err = named.validate_request().unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert!(err.to_string().contains("name: must not be empty"));
    }

    #[test]
    fn test_field_errors_carry_code() {
        let named = Named {
            name: String::new(),
        };
        let errors = named.validate().unwrap_err();
        let fields = field_errors(&errors);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].field, "name");
        assert_eq!(fields[0].code, "length");
    }
}
