//! Helpers shared by `validator` derives across the workspace.

use std::borrow::Cow;

use validator::{ValidationError, ValidationErrors};

/// Key `validator` uses for struct-level (schema) errors.
const SCHEMA_KEY: &str = "__all__";

/// Rejects strings that are empty or contain only whitespace.
///
/// Intended for `#[validate(custom(function = "not_blank"))]`.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some(Cow::Borrowed("must not be empty"));
        return Err(err);
    }
    Ok(())
}

/// Flatten `validator` errors into a single message, ordered by field name.
///
/// ```text
/// name: must not be empty; order: must be an integer
/// ```
///
/// Struct-level errors are listed without a field prefix.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    let mut parts = Vec::new();
    for (field, errs) in fields {
        for err in errs {
            let detail = err
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| err.code.to_string());
            if field == SCHEMA_KEY {
                parts.push(detail);
            } else {
                parts.push(format!("{field}: {detail}"));
            }
        }
    }

    if parts.is_empty() {
        "invalid input".to_string()
    } else {
        parts.join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_blank_rejects_whitespace() {
        assert!(not_blank("").is_err());
        assert!(not_blank("   \t").is_err());
        assert!(not_blank("Novel A").is_ok());
    }

    #[test]
    fn message_is_sorted_by_field() {
        let mut errors = ValidationErrors::new();
        errors.add("title", ValidationError::new("length"));
        let mut blank = ValidationError::new("blank");
        blank.message = Some(Cow::Borrowed("must not be empty"));
        errors.add("name", blank);

        assert_eq!(
            validation_message(&errors),
            "name: must not be empty; title: length"
        );
    }

    #[test]
    fn schema_errors_have_no_prefix() {
        let mut errors = ValidationErrors::new();
        let mut err = ValidationError::new("empty_patch");
        err.message = Some(Cow::Borrowed("at least one field must be supplied"));
        errors.add(SCHEMA_KEY, err);

        assert_eq!(
            validation_message(&errors),
            "at least one field must be supplied"
        );
    }

    #[test]
    fn empty_errors_fall_back_to_generic_message() {
        assert_eq!(validation_message(&ValidationErrors::new()), "invalid input");
    }
}
