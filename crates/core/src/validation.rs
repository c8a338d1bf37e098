//! Bridges `validator` derive output into [`CoreError::Validation`].

use validator::Validate;

use crate::error::{CoreError, FieldError};

/// Run the derived validation rules on `input`.
///
/// On failure every offending field is reported once, sorted by field name
/// so the error body is stable across runs.
pub fn validate_fields<T: Validate>(input: &T) -> Result<(), CoreError> {
    let errors = match input.validate() {
        Ok(()) => return Ok(()),
        Err(errors) => errors,
    };

    let mut fields: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| {
            errs.first()
                .map(|e| FieldError::new(field.to_string(), describe(&e.code)))
        })
        .collect();
    fields.sort_by(|a, b| a.field.cmp(&b.field));

    Err(CoreError::Validation(fields))
}

fn describe(code: &str) -> &'static str {
    match code {
        "required" => "is required",
        "length" => "must not be empty",
        _ => "is invalid",
    }
}
