//! Validation Utilities

use std::collections::HashSet;
use std::hash::Hash;

use validator::{ValidationError, ValidationErrors};

use super::error::AppError;

/// Convert validation errors to AppError, keeping every field message.
///
/// Messages are ordered by field name so responses are stable.
pub fn validation_error(errors: ValidationErrors) -> AppError {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    let messages: Vec<String> = fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();

    if messages.is_empty() {
        AppError::validation("Validation failed")
    } else {
        AppError::Validation(messages)
    }
}

/// Whether every element in the slice is distinct.
pub fn all_unique<T: Eq + Hash>(items: &[T]) -> bool {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().all(|item| seen.insert(item))
}

/// Reject text containing NUL characters, which PostgreSQL cannot store.
pub fn no_nul_chars(value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        return Err(ValidationError::new("nul_character"));
    }
    Ok(())
}
