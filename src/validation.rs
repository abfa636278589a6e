//! Required-field validation run before a submission is dispatched
//!
//! A required field is missing only when it is the empty string.
//! Whitespace satisfies the constraint.

use thiserror::Error;

use crate::components::{NameForm, TextField};
use crate::input::focus::FocusArea;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{label}: Please fill out this field.")]
pub struct ValidityError {
    pub field: FocusArea,
    pub label: String,
}

pub fn value_missing(field: &TextField) -> bool {
    field.is_required() && field.value().is_empty()
}

/// First required field left empty, in focus order
pub fn check_required(form: &NameForm) -> Result<(), ValidityError> {
    match form.fields().into_iter().find(|(_, field)| value_missing(field)) {
        Some((area, field)) => Err(ValidityError {
            field: area,
            label: field.label().to_string(),
        }),
        None => Ok(()),
    }
}
