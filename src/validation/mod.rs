//! Field validation used by the login screen.
pub(crate) mod field;
pub(crate) mod rules;
pub(crate) mod validation_error;
pub(crate) mod validation_result;
