use std::fmt::{Display, Formatter};

use crate::validation::validation_error::ValidationError;

/// Outcome of validating one field value.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum ValidationResult {
  Valid,
  Invalid(Vec<ValidationError>),
}

impl ValidationResult {
  pub(crate) fn is_valid(&self) -> bool {
    matches!(self, ValidationResult::Valid)
  }

  pub(crate) fn errors(&self) -> &[ValidationError] {
    match self {
      ValidationResult::Valid => &[],
      ValidationResult::Invalid(errors) => errors,
    }
  }
}

impl From<Vec<ValidationError>> for ValidationResult {
  fn from(errors: Vec<ValidationError>) -> Self {
    if errors.is_empty() {
      ValidationResult::Valid
    } else {
      ValidationResult::Invalid(errors)
    }
  }
}

impl Display for ValidationResult {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    if self.is_valid() {
      return write!(f, "ok");
    }
    let messages: Vec<String> = self.errors().iter().map(|e| e.to_string()).collect();
    write!(f, "{}", messages.join(" "))
  }
}
