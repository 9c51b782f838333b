//! Field-scoped validation failures.

use thiserror::Error;

use crate::validation::field::Field;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub(crate) enum ValidationError {
  #[error("Please enter {0}.")]
  Required(Field),
  #[error("The {field} must be at least {min} characters long.")]
  TooShort { field: Field, min: usize },
  #[error("The {field} must be at most {max} characters long.")]
  TooLong { field: Field, max: usize },
  #[error("The {0} contains characters that are not allowed.")]
  InvalidFormat(Field),
}
