//! Various errors that can result during user authentication.

use strum_macros::Display;
use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Display, Error)]
pub(crate) enum AuthError {
  #[strum(to_string = "Incorrect credentials!")]
  UserNotFoundError,
  #[strum(to_string = "Incorrect credentials!")]
  InvalidCredentials,
  #[strum(to_string = "Authentication is not available, try again later!")]
  BackendError,
}

impl AuthError {
  /// How much the error tells about the attempt. Used to pick the reported error when several
  /// data sources fail.
  pub(crate) fn precedence(&self) -> u8 {
    match self {
      AuthError::BackendError => 0,
      AuthError::UserNotFoundError => 1,
      AuthError::InvalidCredentials => 2,
    }
  }
}
