use std::fmt::{Debug, Formatter};

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Credentials captured at the moment the user submits.
///
/// Both values are wiped from memory when the form is dropped.
#[derive(Clone, Eq, PartialEq, Hash, Default, Zeroize, ZeroizeOnDrop)]
pub(crate) struct LoginForm {
  pub(crate) username: String,
  pub(crate) password: String,
}

impl LoginForm {
  pub(crate) fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
    LoginForm {
      username: username.into(),
      password: password.into(),
    }
  }
}

impl Debug for LoginForm {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("LoginForm")
      .field("username", &self.username)
      .field("password", &"***")
      .finish()
  }
}
