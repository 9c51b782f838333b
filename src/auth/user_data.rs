/// A known user and the argon2 hash of their password.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct UserData {
  pub(crate) username: String,
  pub(crate) password: String,
}

impl UserData {
  pub(crate) fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
    UserData {
      username: username.into(),
      password: password.into(),
    }
  }
}
