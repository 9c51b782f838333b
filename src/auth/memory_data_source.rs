//! An authentication data source holding users in memory, loaded from configuration.

use std::collections::BTreeMap;

use async_trait::async_trait;
use config::Value;
use tracing::{debug, warn};

use crate::auth::auth_error::AuthError;
use crate::auth::data_source::DataSource;
use crate::auth::login_form::LoginForm;
use crate::auth::password::verify_password;
use crate::auth::user_data::UserData;

#[derive(Clone, Debug, Default)]
pub(crate) struct MemoryDataSource {
  users: BTreeMap<String, UserData>,
}

impl MemoryDataSource {
  /// Constructs a new [`MemoryDataSource`] with no users.
  pub(crate) fn new() -> Self {
    MemoryDataSource::default()
  }

  /// Constructs a data source from the `users` configuration array.
  ///
  /// Each entry must be a table with `username` and `password_hash` strings. Malformed entries are
  /// skipped with a warning.
  pub(crate) fn from_config(users: Vec<Value>) -> Self {
    let mut source = MemoryDataSource::new();
    for (index, user) in users.into_iter().enumerate() {
      let mut table = match user.into_table() {
        Ok(t) => t,
        Err(e) => {
          warn!("User entry {index} is not a table, skipping! {e}");
          continue;
        }
      };
      let username = table.remove("username").map(Value::into_string);
      let password = table.remove("password_hash").map(Value::into_string);
      match (username, password) {
        (Some(Ok(username)), Some(Ok(password))) => {
          source.add_user(UserData::new(username, password))
        }
        _ => warn!("User entry {index} needs 'username' and 'password_hash', skipping!"),
      }
    }
    debug!("Loaded {} users from config.", source.len());
    source
  }

  pub(crate) fn add_user(&mut self, user: UserData) {
    self.users.insert(user.username.clone(), user);
  }

  pub(crate) fn len(&self) -> usize {
    self.users.len()
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.users.is_empty()
  }
}

#[async_trait]
impl DataSource for MemoryDataSource {
  /// Attempts to authenticate a user.
  ///
  /// Looks up the user by username and verifies the password against the stored hash.
  ///
  /// # Errors
  ///
  /// - [`AuthError::UserNotFoundError`]: If the username is not known.
  /// - [`AuthError::InvalidCredentials`]: If the password is incorrect.
  /// - [`AuthError::BackendError`]: If the stored hash is corrupted.
  ///
  #[tracing::instrument(skip(self))]
  async fn authenticate(&self, login_form: &LoginForm) -> Result<UserData, AuthError> {
    let user = self
      .users
      .get(&login_form.username)
      .ok_or(AuthError::UserNotFoundError)?;
    match verify_password(&login_form.password, &user.password) {
      Ok(true) => Ok(user.clone()),
      Ok(false) => Err(AuthError::InvalidCredentials),
      Err(e) => {
        warn!("Stored password hash for '{}' is corrupted! {e}", user.username);
        Err(AuthError::BackendError)
      }
    }
  }
}
