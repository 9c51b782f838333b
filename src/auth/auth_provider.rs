use tracing::debug;

use crate::auth::auth_error::AuthError;
use crate::auth::data_source::DataSource;
use crate::auth::login_form::LoginForm;
use crate::auth::user_data::UserData;

#[derive(Clone, Default)]
pub(crate) struct AuthProvider {
  data_sources: Vec<Box<dyn DataSource>>,
}

impl AuthProvider {
  pub(crate) fn new() -> Self {
    Self::default()
  }

  /// Tries each data source in the order they were added.
  ///
  /// Returns the first successfully authenticated user. If every source fails, the most specific
  /// failure is returned, [`AuthError::BackendError`] when there are no sources at all.
  #[tracing::instrument(skip(self))]
  pub(crate) async fn authenticate(&self, login_form: &LoginForm) -> Result<UserData, AuthError> {
    let mut failure = AuthError::BackendError;
    for data_source in self.data_sources.iter() {
      match data_source.authenticate(login_form).await {
        Ok(ud) => return Ok(ud),
        Err(e) => {
          debug!("Data source rejected login: {e:?}");
          if e.precedence() > failure.precedence() {
            failure = e;
          }
        }
      }
    }
    Err(failure)
  }

  pub(crate) fn add_data_source(&mut self, data_source: Box<dyn DataSource>) {
    self.data_sources.push(data_source);
  }
}
