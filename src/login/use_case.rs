//! Business operations the login screen depends on.

use std::sync::Arc;

use futures::future::BoxFuture;
use tracing::info;

use crate::auth::auth_error::AuthError;
use crate::auth::auth_provider::AuthProvider;
use crate::auth::login_form::LoginForm;
use crate::validation::rules::ValidationRules;
use crate::validation::validation_result::ValidationResult;

pub(crate) trait LoginUseCase: Send + Sync {
  fn validate_username(&self, username: &str) -> ValidationResult;

  fn validate_password(&self, password: &str) -> ValidationResult;

  /// Prepares a login attempt.
  ///
  /// The returned future does nothing until polled and resolves exactly once.
  fn login(&self, login_form: LoginForm) -> BoxFuture<'static, Result<(), AuthError>>;
}

/// The production use case: [`ValidationRules`] for the fields and an [`AuthProvider`] for the
/// credentials.
#[derive(Clone)]
pub(crate) struct AuthUseCase {
  rules: ValidationRules,
  provider: Arc<AuthProvider>,
}

impl AuthUseCase {
  pub(crate) fn new(rules: ValidationRules, provider: Arc<AuthProvider>) -> Self {
    AuthUseCase { rules, provider }
  }
}

impl LoginUseCase for AuthUseCase {
  fn validate_username(&self, username: &str) -> ValidationResult {
    self.rules.validate_username(username)
  }

  fn validate_password(&self, password: &str) -> ValidationResult {
    self.rules.validate_password(password)
  }

  fn login(&self, login_form: LoginForm) -> BoxFuture<'static, Result<(), AuthError>> {
    let provider = self.provider.clone();
    Box::pin(async move {
      info!("User '{}' attempting login.", &login_form.username);
      match provider.authenticate(&login_form).await {
        Ok(user_data) => {
          info!("User '{}' logged in successfully", user_data.username);
          Ok(())
        }
        Err(e) => {
          info!("User '{}' failed to login! {e:?}", &login_form.username);
          Err(e)
        }
      }
    })
  }
}
