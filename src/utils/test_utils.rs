use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_channel::Receiver;
use futures::future::BoxFuture;

use crate::auth::auth_error::AuthError;
use crate::auth::login_form::LoginForm;
use crate::login::navigator::LoginNavigator;
use crate::login::use_case::LoginUseCase;
use crate::validation::validation_result::ValidationResult;

/// What the mocked login operation does once dispatched.
pub(crate) enum LoginReturnValue {
  Succeed,
  Never,
  /// Resolves with whatever the test pushes into the channel.
  Subject(Receiver<Result<(), AuthError>>),
}

pub(crate) struct MockLoginUseCase {
  pub(crate) validate_username_called: AtomicBool,
  pub(crate) validate_password_called: AtomicBool,
  pub(crate) validate_username_return_value: Mutex<ValidationResult>,
  pub(crate) validate_password_return_value: Mutex<ValidationResult>,
  pub(crate) login_calls: Mutex<Vec<LoginForm>>,
  pub(crate) login_return_value: Mutex<LoginReturnValue>,
}

impl MockLoginUseCase {
  pub(crate) fn new() -> Self {
    MockLoginUseCase {
      validate_username_called: AtomicBool::new(false),
      validate_password_called: AtomicBool::new(false),
      validate_username_return_value: Mutex::new(ValidationResult::Valid),
      validate_password_return_value: Mutex::new(ValidationResult::Valid),
      login_calls: Mutex::new(Vec::new()),
      login_return_value: Mutex::new(LoginReturnValue::Succeed),
    }
  }

  pub(crate) fn with_username_result(self, result: ValidationResult) -> Self {
    *self.validate_username_return_value.lock().unwrap() = result;
    self
  }

  pub(crate) fn with_password_result(self, result: ValidationResult) -> Self {
    *self.validate_password_return_value.lock().unwrap() = result;
    self
  }

  pub(crate) fn with_login_return_value(self, value: LoginReturnValue) -> Self {
    *self.login_return_value.lock().unwrap() = value;
    self
  }

  pub(crate) fn login_called(&self) -> bool {
    !self.login_calls.lock().unwrap().is_empty()
  }

  pub(crate) fn login_call_count(&self) -> usize {
    self.login_calls.lock().unwrap().len()
  }
}

impl LoginUseCase for MockLoginUseCase {
  fn validate_username(&self, _username: &str) -> ValidationResult {
    self.validate_username_called.store(true, Ordering::SeqCst);
    self.validate_username_return_value.lock().unwrap().clone()
  }

  fn validate_password(&self, _password: &str) -> ValidationResult {
    self.validate_password_called.store(true, Ordering::SeqCst);
    self.validate_password_return_value.lock().unwrap().clone()
  }

  fn login(&self, login_form: LoginForm) -> BoxFuture<'static, Result<(), AuthError>> {
    println!("MockLoginUseCase: login called with {:?}", login_form);
    self.login_calls.lock().unwrap().push(login_form);
    match &*self.login_return_value.lock().unwrap() {
      LoginReturnValue::Succeed => Box::pin(async { Ok(()) }),
      LoginReturnValue::Never => Box::pin(futures::future::pending()),
      LoginReturnValue::Subject(receiver) => {
        let receiver = receiver.clone();
        Box::pin(async move {
          match receiver.recv().await {
            Ok(result) => result,
            Err(_) => futures::future::pending().await,
          }
        })
      }
    }
  }
}

#[derive(Default)]
pub(crate) struct MockNavigator {
  pub(crate) to_main_calls: AtomicUsize,
}

impl MockNavigator {
  pub(crate) fn to_main_called(&self) -> bool {
    self.to_main_calls.load(Ordering::SeqCst) > 0
  }
}

impl LoginNavigator for MockNavigator {
  fn to_main(&self) {
    self.to_main_calls.fetch_add(1, Ordering::SeqCst);
  }
}
