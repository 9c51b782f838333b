//! Latest known values of the login screen.

use tracing::{trace, warn};
use zeroize::Zeroize;

use crate::auth::login_form::LoginForm;
use crate::login::submit_state::SubmitState;

/// State owned by the composition task.
///
/// Every field is written only while handling one event, so derived values computed from it always
/// use the latest value of each input. The state is confined to a single task and needs no lock.
#[derive(Default)]
pub(crate) struct PresenterState {
  username: String,
  password: String,
  username_valid: bool,
  password_valid: bool,
  loading: bool,
  submit: SubmitState,
}

impl PresenterState {
  pub(crate) fn new() -> Self {
    PresenterState::default()
  }

  pub(crate) fn set_username(&mut self, username: String) {
    self.username = username;
  }

  pub(crate) fn set_password(&mut self, password: String) {
    self.password.zeroize();
    self.password = password;
  }

  pub(crate) fn set_username_valid(&mut self, valid: bool) {
    self.username_valid = valid;
  }

  pub(crate) fn set_password_valid(&mut self, valid: bool) {
    self.password_valid = valid;
  }

  pub(crate) fn set_loading(&mut self, loading: bool) {
    self.loading = loading;
  }

  pub(crate) fn is_loading(&self) -> bool {
    self.loading
  }

  /// Copies the latest credentials for one login attempt.
  pub(crate) fn snapshot(&self) -> LoginForm {
    LoginForm::new(self.username.clone(), self.password.clone())
  }

  /// Whether the user may submit: both fields valid and no login in flight.
  pub(crate) fn submit_enabled(&self) -> bool {
    self.username_valid && self.password_valid && !self.loading
  }

  pub(crate) fn transition(&mut self, next: SubmitState) {
    if !self.submit.can_transition_to(next) {
      warn!("Unexpected submit transition {} -> {next}!", self.submit);
    }
    trace!("Submit {} -> {next}", self.submit);
    self.submit = next;
  }
}

impl Drop for PresenterState {
  fn drop(&mut self) {
    self.password.zeroize();
  }
}

#[cfg(test)]
mod tests {
  use crate::login::presenter_state::PresenterState;
  use crate::login::submit_state::SubmitState;

  #[test]
  fn snapshot_defaults_to_empty_test() {
    let state = PresenterState::new();
    let form = state.snapshot();
    assert!(form.username.is_empty());
    assert!(form.password.is_empty());
  }

  #[test]
  fn snapshot_uses_latest_text_test() {
    let mut state = PresenterState::new();
    state.set_username("u".to_string());
    state.set_username("user1".to_string());
    state.set_password("pass".to_string());
    let form = state.snapshot();
    assert_eq!("user1", form.username);
    assert_eq!("pass", form.password);
  }

  #[test]
  fn submit_enabled_test() {
    let mut state = PresenterState::new();
    assert!(!state.submit_enabled());
    state.set_username_valid(true);
    assert!(!state.submit_enabled());
    state.set_password_valid(true);
    assert!(state.submit_enabled());
    state.set_loading(true);
    assert!(!state.submit_enabled());
    assert!(state.is_loading());
  }

  #[test]
  fn transition_test() {
    let mut state = PresenterState::new();
    state.transition(SubmitState::Validating);
    state.transition(SubmitState::InFlight);
    assert_eq!(SubmitState::InFlight, state.submit);
  }
}
