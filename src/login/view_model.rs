//! Turns login screen events into the values the screen renders.

use std::sync::Arc;

use futures::future::{BoxFuture, OptionFuture};
use futures::stream::{self, BoxStream, Fuse, PollNext};
use futures::{Stream, StreamExt};
use tracing::{debug, info};

use crate::auth::auth_error::AuthError;
use crate::login::navigator::LoginNavigator;
use crate::login::presenter_state::PresenterState;
use crate::login::submit_state::SubmitState;
use crate::login::use_case::LoginUseCase;
use crate::reactive::activation::Activation;
use crate::reactive::driver::{Driver, Publisher};
use crate::validation::validation_result::ValidationResult;

/// A single login screen event.
pub(crate) enum LoginEvent {
  UsernameChanged(String),
  PasswordChanged(String),
  SubmitRequested,
}

/// Events produced by the login screen, in the order they are handled.
pub(crate) struct LoginInput {
  pub(crate) events: BoxStream<'static, LoginEvent>,
}

impl LoginInput {
  /// Merges separate username, password and submit streams.
  ///
  /// Separate streams carry no order between each other. Pending edits are always handled before
  /// a pending submit, so a submit never snapshots credentials older than edits already sent.
  pub(crate) fn new(
    username_changed: impl Stream<Item = String> + Send + 'static,
    password_changed: impl Stream<Item = String> + Send + 'static,
    submit_requested: impl Stream<Item = ()> + Send + 'static,
  ) -> Self {
    let edits = stream::select(
      username_changed.map(LoginEvent::UsernameChanged),
      password_changed.map(LoginEvent::PasswordChanged),
    );
    let submits = submit_requested.map(|()| LoginEvent::SubmitRequested);
    let events = stream::select_with_strategy(edits, submits, |_: &mut ()| PollNext::Left);
    LoginInput {
      events: events.boxed(),
    }
  }

  /// Events from one ordered source, handled exactly in the order they were sent.
  pub(crate) fn from_events(events: impl Stream<Item = LoginEvent> + Send + 'static) -> Self {
    LoginInput {
      events: events.boxed(),
    }
  }
}

/// Values rendered by the login screen.
///
/// Nothing is computed until one of the drivers is subscribed to. From then on every driver
/// replays its latest value to new subscribers.
#[derive(Clone)]
pub(crate) struct LoginOutput {
  pub(crate) username_validation: Driver<ValidationResult>,
  pub(crate) password_validation: Driver<ValidationResult>,
  pub(crate) submit_enabled: Driver<bool>,
  pub(crate) loading: Driver<bool>,
  pub(crate) login_succeeded: Driver<()>,
  pub(crate) login_error: Driver<AuthError>,
}

#[derive(Clone)]
struct LoginPublishers {
  username_validation: Publisher<ValidationResult>,
  password_validation: Publisher<ValidationResult>,
  submit_enabled: Publisher<bool>,
  loading: Publisher<bool>,
  login_succeeded: Publisher<()>,
  login_error: Publisher<AuthError>,
}

impl LoginPublishers {
  fn new() -> Self {
    LoginPublishers {
      username_validation: Publisher::new(),
      password_validation: Publisher::new(),
      submit_enabled: Publisher::new(),
      loading: Publisher::with_initial(false),
      login_succeeded: Publisher::new(),
      login_error: Publisher::new(),
    }
  }

  fn drivers(&self, activation: &Arc<Activation>) -> LoginOutput {
    LoginOutput {
      username_validation: self.username_validation.driver(activation),
      password_validation: self.password_validation.driver(activation),
      submit_enabled: self.submit_enabled.driver(activation),
      loading: self.loading.driver(activation),
      login_succeeded: self.login_succeeded.driver(activation),
      login_error: self.login_error.driver(activation),
    }
  }
}

type LoginOperation = BoxFuture<'static, Result<(), AuthError>>;

pub(crate) struct LoginViewModel {
  use_case: Arc<dyn LoginUseCase>,
  navigator: Arc<dyn LoginNavigator>,
}

impl LoginViewModel {
  pub(crate) fn new(use_case: Arc<dyn LoginUseCase>, navigator: Arc<dyn LoginNavigator>) -> Self {
    LoginViewModel {
      use_case,
      navigator,
    }
  }

  /// Composes the screen events into its outputs.
  ///
  /// # Validation
  /// Every username or password edit is validated and emitted on the matching validation driver.
  /// `submit_enabled` is recomputed after every validation and every loading change.
  ///
  /// # Submit
  /// Every submit validates the latest username and password again, emitting both results. Only
  /// when both are valid, `loading` turns on and the login is dispatched with a snapshot of the
  /// credentials. When the login finishes `loading` turns off, then either `login_succeeded` emits
  /// and the navigator leaves for the main screen, or the failure is emitted on `login_error`.
  ///
  /// A validated submit while a login is in flight drops the earlier login. The screen prevents
  /// this by disabling submit while `loading` is on.
  pub(crate) fn transform(self, input: LoginInput) -> LoginOutput {
    let publishers = LoginPublishers::new();
    let pipeline = SubmitPipeline {
      use_case: self.use_case,
      navigator: self.navigator,
      publishers: publishers.clone(),
      state: PresenterState::new(),
    };
    let activation = Arc::new(Activation::new(pipeline.run(input)));
    publishers.drivers(&activation)
  }
}

struct SubmitPipeline {
  use_case: Arc<dyn LoginUseCase>,
  navigator: Arc<dyn LoginNavigator>,
  publishers: LoginPublishers,
  state: PresenterState,
}

impl SubmitPipeline {
  #[tracing::instrument(name = "login_screen", skip_all)]
  async fn run(mut self, input: LoginInput) {
    debug!("Login screen composition started.");
    let mut events: Fuse<_> = input.events.fuse();
    let mut in_flight: Option<LoginOperation> = None;

    loop {
      if events.is_done() && in_flight.is_none() {
        debug!("All inputs closed, login screen composition finished.");
        break;
      }
      tokio::select! {
        biased;
        Some(event) = events.next(), if !events.is_done() => {
          if let Some(login) = self.handle(event) {
            if in_flight.replace(login).is_some() {
              debug!("Login in flight superseded by a new submit.");
            }
          }
        }
        Some(result) = OptionFuture::from(in_flight.as_mut()), if in_flight.is_some() => {
          in_flight = None;
          self.login_finished(result);
        }
        else => {}
      }
    }
  }

  fn handle(&mut self, event: LoginEvent) -> Option<LoginOperation> {
    match event {
      LoginEvent::UsernameChanged(username) => self.username_changed(username),
      LoginEvent::PasswordChanged(password) => self.password_changed(password),
      LoginEvent::SubmitRequested => return self.submit(),
    }
    None
  }

  fn username_changed(&mut self, username: String) {
    let result = self.use_case.validate_username(&username);
    self.state.set_username(username);
    self.emit_username_validation(result);
  }

  fn password_changed(&mut self, password: String) {
    let result = self.use_case.validate_password(&password);
    self.state.set_password(password);
    self.emit_password_validation(result);
  }

  /// Validates the latest credentials and dispatches the login if both fields are valid.
  fn submit(&mut self) -> Option<LoginOperation> {
    self.state.transition(SubmitState::Validating);
    let login_form = self.state.snapshot();
    let username_result = self.use_case.validate_username(&login_form.username);
    let password_result = self.use_case.validate_password(&login_form.password);
    let accepted = username_result.is_valid() && password_result.is_valid();
    self.emit_username_validation(username_result);
    self.emit_password_validation(password_result);

    if !accepted {
      debug!("Submit rejected, invalid fields.");
      self.state.transition(SubmitState::Rejected);
      if self.state.is_loading() {
        self.state.transition(SubmitState::InFlight);
      } else {
        self.state.transition(SubmitState::Idle);
      }
      return None;
    }

    info!("Dispatching login for '{}'.", login_form.username);
    self.set_loading(true);
    self.state.transition(SubmitState::InFlight);
    Some(self.use_case.login(login_form))
  }

  fn login_finished(&mut self, result: Result<(), AuthError>) {
    self.set_loading(false);
    match result {
      Ok(()) => {
        info!("Login succeeded.");
        self.state.transition(SubmitState::Succeeded);
        self.publishers.login_succeeded.emit(());
        self.navigator.to_main();
      }
      Err(e) => {
        info!("Login failed! {e:?}");
        self.state.transition(SubmitState::Failed);
        self.publishers.login_error.emit(e);
        self.state.transition(SubmitState::Idle);
      }
    }
  }

  fn emit_username_validation(&mut self, result: ValidationResult) {
    self.state.set_username_valid(result.is_valid());
    self.publishers.username_validation.emit(result);
    self.emit_submit_enabled();
  }

  fn emit_password_validation(&mut self, result: ValidationResult) {
    self.state.set_password_valid(result.is_valid());
    self.publishers.password_validation.emit(result);
    self.emit_submit_enabled();
  }

  fn emit_submit_enabled(&self) {
    self.publishers.submit_enabled.emit(self.state.submit_enabled());
  }

  /// Submit is disabled before loading turns on and re-enabled only after it turns off, so the two
  /// are never observed as both on.
  fn set_loading(&mut self, loading: bool) {
    self.state.set_loading(loading);
    if loading {
      self.emit_submit_enabled();
      self.publishers.loading.emit(true);
    } else {
      self.publishers.loading.emit(false);
      self.emit_submit_enabled();
    }
  }
}
