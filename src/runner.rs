//! Execution point of the console login screen.

use std::sync::Arc;

use futures::StreamExt;
use tokio::io::{BufReader, stdin};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use crate::auth::auth_provider::AuthProvider;
use crate::auth::memory_data_source::MemoryDataSource;
use crate::console::console_binding::ConsoleBinding;
use crate::console::screen::screen_lines;
use crate::global_context::{AUTH_PROVIDER, CONFIG, VALIDATION_RULES};
use crate::login::navigator::ConsoleNavigator;
use crate::login::use_case::AuthUseCase;
use crate::login::view_model::LoginViewModel;

/// Runs the login screen on the console.
///
/// # Auth setup
/// The authentication backend ([`AUTH_PROVIDER`]) is initialized with a [`MemoryDataSource`]
/// holding the users from the `users` config array.
///
/// # Screen setup
/// The [`LoginViewModel`] is fed by a [`ConsoleBinding`] reading stdin, and every output is
/// printed as it changes. The screen closes after a successful login, on `QUIT`, at the end of
/// input or on SIGINT.
///
pub(crate) async fn run() -> Result<(), anyhow::Error> {
  let provider = AUTH_PROVIDER
    .get_or_init(|| async {
      debug!("Setting up auth provider.");
      let users = CONFIG.get_array("users").unwrap_or_default();
      let source = MemoryDataSource::from_config(users);
      if source.is_empty() {
        info!("No users configured, every login will be rejected.");
      }
      let mut provider = AuthProvider::new();
      provider.add_data_source(Box::new(source));
      provider
    })
    .await;

  let login_screen = CancellationToken::new();
  let use_case = Arc::new(AuthUseCase::new(
    VALIDATION_RULES.clone(),
    Arc::new(provider.clone()),
  ));
  let navigator = Arc::new(ConsoleNavigator::new(login_screen.clone()));
  let (binding, input) = ConsoleBinding::new(login_screen.clone());
  let output = LoginViewModel::new(use_case, navigator).transform(input);

  let mut lines = screen_lines(&output);
  let screen_token = login_screen.clone();
  let screen = tokio::spawn(async move {
    loop {
      tokio::select! {
        biased;
        Some(line) = lines.next() => println!("{line}"),
        _ = screen_token.cancelled() => break,
      }
    }
  });

  println!("== Login ==");
  println!("Type HELP for the list of commands.");
  tokio::select! {
    result = binding.run(BufReader::new(stdin())) => {
      if let Err(e) = result {
        error!("Console failed! {e}");
      }
    }
    signal = tokio::signal::ctrl_c() => {
      match signal {
        Ok(()) => info!("Ctrl-c received!"),
        Err(e) => error!("Ctrl-c signal error! {e}"),
      }
    }
  }
  login_screen.cancel();
  screen.await?;
  if output.login_succeeded.latest().is_none() {
    info!("Left the login screen without logging in.");
  }
  Ok(())
}
