//! Renders the login screen outputs as console lines.

use futures::stream::{BoxStream, select_all};
use futures::StreamExt;

use crate::login::view_model::LoginOutput;
use crate::validation::validation_result::ValidationResult;

fn render_validation(label: &str, result: &ValidationResult) -> String {
  match result {
    ValidationResult::Valid => format!("[{label}] ok"),
    ValidationResult::Invalid(_) => format!("[{label}] {result}"),
  }
}

/// Subscribes to every output and merges them into one stream of printable lines.
pub(crate) fn screen_lines(output: &LoginOutput) -> BoxStream<'static, String> {
  select_all(vec![
    output
      .username_validation
      .subscribe()
      .into_stream()
      .map(|r| render_validation("user name", &r))
      .boxed(),
    output
      .password_validation
      .subscribe()
      .into_stream()
      .map(|r| render_validation("password", &r))
      .boxed(),
    output
      .submit_enabled
      .subscribe_changes()
      .into_stream()
      .map(|enabled| format!("[login] {}", if enabled { "enabled" } else { "disabled" }))
      .boxed(),
    output
      .loading
      .subscribe_changes()
      .into_stream()
      .map(|loading| if loading { "Logging in...".to_string() } else { "Done.".to_string() })
      .boxed(),
    output
      .login_succeeded
      .subscribe_changes()
      .into_stream()
      .map(|()| "Login successful.".to_string())
      .boxed(),
    output
      .login_error
      .subscribe_changes()
      .into_stream()
      .map(|e| format!("Error: {e}"))
      .boxed(),
  ])
  .boxed()
}
