use std::path::Path;
use std::str::FromStr;

use tracing::{Level, error};
use tracing_appender::non_blocking::WorkerGuard;

use crate::global_context::CONFIG;

mod auth;
mod console;
mod global_context;
mod login;
mod reactive;
mod runner;
mod utils;
mod validation;

/// Entrypoint of the application. Runs on tokio.
///
/// # Tracing setup
/// Attempts to load desired log level from configuration. If config does not specify this setting
/// then [`INFO`] is assumed. If `log_file` is configured, tracing is written to that file so it
/// does not mix with the login screen, otherwise to stderr.
///
/// # Runner
/// After the tracing is setup, the [`runner`] is executed.
///
/// [`INFO`]: Level::INFO
/// [`runner`]: runner
///
#[tokio::main]
async fn main() {
  let log_level = Level::from_str(&CONFIG.get_string("log_level").unwrap_or_default())
    .unwrap_or(Level::INFO);
  let guard = setup_tracing(log_level);

  let code = match runner::run().await {
    Ok(()) => 0,
    Err(e) => {
      error!("{e:?}");
      1
    }
  };
  // Reading stdin blocks a runtime thread, so leave without waiting for the runtime to shut down.
  drop(guard);
  std::process::exit(code);
}

fn setup_tracing(log_level: Level) -> Option<WorkerGuard> {
  let builder = tracing_subscriber::fmt()
    .with_file(false)
    .with_line_number(false)
    .with_thread_ids(true)
    .with_target(false)
    .with_max_level(log_level);

  match CONFIG.get_string("log_file") {
    Ok(log_file) => {
      let path = Path::new(&log_file);
      let directory = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
      let file_name = path.file_name().unwrap_or(path.as_os_str());
      let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(directory, file_name));
      let subscriber = builder.with_ansi(false).with_writer(writer).finish();
      if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set up tracing! {e}");
      }
      Some(guard)
    }
    Err(_) => {
      let subscriber = builder.with_writer(std::io::stderr).finish();
      if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set up tracing! {e}");
      }
      None
    }
  }
}
