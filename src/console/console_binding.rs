//! Feeds console input into the login screen.

use async_channel::{Sender, unbounded};
use strum::{EnumMessage, IntoEnumIterator};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use zeroize::Zeroize;

use crate::auth::password::hash_password;
use crate::console::command::Command;
use crate::console::commands::Commands;
use crate::login::view_model::{LoginEvent, LoginInput};

/// Translates console commands into login screen events.
pub(crate) struct ConsoleBinding {
  events: Sender<LoginEvent>,
  token: CancellationToken,
}

impl ConsoleBinding {
  /// Constructs the binding and the [`LoginInput`] it feeds.
  ///
  /// Commands reach the login screen in the order they were typed. The binding stops reading once
  /// `token` is cancelled, either by `QUIT` or from outside.
  pub(crate) fn new(token: CancellationToken) -> (Self, LoginInput) {
    let (events, events_rx) = unbounded();
    let binding = ConsoleBinding { events, token };
    (binding, LoginInput::from_events(events_rx))
  }

  /// Reads commands line by line until the input ends or the screen is closed.
  #[tracing::instrument(skip_all)]
  pub(crate) async fn run(&self, reader: impl AsyncBufRead + Unpin) -> Result<(), anyhow::Error> {
    let mut lines = reader.lines();
    loop {
      tokio::select! {
        biased;
        _ = self.token.cancelled() => {
          debug!("Login screen closed.");
          break;
        }
        line = lines.next_line() => {
          match line? {
            Some(line) => {
              if let Some(reply) = self.evaluate(line).await? {
                println!("{reply}");
              }
            }
            None => {
              info!("Console input closed.");
              break;
            }
          }
        }
      }
    }
    Ok(())
  }

  /// Parses one line and forwards it to the login screen.
  ///
  /// Returns a line to print for commands that answer directly.
  ///
  /// # Errors
  ///
  /// Fails if the login screen no longer accepts events.
  pub(crate) async fn evaluate(&self, mut message: String) -> Result<Option<String>, anyhow::Error> {
    let command = message.trim_start().parse::<Command>();
    message.zeroize();
    let command = match command {
      Ok(command) => command,
      Err(e) => {
        debug!("Failed to parse command! Error: {e}");
        return Ok(Some("Command not recognized, type HELP.".to_string()));
      }
    };
    match command.command {
      Commands::USER => {
        let event = LoginEvent::UsernameChanged(command.argument.clone());
        self.events.send(event).await?
      }
      Commands::PASS => {
        let event = LoginEvent::PasswordChanged(command.argument.clone());
        self.events.send(event).await?
      }
      Commands::LOGIN => self.events.send(LoginEvent::SubmitRequested).await?,
      Commands::HASH => {
        return match hash_password(&command.argument) {
          Ok(hash) => Ok(Some(hash)),
          Err(e) => {
            warn!("Failed to hash password! {e}");
            Ok(Some("Unable to hash password!".to_string()))
          }
        };
      }
      Commands::HELP => return Ok(Some(help())),
      Commands::QUIT => {
        info!("User left the login screen.");
        self.token.cancel();
      }
    }
    Ok(None)
  }
}

fn help() -> String {
  Commands::iter()
    .filter_map(|c| c.get_message())
    .collect::<Vec<&str>>()
    .join("\n")
}
