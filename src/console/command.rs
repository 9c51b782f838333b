//! The command and its argument.

use std::str::FromStr;

use tracing::trace;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::console::commands::Commands;

#[derive(Clone, Debug, PartialEq, Zeroize, ZeroizeOnDrop)]
pub(crate) struct Command {
  #[zeroize(skip)]
  pub(crate) command: Commands,
  pub(crate) argument: String,
}

impl Command {
  pub(crate) fn new(command: Commands, argument: impl Into<String>) -> Self {
    Command {
      command,
      argument: argument.into(),
    }
  }
}

impl FromStr for Command {
  type Err = anyhow::Error;

  /// Parses `<COMMAND> [argument]`.
  ///
  /// Only the line ending is stripped from the argument, so a password may start or end with
  /// spaces.
  #[tracing::instrument(skip(message))]
  fn from_str(message: &str) -> Result<Self, Self::Err> {
    trace!("Parsing message to command.");
    let message_trimmed = message.trim_end_matches(['\n', '\r']);
    let (command, argument) = message_trimmed
      .split_once(' ')
      .unwrap_or((message_trimmed, ""));
    let command = Command::new(command.parse()?, argument);
    trace!("Command parsed: {:?}", command.command);
    Ok(command)
  }
}
