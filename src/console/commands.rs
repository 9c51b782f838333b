//! Commands understood by the console login screen.

use strum_macros::{Display, EnumIter, EnumMessage, EnumString};

#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Display, EnumIter, EnumMessage, EnumString)]
#[strum(ascii_case_insensitive)]
pub(crate) enum Commands {
  #[strum(message = "USER <name>       Type the user name.")]
  USER,
  #[strum(message = "PASS <password>   Type the password.")]
  PASS,
  #[strum(message = "LOGIN             Submit the form.")]
  LOGIN,
  #[strum(message = "HASH <password>   Print an argon2 hash for the config file.")]
  HASH,
  #[strum(message = "HELP              Show this help.")]
  HELP,
  #[strum(message = "QUIT              Leave without logging in.")]
  QUIT,
}

#[cfg(test)]
mod tests {
  use strum::{EnumMessage, IntoEnumIterator};

  use crate::console::commands::Commands;

  #[test]
  fn ensure_all_commands_have_help_test() {
    Commands::iter().for_each(|c| assert!(c.get_message().is_some()));
  }
}
