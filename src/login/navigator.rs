//! Screen transitions out of the login screen.

use tokio_util::sync::CancellationToken;
use tracing::info;

pub(crate) trait LoginNavigator: Send + Sync {
  /// Leaves the login screen for the main screen.
  fn to_main(&self);
}

/// Navigator for the console: prints the main screen banner and closes the login screen.
pub(crate) struct ConsoleNavigator {
  login_screen: CancellationToken,
}

impl ConsoleNavigator {
  pub(crate) fn new(login_screen: CancellationToken) -> Self {
    ConsoleNavigator { login_screen }
  }
}

impl LoginNavigator for ConsoleNavigator {
  fn to_main(&self) {
    info!("Navigating to main screen.");
    println!("== Main screen ==");
    println!("You are logged in.");
    self.login_screen.cancel();
  }
}
