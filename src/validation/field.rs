use strum_macros::{Display, EnumIter};

/// Input fields of the login screen.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Display, EnumIter)]
pub(crate) enum Field {
  #[strum(serialize = "user name")]
  Username,
  #[strum(serialize = "password")]
  Password,
}
