//! Errors that can result while awaiting a [`Driver`] emission.
//!
//! [`Driver`]: crate::reactive::driver::Driver

use thiserror::Error;

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub(crate) enum DriverError {
  #[error("No matching emission before timeout!")]
  Timeout,
}
