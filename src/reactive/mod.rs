//! Hot output streams that the login screen composition publishes to.
pub(crate) mod activation;
pub(crate) mod driver;
#[cfg(test)]
pub(crate) mod driver_error;
