//! Contains implementation of user authentication process.
pub(crate) mod auth_error;
pub(crate) mod auth_provider;
pub(crate) mod data_source;
pub(crate) mod login_form;
pub(crate) mod memory_data_source;
pub(crate) mod password;
pub(crate) mod user_data;
