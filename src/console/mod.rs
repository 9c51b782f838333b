//! Line-oriented console rendition of the login screen.
pub(crate) mod command;
pub(crate) mod commands;
pub(crate) mod console_binding;
pub(crate) mod screen;
