//! The login screen: collaborators and the presentation transform.
pub(crate) mod navigator;
pub(crate) mod presenter_state;
pub(crate) mod submit_state;
pub(crate) mod use_case;
pub(crate) mod view_model;
