//! Length and format rules for the login fields.

use derive_builder::Builder;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::validation::field::Field;
use crate::validation::validation_error::ValidationError;
use crate::validation::validation_result::ValidationResult;

/// Rules applied to the username and password.
///
/// Lengths are counted in grapheme clusters, so a user typing an accented or composed character
/// sees it counted once. All violated rules are reported together, except for an empty value which
/// only reports [`ValidationError::Required`].
#[derive(Clone, Debug, Builder)]
#[builder(default, build_fn(validate = "Self::validate"))]
pub(crate) struct ValidationRules {
  username_min_length: usize,
  #[builder(setter(strip_option))]
  username_max_length: Option<usize>,
  #[builder(setter(strip_option))]
  username_pattern: Option<Regex>,
  password_min_length: usize,
}

impl Default for ValidationRules {
  fn default() -> Self {
    ValidationRules {
      username_min_length: 1,
      username_max_length: None,
      username_pattern: None,
      password_min_length: 1,
    }
  }
}

impl ValidationRulesBuilder {
  fn validate(&self) -> Result<(), String> {
    if let (Some(min), Some(Some(max))) = (self.username_min_length, self.username_max_length)
      && min > max
    {
      return Err(format!(
        "Username minimum length ({min}) exceeds maximum length ({max})!"
      ));
    }
    Ok(())
  }
}

impl ValidationRules {
  /// Validates a username.
  ///
  /// Surrounding whitespace is ignored, a blank username is treated as missing.
  pub(crate) fn validate_username(&self, username: &str) -> ValidationResult {
    let username = username.trim();
    if username.is_empty() {
      return vec![ValidationError::Required(Field::Username)].into();
    }
    let mut errors = Vec::new();
    let length = username.graphemes(true).count();
    if length < self.username_min_length {
      errors.push(ValidationError::TooShort {
        field: Field::Username,
        min: self.username_min_length,
      });
    }
    if let Some(max) = self.username_max_length
      && length > max
    {
      errors.push(ValidationError::TooLong {
        field: Field::Username,
        max,
      });
    }
    if let Some(pattern) = &self.username_pattern
      && !pattern.is_match(username)
    {
      errors.push(ValidationError::InvalidFormat(Field::Username));
    }
    errors.into()
  }

  /// Validates a password. Whitespace is significant.
  pub(crate) fn validate_password(&self, password: &str) -> ValidationResult {
    if password.is_empty() {
      return vec![ValidationError::Required(Field::Password)].into();
    }
    if password.graphemes(true).count() < self.password_min_length {
      return vec![ValidationError::TooShort {
        field: Field::Password,
        min: self.password_min_length,
      }]
      .into();
    }
    ValidationResult::Valid
  }
}
