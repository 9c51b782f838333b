//! Contains global statics

use config::Config;
use once_cell::sync::Lazy;
use regex::Regex;
use tokio::sync::OnceCell;
use tracing::warn;

use crate::auth::auth_provider::AuthProvider;
use crate::validation::rules::{ValidationRules, ValidationRulesBuilder};

/// The configuration loaded from config file
pub(crate) static CONFIG: Lazy<Config> = Lazy::new(|| {
  Config::builder()
    .add_source(config::File::with_name("config.toml").required(false))
    // Add in settings from the environment (with a prefix of GATEHOUSE)
    // E.g. `GATEHOUSE_LOG_LEVEL=debug ./target/app` would set the `log_level` key
    .add_source(config::Environment::with_prefix("GATEHOUSE"))
    .build()
    .unwrap_or_else(|e| {
      eprintln!("Failed to load configuration, using defaults! {e}");
      Config::default()
    })
});

/// The field validation rules, configured or default
pub(crate) static VALIDATION_RULES: Lazy<ValidationRules> =
  Lazy::new(|| validation_rules_from_config(&CONFIG));

pub(crate) static AUTH_PROVIDER: OnceCell<AuthProvider> = OnceCell::const_new();

fn config_usize(config: &Config, key: &str) -> Option<usize> {
  let value = config.get_int(key).ok()?;
  match usize::try_from(value) {
    Ok(v) => Some(v),
    Err(_) => {
      warn!("Config value '{key}' must not be negative, ignoring!");
      None
    }
  }
}

/// Reads the validation rules from config.
///
/// Invalid values are reported and replaced by defaults.
pub(crate) fn validation_rules_from_config(config: &Config) -> ValidationRules {
  let mut builder = ValidationRulesBuilder::default();
  if let Some(min) = config_usize(config, "username_min_length") {
    builder.username_min_length(min);
  }
  if let Some(max) = config_usize(config, "username_max_length") {
    builder.username_max_length(max);
  }
  if let Some(min) = config_usize(config, "password_min_length") {
    builder.password_min_length(min);
  }
  if let Ok(pattern) = config.get_string("username_pattern") {
    match Regex::new(&pattern) {
      Ok(regex) => {
        builder.username_pattern(regex);
      }
      Err(e) => warn!("Invalid username pattern, ignoring! {e}"),
    }
  }
  builder.build().unwrap_or_else(|e| {
    warn!("Invalid validation rules, using defaults! {e}");
    ValidationRules::default()
  })
}
