//! Password hashing shared by the data sources and the console.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{Error, SaltString};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};

/// Hashes a password with argon2 and a random salt, returning the PHC string.
pub(crate) fn hash_password(password: &str) -> Result<String, Error> {
  let salt = SaltString::generate(&mut OsRng);
  hash_password_with_salt(password, &salt)
}

pub(crate) fn hash_password_with_salt(password: &str, salt: &SaltString) -> Result<String, Error> {
  Ok(
    Argon2::default()
      .hash_password(password.as_bytes(), salt)?
      .to_string(),
  )
}

/// Checks a password against a PHC string.
///
/// # Errors
///
/// Returns an error if the stored hash cannot be parsed. A mismatch is `Ok(false)`.
pub(crate) fn verify_password(password: &str, hash: &str) -> Result<bool, Error> {
  let parsed_hash = PasswordHash::new(hash)?;
  Ok(
    Argon2::default()
      .verify_password(password.as_bytes(), &parsed_hash)
      .is_ok(),
  )
}
