//! Secure storage of the service private key using the system keyring.
//!
//! Keeps the private key out of the settings file:
//! - Linux: Secret Service (GNOME Keyring, `KWallet`)
//! - macOS: Keychain
//! - Windows: Credential Manager

use keyring::Entry;
use tracing::{debug, warn};

/// Service name used for keyring entries.
const SERVICE_NAME: &str = "uvb-connector";

/// Error type for credential operations.
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    /// Failed to access keyring.
    #[error("Keyring error: {0}")]
    Keyring(#[from] keyring::Error),

    /// Public key is required to address the keyring entry.
    #[error("Public key is required for credential storage")]
    MissingPublicKey,
}

/// Result type for credential operations.
pub type CredentialResult<T> = std::result::Result<T, CredentialError>;

/// Generates the keyring entry key for a public key.
fn credential_key(public_key: &str) -> CredentialResult<String> {
    if public_key.trim().is_empty() {
        return Err(CredentialError::MissingPublicKey);
    }
    Ok(format!("{SERVICE_NAME}_private_{public_key}"))
}

/// Stores the private key belonging to `public_key`.
///
/// # Errors
///
/// Returns an error if the public key is empty or the keyring operation fails.
pub fn store_private_key(public_key: &str, private_key: &str) -> CredentialResult<()> {
    let key = credential_key(public_key)?;
    let entry = Entry::new(SERVICE_NAME, &key)?;
    entry.set_password(private_key)?;
    debug!("Stored private key in keyring");
    Ok(())
}

/// Retrieves the private key belonging to `public_key`.
///
/// # Errors
///
/// Returns an error if the public key is empty or the keyring operation fails.
pub fn get_private_key(public_key: &str) -> CredentialResult<Option<String>> {
    let key = credential_key(public_key)?;
    let entry = Entry::new(SERVICE_NAME, &key)?;
    match entry.get_password() {
        Ok(private_key) => Ok(Some(private_key)),
        Err(keyring::Error::NoEntry) => {
            debug!("No private key found in keyring");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Deletes the private key belonging to `public_key`.
///
/// Missing entries are not an error.
///
/// # Errors
///
/// Returns an error if the public key is empty or the keyring operation fails.
pub fn delete_private_key(public_key: &str) -> CredentialResult<()> {
    let key = credential_key(public_key)?;
    let entry = Entry::new(SERVICE_NAME, &key)?;
    match entry.delete_credential() {
        Ok(()) => debug!("Deleted private key from keyring"),
        Err(keyring::Error::NoEntry) => debug!("No private key to delete"),
        Err(e) => {
            warn!("Failed to delete private key: {e}");
            return Err(e.into());
        }
    }
    Ok(())
}
