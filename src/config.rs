// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Renderer licensing configuration.

use crate::InvoiceError;
use std::env;
use std::fmt;

/// Environment variable holding the renderer licence key.
pub const LICENSE_KEY_VAR: &str = "RENDERER_LICENSE_KEY";

/// Licence key required before anything is rendered.
#[derive(Clone, PartialEq, Eq)]
pub struct LicenseConfig {
    key: String,
}

impl LicenseConfig {
    /// # Errors
    ///
    /// [`InvoiceError::PreconditionFailure`] if `key` is blank.
    pub fn new(key: impl Into<String>) -> Result<Self, InvoiceError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(InvoiceError::PreconditionFailure(format!(
                "{LICENSE_KEY_VAR} is empty"
            )));
        }
        Ok(Self { key })
    }

    /// Reads the key from the environment, loading a `.env` file from the
    /// working directory first if one exists.
    ///
    /// # Errors
    ///
    /// [`InvoiceError::PreconditionFailure`] if a `.env` file exists but
    /// cannot be parsed, or the variable is unset, not unicode, or blank.
    pub fn from_env() -> Result<Self, InvoiceError> {
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => {
                return Err(InvoiceError::PreconditionFailure(format!(
                    "cannot load .env: {e}"
                )));
            }
        }
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads the key through `lookup`, which maps a variable name to its
    /// value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, InvoiceError>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        let key = lookup(LICENSE_KEY_VAR).ok_or_else(|| {
            InvoiceError::PreconditionFailure(format!("{LICENSE_KEY_VAR} not found"))
        })?;
        Self::new(key)
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

// Keeps the key out of logs.
impl fmt::Debug for LicenseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LicenseConfig").field("key", &"<redacted>").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_read_from_lookup() {
        let lookup = |name: &str| (name == LICENSE_KEY_VAR).then(|| "abc123".to_owned());
        let config = LicenseConfig::from_lookup(lookup).unwrap();
        assert_eq!(config.key(), "abc123");
    }

    #[test]
    fn missing_key_is_precondition_failure() {
        let result = LicenseConfig::from_lookup(|_| None);
        assert_eq!(
            result,
            Err(InvoiceError::PreconditionFailure(
                "RENDERER_LICENSE_KEY not found".into()
            ))
        );
    }

    #[test]
    fn blank_key_is_precondition_failure() {
        assert!(matches!(
            LicenseConfig::new("   "),
            Err(InvoiceError::PreconditionFailure(_))
        ));
    }

    #[test]
    fn debug_redacts_key() {
        let config = LicenseConfig::new("secret").unwrap();
        assert!(!format!("{config:?}").contains("secret"));
    }
}
