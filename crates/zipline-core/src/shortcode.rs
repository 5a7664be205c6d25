use crate::base66::{is_alphabet, ShortCodeBase66};
use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt::Display;

/// A validated short alias for a long URL.
///
/// Short codes are non-empty strings over the 66-symbol base-66 alphabet
/// (`a-z A-Z 0-9 - . _ ~`) and are produced by the code generator.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShortCode(SmolStr);

impl ShortCode {
    /// Creates a `ShortCode` after validating the input.
    ///
    /// Valid codes are non-empty and contain only base-66 alphabet symbols.
    pub fn new(code: impl Into<SmolStr>) -> Result<Self, CoreError> {
        let code = code.into();
        Self::validate(&code)?;
        Ok(Self(code))
    }

    /// Creates a `ShortCode` without validation.
    ///
    /// Use this only for codes produced by trusted internal sources
    /// (the base-66 encoder cannot emit anything outside the alphabet).
    pub fn new_unchecked(code: impl Into<SmolStr>) -> Self {
        Self(code.into())
    }

    /// Generates the full shortened URL based on the provided base URL.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.0)
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(code: &str) -> Result<(), CoreError> {
        if code.is_empty() {
            return Err(CoreError::InvalidShortCode(
                "short code cannot be empty".to_string(),
            ));
        }

        if !is_alphabet(code) {
            return Err(CoreError::InvalidShortCode(format!(
                "must contain only base-66 alphabet symbols: '{}'",
                code
            )));
        }

        Ok(())
    }
}

impl From<ShortCodeBase66> for ShortCode {
    fn from(code: ShortCodeBase66) -> Self {
        Self(SmolStr::new(code.as_str()))
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
