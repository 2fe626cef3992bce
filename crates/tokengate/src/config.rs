//! Gate configuration

use crate::claims::TokenValidation;
use crate::error::{Error, Result};
use crate::projection::ExpiryFormat;

/// Storage slot holding the persisted token
pub const DEFAULT_STORAGE_KEY: &str = "jwt_token";

/// Accepted query parameter names, in lookup order
pub const DEFAULT_QUERY_PARAMS: [&str; 2] = ["token", "secret"];

/// Configuration for a [`TokenGate`](crate::TokenGate)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateConfig {
    pub(crate) storage_key: String,
    pub(crate) query_params: Vec<String>,
    pub(crate) validation: TokenValidation,
    pub(crate) expiry_format: ExpiryFormat,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            query_params: DEFAULT_QUERY_PARAMS.iter().map(|p| p.to_string()).collect(),
            validation: TokenValidation::default(),
            expiry_format: ExpiryFormat::default(),
        }
    }
}

impl GateConfig {
    /// Create a new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the storage slot for the persisted token
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Set the accepted query parameter names; the first present one wins
    pub fn query_params<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.query_params = names.into_iter().map(Into::into).collect();
        self
    }

    /// Configure admission validation
    pub fn validation(mut self, validation: TokenValidation) -> Self {
        self.validation = validation;
        self
    }

    /// Configure how the expiry is displayed
    pub fn expiry_format(mut self, format: ExpiryFormat) -> Self {
        self.expiry_format = format;
        self
    }

    pub(crate) fn check(&self) -> Result<()> {
        if self.query_params.is_empty() {
            return Err(Error::QueryParamsEmpty);
        }
        self.validation.check()
    }
}
