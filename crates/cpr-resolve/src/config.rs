//! Resolver configuration via environment variables
//!
//! cpr has no configuration file; everything comes from the environment:
//! - `CPRPATH`: base directory of local packages (`<base>/<pkg>/<include|lib>`)
//! - `CPR_PKG_CONFIG`: query tool to run instead of `pkg-config`

use std::env::{self, VarError};
use thiserror::Error;

/// Variable naming the local package base directory
pub const FALLBACK_BASE_VAR: &str = "CPRPATH";

/// Variable overriding the query tool
pub const QUERY_TOOL_VAR: &str = "CPR_PKG_CONFIG";

/// Query tool used when no override is set
pub const DEFAULT_QUERY_TOOL: &str = "pkg-config";

/// Configuration errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("'{var}' is not valid unicode")]
    NotUnicode { var: &'static str },
}

/// Resolver settings, read once per resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Base directory of local packages; `None` disables the fallback
    pub fallback_base: Option<String>,
    /// Program consulted first for every package
    pub query_tool: String,
}

impl ResolverConfig {
    /// Load configuration from environment variables
    ///
    /// An empty `CPRPATH` still counts as configured. An empty
    /// `CPR_PKG_CONFIG` selects the default tool.
    pub fn from_env() -> Result<Self, ConfigError> {
        let fallback_base = read_var(FALLBACK_BASE_VAR)?;
        let query_tool = read_var(QUERY_TOOL_VAR)?
            .filter(|tool| !tool.is_empty())
            .unwrap_or_else(|| DEFAULT_QUERY_TOOL.to_string());

        Ok(Self {
            fallback_base,
            query_tool,
        })
    }

    /// Set the fallback base directory
    pub fn with_fallback_base(mut self, base: impl Into<String>) -> Self {
        self.fallback_base = Some(base.into());
        self
    }

    /// Disable the local fallback
    pub fn without_fallback_base(mut self) -> Self {
        self.fallback_base = None;
        self
    }

    /// Set the query tool
    pub fn with_query_tool(mut self, tool: impl Into<String>) -> Self {
        self.query_tool = tool.into();
        self
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            fallback_base: None,
            query_tool: DEFAULT_QUERY_TOOL.to_string(),
        }
    }
}

fn read_var(var: &'static str) -> Result<Option<String>, ConfigError> {
    match env::var(var) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode { var }),
    }
}
