/// Resolution error types
use crate::config::ConfigError;
use thiserror::Error;

pub type ResolveResult<T> = Result<T, ResolveError>;

#[derive(Debug, Error)]
pub enum ResolveError {
    /// Neither the query tool nor the local fallback knows the package.
    #[error("package '{package}' not found")]
    PackageNotFound {
        package: String,
        /// Whether a fallback base path was configured at all
        fallback_configured: bool,
    },

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ResolveError {
    /// Create a package not found error
    pub fn package_not_found(package: impl Into<String>, fallback_configured: bool) -> Self {
        Self::PackageNotFound {
            package: package.into(),
            fallback_configured,
        }
    }

    /// Hint to show alongside the error, if any
    pub fn note(&self) -> Option<String> {
        match self {
            Self::PackageNotFound {
                fallback_configured: false,
                ..
            } => Some(format!(
                "set up the '{}' variable to access local packages",
                crate::config::FALLBACK_BASE_VAR
            )),
            _ => None,
        }
    }
}
