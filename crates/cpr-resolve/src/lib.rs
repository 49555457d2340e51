//! Compiler and linker flag resolution
//!
//! Resolves a batch of package names into a single line of compiler or
//! linker flags:
//! - Each package is first queried through the system query tool
//!   (`pkg-config` by default)
//! - Packages the tool cannot answer for fall back to a local directory
//!   layout rooted at `$CPRPATH` (`<base>/<package>/<include|lib>`)
//! - A batch either resolves completely or produces no output at all
//!
//! # Example
//!
//! ```no_run
//! use cpr_resolve::{ResolutionMode, Resolver, ResolverConfig};
//!
//! let config = ResolverConfig::from_env().unwrap();
//! let resolver = Resolver::new(ResolutionMode::Flags, config);
//! let flags = resolver.resolve(&["zlib"]).unwrap();
//! flags.write_line(&mut std::io::stdout().lock()).unwrap();
//! ```

pub mod buffer;
pub mod capture;
pub mod config;
pub mod error;
pub mod mode;
pub mod probe;
pub mod resolver;

// Re-export main types
pub use buffer::FlagBuffer;
pub use capture::capture_process;
pub use config::{
    ConfigError, ResolverConfig, DEFAULT_QUERY_TOOL, FALLBACK_BASE_VAR, QUERY_TOOL_VAR,
};
pub use error::{ResolveError, ResolveResult};
pub use mode::ResolutionMode;
pub use probe::is_directory;
pub use resolver::{Resolution, Resolver};
