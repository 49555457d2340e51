//! Package flag resolution
//!
//! Each package is resolved in order, first through the query tool and then
//! through the local fallback layout. The batch is all-or-nothing: the first
//! package that cannot be resolved aborts it and nothing is written.

use crate::buffer::FlagBuffer;
use crate::capture::capture_process;
use crate::config::ResolverConfig;
use crate::error::{ResolveError, ResolveResult};
use crate::mode::ResolutionMode;
use crate::probe::is_directory;
use std::io::Write;
use tracing::debug;

/// How a single package was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The query tool answered; its output was kept verbatim
    QueryTool,
    /// A directory under the fallback base was used
    Fallback,
}

/// Resolves packages to flags for one mode
#[derive(Debug, Clone)]
pub struct Resolver {
    mode: ResolutionMode,
    config: ResolverConfig,
}

impl Resolver {
    /// Create a resolver with explicit configuration
    pub fn new(mode: ResolutionMode, config: ResolverConfig) -> Self {
        Self { mode, config }
    }

    /// Create a resolver configured from the environment
    pub fn from_env(mode: ResolutionMode) -> ResolveResult<Self> {
        Ok(Self::new(mode, ResolverConfig::from_env()?))
    }

    pub fn mode(&self) -> ResolutionMode {
        self.mode
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve every package into one space-joined flag buffer.
    ///
    /// Stops at the first unresolved package. The returned buffer has no
    /// leading, doubled, or trailing separators.
    pub fn resolve<S: AsRef<str>>(&self, packages: &[S]) -> ResolveResult<FlagBuffer> {
        let mut buffer = FlagBuffer::new();

        for package in packages {
            self.resolve_package(package.as_ref(), &mut buffer)?;

            // Empty tool output must not produce a leading or doubled space
            if !buffer.is_empty() && buffer.last() != Some(b' ') {
                buffer.push(b' ');
            }
        }

        if buffer.last() == Some(b' ') {
            buffer.truncate(buffer.len() - 1);
        }

        Ok(buffer)
    }

    /// Resolve a batch and write the resulting line to `out`.
    ///
    /// Nothing is written when resolution fails or the result is empty.
    pub fn run<S: AsRef<str>, W: Write>(&self, packages: &[S], out: &mut W) -> ResolveResult<()> {
        let buffer = self.resolve(packages)?;
        buffer.write_line(out)?;
        Ok(())
    }

    /// Resolve one package, appending its flags to `buffer`.
    ///
    /// On failure the buffer is restored to its length on entry.
    pub fn resolve_package(
        &self,
        package: &str,
        buffer: &mut FlagBuffer,
    ) -> ResolveResult<Resolution> {
        let head = buffer.len();

        if capture_process(
            &self.config.query_tool,
            [self.mode.query_flag(), package],
            buffer,
        ) {
            debug!(package, mode = %self.mode, "resolved via query tool");
            return Ok(Resolution::QueryTool);
        }
        buffer.truncate(head);

        let Some(base) = self.config.fallback_base.as_deref() else {
            debug!(package, "query tool failed and no fallback base is set");
            return Err(ResolveError::package_not_found(package, false));
        };

        buffer.push_str(self.mode.fallback_prefix());
        let path_start = buffer.len();
        buffer.push_str(base);
        buffer.push(b'/');
        buffer.push_str(package);
        buffer.push(b'/');
        buffer.push_str(self.mode.fallback_subdir());

        let found = buffer
            .str_from(path_start)
            .map_or(false, |path| is_directory(path));
        if found {
            debug!(package, mode = %self.mode, "resolved via fallback");
            return Ok(Resolution::Fallback);
        }

        debug!(
            package,
            candidate = buffer.str_from(path_start).unwrap_or_default(),
            "fallback directory missing"
        );
        buffer.truncate(head);
        Err(ResolveError::package_not_found(package, true))
    }
}
