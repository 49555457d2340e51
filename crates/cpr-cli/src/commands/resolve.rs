//! Flags and libs commands - resolve packages into one line of flags

use anyhow::Result;
use cpr_resolve::{ResolutionMode, Resolver, ResolverConfig};
use std::io::{self, Write};

/// Resolve `packages` with environment configuration and print the result.
pub fn run(mode: ResolutionMode, packages: &[String]) -> Result<()> {
    let config = ResolverConfig::from_env()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with(mode, config, packages, &mut out)
}

/// Resolve `packages` with explicit configuration, writing to `out`.
///
/// `out` receives either one complete line or nothing.
pub fn run_with<W: Write>(
    mode: ResolutionMode,
    config: ResolverConfig,
    packages: &[String],
    out: &mut W,
) -> Result<()> {
    Resolver::new(mode, config).run(packages, out)?;
    Ok(())
}
