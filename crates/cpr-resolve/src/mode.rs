//! Resolution modes: compile flags or link flags

use std::fmt;
use std::str::FromStr;

/// Selects the query flag and fallback layout for a resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionMode {
    /// Compile flags (`--cflags`, `-I<base>/<pkg>/include`)
    Flags,
    /// Link flags (`--libs`, `-L<base>/<pkg>/lib`)
    Libs,
}

impl ResolutionMode {
    /// Command token selecting this mode
    pub fn name(&self) -> &'static str {
        match self {
            Self::Flags => "flags",
            Self::Libs => "libs",
        }
    }

    /// Argument passed to the query tool
    pub fn query_flag(&self) -> &'static str {
        match self {
            Self::Flags => "--cflags",
            Self::Libs => "--libs",
        }
    }

    /// Flag prefixed to a fallback directory
    pub fn fallback_prefix(&self) -> &'static str {
        match self {
            Self::Flags => "-I",
            Self::Libs => "-L",
        }
    }

    /// Subdirectory of `<base>/<pkg>` probed by the fallback
    pub fn fallback_subdir(&self) -> &'static str {
        match self {
            Self::Flags => "include",
            Self::Libs => "lib",
        }
    }

    /// All modes
    pub fn all() -> [ResolutionMode; 2] {
        [Self::Flags, Self::Libs]
    }
}

impl FromStr for ResolutionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flags" => Ok(Self::Flags),
            "libs" => Ok(Self::Libs),
            _ => Err(format!("invalid command '{}'", s)),
        }
    }
}

impl fmt::Display for ResolutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
