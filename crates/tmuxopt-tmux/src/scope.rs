//! Option scopes and their `show-options` / `set-option` flags.

use std::fmt;
use std::str::FromStr;

use crate::error::TmuxError;

/// One of the five scopes tmux holds options within.
///
/// `Unset` is the zero value; `Unknown` carries any raw value above the
/// named range so that conversions from integers never fail. Every integer
/// maps to exactly one `Scope`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scope {
    #[default]
    Unset,
    Server,
    GlobalSession,
    Session,
    GlobalWindow,
    Window,
    Unknown(UnknownScope),
}

/// A raw scope value greater than 5. Only built by `Scope::from(u32)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnknownScope(u32);

impl UnknownScope {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl Scope {
    pub const NAMED: [Self; 5] = [
        Self::Server,
        Self::GlobalSession,
        Self::Session,
        Self::GlobalWindow,
        Self::Window,
    ];

    /// Command line flag restricting an option command to this scope.
    ///
    /// Session scope is tmux's default and needs no flag, so `Unset` and
    /// `Unknown` fall back to it.
    pub fn flags(self) -> &'static str {
        match self {
            Self::Server => "-s",
            Self::GlobalSession => "-g",
            Self::GlobalWindow => "-gw",
            Self::Window => "-w",
            Self::Unset | Self::Session | Self::Unknown(_) => "",
        }
    }

    pub fn as_u32(self) -> u32 {
        match self {
            Self::Unset => 0,
            Self::Server => 1,
            Self::GlobalSession => 2,
            Self::Session => 3,
            Self::GlobalWindow => 4,
            Self::Window => 5,
            Self::Unknown(n) => n.get(),
        }
    }
}

/// Free-function form of [`Scope::flags`].
pub fn scope_flags(scope: Scope) -> &'static str {
    scope.flags()
}

impl From<u32> for Scope {
    fn from(n: u32) -> Self {
        match n {
            0 => Self::Unset,
            1 => Self::Server,
            2 => Self::GlobalSession,
            3 => Self::Session,
            4 => Self::GlobalWindow,
            5 => Self::Window,
            other => Self::Unknown(UnknownScope(other)),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => f.write_str("unset"),
            Self::Server => f.write_str("server"),
            Self::GlobalSession => f.write_str("global-session"),
            Self::Session => f.write_str("session"),
            Self::GlobalWindow => f.write_str("global-window"),
            Self::Window => f.write_str("window"),
            Self::Unknown(n) => write!(f, "{}", n.get()),
        }
    }
}

impl FromStr for Scope {
    type Err = TmuxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unset" => Ok(Self::Unset),
            "server" => Ok(Self::Server),
            "global-session" => Ok(Self::GlobalSession),
            "session" => Ok(Self::Session),
            "global-window" => Ok(Self::GlobalWindow),
            "window" => Ok(Self::Window),
            other => other
                .parse::<u32>()
                .map(Self::from)
                .map_err(|_| TmuxError::InvalidScope(s.to_string())),
        }
    }
}
