//! Tmux: builds tmux invocations and runs them through a [`ProcessRunner`].

use crate::error::TmuxError;
use crate::options::{Options, parse_options};
use crate::runner::{ExecRunner, ProcessRunner};
use crate::scope::Scope;

/// Binary used when no path override is configured.
pub const DEFAULT_BINARY: &str = "tmux";

/// Thin tmux command facade.
///
/// Holds only the binary and socket selection; every call is an independent
/// round-trip through the runner.
#[derive(Debug, Clone, Default)]
pub struct Tmux<R = ExecRunner> {
    bin_path: Option<String>,
    socket_path: Option<String>,
    socket_name: Option<String>,
    runner: R,
}

impl Tmux<ExecRunner> {
    /// Facade that spawns real processes.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: ProcessRunner> Tmux<R> {
    pub fn with_runner(runner: R) -> Self {
        Self {
            bin_path: None,
            socket_path: None,
            socket_name: None,
            runner,
        }
    }

    #[must_use]
    pub fn with_bin_path(mut self, path: impl Into<String>) -> Self {
        self.bin_path = non_empty(path.into());
        self
    }

    #[must_use]
    pub fn with_socket_path(mut self, path: impl Into<String>) -> Self {
        self.socket_path = non_empty(path.into());
        self
    }

    #[must_use]
    pub fn with_socket_name(mut self, name: impl Into<String>) -> Self {
        self.socket_name = non_empty(name.into());
        self
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// The tmux executable to run.
    pub fn binary(&self) -> &str {
        self.bin_path.as_deref().unwrap_or(DEFAULT_BINARY)
    }

    /// Socket selection flags placed before every subcommand.
    pub fn args(&self) -> Vec<&str> {
        // Socket path takes precedence over socket name
        if let Some(ref path) = self.socket_path {
            vec!["-S", path.as_str()]
        } else if let Some(ref name) = self.socket_name {
            vec!["-L", name.as_str()]
        } else {
            Vec::new()
        }
    }

    /// Run an arbitrary tmux command and return its combined output.
    pub fn exec(&self, args: &[&str]) -> Result<Vec<u8>, TmuxError> {
        let mut full = self.args();
        full.extend_from_slice(args);
        self.runner.run(self.binary(), &full)
    }

    /// Run `show-options` restricted to `scope` and parse the result.
    ///
    /// The scope flag always occupies one argument slot, even when empty.
    pub fn get_options(&self, scope: Scope) -> Result<Options, TmuxError> {
        let output = self.exec(&["show-options", scope.flags()])?;
        let options = parse_options(&output);
        tracing::debug!(%scope, count = options.len(), "parsed options");
        Ok(options)
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}
