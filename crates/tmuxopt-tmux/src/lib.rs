//! tmuxopt-tmux: tmux command construction and option parsing.
//! Builds tmux invocations, runs them through an injectable process runner,
//! and parses `show-options` output. Stateless per call.

pub mod error;
pub mod options;
pub mod runner;
pub mod scope;
pub mod tmux;

pub use error::TmuxError;
pub use options::{Options, format_options, parse_option_line, parse_options};
pub use runner::{ExecRunner, ProcessRunner};
pub use scope::{Scope, UnknownScope, scope_flags};
pub use tmux::{DEFAULT_BINARY, Tmux};
