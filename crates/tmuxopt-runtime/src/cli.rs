//! CLI definition using clap derive.

use clap::{Parser, Subcommand};
use tmuxopt_tmux::Scope;

#[derive(Parser)]
#[command(name = "tmuxopt", about = "Query tmux options")]
pub struct Cli {
    /// tmux binary to run (default: `tmux` on $PATH)
    #[arg(long, env = "TMUXOPT_TMUX_BIN", global = true)]
    pub tmux_bin: Option<String>,

    /// tmux server socket path (passed as `-S`)
    #[arg(long, short = 'S', env = "TMUXOPT_SOCKET_PATH", global = true)]
    pub socket_path: Option<String>,

    /// tmux server socket name (passed as `-L`, ignored when a path is set)
    #[arg(long, short = 'L', env = "TMUXOPT_SOCKET_NAME", global = true)]
    pub socket_name: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the options of one scope
    Show(ShowOpts),
    /// Show the options of every scope
    Dump(DumpOpts),
    /// Run an arbitrary tmux command and print its output
    Exec(ExecOpts),
}

#[derive(clap::Args)]
pub struct ShowOpts {
    /// server, global-session, session, global-window or window
    #[arg(long, short = 's', default_value = "session")]
    pub scope: Scope,

    /// Print a JSON object instead of `show-options` lines
    #[arg(long)]
    pub json: bool,
}

impl Default for ShowOpts {
    fn default() -> Self {
        Self {
            scope: Scope::Session,
            json: false,
        }
    }
}

#[derive(clap::Args)]
pub struct DumpOpts {
    /// Print a JSON array instead of `show-options` lines
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args)]
pub struct ExecOpts {
    /// tmux subcommand and its arguments
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}
