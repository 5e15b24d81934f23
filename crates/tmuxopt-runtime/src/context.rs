//! Shared setup for all subcommands: logging and the tmux facade.

use tmuxopt_tmux::Tmux;

use crate::cli::Cli;

/// Initialise tracing on stderr. `TMUXOPT_LOG` wins over `RUST_LOG`.
pub fn init_logging() {
    let filter = std::env::var("TMUXOPT_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();
}

/// Build the facade from the global CLI flags.
pub fn build_tmux(cli: &Cli) -> Tmux {
    let mut tmux = Tmux::new();
    if let Some(ref bin) = cli.tmux_bin {
        tmux = tmux.with_bin_path(bin.as_str());
    }
    if let Some(ref path) = cli.socket_path {
        tmux = tmux.with_socket_path(path.as_str());
    }
    if let Some(ref name) = cli.socket_name {
        tmux = tmux.with_socket_name(name.as_str());
    }
    tmux
}
