//! tmuxopt: command line front end for tmuxopt-tmux.

use std::sync::Arc;

use clap::Parser;

mod cli;
mod cmd_dump;
mod cmd_exec;
mod cmd_show;
mod context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();
    context::init_logging();

    let tmux = context::build_tmux(&args);
    tracing::debug!(binary = tmux.binary(), socket = ?tmux.args(), "tmux configured");

    let command = args
        .command
        .unwrap_or_else(|| cli::Command::Show(cli::ShowOpts::default()));

    match command {
        cli::Command::Show(opts) => {
            let out = cmd_show::cmd_show(&tmux, opts.scope, opts.json)?;
            print!("{out}");
        }
        cli::Command::Dump(opts) => {
            let out = cmd_dump::cmd_dump(Arc::new(tmux), opts.json).await?;
            print!("{out}");
        }
        cli::Command::Exec(opts) => {
            cmd_exec::cmd_exec(&tmux, &opts.args, &mut std::io::stdout().lock())?;
        }
    }

    Ok(())
}
