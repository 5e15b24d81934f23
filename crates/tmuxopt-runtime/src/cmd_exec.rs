//! `tmuxopt exec` — generic passthrough.

use std::io::Write;

use anyhow::Context;
use tmuxopt_tmux::{ProcessRunner, Tmux};

/// Run `args` through tmux and copy the raw output to `out`.
pub fn cmd_exec<R: ProcessRunner>(
    tmux: &Tmux<R>,
    args: &[String],
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    let output = tmux
        .exec(&args)
        .with_context(|| format!("tmux {} failed", args.join(" ")))?;
    out.write_all(&output)?;
    out.flush()?;
    Ok(())
}
