//! `tmuxopt show` — options of a single scope.

use std::collections::BTreeMap;

use anyhow::Context;
use tmuxopt_tmux::{Options, ProcessRunner, Scope, Tmux, format_options};

/// Query one scope and render it as `show-options` lines or JSON.
pub fn cmd_show<R: ProcessRunner>(
    tmux: &Tmux<R>,
    scope: Scope,
    json: bool,
) -> anyhow::Result<String> {
    let options = tmux
        .get_options(scope)
        .with_context(|| format!("show-options failed for scope {scope}"))?;
    render(&options, json)
}

pub(crate) fn render(options: &Options, json: bool) -> anyhow::Result<String> {
    if json {
        let sorted: BTreeMap<&str, &str> = options
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        Ok(serde_json::to_string_pretty(&sorted)? + "\n")
    } else {
        Ok(format_options(options))
    }
}
