//! `tmuxopt dump` — options of every scope, queried concurrently.

use std::collections::BTreeMap;
use std::sync::Arc;

use anyhow::Context;
use serde::Serialize;
use tmuxopt_tmux::{Options, ProcessRunner, Scope, Tmux, format_options};
use tokio::task::JoinSet;

#[derive(Debug, Serialize)]
struct ScopeOptions {
    scope: String,
    flags: &'static str,
    options: BTreeMap<String, String>,
}

/// Query all named scopes, one blocking task per scope.
pub async fn cmd_dump<R: ProcessRunner + 'static>(
    tmux: Arc<Tmux<R>>,
    json: bool,
) -> anyhow::Result<String> {
    let mut set = JoinSet::new();
    for scope in Scope::NAMED {
        let tmux = Arc::clone(&tmux);
        set.spawn_blocking(move || (scope, tmux.get_options(scope)));
    }

    let mut results: Vec<(Scope, Options)> = Vec::with_capacity(Scope::NAMED.len());
    while let Some(joined) = set.join_next().await {
        let (scope, result) = joined.context("show-options task panicked")?;
        let options = result.with_context(|| format!("show-options failed for scope {scope}"))?;
        tracing::debug!(%scope, count = options.len(), "scope collected");
        results.push((scope, options));
    }
    results.sort_by_key(|(scope, _)| scope.as_u32());

    if json {
        let dump: Vec<ScopeOptions> = results
            .into_iter()
            .map(|(scope, options)| ScopeOptions {
                scope: scope.to_string(),
                flags: scope.flags(),
                options: options.into_iter().collect(),
            })
            .collect();
        return Ok(serde_json::to_string_pretty(&dump)? + "\n");
    }

    let mut out = String::new();
    for (scope, options) in &results {
        out.push_str(&format!("# {scope}\n"));
        out.push_str(&format_options(options));
    }
    Ok(out)
}
