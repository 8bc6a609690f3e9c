//! config command - Get, set, or list configuration values

use std::collections::BTreeMap;

use anyhow::{bail, Context as _, Result};
use serde::Serialize;

use crate::cli::Context;
use crate::core::config::{Config, ConfigKey};
use crate::ui::output;

/// Get the effective value of a configuration key.
pub fn get(ctx: &Context, key: &str) -> Result<bool> {
    let key: ConfigKey = key.parse()?;
    let value = ctx.config.value(key);

    if ctx.json {
        output::json(&BTreeMap::from([(key.as_str(), value)]))?;
    } else {
        println!("{}", value);
    }
    Ok(true)
}

/// Set a configuration value in the global file, or the repo file with `local`.
pub fn set(ctx: &Context, key: &str, value: &str, local: bool) -> Result<bool> {
    let key: ConfigKey = key.parse()?;

    let path = if local {
        let handle = ctx.ops.handle();
        if !handle.is_repository {
            bail!(
                "--local needs a repository, but {} is not one",
                handle.absolute_path.display()
            );
        }
        let mut repo = ctx.config.repo.clone().unwrap_or_default();
        repo.set(key, value)?;
        Config::write_repo(ctx.repo_path(), &repo).context("Failed to write config")?
    } else {
        let mut global = ctx.config.global.clone();
        global.set(key, value)?;
        ctx.config
            .write_global(&global)
            .context("Failed to write config")?
    };

    tracing::debug!(key = %key, path = %path.display(), "config written");
    output::print(format!("Set {} = {}", key, value), ctx.verbosity);
    Ok(true)
}

/// List the effective value of every key.
pub fn list(ctx: &Context) -> Result<bool> {
    if ctx.json {
        let values: BTreeMap<&str, String> = ConfigKey::ALL
            .into_iter()
            .map(|key| (key.as_str(), ctx.config.value(key)))
            .collect();
        output::json(&values)?;
        return Ok(true);
    }

    for key in ConfigKey::ALL {
        println!("{} = {}", key, ctx.config.value(key));
    }
    Ok(true)
}

#[derive(Serialize)]
struct PathsView {
    global: Option<String>,
    repo: Option<String>,
}

/// Show which config files were loaded.
pub fn path(ctx: &Context) -> Result<bool> {
    let view = PathsView {
        global: ctx
            .config
            .global_config_loaded_from()
            .map(|p| p.display().to_string()),
        repo: ctx
            .config
            .repo_config_loaded_from()
            .map(|p| p.display().to_string()),
    };

    if ctx.json {
        output::json(&view)?;
        return Ok(true);
    }

    println!("global: {}", view.global.as_deref().unwrap_or("(none)"));
    println!("repo:   {}", view.repo.as_deref().unwrap_or("(none)"));
    Ok(true)
}
