//! Configuration loading and merging.
//!
//! Config is loaded from two sources with the local one taking precedence:
//! 1. User-level: `~/.ovhsh/config.toml` (or `$OVHSH_CONFIG_PATH`)
//! 2. Local: `<cwd>/.ovhsh/config.toml`
//!
//! Covers the interactive prompt, history size, output verbosity,
//! confirmation defaults and the domain zone cache. Uses TOML with serde.
//! Command-line flags are applied on top by the shell.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_PATH_ENV: &str = "OVHSH_CONFIG_PATH";

const DEFAULT_PROMPT: &str = "ovh> ";
const DEFAULT_HISTORY_SIZE: usize = 100;
const DEFAULT_TTL: u32 = 3600;
const DEFAULT_STORE_FILE: &str = "zones.toml";

#[derive(Debug, Clone)]
pub struct Config {
    pub shell: ShellConfig,
    pub output: OutputConfig,
    pub confirm: ConfirmConfig,
    pub domain: DomainConfig,
}

#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub prompt: String,
    pub history_size: usize,
}

#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub silent: bool,
}

#[derive(Debug, Clone)]
pub struct ConfirmConfig {
    pub assume_yes: bool,
    pub no_confirm: bool,
}

#[derive(Debug, Clone)]
pub struct DomainConfig {
    /// Zone cache file; `None` keeps the cache in memory only.
    pub store_path: Option<PathBuf>,
    pub default_ttl: u32,
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    shell: Option<RawShell>,
    output: Option<RawOutput>,
    confirm: Option<RawConfirm>,
    domain: Option<RawDomain>,
}

#[derive(Debug, Default, Deserialize)]
struct RawShell {
    prompt: Option<String>,
    #[serde(alias = "historySize")]
    history_size: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
struct RawOutput {
    silent: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
struct RawConfirm {
    #[serde(alias = "assumeYes", alias = "yes")]
    assume_yes: Option<bool>,
    #[serde(alias = "noConfirm")]
    no_confirm: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
struct RawDomain {
    #[serde(alias = "storePath")]
    store_path: Option<String>,
    #[serde(alias = "defaultTtl")]
    default_ttl: Option<u32>,
}

/// A parsed config file with the directory relative paths resolve against.
struct Layer {
    raw: RawConfig,
    dir: PathBuf,
}

fn read_toml(path: &Path) -> Option<Layer> {
    let contents = fs::read_to_string(path).ok()?;
    if contents.trim().is_empty() {
        return None;
    }
    match toml::from_str::<RawConfig>(&contents) {
        Ok(raw) => Some(Layer {
            raw,
            dir: path.parent().map(Path::to_path_buf).unwrap_or_default(),
        }),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "ignoring invalid config file");
            None
        }
    }
}

fn resolve(dir: &Path, value: &str) -> PathBuf {
    let path = PathBuf::from(value);
    if path.is_absolute() {
        path
    } else {
        dir.join(path)
    }
}

fn domain_layer(layer: Option<&Layer>) -> Option<(&RawDomain, &Path)> {
    let layer = layer?;
    let domain = layer.raw.domain.as_ref()?;
    Some((domain, layer.dir.as_path()))
}

fn merge_config(
    user: Option<Layer>,
    local: Option<Layer>,
    default_store: Option<PathBuf>,
) -> Config {
    let local_raw = local.as_ref().map(|layer| &layer.raw);
    let user_raw = user.as_ref().map(|layer| &layer.raw);

    let local_shell = local_raw.and_then(|c| c.shell.as_ref());
    let user_shell = user_raw.and_then(|c| c.shell.as_ref());
    let prompt = local_shell
        .and_then(|s| s.prompt.clone())
        .or_else(|| user_shell.and_then(|s| s.prompt.clone()))
        .unwrap_or_else(|| DEFAULT_PROMPT.to_string());
    let history_size = local_shell
        .and_then(|s| s.history_size)
        .or_else(|| user_shell.and_then(|s| s.history_size))
        .unwrap_or(DEFAULT_HISTORY_SIZE);

    let silent = local_raw
        .and_then(|c| c.output.as_ref())
        .and_then(|o| o.silent)
        .or_else(|| user_raw.and_then(|c| c.output.as_ref()).and_then(|o| o.silent))
        .unwrap_or(false);

    let local_confirm = local_raw.and_then(|c| c.confirm.as_ref());
    let user_confirm = user_raw.and_then(|c| c.confirm.as_ref());
    let assume_yes = local_confirm
        .and_then(|c| c.assume_yes)
        .or_else(|| user_confirm.and_then(|c| c.assume_yes))
        .unwrap_or(false);
    let no_confirm = local_confirm
        .and_then(|c| c.no_confirm)
        .or_else(|| user_confirm.and_then(|c| c.no_confirm))
        .unwrap_or(false);

    let local_domain = domain_layer(local.as_ref());
    let user_domain = domain_layer(user.as_ref());
    let store_path = local_domain
        .and_then(|(d, dir)| d.store_path.as_deref().map(|p| resolve(dir, p)))
        .or_else(|| {
            user_domain.and_then(|(d, dir)| d.store_path.as_deref().map(|p| resolve(dir, p)))
        })
        .or(default_store);
    let default_ttl = local_domain
        .and_then(|(d, _)| d.default_ttl)
        .or_else(|| user_domain.and_then(|(d, _)| d.default_ttl))
        .unwrap_or(DEFAULT_TTL);

    Config {
        shell: ShellConfig {
            prompt,
            history_size,
        },
        output: OutputConfig { silent },
        confirm: ConfirmConfig {
            assume_yes,
            no_confirm,
        },
        domain: DomainConfig {
            store_path,
            default_ttl,
        },
    }
}

fn config_dir_from_root(root: &Path) -> PathBuf {
    root.join(".ovhsh")
}

pub fn user_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }
    let home = dirs::home_dir()?;
    Some(config_dir_from_root(&home).join("config.toml"))
}

fn default_store_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(config_dir_from_root(&home).join(DEFAULT_STORE_FILE))
}

pub fn load_config(root: &Path) -> Config {
    let local_path = config_dir_from_root(root).join("config.toml");
    let user_path = user_config_path();

    let local_config = read_toml(&local_path);
    let user_config = user_path.and_then(|path| read_toml(&path));

    merge_config(user_config, local_config, default_store_path())
}

#[cfg(test)]
mod tests;
