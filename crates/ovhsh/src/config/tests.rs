use super::{load_config, user_config_path, CONFIG_PATH_ENV};
use std::env;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::test_utils::{env_lock, EnvVarGuard};

fn write_config(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create config dir");
    }
    fs::write(path, contents).expect("write config");
}

#[test]
fn load_config_uses_defaults_when_empty() {
    let _guard = env_lock();
    let home = TempDir::new().expect("temp home");
    let _home = EnvVarGuard::set("HOME", home.path());
    env::remove_var(CONFIG_PATH_ENV);

    let cwd = TempDir::new().expect("temp cwd");
    let config = load_config(cwd.path());

    assert_eq!(config.shell.prompt, "ovh> ");
    assert_eq!(config.shell.history_size, 100);
    assert!(!config.output.silent);
    assert!(!config.confirm.assume_yes);
    assert!(!config.confirm.no_confirm);
    assert_eq!(config.domain.default_ttl, 3600);
    assert_eq!(
        config.domain.store_path,
        Some(home.path().join(".ovhsh").join("zones.toml"))
    );
}

#[test]
fn load_config_merges_user_and_local() {
    let _guard = env_lock();
    let home = TempDir::new().expect("temp home");
    let _home = EnvVarGuard::set("HOME", home.path());
    env::remove_var(CONFIG_PATH_ENV);

    write_config(
        &home.path().join(".ovhsh").join("config.toml"),
        r#"
[shell]
prompt = "eu> "
history_size = 20

[output]
silent = true

[confirm]
assume_yes = true

[domain]
store_path = "cache/zones.toml"
default_ttl = 600
"#,
    );

    let cwd = TempDir::new().expect("temp cwd");
    write_config(
        &cwd.path().join(".ovhsh").join("config.toml"),
        r#"
[shell]
prompt = "local> "

[confirm]
noConfirm = true

[domain]
defaultTtl = 60
"#,
    );

    let config = load_config(cwd.path());

    assert_eq!(config.shell.prompt, "local> ");
    assert_eq!(config.shell.history_size, 20);
    assert!(config.output.silent);
    assert!(config.confirm.assume_yes);
    assert!(config.confirm.no_confirm);
    assert_eq!(config.domain.default_ttl, 60);
    assert_eq!(
        config.domain.store_path,
        Some(home.path().join(".ovhsh").join("cache").join("zones.toml"))
    );
}

#[test]
fn config_path_env_overrides_home() {
    let _guard = env_lock();
    let home = TempDir::new().expect("temp home");
    let _home = EnvVarGuard::set("HOME", home.path());
    let elsewhere = TempDir::new().expect("temp config");
    let config_path = elsewhere.path().join("shell.toml");
    let _config = EnvVarGuard::set(CONFIG_PATH_ENV, &config_path);

    write_config(&config_path, "[shell]\nprompt = \"ca> \"\n");

    assert_eq!(user_config_path(), Some(config_path));
    let cwd = TempDir::new().expect("temp cwd");
    assert_eq!(load_config(cwd.path()).shell.prompt, "ca> ");
}

#[test]
fn invalid_config_falls_back_to_defaults() {
    let _guard = env_lock();
    let home = TempDir::new().expect("temp home");
    let _home = EnvVarGuard::set("HOME", home.path());
    env::remove_var(CONFIG_PATH_ENV);

    write_config(
        &home.path().join(".ovhsh").join("config.toml"),
        "[shell\nprompt = ",
    );

    let cwd = TempDir::new().expect("temp cwd");
    let config = load_config(cwd.path());
    assert_eq!(config.shell.prompt, "ovh> ");
}
