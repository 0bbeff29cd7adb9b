//! Load configuration for nutriplan from project `.env` and XDG
//! `config.toml`, then apply to the process environment with priority:
//! **existing env > .env > XDG**. Typed [`Settings`] sit on top of the
//! merged environment.

mod settings;
mod xdg;

use std::path::Path;
use thiserror::Error;

pub use settings::{Settings, SettingsError, API_KEY_VAR, FREE_TIER_LIMIT_VAR};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("read xdg config: {0}")]
    XdgRead(std::io::Error),
    #[error("parse xdg toml: {0}")]
    XdgParse(#[from] toml::de::Error),
}

/// Applies `.env` (from `override_dir` or the current directory) and the
/// `[env]` table of `$XDG_CONFIG_HOME/nutriplan/config.toml` to the
/// process environment.
///
/// Keys already present in the environment are never overwritten, and
/// `.env` is applied before XDG, so for any key the effective priority is
/// existing env, then `.env`, then XDG. Missing files are not an error.
pub fn load_and_apply(override_dir: Option<&Path>) -> Result<(), LoadError> {
    // dotenv never overwrites variables that are already set.
    match override_dir {
        Some(dir) => {
            let _ = dotenv::from_path(dir.join(".env"));
        }
        None => {
            let _ = dotenv::dotenv();
        }
    }

    for (key, value) in xdg::load_env_map()? {
        if std::env::var(&key).is_err() {
            std::env::set_var(&key, value);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn restore_var(key: &str, prev: Option<String>) {
        match prev {
            Some(v) => env::set_var(key, v),
            None => env::remove_var(key),
        }
    }

    #[test]
    fn existing_env_wins_over_dotenv() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".env"), "NUTRIPLAN_TEST_EXISTING=from_dotenv\n").unwrap();

        env::set_var("NUTRIPLAN_TEST_EXISTING", "from_env");
        let _ = load_and_apply(Some(dir.path()));
        assert_eq!(
            env::var("NUTRIPLAN_TEST_EXISTING").as_deref(),
            Ok("from_env")
        );
        env::remove_var("NUTRIPLAN_TEST_EXISTING");
    }

    #[test]
    fn dotenv_applied_when_env_is_unset() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".env"), "NUTRIPLAN_TEST_DOTENV=from_dotenv\n").unwrap();

        env::remove_var("NUTRIPLAN_TEST_DOTENV");
        let _ = load_and_apply(Some(dir.path()));
        let val = env::var("NUTRIPLAN_TEST_DOTENV").unwrap();
        env::remove_var("NUTRIPLAN_TEST_DOTENV");
        assert_eq!(val, "from_dotenv");
    }

    #[test]
    fn dotenv_wins_over_xdg() {
        let xdg_dir = tempfile::tempdir().unwrap();
        let app_dir = xdg_dir.path().join("nutriplan");
        std::fs::create_dir_all(&app_dir).unwrap();
        std::fs::write(
            app_dir.join("config.toml"),
            "[env]\nNUTRIPLAN_TEST_PRIORITY = \"from_xdg\"\n",
        )
        .unwrap();

        let dotenv_dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dotenv_dir.path().join(".env"),
            "NUTRIPLAN_TEST_PRIORITY=from_dotenv\n",
        )
        .unwrap();

        let prev_xdg = env::var("XDG_CONFIG_HOME").ok();
        env::set_var("XDG_CONFIG_HOME", xdg_dir.path());
        env::remove_var("NUTRIPLAN_TEST_PRIORITY");

        let _ = load_and_apply(Some(dotenv_dir.path()));
        let val = env::var("NUTRIPLAN_TEST_PRIORITY").unwrap();
        env::remove_var("NUTRIPLAN_TEST_PRIORITY");
        restore_var("XDG_CONFIG_HOME", prev_xdg);

        assert_eq!(val, "from_dotenv");
    }

    #[test]
    fn xdg_applied_when_no_dotenv() {
        let xdg_dir = tempfile::tempdir().unwrap();
        let app_dir = xdg_dir.path().join("nutriplan");
        std::fs::create_dir_all(&app_dir).unwrap();
        std::fs::write(
            app_dir.join("config.toml"),
            "[env]\nNUTRIPLAN_TEST_XDG_ONLY = \"from_xdg\"\n",
        )
        .unwrap();

        let empty_dir = tempfile::tempdir().unwrap();

        let prev_xdg = env::var("XDG_CONFIG_HOME").ok();
        env::set_var("XDG_CONFIG_HOME", xdg_dir.path());
        env::remove_var("NUTRIPLAN_TEST_XDG_ONLY");

        let _ = load_and_apply(Some(empty_dir.path()));
        let val = env::var("NUTRIPLAN_TEST_XDG_ONLY").unwrap();
        env::remove_var("NUTRIPLAN_TEST_XDG_ONLY");
        restore_var("XDG_CONFIG_HOME", prev_xdg);

        assert_eq!(val, "from_xdg");
    }

    #[test]
    fn missing_files_are_not_an_error() {
        let empty_dir = tempfile::tempdir().unwrap();
        let prev_xdg = env::var("XDG_CONFIG_HOME").ok();
        env::set_var("XDG_CONFIG_HOME", empty_dir.path());

        let result = load_and_apply(Some(empty_dir.path()));
        restore_var("XDG_CONFIG_HOME", prev_xdg);

        assert!(result.is_ok());
    }

    #[test]
    fn invalid_xdg_toml_is_a_parse_error() {
        let xdg_dir = tempfile::tempdir().unwrap();
        let app_dir = xdg_dir.path().join("nutriplan");
        std::fs::create_dir_all(&app_dir).unwrap();
        std::fs::write(app_dir.join("config.toml"), "not toml [[[\n").unwrap();

        let empty_dir = tempfile::tempdir().unwrap();
        let prev_xdg = env::var("XDG_CONFIG_HOME").ok();
        env::set_var("XDG_CONFIG_HOME", xdg_dir.path());

        let result = load_and_apply(Some(empty_dir.path()));
        restore_var("XDG_CONFIG_HOME", prev_xdg);

        assert!(matches!(result, Err(LoadError::XdgParse(_))));
    }
}
