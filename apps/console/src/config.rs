use std::{fs, io::ErrorKind, path::Path};

use anyhow::Context;
use client_core::DEFAULT_COLLECTION_URL;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_url: String,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_COLLECTION_URL.into(),
            log_filter: "info".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    api_url: Option<String>,
    log_filter: Option<String>,
}

impl Settings {
    /// Command-line flags win over everything loaded from file or environment.
    pub fn with_overrides(mut self, api_url: Option<String>, log_filter: Option<String>) -> Self {
        if let Some(v) = api_url {
            self.api_url = v;
        }
        if let Some(v) = log_filter {
            self.log_filter = v;
        }
        self
    }
}

pub fn load_settings(path: &Path) -> anyhow::Result<Settings> {
    load_settings_with(path, |key| std::env::var(key).ok())
}

/// Defaults, then the optional TOML file, then environment variables.
pub fn load_settings_with(
    path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    let file_cfg = match fs::read_to_string(path) {
        Ok(raw) => toml::from_str::<FileSettings>(&raw)
            .with_context(|| format!("invalid settings file '{}'", path.display()))?,
        Err(err) if err.kind() == ErrorKind::NotFound => FileSettings::default(),
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read settings file '{}'", path.display()))
        }
    };
    if let Some(v) = file_cfg.api_url {
        settings.api_url = v;
    }
    if let Some(v) = file_cfg.log_filter {
        settings.log_filter = v;
    }

    if let Some(v) = env("PRODUTOS_API_URL") {
        settings.api_url = v;
    }
    if let Some(v) = env("APP__API_URL") {
        settings.api_url = v;
    }
    if let Some(v) = env("APP__LOG_FILTER") {
        settings.log_filter = v;
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashMap,
        env,
        time::{SystemTime, UNIX_EPOCH},
    };

    use super::*;

    fn temp_settings_file(label: &str, contents: &str) -> std::path::PathBuf {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let path = env::temp_dir().join(format!("produtos_console_{label}_{suffix}.toml"));
        fs::write(&path, contents).expect("write settings file");
        path
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn missing_file_yields_defaults() {
        let settings =
            load_settings_with(Path::new("/nonexistent/console.toml"), no_env).expect("settings");
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.api_url, "http://localhost:3000/api/produtos");
    }

    #[test]
    fn file_values_override_defaults() {
        let path = temp_settings_file(
            "file",
            "api_url = \"http://estoque.local/api/produtos\"\nlog_filter = \"debug\"\n",
        );
        let settings = load_settings_with(&path, no_env).expect("settings");
        fs::remove_file(&path).expect("cleanup");

        assert_eq!(settings.api_url, "http://estoque.local/api/produtos");
        assert_eq!(settings.log_filter, "debug");
    }

    #[test]
    fn environment_overrides_file_and_flags_override_environment() {
        let path = temp_settings_file("env", "api_url = \"http://from-file/api/produtos\"\n");
        let env_vars = HashMap::from([
            ("PRODUTOS_API_URL", "http://from-env/api/produtos"),
            ("APP__LOG_FILTER", "warn"),
        ]);
        let settings = load_settings_with(&path, |key| env_vars.get(key).map(|v| v.to_string()))
            .expect("settings");
        fs::remove_file(&path).expect("cleanup");

        assert_eq!(settings.api_url, "http://from-env/api/produtos");
        assert_eq!(settings.log_filter, "warn");

        let settings = settings.with_overrides(Some("http://from-flag/api/produtos".into()), None);
        assert_eq!(settings.api_url, "http://from-flag/api/produtos");
        assert_eq!(settings.log_filter, "warn");
    }

    #[test]
    fn malformed_file_is_rejected() {
        let path = temp_settings_file("malformed", "api_url = [not toml");
        let err = load_settings_with(&path, no_env).expect_err("must fail");
        fs::remove_file(&path).expect("cleanup");

        assert!(err.to_string().contains("invalid settings file"));
    }
}
