use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULTS: &str = include_str!("../../config/default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub advice: AdviceConfig,
    pub pointcut: PointcutConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, overridden by `RUST_LOG` when set.
    pub filter: String,
    /// Log to a daily-rolling file here instead of stdout.
    #[serde(default)]
    pub directory: Option<String>,
    pub file_name: String,
}

/// Which advices get registered around advised calls.
#[derive(Debug, Clone, Deserialize)]
pub struct AdviceConfig {
    pub around: bool,
    pub before: bool,
    pub after_returning: bool,
    pub after_throwing: bool,
    pub after: bool,
    /// Register the around advice before the single-purpose ones, making it
    /// the outermost layer.
    pub around_first: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PointcutConfig {
    /// Module path prefix of advised calls.
    pub scope: String,
    /// Type name suffix of advised calls.
    pub type_suffix: String,
}

impl AppConfig {
    /// Load configuration with layering: defaults → user config.
    ///
    /// An explicit path must exist. Without one, the per-user config file is
    /// used when present.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let user_path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => user_config_path().filter(|path| path.exists()),
        };

        let mut config = match user_path {
            Some(path) => {
                let user_str = fs::read_to_string(&path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                Self::layered(&user_str)
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            None => Self::defaults()?,
        };

        config.expand_home()?;
        Ok(config)
    }

    pub fn defaults() -> Result<Self> {
        Ok(toml::from_str(DEFAULTS)?)
    }

    /// Parse `user` on top of the embedded defaults. Tables merge key by key,
    /// any other value in `user` replaces the default.
    pub fn layered(user: &str) -> Result<Self> {
        let mut base: toml::Value = toml::from_str(DEFAULTS)?;
        let overlay: toml::Value = toml::from_str(user)?;
        merge(&mut base, overlay);
        Ok(base.try_into()?)
    }

    pub fn log_directory(&self) -> Option<PathBuf> {
        self.logging.directory.as_ref().map(PathBuf::from)
    }

    fn expand_home(&mut self) -> Result<()> {
        let Some(dir) = self.logging.directory.as_mut() else {
            return Ok(());
        };
        if dir.starts_with('~') {
            let home = dirs_home().ok_or_else(|| anyhow!("cannot determine home directory"))?;
            *dir = dir.replacen('~', &home.to_string_lossy(), 1);
        }
        Ok(())
    }
}

pub fn user_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "advice-kit")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

fn merge(base: &mut toml::Value, overlay: toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(base), toml::Value::Table(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(existing) => merge(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

fn dirs_home() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|d| d.home_dir().to_path_buf())
}
