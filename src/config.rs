use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::profile::PROFILE_FILE;

const SYSTEM_AGENTS: &str = "/Library/LaunchAgents";
const SYSTEM_DAEMONS: &[&str] = &["/Library/LaunchDaemons", "/System/Library/LaunchDaemons"];
const USER_AGENTS: &str = "Library/LaunchAgents";

/// Optional settings file, `~/.config/lunchy/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Control utility invoked for load, unload and list.
    pub launchctl: String,
    /// Package manager queried for its prefix by `scan homebrew`.
    pub brew: String,
    /// Searched after the built-in descriptor directories.
    pub extra_dirs: Vec<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            launchctl: "launchctl".to_string(),
            brew: "brew".to_string(),
            extra_dirs: Vec::new(),
        }
    }
}

impl Settings {
    pub fn default_path(home: &Path) -> PathBuf {
        home.join(".config").join("lunchy").join("config.toml")
    }

    /// Reads settings from `explicit` if given, else from the default path
    /// under `home`. Only an explicit path is required to exist.
    pub fn load(explicit: Option<&Path>, home: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    bail!("Config file not found: {}", path.display());
                }
                path.to_path_buf()
            }
            None => match home.map(Self::default_path) {
                Some(path) if path.exists() => path,
                _ => return Ok(Self::default()),
            },
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let settings: Settings = toml::from_str(&content)
            .map_err(crate::error::Error::from)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        log::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}

/// Everything taken from the process environment, gathered once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// `None` when HOME is unset; per-user directories are then skipped.
    pub home: Option<PathBuf>,
    pub editor: Option<String>,
    /// Running as root; system daemon directories are searched too.
    pub elevated: bool,
    /// `None` when the working directory cannot be determined.
    pub cwd: Option<PathBuf>,
    pub settings: Settings,
}

impl Config {
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let home = env::var_os("HOME")
            .filter(|h| !h.is_empty())
            .map(PathBuf::from);
        if home.is_none() {
            log::warn!("HOME is not set, skipping {}", USER_AGENTS);
        }
        let editor = env::var("EDITOR").ok().filter(|e| !e.trim().is_empty());
        // SAFETY: geteuid has no preconditions and cannot fail.
        let elevated = unsafe { libc::geteuid() } == 0;
        let cwd = env::current_dir().ok();
        let settings = Settings::load(config_path, home.as_deref())?;

        Ok(Self {
            home,
            editor,
            elevated,
            cwd,
            settings,
        })
    }

    pub fn user_agents(&self) -> Option<PathBuf> {
        self.home.as_ref().map(|home| home.join(USER_AGENTS))
    }

    /// Descriptor directories in priority order.
    pub fn search_dirs(&self) -> Vec<PathBuf> {
        let mut dirs = vec![PathBuf::from(SYSTEM_AGENTS)];
        dirs.extend(self.user_agents());
        if self.elevated {
            dirs.extend(SYSTEM_DAEMONS.iter().map(PathBuf::from));
        }
        dirs.extend(self.settings.extra_dirs.iter().cloned());
        dirs
    }

    /// Candidate destinations for `install`; the first existing one is used.
    pub fn install_dirs(&self) -> Vec<PathBuf> {
        let mut dirs: Vec<PathBuf> = self.user_agents().into_iter().collect();
        dirs.push(PathBuf::from(SYSTEM_AGENTS));
        dirs
    }

    /// The profile is looked up in the working directory, not in HOME.
    pub fn profile_path(&self) -> Option<PathBuf> {
        self.cwd.as_ref().map(|dir| dir.join(PROFILE_FILE))
    }

    pub fn profile_exists(&self) -> bool {
        self.profile_path().map_or(false, |path| path.is_file())
    }
}
