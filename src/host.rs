use crate::error::{Error, Result};
use std::path::Path;
use std::process::{Command, Output};

/// External programs the tool drives: the launchd control utility, the
/// Homebrew prefix query and the user's editor.
pub trait Host {
    fn load(&self, path: &Path) -> Result<()>;
    fn unload(&self, path: &Path) -> Result<()>;
    /// Raw tab-delimited output of `launchctl list`.
    fn list(&self) -> Result<String>;
    /// Raw output of `brew --prefix`.
    fn prefix(&self) -> Result<String>;
    /// Runs `editor` on `path` attached to the current terminal and waits.
    fn edit(&self, editor: &str, path: &Path) -> Result<()>;
}

/// Runs the real programs as blocking subprocesses.
pub struct SystemHost {
    launchctl: String,
    brew: String,
}

impl SystemHost {
    pub fn new(launchctl: impl Into<String>, brew: impl Into<String>) -> Self {
        Self {
            launchctl: launchctl.into(),
            brew: brew.into(),
        }
    }

    fn launchctl(&self, verb: &str, path: Option<&Path>) -> Result<Output> {
        let mut command = Command::new(&self.launchctl);
        command.arg(verb);
        if let Some(path) = path {
            command.arg(path);
        }
        log::debug!("Running {:?}", command);

        command
            .output()
            .map_err(|e| Error::subprocess(format!("Failed to run {}: {}", self.launchctl, e)))
    }

    fn launchctl_checked(&self, verb: &str, path: Option<&Path>) -> Result<Output> {
        let output = self.launchctl(verb, path)?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::subprocess(format!(
                "{} {} exited with {}: {}",
                self.launchctl,
                verb,
                output.status,
                stderr.trim()
            )));
        }
        Ok(output)
    }
}

impl Host for SystemHost {
    fn load(&self, path: &Path) -> Result<()> {
        self.launchctl_checked("load", Some(path)).map(|_| ())
    }

    fn unload(&self, path: &Path) -> Result<()> {
        self.launchctl_checked("unload", Some(path)).map(|_| ())
    }

    fn list(&self) -> Result<String> {
        let output = self.launchctl_checked("list", None)?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn prefix(&self) -> Result<String> {
        let mut command = Command::new(&self.brew);
        command.arg("--prefix");
        log::debug!("Running {:?}", command);

        let output = command
            .output()
            .map_err(|e| Error::subprocess(format!("Failed to run {}: {}", self.brew, e)))?;
        if !output.status.success() {
            return Err(Error::subprocess(format!(
                "{} --prefix exited with {}",
                self.brew, output.status
            )));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn edit(&self, editor: &str, path: &Path) -> Result<()> {
        let mut words = editor.split_whitespace();
        let program = words
            .next()
            .ok_or_else(|| Error::usage("EDITOR environment variable is not set"))?;

        let mut command = Command::new(program);
        command.args(words).arg(path);
        log::debug!("Running {:?}", command);

        // stdio is inherited, so the editor owns the terminal until it exits
        let status = command
            .status()
            .map_err(|e| Error::subprocess(format!("Failed to launch editor {}: {}", program, e)))?;
        if !status.success() {
            log::warn!("Editor {} exited with {}", program, status);
        }
        Ok(())
    }
}

#[cfg(test)]
pub mod fake {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::path::PathBuf;

    /// Records every call; load/unload fail for paths in `failing`.
    #[derive(Default)]
    pub struct FakeHost {
        pub calls: RefCell<Vec<String>>,
        pub failing: HashSet<PathBuf>,
        pub listing: Option<String>,
        pub prefix: Option<String>,
    }

    impl FakeHost {
        pub fn with_listing(listing: &str) -> Self {
            Self {
                listing: Some(listing.to_string()),
                ..Self::default()
            }
        }

        pub fn failing_on(paths: &[&Path]) -> Self {
            Self {
                failing: paths.iter().map(|p| p.to_path_buf()).collect(),
                ..Self::default()
            }
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        fn record(&self, verb: &str, path: &Path) -> Result<()> {
            self.calls
                .borrow_mut()
                .push(format!("{} {}", verb, path.display()));
            if self.failing.contains(path) {
                return Err(Error::subprocess(format!("{} failed", verb)));
            }
            Ok(())
        }
    }

    impl Host for FakeHost {
        fn load(&self, path: &Path) -> Result<()> {
            self.record("load", path)
        }

        fn unload(&self, path: &Path) -> Result<()> {
            self.record("unload", path)
        }

        fn list(&self) -> Result<String> {
            self.calls.borrow_mut().push("list".to_string());
            self.listing
                .clone()
                .ok_or_else(|| Error::subprocess("list failed"))
        }

        fn prefix(&self) -> Result<String> {
            self.calls.borrow_mut().push("prefix".to_string());
            self.prefix
                .clone()
                .ok_or_else(|| Error::subprocess("prefix failed"))
        }

        fn edit(&self, editor: &str, path: &Path) -> Result<()> {
            self.calls
                .borrow_mut()
                .push(format!("edit {} {}", editor, path.display()));
            Ok(())
        }
    }
}
