use crate::descriptor::{self, Descriptor};
use crate::host::Host;
use std::path::{Path, PathBuf};

const DEFAULT_PREFIX: &str = "/usr/local";

/// Formula plists live at `Cellar/<formula>/<version>/<name>.plist`.
const CELLAR_DEPTH: usize = 3;

/// Root and depth limit for a `scan` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanTarget {
    pub root: PathBuf,
    pub max_depth: Option<usize>,
}

pub fn is_alias(arg: &str) -> bool {
    matches!(arg, "homebrew" | "Homebrew")
}

/// Homebrew's Cellar, under whatever `brew --prefix` reports.
pub fn cellar(host: &dyn Host) -> PathBuf {
    let prefix = match host.prefix() {
        Ok(output) if !output.trim().is_empty() => output.trim().to_string(),
        Ok(_) => DEFAULT_PREFIX.to_string(),
        Err(e) => {
            log::debug!("brew --prefix failed, using {}: {}", DEFAULT_PREFIX, e);
            DEFAULT_PREFIX.to_string()
        }
    };
    Path::new(&prefix).join("Cellar")
}

/// Maps a `scan` argument to a directory to search. `homebrew` resolves to
/// the Cellar with a shallow depth limit; anything else is a plain path.
pub fn scan_target(host: &dyn Host, arg: &str) -> ScanTarget {
    if is_alias(arg) {
        ScanTarget {
            root: cellar(host),
            max_depth: Some(CELLAR_DEPTH),
        }
    } else {
        ScanTarget {
            root: PathBuf::from(arg),
            max_depth: None,
        }
    }
}

pub fn scan(host: &dyn Host, arg: &str) -> Vec<Descriptor> {
    let target = scan_target(host, arg);
    log::debug!("Scanning {} (depth {:?})", target.root.display(), target.max_depth);
    descriptor::find(&target.root, target.max_depth)
}
