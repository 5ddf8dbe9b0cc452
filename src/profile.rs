use crate::descriptor::{self, Descriptor};
use crate::error::Result;
use crate::host::Host;
use crate::service::Action;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Name of the profile file looked up in the working directory.
pub const PROFILE_FILE: &str = ".lunchy";

const COMMENT: char = '#';

/// Extracts name fragments from profile text. Blank lines and `#` comments
/// are dropped; order and duplicates are kept.
pub fn parse(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(COMMENT))
        .map(String::from)
        .collect()
}

pub fn read(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)?;
    Ok(parse(&contents))
}

/// Applies `action` to every descriptor containing any fragment.
///
/// Unlike single-target commands a fragment may hit several descriptors, and
/// each hit is acted on. Failures are reported per descriptor.
pub fn apply(
    host: &dyn Host,
    descriptors: &[Descriptor],
    fragments: &[String],
    action: Action,
    out: &mut impl Write,
) -> Result<()> {
    for fragment in fragments {
        for descriptor in descriptor::matching(descriptors, fragment) {
            action.apply(host, descriptor, out)?;
        }
    }
    Ok(())
}

/// Runs `action` for the profile at `path`.
pub fn run(
    host: &dyn Host,
    path: &Path,
    search_dirs: &[PathBuf],
    action: Action,
    out: &mut impl Write,
) -> Result<()> {
    writeln!(out, "{} daemons in profile: {}", action.progress(), path.display())?;

    let fragments = read(path)?;
    log::debug!("Profile {} lists {} entries", path.display(), fragments.len());

    let descriptors = descriptor::locate(search_dirs);
    apply(host, &descriptors, &fragments, action, out)
}
