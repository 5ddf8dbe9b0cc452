use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File extension of launchd service descriptors.
pub const EXTENSION: &str = ".plist";

/// A service descriptor on disk. Recomputed on every invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    pub name: String,
    pub path: PathBuf,
}

impl Descriptor {
    /// Builds a descriptor from a path, or `None` if the file name does not
    /// carry the descriptor extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let file_name = path.file_name()?;
        let Some(file_name) = file_name.to_str() else {
            if file_name.to_string_lossy().ends_with(EXTENSION) {
                log::debug!("Skipping descriptor with non-UTF-8 name: {}", path.display());
            }
            return None;
        };
        let name = file_name.strip_suffix(EXTENSION)?;
        Some(Self {
            name: name.to_string(),
            path: path.to_path_buf(),
        })
    }

    pub fn matches(&self, fragment: &str) -> bool {
        self.name.contains(fragment)
    }
}

/// Recursively collects descriptors under `dir`, sorted by name.
///
/// Symbolic links are followed. A missing or unreadable directory yields an
/// empty list. `max_depth` counts the children of `dir` as depth 1.
pub fn find(dir: &Path, max_depth: Option<usize>) -> Vec<Descriptor> {
    let mut walker = WalkDir::new(dir).follow_links(true).sort_by_file_name();
    if let Some(depth) = max_depth {
        walker = walker.max_depth(depth);
    }

    let mut descriptors: Vec<Descriptor> = walker
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                log::debug!("Skipping unreadable entry under {}: {}", dir.display(), err);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| Descriptor::from_path(entry.path()))
        .collect();

    descriptors.sort_by(|a, b| a.name.cmp(&b.name));
    descriptors
}

/// Collects descriptors across `dirs` in priority order, then stable-sorts the
/// combined list by name. Like-named descriptors in different directories are
/// all kept.
pub fn locate(dirs: &[PathBuf]) -> Vec<Descriptor> {
    let mut descriptors = Vec::new();
    for dir in dirs {
        let found = find(dir, None);
        log::debug!("Found {} descriptors in {}", found.len(), dir.display());
        descriptors.extend(found);
    }

    descriptors.sort_by(|a, b| a.name.cmp(&b.name));
    descriptors
}

/// Descriptors whose name contains `fragment` anywhere, case-sensitively.
pub fn matching<'a>(
    descriptors: &'a [Descriptor],
    fragment: &'a str,
) -> impl Iterator<Item = &'a Descriptor> + 'a {
    descriptors.iter().filter(move |d| d.matches(fragment))
}
