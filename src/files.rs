use crate::descriptor::Descriptor;
use crate::error::{Error, Result};
use crate::host::Host;
use crate::resolver;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Copies `source` into the first existing directory of `agent_dirs`,
/// replacing any descriptor of the same file name. Returns the directory used.
pub fn install(agent_dirs: &[PathBuf], source: &Path, out: &mut impl Write) -> Result<PathBuf> {
    if !source.exists() {
        return Err(Error::io("source file does not exist"));
    }
    let file_name = source
        .file_name()
        .ok_or_else(|| Error::usage(format!("not a file: {}", source.display())))?;

    let dir = agent_dirs
        .iter()
        .find(|dir| dir.is_dir())
        .ok_or_else(|| Error::io("no launch agent directory found"))?;
    let dest = dir.join(file_name);

    if dest.exists() {
        // deleting dest would delete the source too
        if same_file(source, &dest) {
            log::debug!("{} is already in place", dest.display());
            writeln!(out, "{} installed to {}", source.display(), dir.display())?;
            return Ok(dir.clone());
        }

        log::debug!("Replacing existing {}", dest.display());
        fs::remove_file(&dest).map_err(|e| {
            log::debug!("remove {} failed: {}", dest.display(), e);
            Error::io("unable to delete existing plist")
        })?;
    }

    fs::copy(source, &dest).map_err(|e| {
        log::debug!("copy {} -> {} failed: {}", source.display(), dest.display(), e);
        Error::io("failed to copy file")
    })?;

    writeln!(out, "{} installed to {}", source.display(), dir.display())?;
    Ok(dir.clone())
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Deletes the descriptor matching `fragment`. A failed delete is reported
/// and is not an error.
pub fn remove(descriptors: &[Descriptor], fragment: &str, out: &mut impl Write) -> Result<()> {
    let descriptor = resolver::resolve(descriptors, fragment)?;

    match fs::remove_file(&descriptor.path) {
        Ok(()) => writeln!(out, "removed {}", descriptor.path.display())?,
        Err(e) => {
            log::warn!("remove {} failed: {}", descriptor.path.display(), e);
            writeln!(out, "failed to remove {}", descriptor.path.display())?;
        }
    }
    Ok(())
}

/// Writes the raw bytes of the descriptor matching `fragment` to `out`.
pub fn show(descriptors: &[Descriptor], fragment: &str, out: &mut impl Write) -> Result<()> {
    let descriptor = resolver::resolve(descriptors, fragment)?;

    let contents = fs::read(&descriptor.path).map_err(|e| {
        log::debug!("read {} failed: {}", descriptor.path.display(), e);
        Error::io("unable to read plist")
    })?;
    out.write_all(&contents)?;
    out.flush()?;
    Ok(())
}

/// Opens the descriptor matching `fragment` in `editor` and blocks until the
/// editor exits.
pub fn edit(
    host: &dyn Host,
    editor: Option<&str>,
    descriptors: &[Descriptor],
    fragment: &str,
) -> Result<()> {
    let descriptor = resolver::resolve(descriptors, fragment)?;
    let editor = editor
        .filter(|e| !e.trim().is_empty())
        .ok_or_else(|| Error::usage("EDITOR environment variable is not set"))?;

    host.edit(editor, &descriptor.path)
}
