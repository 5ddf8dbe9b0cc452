use crate::descriptor::Descriptor;
use crate::error::{Error, Result};
use crate::host::Host;
use std::collections::HashSet;
use std::io::Write;

/// Third column of the `launchctl list` header row.
const HEADER_LABEL: &str = "Label";

/// Prints the `launchctl list` rows that belong to installed descriptors,
/// optionally narrowed to labels containing `filter`.
pub fn status(
    host: &dyn Host,
    descriptors: &[Descriptor],
    filter: Option<&str>,
    out: &mut impl Write,
) -> Result<()> {
    let listing = host.list().map_err(|e| {
        log::debug!("launchctl list failed: {}", e);
        Error::subprocess("failed to get process list")
    })?;

    let installed: HashSet<&str> = descriptors.iter().map(|d| d.name.as_str()).collect();
    for row in filter_rows(&listing, &installed, filter) {
        writeln!(out, "{}", row)?;
    }
    Ok(())
}

/// Selects rows from `launchctl list` output.
///
/// Rows are `PID\tStatus\tLabel`. The header row is always kept. A data row is
/// kept when its label is installed and, if `filter` is given, contains it.
/// Rows with fewer than three fields are skipped.
pub fn filter_rows<'a>(
    listing: &'a str,
    installed: &HashSet<&str>,
    filter: Option<&str>,
) -> Vec<&'a str> {
    let mut rows = Vec::new();

    for line in listing.trim().lines() {
        let Some(label) = line.split('\t').nth(2) else {
            log::debug!("Skipping malformed launchctl row: {:?}", line);
            continue;
        };

        if label == HEADER_LABEL {
            rows.push(line);
            continue;
        }

        if let Some(fragment) = filter {
            if !label.contains(fragment) {
                continue;
            }
        }

        if installed.contains(label) {
            rows.push(line);
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::fake::FakeHost;
    use std::path::PathBuf;

    const LISTING: &str = "PID\tStatus\tLabel\n\
                           123\t0\ta\n\
                           -\t0\tb\n\
                           456\t78\tc\n";

    fn installed() -> Vec<Descriptor> {
        ["a", "c"]
            .iter()
            .map(|name| Descriptor {
                name: name.to_string(),
                path: PathBuf::from(format!("/agents/{}.plist", name)),
            })
            .collect()
    }

    fn run(host: &FakeHost, filter: Option<&str>) -> Result<String> {
        let mut out = Vec::new();
        status(host, &installed(), filter, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_only_installed_rows_are_shown() {
        let host = FakeHost::with_listing(LISTING);
        assert_eq!(
            run(&host, None).unwrap(),
            "PID\tStatus\tLabel\n123\t0\ta\n456\t78\tc\n"
        );
    }

    #[test]
    fn test_filter_cannot_reveal_uninstalled_rows() {
        let host = FakeHost::with_listing(LISTING);
        assert_eq!(run(&host, Some("b")).unwrap(), "PID\tStatus\tLabel\n");
    }

    #[test]
    fn test_filter_narrows_installed_rows() {
        let host = FakeHost::with_listing(LISTING);
        assert_eq!(run(&host, Some("c")).unwrap(), "PID\tStatus\tLabel\n456\t78\tc\n");
    }

    #[test]
    fn test_label_must_match_descriptor_name_exactly() {
        let installed: HashSet<&str> = ["com.foo"].into_iter().collect();
        let listing = "1\t0\tcom.foo.helper\n2\t0\tcom.foo\n";
        assert_eq!(filter_rows(listing, &installed, None), vec!["2\t0\tcom.foo"]);
    }

    #[test]
    fn test_malformed_rows_are_skipped() {
        let installed: HashSet<&str> = ["a"].into_iter().collect();
        let listing = "PID\tStatus\tLabel\nshort row\n1\t0\n2\t0\ta\n";
        assert_eq!(
            filter_rows(listing, &installed, None),
            vec!["PID\tStatus\tLabel", "2\t0\ta"]
        );
    }

    #[test]
    fn test_list_failure_is_fatal() {
        let host = FakeHost::default();
        let err = run(&host, None).unwrap_err();
        assert_eq!(err.to_string(), "failed to get process list");
    }
}
