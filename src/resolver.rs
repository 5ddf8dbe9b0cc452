use crate::descriptor::Descriptor;
use crate::error::{Error, Result};

/// Resolves `fragment` to exactly one descriptor.
///
/// Every single-target command goes through here. Zero matches fail with
/// `NotFound`, two or more with `Ambiguous`; the first match is never picked
/// silently.
pub fn resolve<'a>(descriptors: &'a [Descriptor], fragment: &str) -> Result<&'a Descriptor> {
    let candidates: Vec<&Descriptor> = descriptors.iter().filter(|d| d.matches(fragment)).collect();
    log::debug!("{} descriptors match {:?}", candidates.len(), fragment);

    match candidates.as_slice() {
        [] => Err(Error::NotFound(fragment.to_string())),
        [single] => Ok(*single),
        many => Err(Error::Ambiguous {
            fragment: fragment.to_string(),
            candidates: many.iter().map(|d| d.name.clone()).collect(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn descriptors() -> Vec<Descriptor> {
        ["com.foo.bar", "com.foo.baz"]
            .iter()
            .map(|name| Descriptor {
                name: name.to_string(),
                path: PathBuf::from(format!("/Library/LaunchAgents/{}.plist", name)),
            })
            .collect()
    }

    #[test]
    fn test_unique_match() {
        let all = descriptors();
        let found = resolve(&all, "bar").unwrap();
        assert_eq!(found.name, "com.foo.bar");
        assert_eq!(
            found.path,
            PathBuf::from("/Library/LaunchAgents/com.foo.bar.plist")
        );
    }

    #[test]
    fn test_ambiguous_lists_all_candidates() {
        let all = descriptors();
        match resolve(&all, "com.foo") {
            Err(Error::Ambiguous {
                fragment,
                candidates,
            }) => {
                assert_eq!(fragment, "com.foo");
                assert_eq!(candidates, vec!["com.foo.bar", "com.foo.baz"]);
            }
            other => panic!("expected ambiguity, got {:?}", other),
        }
    }

    #[test]
    fn test_not_found() {
        let all = descriptors();
        assert!(matches!(resolve(&all, "zzz"), Err(Error::NotFound(f)) if f == "zzz"));
        assert!(matches!(resolve(&[], "bar"), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_case_sensitive() {
        let all = descriptors();
        assert!(matches!(resolve(&all, "BAR"), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_same_name_in_two_directories_is_ambiguous() {
        let all = vec![
            Descriptor {
                name: "com.dup".to_string(),
                path: PathBuf::from("/Library/LaunchAgents/com.dup.plist"),
            },
            Descriptor {
                name: "com.dup".to_string(),
                path: PathBuf::from("/Users/me/Library/LaunchAgents/com.dup.plist"),
            },
        ];
        assert!(matches!(resolve(&all, "com.dup"), Err(Error::Ambiguous { .. })));
    }
}
