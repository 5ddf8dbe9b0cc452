use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// Missing or invalid command-line arguments.
    Usage(String),
    /// No descriptor name contains the fragment.
    NotFound(String),
    /// More than one descriptor name contains the fragment.
    Ambiguous {
        fragment: String,
        candidates: Vec<String>,
    },
    Io(String),
    Subprocess(String),
    Config(String),
}

impl Error {
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    pub fn subprocess(message: impl Into<String>) -> Self {
        Self::Subprocess(message.into())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Usage(message) | Error::Io(message) | Error::Subprocess(message) => {
                write!(f, "{}", message)
            }
            Error::NotFound(fragment) => {
                write!(f, "no launch agent found matching: {}", fragment)
            }
            Error::Ambiguous {
                fragment,
                candidates,
            } => {
                write!(
                    f,
                    "multiple launch agents found matching: {}\n\nmatches found are:",
                    fragment
                )?;
                for name in candidates {
                    write!(f, "\n{}", name)?;
                }
                Ok(())
            }
            Error::Config(message) => write!(f, "Config error: {}", message),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(format!("IO error: {}", err))
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(format!("TOML error: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambiguous_lists_every_candidate() {
        let err = Error::Ambiguous {
            fragment: "com.foo".to_string(),
            candidates: vec!["com.foo.bar".to_string(), "com.foo.baz".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "multiple launch agents found matching: com.foo\n\nmatches found are:\ncom.foo.bar\ncom.foo.baz"
        );
    }

    #[test]
    fn test_not_found_message() {
        let err = Error::NotFound("zzz".to_string());
        assert_eq!(err.to_string(), "no launch agent found matching: zzz");
    }
}
