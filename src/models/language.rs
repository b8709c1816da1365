//! Supported submission languages

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    constants::{languages, runtimes},
    error::AppError,
};

/// A language the remote executor can run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Cpp,
    Python,
    JavaScript,
    Java,
}

impl Language {
    /// Wire identifier (also the value stored on submissions)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cpp => languages::CPP,
            Self::Python => languages::PYTHON,
            Self::JavaScript => languages::JAVASCRIPT,
            Self::Java => languages::JAVA,
        }
    }

    /// Executor language name and pinned version
    pub fn runtime(&self) -> (&'static str, &'static str) {
        match self {
            Self::Cpp => runtimes::CPP,
            Self::Python => runtimes::PYTHON,
            Self::JavaScript => runtimes::JAVASCRIPT,
            Self::Java => runtimes::JAVA,
        }
    }
}

impl FromStr for Language {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            languages::CPP => Ok(Self::Cpp),
            languages::PYTHON => Ok(Self::Python),
            languages::JAVASCRIPT => Ok(Self::JavaScript),
            languages::JAVA => Ok(Self::Java),
            other => Err(AppError::UnsupportedLanguage(other.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_supported_languages() {
        for id in languages::ALL {
            let language: Language = id.parse().unwrap();
            assert_eq!(language.as_str(), *id);
        }
    }

    #[test]
    fn test_runtime_pins() {
        assert_eq!(Language::Cpp.runtime(), ("c++", "10.2.0"));
        assert_eq!(Language::Python.runtime(), ("python", "3.10.0"));
        assert_eq!(Language::JavaScript.runtime(), ("javascript", "18.15.0"));
        assert_eq!(Language::Java.runtime(), ("java", "15.0.2"));
    }

    #[test]
    fn test_unsupported_language() {
        let err = "ruby".parse::<Language>().unwrap_err();
        assert!(matches!(err, AppError::UnsupportedLanguage(ref l) if l == "ruby"));

        // Identifiers are case-sensitive
        assert!("CPP".parse::<Language>().is_err());
        assert!("c++".parse::<Language>().is_err());
    }
}
